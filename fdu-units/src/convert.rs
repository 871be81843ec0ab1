//! Unit normalisation and conversion
//!
//! `convert` normalises both units, short-circuits identical units, then tries
//! the temperature table before the linear table. There is no chaining: a pair
//! converts only if the tables list it directly.

use tracing::trace;

use crate::rule::{Rule, Transform};
use crate::unit::ConversionError;
use crate::units;

/// Normalise a unit to its canonical spelling.
///
/// Unknown units are returned unchanged.
pub fn normalize(unit: &str) -> &str {
    units::alias(unit).unwrap_or(unit)
}

/// Look up the linear multiplier for the units provided.
pub fn multiplier(unit: &str, output: &str) -> Result<f64, ConversionError> {
    let unit = normalize(unit);
    let output = normalize(output);
    if units::multipliers(unit).is_none() {
        return Err(ConversionError::unknown_source(unit));
    }
    units::find_multiplier(unit, output).ok_or_else(|| ConversionError::unknown_target(output))
}

/// Look up the temperature transform for the units provided.
pub fn function(unit: &str, output: &str) -> Result<Transform, ConversionError> {
    let unit = normalize(unit);
    let output = normalize(output);
    if units::functions(unit).is_none() {
        return Err(ConversionError::unknown_source(unit));
    }
    units::find_function(unit, output).ok_or_else(|| ConversionError::unknown_target(output))
}

/// The rule `convert` would apply for this pair.
///
/// Identical units yield `Rule::Linear(1.0)` whether or not they are known.
pub fn rule(unit: &str, output: &str) -> Result<Rule, ConversionError> {
    let unit = normalize(unit);
    let output = normalize(output);
    if unit == output {
        return Ok(Rule::Linear(1.0));
    }
    if units::functions(unit).is_some() {
        return function(unit, output).map(Rule::Nonlinear);
    }
    if units::multipliers(unit).is_some() {
        return multiplier(unit, output).map(Rule::Linear);
    }
    Err(ConversionError::unknown_source(unit))
}

/// Convert a value from one unit to another.
pub fn convert(value: f64, unit: &str, output: &str) -> Result<f64, ConversionError> {
    let unit = normalize(unit);
    let output = normalize(output);
    if unit == output {
        trace!(unit, "identity conversion");
        return Ok(value);
    }
    if units::functions(unit).is_some() {
        let transform = function(unit, output)?;
        trace!(unit, output, ?transform, "nonlinear conversion");
        return Ok(transform.apply(value));
    }
    if units::multipliers(unit).is_some() {
        let multiplier = multiplier(unit, output)?;
        trace!(unit, output, multiplier, "linear conversion");
        return Ok(value * multiplier);
    }
    Err(ConversionError::unknown_source(unit))
}

/// Preferred display unit for `unit`, if it has one.
pub fn standard(unit: &str) -> Option<&'static str> {
    units::standard_unit(normalize(unit))
}

/// Convert `value` into the standard unit of `unit`.
///
/// A unit with no standard entry is its own standard, so the value comes back
/// unchanged alongside the canonical spelling.
pub fn to_standard(value: f64, unit: &str) -> Result<(f64, &str), ConversionError> {
    let unit = normalize(unit);
    match units::standard_unit(unit) {
        Some(preferred) => Ok((convert(value, unit, preferred)?, preferred)),
        None => Ok((value, unit)),
    }
}

/// Canonical units reachable from `unit` in one step, in table order.
pub fn targets(unit: &str) -> Vec<&'static str> {
    let unit = normalize(unit);
    if let Some(rules) = units::functions(unit) {
        return rules.iter().map(|(target, _)| *target).collect();
    }
    units::multipliers(unit)
        .map(|rules| rules.iter().map(|(target, _)| *target).collect())
        .unwrap_or_default()
}

/// Whether `convert` would succeed for this pair.
pub fn is_convertible(unit: &str, output: &str) -> bool {
    rule(unit, output).is_ok()
}
