//! Conversion rules between a pair of units

use serde::{Deserialize, Serialize};

/// Non-proportional transform used for temperature scales
///
/// Evaluated as `(value + shift) * numerator / denominator + offset`, in that
/// order, so results match the reference formulas bit for bit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Transform {
    Affine {
        shift: f64,
        numerator: f64,
        denominator: f64,
        offset: f64,
    },
}

impl Transform {
    /// Scale first, then add `offset` (e.g. C -> F)
    pub const fn scale_then_offset(numerator: f64, denominator: f64, offset: f64) -> Self {
        Transform::Affine { shift: 0.0, numerator, denominator, offset }
    }

    /// Add `shift` first, then scale (e.g. F -> C)
    pub const fn shift_then_scale(shift: f64, numerator: f64, denominator: f64) -> Self {
        Transform::Affine { shift, numerator, denominator, offset: 0.0 }
    }

    /// Pure offset with no scaling (e.g. C -> K)
    pub const fn offset(offset: f64) -> Self {
        Transform::Affine { shift: 0.0, numerator: 1.0, denominator: 1.0, offset }
    }

    pub fn apply(&self, value: f64) -> f64 {
        match *self {
            Transform::Affine { shift, numerator, denominator, offset } => {
                let mut v = value;
                if shift != 0.0 {
                    v += shift;
                }
                if numerator != 1.0 || denominator != 1.0 {
                    v = v * numerator / denominator;
                }
                if offset != 0.0 {
                    v += offset;
                }
                v
            }
        }
    }
}

/// A directed conversion from one canonical unit to another
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "rule", rename_all = "lowercase")]
pub enum Rule {
    /// `target = source * multiplier`
    Linear(f64),
    /// Affine with a non-zero intercept
    Nonlinear(Transform),
}

impl Rule {
    pub fn apply(&self, value: f64) -> f64 {
        match self {
            Rule::Linear(multiplier) => value * multiplier,
            Rule::Nonlinear(transform) => transform.apply(value),
        }
    }

    pub fn is_linear(&self) -> bool {
        matches!(self, Rule::Linear(_))
    }
}
