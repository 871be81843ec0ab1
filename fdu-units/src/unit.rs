//! Unit identifiers and conversion errors

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Which end of a conversion a unit was supplied for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSide {
    /// The unit the value is currently expressed in
    Source,
    /// The unit the value is being converted to
    Target,
}

impl fmt::Display for UnitSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitSide::Source => write!(f, "unit"),
            UnitSide::Target => write!(f, "output unit"),
        }
    }
}

/// Errors that can occur during unit conversion
///
/// `unit` always holds the normalised spelling that the lookup failed on.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConversionError {
    #[error("Unknown {side}: {unit}")]
    UnrecognizedUnit { side: UnitSide, unit: String },
}

impl ConversionError {
    pub fn unknown_source(unit: impl Into<String>) -> Self {
        ConversionError::UnrecognizedUnit { side: UnitSide::Source, unit: unit.into() }
    }

    pub fn unknown_target(unit: impl Into<String>) -> Self {
        ConversionError::UnrecognizedUnit { side: UnitSide::Target, unit: unit.into() }
    }

    /// The side of the conversion that was not recognised
    pub fn side(&self) -> UnitSide {
        match self {
            ConversionError::UnrecognizedUnit { side, .. } => *side,
        }
    }

    /// The offending (normalised) unit
    pub fn unit(&self) -> &str {
        match self {
            ConversionError::UnrecognizedUnit { unit, .. } => unit,
        }
    }
}
