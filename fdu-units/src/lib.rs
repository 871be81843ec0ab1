//! FDU Units - Flight data unit normalisation and conversion
//!
//! Maps the many spellings found in sensor metadata ("lbs/hr", "kts",
//! "degree C") onto canonical units and converts values between pairs of
//! units listed in a closed table.
//!
//! Categories:
//! - Flow (lb/h, kg/h, t/h)
//! - Frequency (KHz, MHz, GHz)
//! - Length (ft, m, km, mi, nm)
//! - Mass (lb, kg, t)
//! - Pressure (inHg, mB, psi)
//! - Speed (kt, mph, fpm, ft/s)
//! - Temperature (C, F, K)
//! - Time (h, min, s)
//! - Volume (pt (US), qt (US))
//! - Deviation indicators (gs-ddm, loc-ddm, mV, dots)
//!
//! ```
//! use fdu_units::{convert, normalize};
//!
//! assert_eq!(normalize("kts"), "kt");
//! assert_eq!(convert(0.0, "degree C", "F").unwrap(), 32.0);
//! assert!(convert(1.0, "kt", "m").is_err());
//! ```

mod catalog;
mod convert;
mod rule;
mod unit;
pub mod units;

pub use catalog::{Catalog, CatalogAlias, CatalogRule, CatalogStandard};
pub use convert::{
    convert, function, is_convertible, multiplier, normalize, rule, standard, targets, to_standard,
};
pub use rule::{Rule, Transform};
pub use unit::{ConversionError, UnitSide};
