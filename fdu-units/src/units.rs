//! Unit tables - aliases, linear multipliers, temperature transforms and
//! preferred display units
//!
//! All tables are plain statics in declaration order. Values are kept exactly
//! as published by the reference tables, so a multiplier and its reverse are
//! not always exact reciprocals (worst case `ft`/`mi`, about 2e-5 relative).

use crate::rule::Transform;

/// Outgoing linear rules for one source unit
pub type Multipliers = &'static [(&'static str, f64)];

/// Outgoing temperature transforms for one source unit
pub type Functions = &'static [(&'static str, Transform)];

/// Linear conversions: source -> target -> multiplier
pub static CONVERSION_MULTIPLIERS: &[(&str, Multipliers)] = &[
    // Flow (mass)
    ("lb/h", &[("kg/h", 0.45359237), ("t/h", 0.00045359237)]),
    ("kg/h", &[("lb/h", 2.204622622), ("t/h", 0.001)]),
    ("t/h", &[("lb/h", 2204.622621849), ("kg/h", 1000.0)]),
    // Frequency
    ("KHz", &[("MHz", 0.001), ("GHz", 0.000001)]),
    ("MHz", &[("KHz", 1000.0), ("GHz", 0.001)]),
    ("GHz", &[("KHz", 1000000.0), ("MHz", 1000.0)]),
    // Length
    ("ft", &[("m", 0.3048), ("km", 0.0003048), ("mi", 0.00018939), ("nm", 0.000164579)]),
    ("m", &[("ft", 3.280839895), ("km", 0.001), ("mi", 0.000621371), ("nm", 0.000539957)]),
    ("km", &[("ft", 3280.839895013), ("m", 1000.0), ("mi", 0.621371192), ("nm", 0.539956803)]),
    ("mi", &[("ft", 5280.0), ("m", 1609.344), ("km", 1.609344), ("nm", 0.868976242)]),
    ("nm", &[("ft", 6076.11548554), ("m", 1852.0), ("km", 1.852), ("mi", 1.150779448)]),
    // Mass
    ("lb", &[("kg", 0.45359237), ("t", 0.00045359237)]),
    ("kg", &[("lb", 2.204622622), ("t", 0.001)]),
    ("t", &[("lb", 2204.622621849), ("kg", 1000.0)]),
    // Pressure
    ("inHg", &[("mB", 33.86389), ("psi", 0.491154221)]),
    ("mB", &[("inHg", 0.02952998), ("psi", 0.014503774)]),
    ("psi", &[("inHg", 2.036020375), ("mB", 68.94757)]),
    // Speed
    ("kt", &[("mph", 1.150778454), ("fpm", 101.268503937)]),
    ("mph", &[("kt", 0.868976993), ("fpm", 88.0)]),
    ("fpm", &[("kt", 0.009874739), ("mph", 0.011363636), ("ft/s", 60.0)]),
    ("ft/s", &[("fpm", 1.0 / 60.0)]),
    // Time
    ("h", &[("min", 60.0), ("s", 3600.0)]),
    ("min", &[("h", 0.016666667), ("s", 60.0)]),
    ("s", &[("h", 0.000277778), ("min", 0.016666667)]),
    // Volume
    ("pt (US)", &[("qt (US)", 0.5)]),
    ("qt (US)", &[("pt (US)", 2.0)]),
    // Deviation indicators
    ("gs-ddm", &[("dots", 11.428571428571429)]),
    ("loc-ddm", &[("dots", 12.903225806451614)]),
    ("mV", &[("dots", 0.01333333333333333)]),
    ("dots", &[("gs-ddm", 0.0875), ("loc-ddm", 0.0775), ("mV", 75.0)]),
];

/// Non-proportional conversions: source -> target -> transform
pub static CONVERSION_FUNCTIONS: &[(&str, Functions)] = &[
    // Temperature
    ("C", &[
        ("F", Transform::scale_then_offset(9.0, 5.0, 32.0)),
        ("K", Transform::offset(273.15)),
    ]),
    ("F", &[
        ("C", Transform::shift_then_scale(-32.0, 5.0, 9.0)),
        ("K", Transform::shift_then_scale(459.67, 5.0, 9.0)),
    ]),
    ("K", &[
        ("C", Transform::offset(-273.15)),
        ("F", Transform::scale_then_offset(9.0, 5.0, -459.67)),
    ]),
];

/// Preferred display unit for a family of equivalent units
pub static STANDARD_CONVERSIONS: &[(&str, &str)] = &[
    // Flow (mass)
    ("lb/h", "kg/h"),
    ("t/h", "kg/h"),
    // Length
    ("mi", "nm"),
    // Mass
    ("lb", "kg"),
    ("t", "kg"),
    // Pressure
    ("inHg", "mB"),
    // Temperature
    ("F", "C"),
    ("K", "C"),
    // Volume
    ("pt (US)", "qt (US)"),
    // Deviation indicators
    ("gs-ddm", "dots"),
    ("loc-ddm", "dots"),
    ("mV", "dots"),
];

/// Raw spelling -> canonical unit. Lookups are exact and case-sensitive.
pub static UNIT_ALIASES: &[(&str, &str)] = &[
    // Electricity
    ("A", "amps"),
    ("kVA", "kilovolt-amps"),
    ("V", "volts"),
    ("VAC", "volts"),
    ("VDC", "volts"),
    // Flow (mass)
    ("lb/hr", "lb/h"),
    ("lbs/h", "lb/h"),
    ("lbs/hr", "lb/h"),
    ("kg/hr", "kg/h"),
    ("kgs/h", "kg/h"),
    ("kgs/hr", "kg/h"),
    ("t/hr", "t/h"),
    ("ts/h", "t/h"),
    ("ts/hr", "t/h"),
    ("tonne/h", "t/h"),
    ("tonne/hr", "t/h"),
    ("tonnes/h", "t/h"),
    ("tonnes/hr", "t/h"),
    // Length
    ("fts", "ft"),
    ("feet", "ft"),
    ("foot", "ft"),
    ("metre", "m"),
    ("metres", "m"),
    ("kilometre", "km"),
    ("kilometres", "km"),
    ("mile", "mi"),
    ("miles", "mi"),
    // Mass
    ("kgs", "kg"),
    ("lbs", "lb"),
    ("tonne", "t"),
    ("tonnes", "t"),
    // Speed
    ("kts", "kt"),
    ("kn", "kt"),
    ("knot", "kt"),
    ("knots", "kt"),
    ("mi/h", "mph"),
    ("mi/hr", "mph"),
    ("ft/m", "fpm"),
    ("ft/min", "fpm"),
    ("feet/min", "fpm"),
    ("M", "Mach"),
    ("mach", "Mach"),
    // Temperature
    ("degree C", "C"),
    ("deg. C", "C"),
    // Time
    ("day", "days"),
    ("hr", "h"),
    ("hrs", "h"),
    ("mins", "min"),
    ("mon", "months"),
    ("sec", "s"),
    ("second", "s"),
    ("seconds", "s"),
    ("secs", "s"),
    ("year", "years"),
    // Volume
    ("pint", "pt (US)"),
    ("pints", "pt (US)"),
    ("pt", "pt (US)"),
    ("quart", "qt (US)"),
    ("quarts", "qt (US)"),
    ("qt", "qt (US)"),
    // Other
    ("DDM", "ddm"),
    ("degree", "deg"),
    ("dot", "dots"),
    ("G", "g"),
    ("percent", "%"),
    ("PSIA", "psi"),
    ("PSID", "psid"),
    ("RPM", "rpm"),
];

fn lookup<V>(table: &'static [(&'static str, V)], key: &str) -> Option<&'static V> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
}

/// Canonical unit for `raw`, if `raw` is a known alias
pub fn alias(raw: &str) -> Option<&'static str> {
    lookup(UNIT_ALIASES, raw).copied()
}

/// Linear rules leaving the canonical `unit`
pub fn multipliers(unit: &str) -> Option<Multipliers> {
    lookup(CONVERSION_MULTIPLIERS, unit).copied()
}

/// Temperature transforms leaving the canonical `unit`
pub fn functions(unit: &str) -> Option<Functions> {
    lookup(CONVERSION_FUNCTIONS, unit).copied()
}

/// Preferred display unit for the canonical `unit`
pub fn standard_unit(unit: &str) -> Option<&'static str> {
    lookup(STANDARD_CONVERSIONS, unit).copied()
}

/// Multiplier for the canonical pair, if the linear table has one
pub fn find_multiplier(unit: &str, output: &str) -> Option<f64> {
    multipliers(unit).and_then(|rules| lookup(rules, output)).copied()
}

/// Transform for the canonical pair, if the temperature table has one
pub fn find_function(unit: &str, output: &str) -> Option<Transform> {
    functions(unit).and_then(|rules| lookup(rules, output)).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_alias_lookup() {
        assert_eq!(alias("lbs/hr"), Some("lb/h"));
        assert_eq!(alias("kts"), Some("kt"));
        assert_eq!(alias("degree C"), Some("C"));
        assert_eq!(alias("kt"), None);
    }

    #[test]
    fn test_alias_is_case_sensitive() {
        assert_eq!(alias("M"), Some("Mach"));
        assert_eq!(alias("mach"), Some("Mach"));
        assert_eq!(alias("MACH"), None);
        assert_eq!(alias(" kts"), None);
    }

    #[test]
    fn test_no_alias_chains() {
        for (raw, canonical) in UNIT_ALIASES {
            assert!(alias(canonical).is_none(), "{} -> {} is itself an alias", raw, canonical);
        }
    }

    #[test]
    fn test_tables_have_unique_keys() {
        fn assert_unique<V>(name: &str, table: &[(&str, V)]) {
            let mut seen = HashSet::new();
            for (k, _) in table {
                assert!(seen.insert(*k), "duplicate key {:?} in {}", k, name);
            }
        }
        assert_unique("aliases", UNIT_ALIASES);
        assert_unique("multipliers", CONVERSION_MULTIPLIERS);
        assert_unique("functions", CONVERSION_FUNCTIONS);
        assert_unique("standard", STANDARD_CONVERSIONS);
        for (unit, rules) in CONVERSION_MULTIPLIERS {
            assert_unique(unit, *rules);
        }
        for (unit, rules) in CONVERSION_FUNCTIONS {
            assert_unique(unit, *rules);
        }
    }

    #[test]
    fn test_linear_and_nonlinear_sources_are_disjoint() {
        for (unit, _) in CONVERSION_FUNCTIONS {
            assert!(multipliers(unit).is_none(), "{} is in both tables", unit);
        }
    }

    #[test]
    fn test_rule_keys_are_canonical() {
        for (unit, rules) in CONVERSION_MULTIPLIERS {
            assert!(alias(unit).is_none(), "{} is an alias", unit);
            for (target, _) in *rules {
                assert!(alias(target).is_none(), "{} is an alias", target);
            }
        }
    }

    #[test]
    fn test_reciprocal_multipliers_within_tolerance() {
        // Observed worst case is ft <-> mi at 2.08e-5.
        for (unit, rules) in CONVERSION_MULTIPLIERS {
            for (target, forward) in *rules {
                if let Some(reverse) = find_multiplier(target, unit) {
                    let drift = (forward * reverse - 1.0).abs();
                    assert!(drift < 3e-5, "{} <-> {} drifts by {}", unit, target, drift);
                }
            }
        }
    }

    #[test]
    fn test_reciprocals_are_not_rederived() {
        let forward = find_multiplier("ft", "mi").unwrap();
        let reverse = find_multiplier("mi", "ft").unwrap();
        assert_eq!(forward, 0.00018939);
        assert_eq!(reverse, 5280.0);
        assert_ne!(forward * reverse, 1.0);
    }

    #[test]
    fn test_standard_units_are_reachable() {
        for (unit, preferred) in STANDARD_CONVERSIONS {
            let reachable = find_multiplier(unit, preferred).is_some()
                || find_function(unit, preferred).is_some();
            assert!(reachable, "{} has no rule to its standard unit {}", unit, preferred);
        }
    }

    #[test]
    fn test_find_misses() {
        assert_eq!(find_multiplier("kt", "m"), None);
        assert_eq!(find_multiplier("C", "F"), None);
        assert!(find_function("C", "F").is_some());
        assert!(find_function("C", "R").is_none());
        assert!(functions("kt").is_none());
    }
}
