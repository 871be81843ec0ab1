//! Serializable snapshot of the unit tables

use serde::Serialize;

use crate::rule::Rule;
use crate::units::{CONVERSION_FUNCTIONS, CONVERSION_MULTIPLIERS, STANDARD_CONVERSIONS, UNIT_ALIASES};

/// A single directed conversion as listed in the tables
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogRule {
    pub unit: &'static str,
    pub output: &'static str,
    #[serde(flatten)]
    pub rule: Rule,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogAlias {
    pub alias: &'static str,
    pub unit: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogStandard {
    pub unit: &'static str,
    pub standard: &'static str,
}

/// Every table in declaration order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Catalog {
    pub aliases: Vec<CatalogAlias>,
    pub rules: Vec<CatalogRule>,
    pub standard: Vec<CatalogStandard>,
}

impl Catalog {
    pub fn snapshot() -> Self {
        let aliases = UNIT_ALIASES
            .iter()
            .map(|&(alias, unit)| CatalogAlias { alias, unit })
            .collect();

        let nonlinear = CONVERSION_FUNCTIONS.iter().flat_map(|&(unit, rules)| {
            rules.iter().map(move |&(output, transform)| CatalogRule {
                unit,
                output,
                rule: Rule::Nonlinear(transform),
            })
        });
        let linear = CONVERSION_MULTIPLIERS.iter().flat_map(|&(unit, rules)| {
            rules.iter().map(move |&(output, multiplier)| CatalogRule {
                unit,
                output,
                rule: Rule::Linear(multiplier),
            })
        });

        let standard = STANDARD_CONVERSIONS
            .iter()
            .map(|&(unit, standard)| CatalogStandard { unit, standard })
            .collect();

        Catalog {
            aliases,
            rules: nonlinear.chain(linear).collect(),
            standard,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert;

    /// Distinct rule sources, in catalog order
    fn sources(catalog: &Catalog) -> Vec<&'static str> {
        let mut sources: Vec<&'static str> = Vec::new();
        for rule in &catalog.rules {
            if sources.last() != Some(&rule.unit) {
                sources.push(rule.unit);
            }
        }
        sources
    }

    #[test]
    fn test_snapshot_counts() {
        let catalog = Catalog::snapshot();
        assert_eq!(catalog.aliases.len(), UNIT_ALIASES.len());
        assert_eq!(catalog.standard.len(), STANDARD_CONVERSIONS.len());
        let linear: usize = CONVERSION_MULTIPLIERS.iter().map(|(_, r)| r.len()).sum();
        let nonlinear: usize = CONVERSION_FUNCTIONS.iter().map(|(_, r)| r.len()).sum();
        assert_eq!(catalog.rules.len(), linear + nonlinear);
    }

    #[test]
    fn test_snapshot_orders_temperature_first() {
        let catalog = Catalog::snapshot();
        let sources = sources(&catalog);
        assert_eq!(&sources[..3], &["C", "F", "K"]);
        assert_eq!(sources[3], "lb/h");
        assert_eq!(sources.len(), CONVERSION_MULTIPLIERS.len() + CONVERSION_FUNCTIONS.len());
    }

    #[test]
    fn test_every_rule_converts() {
        for entry in Catalog::snapshot().rules {
            let expected = entry.rule.apply(10.0);
            assert_eq!(convert::convert(10.0, entry.unit, entry.output).unwrap(), expected);
        }
    }

    #[test]
    fn test_snapshot_json_shape() {
        let json = serde_json::to_value(Catalog::snapshot()).unwrap();
        assert_eq!(json["aliases"][0]["alias"], "A");
        assert_eq!(json["aliases"][0]["unit"], "amps");

        let first = &json["rules"][0];
        assert_eq!(first["unit"], "C");
        assert_eq!(first["output"], "F");
        assert_eq!(first["kind"], "nonlinear");
        assert_eq!(first["rule"]["type"], "affine");
        assert_eq!(first["rule"]["offset"], 32.0);

        let linear = json["rules"]
            .as_array()
            .unwrap()
            .iter()
            .find(|r| r["unit"] == "ft" && r["output"] == "m")
            .unwrap();
        assert_eq!(linear["kind"], "linear");
        assert_eq!(linear["rule"], 0.3048);

        assert_eq!(json["standard"][0]["unit"], "lb/h");
        assert_eq!(json["standard"][0]["standard"], "kg/h");
    }
}
