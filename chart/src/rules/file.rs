//! Loading interaction rules from TOML or JSON documents

use std::collections::BTreeMap;

use serde::Deserialize;

use super::{InteractionRule, Interactions};
use crate::{ChartError, Type};

/// On-disk shape of a rule file
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RuleFile {
    types: Vec<String>,
    #[serde(default)]
    rules: BTreeMap<String, RuleSets>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RuleSets {
    #[serde(default)]
    super_effective: Vec<String>,
    #[serde(default)]
    not_very_effective: Vec<String>,
    #[serde(default)]
    no_effect: Vec<String>,
}

fn parse_names(names: &[String]) -> Result<Vec<Type>, ChartError> {
    names.iter().map(|n| n.parse()).collect()
}

impl TryFrom<RuleFile> for Interactions {
    type Error = ChartError;

    fn try_from(file: RuleFile) -> Result<Self, Self::Error> {
        let mut interactions = Interactions::new(parse_names(&file.types)?);

        for (name, sets) in &file.rules {
            let attacker: Type = name.parse()?;
            let rule = InteractionRule::from_sets(
                attacker,
                &parse_names(&sets.super_effective)?,
                &parse_names(&sets.not_very_effective)?,
                &parse_names(&sets.no_effect)?,
            )?;
            interactions.insert(attacker, rule);
        }

        Ok(interactions)
    }
}

impl Interactions {
    /// Parse a TOML rule document.
    ///
    /// ```toml
    /// types = ["fire", "water", "grass"]
    ///
    /// [rules.fire]
    /// super_effective = ["grass"]
    /// not_very_effective = ["water"]
    /// ```
    ///
    /// Only names and set disjointness are checked here; catalog consistency is
    /// checked when the table is built.
    pub fn from_toml_str(s: &str) -> Result<Self, ChartError> {
        let file: RuleFile = toml::from_str(s)?;
        file.try_into()
    }

    /// Parse a JSON rule document with the same shape as the TOML form
    pub fn from_json_str(s: &str) -> Result<Self, ChartError> {
        let file: RuleFile = serde_json::from_str(s)?;
        file.try_into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Effectiveness;

    const TRIANGLE: &str = r#"
types = ["fire", "water", "grass"]

[rules.fire]
super_effective = ["grass"]
not_very_effective = ["water"]

[rules.water]
super_effective = ["fire"]
not_very_effective = ["grass"]
no_effect = []

[rules.grass]
super_effective = ["water"]
not_very_effective = ["fire"]
"#;

    #[test]
    fn test_parse_toml() {
        let interactions = Interactions::from_toml_str(TRIANGLE).unwrap();
        assert_eq!(interactions.catalog(), &[Type::Fire, Type::Water, Type::Grass]);
        assert!(interactions.validate().is_ok());

        let fire = interactions.rule(Type::Fire).unwrap();
        assert_eq!(fire.classify(Type::Grass), Effectiveness::SuperEffective);
        assert_eq!(fire.classify(Type::Water), Effectiveness::NotVeryEffective);
        assert_eq!(fire.classify(Type::Fire), Effectiveness::Neutral);
    }

    #[test]
    fn test_parse_json() {
        let json = r#"{
            "types": ["Normal", "Ghost"],
            "rules": {
                "normal": { "no_effect": ["ghost"] },
                "ghost": { "super_effective": ["ghost"], "no_effect": ["normal"] }
            }
        }"#;
        let interactions = Interactions::from_json_str(json).unwrap();
        assert!(interactions.validate().is_ok());
        assert_eq!(interactions.multiplier(Type::Normal, Some(Type::Ghost)), Some(0.0));
        assert_eq!(interactions.multiplier(Type::Ghost, Some(Type::Ghost)), Some(2.0));
    }

    #[test]
    fn test_unknown_type_name() {
        let doc = r#"
types = ["fire", "lava"]
"#;
        let err = Interactions::from_toml_str(doc).unwrap_err();
        assert!(matches!(err, ChartError::UnknownTypeName(ref n) if n == "lava"));
    }

    #[test]
    fn test_overlap_rejected() {
        let doc = r#"
types = ["fire", "grass"]

[rules.fire]
super_effective = ["grass"]
no_effect = ["grass"]
"#;
        let err = Interactions::from_toml_str(doc).unwrap_err();
        assert!(matches!(err, ChartError::OverlappingClassification { .. }));
    }

    #[test]
    fn test_malformed_toml() {
        let err = Interactions::from_toml_str("types = [").unwrap_err();
        assert!(matches!(err, ChartError::Toml(_)));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let doc = r#"
types = ["fire"]

[rules.fire]
immune = ["fire"]
"#;
        assert!(Interactions::from_toml_str(doc).is_err());
    }
}
