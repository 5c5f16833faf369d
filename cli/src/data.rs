//! Loading rules and rosters, built-in or from disk

use std::fs;
use std::path::Path;

use anyhow::{ensure, Context, Result};
use covey_chart::{EffectivenessTable, Interactions};
use covey_search::Roster;

const REFERENCE_ROSTER: &str = include_str!("../data/roster.toml");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileFormat {
    Toml,
    Json,
}

impl FileFormat {
    fn of(path: &Path) -> FileFormat {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => FileFormat::Json,
            _ => FileFormat::Toml,
        }
    }
}

/// Build the effectiveness table from a rule file, or the standard rules
pub fn load_table(path: Option<&Path>) -> Result<EffectivenessTable> {
    let interactions = match path {
        None => Interactions::standard(),
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read rule file {}", path.display()))?;
            let parsed = match FileFormat::of(path) {
                FileFormat::Toml => Interactions::from_toml_str(&text),
                FileFormat::Json => Interactions::from_json_str(&text),
            };
            parsed.with_context(|| format!("Failed to parse rule file {}", path.display()))?
        }
    };

    let table = EffectivenessTable::build(interactions).context("Invalid interaction rules")?;
    tracing::debug!(types = table.catalog().len(), "Loaded type chart");
    Ok(table)
}

/// Load a roster file, or the built-in reference roster
pub fn load_roster(path: Option<&Path>) -> Result<Roster> {
    let roster = match path {
        None => Roster::from_toml_str(REFERENCE_ROSTER).context("Built-in roster is invalid")?,
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read roster file {}", path.display()))?;
            let parsed = match FileFormat::of(path) {
                FileFormat::Toml => Roster::from_toml_str(&text),
                FileFormat::Json => Roster::from_json_str(&text),
            };
            parsed.with_context(|| format!("Failed to parse roster file {}", path.display()))?
        }
    };

    ensure!(!roster.is_empty(), "Roster has no members");
    tracing::debug!(members = roster.len(), "Loaded roster");
    Ok(roster)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_data_loads() {
        let table = load_table(None).unwrap();
        let roster = load_roster(None).unwrap();
        assert_eq!(roster.len(), 17);
        assert!(roster.check_catalog(&table).is_ok());
        assert!(roster.find("Cerberus").is_some());
    }

    #[test]
    fn test_reference_search() {
        let table = load_table(None).unwrap();
        let roster = load_roster(None).unwrap();
        let teams = covey_search::search(roster.members(), &table, 6, 10).unwrap();

        assert_eq!(teams.len(), 10);
        assert!(teams.iter().all(|t| t.members.len() == 6));
        assert!(teams.windows(2).all(|w| w[0].total_weight >= w[1].total_weight));

        assert_eq!(
            teams[0].members,
            vec!["Sir Klark", "Eight", "Belton", "Bounce", "Mustang", "Stewie"]
        );
        assert_eq!(teams[0].total_weight, 322);
        assert_eq!(
            teams[3].members,
            vec!["Sir Klark", "Walter", "Eight", "Belton", "Mustang", "Stewie"]
        );
        assert_eq!(teams[3].total_weight, 321);
        assert_eq!(teams[9].total_weight, 319);

        let covering = covey_search::score_all(roster.members(), &table, 6)
            .unwrap()
            .iter()
            .filter(|r| r.is_fully_covered())
            .count();
        assert_eq!(covering, 1180);
    }

    #[test]
    fn test_file_format_by_extension() {
        assert_eq!(FileFormat::of(Path::new("rules.json")), FileFormat::Json);
        assert_eq!(FileFormat::of(Path::new("rules.JSON")), FileFormat::Json);
        assert_eq!(FileFormat::of(Path::new("rules.toml")), FileFormat::Toml);
        assert_eq!(FileFormat::of(Path::new("rules")), FileFormat::Toml);
    }

    #[test]
    fn test_empty_roster_rejected() {
        let path = std::env::temp_dir().join(format!("covey-empty-roster-{}.toml", std::process::id()));
        fs::write(&path, "# nobody here\n").unwrap();
        let result = load_roster(Some(&path));
        fs::remove_file(&path).unwrap();

        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "Roster has no members");
    }

    #[test]
    fn test_missing_file() {
        let err = load_roster(Some(Path::new("/nonexistent/roster.toml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read roster file"));
    }
}
