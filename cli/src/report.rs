//! Text and JSON rendering of search results

use std::fmt::Write as _;

use anyhow::Result;
use clap::ValueEnum;
use covey_chart::query::{immunities, resistances, weaknesses};
use covey_chart::{EffectivenessTable, Type};
use covey_search::{CombinationResult, Entity, RankedTeam, ResistanceProfile};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

fn type_list(types: &[Type]) -> String {
    if types.is_empty() {
        return "-".to_string();
    }
    types.iter().map(Type::as_str).collect::<Vec<_>>().join(", ")
}

/// One line per team, heaviest first
pub fn teams(teams: &[RankedTeam], format: Format) -> Result<String> {
    if format == Format::Json {
        return Ok(serde_json::to_string_pretty(teams)?);
    }

    if teams.is_empty() {
        return Ok("No fully covering team found".to_string());
    }

    let mut out = String::new();
    for team in teams {
        writeln!(out, "[{}]  total weight {}", team.members.join(", "), team.total_weight)?;
    }
    Ok(out)
}

/// Partial covers with what each one leaves open
pub fn closest(results: &[CombinationResult], format: Format) -> Result<String> {
    if format == Format::Json {
        return Ok(serde_json::to_string_pretty(results)?);
    }

    let mut out = String::new();
    for result in results {
        writeln!(
            out,
            "[{}]  total weight {}  uncovered ({}): {}",
            result.members.join(", "),
            result.total_weight,
            result.uncovered_count(),
            type_list(&result.uncovered)
        )?;
    }
    Ok(out)
}

#[derive(Serialize)]
struct InspectReport<'a> {
    member: &'a Entity,
    weak_to: Vec<Type>,
    resists: Vec<Type>,
    immune_to: Vec<Type>,
    overlay_weak_to: Vec<Type>,
    overlay_resists: Vec<Type>,
    multipliers: &'a ResistanceProfile,
}

/// Base and overlay multipliers of one member against every attacking type
pub fn profile(
    entity: &Entity,
    profile: &ResistanceProfile,
    table: &EffectivenessTable,
    format: Format,
) -> Result<String> {
    let report = InspectReport {
        member: entity,
        weak_to: weaknesses(table, entity.defender()),
        resists: resistances(table, entity.defender()),
        immune_to: immunities(table, entity.defender()),
        overlay_weak_to: profile.overlay_weaknesses(),
        overlay_resists: profile.overlay_covered(),
        multipliers: profile,
    };

    if format == Format::Json {
        return Ok(serde_json::to_string_pretty(&report)?);
    }

    let mut out = String::new();
    writeln!(out, "{}", entity)?;
    writeln!(out)?;
    writeln!(out, "{:<10} {:>6} {:>8}", "Attacker", "Base", "Overlay")?;
    for r in profile.entries() {
        let marker = if r.resists() { "  covers" } else { "" };
        writeln!(out, "{:<10} {:>6} {:>8}{}", r.attacker.as_str(), r.base, r.overlay, marker)?;
    }
    writeln!(out)?;
    writeln!(out, "Weak to:      {}", type_list(&report.weak_to))?;
    writeln!(out, "Resists:      {}", type_list(&report.resists))?;
    writeln!(out, "Immune to:    {}", type_list(&report.immune_to))?;
    writeln!(out, "With overlay: weak to {}", type_list(&report.overlay_weak_to))?;
    writeln!(out, "              resists {}", type_list(&report.overlay_resists))?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use covey_chart::Interactions;

    use super::*;

    #[test]
    fn test_teams_text() {
        let ranked = vec![RankedTeam {
            members: vec!["A".into(), "B".into()],
            total_weight: 12,
        }];
        assert_eq!(teams(&ranked, Format::Text).unwrap(), "[A, B]  total weight 12\n");
    }

    #[test]
    fn test_teams_empty() {
        assert_eq!(teams(&[], Format::Text).unwrap(), "No fully covering team found");
        assert_eq!(teams(&[], Format::Json).unwrap(), "[]");
    }

    #[test]
    fn test_teams_json() {
        let ranked = vec![RankedTeam {
            members: vec!["A".into()],
            total_weight: 3,
        }];
        let json: serde_json::Value = serde_json::from_str(&teams(&ranked, Format::Json).unwrap()).unwrap();
        assert_eq!(json[0]["members"][0], "A");
        assert_eq!(json[0]["total_weight"], 3);
    }

    #[test]
    fn test_closest_text() {
        let results = vec![CombinationResult {
            members: vec!["A".into()],
            uncovered: vec![Type::Ghost, Type::Dark],
            total_weight: 5,
        }];
        assert_eq!(
            closest(&results, Format::Text).unwrap(),
            "[A]  total weight 5  uncovered (2): Ghost, Dark\n"
        );
    }

    #[test]
    fn test_profile_text() {
        let table = EffectivenessTable::build(Interactions::standard()).unwrap();
        let ferr = Entity::new("Ferr", Type::Ground, None, Type::Rock, 41);
        let multipliers = covey_search::resistances(&ferr, &table).unwrap();
        let text = profile(&ferr, &multipliers, &table, Format::Text).unwrap();

        assert!(text.starts_with("Ferr (Ground, overlay Rock, weight 41)"));
        assert!(text.contains("Immune to:    Electric"));
        assert!(text.contains("Weak to:      Water, Grass, Ice"));
        assert!(text.contains("Resists:      Poison, Rock"));
        assert!(text.contains("With overlay: weak to Water, Grass, Ice, Fighting, Ground, Steel"));
        assert!(text.contains("              resists Normal, Fire, Electric, Poison, Flying, Rock"));
    }

    #[test]
    fn test_profile_json() {
        let table = EffectivenessTable::build(Interactions::standard()).unwrap();
        let trent = Entity::new("Trent", Type::Electric, None, Type::Electric, 43);
        let multipliers = covey_search::resistances(&trent, &table).unwrap();
        let json = profile(&trent, &multipliers, &table, Format::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["member"]["primary_type"], "electric");
        assert_eq!(value["member"]["secondary_type"], serde_json::Value::Null);
        assert_eq!(value["multipliers"]["entries"].as_array().unwrap().len(), 18);
        assert_eq!(value["immune_to"], serde_json::json!([]));
        assert_eq!(value["weak_to"], serde_json::json!(["ground"]));
        assert_eq!(value["overlay_resists"], serde_json::json!(["electric", "flying", "steel"]));
    }
}
