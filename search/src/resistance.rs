//! Per-member resistance profiles

use covey_chart::{EffectivenessTable, Type};
use serde::Serialize;

use crate::{Entity, SearchError};

/// How hard one attacking type hits a member
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Resistance {
    pub attacker: Type,
    /// Exposure through the member's primary/secondary types
    pub base: f32,
    /// `base` with the overlay type's own multiplier applied on top
    pub overlay: f32,
}

impl Resistance {
    /// The member takes less than neutral damage through its base types
    pub fn resists(&self) -> bool {
        self.base < 1.0
    }
}

/// A member's [`Resistance`] against every catalog type, in catalog order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResistanceProfile {
    entries: Vec<Resistance>,
}

impl ResistanceProfile {
    pub fn entries(&self) -> &[Resistance] {
        &self.entries
    }

    pub fn get(&self, attacker: Type) -> Option<&Resistance> {
        self.entries.iter().find(|r| r.attacker == attacker)
    }

    /// Attacking types this member covers: base multiplier below 1.0.
    ///
    /// The overlay multiplier does not count towards coverage.
    pub fn covered(&self) -> impl Iterator<Item = Type> + '_ {
        self.entries.iter().filter(|r| r.resists()).map(|r| r.attacker)
    }

    fn select_overlay(&self, keep: impl Fn(f32) -> bool) -> Vec<Type> {
        self.entries
            .iter()
            .filter(|r| keep(r.overlay))
            .map(|r| r.attacker)
            .collect()
    }

    /// Weaknesses once the overlay is applied
    pub fn overlay_weaknesses(&self) -> Vec<Type> {
        self.select_overlay(|m| m > 1.0)
    }

    /// Types resisted or nullified once the overlay is applied
    pub fn overlay_covered(&self) -> Vec<Type> {
        self.select_overlay(|m| m < 1.0)
    }
}

/// Compute `entity`'s exposure to every attacking type in the table's catalog.
///
/// `base` comes from the table lookup on the member's two categories; `overlay`
/// multiplies the overlay category's per-category multiplier onto `base`.
pub fn resistances(entity: &Entity, table: &EffectivenessTable) -> Result<ResistanceProfile, SearchError> {
    let unknown = |ty: Type| SearchError::UnknownType {
        entity: entity.name.clone(),
        ty,
    };

    let entries = table
        .catalog()
        .iter()
        .map(|&attacker| -> Result<Resistance, SearchError> {
            let base = table
                .get(attacker, entity.primary_type, entity.secondary_type)
                .ok_or_else(|| {
                    let missing = entity
                        .types()
                        .find(|t| !table.contains(*t))
                        .unwrap_or(entity.primary_type);
                    unknown(missing)
                })?;
            let overlay = table
                .single(attacker, entity.overlay_type)
                .ok_or_else(|| unknown(entity.overlay_type))?;
            Ok(Resistance {
                attacker,
                base,
                overlay: base * overlay,
            })
        })
        .collect::<Result<Vec<_>, SearchError>>()?;

    Ok(ResistanceProfile { entries })
}
