//! Type matchup helpers over an effectiveness table

use crate::{EffectivenessTable, Type};

/// A defender's one or two categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Defender {
    pub primary: Type,
    pub secondary: Option<Type>,
}

impl Defender {
    pub fn new(primary: Type, secondary: Option<Type>) -> Self {
        Self { primary, secondary }
    }

    pub fn mono(primary: Type) -> Self {
        Self::new(primary, None)
    }

    pub fn dual(primary: Type, secondary: Type) -> Self {
        Self::new(primary, Some(secondary))
    }
}

fn multiplier(table: &EffectivenessTable, attacker: Type, defender: Defender) -> Option<f32> {
    table.get(attacker, defender.primary, defender.secondary)
}

fn filter_attackers(table: &EffectivenessTable, defender: Defender, keep: impl Fn(f32) -> bool) -> Vec<Type> {
    table
        .catalog()
        .iter()
        .copied()
        .filter(|&t| multiplier(table, t, defender).is_some_and(&keep))
        .collect()
}

/// Check if defender is weak (>1x effectiveness) to any of the attacking types
pub fn is_weak_to_any(table: &EffectivenessTable, defender: Defender, attacking_types: &[Type]) -> bool {
    attacking_types
        .iter()
        .any(|&t| multiplier(table, t, defender).is_some_and(|m| m > 1.0))
}

/// Check if defender resists (<1x effectiveness) all of the attacking types
pub fn resists_all(table: &EffectivenessTable, defender: Defender, attacking_types: &[Type]) -> bool {
    if attacking_types.is_empty() {
        return false;
    }
    attacking_types
        .iter()
        .all(|&t| multiplier(table, t, defender).is_some_and(|m| m < 1.0))
}

/// Check if defender is immune (0x effectiveness) to a type
pub fn is_immune_to(table: &EffectivenessTable, defender: Defender, attacking_type: Type) -> bool {
    multiplier(table, attacking_type, defender) == Some(0.0)
}

/// Get all catalog types that are super effective against the defender
pub fn weaknesses(table: &EffectivenessTable, defender: Defender) -> Vec<Type> {
    filter_attackers(table, defender, |m| m > 1.0)
}

/// Get all catalog types that the defender resists (0 < effectiveness < 1)
pub fn resistances(table: &EffectivenessTable, defender: Defender) -> Vec<Type> {
    filter_attackers(table, defender, |m| m > 0.0 && m < 1.0)
}

/// Get all catalog types that the defender is immune to
pub fn immunities(table: &EffectivenessTable, defender: Defender) -> Vec<Type> {
    filter_attackers(table, defender, |m| m == 0.0)
}
