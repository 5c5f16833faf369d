//! Dense effectiveness table over a type catalog

use crate::{ChartError, Interactions, Type};

/// Combined multiplier for every (attacker, primary defender, secondary defender or none)
/// drawn from a catalog.
///
/// Built once from validated [`Interactions`] and read-only afterwards. The
/// combined multiplier is the product of the two per-category multipliers, so two
/// resisting categories give 0.25x and two weak categories give 4x.
#[derive(Debug, Clone)]
pub struct EffectivenessTable {
    interactions: Interactions,
    /// Catalog position of each type, `None` if the type is not in the catalog
    positions: [Option<usize>; Type::COUNT],
    /// `catalog² × (catalog + 1)` cells; secondary slot 0 is "no secondary type"
    cells: Vec<f32>,
}

impl EffectivenessTable {
    /// Validate `interactions` and compute every entry of the table
    pub fn build(interactions: Interactions) -> Result<Self, ChartError> {
        interactions.validate()?;

        let catalog = interactions.catalog();
        let n = catalog.len();

        let mut positions = [None; Type::COUNT];
        for (i, t) in catalog.iter().enumerate() {
            positions[t.index()] = Some(i);
        }

        let mut cells = Vec::with_capacity(n * n * (n + 1));
        for &attacker in catalog {
            let rule = interactions
                .rule(attacker)
                .ok_or(ChartError::MissingRule(attacker))?;
            for &primary in catalog {
                let first = rule.multiplier(Some(primary));
                cells.push(first * rule.multiplier(None));
                for &secondary in catalog {
                    cells.push(first * rule.multiplier(Some(secondary)));
                }
            }
        }

        tracing::debug!(types = n, entries = cells.len(), "Built effectiveness table");

        Ok(Self {
            interactions,
            positions,
            cells,
        })
    }

    /// The catalog the table covers, in declaration order
    pub fn catalog(&self) -> &[Type] {
        self.interactions.catalog()
    }

    /// Whether `t` is part of the catalog
    pub fn contains(&self, t: Type) -> bool {
        self.positions[t.index()].is_some()
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Combined multiplier of `attacker` against a defender typed `primary`/`secondary`.
    ///
    /// Returns `None` only if one of the types is outside the catalog.
    pub fn get(&self, attacker: Type, primary: Type, secondary: Option<Type>) -> Option<f32> {
        let n = self.catalog().len();
        let a = self.positions[attacker.index()]?;
        let d1 = self.positions[primary.index()]?;
        let d2 = match secondary {
            None => 0,
            Some(t) => self.positions[t.index()]? + 1,
        };
        self.cells.get((a * n + d1) * (n + 1) + d2).copied()
    }

    /// Multiplier of `attacker` against a single category, straight from its rule
    pub fn single(&self, attacker: Type, defender: Type) -> Option<f32> {
        if !self.contains(defender) {
            return None;
        }
        self.interactions.multiplier(attacker, Some(defender))
    }
}
