//! Interaction rules: per attacking type, how it fares against each defending type

mod file;
mod standard;

use std::collections::HashMap;

use crate::{ChartError, Effectiveness, Type};

/// Classification of every defending type for one attacking type.
///
/// Each defender maps to exactly one [`Effectiveness`]; anything not classified
/// is [`Effectiveness::Neutral`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionRule {
    classes: HashMap<Type, Effectiveness>,
}

impl InteractionRule {
    /// A rule where every defender is neutral
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a rule from the three effectiveness sets.
    ///
    /// Fails if a defender appears in more than one set.
    pub fn from_sets(
        attacker: Type,
        super_effective: &[Type],
        not_very_effective: &[Type],
        no_effect: &[Type],
    ) -> Result<Self, ChartError> {
        let mut rule = Self::new();
        let sets = [
            (super_effective, Effectiveness::SuperEffective),
            (not_very_effective, Effectiveness::NotVeryEffective),
            (no_effect, Effectiveness::NoEffect),
        ];

        for (defenders, class) in sets {
            for &defender in defenders {
                match rule.classes.insert(defender, class) {
                    Some(previous) if previous != class => {
                        return Err(ChartError::OverlappingClassification { attacker, defender });
                    }
                    _ => {}
                }
            }
        }

        Ok(rule)
    }

    /// Classification of a single defending type
    pub fn classify(&self, defender: Type) -> Effectiveness {
        self.classes.get(&defender).copied().unwrap_or_default()
    }

    /// Multiplier against one defending category; `None` (no category) is 1.0
    pub fn multiplier(&self, defender: Option<Type>) -> f32 {
        defender.map_or(1.0, |t| self.classify(t).multiplier())
    }

    /// All non-neutral classifications
    pub fn classified(&self) -> impl Iterator<Item = (Type, Effectiveness)> + '_ {
        self.classes.iter().map(|(t, e)| (*t, *e))
    }
}

/// A type catalog together with one interaction rule per attacking type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interactions {
    catalog: Vec<Type>,
    rules: HashMap<Type, InteractionRule>,
}

impl Interactions {
    /// Empty rule set over the given catalog
    pub fn new(catalog: Vec<Type>) -> Self {
        Self {
            catalog,
            rules: HashMap::new(),
        }
    }

    /// Add (or replace) the rule for an attacking type
    pub fn insert(&mut self, attacker: Type, rule: InteractionRule) {
        self.rules.insert(attacker, rule);
    }

    /// Builder-style [`Interactions::insert`]
    pub fn with_rule(mut self, attacker: Type, rule: InteractionRule) -> Self {
        self.insert(attacker, rule);
        self
    }

    /// The type catalog, in declaration order
    pub fn catalog(&self) -> &[Type] {
        &self.catalog
    }

    /// Rule for an attacking type
    pub fn rule(&self, attacker: Type) -> Option<&InteractionRule> {
        self.rules.get(&attacker)
    }

    /// Per-category multiplier of `attacker` against `defender`.
    ///
    /// Returns `None` when there is no rule for `attacker`.
    pub fn multiplier(&self, attacker: Type, defender: Option<Type>) -> Option<f32> {
        self.rule(attacker).map(|rule| rule.multiplier(defender))
    }

    /// Check that catalog and rules agree.
    ///
    /// Every catalog type needs exactly one rule, every rule must belong to a
    /// catalog type, and every classified defender must be in the catalog.
    pub fn validate(&self) -> Result<(), ChartError> {
        if self.catalog.is_empty() {
            return Err(ChartError::EmptyCatalog);
        }

        let mut seen = [false; Type::COUNT];
        for &t in &self.catalog {
            if std::mem::replace(&mut seen[t.index()], true) {
                return Err(ChartError::DuplicateType(t));
            }
        }

        for &t in &self.catalog {
            if !self.rules.contains_key(&t) {
                return Err(ChartError::MissingRule(t));
            }
        }

        // Sorted so the reported error does not depend on hash order
        let mut attackers: Vec<&Type> = self.rules.keys().collect();
        attackers.sort();
        for &attacker in attackers {
            if !seen[attacker.index()] {
                return Err(ChartError::UnknownAttacker(attacker));
            }
            let mut defenders: Vec<Type> = self.rules[&attacker].classified().map(|(t, _)| t).collect();
            defenders.sort();
            if let Some(defender) = defenders.into_iter().find(|d| !seen[d.index()]) {
                return Err(ChartError::UnknownDefender { attacker, defender });
            }
        }

        Ok(())
    }
}
