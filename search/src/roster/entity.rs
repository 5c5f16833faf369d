//! Roster member

use covey_chart::Type;
use covey_chart::query::Defender;
use serde::Serialize;

/// A roster member: two defending categories, an overlay category and a weight
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entity {
    /// Display name (nickname in the reference roster)
    pub name: String,

    pub primary_type: Type,

    /// Secondary defending type (None for single-typed members)
    pub secondary_type: Option<Type>,

    /// Extra defensive layer whose own rule multiplies into the final resistance
    pub overlay_type: Type,

    /// Ranking weight (level in the reference roster)
    pub weight: u32,
}

impl Entity {
    pub fn new(
        name: impl Into<String>,
        primary_type: Type,
        secondary_type: Option<Type>,
        overlay_type: Type,
        weight: u32,
    ) -> Self {
        Self {
            name: name.into(),
            primary_type,
            secondary_type,
            overlay_type,
            weight,
        }
    }

    /// The defending categories, for matchup queries
    pub fn defender(&self) -> Defender {
        Defender::new(self.primary_type, self.secondary_type)
    }

    /// Every type this member carries (primary, secondary, overlay)
    pub fn types(&self) -> impl Iterator<Item = Type> + '_ {
        std::iter::once(self.primary_type)
            .chain(self.secondary_type)
            .chain(std::iter::once(self.overlay_type))
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}", self.name, self.primary_type)?;
        if let Some(secondary) = self.secondary_type {
            write!(f, "/{}", secondary)?;
        }
        write!(f, ", overlay {}, weight {})", self.overlay_type, self.weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let dual = Entity::new("Sir Klark", Type::Water, Some(Type::Fighting), Type::Water, 56);
        assert_eq!(dual.to_string(), "Sir Klark (Water/Fighting, overlay Water, weight 56)");

        let mono = Entity::new("Trent", Type::Electric, None, Type::Electric, 43);
        assert_eq!(mono.to_string(), "Trent (Electric, overlay Electric, weight 43)");
    }

    #[test]
    fn test_types() {
        let e = Entity::new("Cerberus", Type::Dark, Some(Type::Fire), Type::Ghost, 43);
        assert_eq!(e.types().collect::<Vec<_>>(), vec![Type::Dark, Type::Fire, Type::Ghost]);
        assert_eq!(e.defender(), Defender::dual(Type::Dark, Type::Fire));
    }
}
