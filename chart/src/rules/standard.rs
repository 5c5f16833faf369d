//! The Gen 6+ interaction rules for all 18 types

use std::collections::HashMap;

use super::{InteractionRule, Interactions};
use crate::{Effectiveness, Type};

use Type::*;

struct StandardRule {
    attacker: Type,
    super_effective: &'static [Type],
    not_very_effective: &'static [Type],
    no_effect: &'static [Type],
}

const fn rule(
    attacker: Type,
    super_effective: &'static [Type],
    not_very_effective: &'static [Type],
    no_effect: &'static [Type],
) -> StandardRule {
    StandardRule {
        attacker,
        super_effective,
        not_very_effective,
        no_effect,
    }
}

#[rustfmt::skip]
const STANDARD_RULES: [StandardRule; Type::COUNT] = [
    rule(Normal,   &[],                                   &[Rock, Steel],                                          &[Ghost]),
    rule(Fire,     &[Grass, Ice, Bug, Steel],             &[Fire, Water, Rock, Dragon],                            &[]),
    rule(Water,    &[Fire, Ground, Rock],                 &[Water, Grass, Dragon],                                 &[]),
    rule(Electric, &[Water, Flying],                      &[Grass, Electric, Dragon],                              &[Ground]),
    rule(Grass,    &[Water, Ground, Rock],                &[Fire, Grass, Poison, Flying, Bug, Dragon, Steel],      &[]),
    rule(Ice,      &[Grass, Ground, Flying, Dragon],      &[Fire, Water, Ice, Steel],                              &[]),
    rule(Fighting, &[Normal, Ice, Rock, Dark, Steel],     &[Poison, Flying, Psychic, Bug, Fairy],                  &[Ghost]),
    rule(Poison,   &[Grass, Fairy],                       &[Poison, Ground, Rock, Ghost],                          &[Steel]),
    rule(Ground,   &[Fire, Electric, Poison, Rock, Steel], &[Grass, Bug],                                          &[Flying]),
    rule(Flying,   &[Grass, Fighting, Bug],               &[Electric, Rock, Steel],                                &[]),
    rule(Psychic,  &[Fighting, Poison],                   &[Psychic, Steel],                                       &[Dark]),
    rule(Bug,      &[Grass, Psychic, Dark],               &[Fire, Fighting, Poison, Flying, Ghost, Steel, Fairy],  &[]),
    rule(Rock,     &[Fire, Ice, Flying, Bug],             &[Fighting, Ground, Steel],                              &[]),
    rule(Ghost,    &[Psychic, Ghost],                     &[Dark],                                                 &[Normal]),
    rule(Dragon,   &[Dragon],                             &[Steel],                                                &[Fairy]),
    rule(Dark,     &[Psychic, Ghost],                     &[Dark, Fairy],                                          &[]),
    rule(Steel,    &[Ice, Rock, Fairy],                   &[Fire, Water, Electric, Steel],                         &[]),
    rule(Fairy,    &[Fighting, Dragon, Dark],             &[Fire, Poison, Steel],                                  &[]),
];

impl Interactions {
    /// The standard 18-type rules
    pub fn standard() -> Self {
        let rules = STANDARD_RULES
            .iter()
            .map(|r| {
                let sets = [
                    (r.super_effective, Effectiveness::SuperEffective),
                    (r.not_very_effective, Effectiveness::NotVeryEffective),
                    (r.no_effect, Effectiveness::NoEffect),
                ];
                let classes: HashMap<Type, Effectiveness> = sets
                    .into_iter()
                    .flat_map(|(defenders, class)| defenders.iter().map(move |d| (*d, class)))
                    .collect();
                (r.attacker, InteractionRule { classes })
            })
            .collect();

        Self {
            catalog: Type::ALL.to_vec(),
            rules,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_sets_are_disjoint() {
        for r in &STANDARD_RULES {
            let checked = InteractionRule::from_sets(r.attacker, r.super_effective, r.not_very_effective, r.no_effect);
            assert!(checked.is_ok(), "{} has overlapping sets", r.attacker);
        }
    }

    #[test]
    fn test_standard_covers_catalog() {
        let interactions = Interactions::standard();
        assert_eq!(interactions.catalog(), Type::all());
        assert!(interactions.validate().is_ok());
    }

    #[test]
    fn test_standard_single_type_matchups() {
        let chart = Interactions::standard();
        assert_eq!(chart.multiplier(Fire, Some(Grass)), Some(2.0));
        assert_eq!(chart.multiplier(Water, Some(Fire)), Some(2.0));
        assert_eq!(chart.multiplier(Fighting, Some(Normal)), Some(2.0));
        assert_eq!(chart.multiplier(Fire, Some(Water)), Some(0.5));
        assert_eq!(chart.multiplier(Electric, Some(Grass)), Some(0.5));
        assert_eq!(chart.multiplier(Normal, Some(Ghost)), Some(0.0));
        assert_eq!(chart.multiplier(Ghost, Some(Normal)), Some(0.0));
        assert_eq!(chart.multiplier(Psychic, Some(Dark)), Some(0.0));
        assert_eq!(chart.multiplier(Dragon, Some(Fairy)), Some(0.0));
        assert_eq!(chart.multiplier(Ground, Some(Flying)), Some(0.0));
    }
}
