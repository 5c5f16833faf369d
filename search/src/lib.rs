//! Resistance profiles and exhaustive team coverage search.
//!
//! Given an [`EffectivenessTable`](covey_chart::EffectivenessTable) and a roster of
//! [`Entity`] values, [`search`] finds the heaviest teams of a fixed size in which
//! every attacking type is resisted by at least one member.
//!
//! A member resists an attacking type when its base multiplier (primary and
//! secondary types only) is below 1.0. The overlay type is reported in each
//! [`Resistance`] but never counts towards coverage.
//!
//! # Example Usage
//!
//! ```
//! use covey_chart::{EffectivenessTable, Interactions, Type};
//! use covey_search::{Entity, search};
//!
//! let table = EffectivenessTable::build(Interactions::standard()).unwrap();
//! let roster = vec![
//!     Entity::new("Mustang", Type::Steel, Some(Type::Poison), Type::Steel, 55),
//!     Entity::new("Nemo", Type::Dragon, Some(Type::Water), Type::Water, 52),
//!     Entity::new("Walter", Type::Fighting, Some(Type::Flying), Type::Flying, 50),
//! ];
//!
//! // Ranked heaviest first; empty if no team of 2 covers all 18 types
//! let teams = search(&roster, &table, 2, 10).unwrap();
//! assert!(teams.windows(2).all(|w| w[0].total_weight >= w[1].total_weight));
//! ```
//!
//! # Features
//!
//! - `parallel` - score subsets on a rayon thread pool. Output is identical to the
//!   sequential path.

mod combinations;
mod coverage;
mod error;
mod resistance;
pub mod roster;

pub use combinations::{Combinations, binomial};
pub use coverage::{CombinationResult, RankedTeam, closest, score_all, score_team, search};
pub use error::SearchError;
pub use resistance::{Resistance, ResistanceProfile, resistances};
pub use roster::{Entity, Roster};
