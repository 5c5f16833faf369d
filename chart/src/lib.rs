//! Type catalog, interaction rules and the effectiveness table.
//!
//! # Overview
//!
//! `covey-chart` is the bottom layer of the workspace:
//!
//! ```text
//! covey-chart (types + rules + table) ← THIS CRATE
//!        │
//!        ▼
//! covey-search (resistances + coverage search)
//!        │
//!        ▼
//! covey-cli (the `covey` binary)
//! ```
//!
//! # Main Types
//!
//! - [`Type`] - The 18 Pokemon types
//! - [`Effectiveness`] - Classification of one defending type for one attacker
//! - [`InteractionRule`] - Every defender's classification for one attacker
//! - [`Interactions`] - A type catalog with one rule per type
//! - [`EffectivenessTable`] - Dense (attacker, primary, secondary) lookup
//!
//! # Example Usage
//!
//! ```
//! use covey_chart::{EffectivenessTable, Interactions, Type};
//!
//! let table = EffectivenessTable::build(Interactions::standard()).unwrap();
//! assert_eq!(table.get(Type::Fire, Type::Grass, Some(Type::Steel)), Some(4.0));
//! assert_eq!(table.get(Type::Fire, Type::Water, None), Some(0.5));
//! ```

mod error;
pub mod query;
mod rules;
mod table;
pub mod types;

pub use error::ChartError;
pub use rules::{InteractionRule, Interactions};
pub use table::EffectivenessTable;
pub use types::{Effectiveness, Type};
