//! Domain types for the type chart

mod effectiveness;
mod pokemon_type;

pub use effectiveness::Effectiveness;
pub use pokemon_type::Type;
