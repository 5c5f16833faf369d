//! Query helpers for type matchups
//!
//! This module provides utilities for asking which attacking types a given
//! defender is weak to, resists or is immune to.

mod matchup;

pub use matchup::{
    Defender,
    // Type-level queries
    immunities,
    is_immune_to,
    is_weak_to_any,
    resistances,
    resists_all,
    weaknesses,
};
