use thiserror::Error;

use crate::Type;

/// Configuration errors raised while loading rules or building a table
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Unknown type name: {0}")]
    UnknownTypeName(String),

    #[error("Type catalog is empty")]
    EmptyCatalog,

    #[error("Type {0} appears more than once in the catalog")]
    DuplicateType(Type),

    #[error("No interaction rule for catalog type {0}")]
    MissingRule(Type),

    #[error("Interaction rule for {0}, which is not in the catalog")]
    UnknownAttacker(Type),

    #[error("Rule for {attacker} classifies {defender}, which is not in the catalog")]
    UnknownDefender { attacker: Type, defender: Type },

    #[error("Rule for {attacker} lists {defender} in more than one effectiveness set")]
    OverlappingClassification { attacker: Type, defender: Type },

    #[error("Invalid TOML rule file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid JSON rule file: {0}")]
    Json(#[from] serde_json::Error),
}
