use covey_chart::Type;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Subset size must be at least 1 (got {0})")]
    InvalidSubsetSize(usize),

    #[error("{entity} has type {ty}, which is not in the type catalog")]
    UnknownType { entity: String, ty: Type },

    #[error("{entity} has unknown type name: {name}")]
    UnknownTypeName { entity: String, name: String },

    #[error("Invalid roster entry: {0}")]
    InvalidEntity(String),

    #[error("Invalid TOML roster file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid JSON roster file: {0}")]
    Json(#[from] serde_json::Error),
}
