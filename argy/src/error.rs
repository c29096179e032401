//! Error types for slot declaration, resolution and configuration.

use thiserror::Error;

/// Errors that can occur while declaring or resolving call shapes.
#[derive(Debug, Error)]
pub enum ArgyError {
    #[error("unknown cardinality \"{cardinality}\" (expected \"required\" or \"optional\")")]
    InvalidCardinality { cardinality: String },

    #[error("unknown type token \"{token}\" in matcher specification")]
    UnknownMatcherToken { token: String },

    #[error("invalid function invocation: no declared shape accepts form ({form})")]
    InvalidInvocation { form: String },

    #[error("slot stack has {count} slots, more than the limit of {limit}")]
    TooManySlots { count: usize, limit: usize },

    #[error("configuration error: {message}")]
    Config { message: String },

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for argy operations.
pub type Result<T> = std::result::Result<T, ArgyError>;
