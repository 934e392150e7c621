//! Error types for warehouse-iq

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation failure: a required field is missing, zero, or non-numeric.
    #[error("{0}")]
    Validation(String),

    /// Business-rule failure: no bin currently holds the requested item.
    #[error("Item {0} not found in stock")]
    ItemNotFound(String),

    /// Business-rule failure: total on-hand stock is short of the request.
    #[error("Not enough stock to dispatch. Requested: {requested}, Available: {available}")]
    InsufficientStock { requested: u32, available: u32 },

    /// Business-rule failure: the target bin cannot fit the incoming lot.
    #[error("Not enough space in bin {0}")]
    BinFull(String),

    #[error("Import error: {0}")]
    Import(String),
}

impl Error {
    /// Whether this error belongs to the user-facing taxonomy (validation or
    /// business-rule failure) rather than an internal fault.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Error::Validation(_)
                | Error::ItemNotFound(_)
                | Error::InsufficientStock { .. }
                | Error::BinFull(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
