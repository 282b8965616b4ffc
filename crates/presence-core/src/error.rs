//! Error types for presence-core

use thiserror::Error;

/// Result type alias using presence-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in presence-core operations
///
/// Log-folder validation never produces one of these; its outcomes are
/// reported as [`crate::ValidationResult`] values.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// No field with this name exists in the field table
    #[error("Unknown settings field: {0}")]
    UnknownField(String),

    /// A raw value could not be parsed for a field
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    /// An action was requested while its enablement is off
    #[error("Action unavailable: {0}")]
    ActionUnavailable(&'static str),

    /// Configuration location or content error
    #[error("Configuration error: {0}")]
    Config(String),
}
