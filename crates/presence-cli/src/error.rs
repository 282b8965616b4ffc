use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] presence_core::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("Expected FIELD VALUE pairs, got an odd number of arguments")]
    UnpairedArguments,
    #[error("Debug log folder is invalid: {0}")]
    InvalidFolder(&'static str),
    #[error("Could not open the debug log folder")]
    OpenFolderFailed,
}
