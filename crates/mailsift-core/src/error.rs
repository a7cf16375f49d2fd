//! Error types for the core library.

use thiserror::Error;

/// Errors that can occur while building or configuring the pipeline.
///
/// Annotation itself never fails; these only surface when an engine or
/// detector is constructed.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration is inconsistent or out of range.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A detection pattern failed to compile.
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
