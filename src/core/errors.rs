/*!
 * Error Types
 * Crate-level error handling with thiserror and miette
 */

use miette::Diagnostic;
use thiserror::Error;

// Re-export CollectionError from collections module
pub use crate::collections::types::CollectionError;

/// Unified runtime error type with miette diagnostics
#[derive(Error, Debug, Diagnostic)]
pub enum RuntimeError {
    #[error("Collection error: {0}")]
    #[diagnostic(transparent)]
    Collection(#[from] CollectionError),

    #[error("I/O error: {0}")]
    #[diagnostic(
        code(runtime::io_error),
        help("Filesystem or I/O operation failed. Check file permissions and disk space.")
    )]
    Io(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(
        code(runtime::configuration_error),
        help("Invalid configuration. Review configuration parameters.")
    )]
    Configuration(String),

    #[error("Internal error: {0}")]
    #[diagnostic(
        code(runtime::internal_error),
        help("An unexpected internal error occurred. Please report this issue.")
    )]
    Internal(String),
}

// Implement conversion from std::io::Error
impl From<std::io::Error> for RuntimeError {
    fn from(err: std::io::Error) -> Self {
        RuntimeError::Io(err.to_string())
    }
}

impl From<String> for RuntimeError {
    fn from(msg: String) -> Self {
        RuntimeError::Internal(msg)
    }
}

impl From<&str> for RuntimeError {
    fn from(msg: &str) -> Self {
        RuntimeError::Internal(msg.to_string())
    }
}

/// Result type for runtime operations
pub type Result<T> = std::result::Result<T, RuntimeError>;
