//! Error types for xsd2ts
//!
//! This module defines all error types used throughout the compiler.
//! Warnings (unresolved imports, duplicate declarations, self-extension
//! skips) are not errors; they are emitted through `tracing` and never
//! stop a run. Only structural contract violations abort.

use thiserror::Error;

/// Result type alias using the xsd2ts Error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for xsd2ts operations
#[derive(Error, Debug)]
pub enum Error {
    /// A schema construct the compiler's corpus contract forbids.
    ///
    /// The corpus is assumed well-formed; hitting this aborts the run.
    #[error("structural violation in type '{type_name}': {message}")]
    StructuralViolation {
        /// Name of the offending type definition
        type_name: String,
        /// Description of the violated contract
        message: String,
    },

    /// Invalid command-line input (missing or non-directory source path)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// XML parsing error
    #[error("XML error: {0}")]
    Xml(#[from] roxmltree::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a structural violation error
    pub fn structural(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Error::StructuralViolation {
            type_name: type_name.into(),
            message: message.into(),
        }
    }
}
