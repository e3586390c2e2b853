//! Error types for snapshot encoding
//!
//! This module defines the error taxonomy shared by every layer of the encoder.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! Every variant aborts the conversion: there is no partial or best-effort output.

use std::io;
use thiserror::Error;

/// Result type alias for encoder operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the snapshot encoder
#[derive(Debug, Error)]
pub enum Error {
    /// A document node cannot be represented as a string, hash or set
    ///
    /// Raised for nesting deeper than one level, duplicate set members and
    /// duplicate hash fields.
    #[error("Unsupported structure at key {key:?}: {reason}")]
    UnsupportedStructure {
        /// Top-level document key that failed classification
        key: String,
        /// Human readable description of the violation
        reason: String,
    },

    /// A length or blob cannot be encoded in the snapshot format
    #[error("Encoding error: {0}")]
    EncodingError(String),

    /// Snapshot version is not four ASCII digits
    #[error("Invalid snapshot version: {0:?}")]
    InvalidVersion(String),

    /// I/O error while handing bytes to a sink
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
}

impl Error {
    /// Build an `UnsupportedStructure` error for `key`
    pub fn unsupported(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::UnsupportedStructure {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error was caused by the shape of the input document
    pub fn is_structural(&self) -> bool {
        matches!(self, Error::UnsupportedStructure { .. })
    }
}
