//! Size limits for encoded blobs and collections
//!
//! The store refuses bulk strings larger than its protocol ceiling (512MB by
//! default), so the encoder refuses to produce them. Violations surface as
//! `Error::EncodingError`.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default maximum blob length in bytes (512MB)
pub const DEFAULT_MAX_STRING_BYTES: usize = 512 * 1024 * 1024;

/// Default maximum number of fields or members in one entry
pub const DEFAULT_MAX_COLLECTION_LEN: usize = u32::MAX as usize;

/// Size limits applied while encoding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limits {
    /// Maximum length of any key, value, field or member (default: 512MB)
    pub max_string_bytes: usize,

    /// Maximum fields in a hash or members in a set (default: 2^32 - 1)
    pub max_collection_len: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_string_bytes: DEFAULT_MAX_STRING_BYTES,
            max_collection_len: DEFAULT_MAX_COLLECTION_LEN,
        }
    }
}

impl Limits {
    /// Create limits with small values for testing
    pub fn with_small_limits() -> Self {
        Limits {
            max_string_bytes: 100,
            max_collection_len: 10,
        }
    }

    /// Validate a blob length
    pub fn validate_string_len(&self, len: usize) -> Result<(), LimitError> {
        if len > self.max_string_bytes {
            return Err(LimitError::StringTooLong {
                actual: len,
                max: self.max_string_bytes,
            });
        }
        Ok(())
    }

    /// Validate a hash or set cardinality
    pub fn validate_collection_len(&self, len: usize) -> Result<(), LimitError> {
        if len > self.max_collection_len {
            return Err(LimitError::CollectionTooLarge {
                actual: len,
                max: self.max_collection_len,
            });
        }
        Ok(())
    }
}

/// Limit violation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LimitError {
    /// Blob exceeds `max_string_bytes`
    #[error("blob of {actual} bytes exceeds limit of {max}")]
    StringTooLong {
        /// Actual length
        actual: usize,
        /// Configured maximum
        max: usize,
    },

    /// Collection exceeds `max_collection_len`
    #[error("collection of {actual} elements exceeds limit of {max}")]
    CollectionTooLarge {
        /// Actual element count
        actual: usize,
        /// Configured maximum
        max: usize,
    },
}

impl From<LimitError> for Error {
    fn from(e: LimitError) -> Self {
        Error::EncodingError(e.to_string())
    }
}
