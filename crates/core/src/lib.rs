//! Core types for rdbdump
//!
//! This crate defines the foundational types shared by the encoder and the CLI:
//! - Node / Document: the normalized, ordered input tree
//! - SnapshotEntry / EntryKind / Payload: a classified top-level key
//! - SnapshotVersion: the four header digits
//! - Limits: blob and collection size ceilings
//! - Error: error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod limits;
pub mod types;
pub mod value;
pub mod version;

pub use error::{Error, Result};
pub use limits::{LimitError, Limits, DEFAULT_MAX_COLLECTION_LEN, DEFAULT_MAX_STRING_BYTES};
pub use types::{EntryKind, Payload, SnapshotEntry};
pub use value::{Document, Node};
pub use version::{SnapshotVersion, DEFAULT_MAJOR_VERSION};
