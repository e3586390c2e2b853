//! Integration tests for document encoding through the public facade.
//!
//! These cover the full path from an in-memory document to checksummed
//! snapshot bytes, and back through the reference reader.

#[path = "../common/mod.rs"]
mod common;

mod rejection;
mod round_trip;
mod scenarios;
