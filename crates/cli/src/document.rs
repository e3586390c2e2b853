//! TOML → Document conversion.
//!
//! Scalars keep their textual form: integers, floats, booleans and
//! datetimes are rendered with their `Display` output. Nested tables and
//! arrays are carried over as-is; whether they fit a record shape is
//! decided later by the encoder.

use rdbdump_core::{Document, Node};
use thiserror::Error;
use toml::{Table, Value};

/// Errors raised while reading the TOML front end.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The input was not valid UTF-8.
    #[error("input is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// The input was not valid TOML.
    #[error("invalid TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Parse TOML text into a document, keeping key order.
pub fn parse_document(input: &str) -> Result<Document, DocumentError> {
    let table: Table = input.parse()?;
    Ok(table_to_document(table))
}

/// Parse raw bytes as UTF-8 TOML.
pub fn parse_document_bytes(input: Vec<u8>) -> Result<Document, DocumentError> {
    let text = String::from_utf8(input)?;
    parse_document(&text)
}

/// Convert a parsed TOML table into a document.
pub fn table_to_document(table: Table) -> Document {
    table
        .into_iter()
        .map(|(key, value)| (key, value_to_node(value)))
        .collect()
}

fn value_to_node(value: Value) -> Node {
    match value {
        Value::String(s) => Node::Scalar(s),
        Value::Integer(i) => Node::Scalar(i.to_string()),
        Value::Float(f) => Node::Scalar(f.to_string()),
        Value::Boolean(b) => Node::Scalar(b.to_string()),
        Value::Datetime(d) => Node::Scalar(d.to_string()),
        Value::Array(items) => Node::Array(items.into_iter().map(value_to_node).collect()),
        Value::Table(t) => Node::Table(
            t.into_iter()
                .map(|(k, v)| (k, value_to_node(v)))
                .collect(),
        ),
    }
}
