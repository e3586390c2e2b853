//! DecodedSnapshot → human/json/raw string formatting.
//!
//! Three modes:
//! - **Human** (default): Redis-style, e.g. `1) "title" (string)`, numbered members
//! - **JSON** (`--json`): `serde_json::to_string_pretty`, records as an ordered array
//! - **Raw** (`--raw`): Bare values, no quotes, no type prefixes

use rdbdump_core::{Payload, SnapshotEntry};
use rdbdump_durability::{ChecksumByteOrder, DecodedSnapshot};
use serde_json::{json, Value};

/// Output formatting mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
    Raw,
}

/// Format a decoded snapshot.
pub fn format_snapshot(snapshot: &DecodedSnapshot, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => format_json(snapshot),
        OutputMode::Raw => format_raw(snapshot),
        OutputMode::Human => format_human(snapshot),
    }
}

/// Format an error.
pub fn format_error(err: &anyhow::Error, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => serde_json::to_string_pretty(&json!({
            "error": format!("{:#}", err)
        }))
        .unwrap_or_else(|_| format!("{{\"error\": \"{}\"}}", err)),
        OutputMode::Raw => format!("{:#}", err),
        OutputMode::Human => format!("(error) {:#}", err),
    }
}

fn order_label(order: Option<ChecksumByteOrder>) -> &'static str {
    match order {
        Some(ChecksumByteOrder::BigEndian) => "big-endian",
        Some(ChecksumByteOrder::LittleEndian) => "little-endian",
        None => "disabled",
    }
}

fn text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

// =========================================================================
// JSON
// =========================================================================

fn format_json(snapshot: &DecodedSnapshot) -> String {
    let entries: Vec<Value> = snapshot.entries.iter().map(entry_json).collect();
    let doc = json!({
        "version": snapshot.version.to_string(),
        "checksum": format!("{:#018x}", snapshot.checksum),
        "checksum_order": order_label(snapshot.checksum_order),
        "entries": entries,
    });
    serde_json::to_string_pretty(&doc).unwrap_or_default()
}

fn entry_json(entry: &SnapshotEntry) -> Value {
    let value = match &entry.payload {
        Payload::String(v) => Value::String(text(v)),
        Payload::Hash(pairs) => Value::Array(
            pairs
                .iter()
                .map(|(f, v)| json!([text(f), text(v)]))
                .collect(),
        ),
        Payload::Set(members) => {
            Value::Array(members.iter().map(|m| Value::String(text(m))).collect())
        }
    };
    json!({
        "key": text(&entry.key),
        "type": entry.kind().as_str(),
        "value": value,
    })
}

// =========================================================================
// Raw
// =========================================================================

fn format_raw(snapshot: &DecodedSnapshot) -> String {
    let mut lines = Vec::new();
    for entry in &snapshot.entries {
        let key = text(&entry.key);
        match &entry.payload {
            Payload::String(v) => lines.push(format!("{}\t{}", key, text(v))),
            Payload::Hash(pairs) => {
                for (f, v) in pairs {
                    lines.push(format!("{}\t{}\t{}", key, text(f), text(v)));
                }
            }
            Payload::Set(members) => {
                for m in members {
                    lines.push(format!("{}\t{}", key, text(m)));
                }
            }
        }
    }
    lines.join("\n")
}

// =========================================================================
// Human
// =========================================================================

fn format_human(snapshot: &DecodedSnapshot) -> String {
    let mut lines = vec![format!(
        "version {}, {} key(s), checksum {:#018x} ({})",
        snapshot.version,
        snapshot.len(),
        snapshot.checksum,
        order_label(snapshot.checksum_order)
    )];

    if snapshot.is_empty() {
        lines.push("(empty snapshot)".to_string());
        return lines.join("\n");
    }

    for (i, entry) in snapshot.entries.iter().enumerate() {
        let key = text(&entry.key);
        match &entry.payload {
            Payload::String(v) => {
                lines.push(format!("{}) \"{}\" (string) \"{}\"", i + 1, key, text(v)));
            }
            Payload::Hash(pairs) => {
                lines.push(format!("{}) \"{}\" (hash)", i + 1, key));
                for (j, (f, v)) in pairs.iter().enumerate() {
                    lines.push(format!("   {}) \"{}\" => \"{}\"", j + 1, text(f), text(v)));
                }
            }
            Payload::Set(members) => {
                lines.push(format!("{}) \"{}\" (set)", i + 1, key));
                for (j, m) in members.iter().enumerate() {
                    lines.push(format!("   {}) \"{}\"", j + 1, text(m)));
                }
            }
        }
    }
    lines.join("\n")
}
