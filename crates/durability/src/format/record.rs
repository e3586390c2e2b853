//! Key/value records
//!
//! # Binary Format
//!
//! ```text
//! [type tag: u8]  0x00 string | 0x02 set | 0x04 hash
//! [key: blob]
//! string: [value: blob]
//! set:    [count: len] [member: blob] * count
//! hash:   [count: len] ([field: blob] [value: blob]) * count
//! ```
//!
//! Collections are written in input order.

use std::io::Write;

use byteorder::{ReadBytesExt, WriteBytesExt};
use rdbdump_core::{EntryKind, Limits, Payload, Result, SnapshotEntry};

use super::length::{decode_length, encode_length};
use super::string::{decode_bytes, encode_bytes};
use crate::snapshot::reader::SnapshotReadError;

/// Encode one entry
pub fn encode_entry<W: Write + ?Sized>(
    entry: &SnapshotEntry,
    limits: &Limits,
    out: &mut W,
) -> Result<()> {
    out.write_u8(entry.kind().type_tag())?;
    encode_bytes(&entry.key, limits, out)?;

    match &entry.payload {
        Payload::String(value) => encode_bytes(value, limits, out)?,
        Payload::Hash(pairs) => {
            limits.validate_collection_len(pairs.len())?;
            encode_length(pairs.len(), out)?;
            for (field, value) in pairs {
                encode_bytes(field, limits, out)?;
                encode_bytes(value, limits, out)?;
            }
        }
        Payload::Set(members) => {
            limits.validate_collection_len(members.len())?;
            encode_length(members.len(), out)?;
            for member in members {
                encode_bytes(member, limits, out)?;
            }
        }
    }
    Ok(())
}

/// Decode the body of a record whose type tag was already consumed
pub fn decode_entry_body(
    kind: EntryKind,
    input: &mut &[u8],
) -> std::result::Result<SnapshotEntry, SnapshotReadError> {
    let key = decode_bytes(input)?;
    let payload = match kind {
        EntryKind::String => Payload::String(decode_bytes(input)?),
        EntryKind::Hash => {
            let count = decode_count(input)?;
            let mut pairs = Vec::with_capacity(count);
            for _ in 0..count {
                let field = decode_bytes(input)?;
                let value = decode_bytes(input)?;
                pairs.push((field, value));
            }
            Payload::Hash(pairs)
        }
        EntryKind::Set => {
            let count = decode_count(input)?;
            let mut members = Vec::with_capacity(count);
            for _ in 0..count {
                members.push(decode_bytes(input)?);
            }
            Payload::Set(members)
        }
    };
    Ok(SnapshotEntry { key, payload })
}

/// Decode a full record including its type tag
pub fn decode_entry(input: &mut &[u8]) -> std::result::Result<SnapshotEntry, SnapshotReadError> {
    let tag = input.read_u8()?;
    let kind = EntryKind::from_type_tag(tag).ok_or(SnapshotReadError::UnknownOpcode(tag))?;
    decode_entry_body(kind, input)
}

// Every element takes at least one byte, so a count larger than the
// remaining input is corrupt; checking first bounds the preallocation.
fn decode_count(input: &mut &[u8]) -> std::result::Result<usize, SnapshotReadError> {
    let count = decode_length(input)?;
    match usize::try_from(count) {
        Ok(count) if count <= input.len() => Ok(count),
        _ => Err(SnapshotReadError::Truncated),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rdbdump_core::Error;

    fn encode(entry: &SnapshotEntry) -> Vec<u8> {
        let mut buf = Vec::new();
        encode_entry(entry, &Limits::default(), &mut buf).unwrap();
        buf
    }

    #[test]
    fn test_string_record() {
        let entry = SnapshotEntry::string("title", "TOML File");
        assert_eq!(encode(&entry), b"\x00\x05title\x09TOML File".to_vec());
    }

    #[test]
    fn test_hash_record() {
        let entry = SnapshotEntry::hash("table", vec![(b"k".to_vec(), b"v".to_vec())]);
        assert_eq!(encode(&entry), b"\x04\x05table\x01\x01k\x01v".to_vec());
    }

    #[test]
    fn test_set_record_preserves_order() {
        let entry = SnapshotEntry::set("set", vec![b"b".to_vec(), b"a".to_vec()]);
        assert_eq!(encode(&entry), b"\x02\x03set\x02\x01b\x01a".to_vec());
    }

    #[test]
    fn test_empty_collections() {
        assert_eq!(
            encode(&SnapshotEntry::hash("h", vec![])),
            b"\x04\x01h\x00".to_vec()
        );
        assert_eq!(
            encode(&SnapshotEntry::set("s", vec![])),
            b"\x02\x01s\x00".to_vec()
        );
    }

    #[test]
    fn test_collection_limit() {
        let members = (0..11).map(|i| vec![i as u8]).collect();
        let entry = SnapshotEntry::set("s", members);
        let mut buf = Vec::new();
        let result = encode_entry(&entry, &Limits::with_small_limits(), &mut buf);
        assert!(matches!(result, Err(Error::EncodingError(_))));
    }

    #[test]
    fn test_decode_inverts_encode() {
        let entries = vec![
            SnapshotEntry::string("k", ""),
            SnapshotEntry::hash(
                "h",
                vec![
                    (b"f1".to_vec(), b"v1".to_vec()),
                    (b"f2".to_vec(), vec![b'x'; 200]),
                ],
            ),
            SnapshotEntry::set("s", vec![b"m1".to_vec(), b"m2".to_vec()]),
        ];
        for entry in entries {
            let bytes = encode(&entry);
            let mut input = bytes.as_slice();
            assert_eq!(decode_entry(&mut input).unwrap(), entry);
            assert!(input.is_empty());
        }
    }

    #[test]
    fn test_decode_unknown_type() {
        let mut input: &[u8] = b"\x01\x01k\x00";
        assert!(matches!(
            decode_entry(&mut input),
            Err(SnapshotReadError::UnknownOpcode(0x01))
        ));
    }

    #[test]
    fn test_decode_oversized_count() {
        let mut input: &[u8] = b"\x02\x01s\x3f\x01a";
        assert!(matches!(
            decode_entry(&mut input),
            Err(SnapshotReadError::Truncated)
        ));
    }
}
