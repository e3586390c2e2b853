//! Length-prefixed byte strings
//!
//! Format: `length(var) + bytes`. No escaping, no compression; every key,
//! value, field and member goes through here verbatim.

use std::io::Write;

use rdbdump_core::{Limits, Result};

use super::length::{decode_length, encode_length};
use crate::snapshot::reader::SnapshotReadError;

/// Encode `bytes` as a length-prefixed blob
///
/// Fails with `EncodingError` if the blob exceeds `limits.max_string_bytes`.
pub fn encode_bytes<W: Write + ?Sized>(bytes: &[u8], limits: &Limits, out: &mut W) -> Result<()> {
    limits.validate_string_len(bytes.len())?;
    encode_length(bytes.len(), out)?;
    out.write_all(bytes)?;
    Ok(())
}

/// Decode one length-prefixed blob, advancing `input`
pub fn decode_bytes(input: &mut &[u8]) -> std::result::Result<Vec<u8>, SnapshotReadError> {
    let len = decode_length(input)?;
    let len = usize::try_from(len).map_err(|_| SnapshotReadError::Truncated)?;
    if len > input.len() {
        return Err(SnapshotReadError::Truncated);
    }
    let (blob, rest) = input.split_at(len);
    *input = rest;
    Ok(blob.to_vec())
}
