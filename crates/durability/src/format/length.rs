//! Variable-width length encoding
//!
//! Every string length and collection size in a snapshot is prefixed with
//! one of four encodings, chosen by magnitude:
//!
//! ```text
//! 00xxxxxx                          n < 64          (1 byte)
//! 01xxxxxx xxxxxxxx                 n < 16384       (2 bytes, 14 bits BE)
//! 10000000 [u32 BE]                 n < 2^32        (5 bytes)
//! 10000001 [u64 BE]                 n < 2^64        (9 bytes)
//! ```
//!
//! The `11` prefix marks the store's special string encodings (integers,
//! compressed blobs). They are never produced here and rejected on decode.

use std::io::Write;

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use rdbdump_core::{Error, Result};

use crate::snapshot::reader::SnapshotReadError;

/// Prefix of the 1-byte form (top two bits)
pub const RDB_6BITLEN: u8 = 0;
/// Prefix of the 2-byte form (top two bits)
pub const RDB_14BITLEN: u8 = 1;
/// Prefix of the special string encodings (top two bits)
pub const RDB_ENCVAL: u8 = 3;
/// Marker byte of the 32-bit form
pub const RDB_32BITLEN: u8 = 0x80;
/// Marker byte of the 64-bit form
pub const RDB_64BITLEN: u8 = 0x81;

/// Encode a host length
///
/// Fails with `EncodingError` if the length does not fit in 64 bits.
pub fn encode_length<W: Write + ?Sized>(len: usize, out: &mut W) -> Result<()> {
    let n = u64::try_from(len)
        .map_err(|_| Error::EncodingError(format!("length {len} exceeds the 64-bit range")))?;
    encode_length_u64(n, out)
}

/// Encode a 64-bit length using the shortest form
pub fn encode_length_u64<W: Write + ?Sized>(n: u64, out: &mut W) -> Result<()> {
    if n < (1 << 6) {
        out.write_u8(n as u8 | (RDB_6BITLEN << 6))?;
    } else if n < (1 << 14) {
        out.write_u16::<BigEndian>(n as u16 | (u16::from(RDB_14BITLEN) << 14))?;
    } else if let Ok(n32) = u32::try_from(n) {
        out.write_u8(RDB_32BITLEN)?;
        out.write_u32::<BigEndian>(n32)?;
    } else {
        out.write_u8(RDB_64BITLEN)?;
        out.write_u64::<BigEndian>(n)?;
    }
    Ok(())
}

/// Number of bytes `encode_length_u64(n)` writes
pub fn encoded_length_size(n: u64) -> usize {
    if n < (1 << 6) {
        1
    } else if n < (1 << 14) {
        2
    } else if n <= u64::from(u32::MAX) {
        5
    } else {
        9
    }
}

/// Decode one length prefix, advancing `input`
pub fn decode_length(input: &mut &[u8]) -> std::result::Result<u64, SnapshotReadError> {
    let first = input.read_u8()?;
    match first >> 6 {
        RDB_6BITLEN => Ok(u64::from(first & 0x3f)),
        RDB_14BITLEN => {
            let second = input.read_u8()?;
            Ok((u64::from(first & 0x3f) << 8) | u64::from(second))
        }
        RDB_ENCVAL => Err(SnapshotReadError::SpecialEncoding(first & 0x3f)),
        _ => match first {
            RDB_32BITLEN => Ok(u64::from(input.read_u32::<BigEndian>()?)),
            RDB_64BITLEN => Ok(input.read_u64::<BigEndian>()?),
            other => Err(SnapshotReadError::InvalidLengthPrefix(other)),
        },
    }
}
