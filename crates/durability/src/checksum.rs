//! CRC-64 checksum for the snapshot trailer
//!
//! The store verifies snapshots with the "Jones" CRC-64 variant:
//!
//! - polynomial `0xad93d23594c935a9`
//! - reflected input and output
//! - initial value 0, final XOR 0
//!
//! Check value: `crc64(0, b"123456789") == 0xe9c6d914c4b8d9ca`.
//!
//! The `crc64` crate implements exactly this variant; `Crc64` wraps it as a
//! running state that the byte stream feeds as it grows.

/// Continue a CRC-64 (Jones) computation from `seed` over `bytes`
///
/// Pass `0` to start a fresh checksum.
pub use ::crc64::crc64;

/// Jones polynomial in normal (MSB-first) form
pub const JONES_POLY: u64 = 0xad93_d235_94c9_35a9;

/// Running CRC-64 (Jones) state
#[derive(Debug, Clone, Default)]
pub struct Crc64 {
    state: u64,
}

impl Crc64 {
    /// Fresh state (value 0)
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed bytes into the checksum
    pub fn update(&mut self, bytes: &[u8]) {
        self.state = ::crc64::crc64(self.state, bytes);
    }

    /// Current checksum value
    pub fn value(&self) -> u64 {
        self.state
    }

    /// Final checksum as 8 big-endian bytes
    pub fn finalize(self) -> [u8; 8] {
        self.state.to_be_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_value() {
        assert_eq!(crc64(0, b"123456789"), 0xe9c6_d914_c4b8_d9ca);
    }

    #[test]
    fn test_running_state_check_value() {
        let mut hasher = Crc64::new();
        hasher.update(b"123456789");
        assert_eq!(hasher.value(), 0xe9c6_d914_c4b8_d9ca);
    }

    #[test]
    fn test_empty_input_is_zero() {
        assert_eq!(crc64(0, b""), 0);
        assert_eq!(Crc64::new().value(), 0);
        assert_eq!(Crc64::new().finalize(), [0u8; 8]);
    }

    #[test]
    fn test_incremental_matches_one_shot() {
        let data = b"REDIS0007\xfe\x00\x00\x05title\x09TOML File\xff";
        let mut hasher = Crc64::new();
        for chunk in data.chunks(3) {
            hasher.update(chunk);
        }
        assert_eq!(hasher.value(), crc64(0, data));
    }

    #[test]
    fn test_seeded_continuation() {
        let (head, tail) = b"123456789".split_at(4);
        assert_eq!(crc64(crc64(0, head), tail), 0xe9c6_d914_c4b8_d9ca);
    }

    #[test]
    fn test_finalize_is_big_endian() {
        let mut hasher = Crc64::new();
        hasher.update(b"123456789");
        assert_eq!(
            hasher.finalize(),
            [0xe9, 0xc6, 0xd9, 0x14, 0xc4, 0xb8, 0xd9, 0xca]
        );
    }

    #[test]
    fn test_bit_flip_changes_checksum() {
        let mut data = b"REDIS0007\xfe\x00\xff".to_vec();
        let original = crc64(0, &data);
        data[3] ^= 0x01;
        assert_ne!(crc64(0, &data), original);
    }
}
