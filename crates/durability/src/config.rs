//! Snapshot configuration
//!
//! Controls the header version, size limits and checksum trailer layout of
//! an assembled snapshot. The configuration is passed explicitly to each
//! assembler; nothing is read from the process environment here.

use rdbdump_core::{Limits, SnapshotVersion};
use serde::{Deserialize, Serialize};

/// Byte order of the 8-byte checksum trailer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChecksumByteOrder {
    /// Most significant byte first
    #[default]
    BigEndian,
    /// Least significant byte first, as the store lays it out on disk
    LittleEndian,
}

impl ChecksumByteOrder {
    /// Serialize a checksum value in this order
    pub fn to_bytes(self, crc: u64) -> [u8; 8] {
        match self {
            ChecksumByteOrder::BigEndian => crc.to_be_bytes(),
            ChecksumByteOrder::LittleEndian => crc.to_le_bytes(),
        }
    }

    /// Read a checksum value stored in this order
    pub fn decode(self, bytes: [u8; 8]) -> u64 {
        match self {
            ChecksumByteOrder::BigEndian => u64::from_be_bytes(bytes),
            ChecksumByteOrder::LittleEndian => u64::from_le_bytes(bytes),
        }
    }
}

/// Snapshot configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotConfig {
    /// Header version digits (default: "0007")
    pub version: SnapshotVersion,
    /// Blob and collection ceilings
    pub limits: Limits,
    /// Trailer byte order (default: big-endian)
    pub checksum_order: ChecksumByteOrder,
}

impl SnapshotConfig {
    /// Create config for testing
    ///
    /// Uses small limits so limit enforcement can be exercised cheaply.
    pub fn for_testing() -> Self {
        SnapshotConfig {
            limits: Limits::with_small_limits(),
            ..Default::default()
        }
    }

    /// Set header version
    pub fn with_version(mut self, version: SnapshotVersion) -> Self {
        self.version = version;
        self
    }

    /// Set size limits
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Set checksum trailer byte order
    pub fn with_checksum_order(mut self, order: ChecksumByteOrder) -> Self {
        self.checksum_order = order;
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.limits.max_string_bytes == 0 {
            return Err(ConfigError::InvalidLimits(
                "max_string_bytes must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration validation errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Limits that cannot encode any key
    #[error("Invalid limits: {0}")]
    InvalidLimits(String),
}
