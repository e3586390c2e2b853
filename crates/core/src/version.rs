//! Snapshot format version
//!
//! The header carries the version as four ASCII digits right after the magic.
//! Within the supported subset (string, hash and set records without
//! compaction encodings) the version changes nothing but those four bytes.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Major store version used when the caller does not pick one
pub const DEFAULT_MAJOR_VERSION: u16 = 7;

/// Four ASCII digits embedded in the snapshot header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SnapshotVersion([u8; 4]);

impl SnapshotVersion {
    /// Parse exactly four ASCII digits, e.g. `"0007"`
    pub fn parse(s: &str) -> Result<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 4 || !bytes.iter().all(u8::is_ascii_digit) {
            return Err(Error::InvalidVersion(s.to_string()));
        }
        let mut digits = [0u8; 4];
        digits.copy_from_slice(bytes);
        Ok(SnapshotVersion(digits))
    }

    /// Zero-padded version for a major release, e.g. 7 → `"0007"`
    pub fn from_major(major: u16) -> Result<Self> {
        if major > 9999 {
            return Err(Error::InvalidVersion(major.to_string()));
        }
        Self::parse(&format!("{:04}", major))
    }

    /// The header bytes
    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }

    /// Numeric value of the four digits
    pub fn number(&self) -> u16 {
        self.0
            .iter()
            .fold(0u16, |acc, d| acc * 10 + u16::from(d - b'0'))
    }
}

impl Default for SnapshotVersion {
    fn default() -> Self {
        SnapshotVersion(*b"0007")
    }
}

impl fmt::Display for SnapshotVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Digits were validated on construction
        for &d in &self.0 {
            write!(f, "{}", d as char)?;
        }
        Ok(())
    }
}

impl FromStr for SnapshotVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for SnapshotVersion {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<SnapshotVersion> for String {
    fn from(v: SnapshotVersion) -> String {
        v.to_string()
    }
}
