//! Target version selection.
//!
//! Precedence: `--redis-version`, then `REDIS_VERSION`, then major 7.
//! Only the major component of a semantic version matters; it becomes the
//! four header digits.

use once_cell::sync::Lazy;
use rdbdump_core::{SnapshotVersion, DEFAULT_MAJOR_VERSION};
use regex::Regex;
use tracing::{debug, warn};

/// Environment variable naming the target store version.
pub const REDIS_VERSION_ENV: &str = "REDIS_VERSION";

const SEMVER_REGEX: &str = r"^([0-9]+)(\.[0-9]+)?(\.[0-9]+)?";

static SEMVER: Lazy<Regex> = Lazy::new(|| Regex::new(SEMVER_REGEX).expect("static regex"));

/// Extract the major component of a version string.
///
/// Returns `None` if the string does not start with digits.
pub fn parse_major_version(version: &str) -> Option<&str> {
    SEMVER
        .captures(version.trim())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Resolve the snapshot version from the flag and environment values.
pub fn resolve_version(
    flag: Option<&str>,
    env_value: Option<&str>,
) -> rdbdump_core::Result<SnapshotVersion> {
    let (source, raw) = match (flag, env_value) {
        (Some(v), _) => ("--redis-version", v),
        (None, Some(v)) => (REDIS_VERSION_ENV, v),
        (None, None) => return SnapshotVersion::from_major(DEFAULT_MAJOR_VERSION),
    };

    let Some(major) = parse_major_version(raw) else {
        warn!(source, value = raw, "Unrecognized version, using default");
        return SnapshotVersion::from_major(DEFAULT_MAJOR_VERSION);
    };

    let major: u16 = major
        .parse()
        .map_err(|_| rdbdump_core::Error::InvalidVersion(raw.to_string()))?;
    let version = SnapshotVersion::from_major(major)?;
    debug!(source, value = raw, %version, "Resolved snapshot version");
    Ok(version)
}

/// Read `REDIS_VERSION` from the process environment.
pub fn redis_version_from_env() -> Option<String> {
    std::env::var(REDIS_VERSION_ENV).ok()
}
