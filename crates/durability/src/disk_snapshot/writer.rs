//! Crash-safe snapshot file writer
//!
//! Uses write-fsync-rename pattern for atomic snapshot creation.
//!
//! # Crash Safety
//!
//! Writing `dump.rdb` follows this pattern:
//! 1. Write to temporary file (`.dump.rdb.tmp`) in the same directory
//! 2. fsync the temporary file
//! 3. Atomic rename to the final path
//! 4. fsync the parent directory
//!
//! Either the complete snapshot exists at the final path or the previous
//! file is left untouched.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

/// Writes snapshot bytes to disk atomically
#[derive(Debug, Clone)]
pub struct SnapshotFileWriter {
    path: PathBuf,
}

impl SnapshotFileWriter {
    /// Create a writer targeting `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SnapshotFileWriter { path: path.into() }
    }

    /// Final snapshot path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Temporary path used while writing
    pub fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "dump.rdb".to_string());
        self.parent_dir().join(format!(".{name}.tmp"))
    }

    /// Write `bytes` to the final path using the crash-safe pattern
    ///
    /// Returns the number of bytes written.
    pub fn write(&self, bytes: &[u8]) -> io::Result<u64> {
        let dir = self.parent_dir();
        std::fs::create_dir_all(&dir)?;

        let temp_path = self.temp_path();
        debug!(path = %temp_path.display(), "Writing snapshot to temporary file");

        // A leftover from an interrupted run would make create_new fail
        if temp_path.exists() {
            std::fs::remove_file(&temp_path)?;
        }

        // Steps 1-3: write, fsync, rename. The temp file never outlives a failure.
        if let Err(e) = self.write_and_rename(&temp_path, bytes) {
            let _ = std::fs::remove_file(&temp_path);
            return Err(e);
        }

        // Step 4: fsync parent directory
        sync_dir(&dir)?;

        info!(
            path = %self.path.display(),
            size_bytes = bytes.len(),
            "Snapshot written"
        );
        Ok(bytes.len() as u64)
    }

    fn write_and_rename(&self, temp_path: &Path, bytes: &[u8]) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create_new(true)
            .write(true)
            .open(temp_path)?;
        file.write_all(bytes)?;
        file.sync_all()?;
        drop(file);
        std::fs::rename(temp_path, &self.path)
    }

    /// Remove a temporary file left behind by a crash
    ///
    /// Returns whether a file was removed.
    pub fn cleanup_temp_file(&self) -> io::Result<bool> {
        let temp_path = self.temp_path();
        if temp_path.exists() {
            std::fs::remove_file(&temp_path)?;
            debug!(path = %temp_path.display(), "Removed stale temporary snapshot");
            return Ok(true);
        }
        Ok(false)
    }

    /// Check if a temporary file exists
    pub fn temp_file_exists(&self) -> bool {
        self.temp_path().exists()
    }

    fn parent_dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }
}

#[cfg(unix)]
fn sync_dir(dir: &Path) -> io::Result<()> {
    File::open(dir)?.sync_all()
}

// Directories cannot be opened for syncing on Windows
#[cfg(not(unix))]
fn sync_dir(_dir: &Path) -> io::Result<()> {
    Ok(())
}
