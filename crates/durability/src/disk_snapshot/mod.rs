//! Crash-safe snapshot file I/O

pub mod writer;

pub use writer::SnapshotFileWriter;
