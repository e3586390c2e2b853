//! rdbdump: stream a TOML document into a Redis RDB snapshot.
//!
//! Two actions:
//! - **Encode** (default): `rdbdump [-g] [INPUT] [-o OUTPUT]` reads TOML from a
//!   file or stdin and writes the snapshot to stdout or atomically to a file
//! - **Inspect**: `rdbdump inspect FILE` verifies and prints an existing snapshot
//!
//! Logs go to stderr; stdout carries only the snapshot or the inspect output.

mod commands;
mod document;
mod env;
mod format;
mod input;
mod parse;

use std::io::{self, Write};
use std::path::Path;
use std::process;

use anyhow::Context;
use rdbdump_durability::{
    ChecksumByteOrder, SnapshotAssembler, SnapshotConfig, SnapshotFileWriter, SnapshotReader,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use commands::build_cli;
use format::{format_error, format_snapshot, OutputMode};
use parse::{matches_to_action, CliAction, EncodeOptions};

fn main() {
    let matches = build_cli().get_matches();
    init_tracing(matches.get_flag("verbose"));

    let action = matches_to_action(&matches);
    let mode = match &action {
        CliAction::Inspect { mode, .. } => *mode,
        CliAction::Encode(_) => OutputMode::Human,
    };

    if let Err(e) = run(action) {
        eprintln!("{}", format_error(&e, mode));
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn run(action: CliAction) -> anyhow::Result<()> {
    match action {
        CliAction::Encode(opts) => run_encode(&opts),
        CliAction::Inspect { path, mode } => run_inspect(&path, mode),
    }
}

fn run_encode(opts: &EncodeOptions) -> anyhow::Result<()> {
    let env_version = env::redis_version_from_env();
    let version = env::resolve_version(opts.redis_version.as_deref(), env_version.as_deref())
        .context("invalid target version")?;

    let checksum_order = if opts.le_checksum {
        ChecksumByteOrder::LittleEndian
    } else {
        ChecksumByteOrder::BigEndian
    };
    let config = SnapshotConfig::default()
        .with_version(version)
        .with_checksum_order(checksum_order);
    config.validate().context("invalid snapshot configuration")?;

    let raw = input::read_input(opts.input.as_deref(), opts.gzipped).with_context(|| {
        match &opts.input {
            Some(p) => format!("failed to read {}", p.display()),
            None => "failed to read stdin".to_string(),
        }
    })?;
    debug!(bytes = raw.len(), gzipped = opts.gzipped, "Input loaded");

    let doc = document::parse_document_bytes(raw).context("failed to parse input")?;
    let (bytes, snapshot) = SnapshotAssembler::new(config)
        .assemble_with_info(&doc)
        .context("failed to encode snapshot")?;

    match &opts.output {
        Some(path) => {
            SnapshotFileWriter::new(path)
                .write(&bytes)
                .with_context(|| format!("failed to write {}", path.display()))?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&bytes).context("failed to write stdout")?;
            stdout.flush().context("failed to flush stdout")?;
        }
    }
    info!(
        version = %snapshot.version,
        entries = snapshot.entries,
        size_bytes = snapshot.size_bytes,
        "Conversion complete"
    );
    Ok(())
}

fn run_inspect(path: &Path, mode: OutputMode) -> anyhow::Result<()> {
    let snapshot = SnapshotReader::new()
        .load(path)
        .with_context(|| format!("failed to read snapshot {}", path.display()))?;

    let formatted = format_snapshot(&snapshot, mode);
    if !formatted.is_empty() {
        println!("{}", formatted);
    }
    Ok(())
}
