//! ArgMatches → CliAction conversion.
//!
//! Translates clap's parsed arguments into one of:
//! - `CliAction::Encode`: TOML in, snapshot out (top level or `encode`)
//! - `CliAction::Inspect`: decode and print a snapshot

use std::path::PathBuf;

use clap::ArgMatches;

use crate::format::OutputMode;

/// The result of parsing the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    /// Convert a TOML document into a snapshot.
    Encode(EncodeOptions),
    /// Decode a snapshot file.
    Inspect { path: PathBuf, mode: OutputMode },
}

/// Options for the encode action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Input file, stdin when absent.
    pub input: Option<PathBuf>,
    /// Output file, stdout when absent.
    pub output: Option<PathBuf>,
    /// Input is gzip-compressed.
    pub gzipped: bool,
    /// Explicit `--redis-version`, overrides the environment.
    pub redis_version: Option<String>,
    /// Little-endian checksum trailer.
    pub le_checksum: bool,
}

/// Convert parsed arguments into an action.
pub fn matches_to_action(matches: &ArgMatches) -> CliAction {
    match matches.subcommand() {
        Some(("inspect", sub)) => {
            let mode = if sub.get_flag("json") {
                OutputMode::Json
            } else if sub.get_flag("raw") {
                OutputMode::Raw
            } else {
                OutputMode::Human
            };
            CliAction::Inspect {
                path: sub
                    .get_one::<String>("file")
                    .map(PathBuf::from)
                    .unwrap_or_default(),
                mode,
            }
        }
        Some(("encode", sub)) => CliAction::Encode(encode_options(sub)),
        _ => CliAction::Encode(encode_options(matches)),
    }
}

fn encode_options(matches: &ArgMatches) -> EncodeOptions {
    EncodeOptions {
        input: matches.get_one::<String>("input").map(PathBuf::from),
        output: matches.get_one::<String>("output").map(PathBuf::from),
        gzipped: matches.get_flag("gzipped"),
        redis_version: matches.get_one::<String>("redis-version").cloned(),
        le_checksum: matches.get_flag("le-checksum"),
    }
}
