//! Clap command tree definition.
//!
//! Without a subcommand the tool encodes: `rdbdump [INPUT] [-o OUTPUT]`.
//! `rdbdump inspect FILE` decodes an existing snapshot.

use clap::{Arg, ArgAction, Command};

/// Build the complete CLI command tree.
pub fn build_cli() -> Command {
    Command::new("rdbdump")
        .about("rdbdump - CLI to stream a TOML file into rdb format")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(false)
        .args_conflicts_with_subcommands(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable debug logging on stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .args(encode_args())
        .subcommand(build_encode())
        .subcommand(build_inspect())
}

fn encode_args() -> Vec<Arg> {
    vec![
        Arg::new("input")
            .help("TOML file to convert (default: stdin)")
            .value_name("INPUT"),
        Arg::new("output")
            .short('o')
            .long("output")
            .help("Write the snapshot to this file atomically (default: stdout)")
            .value_name("OUTPUT"),
        Arg::new("gzipped")
            .short('g')
            .long("gzipped")
            .help("Whether the input file is gzipped (default: false)")
            .action(ArgAction::SetTrue),
        Arg::new("redis-version")
            .long("redis-version")
            .help("Target store version, e.g. 7.2.4 (default: $REDIS_VERSION or 7)")
            .value_name("VERSION"),
        Arg::new("le-checksum")
            .long("le-checksum")
            .help("Write the checksum trailer little-endian, as the store does on disk")
            .action(ArgAction::SetTrue),
    ]
}

fn build_encode() -> Command {
    Command::new("encode")
        .about("Convert a TOML document into a snapshot file")
        .args(encode_args())
}

fn build_inspect() -> Command {
    Command::new("inspect")
        .about("Decode a snapshot file and print its records")
        .arg(
            Arg::new("file")
                .help("Snapshot file to read")
                .value_name("FILE")
                .required(true),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("JSON output mode")
                .action(ArgAction::SetTrue)
                .conflicts_with("raw"),
        )
        .arg(
            Arg::new("raw")
                .long("raw")
                .help("Raw output mode (no type prefixes, no quotes)")
                .action(ArgAction::SetTrue),
        )
}
