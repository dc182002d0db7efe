// dockenv: Container Image Environment Exporter
//
// SPDX-FileCopyrightText: 2026 dockenv contributors
// SPDX-License-Identifier: MIT

//! CLI module for dockenv using clap derive.
//!
//! ```text
//! dockenv [global options] <IMAGE>
//! ```

pub mod global;


use crate::cli::global::GlobalOptions;
use clap::Parser;

/// Container Image Environment Exporter
///
/// Prints an image's configured environment as shell `export` statements.
#[derive(Debug, Parser)]
#[command(
    name = "dockenv",
    author,
    version,
    about = "Export a container image's environment as shell statements",
    long_about = "Queries the container runtime for the environment configured\n\
                  in an image (or container) and prints one `export KEY=VALUE`\n\
                  line per variable, quoted so that arbitrary values survive\n\
                  shell evaluation byte-for-byte.\n\n\
                  Values are wrapped in plain single quotes when possible and\n\
                  fall back to ANSI-C `$'...'` quoting for control characters\n\
                  and backslashes, so the output requires a POSIX-compatible\n\
                  shell with the `$'...'` extension (bash, dash >= 0.5.2, ash).",
    after_help = "USAGE WITH EVAL:\n\n\
                  The output is meant to be evaluated by the calling shell:\n\n  \
                  eval \"$(dockenv alpine:3.19)\"\n\n\
                  Diagnostics go to stderr; stdout carries only export lines."
)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Image or container identifier handed to the runtime's inspect subcommand.
    #[arg(value_name = "IMAGE")]
    pub image: String,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version
/// information was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
