// dockenv: Container Image Environment Exporter
//
// SPDX-FileCopyrightText: 2026 dockenv contributors
// SPDX-License-Identifier: MIT

//! Global CLI options.
//!
//! ```text
//! --runtime PROG    ← inspect binary (env: DOCKENV_RUNTIME)
//! --log-level N     ← stderr verbosity (0-6)
//! --file-log-level  ← file verbosity (overrides --log-level)
//! --log-file FILE   ← optional log file
//! ```

use clap::Args;
use std::path::PathBuf;

/// Global options.
#[derive(Debug, Clone, Args)]
pub struct GlobalOptions {
    /// Container runtime binary whose `inspect` subcommand is invoked.
    /// Anything CLI-compatible with docker works, e.g. podman.
    #[arg(
        short = 'r',
        long = "runtime",
        value_name = "PROGRAM",
        env = "DOCKENV_RUNTIME",
        default_value = "docker"
    )]
    pub runtime: String,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=dump).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}
