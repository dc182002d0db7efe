// dockenv: Container Image Environment Exporter
//
// SPDX-FileCopyrightText: 2026 dockenv contributors
// SPDX-License-Identifier: MIT

//! Export command implementation.
//!
//! Fetches the image environment and prints one `export KEY=VALUE` line per
//! variable to stdout, in fetch order. Nothing is printed if the fetch or
//! the parse fails; the whole run aborts instead.

use std::io::Write as _;

use crate::error::DockenvResult;
use crate::inspect::{EnvVar, fetch_env};
use crate::quote::quote;

/// Main handler for the export run.
///
/// # Errors
///
/// Returns an error if the environment cannot be fetched or stdout cannot
/// be written.
pub async fn run_export_command(image: &str, runtime: &str) -> DockenvResult<()> {
    let vars = fetch_env(runtime, image).await?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for var in &vars {
        writeln!(out, "{}", export_line(var))?;
    }
    Ok(())
}

/// Renders a single `export KEY=VALUE` line with the value shell-quoted.
///
/// The key is emitted as-is; image metadata already constrains it to a
/// valid shell identifier.
#[must_use]
pub fn export_line(var: &EnvVar) -> String {
    format!("export {}={}", var.key, quote(&var.value))
}
