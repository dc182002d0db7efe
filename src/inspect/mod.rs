// dockenv: Container Image Environment Exporter
//
// SPDX-FileCopyrightText: 2026 dockenv contributors
// SPDX-License-Identifier: MIT

//! Environment fetching via the container runtime's inspect command.
//!
//! ```text
//! fetch_env(runtime, id)
//!        |
//!        v
//! <runtime> inspect --format={{json .ContainerConfig.Env}} <id>
//!        |
//!        v
//! ["PATH=/usr/bin", "TERM=xterm", ...]      (JSON array of strings)
//!        |
//!        v
//! split on FIRST '='  ->  EnvVar { key, value }
//! ```
//!
//! Failures propagate: a missing runtime, a non-zero exit, malformed JSON
//! (including JSON `null` for images without an env list) or an entry
//! without `=` all abort the run.

use tracing::debug;

use crate::error::{DockenvResult, EnvError};
use crate::process::ProcessBuilder;

/// Go template handed to `inspect`; emits the configured env as JSON.
pub const INSPECT_FORMAT: &str = "--format={{json .ContainerConfig.Env}}";

/// One environment assignment from the image configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvVar {
    /// Variable name, assumed to be a valid shell identifier.
    pub key: String,
    /// Raw value; may contain further `=`, quotes or control characters.
    pub value: String,
}

impl EnvVar {
    /// Splits a `KEY=VALUE` entry on the first `=`.
    ///
    /// The value keeps any further `=` characters.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::MissingSeparator`] if the entry has no `=`.
    pub fn parse(entry: &str) -> Result<Self, EnvError> {
        let (key, value) = entry
            .split_once('=')
            .ok_or_else(|| EnvError::MissingSeparator {
                entry: entry.to_string(),
            })?;
        Ok(Self {
            key: key.to_string(),
            value: value.to_string(),
        })
    }
}

/// Queries the container runtime for `id`'s configured environment.
///
/// # Errors
///
/// Returns an error if the runtime cannot be invoked, exits non-zero, or
/// emits output that is not a JSON array of `KEY=VALUE` strings.
pub async fn fetch_env(runtime: &str, id: &str) -> DockenvResult<Vec<EnvVar>> {
    let output = ProcessBuilder::new(runtime)
        .arg("inspect")
        .arg(INSPECT_FORMAT)
        .arg(id)
        .run()
        .await?;

    let vars = parse_env_json(output.stdout())?;
    debug!(id, count = vars.len(), "fetched environment");
    Ok(vars)
}

/// Decodes a JSON array of `KEY=VALUE` strings into [`EnvVar`]s, in order.
///
/// # Errors
///
/// Returns [`EnvError::MalformedJson`] if `raw` is not a JSON array of
/// strings, or [`EnvError::MissingSeparator`] if an entry has no `=`.
pub fn parse_env_json(raw: &str) -> Result<Vec<EnvVar>, EnvError> {
    let entries: Vec<String> =
        serde_json::from_str(raw.trim()).map_err(|e| EnvError::MalformedJson {
            message: e.to_string(),
        })?;

    entries.iter().map(|entry| EnvVar::parse(entry)).collect()
}

#[cfg(test)]
mod tests;
