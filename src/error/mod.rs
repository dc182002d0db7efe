// dockenv: Container Image Environment Exporter
//
// SPDX-FileCopyrightText: 2026 dockenv contributors
// SPDX-License-Identifier: MIT

//! Error handling module.
//!
//! ```text
//!           DockenvError (16 bytes)
//!                  |
//!        +---------+---------+
//!        v         v         v
//!     Process     Env        Io
//!      Box        Box        Box
//!
//! Sub-errors (unboxed internally):
//!   Process  ExecutableNotFound, SpawnFailed, NonZeroExit, OutputError
//!   Env      MalformedJson, MissingSeparator
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`DockenvError`].
pub type DockenvResult<T> = std::result::Result<T, DockenvError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at 16 bytes on the stack.
#[derive(Debug, Error)]
pub enum DockenvError {
    /// Runtime invocation failed.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// Environment list could not be decoded.
    #[error("env error: {0}")]
    Env(#[from] Box<EnvError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for DockenvError {
                fn from(err: $error) -> Self {
                    DockenvError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ProcessError => Process,
    EnvError => Env,
    std::io::Error => Io,
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process exited with non-zero status.
    #[error("process '{command}' exited with code {code}")]
    NonZeroExit { command: String, code: i32 },

    /// Failed to read process output.
    #[error("failed to read output from process '{command}': {message}")]
    OutputError { command: String, message: String },
}

// --- Env Errors ---

/// Environment list decoding errors.
#[derive(Debug, Error)]
pub enum EnvError {
    /// The runtime's inspect output was not a JSON array of strings.
    #[error("malformed env JSON from runtime: {message}")]
    MalformedJson { message: String },

    /// An environment entry had no `=` separator.
    #[error("environment entry missing '=': {entry:?}")]
    MissingSeparator { entry: String },
}
