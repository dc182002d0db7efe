// dockenv: Container Image Environment Exporter
//
// SPDX-FileCopyrightText: 2026 dockenv contributors
// SPDX-License-Identifier: MIT

//! Process execution.
//!
//! ```text
//! ProcessBuilder::new(program).arg(..).run()
//!              |
//!              v
//!      which(program)          -> ExecutableNotFound
//!              |
//!              v
//!          spawn()             -> SpawnFailed
//!      stdin null, stdout/stderr piped, kill_on_drop
//!              |
//!              v
//!      wait_with_output()      -> OutputError
//!              |
//!              v
//!      validate exit code      -> NonZeroExit
//!              |
//!              v
//!       ProcessOutput { exit_code, stdout, stderr }
//! ```

use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, error, trace};

use crate::error::{DockenvResult, ProcessError};

/// Output from a completed process.
#[derive(Debug, Clone, Default)]
pub struct ProcessOutput {
    exit_code: i32,
    stdout: String,
    stderr: String,
}

impl ProcessOutput {
    /// Returns the process exit code (0 = success).
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.exit_code
    }

    /// Returns captured stdout.
    #[must_use]
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    /// Returns captured stderr.
    #[must_use]
    pub fn stderr(&self) -> &str {
        &self.stderr
    }

    /// Returns true if the process exited successfully (code 0).
    #[must_use]
    pub const fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Builder for a single external command invocation with buffered output.
#[derive(Debug, Clone)]
pub struct ProcessBuilder {
    program: String,
    args: Vec<String>,
}

impl ProcessBuilder {
    /// Creates a builder for `program`, resolved through PATH at run time.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Appends a single argument.
    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Appends multiple arguments.
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Returns the full command line as a string (for logging and errors).
    fn command_line(&self) -> String {
        let mut cmd = self.program.clone();
        for arg in &self.args {
            if arg.contains(' ') {
                use std::fmt::Write as _;
                let _ = write!(cmd, " \"{arg}\"");
            } else {
                use std::fmt::Write as _;
                let _ = write!(cmd, " {arg}");
            }
        }
        cmd
    }

    /// Spawns the process and waits for completion with output fully buffered.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The program cannot be found in PATH.
    /// - Spawning the child process fails.
    /// - Reading the child's output fails.
    /// - The process exits with a non-zero status.
    pub async fn run(self) -> DockenvResult<ProcessOutput> {
        let cmd_line = self.command_line();

        let program = which::which(&self.program).map_err(|_| ProcessError::ExecutableNotFound {
            name: self.program.clone(),
        })?;
        debug!(cmd = %cmd_line, "exec");

        let mut command = Command::new(program);
        command
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let child = command.spawn().map_err(|source| ProcessError::SpawnFailed {
            command: cmd_line.clone(),
            source,
        })?;
        trace!(process = %self.program, pid = ?child.id(), "spawned");

        let output =
            child
                .wait_with_output()
                .await
                .map_err(|e| ProcessError::OutputError {
                    command: cmd_line.clone(),
                    message: e.to_string(),
                })?;

        // Killed-by-signal has no code; report it as -1
        let exit_code = output.status.code().unwrap_or(-1);
        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if exit_code != 0 {
            if !stderr.is_empty() {
                error!(process = %self.program, stderr = %stderr, "process error output");
            }
            return Err(ProcessError::NonZeroExit {
                command: cmd_line,
                code: exit_code,
            }
            .into());
        }

        trace!(process = %self.program, exit_code, "completed");
        Ok(ProcessOutput {
            exit_code,
            stdout,
            stderr,
        })
    }
}
