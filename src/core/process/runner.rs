// setup-toolchain-rs: GN Windows Toolchain Environment Setup - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process execution.
//!
//! ```text
//! run()
//!   |
//!   v
//! tokio Command (stdin null, stdout/stderr piped, kill_on_drop)
//!   |
//!   v
//! output() [wrapped in tokio::time::timeout when bounded]
//!   |
//!   v
//! decode (utility::encoding) --> validate exit code (skip if ALLOW_FAILURE)
//!   |
//!   v
//! ProcessOutput { exit_code, stdout, stderr }
//! ```

use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, error, trace};

use crate::error::{ProcessError, Result};
use crate::utility::encoding::bytes_to_utf8;

use super::builder::{ProcessBuilder, ProcessFlags, ProcessOutput};

impl ProcessBuilder {
    /// Returns the display name for this process.
    fn display_name(&self) -> String {
        self.name_override().map_or_else(
            || {
                self.program().file_stem().map_or_else(
                    || "process".to_string(),
                    |s| s.to_string_lossy().into_owned(),
                )
            },
            String::from,
        )
    }

    /// Returns the full command line as a string (for logging).
    fn command_line(&self) -> String {
        let mut cmd = format!("{}", self.program().display());
        for arg in self.args_slice() {
            use std::fmt::Write as _;
            if arg.contains(' ') {
                let _ = write!(cmd, " \"{arg}\"");
            } else {
                let _ = write!(cmd, " {arg}");
            }
        }
        cmd
    }

    /// Spawns and runs the process, waiting for completion.
    ///
    /// Both output streams are captured and decoded with the configured
    /// encoding.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Spawning the child process fails.
    /// - The configured timeout expires (the child is killed).
    /// - The process exits non-zero and `ALLOW_FAILURE` is not set.
    pub async fn run(self) -> Result<ProcessOutput> {
        let name = self.display_name();
        let cmd_line = self.command_line();

        debug!(cmd = %cmd_line, "exec");

        let mut command = Command::new(self.program());
        command
            .args(self.args_slice())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            // Dropping the output future on timeout must not leak the child.
            .kill_on_drop(true);

        let raw = match self.timeout_value() {
            Some(duration) => tokio::time::timeout(duration, command.output())
                .await
                .map_err(|_| ProcessError::Timeout {
                    command: cmd_line.clone(),
                    timeout_secs: duration.as_secs(),
                })?,
            None => command.output().await,
        }
        .map_err(|source| ProcessError::SpawnFailed {
            command: cmd_line.clone(),
            source,
        })?;

        let exit_code = raw.status.code().unwrap_or(-1);
        let stdout = bytes_to_utf8(self.output_encoding(), &raw.stdout).into_owned();
        let stderr = bytes_to_utf8(self.output_encoding(), &raw.stderr).into_owned();
        let output = ProcessOutput::new(exit_code, stdout, stderr);

        if !self.process_flags().contains(ProcessFlags::ALLOW_FAILURE) && !output.success() {
            if !output.stderr().is_empty() {
                error!(process = %name, stderr = %output.stderr(), "process error output");
            }
            return Err(ProcessError::NonZeroExit {
                command: cmd_line,
                code: output.exit_code(),
            }
            .into());
        }

        trace!(process = %name, exit_code = output.exit_code(), "completed");
        Ok(output)
    }
}
