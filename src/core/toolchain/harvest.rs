// setup-toolchain-rs: GN Windows Toolchain Environment Setup - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment harvesting through the vendor setup script.
//!
//! ```text
//! harvest(SetupCommand)
//!   shell: "<setup script>" <arch arg> && set
//!   one child per call; combined stdout+stderr
//!   non-zero exit tolerated (vcvars warns on stderr)
//!   bytes --> utility::encoding --> RawEnvironmentDump (String)
//! ```
//!
//! The dump command runs in the same shell session as the setup script so
//! the variables it mutated are visible. Whether the dump is usable is
//! decided later by the filter's validation, not here.

use std::time::Duration;

use tracing::{Level, debug, enabled, trace};

use crate::core::process::builder::{ProcessBuilder, ProcessFlags};
use crate::error::Result;
use crate::utility::encoding::Encoding;

use super::resolver::SetupCommand;

/// The shell built-in that prints `NAME=value` lines.
const fn default_dump_command() -> &'static str {
    if cfg!(windows) { "set" } else { "env" }
}

/// Runs a resolved setup command and captures the resulting environment
/// dump.
#[derive(Debug, Clone)]
pub struct Harvester {
    dump_command: String,
    timeout: Option<Duration>,
    encoding: Encoding,
}

impl Default for Harvester {
    fn default() -> Self {
        Self::new()
    }
}

impl Harvester {
    #[must_use]
    pub fn new() -> Self {
        Self {
            dump_command: default_dump_command().to_string(),
            timeout: None,
            encoding: Encoding::console_default(),
        }
    }

    /// Replaces the environment-dump command (tests use a no-op here).
    #[must_use]
    pub fn with_dump_command(mut self, command: impl Into<String>) -> Self {
        self.dump_command = command.into();
        self
    }

    /// Bounds the setup-script invocation; expiry is a harvesting failure.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Overrides the assumed console output encoding.
    #[must_use]
    pub const fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Invokes the setup command inside a shell, chains the dump command in
    /// the same session, and returns the combined output as the raw dump.
    ///
    /// A non-zero exit is not itself fatal; the setup scripts emit warnings
    /// and the subsequent parse decides success.
    ///
    /// # Errors
    ///
    /// Returns an error if the shell cannot be spawned or the timeout
    /// expires.
    pub async fn harvest(&self, setup: &SetupCommand) -> Result<String> {
        let line = format!("{} && {}", setup.shell_line(), self.dump_command);
        debug!(cmd = %line, "harvesting environment");

        let mut builder = ProcessBuilder::shell(line)
            .flag(ProcessFlags::ALLOW_FAILURE)
            .encoding(self.encoding)
            .name("setup-script");
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let output = builder.run().await?;
        if !output.success() {
            debug!(
                exit_code = output.exit_code(),
                "setup script exited non-zero; deferring to dump validation"
            );
        }

        let dump = output.combined();
        if enabled!(Level::TRACE) {
            trace!(bytes = dump.len(), "captured raw environment dump");
        }
        Ok(dump)
    }
}
