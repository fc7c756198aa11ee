// setup-toolchain-rs: GN Windows Toolchain Environment Setup - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process builder with configuration options.
//!
//! ```text
//! ProcessBuilder
//!  • new(program) / shell(line)
//!  • arg/args/flag/timeout/encoding/name
//!
//! ProcessFlags: ALLOW_FAILURE
//! ```

use bitflags::bitflags;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::utility::encoding::Encoding;

bitflags! {
    /// Flags controlling process execution behavior.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ProcessFlags: u32 {
        /// Don't fail if the process exits with a non-zero status
        const ALLOW_FAILURE = 0x01;
    }
}

/// Output from a completed process.
#[derive(Debug, Clone, Default)]
pub struct ProcessOutput {
    exit_code: i32,
    stdout: String,
    stderr: String,
}

impl ProcessOutput {
    pub(super) const fn new(exit_code: i32, stdout: String, stderr: String) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
        }
    }

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

    /// Returns stdout and stderr as one stream, stdout first.
    ///
    /// The vendor setup scripts write warnings to stderr while the variable
    /// dump goes to stdout; the parse step sees both, like the reference
    /// `stderr=STDOUT` capture.
    #[must_use]
    pub fn combined(&self) -> String {
        let mut combined = self.stdout.clone();
        combined.push_str(&self.stderr);
        combined
    }

    /// Returns true if the process exited successfully (code 0).
    #[must_use]
    pub const fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Builder for configuring and running a child process.
#[derive(Debug)]
pub struct ProcessBuilder {
    /// Path to the executable
    program: PathBuf,
    /// Command-line arguments
    args: Vec<String>,
    /// Process flags
    flags: ProcessFlags,
    /// Timeout for the process
    timeout: Option<Duration>,
    /// Encoding of the captured output
    encoding: Encoding,
    /// Display name for logging
    name: Option<String>,
}

impl ProcessBuilder {
    /// Creates a new `ProcessBuilder` for the given program.
    pub fn new(program: impl AsRef<Path>) -> Self {
        Self {
            program: program.as_ref().to_path_buf(),
            args: Vec::new(),
            flags: ProcessFlags::empty(),
            timeout: None,
            encoding: Encoding::Unknown,
            name: None,
        }
    }

    /// Creates a `ProcessBuilder` that runs a raw command line through the
    /// platform shell (`cmd.exe /s /c` on Windows, `sh -c` elsewhere).
    #[must_use]
    pub fn shell(line: impl Into<String>) -> Self {
        let line = line.into();

        #[cfg(windows)]
        let (program, args) = ("cmd.exe", vec!["/s".to_string(), "/c".to_string(), line]);
        #[cfg(not(windows))]
        let (program, args) = ("sh", vec!["-c".to_string(), line]);

        let mut builder = Self::new(program);
        builder.args = args;
        builder
    }

    /// Adds an argument.
    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Adds multiple arguments.
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Adds process flags.
    #[must_use]
    pub fn flag(mut self, flags: ProcessFlags) -> Self {
        self.flags |= flags;
        self
    }

    /// Bounds the process runtime; expiry kills the child and fails the run.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the encoding used to decode captured output.
    #[must_use]
    pub const fn encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Overrides the display name used in logs and errors.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub(super) fn program(&self) -> &Path {
        &self.program
    }

    pub(super) fn args_slice(&self) -> &[String] {
        &self.args
    }

    pub(super) const fn process_flags(&self) -> ProcessFlags {
        self.flags
    }

    pub(super) const fn timeout_value(&self) -> Option<Duration> {
        self.timeout
    }

    pub(super) const fn output_encoding(&self) -> Encoding {
        self.encoding
    }

    pub(super) fn name_override(&self) -> Option<&str> {
        self.name.as_deref()
    }
}
