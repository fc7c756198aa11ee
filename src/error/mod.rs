// setup-toolchain-rs: GN Windows Toolchain Environment Setup - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!            SetupError (~24 bytes)
//!                   |
//!     +------+-----+------+-------+
//!     |      |     |      |       |
//!     v      v     v      v       v
//!    Cfg    Env   Proc  Stage   Io
//!    Box    Box   Box    Box   Box<..>
//!
//! Sub-errors (unboxed internally):
//!   Config  MissingOverridePath, UnsupportedArch
//!   Env     MissingRequired, MalformedBlock
//!   Process SpawnFailed, NonZeroExit, Timeout
//!   Stage   PackageRootMissing, IoError
//!
//! CompilerNotFound is top-level: it is the terminal verdict of a
//! whole run, not a sub-system failure.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum SetupError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Environment capture or validation error.
    #[error("environment error: {0}")]
    Env(#[from] Box<EnvError>),

    /// Process execution error.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// Package staging error.
    #[error("stage error: {0}")]
    Stage(#[from] Box<StageError>),

    /// No directory on the designated architecture's PATH contained the
    /// compiler executable.
    #[error("compiler '{executable}' not found on PATH for {arch}")]
    CompilerNotFound { executable: String, arch: String },

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for SetupError {
                fn from(err: $error) -> Self {
                    SetupError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ConfigError => Config,
    EnvError => Env,
    ProcessError => Process,
    StageError => Stage,
    std::io::Error => Io,
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The SDK directory was not usable and no override toolchain path was
    /// configured. Fatal before any process is spawned.
    #[error(
        "no usable SDK directory and no override toolchain path \
         (set GYP_MSVS_OVERRIDE_PATH or pass a toolchain root)"
    )]
    MissingOverridePath,

    /// Unsupported target architecture value.
    #[error("unsupported target architecture '{value}' (expected x86, x64 or arm64)")]
    UnsupportedArch { value: String },
}

// --- Environment Errors ---

/// Environment capture and validation errors.
#[derive(Debug, Error)]
pub enum EnvError {
    /// A load-bearing variable was absent after filtering. SYSTEMROOT, TEMP
    /// and TMP are required for process creation and temp-file usage in
    /// later build steps.
    #[error("environment variable \"{name}\" required to be set to valid path")]
    MissingRequired { name: String },

    /// An environment block did not follow the `KEY=value\0...\0` format.
    #[error("malformed environment block: {message}")]
    MalformedBlock { message: String },
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
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

    /// Process timed out.
    #[error("process '{command}' timed out after {timeout_secs} seconds")]
    Timeout { command: String, timeout_secs: u64 },
}

// --- Stage Errors ---

/// Package staging errors.
#[derive(Debug, Error)]
pub enum StageError {
    /// The input root does not contain the expected package.
    #[error("package root not found: {path}")]
    PackageRootMissing { path: String },

    /// General I/O error while copying.
    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests;
