// setup-toolchain-rs: GN Windows Toolchain Environment Setup - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Types for environment variable management.
//!
//! # Architecture
//!
//! ```text
//! Arch: X86 → "amd64_x86" / X64 → "amd64" / Arm64 → "amd64_arm64" (vcvars_arg)
//!       "/x86" / "/x64" / "/arm64" (setenv_arg), "x86"/"x64"/"arm64" (Display)
//! EnvFlags: Replace | Append | Prepend
//! EnvKey: case-insensitive (PATH == Path == path)
//! EnvData: BTreeMap<EnvKey, String> for deterministic order
//! ```

use std::collections::BTreeMap;
use std::str::FromStr;

use crate::error::ConfigError;

/// Target architecture for builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arch {
    /// 32-bit x86
    X86,
    /// 64-bit x86-64
    X64,
    /// 64-bit ARM
    Arm64,
}

impl Arch {
    /// All supported architectures, in the order they are processed.
    pub const ALL: [Self; 3] = [Self::X86, Self::X64, Self::Arm64];

    /// Returns the vcvarsall architecture argument.
    ///
    /// Only x64-hosted tools are supported, so every variant cross-targets
    /// from an amd64 host.
    #[must_use]
    pub const fn vcvars_arg(&self) -> &'static str {
        match self {
            Self::X86 => "amd64_x86",
            Self::X64 => "amd64",
            Self::Arm64 => "amd64_arm64",
        }
    }

    /// Returns the `SetEnv.Cmd` architecture flag.
    #[must_use]
    pub const fn setenv_arg(&self) -> &'static str {
        match self {
            Self::X86 => "/x86",
            Self::X64 => "/x64",
            Self::Arm64 => "/arm64",
        }
    }

    /// Returns the short name used in output file names (`environment.<arch>`).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::X86 => "x86",
            Self::X64 => "x64",
            Self::Arm64 => "arm64",
        }
    }
}

impl std::fmt::Display for Arch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Arch {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "x86" => Ok(Self::X86),
            "x64" => Ok(Self::X64),
            "arm64" => Ok(Self::Arm64),
            other => Err(ConfigError::UnsupportedArch {
                value: other.to_string(),
            }),
        }
    }
}

/// Flags for environment variable operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnvFlags {
    /// Replace the existing value (default)
    #[default]
    Replace,
    /// Append to the existing value
    Append,
    /// Prepend to the existing value
    Prepend,
}

/// A case-insensitive environment variable key (Windows-compatible).
#[derive(Debug, Clone, Eq)]
pub(super) struct EnvKey(String);

impl EnvKey {
    pub(super) fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub(super) fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq for EnvKey {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl std::hash::Hash for EnvKey {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        for c in self.0.chars() {
            c.to_ascii_lowercase().hash(state);
        }
    }
}

impl PartialOrd for EnvKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EnvKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0
            .to_ascii_lowercase()
            .cmp(&other.0.to_ascii_lowercase())
    }
}

/// Backing map for [`super::snapshot::Snapshot`].
#[derive(Debug, Clone, Default)]
pub(super) struct EnvData {
    vars: BTreeMap<EnvKey, String>,
}

impl EnvData {
    pub(super) const fn new() -> Self {
        Self {
            vars: BTreeMap::new(),
        }
    }

    pub(super) const fn from_vars(vars: BTreeMap<EnvKey, String>) -> Self {
        Self { vars }
    }

    pub(super) const fn vars(&self) -> &BTreeMap<EnvKey, String> {
        &self.vars
    }

    pub(super) const fn vars_mut(&mut self) -> &mut BTreeMap<EnvKey, String> {
        &mut self.vars
    }
}
