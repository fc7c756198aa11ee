// setup-toolchain-rs: GN Windows Toolchain Environment Setup - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration module.
//!
//! # Layering
//!
//! ```text
//! defaults < setup-toolchain.toml (optional) < SETUP_TOOLCHAIN_* env < CLI
//!        |
//!        v
//!     Config { [toolchain] compiler, harvest_timeout_secs }
//!        |
//!        + CLI positionals / env-backed flags
//!        v
//!  ToolchainConfig  (immutable input of one orchestrator run)
//! ```
//!
//! The SDK-preference flag and the override toolchain path are explicit
//! fields here, never read ambiently by the resolver, so command resolution
//! stays a pure function of its inputs.

pub mod loader;

#[cfg(test)]
mod tests;

use std::path::{Path, PathBuf};
use std::time::Duration;

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::core::env::types::Arch;

/// Default compiler executable looked for on the harvested PATH.
pub const DEFAULT_COMPILER: &str = "cl.exe";

/// Default bound on one vendor setup-script invocation.
pub const DEFAULT_HARVEST_TIMEOUT_SECS: u64 = 60;

/// File-backed settings (`setup-toolchain.toml`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub toolchain: ToolchainSettings,
}

/// The `[toolchain]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolchainSettings {
    /// Compiler executable name searched for on the harvested PATH.
    pub compiler: String,

    /// Timeout for one setup-script harvest, in seconds. 0 disables the
    /// bound.
    pub harvest_timeout_secs: u64,
}

impl Default for ToolchainSettings {
    fn default() -> Self {
        Self {
            compiler: DEFAULT_COMPILER.to_string(),
            harvest_timeout_secs: DEFAULT_HARVEST_TIMEOUT_SECS,
        }
    }
}

impl ToolchainSettings {
    /// Returns the harvest timeout, or `None` when disabled.
    #[must_use]
    pub const fn harvest_timeout(&self) -> Option<Duration> {
        if self.harvest_timeout_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(self.harvest_timeout_secs))
        }
    }
}

/// Immutable input of one toolchain setup run.
///
/// Assembled once from the CLI, the environment and [`Config`]; every
/// component below the orchestrator receives it by reference.
#[derive(Debug, Clone, Builder)]
pub struct ToolchainConfig {
    /// Toolchain root from the CLI positional; fallback for
    /// [`Self::override_root`] when the env override is unset.
    #[builder(setters(name = with_vs_root))]
    vs_root: Option<PathBuf>,

    /// Windows SDK directory; `None` when the caller passed an empty path.
    #[builder(setters(name = with_sdk_dir))]
    sdk_dir: Option<PathBuf>,

    /// Path-separator-joined directories holding build-local runtime DLLs.
    #[builder(setters(name = with_runtime_dirs), into)]
    runtime_dirs: String,

    /// The caller's designated build architecture.
    #[builder(setters(name = with_build_arch))]
    build_arch: Arch,

    /// Prefer the SDK's `SetEnv.Cmd` when an SDK directory is available
    /// (`DEPOT_TOOLS_WIN_TOOLCHAIN`, default on).
    #[builder(setters(name = with_prefer_sdk), default = true)]
    prefer_sdk: bool,

    /// Explicit build-tools root (`GYP_MSVS_OVERRIDE_PATH`).
    #[builder(setters(name = with_override_path))]
    override_path: Option<PathBuf>,

    /// Compiler executable name to locate.
    #[builder(setters(name = with_compiler), default = DEFAULT_COMPILER.to_string(), into)]
    compiler: String,

    /// Bound on one setup-script harvest; `None` leaves the child process
    /// unbounded.
    #[builder(setters(name = with_harvest_timeout))]
    harvest_timeout: Option<Duration>,

    /// Directory receiving the `environment.<arch>` files.
    #[builder(setters(name = with_out_dir), default = PathBuf::from("."))]
    out_dir: PathBuf,
}

impl ToolchainConfig {
    #[must_use]
    pub fn sdk_dir(&self) -> Option<&Path> {
        self.sdk_dir.as_deref()
    }

    #[must_use]
    pub fn runtime_dirs(&self) -> &str {
        &self.runtime_dirs
    }

    #[must_use]
    pub const fn build_arch(&self) -> Arch {
        self.build_arch
    }

    #[must_use]
    pub const fn prefer_sdk(&self) -> bool {
        self.prefer_sdk
    }

    /// The build-tools root used when the SDK script is not: the env
    /// override when set, the CLI toolchain root otherwise.
    #[must_use]
    pub fn override_root(&self) -> Option<&Path> {
        self.override_path.as_deref().or(self.vs_root.as_deref())
    }

    #[must_use]
    pub fn compiler(&self) -> &str {
        &self.compiler
    }

    #[must_use]
    pub const fn harvest_timeout(&self) -> Option<Duration> {
        self.harvest_timeout
    }

    #[must_use]
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }
}
