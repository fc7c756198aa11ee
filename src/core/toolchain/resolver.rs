// setup-toolchain-rs: GN Windows Toolchain Environment Setup - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Setup-command resolution.
//!
//! ```text
//! resolve(arch, config)
//!   prefer_sdk && sdk_dir --> <sdk>/Bin/SetEnv.Cmd  /x86|/x64|/arm64
//!   otherwise             --> <override>/VC/Auxiliary/Build/vcvarsall.bat
//!                             amd64_x86|amd64|amd64_arm64
//! ```
//!
//! Pure function of its inputs; the SDK-preference flag and override path
//! live on [`ToolchainConfig`], never in ambient process state.

use std::path::PathBuf;

use crate::config::ToolchainConfig;
use crate::core::env::types::Arch;
use crate::error::ConfigError;

/// Relative location of the SDK environment-setup script.
const SETENV_CMD: &str = "Bin/SetEnv.Cmd";

/// Relative location of the build-tools setup batch file.
const VCVARSALL_BAT: &str = "VC/Auxiliary/Build/vcvarsall.bat";

/// A resolved vendor setup invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupCommand {
    program: PathBuf,
    args: Vec<String>,
    used_sdk: bool,
}

impl SetupCommand {
    #[must_use]
    pub fn program(&self) -> &std::path::Path {
        &self.program
    }

    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Whether the SDK's script was chosen; controls the INCLUDE
    /// augmentation later.
    #[must_use]
    pub const fn used_sdk(&self) -> bool {
        self.used_sdk
    }

    /// The shell line running this command, without the dump suffix.
    #[must_use]
    pub fn shell_line(&self) -> String {
        format!("\"{}\" {}", self.program.display(), self.args.join(" "))
    }
}

/// Decides which external setup command enables the toolchain for `arch`.
///
/// # Errors
///
/// Returns [`ConfigError::MissingOverridePath`] when the SDK script is not
/// usable and no override toolchain root is configured. This is fatal
/// before any process is spawned.
pub fn resolve(
    arch: Arch,
    config: &ToolchainConfig,
) -> std::result::Result<SetupCommand, ConfigError> {
    if config.prefer_sdk()
        && let Some(sdk_dir) = config.sdk_dir()
    {
        return Ok(SetupCommand {
            program: sdk_dir.join(SETENV_CMD),
            args: vec![arch.setenv_arg().to_string()],
            used_sdk: true,
        });
    }

    let root = config
        .override_root()
        .ok_or(ConfigError::MissingOverridePath)?;
    Ok(SetupCommand {
        program: root.join(VCVARSALL_BAT),
        args: vec![arch.vcvars_arg().to_string()],
        used_sdk: false,
    })
}
