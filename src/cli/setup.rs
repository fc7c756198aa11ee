// setup-toolchain-rs: GN Windows Toolchain Environment Setup - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments of the `setup` subcommand.
//!
//! The four positionals mirror the GN-side invocation:
//!
//! ```text
//! setup-toolchain setup <vs_path> <sdk_path> <runtime_dirs> <target_cpu>
//! ```

use clap::Args;
use std::path::PathBuf;
use std::str::FromStr;

use crate::core::env::types::Arch;

/// `setup` subcommand arguments.
#[derive(Debug, Clone, Args)]
pub struct SetupArgs {
    /// Visual Studio installation root
    pub vs_path: PathBuf,

    /// Windows SDK directory; pass an empty string when no SDK script
    /// should be considered
    pub sdk_path: String,

    /// Path-separator-joined directories holding build-local runtime DLLs
    pub runtime_dirs: String,

    /// Build architecture the compiler path is reported for
    #[arg(value_parser = parse_arch)]
    pub target_cpu: Arch,

    /// Directory receiving the `environment.<arch>` files
    #[arg(long = "out-dir", default_value = ".")]
    pub out_dir: PathBuf,

    /// Prefer the SDK's SetEnv.Cmd when an SDK directory is given; accepts
    /// an integer (0 disables) or true/false
    #[arg(
        long = "depot-tools-win-toolchain",
        env = "DEPOT_TOOLS_WIN_TOOLCHAIN",
        action = clap::ArgAction::Set,
        value_parser = parse_flag,
        default_value = "1"
    )]
    pub prefer_sdk: bool,

    /// Explicit build-tools root used with vcvarsall.bat
    #[arg(long = "msvs-override-path", env = "GYP_MSVS_OVERRIDE_PATH")]
    pub override_path: Option<PathBuf>,
}

fn parse_arch(value: &str) -> Result<Arch, String> {
    Arch::from_str(value).map_err(|err| err.to_string())
}

/// Accepts the conventional integer form of the environment flag as well
/// as true/false.
fn parse_flag(value: &str) -> Result<bool, String> {
    if let Ok(n) = value.parse::<i64>() {
        return Ok(n != 0);
    }
    match value.to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(format!("expected an integer or true/false, got '{other}'")),
    }
}
