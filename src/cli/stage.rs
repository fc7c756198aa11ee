// setup-toolchain-rs: GN Windows Toolchain Environment Setup - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments of the `stage` subcommand.

use clap::Args;
use std::path::PathBuf;

/// `stage` subcommand arguments.
#[derive(Debug, Clone, Args)]
pub struct StageArgs {
    /// Root directory holding the package sources
    #[arg(long = "input-root")]
    pub input_root: PathBuf,

    /// Directory receiving the staged packages
    #[arg(long = "output-root")]
    pub output_root: PathBuf,
}
