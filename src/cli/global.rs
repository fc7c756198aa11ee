// setup-toolchain-rs: GN Windows Toolchain Environment Setup - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global options shared by every subcommand.

use clap::Args;
use std::path::PathBuf;

/// Options accepted before the subcommand.
#[derive(Debug, Clone, Args)]
pub struct GlobalOptions {
    /// Console log level (0=silent, 1=error, 2=warn, 3=info, 4=debug, 5=trace)
    #[arg(
        long = "log-level",
        global = true,
        default_value_t = 3,
        value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub log_level: u8,

    /// File log level (0=silent, 1=error, 2=warn, 3=info, 4=debug, 5=trace)
    #[arg(
        long = "file-log-level",
        global = true,
        default_value_t = 5,
        value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub file_log_level: u8,

    /// Write logs to this file in addition to the console
    #[arg(long = "log-file", global = true)]
    pub log_file: Option<PathBuf>,

    /// Read settings from this TOML file instead of `setup-toolchain.toml`
    #[arg(short = 'c', long = "config", global = true)]
    pub config_file: Option<PathBuf>,
}
