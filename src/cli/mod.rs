// setup-toolchain-rs: GN Windows Toolchain Environment Setup - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command line interface.
//!
//! ```text
//! setup-toolchain [GLOBAL OPTIONS] <COMMAND>
//!
//! Commands:
//!   setup    Harvest the compiler environment per architecture
//!   stage    Stage tool packages into a deployable layout
//!   version  Print version information
//! ```

pub mod global;
pub mod setup;
pub mod stage;

#[cfg(test)]
mod tests;

use clap::{Parser, Subcommand};

use global::GlobalOptions;
use setup::SetupArgs;
use stage::StageArgs;

/// Top-level command line interface.
#[derive(Debug, Parser)]
#[command(
    name = "setup-toolchain",
    author,
    version,
    about = "Windows toolchain environment setup for GN builds",
    long_about = None
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Harvest the compiler environment for every architecture and write
    /// `environment.<arch>` files
    Setup(SetupArgs),

    /// Stage tool packages into a deployable directory layout
    Stage(StageArgs),

    /// Print version information
    Version,
}

impl Cli {
    /// Parse from `std::env::args_os()`, exiting on failure.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parse from an explicit iterator, exiting on failure.
    pub fn parse_args_from<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(args)
    }

    /// Parse from an explicit iterator, returning the error instead of
    /// exiting.
    ///
    /// # Errors
    ///
    /// Returns a `clap::Error` when the arguments do not parse.
    pub fn try_parse_args_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from(args)
    }
}
