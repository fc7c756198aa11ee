// setup-toolchain-rs: GN Windows Toolchain Environment Setup - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The `stage` command.

use tracing::info;

use crate::cli::stage::StageArgs;
use crate::error::Result;
use crate::stage::stage_packages;

/// CLI entry point for staging packages.
///
/// # Errors
///
/// Propagates staging I/O failures.
pub fn run_stage_command(args: &StageArgs) -> Result<()> {
    let summary = stage_packages(&args.input_root, &args.output_root)?;
    info!(
        copied = summary.files_copied,
        skipped = summary.packages_skipped.len(),
        "staging complete"
    );
    Ok(())
}
