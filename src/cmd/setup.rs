// setup-toolchain-rs: GN Windows Toolchain Environment Setup - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The `setup` command: harvest, filter, augment, serialize, locate.
//!
//! ```text
//! for arch in [x86, x64, arm64]   (concurrent)
//!     resolve --> harvest --> extract_important --> validate
//!             --> augment --> encode --> environment.<arch>
//!
//! then: find cl.exe on the target arch's PATH
//!       print  vc_bin_dir = "<dir>"
//! ```
//!
//! Every architecture gets an independent harvest; one shared dump would
//! leak x64 paths into the x86 block.

use std::io::Write;
use std::path::{Path, PathBuf};

use futures_util::future::try_join_all;
use tracing::{debug, info, instrument};

use crate::cli::setup::SetupArgs;
use crate::config::{Config, ToolchainConfig};
use crate::core::env::snapshot::Snapshot;
use crate::core::env::types::Arch;
use crate::core::env::{block, filter};
use crate::core::toolchain::harvest::Harvester;
use crate::core::toolchain::{augment, locate, resolver};
use crate::error::{Result, SetupError};

/// The per-architecture result of one pipeline run.
#[derive(Debug)]
pub struct ArchOutcome {
    pub arch: Arch,
    pub snapshot: Snapshot,
    pub block_file: PathBuf,
}

/// Assembles the run configuration from CLI arguments and file settings.
///
/// An empty SDK path positional means "no SDK script available".
#[must_use]
pub fn build_config(args: &SetupArgs, settings: &Config) -> ToolchainConfig {
    let sdk_dir = (!args.sdk_path.is_empty()).then(|| PathBuf::from(&args.sdk_path));

    ToolchainConfig::builder()
        .with_vs_root(args.vs_path.clone())
        .maybe_with_sdk_dir(sdk_dir)
        .with_runtime_dirs(args.runtime_dirs.as_str())
        .with_build_arch(args.target_cpu)
        .with_prefer_sdk(args.prefer_sdk)
        .maybe_with_override_path(args.override_path.clone())
        .with_compiler(settings.toolchain.compiler.as_str())
        .maybe_with_harvest_timeout(settings.toolchain.harvest_timeout())
        .with_out_dir(args.out_dir.clone())
        .build()
}

/// Runs the full pipeline for one architecture.
///
/// # Errors
///
/// Fails when resolution, harvesting, validation or the block write fails.
#[instrument(skip(config, harvester, tool_dir), fields(%arch))]
pub async fn prepare_architecture(
    config: &ToolchainConfig,
    arch: Arch,
    harvester: &Harvester,
    tool_dir: Option<&Path>,
) -> Result<ArchOutcome> {
    let setup = resolver::resolve(arch, config).map_err(SetupError::from)?;
    let dump = harvester.harvest(&setup).await?;

    let mut snapshot = filter::extract_important(&dump);
    filter::validate(&snapshot).map_err(SetupError::from)?;

    let sdk_dir = setup.used_sdk().then(|| config.sdk_dir()).flatten();
    augment::apply(&mut snapshot, tool_dir, config.runtime_dirs(), sdk_dir);

    let block_file = write_block(&snapshot, arch, config.out_dir())?;
    info!(file = %block_file.display(), vars = snapshot.len(), "wrote environment block");

    Ok(ArchOutcome {
        arch,
        snapshot,
        block_file,
    })
}

/// Serializes the snapshot into `environment.<arch>` under `out_dir`.
///
/// The write goes through a temporary file in the same directory so a
/// concurrent GN read never observes a partial block.
fn write_block(snapshot: &Snapshot, arch: Arch, out_dir: &Path) -> Result<PathBuf> {
    let encoded = block::encode(snapshot);
    let path = out_dir.join(format!("environment.{arch}"));

    std::fs::create_dir_all(out_dir)?;
    let mut file = tempfile::NamedTempFile::new_in(out_dir)?;
    file.write_all(&encoded)?;
    file.persist(&path).map_err(|err| err.error)?;

    debug!(file = %path.display(), bytes = encoded.len(), "persisted block");
    Ok(path)
}

/// Runs setup for every architecture and prints the compiler directory.
///
/// # Errors
///
/// Fails when any architecture's pipeline fails, or when the compiler is
/// absent from the target architecture's harvested PATH.
pub async fn run_setup(config: &ToolchainConfig) -> Result<PathBuf> {
    let harvester = Harvester::new().with_timeout(config.harvest_timeout());
    run_setup_with(config, &harvester).await
}

/// [`run_setup`] with an explicit harvester (tests inject a fake one).
pub async fn run_setup_with(config: &ToolchainConfig, harvester: &Harvester) -> Result<PathBuf> {
    let tool_dir = augment::tool_dir();

    let outcomes = try_join_all(
        Arch::ALL
            .iter()
            .map(|&arch| prepare_architecture(config, arch, harvester, tool_dir.as_deref())),
    )
    .await?;

    let target = outcomes
        .iter()
        .find(|outcome| outcome.arch == config.build_arch())
        .ok_or_else(|| SetupError::CompilerNotFound {
            executable: config.compiler().to_string(),
            arch: config.build_arch().to_string(),
        })?;

    locate::find_compiler(&target.snapshot, config.compiler()).ok_or_else(|| {
        SetupError::CompilerNotFound {
            executable: config.compiler().to_string(),
            arch: config.build_arch().to_string(),
        }
        .into()
    })
}

/// CLI entry point: builds the configuration, runs setup, and prints the
/// GN-consumable result line.
///
/// # Errors
///
/// Propagates any pipeline failure.
pub async fn run_setup_command(args: &SetupArgs, settings: &Config) -> Result<()> {
    let config = build_config(args, settings);
    let vc_bin_dir = run_setup(&config).await?;

    // GN evaluates this line as its scope result; the quotes are part of
    // the contract.
    println!("vc_bin_dir = \"{}\"", vc_bin_dir.display());
    Ok(())
}
