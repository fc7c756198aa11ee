// setup-toolchain-rs: GN Windows Toolchain Environment Setup - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for configuration loading and the toolchain config.

use std::path::{Path, PathBuf};
use std::time::Duration;

use super::loader::ConfigLoader;
use super::{Config, DEFAULT_COMPILER, ToolchainConfig};
use crate::core::env::types::Arch;

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.toolchain.compiler, DEFAULT_COMPILER);
    assert_eq!(config.toolchain.harvest_timeout_secs, 60);
    assert_eq!(
        config.toolchain.harvest_timeout(),
        Some(Duration::from_secs(60))
    );
}

#[test]
fn test_zero_timeout_disables_the_bound() {
    let config = ConfigLoader::new()
        .add_toml_str("[toolchain]\nharvest_timeout_secs = 0\n")
        .build()
        .unwrap();
    assert_eq!(config.toolchain.harvest_timeout(), None);
}

#[test]
fn test_toml_overrides_defaults() {
    let config = ConfigLoader::new()
        .add_toml_str("[toolchain]\ncompiler = \"clang-cl.exe\"\nharvest_timeout_secs = 5\n")
        .build()
        .unwrap();
    assert_eq!(config.toolchain.compiler, "clang-cl.exe");
    assert_eq!(config.toolchain.harvest_timeout_secs, 5);
}

#[test]
fn test_empty_sources_yield_defaults() {
    let config = ConfigLoader::new().build().unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_missing_optional_file_is_fine() {
    let config = ConfigLoader::new()
        .add_toml_file_optional("definitely-not-here.toml")
        .build()
        .unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_missing_required_file_fails() {
    let result = ConfigLoader::new()
        .add_toml_file("definitely-not-here.toml")
        .build();
    assert!(result.is_err());
}

#[test]
fn test_invalid_toml_fails() {
    let result = ConfigLoader::new().add_toml_str("not [valid toml").build();
    assert!(result.is_err());
}

#[test]
fn test_toolchain_config_builder_defaults() {
    let cfg = ToolchainConfig::builder()
        .with_runtime_dirs("C:\\rt")
        .with_build_arch(Arch::X64)
        .build();

    assert!(cfg.prefer_sdk());
    assert_eq!(cfg.compiler(), DEFAULT_COMPILER);
    assert_eq!(cfg.out_dir(), Path::new("."));
    assert_eq!(cfg.sdk_dir(), None);
    assert_eq!(cfg.override_root(), None);
}

#[test]
fn test_override_root_prefers_env_override() {
    let cfg = ToolchainConfig::builder()
        .with_vs_root(PathBuf::from("C:\\vs"))
        .with_override_path(PathBuf::from("D:\\buildtools"))
        .with_runtime_dirs("")
        .with_build_arch(Arch::X86)
        .build();

    assert_eq!(cfg.override_root(), Some(Path::new("D:\\buildtools")));
}

#[test]
fn test_override_root_falls_back_to_vs_root() {
    let cfg = ToolchainConfig::builder()
        .with_vs_root(PathBuf::from("C:\\vs"))
        .with_runtime_dirs("")
        .with_build_arch(Arch::X86)
        .build();

    assert_eq!(cfg.override_root(), Some(Path::new("C:\\vs")));
}
