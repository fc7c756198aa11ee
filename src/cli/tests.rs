// setup-toolchain-rs: GN Windows Toolchain Environment Setup - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Cli, Command};
use crate::core::env::types::Arch;
use std::path::PathBuf;

fn parse(args: &[&str]) -> Cli {
    Cli::parse_args_from(args)
}

#[test]
fn test_setup_positionals() {
    let cli = parse(&[
        "setup-toolchain",
        "setup",
        "C:\\vs",
        "D:\\sdk",
        "E:\\rt",
        "x64",
    ]);
    let Some(Command::Setup(args)) = cli.command else {
        panic!("expected setup command");
    };
    assert_eq!(args.vs_path, PathBuf::from("C:\\vs"));
    assert_eq!(args.sdk_path, "D:\\sdk");
    assert_eq!(args.runtime_dirs, "E:\\rt");
    assert_eq!(args.target_cpu, Arch::X64);
    assert_eq!(args.out_dir, PathBuf::from("."));
    assert!(args.prefer_sdk);
}

#[test]
fn test_setup_empty_sdk_path_is_accepted() {
    let cli = parse(&["setup-toolchain", "setup", "C:\\vs", "", "", "arm64"]);
    let Some(Command::Setup(args)) = cli.command else {
        panic!("expected setup command");
    };
    assert_eq!(args.sdk_path, "");
    assert_eq!(args.target_cpu, Arch::Arm64);
}

#[test]
fn test_setup_missing_positional_is_usage_error() {
    let err = Cli::try_parse_args_from(["setup-toolchain", "setup", "C:\\vs", "D:\\sdk", "E:\\rt"])
        .unwrap_err();
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_setup_unknown_arch_is_usage_error() {
    let err = Cli::try_parse_args_from([
        "setup-toolchain",
        "setup",
        "C:\\vs",
        "D:\\sdk",
        "E:\\rt",
        "mips",
    ])
    .unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
}

#[test]
fn test_setup_flag_overrides() {
    let cli = parse(&[
        "setup-toolchain",
        "setup",
        "C:\\vs",
        "",
        "",
        "x86",
        "--out-dir",
        "out/Debug",
        "--depot-tools-win-toolchain",
        "0",
        "--msvs-override-path",
        "C:\\buildtools",
    ]);
    let Some(Command::Setup(args)) = cli.command else {
        panic!("expected setup command");
    };
    assert_eq!(args.out_dir, PathBuf::from("out/Debug"));
    assert!(!args.prefer_sdk);
    assert_eq!(args.override_path, Some(PathBuf::from("C:\\buildtools")));
}

#[test]
fn test_prefer_sdk_accepts_boolean_words() {
    let cli = parse(&[
        "setup-toolchain",
        "setup",
        "C:\\vs",
        "",
        "",
        "x64",
        "--depot-tools-win-toolchain",
        "false",
    ]);
    let Some(Command::Setup(args)) = cli.command else {
        panic!("expected setup command");
    };
    assert!(!args.prefer_sdk);
}

#[test]
fn test_stage_arguments() {
    let cli = parse(&[
        "setup-toolchain",
        "stage",
        "--input-root",
        "pkg",
        "--output-root",
        "out/pkg",
    ]);
    let Some(Command::Stage(args)) = cli.command else {
        panic!("expected stage command");
    };
    assert_eq!(args.input_root, PathBuf::from("pkg"));
    assert_eq!(args.output_root, PathBuf::from("out/pkg"));
}

#[test]
fn test_global_options_defaults() {
    let cli = parse(&["setup-toolchain", "version"]);
    assert_eq!(cli.global.log_level, 3);
    assert_eq!(cli.global.file_log_level, 5);
    assert!(cli.global.log_file.is_none());
    assert!(cli.global.config_file.is_none());
}

#[test]
fn test_global_log_level_range_is_enforced() {
    let err =
        Cli::try_parse_args_from(["setup-toolchain", "--log-level", "9", "version"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
}

#[test]
fn test_no_subcommand_parses() {
    let cli = parse(&["setup-toolchain"]);
    assert!(cli.command.is_none());
}
