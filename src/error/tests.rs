// setup-toolchain-rs: GN Windows Toolchain Environment Setup - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ConfigError, EnvError, ProcessError, SetupError, StageError};

#[test]
fn test_error_size_stays_small() {
    // All variants are boxed, so the enum should stay pointer-sized-ish.
    assert!(
        std::mem::size_of::<SetupError>() <= 64,
        "SetupError grew to {} bytes",
        std::mem::size_of::<SetupError>()
    );
}

#[test]
fn test_missing_required_names_the_variable() {
    let err = EnvError::MissingRequired {
        name: "SYSTEMROOT".to_string(),
    };
    let msg = err.to_string();
    assert!(msg.contains("SYSTEMROOT"), "message was: {msg}");
    assert!(msg.contains("required"), "message was: {msg}");
}

#[test]
fn test_unsupported_arch_display() {
    let err = ConfigError::UnsupportedArch {
        value: "mips".to_string(),
    };
    let msg = err.to_string();
    assert!(msg.contains("mips"));
    assert!(msg.contains("x64"));
}

#[test]
fn test_missing_override_path_display() {
    let err = ConfigError::MissingOverridePath;
    assert!(err.to_string().contains("GYP_MSVS_OVERRIDE_PATH"));
}

#[test]
fn test_compiler_not_found_display() {
    let err = SetupError::CompilerNotFound {
        executable: "cl.exe".to_string(),
        arch: "x64".to_string(),
    };
    let msg = err.to_string();
    assert!(msg.contains("cl.exe"));
    assert!(msg.contains("x64"));
}

#[test]
fn test_boxed_from_conversions() {
    let err: SetupError = ConfigError::MissingOverridePath.into();
    assert!(matches!(err, SetupError::Config(_)));

    let err: SetupError = EnvError::MissingRequired {
        name: "TMP".to_string(),
    }
    .into();
    assert!(matches!(err, SetupError::Env(_)));

    let err: SetupError = ProcessError::Timeout {
        command: "cmd.exe".to_string(),
        timeout_secs: 60,
    }
    .into();
    assert!(matches!(err, SetupError::Process(_)));

    let err: SetupError = StageError::PackageRootMissing {
        path: "pkg".to_string(),
    }
    .into();
    assert!(matches!(err, SetupError::Stage(_)));

    let err: SetupError = std::io::Error::other("boom").into();
    assert!(matches!(err, SetupError::Io(_)));
}

#[test]
fn test_timeout_display_includes_duration() {
    let err = ProcessError::Timeout {
        command: "SetEnv.Cmd".to_string(),
        timeout_secs: 60,
    };
    let msg = err.to_string();
    assert!(msg.contains("SetEnv.Cmd"));
    assert!(msg.contains("60"));
}
