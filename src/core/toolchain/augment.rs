// setup-toolchain-rs: GN Windows Toolchain Environment Setup - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Build-local augmentation of a filtered snapshot.
//!
//! ```text
//! PATH    = <tool dir> ; <runtime dirs> ; <harvested PATH>
//! INCLUDE = <sdk>\Include\shared ; um ; winrt ; <harvested INCLUDE>
//!           (only when the SDK script resolved the environment)
//! ```
//!
//! The tool's own directory goes first so later build steps that re-invoke
//! this binary find it even when the vendor shell's PATH does not carry it.
//! The SDK include directories must come first: both header sets ship a
//! sal.h, and the SDK one is newer and required.

use std::path::{Path, PathBuf};

use crate::core::env::snapshot::Snapshot;
use crate::core::env::types::EnvFlags;

/// SDK include subdirectories, in shadowing order.
const SDK_INCLUDE_SUBDIRS: [&str; 3] = ["shared", "um", "winrt"];

/// Directory containing the running executable, if determinable.
#[must_use]
pub fn tool_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()?
        .parent()
        .map(Path::to_path_buf)
}

/// Applies the build-local PATH and INCLUDE augmentation.
///
/// `sdk_dir` is `Some` only when the SDK script was used for resolution.
pub fn apply(
    snapshot: &mut Snapshot,
    tool_dir: Option<&Path>,
    runtime_dirs: &str,
    sdk_dir: Option<&Path>,
) {
    if !runtime_dirs.is_empty() {
        snapshot.prepend_path(runtime_dirs);
    }
    if let Some(dir) = tool_dir {
        snapshot.prepend_path(dir);
    }

    if let Some(sdk_dir) = sdk_dir {
        let mut prefix = String::new();
        for subdir in SDK_INCLUDE_SUBDIRS {
            use std::fmt::Write as _;
            let _ = write!(prefix, "{}\\Include\\{subdir};", sdk_dir.display());
        }
        snapshot.set_with_flags("INCLUDE", prefix, EnvFlags::Prepend);
    }
}
