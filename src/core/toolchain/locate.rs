// setup-toolchain-rs: GN Windows Toolchain Environment Setup - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Compiler location on the harvested PATH.

use std::path::PathBuf;

use tracing::trace;

use crate::core::env::snapshot::Snapshot;

/// Scans the snapshot's PATH in order and returns the first directory
/// containing `executable`, resolved to a real path.
///
/// Only consulted for the designated build architecture; `None` means the
/// whole run fails with `CompilerNotFound`.
#[must_use]
pub fn find_compiler(snapshot: &Snapshot, executable: &str) -> Option<PathBuf> {
    let path = snapshot.get("PATH")?;

    for dir in std::env::split_paths(path) {
        if dir.as_os_str().is_empty() {
            continue;
        }
        if dir.join(executable).exists() {
            trace!(dir = %dir.display(), "compiler directory found");
            return Some(std::fs::canonicalize(&dir).unwrap_or(dir));
        }
    }

    None
}
