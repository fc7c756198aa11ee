// setup-toolchain-rs: GN Windows Toolchain Environment Setup - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Staging of tool packages into a deployable layout.
//!
//! ```text
//! <input-root>/<package>/**/*.dart   (skipping .git/, gen/, test/,
//!        |                            and *_test.dart)
//!        v
//! <output-root>/<package>/...        same relative paths
//! <output-root>/<package>/pubspec.yaml   overridden manifest
//! ```

use std::path::Path;

use ignore::WalkBuilder;
use tracing::{debug, info, warn};

use crate::error::{Result, StageError};

/// Packages copied from the SDK checkout, in staging order.
pub const PACKAGES: [&str; 5] = [
    "vm",
    "build_integration",
    "kernel",
    "front_end",
    "frontend_server",
];

const VM_PUBSPEC: &str = r#"name: vm
version: 0.0.1
environment:
  sdk: ">=2.2.2 <3.0.0"

dependencies:
  front_end: any
  kernel: any
  meta: any
  build_integration: any
"#;

const BUILD_INTEGRATION_PUBSPEC: &str = r#"name: build_integration
version: 0.0.1
environment:
  sdk: ">=2.2.2 <3.0.0"

dependencies:
  front_end: any
  meta: any
"#;

const FRONTEND_SERVER_PUBSPEC: &str = r#"name: frontend_server
version: 0.0.1
environment:
  sdk: ">=2.2.2 <3.0.0"

dependencies:
  args: any
  path: any
  vm: any
"#;

const KERNEL_PUBSPEC: &str = r"name: kernel
version: 0.0.1
environment:
  sdk: '>=2.2.2 <3.0.0'

dependencies:
  args: any
  meta: any
";

const FRONT_END_PUBSPEC: &str = r"name: front_end
version: 0.0.1
environment:
  sdk: '>=2.2.2 <3.0.0'
dependencies:
  kernel: any
  package_config: any
  meta: any
";

/// Directory names pruned from every package walk.
const SKIP_DIRS: [&str; 3] = [".git", "gen", "test"];

/// Returns the overriding manifest for a known package.
#[must_use]
pub fn pubspec_for(package: &str) -> Option<&'static str> {
    match package {
        "vm" => Some(VM_PUBSPEC),
        "build_integration" => Some(BUILD_INTEGRATION_PUBSPEC),
        "frontend_server" => Some(FRONTEND_SERVER_PUBSPEC),
        "kernel" => Some(KERNEL_PUBSPEC),
        "front_end" => Some(FRONT_END_PUBSPEC),
        _ => None,
    }
}

/// Outcome of one staging run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StageSummary {
    /// Source files copied, across all packages.
    pub files_copied: usize,
    /// Packages whose root directory was missing under the input root.
    pub packages_skipped: Vec<String>,
}

/// Stage every known package from `input_root` into `output_root`.
///
/// Source files keep their paths relative to the package root. Generated
/// code, test directories and `*_test.dart` files are left behind, and each
/// staged package gets its manifest replaced.
///
/// # Errors
///
/// Returns a `StageError::IoError` when a copy or directory creation fails.
pub fn stage_packages(input_root: &Path, output_root: &Path) -> Result<StageSummary> {
    let mut summary = StageSummary::default();

    for package in PACKAGES {
        let package_root = input_root.join(package);
        if !package_root.is_dir() {
            warn!(package, root = %package_root.display(), "package root missing, skipping");
            summary.packages_skipped.push(package.to_string());
            continue;
        }

        let copied = stage_package(package, &package_root, &output_root.join(package))?;
        info!(package, copied, "staged package");
        summary.files_copied += copied;
    }

    Ok(summary)
}

fn stage_package(package: &str, package_root: &Path, dest_root: &Path) -> Result<usize> {
    let mut copied = 0;

    let walker = WalkBuilder::new(package_root)
        .standard_filters(false)
        .filter_entry(|entry| {
            let is_skipped_dir = entry.file_type().is_some_and(|t| t.is_dir())
                && entry
                    .file_name()
                    .to_str()
                    .is_some_and(|name| SKIP_DIRS.contains(&name));
            !is_skipped_dir
        })
        .build();

    for entry in walker {
        let entry = entry.map_err(|err| StageError::IoError {
            path: package_root.display().to_string(),
            source: std::io::Error::other(err),
        })?;
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }

        let Some(name) = entry.file_name().to_str() else {
            continue;
        };
        if !name.ends_with(".dart") || name.ends_with("_test.dart") {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(package_root)
            .unwrap_or_else(|_| entry.path());
        let destination = dest_root.join(relative);
        copy_into(entry.path(), &destination)?;
        debug!(package, file = %relative.display(), "copied");
        copied += 1;
    }

    if copied > 0 {
        write_pubspec(package, dest_root)?;
    }

    Ok(copied)
}

fn copy_into(source: &Path, destination: &Path) -> Result<()> {
    if let Some(parent) = destination.parent() {
        std::fs::create_dir_all(parent).map_err(|err| StageError::IoError {
            path: parent.display().to_string(),
            source: err,
        })?;
    }
    std::fs::copy(source, destination).map_err(|err| StageError::IoError {
        path: destination.display().to_string(),
        source: err,
    })?;
    Ok(())
}

fn write_pubspec(package: &str, dest_root: &Path) -> Result<()> {
    let Some(pubspec) = pubspec_for(package) else {
        return Ok(());
    };
    let path = dest_root.join("pubspec.yaml");
    std::fs::write(&path, pubspec).map_err(|err| StageError::IoError {
        path: path.display().to_string(),
        source: err,
    })?;
    Ok(())
}

#[cfg(test)]
mod tests;
