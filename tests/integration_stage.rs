// setup-toolchain-rs: GN Windows Toolchain Environment Setup - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for package staging.

use setup_toolchain_rs::stage::{PACKAGES, pubspec_for, stage_packages};
use std::path::Path;

fn write_file(path: &Path, contents: &str) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, contents).unwrap();
}

fn populate_package(root: &Path, package: &str) {
    let package_root = root.join(package);
    write_file(
        &package_root.join(format!("lib/{package}.dart")),
        &format!("library {package};"),
    );
    write_file(
        &package_root.join("lib/src/impl.dart"),
        "class Implementation {}",
    );
    write_file(
        &package_root.join("lib/src/impl_test.dart"),
        "void main() {}",
    );
    write_file(&package_root.join("test/all_test.dart"), "void main() {}");
    write_file(&package_root.join("gen/messages.dart"), "// generated");
    write_file(
        &package_root.join("pubspec.yaml"),
        &format!("name: {package}\nversion: 0.0.0-dev"),
    );
}

#[test]
fn stage_all_packages_end_to_end() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();

    for package in PACKAGES {
        populate_package(input.path(), package);
    }

    let summary = stage_packages(input.path(), output.path()).unwrap();
    // Two source files per package; tests and generated code stay behind.
    assert_eq!(summary.files_copied, 2 * PACKAGES.len());
    assert!(summary.packages_skipped.is_empty());

    for package in PACKAGES {
        let staged = output.path().join(package);
        assert!(staged.join(format!("lib/{package}.dart")).is_file());
        assert!(staged.join("lib/src/impl.dart").is_file());
        assert!(!staged.join("lib/src/impl_test.dart").exists());
        assert!(!staged.join("test").exists());
        assert!(!staged.join("gen").exists());

        let pubspec = std::fs::read_to_string(staged.join("pubspec.yaml")).unwrap();
        assert_eq!(pubspec, pubspec_for(package).unwrap());
        assert!(!pubspec.contains("0.0.0-dev"));
    }
}

#[test]
fn stage_partial_checkout_skips_missing_packages() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();

    populate_package(input.path(), "kernel");
    populate_package(input.path(), "front_end");

    let summary = stage_packages(input.path(), output.path()).unwrap();
    assert_eq!(summary.files_copied, 4);
    assert_eq!(
        summary.packages_skipped,
        ["vm", "build_integration", "frontend_server"]
    );
    assert!(!output.path().join("vm").exists());
}
