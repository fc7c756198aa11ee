// setup-toolchain-rs: GN Windows Toolchain Environment Setup - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{PACKAGES, pubspec_for, stage_packages};
use std::path::Path;

fn write_file(path: &Path, contents: &str) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, contents).unwrap();
}

#[test]
fn test_pubspec_known_for_every_package() {
    for package in PACKAGES {
        let pubspec = pubspec_for(package).unwrap();
        assert!(pubspec.starts_with(&format!("name: {package}\n")));
    }
    assert_eq!(pubspec_for("nonexistent"), None);
}

#[test]
fn test_stage_copies_sources_preserving_layout() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();

    let kernel = input.path().join("kernel");
    write_file(&kernel.join("lib/kernel.dart"), "library kernel;");
    write_file(&kernel.join("lib/src/ast.dart"), "class Node {}");
    write_file(&kernel.join("pubspec.yaml"), "name: kernel\nversion: 9.9.9");

    let summary = stage_packages(input.path(), output.path()).unwrap();
    assert_eq!(summary.files_copied, 2);

    let staged = output.path().join("kernel");
    assert!(staged.join("lib/kernel.dart").is_file());
    assert!(staged.join("lib/src/ast.dart").is_file());

    // The original manifest is replaced, not copied.
    let pubspec = std::fs::read_to_string(staged.join("pubspec.yaml")).unwrap();
    assert_eq!(pubspec, pubspec_for("kernel").unwrap());
}

#[test]
fn test_stage_skips_generated_and_test_content() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();

    let vm = input.path().join("vm");
    write_file(&vm.join("lib/vm.dart"), "library vm;");
    write_file(&vm.join("lib/vm_test.dart"), "void main() {}");
    write_file(&vm.join("test/runner.dart"), "void main() {}");
    write_file(&vm.join("gen/generated.dart"), "// generated");
    write_file(&vm.join(".git/config.dart"), "not really dart");
    write_file(&vm.join("lib/notes.txt"), "not a source file");

    let summary = stage_packages(input.path(), output.path()).unwrap();
    assert_eq!(summary.files_copied, 1);

    let staged = output.path().join("vm");
    assert!(staged.join("lib/vm.dart").is_file());
    assert!(!staged.join("lib/vm_test.dart").exists());
    assert!(!staged.join("test").exists());
    assert!(!staged.join("gen").exists());
    assert!(!staged.join(".git").exists());
    assert!(!staged.join("lib/notes.txt").exists());
}

#[test]
fn test_stage_reports_missing_packages() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();

    write_file(
        &input.path().join("front_end/lib/api.dart"),
        "library front_end;",
    );

    let summary = stage_packages(input.path(), output.path()).unwrap();
    assert_eq!(summary.files_copied, 1);
    assert_eq!(
        summary.packages_skipped,
        ["vm", "build_integration", "kernel", "frontend_server"]
    );
}

#[test]
fn test_stage_empty_package_gets_no_pubspec() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();

    std::fs::create_dir_all(input.path().join("kernel")).unwrap();

    let summary = stage_packages(input.path(), output.path()).unwrap();
    assert_eq!(summary.files_copied, 0);
    assert!(!output.path().join("kernel/pubspec.yaml").exists());
}
