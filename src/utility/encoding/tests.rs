// setup-toolchain-rs: GN Windows Toolchain Environment Setup - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Encoding, bytes_to_utf8};

#[test]
fn test_utf8_passthrough() {
    assert_eq!(bytes_to_utf8(Encoding::Utf8, b"PATH=C:\\a"), "PATH=C:\\a");
    assert_eq!(bytes_to_utf8(Encoding::Unknown, "café".as_bytes()), "café");
}

#[test]
fn test_invalid_utf8_is_replaced() {
    let decoded = bytes_to_utf8(Encoding::Utf8, b"a\xff b");
    assert!(decoded.contains('\u{fffd}'));
}

#[test]
fn test_acp_decodes_windows_1252() {
    // "café" in Windows-1252
    assert_eq!(bytes_to_utf8(Encoding::Acp, b"caf\xe9"), "café");
}

#[test]
fn test_ascii_is_stable_across_encodings() {
    let line = b"TEMP=C:\\Users\\build\\AppData\\Local\\Temp";
    for encoding in [Encoding::Utf8, Encoding::Acp, Encoding::Oem] {
        assert_eq!(
            bytes_to_utf8(encoding, line),
            String::from_utf8_lossy(line)
        );
    }
}
