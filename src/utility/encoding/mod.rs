// setup-toolchain-rs: GN Windows Toolchain Environment Setup - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Legacy Windows encoding conversion (CP1252/CP437 → UTF-8).
//!
//! `cmd.exe` pipes its output in the console code page, not UTF-8, so the
//! harvested `set` dump has to go through a decode step before parsing.
//! Uses `encoding_rs`. Invalid sequences → U+FFFD.

use encoding_rs::{IBM866, WINDOWS_1252};
use std::borrow::Cow;

/// Encoding types for captured process output.
///
/// Maps to Windows code pages:
/// - `Utf8`: UTF-8 (65001)
/// - `Acp`: Active Code Page, typically Windows-1252 (1252)
/// - `Oem`: OEM Code Page (437/866)
/// - `Unknown`: treat as UTF-8 passthrough
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    /// Unknown encoding - treat as UTF-8 passthrough
    #[default]
    Unknown,
    /// UTF-8 (code page 65001)
    Utf8,
    /// Active Code Page - typically Windows-1252
    Acp,
    /// OEM Code Page
    Oem,
}

impl Encoding {
    /// The encoding `cmd.exe` / `sh` output is assumed to be in on this
    /// platform.
    #[must_use]
    pub const fn console_default() -> Self {
        if cfg!(windows) { Self::Acp } else { Self::Utf8 }
    }
}

/// Converts bytes from the given encoding to UTF-8.
///
/// Invalid sequences are replaced with U+FFFD.
#[must_use]
pub fn bytes_to_utf8(encoding: Encoding, bytes: &[u8]) -> Cow<'_, str> {
    match encoding {
        Encoding::Utf8 | Encoding::Unknown => String::from_utf8_lossy(bytes),
        Encoding::Acp => {
            let (result, _had_errors) = WINDOWS_1252.decode_without_bom_handling(bytes);
            result
        }
        Encoding::Oem => {
            let (result, _had_errors) = IBM866.decode_without_bom_handling(bytes);
            result
        }
    }
}

#[cfg(test)]
mod tests;
