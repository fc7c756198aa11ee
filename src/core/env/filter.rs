// setup-toolchain-rs: GN Windows Toolchain Environment Setup - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Allow-list filtering of a raw `set`-style environment dump.
//!
//! ```text
//! RawEnvironmentDump (text)
//!   "NAME=value" per line, locale-dependent line endings
//!        |
//!        v
//! extract_important()
//!   first '=' splits key/value, unmatched lines ignored
//!   allow-list: goma_.* | include | lib | libpath | path
//!               | pathext | systemroot | temp | tmp
//!   keys uppercased, first match wins
//!        |
//!        v
//! Snapshot --> validate(): SYSTEMROOT, TEMP, TMP must exist
//! ```
//!
//! Everything else in the dump is discarded so unrelated host state never
//! leaks into the build.

use std::sync::OnceLock;

use regex::Regex;

use super::snapshot::Snapshot;
use crate::error::EnvError;

/// Variable-name patterns retained from the dump, in match order.
///
/// The wildcard entry keeps every goma-prefixed variable; the rest are exact
/// names the downstream toolchain invocation needs.
const KEEP_PATTERNS: [&str; 9] = [
    "goma_.*",
    "include",
    "lib",
    "libpath",
    "path",
    "pathext",
    "systemroot",
    "temp",
    "tmp",
];

/// Variables that must survive filtering for later build steps to work.
const REQUIRED_VARS: [&str; 3] = ["SYSTEMROOT", "TEMP", "TMP"];

/// Compiled `^<pattern>=` matchers, in the fixed [`KEEP_PATTERNS`] order.
fn keep_matchers() -> &'static Vec<Regex> {
    static MATCHERS: OnceLock<Vec<Regex>> = OnceLock::new();
    MATCHERS.get_or_init(|| {
        KEEP_PATTERNS
            .iter()
            .map(|p| Regex::new(&format!("^{p}=")).unwrap_or_else(|e| panic!("bad pattern: {e}")))
            .collect()
    })
}

/// Extracts the environment variables required for the toolchain to run
/// from a textual dump output by the shell's environment-dump command.
///
/// Pure parsing function: one line in, zero or one snapshot entries out.
/// Matching is case-insensitive on both pattern and line; matched keys are
/// stored uppercased. When duplicate dump lines map to the same key, the
/// first one wins.
#[must_use]
pub fn extract_important(dump: &str) -> Snapshot {
    let mut snapshot = Snapshot::new();

    for line in dump.lines() {
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }

        let lowered = line.to_ascii_lowercase();
        for matcher in keep_matchers() {
            if matcher.is_match(&lowered) {
                // The pattern anchors on '=', so the split cannot fail.
                if let Some((key, value)) = line.split_once('=') {
                    snapshot.set_if_absent(key.to_ascii_uppercase(), value);
                }
                break;
            }
        }
    }

    snapshot
}

/// Checks that the load-bearing variables survived filtering.
///
/// # Errors
///
/// Returns [`EnvError::MissingRequired`] naming the first absent variable,
/// checked in the fixed order SYSTEMROOT, TEMP, TMP.
pub fn validate(snapshot: &Snapshot) -> std::result::Result<(), EnvError> {
    for required in REQUIRED_VARS {
        if !snapshot.contains(required) {
            return Err(EnvError::MissingRequired {
                name: required.to_string(),
            });
        }
    }
    Ok(())
}
