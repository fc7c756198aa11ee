// setup-toolchain-rs: GN Windows Toolchain Environment Setup - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment block serialization for `CreateProcess`.
//!
//! ```text
//! encode():  KEY=value\0 KEY=value\0 ... \0
//! decode():  the inverse, used to verify written blocks
//! ```
//!
//! An empty snapshot encodes to a single NUL byte. Entries are emitted in
//! the snapshot's deterministic order, so encoding the same snapshot twice
//! is byte-identical.

use super::snapshot::Snapshot;
use crate::error::EnvError;

/// Terminator for each entry and for the whole block.
const NUL: u8 = 0;

/// Formats the snapshot as an environment block directly suitable for
/// `CreateProcess`: a list of `KEY=value\0`, terminated by an additional
/// `\0`.
#[must_use]
pub fn encode(snapshot: &Snapshot) -> Vec<u8> {
    let mut block = Vec::new();

    for (key, value) in snapshot.iter() {
        block.extend_from_slice(key.as_bytes());
        block.push(b'=');
        block.extend_from_slice(value.as_bytes());
        block.push(NUL);
    }

    block.push(NUL);
    block
}

/// Parses an environment block back into a snapshot.
///
/// Only used to verify the on-disk format; the toolchain itself never reads
/// blocks back.
///
/// # Errors
///
/// Returns [`EnvError::MalformedBlock`] if the block is empty, lacks the
/// trailing terminator, contains a non-UTF-8 entry, or contains an entry
/// without `=`.
pub fn decode(block: &[u8]) -> std::result::Result<Snapshot, EnvError> {
    let malformed = |message: &str| EnvError::MalformedBlock {
        message: message.to_string(),
    };

    let Some((&last, entries)) = block.split_last() else {
        return Err(malformed("empty input"));
    };
    if last != NUL {
        return Err(malformed("missing final terminator"));
    }

    let mut snapshot = Snapshot::new();
    for entry in entries.split(|&b| b == NUL) {
        if entry.is_empty() {
            continue;
        }
        let entry = std::str::from_utf8(entry).map_err(|_| malformed("entry is not UTF-8"))?;
        let (key, value) = entry
            .split_once('=')
            .ok_or_else(|| malformed("entry without '='"))?;
        snapshot.set(key, value);
    }

    Ok(snapshot)
}
