// setup-toolchain-rs: GN Windows Toolchain Environment Setup - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment snapshot management.
//!
//! # Architecture
//!
//! ```text
//! RawEnvironmentDump --(filter)--> Snapshot --(block)--> environment.<arch>
//!
//! filter:   allow-list parse + validate (SYSTEMROOT/TEMP/TMP)
//! snapshot: case-insensitive keys, deterministic order
//! block:    KEY=value\0 ... \0 for CreateProcess
//! ```

pub mod block;
pub mod filter;
pub mod snapshot;
pub mod types;
