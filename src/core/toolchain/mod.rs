// setup-toolchain-rs: GN Windows Toolchain Environment Setup - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Toolchain environment harvesting.
//!
//! # Architecture
//!
//! ```text
//! resolver::resolve(arch, config) --> SetupCommand
//!          |
//!          v
//! harvest::Harvester  shell: setup && set --> raw dump
//!          |
//!          v
//! env::filter / env::block  (sibling module)
//!          |
//!          v
//! augment::apply            tool dir, runtime dirs, SDK includes
//!
//! locate::find_compiler     side computation on the target arch's PATH
//! ```

pub mod augment;
pub mod harvest;
pub mod locate;
pub mod resolver;
