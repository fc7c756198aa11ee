// setup-toolchain-rs: GN Windows Toolchain Environment Setup - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Child process execution.
//!
//! One shell child per harvest; capture-only, bounded by an optional
//! timeout. See [`builder::ProcessBuilder`].

pub mod builder;
mod runner;
