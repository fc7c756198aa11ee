// setup-toolchain-rs: GN Windows Toolchain Environment Setup - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core subsystems: environment snapshots, process execution, toolchain
//! harvesting.

pub mod env;
pub mod process;
pub mod toolchain;
