// setup-toolchain-rs: GN Windows Toolchain Environment Setup - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Windows toolchain environment setup for GN builds.
//!
//! Captures the compiler environment that the vendor setup scripts
//! (`SetEnv.Cmd` / `vcvarsall.bat`) establish, filters it down to the
//! variables the build needs, and serializes one environment block per
//! architecture for GN and Ninja to consume.
//!
//! # Architecture
//!
//! ```text
//! main.rs --> cli --> cmd::setup / cmd::stage
//!                          |
//!          +---------------+----------------+
//!          v                                v
//!   core::toolchain                       stage
//!   resolver | harvest                    package walker,
//!   augment  | locate                     pubspec override
//!          |
//!          v
//!   core::process  (async child processes, tokio)
//!   core::env      (snapshot, filter, block codec)
//!          |
//!   config / logging / error / utility    (ambient layers)
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod stage;
pub mod utility;
