// setup-toolchain-rs: GN Windows Toolchain Environment Setup - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! Cli::parse_args() --> Logging --> Command Dispatch
//!   Setup | Stage | Version
//! ```

use std::process::ExitCode;

use setup_toolchain_rs::cli::global::GlobalOptions;
use setup_toolchain_rs::cli::{Cli, Command};
use setup_toolchain_rs::cmd::setup::run_setup_command;
use setup_toolchain_rs::cmd::stage::run_stage_command;
use setup_toolchain_rs::config::Config;
use setup_toolchain_rs::config::loader::ConfigLoader;
use setup_toolchain_rs::logging::{LogConfig, LogLevel, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse_args();

    let log_config = build_log_config(&cli.global);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli).await
}

fn build_log_config(global: &GlobalOptions) -> LogConfig {
    let console_level = LogLevel::from_u8(global.log_level).unwrap_or(LogLevel::Info);
    let file_level = LogLevel::from_u8(global.file_log_level).unwrap_or(console_level);

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(global.log_file.as_ref().map(|p| p.display().to_string()))
        .build()
}

async fn dispatch_command(cli: &Cli) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Some(Command::Setup(args)) => match load_config(&cli.global) {
            Ok(settings) => run_setup_command(args, &settings).await,
            Err(e) => Err(e),
        },
        Some(Command::Stage(args)) => run_stage_command(args),
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn load_config(global: &GlobalOptions) -> setup_toolchain_rs::error::Result<Config> {
    let loader = match &global.config_file {
        Some(path) => ConfigLoader::new()
            .add_toml_file(path)
            .with_env_prefix(setup_toolchain_rs::config::loader::ENV_PREFIX),
        None => ConfigLoader::standard(),
    };
    loader.build().map_err(|e| {
        eprintln!("Failed to load config: {e}");
        e
    })
}
