// setup-toolchain-rs: GN Windows Toolchain Environment Setup - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tracing-based logging.
//!
//! ```text
//! init_logging(&LogConfig) --> registry
//!                               ├── console layer (ANSI, EnvFilter)
//!                               └── file layer (optional, non-blocking)
//!                                         |
//!                                    LogGuard: flushes on drop
//!
//! levels: 0 silent .. 5 trace, set per sink from the CLI
//! ```

use anyhow::Context;
use bon::Builder;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::error::Result;

/// Verbosity of one log sink, ordered from silent to trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LogLevel {
    Silent,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Maps the CLI's numeric level. Out-of-range values are rejected by
    /// clap before this runs, so callers treat `None` as "use the default".
    #[must_use]
    pub const fn from_u8(level: u8) -> Option<Self> {
        match level {
            0 => Some(Self::Silent),
            1 => Some(Self::Error),
            2 => Some(Self::Warn),
            3 => Some(Self::Info),
            4 => Some(Self::Debug),
            5 => Some(Self::Trace),
            _ => None,
        }
    }

    /// The `EnvFilter` directive selecting this verbosity.
    #[must_use]
    pub const fn to_filter_string(self) -> &'static str {
        match self {
            Self::Silent => "off",
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }

    /// The most severe `tracing` level this verbosity admits; `None` when
    /// silent.
    #[must_use]
    pub const fn to_tracing_level(self) -> Option<tracing::Level> {
        match self {
            Self::Silent => None,
            Self::Error => Some(tracing::Level::ERROR),
            Self::Warn => Some(tracing::Level::WARN),
            Self::Info => Some(tracing::Level::INFO),
            Self::Debug => Some(tracing::Level::DEBUG),
            Self::Trace => Some(tracing::Level::TRACE),
        }
    }
}

/// Sink configuration consumed by [`init_logging`].
#[derive(Debug, Clone, Builder)]
pub struct LogConfig {
    /// Console verbosity.
    #[builder(setters(name = with_console_level), default)]
    console_level: LogLevel,

    /// File verbosity; only relevant when a log file is set.
    #[builder(setters(name = with_file_level), default = LogLevel::Trace)]
    file_level: LogLevel,

    /// Log file path; no file sink when absent.
    #[builder(setters(name = with_log_file))]
    log_file: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl LogConfig {
    #[must_use]
    pub const fn console_level(&self) -> LogLevel {
        self.console_level
    }

    #[must_use]
    pub const fn file_level(&self) -> LogLevel {
        self.file_level
    }

    #[must_use]
    pub fn log_file(&self) -> Option<&str> {
        self.log_file.as_deref()
    }
}

/// Keeps the non-blocking file writer alive; dropping it flushes pending
/// writes.
pub struct LogGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Installs the global subscriber: a console layer plus, when configured,
/// a non-blocking file layer.
///
/// # Errors
///
/// Fails when the log file (or its parent directory) cannot be created.
pub fn init_logging(config: &LogConfig) -> Result<LogGuard> {
    let console = fmt::layer()
        .with_target(false)
        .with_ansi(true)
        .with_filter(EnvFilter::new(config.console_level().to_filter_string()));

    let (file, guard) = match config.log_file() {
        Some(path) => {
            let (layer, guard) = file_layer(Path::new(path), config.file_level())?;
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(file)
        .with(console)
        .init();

    Ok(LogGuard { _file_guard: guard })
}

type FileLayer = Box<dyn Layer<tracing_subscriber::Registry> + Send + Sync>;

fn file_layer(path: &Path, level: LogLevel) -> Result<(FileLayer, WorkerGuard)> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating log directory {}", parent.display()))?;
    }
    let file = std::fs::File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;

    let (writer, guard) = tracing_appender::non_blocking(file);
    let layer = fmt::layer()
        .with_writer(writer)
        .with_target(true)
        .with_ansi(false)
        .with_span_events(FmtSpan::CLOSE)
        .with_filter(EnvFilter::new(level.to_filter_string()))
        .boxed();

    Ok((layer, guard))
}
