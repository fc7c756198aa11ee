// setup-toolchain-rs: GN Windows Toolchain Environment Setup - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration loading from layered sources.
//!
//! ```text
//! ConfigLoader::standard()
//!   optional setup-toolchain.toml  <  SETUP_TOOLCHAIN_* env vars
//!        |
//!        v
//!    build() --> Config
//! ```

use config::{Environment, File, FileFormat};

use super::Config;
use crate::error::Result;

/// Default configuration file looked for in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "setup-toolchain.toml";

/// Environment prefix for configuration overrides
/// (e.g. `SETUP_TOOLCHAIN_TOOLCHAIN_COMPILER`).
pub const ENV_PREFIX: &str = "SETUP_TOOLCHAIN";

/// Builder for loading configuration from multiple sources.
pub struct ConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    env_prefix: Option<&'static str>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: None,
        }
    }

    /// The loader used by the CLI: optional `setup-toolchain.toml` plus
    /// `SETUP_TOOLCHAIN_*` environment overrides.
    #[must_use]
    pub fn standard() -> Self {
        Self::new()
            .add_toml_file_optional(DEFAULT_CONFIG_FILE)
            .with_env_prefix(ENV_PREFIX)
    }

    /// Adds a required TOML file; missing or invalid makes `build()` fail.
    #[must_use]
    pub fn add_toml_file<P: AsRef<std::path::Path>>(mut self, path: P) -> Self {
        self.builder = self.builder.add_source(
            File::from(path.as_ref())
                .format(FileFormat::Toml)
                .required(true),
        );
        self
    }

    /// Adds a TOML file that is silently skipped when absent.
    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<std::path::Path>>(mut self, path: P) -> Self {
        self.builder = self.builder.add_source(
            File::from(path.as_ref())
                .format(FileFormat::Toml)
                .required(false),
        );
        self
    }

    /// Adds inline TOML content (tests).
    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self
    }

    #[must_use]
    pub const fn with_env_prefix(mut self, prefix: &'static str) -> Self {
        self.env_prefix = Some(prefix);
        self
    }

    /// Merges all sources and deserializes into [`Config`].
    ///
    /// # Errors
    ///
    /// Fails on a missing required file, invalid TOML, or a merged value
    /// that does not deserialize into the typed settings.
    pub fn build(self) -> Result<Config> {
        let mut builder = self.builder;
        if let Some(prefix) = self.env_prefix {
            builder = builder.add_source(
                Environment::with_prefix(prefix)
                    .separator("_")
                    .try_parsing(true),
            );
        }
        Ok(builder.build()?.try_deserialize()?)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
