// setup-toolchain-rs: GN Windows Toolchain Environment Setup - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment snapshot: the filtered variable set for one architecture.
//!
//! ```text
//! Snapshot (BTreeMap<EnvKey, String>)
//! Sources: VariableFilter, Snapshot::from_map(), Snapshot::new()
//! Ops: set/get/prepend_path/append_path
//! ```
//!
//! - **Case-insensitive keys** (PATH == Path == path)
//! - **Deterministic iteration order** so encoded blocks are reproducible
//! - Built once per architecture, mutated only by the filter and the
//!   augmentation step, then encoded and discarded

use super::types::{EnvData, EnvFlags, EnvKey};
use std::collections::BTreeMap;
use std::path::Path;

/// Path-list separator used inside variable values (PATH, INCLUDE, LIB).
pub const PATH_SEP: &str = if cfg!(windows) { ";" } else { ":" };

/// A set of environment variables destined for one environment block.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    data: EnvData,
}

impl Snapshot {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            data: EnvData::new(),
        }
    }

    /// Creates a snapshot from a map of variables.
    #[must_use]
    pub fn from_map(vars: BTreeMap<String, String>) -> Self {
        let data = EnvData::from_vars(vars.into_iter().map(|(k, v)| (EnvKey::new(k), v)).collect());
        Self { data }
    }

    /// Sets an environment variable, replacing any existing value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.set_with_flags(key, value, EnvFlags::Replace)
    }

    /// Sets an environment variable with specific flags.
    pub fn set_with_flags(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
        flags: EnvFlags,
    ) -> &mut Self {
        let key = EnvKey::new(key.into());
        let value = value.into();

        match flags {
            EnvFlags::Replace => {
                self.data.vars_mut().insert(key, value);
            }
            EnvFlags::Append => {
                if let Some(existing) = self.data.vars_mut().get_mut(&key) {
                    existing.push_str(&value);
                } else {
                    self.data.vars_mut().insert(key, value);
                }
            }
            EnvFlags::Prepend => {
                if let Some(existing) = self.data.vars_mut().get_mut(&key) {
                    let mut new_value = value;
                    new_value.push_str(existing);
                    *existing = new_value;
                } else {
                    self.data.vars_mut().insert(key, value);
                }
            }
        }

        self
    }

    /// Sets an environment variable only if it is not already present.
    ///
    /// This is the first-match-wins rule for duplicate dump lines: a later
    /// line mapping to an already-filtered key is never re-applied.
    pub fn set_if_absent(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let key = EnvKey::new(key.into());
        self.data.vars_mut().entry(key).or_insert_with(|| value.into());
        self
    }

    /// Gets an environment variable value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.data
            .vars()
            .get(&EnvKey::new(key))
            .map(std::string::String::as_str)
    }

    /// Returns true if the variable is present.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.data.vars().contains_key(&EnvKey::new(key))
    }

    /// Removes an environment variable.
    pub fn remove(&mut self, key: &str) -> &mut Self {
        self.data.vars_mut().remove(&EnvKey::new(key));
        self
    }

    /// Prepends a path to the PATH environment variable.
    pub fn prepend_path(&mut self, path: impl AsRef<Path>) -> &mut Self {
        self.modify_path(path, EnvFlags::Prepend)
    }

    /// Appends a path to the PATH environment variable.
    pub fn append_path(&mut self, path: impl AsRef<Path>) -> &mut Self {
        self.modify_path(path, EnvFlags::Append)
    }

    /// Modifies the PATH environment variable.
    fn modify_path(&mut self, path: impl AsRef<Path>, flags: EnvFlags) -> &mut Self {
        let path_str = path.as_ref().to_string_lossy();

        match flags {
            EnvFlags::Prepend => {
                if let Some(current) = self.get("PATH") {
                    let new_path = format!("{path_str}{PATH_SEP}{current}");
                    self.set("PATH", new_path);
                } else {
                    self.set("PATH", path_str.into_owned());
                }
            }
            EnvFlags::Append => {
                if let Some(current) = self.get("PATH") {
                    let new_path = format!("{current}{PATH_SEP}{path_str}");
                    self.set("PATH", new_path);
                } else {
                    self.set("PATH", path_str.into_owned());
                }
            }
            EnvFlags::Replace => {
                self.set("PATH", path_str.into_owned());
            }
        }

        self
    }

    /// Returns all environment variables as a map.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.data
            .vars()
            .iter()
            .map(|(k, v)| (k.as_str().to_owned(), v.clone()))
            .collect()
    }

    /// Returns an iterator over environment variables in deterministic
    /// (case-insensitive key) order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.data
            .vars()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns true if no variables are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.vars().is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.vars().len()
    }
}
