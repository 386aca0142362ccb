//! Startup configuration file.
//!
//! ```toml
//! log = "debug"
//!
//! [options]
//! Hash = 4096
//! Threads = 4
//! "Analysis Contempt" = "White"
//! Ponder = true
//! ```
//!
//! Option overrides go through the same path as `setoption`, so they obey the
//! same bounds and parsing rules.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::registry::OptionsRegistry;
use crate::settings::SettingsSink;

/// A value as written in the config file. Converted to its `setoption` text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Flag(bool),
    Integer(i64),
    Text(String),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Flag(b) => write!(f, "{b}"),
            OptionValue::Integer(n) => write!(f, "{n}"),
            OptionValue::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Log filter directive, e.g. `info` or `uci_options=debug`.
    pub log: Option<String>,
    /// Option name to value, applied after the defaults.
    pub options: BTreeMap<String, OptionValue>,
}

impl EngineConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Apply every override to an initialized registry.
    ///
    /// Unknown names and rejected values are logged and skipped. Returns how
    /// many overrides took effect.
    pub fn apply(&self, registry: &mut OptionsRegistry, sink: &mut dyn SettingsSink) -> usize {
        let mut applied = 0;
        for (name, value) in &self.options {
            match registry.try_set_by_name(name, &value.to_string(), sink) {
                Ok(()) => applied += 1,
                Err(e) => tracing::warn!(error = %e, "config override skipped"),
            }
        }
        tracing::debug!(applied, total = self.options.len(), "config overrides applied");
        applied
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
