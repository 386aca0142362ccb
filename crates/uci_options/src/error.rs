use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Why a `setoption` value was not applied.
///
/// Every variant except [`OptionError::UnknownOption`] means the name was
/// recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionError {
    #[error("no such option: {0}")]
    UnknownOption(String),

    #[error("option {name}: expected true or false, got {value:?}")]
    InvalidBool { name: &'static str, value: String },

    #[error("option {name}: {value} outside [{min}, {max}]")]
    OutOfRange {
        name: &'static str,
        value: i64,
        min: i32,
        max: i32,
    },
}

impl OptionError {
    /// False only when no enabled option has the given name.
    pub fn name_found(&self) -> bool {
        !matches!(self, OptionError::UnknownOption(_))
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}
