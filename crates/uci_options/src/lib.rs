//! UCI option registry.
//!
//! A fixed, ordered table of typed options (check, spin, button, string,
//! combo). Values change through the trusted [`OptionsRegistry::set_value`]
//! path or the validated [`OptionsRegistry::set_by_name`] path used for
//! `setoption` input. Options that feed engine resources report changes as
//! [`SettingUpdate`]s into a [`SettingsSink`], normally a [`DelayedSettings`]
//! that the engine applies between searches.

pub mod config;
pub mod error;
pub mod option;
pub mod registry;
pub mod settings;
pub mod table;

pub use config::{EngineConfig, OptionValue};
pub use error::{ConfigError, OptionError};
pub use option::{ChangeAction, OptionId, OptionKind, UciOption};
pub use registry::OptionsRegistry;
pub use settings::{DelayedSettings, SettingUpdate, Settings, SettingsSink};
pub use table::{MAX_HASH_KB, MAX_THREADS};
