//! The option registry: one instance per process, owned by the command thread.
//!
//! Lifecycle of each option: `Uninitialized -> Active` after [`OptionsRegistry::init`].
//! Options switched off in [`OptionsRegistry::new`] (missing platform support)
//! or through [`OptionsRegistry::disable`] before `init` stay disabled for the
//! rest of the process and are invisible to every lookup and listing.
//!
//! Changes are reported to a [`SettingsSink`] as [`SettingUpdate`]s instead of
//! touching engine resources directly.

use std::fmt;

use engine_core::PlatformCaps;

use crate::error::OptionError;
use crate::option::{ChangeAction, OptionId, OptionKind, UciOption};
use crate::settings::{SettingUpdate, SettingsSink};
use crate::table::default_table;

#[derive(Debug, Clone)]
pub struct OptionsRegistry {
    options: Vec<UciOption>,
    initialized: bool,
}

impl OptionsRegistry {
    /// Build the default table and switch off what this platform cannot do.
    pub fn new(caps: &PlatformCaps) -> Self {
        let mut registry = Self {
            options: default_table(),
            initialized: false,
        };
        debug_assert!(
            registry
                .options
                .iter()
                .enumerate()
                .all(|(i, opt)| opt.id.index() == i)
        );

        if !caps.large_pages {
            registry.disable(OptionId::LargePages);
        }
        // No strength-limiting search to drive it yet
        registry.disable(OptionId::SkillLevel);
        registry
    }

    /// Disable an option. Only possible before [`init`](Self::init); returns
    /// whether the option is now disabled.
    pub fn disable(&mut self, id: OptionId) -> bool {
        let opt = &mut self.options[id.index()];
        if !self.initialized {
            opt.enabled = false;
        }
        !opt.enabled
    }

    /// Load every enabled option with its default and report it to `sink`,
    /// so dependent subsystems start from the table's values.
    pub fn init(&mut self, sink: &mut dyn SettingsSink) {
        for opt in self.options.iter_mut().filter(|o| o.enabled) {
            match opt.kind {
                OptionKind::Check | OptionKind::Spin => opt.value = opt.default,
                OptionKind::Button => {}
                OptionKind::String => opt.string_value = opt.default_string.to_owned(),
                OptionKind::Combo => opt.string_value = opt.combo_default(),
            }
            notify(opt, sink);
        }
        self.initialized = true;
        tracing::debug!(enabled = self.iter().count(), "options initialized");
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Release the owned string values and return to the uninitialized state.
    pub fn teardown(&mut self) {
        for opt in &mut self.options {
            if matches!(opt.kind, OptionKind::String | OptionKind::Combo) {
                opt.string_value = String::new();
            }
        }
        self.initialized = false;
    }

    pub fn is_enabled(&self, id: OptionId) -> bool {
        self.options[id.index()].enabled
    }

    /// The option in slot `id`, unless disabled.
    pub fn get(&self, id: OptionId) -> Option<&UciOption> {
        self.options.get(id.index()).filter(|o| o.enabled)
    }

    /// Enabled options in table order.
    pub fn iter(&self) -> impl Iterator<Item = &UciOption> {
        self.options.iter().filter(|o| o.enabled)
    }

    /// Case-insensitive lookup among enabled options.
    pub fn find(&self, name: &str) -> Option<&UciOption> {
        self.iter().find(|o| o.name.eq_ignore_ascii_case(name))
    }

    /// Current value of a check or spin option.
    pub fn value(&self, id: OptionId) -> i32 {
        self.options[id.index()].value
    }

    /// Convenience for check options.
    pub fn flag(&self, id: OptionId) -> bool {
        self.value(id) != 0
    }

    /// Current text of a string or combo option.
    pub fn string_value(&self, id: OptionId) -> &str {
        &self.options[id.index()].string_value
    }

    /// Default text (strings) or full choice spec (combos).
    pub fn default_string(&self, id: OptionId) -> &'static str {
        self.options[id.index()].default_string
    }

    /// Trusted engine-side setter: no bounds check, always notifies.
    pub fn set_value(&mut self, id: OptionId, value: i32, sink: &mut dyn SettingsSink) {
        let opt = &mut self.options[id.index()];
        opt.value = value;
        notify(opt, sink);
    }

    /// Apply a `setoption name <name> value <value>` pair.
    ///
    /// Returns whether an enabled option with that name exists, whether or not
    /// the value was accepted. Rejected values leave the option unchanged.
    pub fn set_by_name(&mut self, name: &str, value: &str, sink: &mut dyn SettingsSink) -> bool {
        match self.try_set_by_name(name, value, sink) {
            Ok(()) => true,
            Err(e) => {
                if e.name_found() {
                    tracing::warn!(error = %e, "option value rejected");
                } else {
                    tracing::debug!(name, "unknown option");
                }
                e.name_found()
            }
        }
    }

    /// Like [`set_by_name`](Self::set_by_name) but reports why a value was
    /// not applied.
    pub fn try_set_by_name(
        &mut self,
        name: &str,
        value: &str,
        sink: &mut dyn SettingsSink,
    ) -> Result<(), OptionError> {
        let opt = self
            .options
            .iter_mut()
            .filter(|o| o.enabled)
            .find(|o| o.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| OptionError::UnknownOption(name.to_owned()))?;

        match opt.kind {
            OptionKind::Check => {
                opt.value = match value {
                    "true" => 1,
                    "false" => 0,
                    _ => {
                        return Err(OptionError::InvalidBool {
                            name: opt.name,
                            value: value.to_owned(),
                        })
                    }
                };
            }
            OptionKind::Spin => {
                let parsed = leading_int(value);
                if parsed < i64::from(opt.min) || parsed > i64::from(opt.max) {
                    return Err(OptionError::OutOfRange {
                        name: opt.name,
                        value: parsed,
                        min: opt.min,
                        max: opt.max,
                    });
                }
                opt.value = parsed as i32;
            }
            OptionKind::Button => {}
            OptionKind::String => opt.string_value = value.to_owned(),
            OptionKind::Combo => {
                // Accepted as given; the choice list is only advertised
                let lowered = value.to_lowercase();
                if !opt.choices().any(|c| c.eq_ignore_ascii_case(&lowered)) {
                    tracing::warn!(name = opt.name, value, "value is not a listed choice");
                }
                opt.string_value = lowered;
            }
        }

        notify(opt, sink);
        Ok(())
    }
}

impl fmt::Display for OptionsRegistry {
    /// All enabled options, one `option name ...` line each.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for opt in self.iter() {
            writeln!(f, "{opt}")?;
        }
        Ok(())
    }
}

fn notify(opt: &UciOption, sink: &mut dyn SettingsSink) {
    let Some(action) = opt.on_change else {
        return;
    };
    let update = match action {
        ChangeAction::ClearHash => SettingUpdate::ClearHash,
        ChangeAction::HashSize => SettingUpdate::HashSize(to_count(opt.value)),
        ChangeAction::Threads => SettingUpdate::Threads(to_count(opt.value)),
        ChangeAction::LargePages => SettingUpdate::LargePages(opt.value != 0),
    };
    sink.apply(update);
}

/// Integer prefix of `text` in the manner of C `atoi`: leading whitespace,
/// an optional sign, then digits up to the first non-digit. No digits gives 0.
fn leading_int(text: &str) -> i64 {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, d| {
            acc.saturating_mul(10).saturating_add(i64::from(d - b'0'))
        });
    if negative { -magnitude } else { magnitude }
}

fn to_count(value: i32) -> usize {
    usize::try_from(value).unwrap_or(0)
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod registry_tests;
