//! Staged setting updates produced by option changes.
//!
//! Changing `Hash` or `Threads` must not reallocate anything while a search
//! might be running. Option changes only record what should happen; the
//! engine applies the staged values at a safe point (before the next search).

/// One pending change, emitted when an option with a change action is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingUpdate {
    /// Wipe the hash table (ignored until a table is sized).
    ClearHash,
    /// New hash table size in kB.
    HashSize(usize),
    /// New search thread count.
    Threads(usize),
    /// Whether the hash table should be backed by large pages.
    LargePages(bool),
}

/// Consumer of [`SettingUpdate`]s.
pub trait SettingsSink {
    fn apply(&mut self, update: SettingUpdate);
}

/// Raw message queue, for consumers that want the update stream itself.
impl SettingsSink for Vec<SettingUpdate> {
    fn apply(&mut self, update: SettingUpdate) {
        self.push(update);
    }
}

/// Resource settings as seen by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Settings {
    pub tt_size_kb: usize,
    pub num_threads: usize,
    pub large_pages: bool,
}

/// Settings staged by option changes but not yet applied.
#[derive(Debug, Clone, Default)]
pub struct DelayedSettings {
    pub staged: Settings,
    clear_requested: bool,
}

impl DelayedSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a hash clear is pending.
    pub fn clear_requested(&self) -> bool {
        self.clear_requested
    }

    /// Consume a pending clear request.
    pub fn take_clear_request(&mut self) -> bool {
        std::mem::take(&mut self.clear_requested)
    }
}

impl SettingsSink for DelayedSettings {
    fn apply(&mut self, update: SettingUpdate) {
        tracing::trace!(?update, "staging setting");
        match update {
            SettingUpdate::ClearHash => self.clear_requested = true,
            SettingUpdate::HashSize(kb) => self.staged.tt_size_kb = kb,
            SettingUpdate::Threads(n) => self.staged.num_threads = n,
            SettingUpdate::LargePages(on) => self.staged.large_pages = on,
        }
    }
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod settings_tests;
