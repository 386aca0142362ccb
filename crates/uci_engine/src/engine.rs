//! Engine-side owner of the option registry and the resources it controls.

use engine_core::{LargeAllocation, PlatformCaps, allocate};
use uci_options::{
    DelayedSettings, EngineConfig, OptionsRegistry, SettingUpdate, Settings, SettingsSink,
};

/// Holds the options, the settings they staged, and the live resources.
///
/// Option changes only stage values. [`Engine::apply_pending`] turns them into
/// real allocations and must be called at a safe point, i.e. never while a
/// search is running.
pub struct Engine {
    options: OptionsRegistry,
    delayed: DelayedSettings,
    live: Settings,
    hash: Option<LargeAllocation>,
    // Size and page mode of the last allocation that failed
    failed_hash: Option<(usize, bool)>,
}

impl Engine {
    pub fn new(caps: &PlatformCaps, config: &EngineConfig) -> Self {
        let mut options = OptionsRegistry::new(caps);
        let mut delayed = DelayedSettings::new();
        options.init(&mut delayed);
        config.apply(&mut options, &mut delayed);

        let mut engine = Self {
            options,
            delayed,
            live: Settings::default(),
            hash: None,
            failed_hash: None,
        };
        engine.apply_pending();
        engine
    }

    pub fn options(&self) -> &OptionsRegistry {
        &self.options
    }

    /// Forward a `setoption` pair. Returns whether the option exists.
    pub fn set_option(&mut self, name: &str, value: &str) -> bool {
        self.options.set_by_name(name, value, &mut self.delayed)
    }

    /// Ask for the hash table to be wiped at the next apply.
    pub fn request_clear(&mut self) {
        self.delayed.apply(SettingUpdate::ClearHash);
    }

    /// Settings currently in effect.
    pub fn live_settings(&self) -> &Settings {
        &self.live
    }

    pub fn hash_table(&self) -> Option<&LargeAllocation> {
        self.hash.as_ref()
    }

    #[cfg(test)]
    pub fn hash_table_mut(&mut self) -> Option<&mut LargeAllocation> {
        self.hash.as_mut()
    }

    #[cfg(test)]
    pub fn clear_pending(&self) -> bool {
        self.delayed.clear_requested()
    }

    /// Bring live resources in line with the staged settings.
    pub fn apply_pending(&mut self) {
        let staged = self.delayed.staged.clone();

        let wanted = (staged.tt_size_kb, staged.large_pages);
        let live = (self.live.tt_size_kb, self.live.large_pages);
        if wanted != live && self.failed_hash != Some(wanted) {
            self.resize_hash(staged.tt_size_kb, staged.large_pages);
            // Fresh memory is already zeroed
            if self.hash.is_some() {
                self.delayed.take_clear_request();
            }
        }

        if let Some(hash) = self.hash.as_mut() {
            if self.delayed.take_clear_request() {
                hash.clear();
                tracing::debug!("hash table cleared");
            }
        }

        if staged.num_threads != self.live.num_threads {
            tracing::info!(threads = staged.num_threads, "thread count updated");
            self.live.num_threads = staged.num_threads;
        }
    }

    fn resize_hash(&mut self, size_kb: usize, large_pages: bool) {
        // Release the old table before asking for the new one
        self.hash = None;
        self.live.tt_size_kb = 0;
        self.failed_hash = None;
        if size_kb == 0 {
            self.live.large_pages = large_pages;
            return;
        }

        let bytes = size_kb.saturating_mul(1024);
        match allocate(bytes, large_pages) {
            Ok(table) => {
                tracing::info!(size_kb, large_pages, "hash table allocated");
                self.hash = Some(table);
                self.live.tt_size_kb = size_kb;
                self.live.large_pages = large_pages;
            }
            Err(e) => {
                tracing::error!(error = %e, size_kb, "failed to allocate hash table");
                self.failed_hash = Some((size_kb, large_pages));
            }
        }
    }

    /// Release owned option strings and the hash table.
    pub fn shutdown(mut self) {
        self.options.teardown();
        self.hash = None;
        tracing::debug!("engine resources released");
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod engine_tests;
