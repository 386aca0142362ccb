use std::sync::OnceLock;

use super::sys::{MemoryBackend, Native};

/// What the running OS lets this process do, detected once per process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformCaps {
    /// Large (huge) page backing can be requested for big allocations.
    pub large_pages: bool,
    /// File mappings accept a random-access hint.
    pub random_access_advice: bool,
}

impl PlatformCaps {
    /// Probe the OS. Prefer [`caps`], which caches the result.
    pub fn detect() -> Self {
        Self {
            large_pages: Native::large_pages_supported(),
            random_access_advice: cfg!(unix),
        }
    }

    /// Capabilities with every optional feature switched off.
    pub const fn minimal() -> Self {
        Self {
            large_pages: false,
            random_access_advice: false,
        }
    }
}

static CAPS: OnceLock<PlatformCaps> = OnceLock::new();

/// Process-wide capabilities; the probe runs on first call only.
pub fn caps() -> &'static PlatformCaps {
    CAPS.get_or_init(|| {
        let caps = PlatformCaps::detect();
        tracing::info!(
            large_pages = caps.large_pages,
            random_access_advice = caps.random_access_advice,
            "platform capabilities detected"
        );
        caps
    })
}
