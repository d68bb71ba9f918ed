//! Configuration types shared by the cache and the converter facade.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for memoizing conversion plans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Maximum number of plans kept alive. `0` disables memoization entirely.
    pub max_entries: u64,
    /// Evict plans that have not been looked up for this many milliseconds.
    pub time_to_idle_ms: Option<u64>,
}

impl CacheConfig {
    /// Configuration that never memoizes: every lookup builds a cold plan.
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            max_entries: 0,
            time_to_idle_ms: None,
        }
    }

    /// Whether plans are memoized at all.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.max_entries > 0
    }

    /// Idle eviction window, if configured.
    #[must_use]
    pub fn time_to_idle(&self) -> Option<Duration> {
        self.time_to_idle_ms.map(Duration::from_millis)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: 256,
            time_to_idle_ms: None,
        }
    }
}
