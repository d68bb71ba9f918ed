use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use timeframes_core::{CacheConfig, ConversionPlan, Timeframe, TimeframeError};

use crate::store::{MokaPlanStore, PlanKey, PlanStore, SharedPlanStore, get_or_insert_with};

/// Snapshot of cache activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    /// Lookups answered from the store.
    pub hits: u64,
    /// Lookups that had to build a plan.
    pub misses: u64,
    /// Plans currently stored.
    pub entries: u64,
}

/// Memoizes conversion plans keyed by `(source, target, source_len)`.
///
/// The cache is an explicit collaborator: create one per test, or share one
/// `Arc<PlanCache>` between every converter of an application. Results are
/// identical to cold conversions since cold conversions go through the very
/// same [`ConversionPlan`].
///
/// ```
/// use timeframes_cache::PlanCache;
/// use timeframes_core::Timeframe;
///
/// let cache = PlanCache::default();
/// let source = Timeframe::new(0, 10).unwrap();
/// let target = Timeframe::new(4, 7).unwrap();
/// let values = [1.0, 5.0, 3.0, 5.0, 7.0, 3.0, 2.0, 9.0];
///
/// let first = cache.convert(&values, &source, &target).unwrap();
/// let second = cache.convert(&values, &source, &target).unwrap();
/// assert_eq!(first, second);
/// assert_eq!(cache.stats().hits, 1);
/// ```
pub struct PlanCache {
    store: Option<Arc<SharedPlanStore>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl Default for PlanCache {
    fn default() -> Self {
        Self::new(&CacheConfig::default())
    }
}

impl std::fmt::Debug for PlanCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlanCache")
            .field("enabled", &self.store.is_some())
            .field("stats", &self.stats())
            .finish()
    }
}

impl PlanCache {
    /// Create a cache honoring `cfg`; `max_entries == 0` disables memoization.
    #[must_use]
    pub fn new(cfg: &CacheConfig) -> Self {
        let store: Option<Arc<SharedPlanStore>> = if cfg.is_enabled() {
            Some(Arc::new(MokaPlanStore::new(cfg)))
        } else {
            None
        };
        Self::from_parts(store)
    }

    /// Create a cache over a caller-provided store.
    #[must_use]
    pub fn with_store(store: Arc<SharedPlanStore>) -> Self {
        Self::from_parts(Some(store))
    }

    const fn from_parts(store: Option<Arc<SharedPlanStore>>) -> Self {
        Self {
            store,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Whether plans are memoized.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.store.is_some()
    }

    /// Return the plan for converting `source_len` values from `source` to
    /// `target`, building it on a miss.
    ///
    /// # Errors
    /// Returns the error of [`ConversionPlan::build`]; failures are never cached.
    pub fn plan(
        &self,
        source: &Timeframe,
        target: &Timeframe,
        source_len: usize,
    ) -> Result<Arc<ConversionPlan>, TimeframeError> {
        let build = || ConversionPlan::build(*source, *target, source_len).map(Arc::new);
        let Some(store) = &self.store else {
            self.misses.fetch_add(1, Ordering::Relaxed);
            return build();
        };

        let key = PlanKey::new(*source, *target, source_len);
        let (plan, hit) = get_or_insert_with(store.as_ref(), key, build)?;
        if hit {
            self.hits.fetch_add(1, Ordering::Relaxed);
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(
            source = %source,
            target = %target,
            source_len,
            hit,
            "plan cache lookup"
        );

        Ok(plan)
    }

    /// Convert `values` from `source` to `target` through a memoized plan.
    ///
    /// # Errors
    /// Same as [`timeframes_core::convert`].
    pub fn convert(
        &self,
        values: &[f64],
        source: &Timeframe,
        target: &Timeframe,
    ) -> Result<Vec<f64>, TimeframeError> {
        self.plan(source, target, values.len())?.apply(values)
    }

    /// Current hit/miss counters and number of stored plans.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.store.as_ref().map_or(0, |s| s.len()),
        }
    }

    /// Drop every memoized plan. Counters are left untouched.
    pub fn clear(&self) {
        if let Some(store) = &self.store {
            store.clear();
        }
    }
}
