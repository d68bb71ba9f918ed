use std::hash::Hash;
use std::sync::Arc;

use moka::sync::Cache;
use timeframes_core::{CacheConfig, ConversionPlan, Timeframe};

/// Identity of a memoized plan: the grid pair and the input length.
///
/// Data values never take part in the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlanKey {
    /// Grid the input values live on.
    pub source: Timeframe,
    /// Grid the output values live on.
    pub target: Timeframe,
    /// Number of input values.
    pub source_len: usize,
}

impl PlanKey {
    /// Build a key for converting `source_len` values from `source` to `target`.
    #[must_use]
    pub const fn new(source: Timeframe, target: Timeframe, source_len: usize) -> Self {
        Self {
            source,
            target,
            source_len,
        }
    }
}

/// Storage backend for memoized values.
///
/// Implementations must be safe to share across threads; `insert_if_absent`
/// is the only write and must be atomic per key so concurrent writers agree
/// on a single stored value.
pub trait PlanStore<K, V>: Send + Sync {
    /// Look up a stored value.
    fn get(&self, key: &K) -> Option<V>;
    /// Store `value` unless the key is already present; return the stored value.
    fn insert_if_absent(&self, key: K, value: V) -> V;
    /// Number of stored values (may lag behind recent writes).
    fn len(&self) -> u64;
    /// Whether nothing is stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Drop every stored value.
    fn clear(&self);
}

/// Look up `key`, building and storing a value on a miss.
///
/// Two callers racing on the same cold key may both run `build`; only the
/// first stored value is kept and both callers receive it. Build errors are
/// returned as-is and nothing is stored.
///
/// Returns the value and whether it came from the store.
///
/// # Errors
/// Propagates the error returned by `build`.
pub fn get_or_insert_with<K, V, E, S, F>(store: &S, key: K, build: F) -> Result<(V, bool), E>
where
    S: PlanStore<K, V> + ?Sized,
    F: FnOnce() -> Result<V, E>,
{
    if let Some(v) = store.get(&key) {
        return Ok((v, true));
    }
    let built = build()?;
    Ok((store.insert_if_absent(key, built), false))
}

/// Bounded store backed by `moka`'s concurrent cache.
pub struct MokaPlanStore<K, V> {
    inner: Cache<K, V>,
}

impl<K, V> MokaPlanStore<K, V>
where
    K: Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    /// Build a store honoring the capacity and idle eviction of `cfg`.
    #[must_use]
    pub fn new(cfg: &CacheConfig) -> Self {
        let mut builder = Cache::builder().max_capacity(cfg.max_entries.max(1));
        if let Some(tti) = cfg.time_to_idle() {
            builder = builder.time_to_idle(tti);
        }
        Self {
            inner: builder.build(),
        }
    }
}

impl<K, V> PlanStore<K, V> for MokaPlanStore<K, V>
where
    K: Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    fn get(&self, key: &K) -> Option<V> {
        self.inner.get(key)
    }

    fn insert_if_absent(&self, key: K, value: V) -> V {
        self.inner.entry(key).or_insert(value).into_value()
    }

    fn len(&self) -> u64 {
        self.inner.run_pending_tasks();
        self.inner.entry_count()
    }

    fn clear(&self) {
        self.inner.invalidate_all();
        self.inner.run_pending_tasks();
    }
}

/// Store type used by [`crate::PlanCache`] by default.
pub type SharedPlanStore = dyn PlanStore<PlanKey, Arc<ConversionPlan>>;
