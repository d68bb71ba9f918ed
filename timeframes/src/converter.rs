use std::sync::Arc;

use timeframes_cache::PlanCache;
use timeframes_core::{Timeframe, TimeframeError, check_overlap};
use timeframes_types::CacheConfig;

/// Converts period-average series between a fixed pair of grids.
///
/// `convert_from` goes from `source` to `target`, `convert_to` the other way.
/// Both run through the converter's [`PlanCache`], so repeated conversions of
/// equally long series only pay for applying the weights.
///
/// Converters hold no mutable state of their own and can be shared freely
/// between threads.
#[derive(Debug, Clone)]
pub struct TimeframeConverter {
    source: Timeframe,
    target: Timeframe,
    cache: Arc<PlanCache>,
}

enum CacheChoice {
    Config(CacheConfig),
    Shared(Arc<PlanCache>),
}

/// Builder for a [`TimeframeConverter`] with a custom plan cache.
pub struct TimeframeConverterBuilder {
    source: Timeframe,
    target: Timeframe,
    cache: CacheChoice,
}

impl TimeframeConverterBuilder {
    /// Start a builder for the given grid pair with a private default cache.
    #[must_use]
    pub fn new(source: Timeframe, target: Timeframe) -> Self {
        Self {
            source,
            target,
            cache: CacheChoice::Config(CacheConfig::default()),
        }
    }

    /// Give the converter its own cache configured by `cfg`.
    ///
    /// `CacheConfig::disabled()` turns memoization off; every conversion then
    /// builds its plan from scratch.
    #[must_use]
    pub fn cache_config(mut self, cfg: CacheConfig) -> Self {
        self.cache = CacheChoice::Config(cfg);
        self
    }

    /// Share an existing cache with other converters.
    ///
    /// Plans are keyed by grid pair and input length, so converters over
    /// different grids can use the same cache without interfering.
    #[must_use]
    pub fn shared_cache(mut self, cache: Arc<PlanCache>) -> Self {
        self.cache = CacheChoice::Shared(cache);
        self
    }

    /// Validate the grid pair and build the converter.
    ///
    /// # Errors
    /// Returns `TimeframeError::NoOverlap` when the first target period ends
    /// at or before the source grid starts, so that no amount of source data
    /// could ever produce a target value.
    pub fn build(self) -> Result<TimeframeConverter, TimeframeError> {
        if let Err(err) = check_overlap(&self.source, &self.target) {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                source = %self.source,
                target = %self.target,
                error = %err,
                "rejected timeframe converter"
            );
            return Err(err);
        }

        let cache = match self.cache {
            CacheChoice::Config(cfg) => Arc::new(PlanCache::new(&cfg)),
            CacheChoice::Shared(cache) => cache,
        };
        Ok(TimeframeConverter {
            source: self.source,
            target: self.target,
            cache,
        })
    }
}

impl TimeframeConverter {
    /// Bind `source` and `target` with a private default cache.
    ///
    /// # Errors
    /// Returns `TimeframeError::NoOverlap` if the pair can never overlap; see
    /// [`TimeframeConverterBuilder::build`].
    pub fn new(source: Timeframe, target: Timeframe) -> Result<Self, TimeframeError> {
        TimeframeConverterBuilder::new(source, target).build()
    }

    /// Start building a converter for the given grid pair.
    ///
    /// ```
    /// use timeframes::{CacheConfig, Timeframe, TimeframeConverter};
    ///
    /// let converter = TimeframeConverter::builder(
    ///     Timeframe::new(0, 10).unwrap(),
    ///     Timeframe::new(0, 5).unwrap(),
    /// )
    /// .cache_config(CacheConfig { max_entries: 16, ..CacheConfig::default() })
    /// .build()
    /// .unwrap();
    /// assert_eq!(converter.get_target_len(4), 8);
    /// ```
    #[must_use]
    pub fn builder(source: Timeframe, target: Timeframe) -> TimeframeConverterBuilder {
        TimeframeConverterBuilder::new(source, target)
    }

    /// Grid of the values accepted by [`convert_from`](Self::convert_from).
    #[must_use]
    pub const fn source(&self) -> Timeframe {
        self.source
    }

    /// Grid of the values produced by [`convert_from`](Self::convert_from).
    #[must_use]
    pub const fn target(&self) -> Timeframe {
        self.target
    }

    /// The plan cache conversions go through.
    #[must_use]
    pub const fn cache(&self) -> &Arc<PlanCache> {
        &self.cache
    }

    /// Converter for the opposite direction, sharing this converter's cache.
    ///
    /// # Errors
    /// Returns `TimeframeError::NoOverlap` if the swapped pair can never
    /// overlap.
    pub fn reversed(&self) -> Result<Self, TimeframeError> {
        TimeframeConverterBuilder::new(self.target, self.source)
            .shared_cache(Arc::clone(&self.cache))
            .build()
    }

    /// Number of target values produced from `source_len` source values.
    #[must_use]
    pub fn get_target_len(&self, source_len: usize) -> usize {
        self.target.length_until(self.source.stop_time(source_len))
    }

    /// Number of source values produced from `target_len` target values by
    /// [`convert_to`](Self::convert_to).
    #[must_use]
    pub fn get_source_len(&self, target_len: usize) -> usize {
        self.source.length_until(self.target.stop_time(target_len))
    }

    /// Convert period averages on the source grid to the target grid.
    ///
    /// # Errors
    /// - `TimeframeError::InsufficientData` for fewer than three values.
    /// - `TimeframeError::NoOverlap` if the values end before the first
    ///   target period starts.
    /// - `TimeframeError::NonFiniteValue` if any value is NaN or infinite.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "timeframes::converter::convert_from",
            skip(self, values),
            fields(source = %self.source, target = %self.target, len = values.len()),
        )
    )]
    pub fn convert_from(&self, values: &[f64]) -> Result<Vec<f64>, TimeframeError> {
        self.cache.convert(values, &self.source, &self.target)
    }

    /// Convert period averages on the target grid back to the source grid.
    ///
    /// # Errors
    /// Same as [`convert_from`](Self::convert_from) with the grids swapped.
    /// In particular `TimeframeError::NoOverlap` is returned here when the
    /// first source period ends at or before the target grid starts.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "timeframes::converter::convert_to",
            skip(self, values),
            fields(source = %self.target, target = %self.source, len = values.len()),
        )
    )]
    pub fn convert_to(&self, values: &[f64]) -> Result<Vec<f64>, TimeframeError> {
        self.cache.convert(values, &self.target, &self.source)
    }
}
