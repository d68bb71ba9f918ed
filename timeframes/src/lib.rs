//! Timeframes moves period-average series between regular time grids.
//!
//! Overview
//! - A [`Timeframe`] is a regular grid `(start_time, period_length)`; the
//!   `k`-th period covers `[start + k * period, start + (k + 1) * period)`.
//! - A [`TimeframeConverter`] binds a source and a target grid, validates once
//!   that the pair can ever overlap, and converts series in both directions.
//! - Conversions are area preserving: the source averages are reconstructed as
//!   a continuous piecewise-linear curve with the same integral over every
//!   source period, and each target period receives the exact average of that
//!   curve over the part of the period covered by data.
//! - The weights of a conversion only depend on the grid pair and the input
//!   length; they are memoized in a [`PlanCache`] that converters own or share.
//!
//! Key behaviors and trade-offs
//! - At least [`MIN_SOURCE_SAMPLES`] values are required per conversion.
//! - Converting a series to its own grid returns it unchanged.
//! - Target periods only partially covered by the source data are averaged
//!   over their covered part; nothing is extrapolated past the data.
//! - Only period-average series are accepted. Point samples are the caller's
//!   concern, see [`TimeseriesType`].
//!
//! Examples
//! ```
//! use timeframes::{Timeframe, TimeframeConverter};
//!
//! let source = Timeframe::new(0, 10)?;
//! let target = Timeframe::new(4, 7)?;
//! let converter = TimeframeConverter::new(source, target)?;
//!
//! let values = [1.0, 5.0, 3.0, 5.0, 7.0, 3.0, 2.0, 9.0];
//! assert_eq!(converter.get_target_len(values.len()), 11);
//! let out = converter.convert_from(&values)?;
//! assert!((out[10] - 10.4).abs() < 1e-9);
//!
//! let back = converter.convert_to(&out)?;
//! assert_eq!(back.len(), converter.get_source_len(out.len()));
//! # Ok::<(), timeframes::TimeframeError>(())
//! ```
//!
//! Sharing one plan cache between converters:
//! ```
//! use std::sync::Arc;
//! use timeframes::{CacheConfig, PlanCache, Timeframe, TimeframeConverter};
//!
//! let cache = Arc::new(PlanCache::new(&CacheConfig::default()));
//! let daily = Timeframe::new(0, 86_400)?;
//! let six_hourly = Timeframe::new(0, 21_600)?;
//!
//! let a = TimeframeConverter::builder(daily, six_hourly)
//!     .shared_cache(Arc::clone(&cache))
//!     .build()?;
//! let b = TimeframeConverter::builder(daily, six_hourly)
//!     .shared_cache(Arc::clone(&cache))
//!     .build()?;
//!
//! a.convert_from(&[1.0, 2.0, 3.0])?;
//! b.convert_from(&[4.0, 5.0, 6.0])?;
//! assert_eq!(cache.stats().hits, 1);
//! # Ok::<(), timeframes::TimeframeError>(())
//! ```
//!
//! See `timeframes/examples/` for runnable demonstrations.
#![warn(missing_docs)]

mod converter;

pub use converter::{TimeframeConverter, TimeframeConverterBuilder};

pub use timeframes_cache::{
    CacheStats, MokaPlanStore, PlanCache, PlanKey, PlanStore, SharedPlanStore,
};
pub use timeframes_core::conversion;
pub use timeframes_core::{
    ConversionPlan, MIN_SOURCE_SAMPLES, Timeframe, check_overlap, convert, target_len,
};
pub use timeframes_types::{CacheConfig, TimeframeError, TimeseriesType};
