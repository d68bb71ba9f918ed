//! Shared error, configuration and series-kind types for the timeframes workspace.
#![warn(missing_docs)]

mod config;
mod error;
mod timeseries;

pub use config::CacheConfig;
pub use error::TimeframeError;
pub use timeseries::TimeseriesType;
