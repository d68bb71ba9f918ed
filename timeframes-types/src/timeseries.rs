use serde::{Deserialize, Serialize};

/// How the values of a timeseries relate to the time axis they are tagged with.
///
/// Only [`TimeseriesType::Average`] series can be resampled between grids;
/// point series have to be adapted by the caller first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum TimeseriesType {
    /// Each value is an instantaneous sample at the start of its period.
    Point,
    /// Each value is the average of the quantity over its whole period.
    #[default]
    Average,
}

impl TimeseriesType {
    /// Number of time points needed to describe `count` values of this kind.
    ///
    /// Average series need both edges of every period, so one more point than values.
    #[must_use]
    pub const fn time_point_count(self, count: usize) -> usize {
        match self {
            Self::Point => count,
            Self::Average => count + 1,
        }
    }
}

impl std::fmt::Display for TimeseriesType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Point => f.write_str("point"),
            Self::Average => f.write_str("average"),
        }
    }
}
