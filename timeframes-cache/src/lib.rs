#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

mod cache;
mod store;

pub use crate::cache::{CacheStats, PlanCache};
pub use crate::store::{MokaPlanStore, PlanKey, PlanStore, SharedPlanStore, get_or_insert_with};
