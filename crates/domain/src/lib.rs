#![allow(clippy::multiple_crate_versions)]

pub mod config;
mod dynamic;
pub mod index;
pub mod summary;

pub use config::IndexConfig;
pub use index::{DistributionIndex, ValueRecord};
pub use summary::{Frequency, IndexSummary};
