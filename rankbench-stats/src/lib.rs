#![warn(missing_docs)]
//! RankBench Statistical Engine
//!
//! Summary statistics for per-function timing samples:
//! - Population mean and standard deviation
//! - Totals, extremes and median for reports
//! - Fixed placeholder deviation for single-sample records

mod percentiles;
mod summary;

pub use percentiles::{compute_median, compute_percentile};
pub use summary::{
    SINGLE_SAMPLE_DEVIATION, SummaryStatistics, compute_summary, population_mean,
    population_std_dev,
};

/// Nanoseconds per second, used when reports convert samples to seconds
pub const NANOS_PER_SEC: f64 = 1e9;
