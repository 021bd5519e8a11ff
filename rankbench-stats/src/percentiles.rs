//! Percentile Computation
//!
//! Percentiles over raw nanosecond samples. Failed invocations are recorded
//! as zero-length samples and are included like any other value.

/// Compute a single percentile from nanosecond samples
///
/// Uses linear interpolation between nearest ranks.
///
/// # Examples
///
/// ```
/// # use rankbench_stats::compute_percentile;
/// let samples = [10, 20, 30, 40, 50];
/// assert_eq!(compute_percentile(&samples, 50.0), 30.0);
/// assert_eq!(compute_percentile(&samples, 75.0), 40.0);
/// ```
pub fn compute_percentile(samples: &[u64], percentile: f64) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }

    if samples.len() == 1 {
        return samples[0] as f64;
    }

    let mut sorted = samples.to_vec();
    sorted.sort_unstable();

    let n = sorted.len();
    let p = percentile.clamp(0.0, 100.0) / 100.0;

    let rank = p * (n - 1) as f64;
    let lower_idx = rank.floor() as usize;
    let upper_idx = (lower_idx + 1).min(n - 1);
    let fraction = rank - lower_idx as f64;

    let lower = sorted[lower_idx] as f64;
    let upper = sorted[upper_idx] as f64;
    lower + fraction * (upper - lower)
}

/// Median of the samples (50th percentile)
pub fn compute_median(samples: &[u64]) -> f64 {
    compute_percentile(samples, 50.0)
}
