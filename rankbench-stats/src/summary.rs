//! Summary Statistics
//!
//! Population statistics over the nanosecond samples of one function:
//! - Mean and standard deviation use the population formulas (divide by `n`)
//! - A single sample reports itself as the mean and a fixed deviation of 1
//! - No samples report zero everywhere

use crate::percentiles::compute_median;

/// Deviation reported for a record holding exactly one sample.
///
/// The variance of a single observation is undefined, so a fixed placeholder
/// is used instead of a computed value.
pub const SINGLE_SAMPLE_DEVIATION: f64 = 1.0;

/// Summary of one function's samples, all values in nanoseconds
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummaryStatistics {
    /// Population mean
    pub mean: f64,
    /// Population standard deviation
    pub std_dev: f64,
    /// Total of all samples
    pub sum: u64,
    /// Smallest sample
    pub min: u64,
    /// Largest sample
    pub max: u64,
    /// Median sample
    pub median: f64,
    /// Number of samples
    pub sample_count: usize,
}

/// Population mean of the samples, or 0 when there are none
pub fn population_mean(samples: &[u64]) -> f64 {
    match samples {
        [] => 0.0,
        [only] => *only as f64,
        _ => samples.iter().map(|&s| s as f64).sum::<f64>() / samples.len() as f64,
    }
}

/// Population standard deviation of the samples
///
/// Returns 0 for no samples and [`SINGLE_SAMPLE_DEVIATION`] for one.
pub fn population_std_dev(samples: &[u64]) -> f64 {
    match samples {
        [] => 0.0,
        [_] => SINGLE_SAMPLE_DEVIATION,
        _ => {
            let mean = population_mean(samples);
            let variance = samples
                .iter()
                .map(|&s| (s as f64 - mean).powi(2))
                .sum::<f64>()
                / samples.len() as f64;
            variance.sqrt()
        }
    }
}

/// Compute the summary for a sample sequence
pub fn compute_summary(samples: &[u64]) -> SummaryStatistics {
    if samples.is_empty() {
        return SummaryStatistics::default();
    }

    SummaryStatistics {
        mean: population_mean(samples),
        std_dev: population_std_dev(samples),
        sum: samples.iter().sum(),
        min: samples.iter().copied().min().unwrap_or(0),
        max: samples.iter().copied().max().unwrap_or(0),
        median: compute_median(samples),
        sample_count: samples.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_summary() {
        let samples = vec![2, 4, 4, 4, 5, 5, 7, 9];
        let summary = compute_summary(&samples);

        assert!((summary.mean - 5.0).abs() < f64::EPSILON);
        // Textbook population example: sigma = 2
        assert!((summary.std_dev - 2.0).abs() < 1e-12);
        assert_eq!(summary.sum, 40);
        assert_eq!(summary.min, 2);
        assert_eq!(summary.max, 9);
        assert!((summary.median - 4.5).abs() < f64::EPSILON);
        assert_eq!(summary.sample_count, 8);
    }

    #[test]
    fn test_matches_independent_computation() {
        let samples: Vec<u64> = vec![1_200, 980, 1_430, 1_010, 1_105, 990];
        let n = samples.len() as f64;
        let mean = samples.iter().sum::<u64>() as f64 / n;
        let var = samples
            .iter()
            .map(|&x| {
                let d = x as f64 - mean;
                d * d
            })
            .sum::<f64>()
            / n;

        assert!((population_mean(&samples) - mean).abs() < 1e-9);
        assert!((population_std_dev(&samples) - var.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_single_sample() {
        let summary = compute_summary(&[750]);

        assert_eq!(summary.mean, 750.0);
        assert_eq!(summary.std_dev, SINGLE_SAMPLE_DEVIATION);
        assert_eq!(summary.sum, 750);
        assert_eq!(summary.sample_count, 1);
    }

    #[test]
    fn test_empty_samples() {
        let summary = compute_summary(&[]);

        assert_eq!(summary, SummaryStatistics::default());
        assert_eq!(population_mean(&[]), 0.0);
        assert_eq!(population_std_dev(&[]), 0.0);
    }

    #[test]
    fn test_identical_samples_have_zero_deviation() {
        let samples = vec![100, 100, 100, 100];
        assert!((population_std_dev(&samples) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_samples_from_failures_count_towards_mean() {
        let samples = vec![0, 0, 300];
        assert!((population_mean(&samples) - 100.0).abs() < f64::EPSILON);
    }
}
