//! Timing Record
//!
//! The samples collected for one function, plus the statistics derived from
//! them. Statistics are recomputed on every call; nothing is cached.

use crate::function::{BenchFn, Outcome};
use rankbench_stats::{SummaryStatistics, compute_summary, population_mean, population_std_dev};
use std::cmp::Ordering;

/// Samples recorded for a single function under test
#[derive(Debug)]
pub struct TimingRecord<A> {
    function: BenchFn<A>,
    /// Position of the function in the constructor's list
    registration: usize,
    samples: Vec<u64>,
    failures: usize,
}

impl<A> TimingRecord<A> {
    /// Create an empty record for `function`
    pub fn new(function: BenchFn<A>) -> Self {
        Self::registered(function, 0)
    }

    pub(crate) fn registered(function: BenchFn<A>, registration: usize) -> Self {
        Self {
            function,
            registration,
            samples: Vec::new(),
            failures: 0,
        }
    }

    /// Append one sample in nanoseconds
    pub fn record_sample(&mut self, nanos: u64) {
        self.samples.push(nanos);
    }

    /// Append the duration of an outcome, counting it if it failed
    pub fn record_outcome(&mut self, outcome: &Outcome) {
        if outcome.is_failed() {
            self.failures += 1;
        }
        self.record_sample(outcome.nanos());
    }

    /// Mean of the samples in nanoseconds
    ///
    /// 0 with no samples, the sample itself with exactly one.
    pub fn mean(&self) -> f64 {
        population_mean(&self.samples)
    }

    /// Population standard deviation in nanoseconds
    ///
    /// 0 with no samples and exactly 1 with a single sample.
    pub fn deviation(&self) -> f64 {
        population_std_dev(&self.samples)
    }

    /// Total of all samples in nanoseconds
    pub fn sum(&self) -> u64 {
        self.samples.iter().sum()
    }

    /// Full summary of the samples
    pub fn summary(&self) -> SummaryStatistics {
        compute_summary(&self.samples)
    }

    /// Recorded samples, oldest first
    pub fn samples(&self) -> &[u64] {
        &self.samples
    }

    /// Number of failed invocations among the samples
    pub fn failures(&self) -> usize {
        self.failures
    }

    /// The function under test
    pub fn function(&self) -> &BenchFn<A> {
        &self.function
    }

    pub(crate) fn function_mut(&mut self) -> &mut BenchFn<A> {
        &mut self.function
    }

    /// Name of the function under test
    pub fn name(&self) -> &str {
        self.function.name()
    }

    pub(crate) fn registration(&self) -> usize {
        self.registration
    }

    /// Discard every sample and failure count
    pub fn reset(&mut self) {
        self.samples.clear();
        self.failures = 0;
    }

    /// Ranking comparator: ascending mean
    pub fn by_mean(a: &Self, b: &Self) -> Ordering {
        a.mean().total_cmp(&b.mean())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::InvocationError;

    fn record() -> TimingRecord<u32> {
        TimingRecord::new(BenchFn::new("f", |_: Vec<u32>| ()))
    }

    #[test]
    fn test_empty_record() {
        let r = record();
        assert_eq!(r.mean(), 0.0);
        assert_eq!(r.deviation(), 0.0);
        assert_eq!(r.sum(), 0);
    }

    #[test]
    fn test_single_sample() {
        let mut r = record();
        r.record_sample(1_234);
        assert_eq!(r.mean(), 1_234.0);
        assert_eq!(r.deviation(), 1.0);
        assert_eq!(r.sum(), 1_234);
    }

    #[test]
    fn test_population_statistics() {
        let mut r = record();
        for s in [10, 20, 30, 40] {
            r.record_sample(s);
        }
        assert!((r.mean() - 25.0).abs() < f64::EPSILON);
        assert!((r.deviation() - 125.0_f64.sqrt()).abs() < 1e-12);
        assert_eq!(r.sum(), 100);
        assert_eq!(r.samples(), &[10, 20, 30, 40]);
    }

    #[test]
    fn test_failed_outcome_records_zero() {
        let mut r = record();
        r.record_outcome(&Outcome::Completed { nanos: 90 });
        r.record_outcome(&Outcome::Failed {
            error: InvocationError::Panicked("nope".into()),
        });

        assert_eq!(r.samples(), &[90, 0]);
        assert_eq!(r.failures(), 1);
        assert!((r.mean() - 45.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_reset_clears_samples_and_failures() {
        let mut r = record();
        r.record_sample(5);
        r.record_outcome(&Outcome::Failed {
            error: InvocationError::Returned("e".into()),
        });
        r.reset();

        assert!(r.samples().is_empty());
        assert_eq!(r.failures(), 0);
        assert_eq!(r.mean(), 0.0);
    }

    #[test]
    fn test_by_mean_orders_ascending() {
        let mut fast = record();
        fast.record_sample(10);
        let mut slow = record();
        slow.record_sample(20);

        assert_eq!(TimingRecord::by_mean(&fast, &slow), Ordering::Less);
        assert_eq!(TimingRecord::by_mean(&slow, &fast), Ordering::Greater);
        assert_eq!(TimingRecord::by_mean(&fast, &fast), Ordering::Equal);
    }
}
