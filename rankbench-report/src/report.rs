//! Report Data Structures

use chrono::{DateTime, Utc};
use rankbench_stats::SummaryStatistics;
use serde::{Deserialize, Serialize};

/// Current report schema version
pub const SCHEMA_VERSION: u32 = 1;

/// Complete benchmark report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub meta: ReportMeta,
    /// Functions ranked fastest first
    pub results: Vec<FunctionResult>,
    pub summary: ReportSummary,
}

/// Report metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMeta {
    pub schema_version: u32,
    pub version: String,
    pub timestamp: DateTime<Utc>,
    pub config: ReportConfig,
}

impl ReportMeta {
    /// Metadata stamped with the current time
    pub fn now(config: ReportConfig) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: Utc::now(),
            config,
        }
    }
}

/// Runner configuration captured in report metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    pub suppress_output: bool,
    /// Number of arguments in the template when the report was built
    pub argument_count: usize,
}

/// Result for one benchmarked function
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionResult {
    /// 1-based position in the ranking
    pub rank: usize,
    pub name: String,
    pub status: FunctionStatus,
    pub metrics: FunctionMetrics,
    /// Invocations that failed and were recorded as zero-length samples
    pub failures: usize,
}

/// Outcome of a function across all rounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FunctionStatus {
    /// Every invocation completed
    Passed,
    /// At least one invocation failed
    Failed,
    /// No samples recorded yet
    Pending,
}

impl FunctionStatus {
    /// Derive the status from sample and failure counts
    pub fn from_counts(samples: usize, failures: usize) -> Self {
        if samples == 0 {
            FunctionStatus::Pending
        } else if failures > 0 {
            FunctionStatus::Failed
        } else {
            FunctionStatus::Passed
        }
    }
}

/// Timing metrics in nanoseconds
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FunctionMetrics {
    pub samples: usize,
    pub mean_ns: f64,
    pub std_dev_ns: f64,
    pub total_ns: u64,
    pub min_ns: u64,
    pub max_ns: u64,
    pub median_ns: f64,
}

impl From<&SummaryStatistics> for FunctionMetrics {
    fn from(stats: &SummaryStatistics) -> Self {
        Self {
            samples: stats.sample_count,
            mean_ns: stats.mean,
            std_dev_ns: stats.std_dev,
            total_ns: stats.sum,
            min_ns: stats.min,
            max_ns: stats.max,
            median_ns: stats.median,
        }
    }
}

/// A named entry of the ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub name: String,
    pub mean_ns: f64,
}

/// Report summary
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Completed rounds
    pub rounds: u64,
    pub total_functions: usize,
    /// Functions with at least one failed invocation
    pub failed_functions: usize,
    /// Mean of the per-function means (0 without functions)
    pub total_mean_ns: f64,
    /// Sum of every recorded sample
    pub total_ns: u64,
    pub best: Option<RankedEntry>,
    pub worst: Option<RankedEntry>,
}

impl Report {
    /// Assemble a report from ranked results, deriving the summary
    ///
    /// `results` must already be ordered fastest first. Best and worst are
    /// only populated once at least one round has completed.
    pub fn from_ranked(meta: ReportMeta, rounds: u64, results: Vec<FunctionResult>) -> Self {
        let entry = |r: &FunctionResult| RankedEntry {
            name: r.name.clone(),
            mean_ns: r.metrics.mean_ns,
        };
        let measured = rounds > 0;
        let total_mean_ns = if results.is_empty() {
            0.0
        } else {
            results.iter().map(|r| r.metrics.mean_ns).sum::<f64>() / results.len() as f64
        };

        let summary = ReportSummary {
            rounds,
            total_functions: results.len(),
            failed_functions: results.iter().filter(|r| r.failures > 0).count(),
            total_mean_ns,
            total_ns: results.iter().map(|r| r.metrics.total_ns).sum(),
            best: results.first().filter(|_| measured).map(entry),
            worst: results.last().filter(|_| measured).map(entry),
        };

        Self {
            meta,
            results,
            summary,
        }
    }

    /// Whether any round has been run
    pub fn is_measured(&self) -> bool {
        self.summary.rounds > 0
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn result(rank: usize, name: &str, samples: &[u64], failures: usize) -> FunctionResult {
        let stats = rankbench_stats::compute_summary(samples);
        FunctionResult {
            rank,
            name: name.to_string(),
            status: FunctionStatus::from_counts(samples.len(), failures),
            metrics: FunctionMetrics::from(&stats),
            failures,
        }
    }

    pub(crate) fn sample_report(rounds: u64) -> Report {
        let meta = ReportMeta::now(ReportConfig {
            suppress_output: true,
            argument_count: 1,
        });
        Report::from_ranked(
            meta,
            rounds,
            vec![
                result(1, "fib_for", &[1_000, 3_000], 0),
                result(2, "fib_recursive", &[2_000_000, 4_000_000], 0),
            ],
        )
    }

    #[test]
    fn test_summary_totals() {
        let report = sample_report(2);

        assert_eq!(report.summary.total_functions, 2);
        assert_eq!(report.summary.total_ns, 6_004_000);
        // (2_000 + 3_000_000) / 2
        assert!((report.summary.total_mean_ns - 1_501_000.0).abs() < 1e-6);
        assert_eq!(report.summary.best.as_ref().unwrap().name, "fib_for");
        assert_eq!(report.summary.worst.as_ref().unwrap().name, "fib_recursive");
    }

    #[test]
    fn test_total_mean_without_functions() {
        let meta = ReportMeta::now(ReportConfig {
            suppress_output: true,
            argument_count: 0,
        });
        let report = Report::from_ranked(meta, 2, Vec::new());
        assert_eq!(report.summary.total_mean_ns, 0.0);
    }

    #[test]
    fn test_unmeasured_report_has_no_best_or_worst() {
        let report = sample_report(0);

        assert!(!report.is_measured());
        assert!(report.summary.best.is_none());
        assert!(report.summary.worst.is_none());
    }

    #[test]
    fn test_status_from_counts() {
        assert_eq!(FunctionStatus::from_counts(0, 0), FunctionStatus::Pending);
        assert_eq!(FunctionStatus::from_counts(3, 0), FunctionStatus::Passed);
        assert_eq!(FunctionStatus::from_counts(3, 3), FunctionStatus::Failed);
    }

    #[test]
    fn test_failed_functions_counted() {
        let meta = ReportMeta::now(ReportConfig {
            suppress_output: true,
            argument_count: 0,
        });
        let report = Report::from_ranked(
            meta,
            3,
            vec![result(1, "always_fails", &[0, 0, 0], 3), result(2, "ok", &[10, 12, 11], 0)],
        );

        assert_eq!(report.summary.failed_functions, 1);
        assert_eq!(report.summary.best.unwrap().mean_ns, 0.0);
    }
}
