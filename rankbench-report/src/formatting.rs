//! Output Formatting
//!
//! Human-readable rendering of a report. Times are printed in seconds with
//! six decimal places.

use crate::report::{FunctionResult, Report};
use rankbench_stats::NANOS_PER_SEC;
use std::fmt::Write;

/// Text emitted in place of a report when no round has run
pub const NO_BENCHMARK_MESSAGE: &str = "No benchmark performed...";

const BANNER: &str = "---------------------Benchmark---------------------";

fn secs(nanos: f64) -> f64 {
    nanos / NANOS_PER_SEC
}

fn format_result_line(output: &mut String, result: &FunctionResult) {
    let _ = write!(
        output,
        "\t{}: ({:.6} ± {:.6}) s",
        result.name,
        secs(result.metrics.mean_ns),
        secs(result.metrics.std_dev_ns)
    );
    if result.failures > 0 {
        let _ = write!(output, " [{} failed]", result.failures);
    }
    output.push('\n');
}

/// Format a report for terminal display
///
/// # Arguments
/// * `report` - Report built from a runner
///
/// # Returns
/// The multi-line summary, or [`NO_BENCHMARK_MESSAGE`] if nothing was measured
pub fn format_human_output(report: &Report) -> String {
    if !report.is_measured() {
        return NO_BENCHMARK_MESSAGE.to_string();
    }

    let summary = &report.summary;
    let mut output = String::new();

    output.push_str(BANNER);
    output.push('\n');
    let _ = writeln!(output, "Rounds: {}", summary.rounds);
    let _ = writeln!(output, "Functions: {}", summary.total_functions);
    let _ = writeln!(output, "Total Mean: {:.6} s", secs(summary.total_mean_ns));
    let _ = writeln!(output, "Total     : {:.6} s", secs(summary.total_ns as f64));

    if let Some(best) = &summary.best {
        let _ = writeln!(
            output,
            "Best result: <{}> with mean {:.6}s",
            best.name,
            secs(best.mean_ns)
        );
    }
    if let Some(worst) = &summary.worst {
        let _ = writeln!(
            output,
            "Worst result: <{}> with mean {:.6}s",
            worst.name,
            secs(worst.mean_ns)
        );
    }

    output.push_str("\nResults:\n");
    for result in &report.results {
        format_result_line(&mut output, result);
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::tests::{result, sample_report};
    use crate::report::{ReportConfig, ReportMeta};

    #[test]
    fn test_unmeasured_message() {
        let report = sample_report(0);
        assert_eq!(format_human_output(&report), "No benchmark performed...");
    }

    #[test]
    fn test_measured_output() {
        let report = sample_report(2);
        let text = format_human_output(&report);

        assert!(text.starts_with(BANNER));
        assert!(text.contains("Rounds: 2\n"));
        assert!(text.contains("Functions: 2\n"));
        assert!(text.contains("Total Mean: 0.001501 s\n"));
        assert!(text.contains("Total     : 0.006004 s\n"));
        assert!(text.contains("Best result: <fib_for> with mean 0.000002s\n"));
        assert!(text.contains("Worst result: <fib_recursive> with mean 0.003000s\n"));
        assert!(text.contains("\tfib_for: (0.000002 ± 0.000001) s\n"));
        assert!(text.contains("\tfib_recursive: (0.003000 ± 0.001000) s\n"));
    }

    #[test]
    fn test_results_listed_in_rank_order() {
        let text = format_human_output(&sample_report(2));
        let fast = text.find("\tfib_for").unwrap();
        let slow = text.find("\tfib_recursive").unwrap();
        assert!(fast < slow);
    }

    #[test]
    fn test_failures_are_tagged() {
        let meta = ReportMeta::now(ReportConfig {
            suppress_output: true,
            argument_count: 0,
        });
        let report = crate::Report::from_ranked(
            meta,
            3,
            vec![result(1, "broken", &[0, 0, 0], 3), result(2, "ok", &[5, 5, 5], 0)],
        );
        let text = format_human_output(&report);

        assert!(text.contains("\tbroken: (0.000000 ± 0.000000) s [3 failed]\n"));
        assert!(text.contains("\tok: (0.000000 ± 0.000000) s\n"));
    }

    #[test]
    fn test_measured_without_functions() {
        let meta = ReportMeta::now(ReportConfig {
            suppress_output: true,
            argument_count: 0,
        });
        let report = crate::Report::from_ranked(meta, 1, Vec::new());
        let text = format_human_output(&report);

        assert!(text.contains("Functions: 0\n"));
        assert!(!text.contains("Best result"));
    }
}
