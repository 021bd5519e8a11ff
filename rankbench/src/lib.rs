#![warn(missing_docs)]
//! # RankBench
//!
//! Micro-benchmarking harness that times a set of functions against a shared
//! argument list and ranks them from fastest to slowest.
//!
//! - **Rounds**: every round times each registered function once, in
//!   registration order
//! - **Argument isolation**: each call receives its own copy of the argument
//!   template, so functions may mutate their inputs freely
//! - **Quiet timing**: stdout is redirected to the null device while a function
//!   runs and restored afterwards, even if it panics
//! - **Fail-soft**: panics and `Err` returns are reported and recorded as
//!   zero-length samples; the run always completes
//! - **Reports**: human text, JSON and CSV
//!
//! ## Quick Start
//!
//! ```
//! use rankbench::prelude::*;
//!
//! fn fib_recursive(n: u64) -> u64 {
//!     if n <= 1 { n } else { fib_recursive(n - 1) + fib_recursive(n - 2) }
//! }
//!
//! fn fib_for(n: u64) -> u64 {
//!     let (mut a, mut b) = (0u64, 1u64);
//!     for _ in 0..n {
//!         (a, b) = (b, a + b);
//!     }
//!     a
//! }
//!
//! let bench = Benchmark::new(
//!     [
//!         BenchFn::unary("fib_recursive", fib_recursive),
//!         BenchFn::unary("fib_for", fib_for),
//!     ],
//!     &[20],
//!     5,
//! );
//!
//! assert_eq!(bench.best().map(BenchFn::name), Some("fib_for"));
//! println!("{bench}");
//! ```

// Re-export core types
pub use rankbench_core::{
    BenchFn, Benchmark, InvocationError, Outcome, RunConfig, StdoutSuppressor, SuppressError,
    Timer, TimingRecord, time_one,
};

// Re-export report types
pub use rankbench_report::{
    FunctionMetrics, FunctionResult, FunctionStatus, OutputFormat, Report, ReportSummary,
    format_human_output, generate_csv_report, generate_json_report,
};

// Re-export stats
pub use rankbench_stats::{SummaryStatistics, compute_summary};

// Re-export the harness
pub use rankbench_cli::{Harness, HarnessArgs, RankConfig, init_logging, render_report};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{BenchFn, Benchmark, Harness, HarnessArgs, Outcome, RunConfig};
}
