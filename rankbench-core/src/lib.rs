#![warn(missing_docs)]
//! RankBench Core - Timing Runtime
//!
//! This crate provides the measurement side of the harness:
//! - `BenchFn` for naming the functions under test
//! - `TimingRecord` holding per-function samples and statistics
//! - `Benchmark` running rounds and ranking functions by mean time
//! - Scoped stdout suppression around each timed call
//! - Monotonic nanosecond timer

mod function;
mod measure;
mod quiet;
mod record;
mod runner;

pub use function::{BenchFn, InvocationError, Outcome};
pub use measure::Timer;
pub use quiet::{StdoutSuppressor, SuppressError};
pub use record::TimingRecord;
pub use runner::{Benchmark, RunConfig, time_one};
