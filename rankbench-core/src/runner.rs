//! Benchmark Runner
//!
//! Owns one [`TimingRecord`] per registered function and a template argument
//! list. Each round times every function once, in registration order, against
//! a fresh copy of the template, then ranks the records by mean.
//!
//! ## Data Flow
//!
//! ```text
//!   argument template ──clone──▶ time_one(function) ──▶ Outcome
//!                                   │ stdout → /dev/null
//!                                   │ Timer around the call
//!                                   │ panics / Err caught
//!                                   ▼
//!                            TimingRecord::record_outcome
//!                                   │
//!                                   ▼
//!                          stable sort by mean (ranking)
//! ```

use crate::function::{BenchFn, InvocationError, Outcome};
use crate::measure::Timer;
use crate::quiet::StdoutSuppressor;
use crate::record::TimingRecord;
use rankbench_report::{
    FunctionMetrics, FunctionResult, FunctionStatus, Report, ReportConfig, ReportMeta,
    format_human_output,
};
use std::fmt;
use std::io::Write;

/// Runner configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    /// Rounds to run during construction
    pub rounds: u64,
    /// Discard stdout written by the functions under test
    pub suppress_output: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            rounds: 0,
            suppress_output: true,
        }
    }
}

/// Time a single invocation of `function` on a copy of `args`
///
/// Failures (panics and `Err` returns) never propagate: they are reported on
/// the real stdout once output is restored and returned as
/// [`Outcome::Failed`], which records as a zero-length sample.
pub fn time_one<A: Clone>(
    function: &mut BenchFn<A>,
    args: &[A],
    suppress_output: bool,
) -> Outcome {
    let args = args.to_vec();

    let guard = if suppress_output {
        match StdoutSuppressor::acquire() {
            Ok(guard) => Some(guard),
            Err(e) => {
                tracing::warn!(
                    function = function.name(),
                    error = %e,
                    "timing without output suppression"
                );
                None
            }
        }
    } else {
        None
    };

    let timer = Timer::start();
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| function.call(args)));
    let nanos = timer.stop();

    drop(guard);

    let error = match result {
        Ok(Ok(())) => return Outcome::Completed { nanos },
        Ok(Err(e)) => e,
        Err(panic) => InvocationError::from_panic(panic),
    };

    // A closed or broken stdout must not turn a contained failure into a panic.
    if let Err(e) = writeln!(std::io::stdout(), "ERROR: function <{}>", function.name()) {
        tracing::debug!(error = %e, "failure diagnostic not written");
    }
    tracing::warn!(
        function = function.name(),
        error = %error,
        "benchmarked function failed"
    );

    Outcome::Failed { error }
}

/// Repeated-timing benchmark over a fixed set of functions
///
/// Records are kept sorted fastest first after every mutation, so queries
/// never need to re-rank.
#[derive(Debug)]
pub struct Benchmark<A> {
    records: Vec<TimingRecord<A>>,
    args: Vec<A>,
    rounds: u64,
    config: RunConfig,
}

impl<A: Clone> Benchmark<A> {
    /// Register `functions`, copy `args` into the template and run `num_tests` rounds
    ///
    /// # Examples
    ///
    /// ```
    /// use rankbench_core::{BenchFn, Benchmark};
    ///
    /// let bench = Benchmark::new(
    ///     [
    ///         BenchFn::unary("square", |n: u64| n * n),
    ///         BenchFn::unary("sum_to", |n: u64| (0..=n).sum::<u64>()),
    ///     ],
    ///     &[1_000],
    ///     3,
    /// );
    /// assert_eq!(bench.rounds(), 3);
    /// assert!(bench.best().is_some());
    /// ```
    pub fn new(
        functions: impl IntoIterator<Item = BenchFn<A>>,
        args: &[A],
        num_tests: u64,
    ) -> Self {
        Self::with_config(
            functions,
            args,
            RunConfig {
                rounds: num_tests,
                ..RunConfig::default()
            },
        )
    }

    /// Like [`Benchmark::new`], with explicit configuration
    pub fn with_config(
        functions: impl IntoIterator<Item = BenchFn<A>>,
        args: &[A],
        config: RunConfig,
    ) -> Self {
        let records = functions
            .into_iter()
            .enumerate()
            .map(|(i, f)| TimingRecord::registered(f, i))
            .collect();

        let mut bench = Self {
            records,
            args: args.to_vec(),
            rounds: 0,
            config,
        };
        bench.run_rounds(config.rounds);
        bench
    }

    /// Time one function against a copy of `args`, honouring this runner's configuration
    pub fn time_one(&self, function: &mut BenchFn<A>, args: &[A]) -> Outcome {
        time_one(function, args, self.config.suppress_output)
    }

    /// Run `num_tests` more rounds and re-rank
    pub fn run_rounds(&mut self, num_tests: u64) {
        let suppress_output = self.config.suppress_output;

        for _ in 0..num_tests {
            self.rounds += 1;
            for record in &mut self.records {
                let outcome = time_one(record.function_mut(), &self.args, suppress_output);
                record.record_outcome(&outcome);
            }
            tracing::debug!(
                round = self.rounds,
                functions = self.records.len(),
                "round complete"
            );
        }

        self.rank();
    }

    /// Replace the argument template with a copy of `args`
    pub fn set_args(&mut self, args: &[A]) {
        self.args = args.to_vec();
    }

    /// Append copies of `args` to the argument template
    pub fn add_args(&mut self, args: &[A]) {
        self.args.extend_from_slice(args);
    }
}

impl<A: PartialEq> Benchmark<A> {
    /// Remove arguments from the template
    ///
    /// `None` clears the template. `Some(args)` removes every template element
    /// equal to one of `args`.
    pub fn remove_args(&mut self, args: Option<&[A]>) {
        match args {
            None => self.args.clear(),
            Some(remove) => self.args.retain(|arg| !remove.contains(arg)),
        }
    }
}

impl<A> Benchmark<A> {
    /// Discard every sample and return to the unmeasured state
    ///
    /// Functions, arguments and configuration are kept. The round counter is
    /// zeroed and the records return to registration order.
    pub fn reset(&mut self) {
        for record in &mut self.records {
            record.reset();
        }
        self.rounds = 0;
        self.records.sort_by_key(TimingRecord::registration);
    }

    /// Clear the argument template
    pub fn clear_args(&mut self) {
        self.args.clear();
    }

    /// The argument template
    pub fn get_args(&self) -> &[A] {
        &self.args
    }

    fn rank(&mut self) {
        // Stable: equal means keep their previous relative order.
        self.records.sort_by(TimingRecord::by_mean);
    }

    /// Fastest function, or `None` before any round has run
    pub fn best(&self) -> Option<&BenchFn<A>> {
        if !self.is_measured() {
            return None;
        }
        self.records.first().map(TimingRecord::function)
    }

    /// Slowest function, or `None` before any round has run
    pub fn worst(&self) -> Option<&BenchFn<A>> {
        if !self.is_measured() {
            return None;
        }
        self.records.last().map(TimingRecord::function)
    }

    /// Functions with their mean time in nanoseconds, fastest first
    pub fn get_results(&self) -> Vec<(&BenchFn<A>, f64)> {
        self.records
            .iter()
            .map(|r| (r.function(), r.mean()))
            .collect()
    }

    /// Records in ranking order
    pub fn records(&self) -> &[TimingRecord<A>] {
        &self.records
    }

    /// Completed rounds since construction or the last reset
    pub fn rounds(&self) -> u64 {
        self.rounds
    }

    /// Whether at least one round has run
    pub fn is_measured(&self) -> bool {
        self.rounds > 0
    }

    /// Number of registered functions
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no functions are registered
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Runner configuration
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Build a serializable report of the current ranking
    pub fn report(&self) -> Report {
        let meta = ReportMeta::now(ReportConfig {
            suppress_output: self.config.suppress_output,
            argument_count: self.args.len(),
        });

        let results = self
            .records
            .iter()
            .enumerate()
            .map(|(i, record)| {
                let stats = record.summary();
                FunctionResult {
                    rank: i + 1,
                    name: record.name().to_string(),
                    status: FunctionStatus::from_counts(stats.sample_count, record.failures()),
                    metrics: FunctionMetrics::from(&stats),
                    failures: record.failures(),
                }
            })
            .collect();

        Report::from_ranked(meta, self.rounds, results)
    }

    /// Print the textual report to stdout
    pub fn print(&self) {
        println!("{self}");
    }
}

impl<A> fmt::Display for Benchmark<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_human_output(&self.report()))
    }
}
