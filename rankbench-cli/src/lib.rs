#![warn(missing_docs)]
//! RankBench CLI Library
//!
//! Command-line plumbing for benchmark binaries. Flatten [`HarnessArgs`] into
//! your own clap parser, build a [`Harness`], and hand it the functions and the
//! argument template to compare.
//!
//! # Example
//!
//! ```ignore
//! use clap::Parser;
//! use rankbench_cli::{Harness, HarnessArgs};
//! use rankbench_core::BenchFn;
//!
//! #[derive(Parser)]
//! struct Cli {
//!     #[command(flatten)]
//!     harness: HarnessArgs,
//! }
//!
//! fn main() -> anyhow::Result<()> {
//!     let harness = Harness::new(Cli::parse().harness)?;
//!     harness.init_logging();
//!     harness.run(vec![BenchFn::unary("double", |n: u64| n * 2)], &[21])?;
//!     Ok(())
//! }
//! ```

mod config;
mod planner;

pub use config::*;
pub use planner::build_plan;

use anyhow::Context;
use clap::Args;
use rankbench_core::{BenchFn, Benchmark, RunConfig};
use rankbench_report::{
    OutputFormat, Report, format_human_output, generate_csv_report, generate_json_report,
};
use regex::Regex;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Harness options shared by every benchmark binary
#[derive(Args, Debug, Clone, Default)]
pub struct HarnessArgs {
    /// Number of rounds; each round times every function once
    #[arg(long, short = 'n')]
    pub rounds: Option<u64>,

    /// Output format: human, json, csv
    #[arg(long)]
    pub format: Option<String>,

    /// Output file or directory (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Only run functions whose name matches this regex
    #[arg(long)]
    pub filter: Option<String>,

    /// Skip functions whose name matches this regex
    #[arg(long)]
    pub skip: Option<String>,

    /// Let the functions under test print to stdout while they are timed
    #[arg(long)]
    pub show_output: bool,

    /// Configuration file (default: discover rankbench.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Dry run - list selected functions without timing them
    #[arg(long)]
    pub dry_run: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Initialize tracing on stderr
///
/// `RUST_LOG` wins when set; otherwise RankBench crates log at `info`, or
/// `debug` when `verbose` is true. Repeated calls are ignored.
pub fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "rankbench_core={level},rankbench_cli={level},rankbench_demos={level}"
        ))
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Render a report in the requested format
pub fn render_report(report: &Report, format: OutputFormat) -> anyhow::Result<String> {
    let output = match format {
        OutputFormat::Json => generate_json_report(report)?,
        OutputFormat::Csv => generate_csv_report(report),
        OutputFormat::Human => {
            let mut text = format_human_output(report);
            if !text.ends_with('\n') {
                text.push('\n');
            }
            text
        }
    };
    Ok(output)
}

/// Configured harness: CLI flags layered over `rankbench.toml`
#[derive(Debug, Clone)]
pub struct Harness {
    args: HarnessArgs,
    config: RankConfig,
}

impl Harness {
    /// Resolve configuration from `--config`, discovery, or defaults
    pub fn new(args: HarnessArgs) -> anyhow::Result<Self> {
        let config = match &args.config {
            Some(path) => RankConfig::load(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => RankConfig::discover().unwrap_or_default(),
        };
        Ok(Self::with_config(args, config))
    }

    /// Use an already loaded configuration
    pub fn with_config(args: HarnessArgs, config: RankConfig) -> Self {
        Self { args, config }
    }

    /// Parsed command-line options
    pub fn args(&self) -> &HarnessArgs {
        &self.args
    }

    /// Initialize logging according to `--verbose`
    pub fn init_logging(&self) {
        init_logging(self.args.verbose);
    }

    /// Runner configuration: CLI flags override the config file
    pub fn run_config(&self) -> RunConfig {
        RunConfig {
            rounds: self.args.rounds.unwrap_or(self.config.runner.rounds),
            suppress_output: self.config.runner.suppress_output && !self.args.show_output,
        }
    }

    /// Output format: CLI flag, then config file
    pub fn format(&self) -> anyhow::Result<OutputFormat> {
        let format = self
            .args
            .format
            .as_deref()
            .unwrap_or(&self.config.output.format);
        format.parse().map_err(|e: String| anyhow::anyhow!(e))
    }

    /// Apply `--filter` and `--skip` to the registered functions
    pub fn plan<A>(
        &self,
        functions: impl IntoIterator<Item = BenchFn<A>>,
    ) -> anyhow::Result<Vec<BenchFn<A>>> {
        let compile = |pattern: &Option<String>| -> anyhow::Result<Option<Regex>> {
            pattern
                .as_deref()
                .map(|p| Regex::new(p).with_context(|| format!("invalid pattern '{p}'")))
                .transpose()
        };
        let filter = compile(&self.args.filter)?;
        let skip = compile(&self.args.skip)?;

        Ok(build_plan(functions, filter.as_ref(), skip.as_ref()))
    }

    /// Report destination; a directory gets `rankbench.<ext>` inside it
    pub fn output_path(&self, format: OutputFormat) -> Option<PathBuf> {
        let path = self.args.output.as_ref()?;
        if path.is_dir() {
            Some(path.join(format!("rankbench.{}", format.extension())))
        } else {
            Some(path.clone())
        }
    }

    /// Time the selected functions and emit the report
    ///
    /// Returns the measured runner, or `None` for a dry run or an empty plan.
    pub fn run<A: Clone>(
        &self,
        functions: impl IntoIterator<Item = BenchFn<A>>,
        args: &[A],
    ) -> anyhow::Result<Option<Benchmark<A>>> {
        let format = self.format()?;
        let functions = self.plan(functions)?;

        if functions.is_empty() {
            println!("No functions selected.");
            return Ok(None);
        }

        if self.args.dry_run {
            println!("RankBench Plan:");
            for f in &functions {
                println!("├── {}", f.name());
            }
            println!("{} functions, {} argument(s).", functions.len(), args.len());
            return Ok(None);
        }

        let run_config = self.run_config();
        tracing::info!(
            functions = functions.len(),
            rounds = run_config.rounds,
            suppress_output = run_config.suppress_output,
            "starting benchmark"
        );

        let bench = Benchmark::with_config(functions, args, run_config);
        let report = bench.report();
        let output = render_report(&report, format)?;

        if let Some(path) = self.output_path(format) {
            std::fs::write(&path, output.as_bytes())
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Report written to: {}", path.display());
        } else {
            print!("{}", output);
        }

        if report.summary.failed_functions > 0 {
            eprintln!(
                "Warning: {} function(s) failed during timing; their failed calls count as 0 s",
                report.summary.failed_functions
            );
        }

        Ok(Some(bench))
    }
}
