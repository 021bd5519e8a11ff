//! RankBench demo binary
//!
//! Run with:
//!   cargo run -p rankbench-demos --release -- fibonacci
//!   cargo run -p rankbench-demos --release -- sorting --size 5000 --rounds 3

use clap::{Parser, Subcommand};
use rankbench_cli::{Harness, HarnessArgs};
use rankbench_demos::{fibonacci, sorting};

/// Rank a few implementations of the same task
#[derive(Parser, Debug)]
#[command(name = "rankbench-demos", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    harness: HarnessArgs,
}

/// Demo subcommands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Fibonacci: closed form, loop, naive and memoized recursion
    Fibonacci {
        /// Index of the Fibonacci number to compute
        #[arg(long, default_value = "30")]
        n: u64,
    },
    /// Sorting a vector of random integers
    Sorting {
        /// Number of elements
        #[arg(long, default_value = "10000")]
        size: usize,
        /// Values are drawn from [-interval, interval)
        #[arg(long, default_value = "10000")]
        interval: i64,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let harness = Harness::new(cli.harness)?;
    harness.init_logging();

    match cli.command {
        Commands::Fibonacci { n } => {
            if n > 70 {
                anyhow::bail!("n = {n} is past the closed form's f64 precision; pick n <= 70");
            }
            tracing::debug!(n, "fibonacci demo");
            harness.run(fibonacci::functions(), &[n])?;
        }
        Commands::Sorting { size, interval } => {
            let data = sorting::random_data(size, interval);
            tracing::debug!(size, interval, "sorting demo");
            harness.run(sorting::functions(), &[data])?;
        }
    }

    Ok(())
}
