//! RankBench Example
//!
//! Compares a few ways of summing a vector and demonstrates the runner API:
//! extra rounds, argument template edits, failure handling and reset.
//!
//! Run with:
//!   cargo run --example compare --release
//!   cargo run --example compare --release -- --format json
//!   cargo run --example compare --release -- --filter iter --rounds 50

use clap::Parser;
use rankbench::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "compare", about = "Compare vector summation strategies")]
struct Cli {
    /// Vector length
    #[arg(long, default_value = "100000")]
    len: u64,

    #[command(flatten)]
    harness: HarnessArgs,
}

fn functions() -> Vec<BenchFn<Vec<u64>>> {
    vec![
        BenchFn::unary("index_loop", |v: Vec<u64>| {
            let mut total = 0u64;
            for i in 0..v.len() {
                total = total.wrapping_add(v[i]);
            }
            total
        }),
        BenchFn::unary("iter_sum", |v: Vec<u64>| {
            v.iter().fold(0u64, |acc, x| acc.wrapping_add(*x))
        }),
        BenchFn::unary("sort_then_sum", |mut v: Vec<u64>| {
            v.sort_unstable();
            v.iter().fold(0u64, |acc, x| acc.wrapping_add(*x))
        }),
        BenchFn::unary("chatty", |v: Vec<u64>| {
            // Discarded while timed unless --show-output is passed
            println!("summing {} values", v.len());
            v.len()
        }),
    ]
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let harness = Harness::new(cli.harness)?;
    harness.init_logging();

    let data: Vec<u64> = (0..cli.len).rev().collect();
    let Some(mut bench) = harness.run(functions(), &[data])? else {
        return Ok(());
    };

    // Ten more rounds on a smaller input; samples accumulate.
    bench.set_args(&[(0..1_000).collect()]);
    bench.run_rounds(10);
    println!("\nAfter 10 more rounds on 1000 elements:");
    for (function, mean_ns) in bench.get_results() {
        println!("  {:<14} {:>12.0} ns", function.name(), mean_ns);
    }

    // An empty template makes every unary function fail; the run still completes.
    bench.reset();
    bench.remove_args(None);
    bench.run_rounds(1);
    println!("\nWith no arguments:");
    bench.print();

    Ok(())
}
