//! RankBench Demos
//!
//! Function sets compared by the `rankbench-demos` binary. This crate is not
//! published.
//!
//! ```sh
//! cargo run -p rankbench-demos --release -- fibonacci --n 30
//! cargo run -p rankbench-demos --release -- sorting --size 2000 --format json
//! ```
//!
//! | Subcommand | Functions |
//! |------------|-----------|
//! | `fibonacci` | closed form, loop, naive recursion, memoized recursion |
//! | `sorting` | bubble, early-exit bubble, insertion, std stable and unstable |

pub mod fibonacci;
pub mod sorting;
