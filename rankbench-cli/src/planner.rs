//! Function Planner
//!
//! Selects which registered functions take part in a run.
//!
//! Filtering options:
//! - Regex pattern that names must match
//! - Regex pattern that excludes names
//!
//! Ordering: registration order is preserved; it decides tie-breaks in the
//! ranking.

use rankbench_core::BenchFn;
use regex::Regex;

/// Keep the functions whose names pass the include and exclude patterns
pub fn build_plan<A>(
    functions: impl IntoIterator<Item = BenchFn<A>>,
    filter: Option<&Regex>,
    skip: Option<&Regex>,
) -> Vec<BenchFn<A>> {
    functions
        .into_iter()
        .filter(|f| {
            if let Some(re) = filter {
                if !re.is_match(f.name()) {
                    return false;
                }
            }

            if let Some(re) = skip {
                if re.is_match(f.name()) {
                    return false;
                }
            }

            true
        })
        .collect()
}
