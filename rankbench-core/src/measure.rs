//! High-Precision Timing
//!
//! Wall-clock measurement on the platform's monotonic clock
//! (`std::time::Instant`), reported in whole nanoseconds.

use std::time::Instant;

/// Timer for measuring a single invocation
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Start a new timer
    #[inline(always)]
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Nanoseconds elapsed since the timer started
    ///
    /// Saturates at `u64::MAX` (roughly 584 years).
    #[inline(always)]
    pub fn elapsed_nanos(&self) -> u64 {
        u64::try_from(self.start.elapsed().as_nanos()).unwrap_or(u64::MAX)
    }

    /// Stop the timer and return elapsed nanoseconds
    #[inline(always)]
    pub fn stop(self) -> u64 {
        self.elapsed_nanos()
    }
}
