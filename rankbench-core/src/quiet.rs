//! Standard Output Suppression
//!
//! While a [`StdoutSuppressor`] is alive, file descriptor 1 points at the null
//! device, so anything the benchmarked code prints is discarded. Dropping the
//! guard restores the original descriptor, on unwinding as well.
//!
//! The swap is process-wide. A global lock serializes guards, so two runners
//! in the same process (parallel tests, for instance) never interleave swaps.
//! A second guard requested on a thread that already holds one fails with
//! [`SuppressError::Reentrant`] instead of waiting on itself.
//! On non-Unix targets the guard only takes the lock and output is untouched.

use std::cell::Cell;
use std::io::Write;
use std::sync::{Mutex, MutexGuard, PoisonError};
use thiserror::Error;

static STDOUT_SWAP: Mutex<()> = Mutex::new(());

thread_local! {
    static HELD: Cell<bool> = const { Cell::new(false) };
}

fn lock_swap() -> Result<MutexGuard<'static, ()>, SuppressError> {
    if HELD.with(Cell::get) {
        return Err(SuppressError::Reentrant);
    }
    let lock = STDOUT_SWAP.lock().unwrap_or_else(PoisonError::into_inner);
    HELD.with(|held| held.set(true));
    Ok(lock)
}

/// Failure to redirect standard output
#[derive(Debug, Error)]
pub enum SuppressError {
    /// The null device could not be opened
    #[error("failed to open null device: {0}")]
    OpenNull(#[source] std::io::Error),
    /// The current stdout descriptor could not be saved
    #[error("failed to save stdout descriptor: {0}")]
    Save(#[source] std::io::Error),
    /// Descriptor 1 could not be pointed at the null device
    #[error("failed to redirect stdout: {0}")]
    Redirect(#[source] std::io::Error),
    /// This thread already holds a guard (a benchmark nested in a timed function)
    #[error("stdout is already suppressed on this thread")]
    Reentrant,
}

/// Scoped guard discarding everything written to standard output
#[must_use = "output is only suppressed while the guard is alive"]
pub struct StdoutSuppressor {
    #[cfg(unix)]
    saved_fd: libc::c_int,
    _lock: MutexGuard<'static, ()>,
}

impl std::fmt::Debug for StdoutSuppressor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StdoutSuppressor").finish_non_exhaustive()
    }
}

impl StdoutSuppressor {
    /// Redirect standard output to the null device until the guard is dropped
    #[cfg(unix)]
    pub fn acquire() -> Result<Self, SuppressError> {
        use std::os::unix::io::AsRawFd;

        let lock = lock_swap()?;
        let mut guard = Self {
            saved_fd: -1,
            _lock: lock,
        };

        // Anything buffered before the swap belongs on the real stdout.
        let _ = std::io::stdout().flush();

        let null = std::fs::OpenOptions::new()
            .write(true)
            .open("/dev/null")
            .map_err(SuppressError::OpenNull)?;

        let saved_fd = unsafe { libc::dup(libc::STDOUT_FILENO) };
        if saved_fd < 0 {
            return Err(SuppressError::Save(std::io::Error::last_os_error()));
        }

        if unsafe { libc::dup2(null.as_raw_fd(), libc::STDOUT_FILENO) } < 0 {
            let err = std::io::Error::last_os_error();
            unsafe {
                libc::close(saved_fd);
            }
            return Err(SuppressError::Redirect(err));
        }

        // `null` closes its own descriptor here; fd 1 keeps the duplicate.
        guard.saved_fd = saved_fd;
        Ok(guard)
    }

    /// Serialize with other guards; output is not redirected on this platform
    #[cfg(not(unix))]
    pub fn acquire() -> Result<Self, SuppressError> {
        let lock = lock_swap()?;
        Ok(Self { _lock: lock })
    }
}

impl Drop for StdoutSuppressor {
    fn drop(&mut self) {
        // Discard whatever the suppressed code left in the buffer.
        let _ = std::io::stdout().flush();

        #[cfg(unix)]
        if self.saved_fd >= 0 {
            unsafe {
                libc::dup2(self.saved_fd, libc::STDOUT_FILENO);
                libc::close(self.saved_fd);
            }
        }

        HELD.with(|held| held.set(false));
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn identity(fd: libc::c_int) -> (u64, u64, u64) {
        let mut stat = std::mem::MaybeUninit::<libc::stat>::zeroed();
        let ret = unsafe { libc::fstat(fd, stat.as_mut_ptr()) };
        assert_eq!(ret, 0, "fstat failed on fd {fd}");
        let stat = unsafe { stat.assume_init() };
        (stat.st_dev as u64, stat.st_ino as u64, stat.st_rdev as u64)
    }

    fn null_identity() -> (u64, u64, u64) {
        use std::os::unix::io::AsRawFd;
        let null = std::fs::File::open("/dev/null").unwrap();
        identity(null.as_raw_fd())
    }

    #[test]
    fn test_stdout_points_at_null_while_held() {
        let guard = StdoutSuppressor::acquire().unwrap();
        let during = identity(libc::STDOUT_FILENO);
        drop(guard);

        assert_eq!(during, null_identity());
    }

    #[test]
    fn test_stdout_restored_after_drop() {
        // Holding the lock keeps other tests from swapping fd 1 meanwhile.
        let before = {
            let _lock = STDOUT_SWAP.lock().unwrap_or_else(PoisonError::into_inner);
            identity(libc::STDOUT_FILENO)
        };

        drop(StdoutSuppressor::acquire().unwrap());

        let _lock = STDOUT_SWAP.lock().unwrap_or_else(PoisonError::into_inner);
        assert_eq!(identity(libc::STDOUT_FILENO), before);
    }

    #[test]
    fn test_nested_guard_is_rejected() {
        let outer = StdoutSuppressor::acquire().unwrap();
        let inner = StdoutSuppressor::acquire();
        drop(outer);

        assert!(matches!(inner, Err(SuppressError::Reentrant)));
        // The thread can suppress again once the outer guard is gone.
        drop(StdoutSuppressor::acquire().unwrap());
    }

    #[test]
    fn test_stdout_restored_after_panic() {
        let before = {
            let _lock = STDOUT_SWAP.lock().unwrap_or_else(PoisonError::into_inner);
            identity(libc::STDOUT_FILENO)
        };

        let result = std::panic::catch_unwind(|| {
            let _guard = StdoutSuppressor::acquire().unwrap();
            panic!("boom");
        });
        assert!(result.is_err());

        let _lock = STDOUT_SWAP.lock().unwrap_or_else(PoisonError::into_inner);
        assert_eq!(identity(libc::STDOUT_FILENO), before);
    }
}
