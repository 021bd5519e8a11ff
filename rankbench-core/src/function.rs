//! Functions Under Test
//!
//! A [`BenchFn`] pairs a display name with a routine taking the runner's
//! argument list by value. Every invocation receives its own copy of the list,
//! so routines are free to mutate what they are given.

use std::fmt;
use thiserror::Error;

/// Why a single invocation did not complete
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvocationError {
    /// The routine panicked
    #[error("panicked: {0}")]
    Panicked(String),
    /// The routine returned an error
    #[error("returned an error: {0}")]
    Returned(String),
    /// The argument list did not match the routine's arity
    #[error("expected {expected} argument(s), got {got}")]
    Arity {
        /// Arguments the routine accepts
        expected: usize,
        /// Arguments in the template
        got: usize,
    },
}

impl InvocationError {
    /// Build a `Panicked` error from a `catch_unwind` payload
    pub fn from_panic(payload: Box<dyn std::any::Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };
        InvocationError::Panicked(message)
    }
}

/// Result of one timed invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The routine returned normally after `nanos` nanoseconds
    Completed {
        /// Elapsed wall-clock time
        nanos: u64,
    },
    /// The routine failed; no meaningful duration exists
    Failed {
        /// What went wrong
        error: InvocationError,
    },
}

impl Outcome {
    /// Duration to record for this outcome (0 for failures)
    pub fn nanos(&self) -> u64 {
        match self {
            Outcome::Completed { nanos } => *nanos,
            Outcome::Failed { .. } => 0,
        }
    }

    /// Whether the invocation failed
    pub fn is_failed(&self) -> bool {
        matches!(self, Outcome::Failed { .. })
    }
}

type Routine<A> = Box<dyn FnMut(Vec<A>) -> Result<(), InvocationError>>;

/// A named function registered with a [`Benchmark`](crate::Benchmark)
pub struct BenchFn<A> {
    name: String,
    routine: Routine<A>,
}

impl<A: 'static> BenchFn<A> {
    /// Register a routine receiving the whole argument list
    ///
    /// The return value is passed through `black_box` and discarded.
    pub fn new<F, R>(name: impl Into<String>, mut f: F) -> Self
    where
        F: FnMut(Vec<A>) -> R + 'static,
        R: 'static,
    {
        Self {
            name: name.into(),
            routine: Box::new(move |args| {
                std::hint::black_box(f(args));
                Ok(())
            }),
        }
    }

    /// Register a routine whose `Err` return counts as a failed invocation
    pub fn fallible<F, T, E>(name: impl Into<String>, mut f: F) -> Self
    where
        F: FnMut(Vec<A>) -> Result<T, E> + 'static,
        T: 'static,
        E: fmt::Display + 'static,
    {
        Self {
            name: name.into(),
            routine: Box::new(move |args| match f(args) {
                Ok(value) => {
                    std::hint::black_box(value);
                    Ok(())
                }
                Err(e) => Err(InvocationError::Returned(e.to_string())),
            }),
        }
    }

    /// Register a routine taking no arguments
    ///
    /// Fails the invocation if the template is not empty.
    pub fn nullary<F, R>(name: impl Into<String>, mut f: F) -> Self
    where
        F: FnMut() -> R + 'static,
        R: 'static,
    {
        Self {
            name: name.into(),
            routine: Box::new(move |args: Vec<A>| {
                if !args.is_empty() {
                    return Err(InvocationError::Arity {
                        expected: 0,
                        got: args.len(),
                    });
                }
                std::hint::black_box(f());
                Ok(())
            }),
        }
    }

    /// Register a routine taking exactly one argument
    ///
    /// Fails the invocation if the template does not hold exactly one value.
    pub fn unary<F, R>(name: impl Into<String>, mut f: F) -> Self
    where
        F: FnMut(A) -> R + 'static,
        R: 'static,
    {
        Self {
            name: name.into(),
            routine: Box::new(move |args: Vec<A>| {
                let got = args.len();
                let mut args = args.into_iter();
                match (args.next(), args.next()) {
                    (Some(arg), None) => {
                        std::hint::black_box(f(arg));
                        Ok(())
                    }
                    _ => Err(InvocationError::Arity { expected: 1, got }),
                }
            }),
        }
    }
}

impl<A> BenchFn<A> {
    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the routine once with an owned argument list
    ///
    /// Panics inside the routine are not caught here.
    pub fn call(&mut self, args: Vec<A>) -> Result<(), InvocationError> {
        (self.routine)(args)
    }
}

impl<A> fmt::Debug for BenchFn<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BenchFn").field("name", &self.name).finish()
    }
}

impl<A> fmt::Display for BenchFn<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
