//! Lazy, unbounded Fibonacci iterator using the additive recurrence.

use std::iter::FusedIterator;

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::error::FibError;

/// Internal two-slot state of [`FibIterator`].
#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
    /// Nothing drawn yet; the next value is F(0).
    Uninitialized,
    /// F(0) drawn; the next value is F(1).
    OneEmitted,
    /// At least two values drawn; `current` is the last one returned.
    Steady { prev: BigUint, current: BigUint },
}

/// Lazy iterator over the Fibonacci sequence.
///
/// Yields F(0), F(1), F(2), ... and never ends. Each instance keeps its own
/// position; create a new one to start over.
///
/// # Example
/// ```
/// use fibseq_core::iterator::FibIterator;
/// let fibs: Vec<_> = FibIterator::new().take(7).map(|v| v.to_string()).collect();
/// assert_eq!(fibs, ["0", "1", "1", "2", "3", "5", "8"]);
/// ```
#[derive(Debug, Clone)]
pub struct FibIterator {
    state: State,
    position: u64,
}

impl FibIterator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: State::Uninitialized,
            position: 0,
        }
    }

    /// Always `true`: the sequence is unbounded.
    #[must_use]
    pub fn has_next(&self) -> bool {
        true
    }

    /// Number of values drawn so far.
    #[must_use]
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Removing values generated on the fly is not supported.
    pub fn remove(&mut self) -> Result<(), FibError> {
        Err(FibError::Unsupported(
            "removal of Fibonacci numbers generated on the fly is not supported".into(),
        ))
    }
}

impl Default for FibIterator {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FibIterator {
    type Item = BigUint;

    fn next(&mut self) -> Option<Self::Item> {
        let (next_state, value) = match std::mem::replace(&mut self.state, State::Uninitialized) {
            State::Uninitialized => (State::OneEmitted, BigUint::zero()),
            State::OneEmitted => (
                State::Steady {
                    prev: BigUint::zero(),
                    current: BigUint::one(),
                },
                BigUint::one(),
            ),
            State::Steady { prev, current } => {
                let sum = &prev + &current;
                (
                    State::Steady {
                        prev: current,
                        current: sum.clone(),
                    },
                    sum,
                )
            }
        };
        self.state = next_state;
        self.position += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl FusedIterator for FibIterator {}
