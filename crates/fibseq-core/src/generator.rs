//! Sequence generator trait and the lazy-backed generator.

use num_bigint::BigUint;

use crate::error::FibError;
use crate::iterator::FibIterator;

/// Trait for producing the first `count` Fibonacci numbers eagerly.
pub trait SequenceGenerator: Send + Sync {
    /// Generate F(0) through F(count - 1).
    ///
    /// Fails with [`FibError::InvalidCount`] when `count` is not positive.
    fn generate(&self, count: i64) -> Result<Vec<BigUint>, FibError>;

    /// Get the name of this generator.
    fn name(&self) -> &str;
}

/// Convert a requested count to a length, rejecting `count <= 0`.
pub(crate) fn checked_count(count: i64) -> Result<usize, FibError> {
    if count <= 0 {
        return Err(FibError::InvalidCount(count));
    }
    usize::try_from(count).map_err(|_| FibError::InvalidCount(count))
}

/// Generator that drains a fresh [`FibIterator`].
pub struct LazyGenerator;

impl LazyGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for LazyGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl SequenceGenerator for LazyGenerator {
    fn generate(&self, count: i64) -> Result<Vec<BigUint>, FibError> {
        let len = checked_count(count)?;
        Ok(FibIterator::new().take(len).collect())
    }

    fn name(&self) -> &'static str {
        "LazyGenerator"
    }
}
