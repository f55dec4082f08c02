//! # fibseq-core
//!
//! Core library for the FibSeq REPL: positive-integer input validation with
//! diagnostic hints, and Fibonacci sequence producers over arbitrary-precision
//! integers in bounded (eager) and unbounded (lazy) form.

pub mod constants;
pub mod error;
pub mod generator;
pub mod generator_iterative;
pub mod iterator;
pub mod request;
pub mod validate;

// Re-exports
pub use constants::{exit_codes, DEFAULT_DISPLAY_LIMIT, DEFAULT_MAX_LENGTH};
pub use error::FibError;
pub use generator::{LazyGenerator, SequenceGenerator};
pub use generator_iterative::IterativeGenerator;
pub use iterator::FibIterator;
pub use request::{output_file_name, trim_line, Command, Destination, RequestError, SequenceLimits};
pub use validate::{is_valid_positive_integer, validate, HintCode};

use num_bigint::BigUint;

/// Generate the first `count` Fibonacci numbers, starting from F(0).
///
/// This is a convenience wrapper over [`IterativeGenerator`].
///
/// # Example
/// ```
/// let fibs = fibseq_core::generate(10).unwrap();
/// assert_eq!(fibs[9].to_string(), "34");
/// assert!(fibseq_core::generate(0).is_err());
/// ```
pub fn generate(count: i64) -> Result<Vec<BigUint>, FibError> {
    IterativeGenerator::new().generate(count)
}
