//! Iterative Fibonacci sequence generator.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::error::FibError;
use crate::generator::{checked_count, SequenceGenerator};

/// Iterative generator that fills the sequence with a two-slot loop.
pub struct IterativeGenerator;

impl IterativeGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for IterativeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl SequenceGenerator for IterativeGenerator {
    fn generate(&self, count: i64) -> Result<Vec<BigUint>, FibError> {
        let len = checked_count(count)?;
        tracing::debug!(count = len, "generating bounded sequence");

        let mut results = Vec::with_capacity(len);
        let mut a = BigUint::zero();
        let mut b = BigUint::one();

        results.push(a.clone());
        if len > 1 {
            results.push(b.clone());
            for _ in 2..len {
                let sum = &a + &b;
                results.push(sum.clone());
                a = std::mem::replace(&mut b, sum);
            }
        }

        Ok(results)
    }

    fn name(&self) -> &'static str {
        "IterativeGenerator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_single_element() {
        let results = IterativeGenerator::new().generate(1).unwrap();
        assert_eq!(results, vec![BigUint::zero()]);
    }

    #[test]
    fn generate_two_elements() {
        let results = IterativeGenerator::new().generate(2).unwrap();
        assert_eq!(results, vec![BigUint::zero(), BigUint::one()]);
    }

    #[test]
    fn generate_known_values() {
        let results = IterativeGenerator::new().generate(21).unwrap();

        let expected: Vec<u64> = vec![
            0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144, 233, 377, 610, 987, 1597, 2584, 4181,
            6765,
        ];

        for (i, expected_val) in expected.iter().enumerate() {
            assert_eq!(
                results[i],
                BigUint::from(*expected_val),
                "F({i}) should be {expected_val}"
            );
        }
    }

    #[test]
    fn generate_fifty_first() {
        let results = IterativeGenerator::new().generate(51).unwrap();
        assert_eq!(results[50], BigUint::from(12_586_269_025u64));
    }

    #[test]
    fn generate_rejects_zero_and_negative() {
        let gen = IterativeGenerator::new();
        assert!(matches!(gen.generate(0), Err(FibError::InvalidCount(0))));
        assert!(matches!(gen.generate(-5), Err(FibError::InvalidCount(-5))));
    }

    #[test]
    fn generate_is_repeatable() {
        let gen = IterativeGenerator::new();
        assert_eq!(gen.generate(30).unwrap(), gen.generate(30).unwrap());
    }

    #[test]
    fn generator_name() {
        assert_eq!(IterativeGenerator::default().name(), "IterativeGenerator");
    }
}
