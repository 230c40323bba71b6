//! Input-sequence generation.
//!
//! The benchmark consumes one shared sequence of uniform random integers.
//! Length and value range are fixed by the comparison design; the sequence
//! is generated once per process and never regenerated per variant.

use rand::Rng;
use std::ops::RangeInclusive;

/// Number of elements in the benchmark input sequence.
pub const DATASET_LEN: usize = 1_000_000;

/// Inclusive range every generated element is drawn from.
pub const VALUE_RANGE: RangeInclusive<u64> = 1..=1_000_000;

/// Generate the benchmark input sequence.
///
/// Uniform draws from [`VALUE_RANGE`] using a thread-local RNG seeded from
/// process entropy. Runs are not bit-for-bit reproducible.
#[must_use]
pub fn generate() -> Vec<u64> {
    generate_n(DATASET_LEN)
}

/// Generate a sequence of `len` elements with the benchmark distribution.
///
/// Tests and benches use shorter sequences to exercise the fill steps
/// without paying the full [`DATASET_LEN`] cost.
#[must_use]
pub fn generate_n(len: usize) -> Vec<u64> {
    let mut rng = rand::thread_rng();
    (0..len).map(|_| rng.gen_range(VALUE_RANGE)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_dataset_has_exact_len_and_range() {
        let data = generate();
        assert_eq!(data.len(), DATASET_LEN);
        assert!(data.iter().all(|n| VALUE_RANGE.contains(n)));
    }

    #[test]
    fn short_dataset_respects_range() {
        let data = generate_n(10_000);
        assert_eq!(data.len(), 10_000);
        assert!(data.iter().all(|n| VALUE_RANGE.contains(n)));
    }
}
