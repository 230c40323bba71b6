//! The three timed loop variants.
//!
//! Each variant performs R timed iterations over the shared input sequence,
//! filling a map from element to evenness and clearing the map between
//! iterations. The grand-total stopwatch spans all R iterations including
//! the clears; the per-iteration stopwatch covers only the fill. Timing
//! state is local to each run and returned as a [`VariantReport`], so no
//! reset step exists between variants.
//!
//! The fill steps are public so tests and benches can exercise them in
//! isolation; the final map contents are otherwise never inspected.

use crate::report::VariantReport;
use dashmap::DashMap;
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// One of the three iteration strategies under comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Explicit position-based access into the sequence (`data[j]`).
    Indexed,
    /// Direct iteration over the sequence elements.
    Element,
    /// Data-parallel for-each across the rayon pool.
    Parallel,
}

impl Variant {
    /// All variants in reporting order.
    pub const ALL: [Self; 3] = [Self::Indexed, Self::Element, Self::Parallel];

    /// Label used in the summary output.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Indexed => "FOR",
            Self::Element => "FOR-IN",
            Self::Parallel => "LAMBDA",
        }
    }
}

/// Fill `map` by indexed access: `data[j] -> is_even(data[j])`.
// Position-based access is the point of this variant, so the range loop stays.
#[expect(clippy::needless_range_loop, reason = "indexed access is the variant under test")]
pub fn fill_indexed(data: &[u64], map: &mut HashMap<u64, bool>) {
    for j in 0..data.len() {
        map.insert(data[j], data[j] % 2 == 0);
    }
}

/// Fill `map` by iterating the sequence elements directly.
pub fn fill_element(data: &[u64], map: &mut HashMap<u64, bool>) {
    for &n in data {
        map.insert(n, n % 2 == 0);
    }
}

/// Fill the concurrent `map` with a rayon parallel for-each.
///
/// `for_each` joins the fan-out before returning, so a caller's stopwatch
/// always sees every insert complete. `DashMap`'s sharded locks keep
/// concurrent inserts from losing updates.
pub fn fill_parallel(data: &[u64], map: &DashMap<u64, bool>) {
    data.par_iter().for_each(|&n| {
        map.insert(n, n % 2 == 0);
    });
}

/// Run one variant for `runs` timed iterations over `data`.
#[must_use]
pub fn run_variant(variant: Variant, data: &[u64], runs: usize) -> VariantReport {
    match variant {
        Variant::Indexed => run_sequential(variant, data, runs, fill_indexed),
        Variant::Element => run_sequential(variant, data, runs, fill_element),
        Variant::Parallel => run_parallel(data, runs),
    }
}

fn run_sequential(
    variant: Variant,
    data: &[u64],
    runs: usize,
    fill: fn(&[u64], &mut HashMap<u64, bool>),
) -> VariantReport {
    let mut map: HashMap<u64, bool> = HashMap::new();
    let mut operation_total = Duration::ZERO;
    let mut iterations = 0_usize;

    let grand_start = Instant::now();
    for _ in 0..runs {
        let start = Instant::now();
        fill(data, &mut map);
        operation_total += start.elapsed();
        iterations += 1;

        // Inside the grand total, outside the timed section.
        map.clear();
    }
    let grand_total = grand_start.elapsed();

    VariantReport::new(variant, iterations, grand_total, operation_total)
}

fn run_parallel(data: &[u64], runs: usize) -> VariantReport {
    let map: DashMap<u64, bool> = DashMap::new();
    let mut operation_total = Duration::ZERO;
    let mut iterations = 0_usize;

    let grand_start = Instant::now();
    for _ in 0..runs {
        let start = Instant::now();
        fill_parallel(data, &map);
        operation_total += start.elapsed();
        iterations += 1;

        map.clear();
    }
    let grand_total = grand_start.elapsed();

    VariantReport::new(Variant::Parallel, iterations, grand_total, operation_total)
}
