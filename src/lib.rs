//! # iterbench
//!
//! A microbenchmark comparing three iteration strategies over a shared
//! million-element integer sequence:
//!
//! | Variant | Loop | Map |
//! |---------|------|-----|
//! | `FOR` | indexed access | `HashMap` |
//! | `FOR-IN` | element iteration | `HashMap` |
//! | `LAMBDA` | rayon parallel for-each | `DashMap` |
//!
//! Each variant fills its map with `element -> is_even(element)` for R timed
//! iterations (default 1000), clearing the map between iterations, and
//! reports grand total, operation total and average iteration time in
//! seconds. All three variants consume the identical input sequence, so the
//! numbers are comparable.
//!
//! Timing state is local to each variant run and returned as a
//! [`VariantReport`]; nothing is accumulated through shared mutable state.
//!
//! ```bash
//! # 1000 iterations per variant
//! cargo run --release
//!
//! # 5 iterations per variant, debug logs on stderr
//! RUST_LOG=iterbench=debug cargo run --release -- 5
//! ```

#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod dataset;
pub mod logging;
pub mod report;
pub mod runcount;
pub mod runner;

pub use report::VariantReport;
pub use runcount::{RunCount, RunCountError, DEFAULT_RUNS};
pub use runner::{run_variant, Variant};
