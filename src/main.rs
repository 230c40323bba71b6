//! Benchmark binary: compare indexed, element and parallel map fills.
//!
//! Run with:
//! ```bash
//! # 1000 iterations per variant
//! cargo run --release
//!
//! # 5 iterations per variant
//! cargo run --release -- 5
//!
//! # With mimalloc
//! cargo run --release --features mimalloc -- 5
//! ```

use iterbench::runcount::{self, Source};
use iterbench::runner::{run_variant, Variant};
use iterbench::{dataset, logging, report};
use std::process::ExitCode;
use std::time::Instant;

#[cfg(feature = "mimalloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() -> ExitCode {
    logging::init();

    let arg = std::env::args().nth(1);
    let run_count = match runcount::resolve(arg.as_deref()) {
        Ok(rc) => rc,
        Err(e) => {
            // Well-formed but non-positive: report and end without work.
            eprintln!("{e}");
            return ExitCode::SUCCESS;
        }
    };
    if let Source::Fallback { rejected } = &run_count.source {
        eprintln!(
            "invalid run count {rejected:?}, using default {}",
            runcount::DEFAULT_RUNS
        );
    }

    let gen_start = Instant::now();
    let data = dataset::generate();
    tracing::info!(
        elements = data.len(),
        elapsed = ?gen_start.elapsed(),
        "input sequence generated"
    );

    let reports: Vec<_> = Variant::ALL
        .into_iter()
        .map(|variant| {
            let report = run_variant(variant, &data, run_count.runs);
            tracing::debug!(
                variant = variant.label(),
                grand_total_s = report.grand_total_secs(),
                operation_total_s = report.operation_total_secs(),
                "variant finished"
            );
            report
        })
        .collect();

    if let Err(e) = report::write_summary(&mut std::io::stdout().lock(), run_count.runs, &reports)
    {
        eprintln!("failed to write summary: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
