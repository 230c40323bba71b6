//! Timing result records and the stdout summary.

use crate::runner::Variant;
use std::io::{self, Write};
use std::time::Duration;

/// Timing results for one variant's complete run.
///
/// Seconds values are derived on demand from the stored durations via
/// nanoseconds x 1e-9; nothing here is mutated after construction.
#[derive(Debug, Clone, Copy)]
pub struct VariantReport {
    variant: Variant,
    iterations: usize,
    grand_total: Duration,
    operation_total: Duration,
}

impl VariantReport {
    /// Bundle the timing state a variant run produced.
    #[must_use]
    pub const fn new(
        variant: Variant,
        iterations: usize,
        grand_total: Duration,
        operation_total: Duration,
    ) -> Self {
        Self {
            variant,
            iterations,
            grand_total,
            operation_total,
        }
    }

    /// The variant this report describes.
    #[must_use]
    pub const fn variant(&self) -> Variant {
        self.variant
    }

    /// Number of timed iterations actually executed.
    #[must_use]
    pub const fn iterations(&self) -> usize {
        self.iterations
    }

    /// Wall-clock seconds spanning all iterations, map clears included.
    #[must_use]
    pub fn grand_total_secs(&self) -> f64 {
        secs(self.grand_total)
    }

    /// Sum of the individually timed fill sections, in seconds.
    #[must_use]
    pub fn operation_total_secs(&self) -> f64 {
        secs(self.operation_total)
    }

    /// Operation total divided by the iteration count.
    #[must_use]
    pub fn average_iteration_secs(&self) -> f64 {
        if self.iterations == 0 {
            return 0.0;
        }
        #[expect(clippy::cast_precision_loss, reason = "iteration counts stay far below 2^52")]
        let runs = self.iterations as f64;
        self.operation_total_secs() / runs
    }
}

#[expect(clippy::cast_precision_loss, reason = "sub-ns error is invisible at 8 decimals")]
fn secs(d: Duration) -> f64 {
    d.as_nanos() as f64 * 1.0e-9
}

/// Write the full summary for `reports` to `out`.
///
/// One block per variant in slice order: label header, three seconds lines
/// at 8 decimal places, then a dash separator. A final separator closes the
/// summary.
///
/// # Errors
///
/// Propagates the underlying writer error.
pub fn write_summary(
    out: &mut impl Write,
    runs: usize,
    reports: &[VariantReport],
) -> io::Result<()> {
    writeln!(out, "Summary of {runs} Iterations")?;
    for report in reports {
        let header = format!("--{}--", report.variant().label());
        writeln!(out, "{header}")?;
        writeln!(out, "Grand Total: {:.8}s", report.grand_total_secs())?;
        writeln!(out, "Operation Total: {:.8}s", report.operation_total_secs())?;
        writeln!(out, "Average Iteration: {:.8}s", report.average_iteration_secs())?;
        writeln!(out, "{}", "-".repeat(header.len()))?;
    }
    writeln!(out, "{}", "-".repeat(26))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secs_converts_at_nanosecond_resolution() {
        assert!((secs(Duration::from_nanos(1_500_000_000)) - 1.5).abs() < f64::EPSILON);
        assert!((secs(Duration::from_nanos(1)) - 1.0e-9).abs() < f64::EPSILON);
    }

    #[test]
    fn average_divides_operation_total_by_iterations() {
        let report = VariantReport::new(
            Variant::Indexed,
            4,
            Duration::from_secs(2),
            Duration::from_secs(1),
        );
        assert!((report.average_iteration_secs() - 0.25).abs() < 1e-12);
    }

    #[test]
    fn zero_iterations_average_is_zero() {
        let report =
            VariantReport::new(Variant::Element, 0, Duration::ZERO, Duration::ZERO);
        assert!(report.average_iteration_secs().abs() < f64::EPSILON);
    }
}
