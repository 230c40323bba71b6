//! Summary output contract: block order, labels, 8-decimal seconds lines.

use iterbench::report::{write_summary, VariantReport};
use iterbench::runner::Variant;
use std::time::Duration;

fn sample_reports() -> Vec<VariantReport> {
    Variant::ALL
        .into_iter()
        .map(|v| {
            VariantReport::new(
                v,
                5,
                Duration::from_millis(125),
                Duration::from_millis(100),
            )
        })
        .collect()
}

fn render(runs: usize, reports: &[VariantReport]) -> String {
    let mut out = Vec::new();
    write_summary(&mut out, runs, reports).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn header_names_run_count() {
    let text = render(5, &sample_reports());
    assert_eq!(text.lines().next(), Some("Summary of 5 Iterations"));
}

#[test]
fn blocks_appear_in_for_forin_lambda_order() {
    let text = render(5, &sample_reports());
    let for_pos = text.find("--FOR--").unwrap();
    let forin_pos = text.find("--FOR-IN--").unwrap();
    let lambda_pos = text.find("--LAMBDA--").unwrap();
    assert!(for_pos < forin_pos);
    assert!(forin_pos < lambda_pos);
}

#[test]
fn seconds_lines_carry_eight_decimals() {
    let text = render(5, &sample_reports());
    let mut seconds_lines = 0;
    for line in text.lines() {
        let Some(rest) = line
            .strip_prefix("Grand Total: ")
            .or_else(|| line.strip_prefix("Operation Total: "))
            .or_else(|| line.strip_prefix("Average Iteration: "))
        else {
            continue;
        };
        seconds_lines += 1;

        let number = rest.strip_suffix('s').unwrap();
        let (_, decimals) = number.split_once('.').unwrap();
        assert_eq!(decimals.len(), 8, "line {line:?}");
        assert!(decimals.bytes().all(|b| b.is_ascii_digit()), "line {line:?}");
    }
    // Three lines per block, three blocks.
    assert_eq!(seconds_lines, 9);
}

#[test]
fn every_block_closes_with_a_separator() {
    let text = render(5, &sample_reports());
    let lines: Vec<_> = text.lines().collect();
    for (i, line) in lines.iter().enumerate() {
        if line.starts_with("Average Iteration: ") {
            let sep = lines[i + 1];
            assert!(!sep.is_empty() && sep.bytes().all(|b| b == b'-'), "after {line:?}");
        }
    }
    // Closing separator.
    assert!(lines.last().unwrap().bytes().all(|b| b == b'-'));
}

#[test]
fn reported_values_round_trip_through_format() {
    let reports = vec![VariantReport::new(
        Variant::Indexed,
        4,
        Duration::from_nanos(2_000_000_000),
        Duration::from_nanos(1_000_000_000),
    )];
    let text = render(4, &reports);
    assert!(text.contains("Grand Total: 2.00000000s"));
    assert!(text.contains("Operation Total: 1.00000000s"));
    assert!(text.contains("Average Iteration: 0.25000000s"));
}
