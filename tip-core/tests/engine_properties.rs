//! Cross-cutting properties of the tip engine, checked over a spread of
//! bill amounts rather than single hand-picked cases.

use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tip_core::calculations::common::{round_to_int, round_to_multiple};
use tip_core::format::{CentsFormat, extract_digits, format_cents, format_percent, PercentFormat};
use tip_core::{TipCalculator, TipRow};

const SAMPLE_AMOUNTS: &[u64] = &[
    1,
    7,
    99,
    100,
    101,
    2000,
    9_999,
    10_000,
    12_345,
    99_999,
    123_456,
    1_000_000,
    987_654_321,
    10_000_000_000,
];

#[test]
fn totals_are_non_decreasing() {
    let calculator = TipCalculator::default();

    for &amount in SAMPLE_AMOUNTS {
        let rows = calculator.compute(amount);
        for pair in rows.windows(2) {
            assert!(
                pair[0].total(amount) <= pair[1].total(amount),
                "totals decreased for amount {amount}: {pair:?}"
            );
        }
    }
}

#[test]
fn labeled_rows_follow_configuration_order() {
    let calculator = TipCalculator::default();

    for &amount in SAMPLE_AMOUNTS {
        let labeled: Vec<u32> = calculator
            .compute(amount)
            .iter()
            .filter_map(TipRow::percent)
            .collect();

        assert_eq!(labeled, calculator.config().percentages);
    }
}

#[test]
fn rounded_rows_per_gap_never_exceed_cap() {
    let calculator = TipCalculator::default();
    let cap = calculator.config().max_rounded_tips;

    for &amount in SAMPLE_AMOUNTS {
        let mut run = 0;
        for row in calculator.compute(amount) {
            if row.is_percentage() {
                run = 0;
            } else {
                run += 1;
                assert!(
                    run <= cap,
                    "more than {cap} rounded rows in a gap for amount {amount}"
                );
            }
        }
    }
}

#[test]
fn rounded_totals_are_fixed_points_of_rounding() {
    let calculator = TipCalculator::default();
    let granularity = Decimal::from(calculator.config().rounding_granularity);

    for &amount in SAMPLE_AMOUNTS {
        for row in calculator.compute(amount) {
            if row.is_percentage() {
                continue;
            }
            let total = row.total(amount);
            assert_eq!(
                round_to_multiple(total, granularity),
                total,
                "rounded total {total} is not on the granularity for amount {amount}"
            );
        }
    }
}

#[test]
fn totals_stay_within_amount_and_max_percentage() {
    let calculator = TipCalculator::default();
    let max_percent = *calculator.config().percentages.last().unwrap();

    for &amount in SAMPLE_AMOUNTS {
        let bill = Decimal::from(amount);
        let upper = bill + bill * Decimal::from(max_percent) / dec!(100);
        for row in calculator.compute(amount) {
            let total = row.total(amount);
            assert!(
                bill <= total && total <= upper,
                "total {total} out of [{bill}, {upper}] for amount {amount}"
            );
        }
    }
}

#[test]
fn labeled_tips_render_as_rounded_percentage_of_amount() {
    let calculator = TipCalculator::default();
    let format = CentsFormat::default();

    for &amount in SAMPLE_AMOUNTS {
        for row in calculator.compute(amount) {
            let Some(percent) = row.percent() else {
                continue;
            };
            // Rendered cents must equal amount * percent / 100 rounded to
            // the nearest cent.
            let expected = round_to_int(
                Decimal::from(amount) * Decimal::from(percent) / dec!(100),
            );
            assert_eq!(format_cents(row.tip(), &format), format_cents(expected, &format));
        }
    }
}

#[test]
fn digit_extraction_round_trips_formatted_amounts() {
    let format = CentsFormat::default();

    for &amount in SAMPLE_AMOUNTS {
        let rendered = format_cents(Decimal::from(amount), &format);

        assert_eq!(extract_digits(&rendered, 0), amount);
    }
}

#[test]
fn percent_column_is_defined_for_every_produced_row() {
    let calculator = TipCalculator::default();
    let format = PercentFormat::default();

    for &amount in SAMPLE_AMOUNTS {
        for row in calculator.compute(amount) {
            // compute() never yields rows for a zero amount, so the
            // derived percentage is always renderable.
            let rendered = format_percent(row.ratio(amount), &format);
            assert!(rendered.ends_with('%'), "unexpected placeholder: {rendered}");
        }
    }
}
