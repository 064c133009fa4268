//! Common utility functions for tip calculations.
//!
//! This module provides shared rounding operations used by the tip engine
//! and the display formatters.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal value to the nearest integer using half-away-from-zero
/// rounding.
///
/// This follows standard financial rounding conventions where values at
/// exactly 0.5 are rounded away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tip_core::calculations::common::round_to_int;
///
/// assert_eq!(round_to_int(dec!(12.4)), dec!(12));
/// assert_eq!(round_to_int(dec!(12.5)), dec!(13));
/// assert_eq!(round_to_int(dec!(-12.5)), dec!(-13)); // Away from zero
/// ```
pub fn round_to_int(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a decimal value to the nearest multiple of `factor`.
///
/// Midpoints round away from zero, so a value exactly halfway between two
/// multiples lands on the one with the larger magnitude.
///
/// # Panics
///
/// Panics if `factor` is zero. A zero factor is a programming error, not an
/// input condition: no call site derives the factor from user input.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tip_core::calculations::common::round_to_multiple;
///
/// assert_eq!(round_to_multiple(dec!(11649), dec!(100)), dec!(11600));
/// assert_eq!(round_to_multiple(dec!(11650), dec!(100)), dec!(11700));
/// assert_eq!(round_to_multiple(dec!(11700), dec!(100)), dec!(11700));
/// ```
pub fn round_to_multiple(
    value: Decimal,
    factor: Decimal,
) -> Decimal {
    assert!(!factor.is_zero(), "round_to_multiple: factor cannot be 0");
    round_to_int(value / factor) * factor
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // round_to_int tests
    // =========================================================================

    #[test]
    fn round_to_int_rounds_down_below_midpoint() {
        let result = round_to_int(dec!(123.4));

        assert_eq!(result, dec!(123));
    }

    #[test]
    fn round_to_int_rounds_up_at_midpoint() {
        let result = round_to_int(dec!(123.5));

        assert_eq!(result, dec!(124));
    }

    #[test]
    fn round_to_int_rounds_away_from_zero_for_negatives() {
        let result = round_to_int(dec!(-123.5));

        assert_eq!(result, dec!(-124));
    }

    #[test]
    fn round_to_int_preserves_integers() {
        let result = round_to_int(dec!(123));

        assert_eq!(result, dec!(123));
    }

    #[test]
    fn round_to_int_handles_zero() {
        let result = round_to_int(dec!(0));

        assert_eq!(result, dec!(0));
    }

    // =========================================================================
    // round_to_multiple tests
    // =========================================================================

    #[test]
    fn round_to_multiple_rounds_to_nearest_hundred() {
        let result = round_to_multiple(dec!(11575), dec!(100));

        assert_eq!(result, dec!(11600));
    }

    #[test]
    fn round_to_multiple_rounds_midpoint_up() {
        let result = round_to_multiple(dec!(11650), dec!(100));

        assert_eq!(result, dec!(11700));
    }

    #[test]
    fn round_to_multiple_is_idempotent_on_multiples() {
        let result = round_to_multiple(dec!(11700), dec!(100));

        assert_eq!(result, dec!(11700));
    }

    #[test]
    fn round_to_multiple_handles_fractional_values() {
        let result = round_to_multiple(dec!(117.665), dec!(100));

        assert_eq!(result, dec!(100));
    }

    #[test]
    fn round_to_multiple_handles_other_factors() {
        let result = round_to_multiple(dec!(17), dec!(25));

        assert_eq!(result, dec!(25));
    }

    #[test]
    #[should_panic(expected = "factor cannot be 0")]
    fn round_to_multiple_rejects_zero_factor() {
        round_to_multiple(dec!(100), dec!(0));
    }
}
