//! Display formatting and input sanitization helpers.
//!
//! Everything here is pure and stateless. The formatters take an options
//! struct with documented defaults; the sanitizer turns arbitrary typed
//! text into an amount in cents.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::calculations::common::round_to_int;

/// Placeholder rendered when a percentage is undefined (zero bill amount).
pub const PERCENT_PLACEHOLDER: &str = "-";

/// Options for [`format_cents`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CentsFormat {
    /// Prefix the result with a dollar sign. Defaults to `false`.
    pub dollar_sign: bool,
}

/// Options for [`format_percent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PercentFormat {
    /// Number of fractional digits to render. Defaults to 1.
    pub places: u32,
}

impl Default for PercentFormat {
    fn default() -> Self {
        Self { places: 1 }
    }
}

/// Formats an amount of cents as a fixed-point string with exactly two
/// fractional digits.
///
/// Fractional cent amounts are rounded to the nearest whole cent first
/// (half away from zero). Negative amounts place the sign before the
/// dollar sign.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tip_core::format::{CentsFormat, format_cents};
///
/// assert_eq!(format_cents(dec!(5), &CentsFormat::default()), "0.05");
/// assert_eq!(
///     format_cents(dec!(11650), &CentsFormat { dollar_sign: true }),
///     "$116.50"
/// );
/// ```
pub fn format_cents(
    cents: Decimal,
    format: &CentsFormat,
) -> String {
    let mut dollars = round_to_int(cents) / Decimal::ONE_HUNDRED;
    dollars.rescale(2);

    let sign = if dollars.is_sign_negative() && !dollars.is_zero() {
        "-"
    } else {
        ""
    };
    let symbol = if format.dollar_sign { "$" } else { "" };
    format!("{sign}{symbol}{}", dollars.abs())
}

/// Formats a tip-to-amount ratio as a percentage string.
///
/// An undefined ratio (`None`, i.e. a zero bill amount) renders as
/// [`PERCENT_PLACEHOLDER`]. Otherwise the ratio is scaled to a percentage,
/// rounded half away from zero to the configured number of places, and
/// rendered with exactly that many fractional digits.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tip_core::format::{PercentFormat, format_percent};
///
/// assert_eq!(format_percent(Some(dec!(0.16)), &PercentFormat::default()), "16.0%");
/// assert_eq!(format_percent(None, &PercentFormat::default()), "-");
/// ```
pub fn format_percent(
    ratio: Option<Decimal>,
    format: &PercentFormat,
) -> String {
    let Some(ratio) = ratio else {
        return PERCENT_PLACEHOLDER.to_string();
    };

    let mut percent = (ratio * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(format.places, RoundingStrategy::MidpointAwayFromZero);
    percent.rescale(format.places);
    format!("{percent}%")
}

/// Extracts all decimal digits from arbitrary user text and interprets
/// them as a base-10 integer.
///
/// Every non-digit character is discarded, so `"$1,234.56"` yields
/// `123456`: typed digits are treated as cents, with no sign and no
/// decimal point. Returns `default` when the input contains no digit at
/// all. Inputs with more digits than fit in a `u64` saturate at
/// [`u64::MAX`]; callers clamp to their own maximum afterwards.
///
/// # Examples
///
/// ```
/// use tip_core::format::extract_digits;
///
/// assert_eq!(extract_digits("$1,234.56", 0), 123456);
/// assert_eq!(extract_digits("no digits here", 0), 0);
/// ```
pub fn extract_digits(
    input: &str,
    default: u64,
) -> u64 {
    let mut saw_digit = false;
    let mut value: u64 = 0;
    for c in input.chars() {
        let Some(digit) = c.to_digit(10) else {
            continue;
        };
        saw_digit = true;
        value = value.saturating_mul(10).saturating_add(u64::from(digit));
    }
    if saw_digit { value } else { default }
}
