//! Tip suggestion engine.
//!
//! This module turns a bill amount into an ordered sequence of tip
//! suggestions. For every configured target percentage there is one labeled
//! row; between two consecutive percentage rows, up to a configured number
//! of unlabeled rows are inserted whose resulting totals are round numbers
//! of whole currency units.
//!
//! # Row construction
//!
//! For a bill of `amount` cents and percentages `p₁ < p₂ < … < pₙ`:
//!
//! 1. Each percentage contributes the labeled tip `amount × pᵢ / 100`,
//!    kept unrounded until display.
//! 2. The open interval between two consecutive totals is partitioned into
//!    `max_rounded_tips + 1` equal steps. Each interior step point is
//!    rounded to the nearest multiple of the rounding granularity and
//!    accepted as an unlabeled row if it lies strictly inside the interval
//!    and differs from the previously computed candidate.
//!
//! The resulting sequence is non-decreasing in total, so the table reads
//! top to bottom from the cheapest suggestion to the most generous one.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tip_core::{TipCalculator, TipRow};
//!
//! let calculator = TipCalculator::default();
//!
//! // $100.00 bill
//! let rows = calculator.compute(10000);
//!
//! assert_eq!(
//!     rows[0],
//!     TipRow::Percentage { percent: 15, tip: dec!(1500) }
//! );
//! // $116.00 is a round total between the 15% and 18% suggestions.
//! assert_eq!(rows[1], TipRow::Rounded { tip: dec!(1600) });
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::calculations::common::round_to_multiple;
use crate::models::TipRow;

/// Errors that can occur when validating a [`TipConfig`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TipConfigError {
    /// The percentage set must contain at least one percentage.
    #[error("percentage set must not be empty")]
    EmptyPercentages,

    /// Every percentage must be a positive integer.
    #[error("percentages must be positive, got 0")]
    ZeroPercentage,

    /// The percentage set must be strictly ascending (which also rules out
    /// duplicates).
    #[error("percentages must be strictly ascending, got {1} after {0}")]
    UnorderedPercentages(u32, u32),

    /// The maximum amount must be positive.
    #[error("maximum amount must be positive, got 0")]
    ZeroMaxAmount,

    /// The rounding granularity must be positive.
    #[error("rounding granularity must be positive, got 0")]
    ZeroGranularity,
}

/// Configuration for the tip engine.
///
/// All values are fixed at construction; nothing is user-editable at
/// runtime. [`TipConfig::default`] provides the stock configuration.
///
/// # Example
///
/// ```
/// use tip_core::TipConfig;
///
/// let config = TipConfig {
///     percentages: vec![10, 15, 20],
///     ..TipConfig::default()
/// };
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TipConfig {
    /// Largest accepted bill amount, in cents. Larger inputs are clamped,
    /// never rejected.
    ///
    /// Defaults to 10,000,000,000 cents ($100,000,000.00).
    pub max_amount: u64,

    /// The target percentages that always get a labeled row, as whole
    /// numbers in strictly ascending order.
    ///
    /// Defaults to `[15, 18, 20, 22, 25]`.
    pub percentages: Vec<u32>,

    /// Maximum number of round-total suggestions inserted between two
    /// consecutive percentage rows.
    ///
    /// Defaults to 3.
    pub max_rounded_tips: usize,

    /// Round-total suggestions land on multiples of this many cents.
    ///
    /// Defaults to 100 (one whole currency unit).
    pub rounding_granularity: u64,
}

impl Default for TipConfig {
    fn default() -> Self {
        Self {
            max_amount: 10_000_000_000,
            percentages: vec![15, 18, 20, 22, 25],
            max_rounded_tips: 3,
            rounding_granularity: 100,
        }
    }
}

impl TipConfig {
    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`TipConfigError`] if:
    /// - `percentages` is empty, contains 0, or is not strictly ascending
    /// - `max_amount` is 0
    /// - `rounding_granularity` is 0
    pub fn validate(&self) -> Result<(), TipConfigError> {
        if self.percentages.is_empty() {
            return Err(TipConfigError::EmptyPercentages);
        }
        if self.percentages.contains(&0) {
            return Err(TipConfigError::ZeroPercentage);
        }
        for pair in self.percentages.windows(2) {
            if pair[1] <= pair[0] {
                return Err(TipConfigError::UnorderedPercentages(pair[0], pair[1]));
            }
        }
        if self.max_amount == 0 {
            return Err(TipConfigError::ZeroMaxAmount);
        }
        if self.rounding_granularity == 0 {
            return Err(TipConfigError::ZeroGranularity);
        }
        Ok(())
    }
}

/// Calculator producing tip suggestions for a bill amount.
///
/// The calculator is a pure function of its configuration: every call to
/// [`TipCalculator::compute`] produces a fresh row set, with no shared or
/// cached state.
///
/// # Example
///
/// ```
/// use tip_core::TipCalculator;
///
/// let calculator = TipCalculator::default();
///
/// assert!(calculator.compute(0).is_empty());
/// assert_eq!(calculator.compute(10000).len(), 11);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TipCalculator {
    config: TipConfig,
}

impl TipCalculator {
    /// Creates a calculator with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TipConfigError`] if the configuration is invalid. A
    /// calculator that was successfully constructed never fails afterwards.
    pub fn new(config: TipConfig) -> Result<Self, TipConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &TipConfig {
        &self.config
    }

    /// Clamps a bill amount to the configured range.
    ///
    /// Amounts above the maximum are reduced to it rather than rejected.
    pub fn clamp_amount(&self, amount: u64) -> u64 {
        if amount > self.config.max_amount {
            warn!(
                amount,
                max_amount = self.config.max_amount,
                "bill amount exceeds maximum, clamping"
            );
            self.config.max_amount
        } else {
            amount
        }
    }

    /// Computes the full ordered row set for a bill amount in cents.
    ///
    /// The amount is clamped to the configured range first. An amount of 0
    /// produces an empty sequence; the caller decides what placeholder to
    /// show instead.
    ///
    /// The returned rows are non-decreasing in total. Labeled rows appear
    /// in configuration order, with at most
    /// [`TipConfig::max_rounded_tips`] unlabeled rows between two
    /// consecutive labeled ones.
    pub fn compute(&self, amount: u64) -> Vec<TipRow> {
        let amount = self.clamp_amount(amount);
        if amount == 0 {
            return Vec::new();
        }

        let bill = Decimal::from(amount);
        let granularity = Decimal::from(self.config.rounding_granularity);
        let mut rows = Vec::new();
        let mut prev_tip = None;

        for &percent in &self.config.percentages {
            let tip = bill * Decimal::from(percent) / Decimal::ONE_HUNDRED;
            if let Some(prev_tip) = prev_tip {
                self.push_rounded_rows(bill, prev_tip, tip, granularity, &mut rows);
            }
            rows.push(TipRow::Percentage { percent, tip });
            prev_tip = Some(tip);
        }

        rows
    }

    /// Inserts up to `max_rounded_tips` round-total rows for the gap
    /// between the previous and the current percentage tip.
    fn push_rounded_rows(
        &self,
        bill: Decimal,
        prev_tip: Decimal,
        curr_tip: Decimal,
        granularity: Decimal,
        rows: &mut Vec<TipRow>,
    ) {
        let prev_total = bill + prev_tip;
        let curr_total = bill + curr_tip;
        let step = (curr_total - prev_total) / Decimal::from(self.config.max_rounded_tips + 1);

        let mut prev_candidate = None;
        let mut accepted = 0;
        let mut target = prev_total + step;
        while accepted < self.config.max_rounded_tips && target < curr_total {
            let candidate = round_to_multiple(target, granularity);
            // Deduplication compares against the last computed candidate
            // only, accepted or not.
            if prev_total < candidate && candidate < curr_total && prev_candidate != Some(candidate)
            {
                rows.push(TipRow::Rounded {
                    tip: candidate - bill,
                });
                accepted += 1;
            }
            prev_candidate = Some(candidate);
            target += step;
        }
    }
}
