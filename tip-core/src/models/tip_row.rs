use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single tip suggestion.
///
/// Rows come in two flavors: suggestions tied to one of the configured
/// target percentages, and suggestions chosen because they produce a round
/// total. Tip values are kept unrounded; display formatting decides the
/// final cent.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use tip_core::TipRow;
///
/// let row = TipRow::Percentage { percent: 18, tip: dec!(1800) };
///
/// assert_eq!(row.total(10000), dec!(11800));
/// assert_eq!(row.percent(), Some(18));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TipRow {
    /// A suggestion for a fixed target percentage.
    Percentage {
        /// The target percentage, as a whole number (e.g. `18` for 18%).
        percent: u32,
        /// The tip amount in cents, unrounded.
        tip: Decimal,
    },
    /// A suggestion whose resulting total is a round number of whole
    /// currency units. The effective percentage is derived from the tip
    /// and the bill amount at display time.
    Rounded {
        /// The tip amount in cents.
        tip: Decimal,
    },
}

impl TipRow {
    /// Returns the tip amount in cents.
    pub fn tip(&self) -> Decimal {
        match self {
            Self::Percentage { tip, .. } | Self::Rounded { tip } => *tip,
        }
    }

    /// Returns the bill total including this tip, in cents.
    pub fn total(&self, amount: u64) -> Decimal {
        Decimal::from(amount) + self.tip()
    }

    /// Returns the target percentage for labeled rows, `None` for rounded
    /// rows.
    pub fn percent(&self) -> Option<u32> {
        match self {
            Self::Percentage { percent, .. } => Some(*percent),
            Self::Rounded { .. } => None,
        }
    }

    /// Whether this row is tied to a configured target percentage.
    pub fn is_percentage(&self) -> bool {
        matches!(self, Self::Percentage { .. })
    }

    /// Returns the tip as a fraction of the bill amount.
    ///
    /// Returns `None` when `amount` is zero, since the ratio is undefined.
    pub fn ratio(&self, amount: u64) -> Option<Decimal> {
        if amount == 0 {
            None
        } else {
            Some(self.tip() / Decimal::from(amount))
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn tip_returns_amount_for_both_variants() {
        let labeled = TipRow::Percentage {
            percent: 15,
            tip: dec!(1500),
        };
        let rounded = TipRow::Rounded { tip: dec!(1600) };

        assert_eq!(labeled.tip(), dec!(1500));
        assert_eq!(rounded.tip(), dec!(1600));
    }

    #[test]
    fn total_adds_tip_to_amount() {
        let row = TipRow::Rounded { tip: dec!(1700) };

        assert_eq!(row.total(10000), dec!(11700));
    }

    #[test]
    fn percent_is_none_for_rounded_rows() {
        let row = TipRow::Rounded { tip: dec!(1600) };

        assert_eq!(row.percent(), None);
        assert!(!row.is_percentage());
    }

    #[test]
    fn ratio_divides_tip_by_amount() {
        let row = TipRow::Rounded { tip: dec!(1600) };

        assert_eq!(row.ratio(10000), Some(dec!(0.16)));
    }

    #[test]
    fn ratio_is_undefined_for_zero_amount() {
        let row = TipRow::Percentage {
            percent: 15,
            tip: dec!(0),
        };

        assert_eq!(row.ratio(0), None);
    }
}
