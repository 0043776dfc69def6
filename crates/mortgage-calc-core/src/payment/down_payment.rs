//! Keeps the dollar and percent forms of the down payment in step.
//!
//! A form has one focused field at a time, so each edit names a single
//! driver and only the pair touched by that edit is reconciled.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::inputs::LoanInputs;
use super::{amount_for_percent, percent_of, round_percent};
use crate::error::MortgageError;

/// Which field the user just edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditedField {
    /// Down payment in dollars; the percent follows.
    Amount,
    /// Down payment percent; the dollar amount follows.
    Percent,
    /// Home price; the dollar amount follows the existing percent.
    Price,
}

impl FromStr for EditedField {
    type Err = MortgageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "amount" | "down_payment" => Ok(EditedField::Amount),
            "percent" | "down_payment_percent" => Ok(EditedField::Percent),
            "price" | "home_price" => Ok(EditedField::Price),
            other => Err(MortgageError::InvalidChoice {
                field: "edited_field".into(),
                value: other.into(),
                expected: "amount, percent, price".into(),
            }),
        }
    }
}

impl fmt::Display for EditedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EditedField::Amount => "amount",
            EditedField::Percent => "percent",
            EditedField::Price => "price",
        };
        f.write_str(name)
    }
}

/// Reconcile the down payment after an edit to `edited`.
///
/// Amount edits recompute the percent to two decimals (zero when the price
/// is zero). Percent and price edits recompute the amount to the nearest
/// whole dollar. All other fields are copied unchanged.
pub fn sync_down_payment(inputs: &LoanInputs, edited: EditedField) -> LoanInputs {
    let mut synced = inputs.clone();
    match edited {
        EditedField::Amount => {
            synced.down_payment_percent =
                round_percent(percent_of(inputs.down_payment, inputs.home_price));
        }
        EditedField::Percent | EditedField::Price => {
            synced.down_payment =
                amount_for_percent(inputs.home_price, inputs.down_payment_percent);
        }
    }
    debug!(
        %edited,
        down_payment = %synced.down_payment,
        down_payment_percent = %synced.down_payment_percent,
        "synchronized down payment"
    );
    synced
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn inputs(price: Decimal, amount: Decimal, percent: Decimal) -> LoanInputs {
        LoanInputs {
            home_price: price,
            down_payment: amount,
            down_payment_percent: percent,
            ..LoanInputs::default()
        }
    }

    #[test]
    fn test_amount_edit_updates_percent() {
        let out = sync_down_payment(&inputs(dec!(450000), dec!(50000), dec!(20)), EditedField::Amount);
        // 50000 / 450000 = 11.111..%
        assert_eq!(out.down_payment_percent, dec!(11.11));
        assert_eq!(out.down_payment, dec!(50000));
    }

    #[test]
    fn test_amount_edit_zero_price() {
        let out = sync_down_payment(&inputs(Decimal::ZERO, dec!(10000), dec!(20)), EditedField::Amount);
        assert_eq!(out.down_payment_percent, Decimal::ZERO);
    }

    #[test]
    fn test_percent_edit_updates_amount() {
        let out = sync_down_payment(&inputs(dec!(389900), dec!(0), dec!(3.5)), EditedField::Percent);
        // 389900 * 3.5% = 13646.5 -> 13647
        assert_eq!(out.down_payment, dec!(13647));
        assert_eq!(out.down_payment_percent, dec!(3.5));
    }

    #[test]
    fn test_price_edit_keeps_percent_anchor() {
        let before = inputs(dec!(400000), dec!(80000), dec!(20));
        let after = LoanInputs {
            home_price: dec!(425000),
            ..before
        };
        let out = sync_down_payment(&after, EditedField::Price);
        assert_eq!(out.down_payment, dec!(85000));
        assert_eq!(out.down_payment_percent, dec!(20));
    }

    #[test]
    fn test_round_trip_percent_then_amount() {
        for percent in [dec!(3.5), dec!(7.25), dec!(12.34), dec!(19.99), dec!(33.33)] {
            let first = sync_down_payment(&inputs(dec!(387650), dec!(0), percent), EditedField::Percent);
            let second = sync_down_payment(&first, EditedField::Amount);
            assert!(
                (second.down_payment_percent - percent).abs() <= dec!(0.01),
                "percent {} came back as {}",
                percent,
                second.down_payment_percent
            );
        }
    }

    #[test]
    fn test_edited_field_from_str() {
        assert_eq!("Percent".parse::<EditedField>().unwrap(), EditedField::Percent);
        assert_eq!("home_price".parse::<EditedField>().unwrap(), EditedField::Price);
        assert!("rate".parse::<EditedField>().is_err());
    }
}
