//! The numeric core: raw form values in, monthly payment breakdown out.
//!
//! Every function here is pure. Nothing holds state between calls, nothing
//! schedules work, and nothing performs I/O, so the same calls serve a CLI,
//! a server handler or a debounced browser widget equally well.

pub mod calculator;
pub mod down_payment;
pub mod inputs;
pub mod validation;

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;
use rust_decimal_macros::dec;

use crate::types::{Money, Percent};

pub use calculator::{analyze_payment, calculate, PaymentBreakdown};
pub use down_payment::{sync_down_payment, EditedField};
pub use inputs::{normalize, LoanField, LoanInputs, RawFormValues, RawValue};
pub use validation::validate_submission;

/// Down payment share (in percent) at or above which no PMI is charged.
pub const PMI_EQUITY_THRESHOLD: Percent = dec!(20);

/// Loan term used when the form supplies none.
pub const DEFAULT_LOAN_TERM_YEARS: u32 = 30;

pub(crate) const ONE_HUNDRED: Decimal = dec!(100);
pub(crate) const MONTHS_PER_YEAR: Decimal = dec!(12);

/// `part / whole * 100`, or zero when `whole` is zero.
pub(crate) fn percent_of(part: Money, whole: Money) -> Percent {
    if whole.is_zero() {
        return Decimal::ZERO;
    }
    part.checked_div(whole)
        .map(|ratio| ratio.saturating_mul(ONE_HUNDRED))
        .unwrap_or(Decimal::MAX)
}

/// `round(whole * percent / 100)` to the nearest currency unit.
pub(crate) fn amount_for_percent(whole: Money, percent: Percent) -> Money {
    round_whole(whole.saturating_mul(percent) / ONE_HUNDRED)
}

pub(crate) fn round_whole(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

pub(crate) fn round_percent(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
