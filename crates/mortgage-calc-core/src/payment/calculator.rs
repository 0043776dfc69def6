//! Monthly payment breakdown: amortized principal and interest plus the
//! escrowed costs (property tax, insurance), HOA dues and conditional PMI.
//!
//! All math in `rust_decimal::Decimal`. The calculator is total: degenerate
//! inputs (zero term, down payment above price, overflowing growth factors)
//! produce defined numbers rather than panics. Rounding is left entirely to
//! the presentation layer.

use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::debug;

use super::inputs::LoanInputs;
use super::{percent_of, MONTHS_PER_YEAR, ONE_HUNDRED, PMI_EQUITY_THRESHOLD};
use crate::types::{with_metadata, ComputationOutput, Money, Percent, Rate};

/// Slack allowed between the entered percent and the one implied by the amount.
const PERCENT_TOLERANCE: Decimal = dec!(0.01);

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// Derived monthly cost breakdown for one set of [`LoanInputs`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentBreakdown {
    /// Amount financed (price less down payment). Negative for invalid input.
    pub loan_amount: Money,
    /// Monthly principal and interest.
    pub principal_interest: Money,
    /// Monthly property tax.
    pub property_tax: Money,
    /// Monthly homeowner's insurance.
    pub insurance: Money,
    /// Monthly HOA dues.
    pub hoa: Money,
    /// Monthly private mortgage insurance (zero at 20% down or more).
    pub pmi: Money,
    /// Sum of the five monthly components, unrounded.
    pub total_monthly_payment: Money,
    /// Interest paid over the full term.
    pub total_interest_over_term: Money,
    /// Every monthly payment over the full term.
    pub total_paid_over_term: Money,
    /// Down payment as a share of the price, as actually entered.
    pub down_payment_percent_actual: Percent,
}

impl PaymentBreakdown {
    /// Whether the result is meaningful enough to render.
    ///
    /// A negative loan amount, a non-positive monthly payment or a zero-term
    /// loan should be shown as "nothing" rather than as numbers.
    pub fn is_displayable(&self) -> bool {
        self.loan_amount >= Decimal::ZERO
            && self.total_monthly_payment > Decimal::ZERO
            && (self.loan_amount.is_zero() || self.principal_interest > Decimal::ZERO)
    }

    /// The five monthly cost components in display order.
    pub fn monthly_components(&self) -> [Money; 5] {
        [
            self.principal_interest,
            self.property_tax,
            self.insurance,
            self.hoa,
            self.pmi,
        ]
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Compute the monthly payment breakdown.
pub fn calculate(inputs: &LoanInputs) -> PaymentBreakdown {
    let loan_amount = inputs.home_price.saturating_sub(inputs.down_payment);
    let monthly_rate = inputs.interest_rate_percent / ONE_HUNDRED / MONTHS_PER_YEAR;
    let periods = inputs.loan_term_years.saturating_mul(12);
    let n = Decimal::from(periods);

    let principal_interest = amortized_payment(loan_amount, monthly_rate, periods);
    let property_tax = monthly_share(inputs.home_price, inputs.property_tax_rate_percent);
    let insurance = monthly_share(inputs.home_price, inputs.insurance_rate_percent);
    let hoa = inputs.hoa_fees_monthly;

    let down_payment_percent_actual = percent_of(inputs.down_payment, inputs.home_price);
    // No price means no equity ratio, so PMI is off.
    let pmi = if inputs.home_price > Decimal::ZERO
        && down_payment_percent_actual < PMI_EQUITY_THRESHOLD
    {
        monthly_share(loan_amount, inputs.pmi_rate_percent)
    } else {
        Decimal::ZERO
    };

    let total_monthly_payment = principal_interest
        .saturating_add(property_tax)
        .saturating_add(insurance)
        .saturating_add(hoa)
        .saturating_add(pmi);

    let breakdown = PaymentBreakdown {
        loan_amount,
        principal_interest,
        property_tax,
        insurance,
        hoa,
        pmi,
        total_monthly_payment,
        total_interest_over_term: principal_interest.saturating_mul(n).saturating_sub(loan_amount),
        total_paid_over_term: total_monthly_payment.saturating_mul(n),
        down_payment_percent_actual,
    };

    debug!(
        loan_amount = %breakdown.loan_amount,
        principal_interest = %breakdown.principal_interest,
        pmi = %breakdown.pmi,
        total = %breakdown.total_monthly_payment,
        "calculated payment breakdown"
    );
    breakdown
}

/// Calculate and wrap the result in the standard envelope, flagging
/// degenerate inputs as warnings.
pub fn analyze_payment(inputs: &LoanInputs) -> ComputationOutput<PaymentBreakdown> {
    let start = Instant::now();
    let breakdown = calculate(inputs);
    let warnings = collect_warnings(inputs, &breakdown);
    for w in &warnings {
        debug!(warning = %w, "payment analysis warning");
    }

    let methodology = if inputs.interest_rate_percent.is_zero() {
        "Straight-line principal with monthly escrow, HOA and PMI"
    } else {
        "Level-payment amortization with monthly escrow, HOA and PMI"
    };

    let elapsed = start.elapsed().as_micros() as u64;
    with_metadata(methodology, inputs, warnings, elapsed, breakdown)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Level payment retiring `principal` over `periods` at `monthly_rate`.
///
/// `P * r * (1+r)^n / ((1+r)^n - 1)`, evaluated as `P * r / (1 - (1+r)^-n)`
/// so the large growth factor never multiplies the principal.
fn amortized_payment(principal: Money, monthly_rate: Rate, periods: u32) -> Money {
    if periods == 0 {
        return Decimal::ZERO;
    }
    let n = Decimal::from(periods);
    if monthly_rate.is_zero() {
        return principal / n;
    }

    let growth = match Decimal::ONE.saturating_add(monthly_rate).checked_powu(u64::from(periods)) {
        Some(g) => g,
        // (1+r)^n beyond the decimal range: the payment has reached its limit P * r.
        None => return principal.saturating_mul(monthly_rate),
    };

    let denominator = match Decimal::ONE.checked_div(growth) {
        Some(discount) => Decimal::ONE - discount,
        None => Decimal::ZERO,
    };
    if denominator.is_zero() {
        return principal / n;
    }

    principal
        .saturating_mul(monthly_rate)
        .checked_div(denominator)
        .unwrap_or_else(|| principal / n)
}

/// Annual percent of `base`, per month.
fn monthly_share(base: Money, annual_percent: Percent) -> Money {
    base.saturating_mul(annual_percent) / ONE_HUNDRED / MONTHS_PER_YEAR
}

fn collect_warnings(inputs: &LoanInputs, breakdown: &PaymentBreakdown) -> Vec<String> {
    let mut warnings = Vec::new();

    if inputs.home_price <= Decimal::ZERO {
        warnings.push("Home price is zero; result is not meaningful".to_string());
    }
    if breakdown.loan_amount < Decimal::ZERO {
        warnings.push(format!(
            "Down payment {} exceeds home price {}; loan amount is negative",
            inputs.down_payment, inputs.home_price
        ));
    }
    if inputs.loan_term_years == 0 {
        warnings.push("Loan term is zero years; principal and interest set to zero".to_string());
    }
    let synced_percent = super::round_percent(breakdown.down_payment_percent_actual);
    if inputs.home_price > Decimal::ZERO
        && breakdown.loan_amount >= Decimal::ZERO
        && (synced_percent - inputs.down_payment_percent).abs() > PERCENT_TOLERANCE
    {
        warnings.push(format!(
            "Down payment percent {}% does not match amount ({}% of price)",
            inputs.down_payment_percent, synced_percent
        ));
    }
    if inputs.pmi_rate_percent > Decimal::ZERO
        && breakdown.pmi.is_zero()
        && breakdown.loan_amount > Decimal::ZERO
    {
        warnings.push(format!(
            "PMI not charged: down payment is at least {PMI_EQUITY_THRESHOLD}% of price"
        ));
    }

    warnings
}
