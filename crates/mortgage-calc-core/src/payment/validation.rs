//! Submission checks for the UI boundary.
//!
//! The calculator accepts anything numeric; these are the rules a form
//! applies before it lets the user submit. Nothing in the engine calls them.

use rust_decimal::Decimal;

use super::inputs::LoanInputs;
use crate::error::MortgageError;
use crate::MortgageResult;

/// Reject inputs whose breakdown would not be worth showing.
pub fn validate_submission(inputs: &LoanInputs) -> MortgageResult<()> {
    if inputs.home_price <= Decimal::ZERO {
        return Err(MortgageError::InvalidInput {
            field: "home_price".into(),
            reason: "Home price must be greater than zero".into(),
        });
    }
    if inputs.down_payment > inputs.home_price {
        return Err(MortgageError::InvalidInput {
            field: "down_payment".into(),
            reason: format!(
                "Down payment {} cannot exceed home price {}",
                inputs.down_payment, inputs.home_price
            ),
        });
    }
    if inputs.loan_term_years == 0 {
        return Err(MortgageError::InvalidInput {
            field: "loan_term".into(),
            reason: "Loan term must be at least one year".into(),
        });
    }
    Ok(())
}
