use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::currency::{format_currency, format_percent};
use crate::payment::PaymentBreakdown;

/// Formatted results panel for one breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayModel {
    pub loan_amount: String,
    pub principal_interest: String,
    pub property_tax: String,
    pub insurance: String,
    pub hoa: String,
    pub pmi: String,
    pub total_monthly_payment: String,
    pub total_interest_over_term: String,
    pub total_paid_over_term: String,
    pub down_payment_percent: String,
    pub show_pmi_row: bool,
    pub show_hoa_row: bool,
}

/// A labelled line of the results panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRow {
    pub label: &'static str,
    pub value: String,
}

impl DisplayModel {
    /// Visible rows in panel order, for table and print views.
    pub fn rows(&self) -> Vec<DisplayRow> {
        let mut rows = vec![
            row("Loan Amount", &self.loan_amount),
            row("Down Payment", &self.down_payment_percent),
            row("Principal & Interest", &self.principal_interest),
            row("Property Tax", &self.property_tax),
            row("Insurance", &self.insurance),
        ];
        if self.show_hoa_row {
            rows.push(row("HOA Fees", &self.hoa));
        }
        if self.show_pmi_row {
            rows.push(row("PMI", &self.pmi));
        }
        rows.push(row("Total Monthly Payment", &self.total_monthly_payment));
        rows.push(row("Total Interest", &self.total_interest_over_term));
        rows.push(row("Total Paid", &self.total_paid_over_term));
        rows
    }
}

fn row(label: &'static str, value: &str) -> DisplayRow {
    DisplayRow {
        label,
        value: value.to_string(),
    }
}

/// Map a breakdown to display strings. Pure formatting: no value is
/// recomputed, only rounded for display.
pub fn present(breakdown: &PaymentBreakdown) -> DisplayModel {
    DisplayModel {
        loan_amount: format_currency(breakdown.loan_amount),
        principal_interest: format_currency(breakdown.principal_interest),
        property_tax: format_currency(breakdown.property_tax),
        insurance: format_currency(breakdown.insurance),
        hoa: format_currency(breakdown.hoa),
        pmi: format_currency(breakdown.pmi),
        total_monthly_payment: format_currency(breakdown.total_monthly_payment),
        total_interest_over_term: format_currency(breakdown.total_interest_over_term),
        total_paid_over_term: format_currency(breakdown.total_paid_over_term),
        down_payment_percent: format_percent(breakdown.down_payment_percent_actual),
        show_pmi_row: breakdown.pmi > Decimal::ZERO,
        show_hoa_row: breakdown.hoa > Decimal::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn breakdown() -> PaymentBreakdown {
        PaymentBreakdown {
            loan_amount: dec!(450000),
            principal_interest: dec!(2697.98),
            property_tax: dec!(500),
            insurance: dec!(125),
            hoa: Decimal::ZERO,
            pmi: dec!(187.5),
            total_monthly_payment: dec!(3510.48),
            total_interest_over_term: dec!(521272.8),
            total_paid_over_term: dec!(1263772.8),
            down_payment_percent_actual: dec!(10),
        }
    }

    #[test]
    fn test_formats_every_currency_field() {
        let model = present(&breakdown());
        assert_eq!(model.loan_amount, "$450,000");
        assert_eq!(model.principal_interest, "$2,698");
        assert_eq!(model.pmi, "$188");
        assert_eq!(model.hoa, "$0");
        assert_eq!(model.total_monthly_payment, "$3,510");
        assert_eq!(model.total_paid_over_term, "$1,263,773");
        assert_eq!(model.down_payment_percent, "10.00%");
    }

    #[test]
    fn test_row_visibility() {
        let model = present(&breakdown());
        assert!(model.show_pmi_row);
        assert!(!model.show_hoa_row);

        let with_hoa = PaymentBreakdown {
            hoa: dec!(250),
            pmi: Decimal::ZERO,
            ..breakdown()
        };
        let model = present(&with_hoa);
        assert!(!model.show_pmi_row);
        assert!(model.show_hoa_row);
    }

    #[test]
    fn test_rows_skip_hidden_lines() {
        let labels: Vec<&str> = present(&breakdown()).rows().iter().map(|r| r.label).collect();
        assert_eq!(
            labels,
            vec![
                "Loan Amount",
                "Down Payment",
                "Principal & Interest",
                "Property Tax",
                "Insurance",
                "PMI",
                "Total Monthly Payment",
                "Total Interest",
                "Total Paid",
            ]
        );
    }

    #[test]
    fn test_zero_rows_still_shown() {
        let zero = PaymentBreakdown {
            property_tax: Decimal::ZERO,
            insurance: Decimal::ZERO,
            ..breakdown()
        };
        let rows = present(&zero).rows();
        assert!(rows.iter().any(|r| r.label == "Insurance" && r.value == "$0"));
    }
}
