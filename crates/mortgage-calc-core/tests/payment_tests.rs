use mortgage_calc_core::chart::{build_chart_data, ColorMap};
use mortgage_calc_core::display::present;
use mortgage_calc_core::payment::{
    analyze_payment, calculate, normalize, sync_down_payment, validate_submission, EditedField,
    LoanInputs, RawFormValues,
};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn assert_close(actual: Decimal, expected: Decimal, tol: Decimal, msg: &str) {
    assert!(
        (actual - expected).abs() <= tol,
        "{}: expected ~{}, got {}",
        msg,
        expected,
        actual
    );
}

fn scenario_form(down_payment: &str) -> RawFormValues {
    RawFormValues::new()
        .with("homePrice", "500,000")
        .with("downPayment", down_payment)
        .with("interestRate", "6")
        .with("loanTerm", "30")
        .with("propertyTaxRate", "1.2")
        .with("insuranceRate", "0.3")
        .with("hoaFees", "")
        .with("pmiRate", "0.5")
}

// ===========================================================================
// Worked scenarios
// ===========================================================================

#[test]
fn test_twenty_percent_down_end_to_end() {
    let inputs = normalize(&scenario_form("100000"));
    assert_eq!(inputs.down_payment_percent, dec!(20));

    let b = calculate(&inputs);
    assert_eq!(b.loan_amount, dec!(400000));
    assert_eq!(b.pmi, Decimal::ZERO);
    assert_close(b.principal_interest, dec!(2398.20), dec!(0.01), "P&I");
    assert_eq!(b.property_tax, dec!(500));
    assert_eq!(b.insurance, dec!(125));
    assert_close(b.total_monthly_payment, dec!(3023.20), dec!(1), "total");

    let model = present(&b);
    assert_eq!(model.principal_interest, "$2,398");
    assert_eq!(model.total_monthly_payment, "$3,023");
    assert!(!model.show_pmi_row);
    assert!(!model.show_hoa_row);
}

#[test]
fn test_ten_percent_down_adds_pmi_everywhere() {
    let inputs = normalize(&scenario_form("$50,000"));
    let b = calculate(&inputs);
    assert_eq!(b.down_payment_percent_actual, dec!(10));
    assert_eq!(b.pmi, dec!(187.50));

    let model = present(&b);
    assert!(model.show_pmi_row);
    assert!(!model.show_hoa_row);
    assert_eq!(model.pmi, "$188");

    let chart = build_chart_data(&b, &ColorMap::default());
    assert_eq!(chart.labels.last().map(String::as_str), Some("PMI"));
    assert_eq!(chart.values.last(), Some(&dec!(187.5)));
    assert!(!chart.labels.iter().any(|l| l == "HOA Fees"));
}

#[test]
fn test_zero_rate_scenario() {
    let inputs = LoanInputs {
        home_price: dec!(360000),
        loan_term_years: 30,
        ..LoanInputs::default()
    };
    assert_eq!(calculate(&inputs).principal_interest, dec!(1000.00));
}

// ===========================================================================
// Properties
// ===========================================================================

#[test]
fn test_zero_rate_payoff_across_terms() {
    for (price, term) in [(dec!(250000), 10u32), (dec!(199999), 15), (dec!(731250), 30)] {
        let inputs = LoanInputs {
            home_price: price,
            loan_term_years: term,
            ..LoanInputs::default()
        };
        let b = calculate(&inputs);
        let n = Decimal::from(term * 12);
        assert_close(b.principal_interest * n, b.loan_amount, dec!(0.0001), "payoff");
    }
}

#[test]
fn test_interest_identity_across_rates() {
    for rate in [dec!(0.125), dec!(3.5), dec!(6.875), dec!(12)] {
        for term in [10u32, 15, 30] {
            let inputs = LoanInputs {
                home_price: dec!(420000),
                down_payment: dec!(42000),
                down_payment_percent: dec!(10),
                interest_rate_percent: rate,
                loan_term_years: term,
                ..LoanInputs::default()
            };
            let b = calculate(&inputs);
            let n = Decimal::from(term * 12);
            assert_eq!(b.total_interest_over_term, b.principal_interest * n - b.loan_amount);
            assert!(b.total_interest_over_term >= Decimal::ZERO, "rate {} term {}", rate, term);
        }
    }
}

#[test]
fn test_total_is_sum_of_components() {
    let inputs = LoanInputs {
        hoa_fees_monthly: dec!(275),
        ..normalize(&scenario_form("25000"))
    };
    let b = calculate(&inputs);
    let sum: Decimal = b.monthly_components().iter().sum();
    assert_eq!(b.total_monthly_payment, sum);
}

#[test]
fn test_chart_never_contains_zero_optional_slices() {
    for (hoa, down) in [("0", "100000"), ("150", "100000"), ("0", "10000"), ("150", "10000")] {
        let raw = scenario_form(down).with("hoaFees", hoa);
        let b = calculate(&normalize(&raw));
        let chart = build_chart_data(&b, &ColorMap::default());
        assert_eq!(chart.labels.len(), chart.values.len());
        assert_eq!(chart.values.len(), chart.colors.len());
        for seg in chart.segments() {
            if seg.label == "HOA Fees" || seg.label == "PMI" {
                assert!(seg.value > Decimal::ZERO, "{} should be omitted", seg.label);
            }
        }
    }
}

#[test]
fn test_sync_then_calculate() {
    // User types a price, then a percent, then changes the price again.
    let mut inputs = normalize(&RawFormValues::new().with("home_price", "300000"));
    inputs.down_payment_percent = dec!(15);
    inputs = sync_down_payment(&inputs, EditedField::Percent);
    assert_eq!(inputs.down_payment, dec!(45000));

    inputs.home_price = dec!(320000);
    inputs = sync_down_payment(&inputs, EditedField::Price);
    assert_eq!(inputs.down_payment, dec!(48000));

    inputs.down_payment = dec!(64000);
    inputs = sync_down_payment(&inputs, EditedField::Amount);
    assert_eq!(inputs.down_payment_percent, dec!(20));
    assert_eq!(calculate(&inputs).down_payment_percent_actual, dec!(20));
}

#[test]
fn test_degenerate_input_is_defined_but_not_displayable() {
    let raw = RawFormValues::new()
        .with("home_price", "100000")
        .with("down_payment", "250000");
    let inputs = normalize(&raw);
    assert!(validate_submission(&inputs).is_err());

    let out = analyze_payment(&inputs);
    assert!(out.result.loan_amount < Decimal::ZERO);
    assert!(!out.result.is_displayable());
    assert!(!out.warnings.is_empty());
}

#[test]
fn test_envelope_serializes_decimals_as_strings() {
    let out = analyze_payment(&normalize(&scenario_form("100000")));
    let json = serde_json::to_value(&out).unwrap();
    assert_eq!(json["result"]["loan_amount"], "400000");
    assert_eq!(json["assumptions"]["loan_term_years"], 30);
    assert_eq!(json["metadata"]["precision"], "rust_decimal_128bit");
}
