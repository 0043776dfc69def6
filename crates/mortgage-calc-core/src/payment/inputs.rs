//! Loan inputs and the normalizer that builds them from raw form values.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{amount_for_percent, percent_of, round_percent, DEFAULT_LOAN_TERM_YEARS, ONE_HUNDRED};
use crate::types::{Money, Percent};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// One fully-numeric set of loan parameters, built fresh per calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoanInputs {
    /// Purchase price of the home.
    pub home_price: Money,
    /// Cash paid up front.
    pub down_payment: Money,
    /// Down payment as a share of the price (20 = 20%).
    pub down_payment_percent: Percent,
    /// Annual interest rate (6.5 = 6.5%).
    pub interest_rate_percent: Percent,
    /// Loan term in whole years.
    pub loan_term_years: u32,
    /// Annual property tax as a share of the price.
    pub property_tax_rate_percent: Percent,
    /// Annual homeowner's insurance as a share of the price.
    pub insurance_rate_percent: Percent,
    /// Monthly HOA dues.
    pub hoa_fees_monthly: Money,
    /// Annual PMI as a share of the loan amount.
    pub pmi_rate_percent: Percent,
}

impl Default for LoanInputs {
    fn default() -> Self {
        Self {
            home_price: Decimal::ZERO,
            down_payment: Decimal::ZERO,
            down_payment_percent: Decimal::ZERO,
            interest_rate_percent: Decimal::ZERO,
            loan_term_years: DEFAULT_LOAN_TERM_YEARS,
            property_tax_rate_percent: Decimal::ZERO,
            insurance_rate_percent: Decimal::ZERO,
            hoa_fees_monthly: Decimal::ZERO,
            pmi_rate_percent: Decimal::ZERO,
        }
    }
}

/// The form fields the normalizer understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanField {
    HomePrice,
    DownPayment,
    DownPaymentPercent,
    InterestRate,
    LoanTerm,
    PropertyTaxRate,
    InsuranceRate,
    HoaFees,
    PmiRate,
}

impl LoanField {
    pub const ALL: [LoanField; 9] = [
        LoanField::HomePrice,
        LoanField::DownPayment,
        LoanField::DownPaymentPercent,
        LoanField::InterestRate,
        LoanField::LoanTerm,
        LoanField::PropertyTaxRate,
        LoanField::InsuranceRate,
        LoanField::HoaFees,
        LoanField::PmiRate,
    ];

    /// Canonical snake_case key.
    pub fn key(self) -> &'static str {
        match self {
            LoanField::HomePrice => "home_price",
            LoanField::DownPayment => "down_payment",
            LoanField::DownPaymentPercent => "down_payment_percent",
            LoanField::InterestRate => "interest_rate",
            LoanField::LoanTerm => "loan_term",
            LoanField::PropertyTaxRate => "property_tax_rate",
            LoanField::InsuranceRate => "insurance_rate",
            LoanField::HoaFees => "hoa_fees",
            LoanField::PmiRate => "pmi_rate",
        }
    }

    /// Other accepted spellings, including the [`LoanInputs`] field names.
    fn aliases(self) -> &'static [&'static str] {
        match self {
            LoanField::InterestRate => &["interest_rate_percent"],
            LoanField::LoanTerm => &["loan_term_years"],
            LoanField::PropertyTaxRate => &["property_tax_rate_percent"],
            LoanField::InsuranceRate => &["insurance_rate_percent"],
            LoanField::HoaFees => &["hoa_fees_monthly"],
            LoanField::PmiRate => &["pmi_rate_percent"],
            _ => &[],
        }
    }

    /// Resolve a key in snake_case, camelCase or kebab-case.
    pub fn from_key(key: &str) -> Option<LoanField> {
        let canonical = canonical_key(key);
        Self::ALL
            .into_iter()
            .find(|f| f.key() == canonical || f.aliases().contains(&canonical.as_str()))
    }
}

impl fmt::Display for LoanField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A single form value as the UI hands it over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(Decimal),
    Text(String),
    Empty,
}

impl RawValue {
    /// Numeric reading of the value, if it has one.
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            RawValue::Number(n) => Some(*n),
            RawValue::Text(s) => parse_form_number(s),
            RawValue::Empty => None,
        }
    }
}

impl From<Decimal> for RawValue {
    fn from(value: Decimal) -> Self {
        RawValue::Number(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

/// Field name → raw value mapping sourced from form controls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawFormValues {
    values: BTreeMap<String, RawValue>,
}

impl RawFormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<RawValue>) {
        self.values.insert(key.into(), value.into());
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Remove `field` under every spelling it was inserted with.
    pub fn remove(&mut self, field: LoanField) {
        self.values.retain(|k, _| LoanField::from_key(k) != Some(field));
    }

    pub fn get(&self, field: LoanField) -> Option<&RawValue> {
        self.values
            .iter()
            .find(|(k, _)| LoanField::from_key(k) == Some(field))
            .map(|(_, v)| v)
    }

    /// Numeric value of `field`, or `None` when missing or unparsable.
    pub fn number(&self, field: LoanField) -> Option<Decimal> {
        self.get(field).and_then(RawValue::as_decimal)
    }

    /// Keys that do not name any known field.
    pub fn unknown_keys(&self) -> impl Iterator<Item = &str> {
        self.values
            .keys()
            .filter(|k| LoanField::from_key(k).is_none())
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<RawValue>> FromIterator<(K, V)> for RawFormValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut raw = RawFormValues::new();
        for (k, v) in iter {
            raw.insert(k, v);
        }
        raw
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Coerce raw form values into [`LoanInputs`].
///
/// Never fails. Missing or unparsable fields take their defaults (30 years
/// for the term, zero for everything else), negative amounts and rates are
/// clamped to zero and the down payment percent to `[0, 100]`, whether given
/// or derived. The amount itself is never clamped against the price, so a
/// down payment above the price is left for the caller to judge.
pub fn normalize(raw: &RawFormValues) -> LoanInputs {
    let home_price = raw
        .number(LoanField::HomePrice)
        .map(non_negative)
        .unwrap_or(Decimal::ZERO);

    let amount = raw.number(LoanField::DownPayment).map(non_negative);
    let percent = raw.number(LoanField::DownPaymentPercent).map(clamp_percent);

    // Fill whichever representation is missing from the other one.
    let (down_payment, down_payment_percent) = match (amount, percent) {
        (Some(amount), Some(percent)) => (amount, percent),
        (Some(amount), None) => {
            let derived = round_percent(percent_of(amount, home_price));
            (amount, clamp_percent(derived))
        }
        (None, Some(percent)) => (amount_for_percent(home_price, percent), percent),
        (None, None) => (Decimal::ZERO, Decimal::ZERO),
    };

    let loan_term_years = raw
        .number(LoanField::LoanTerm)
        .map(whole_years)
        .unwrap_or(DEFAULT_LOAN_TERM_YEARS);

    let rate = |field| raw.number(field).map(non_negative).unwrap_or(Decimal::ZERO);

    let inputs = LoanInputs {
        home_price,
        down_payment,
        down_payment_percent,
        interest_rate_percent: rate(LoanField::InterestRate),
        loan_term_years,
        property_tax_rate_percent: rate(LoanField::PropertyTaxRate),
        insurance_rate_percent: rate(LoanField::InsuranceRate),
        hoa_fees_monthly: rate(LoanField::HoaFees),
        pmi_rate_percent: rate(LoanField::PmiRate),
    };

    for key in raw.unknown_keys() {
        debug!(key, "ignoring unknown form field");
    }
    debug!(?inputs, "normalized loan inputs");
    inputs
}

/// Parse a number the way it appears in a form control: `"$450,000"`,
/// `" 6.5% "`, `"1e5"`.
pub fn parse_form_number(text: &str) -> Option<Decimal> {
    let cleaned: String = text
        .trim()
        .chars()
        .filter(|c| !matches!(c, '$' | ',' | '%' | '_') && !c.is_whitespace())
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    Decimal::from_str(&cleaned)
        .or_else(|_| Decimal::from_scientific(&cleaned))
        .ok()
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn canonical_key(key: &str) -> String {
    let chars: Vec<char> = key.trim().chars().collect();
    let mut out = String::with_capacity(chars.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c == '-' || c == ' ' {
            out.push('_');
        } else if c.is_ascii_uppercase() {
            // Split `homePrice` and `HOAFees`, but keep `HOA` together.
            let prev = i.checked_sub(1).map(|j| chars[j]);
            let next = chars.get(i + 1);
            let word_start = match prev {
                Some(p) if p.is_ascii_lowercase() || p.is_ascii_digit() => true,
                Some(p) if p.is_ascii_uppercase() => next.is_some_and(|n| n.is_ascii_lowercase()),
                _ => false,
            };
            if word_start && !out.ends_with('_') {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

fn non_negative(value: Decimal) -> Decimal {
    value.max(Decimal::ZERO)
}

fn clamp_percent(value: Decimal) -> Decimal {
    value.max(Decimal::ZERO).min(ONE_HUNDRED)
}

fn whole_years(value: Decimal) -> u32 {
    let years = value.trunc();
    if years <= Decimal::ZERO {
        return 0;
    }
    years.to_u32().unwrap_or(u32::MAX)
}
