use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::palette::{ChartCategory, ColorMap};
use crate::payment::PaymentBreakdown;
use crate::types::Money;

/// Parallel arrays in the shape chart libraries expect.
///
/// `labels`, `values` and `colors` always have the same length.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartDataset {
    pub labels: Vec<String>,
    pub values: Vec<Money>,
    pub colors: Vec<String>,
}

/// One slice, zipped back together from the parallel arrays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSegment<'a> {
    pub label: &'a str,
    pub value: Money,
    pub color: &'a str,
}

impl ChartDataset {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn segments(&self) -> impl Iterator<Item = ChartSegment<'_>> {
        self.labels
            .iter()
            .zip(&self.values)
            .zip(&self.colors)
            .map(|((label, value), color)| ChartSegment {
                label,
                value: *value,
                color,
            })
    }

    fn push(&mut self, label: &str, value: Money, color: &str) {
        self.labels.push(label.to_string());
        self.values.push(value);
        self.colors.push(color.to_string());
    }
}

/// Build the cost distribution for `breakdown`.
///
/// Principal & interest, property tax and insurance are always present, in
/// that order; HOA fees and then PMI follow only when non-zero. Colors come
/// from `palette` by label. A label with no palette entry gets an empty color
/// token.
pub fn build_chart_data(breakdown: &PaymentBreakdown, palette: &ColorMap) -> ChartDataset {
    let mut dataset = ChartDataset::default();

    for category in ChartCategory::ORDER {
        let value = category_value(breakdown, category);
        if !category.is_base() && value <= Decimal::ZERO {
            continue;
        }
        let label = category.label();
        let color = palette.color(label).unwrap_or_else(|| {
            warn!(label, "no palette color for chart category");
            ""
        });
        dataset.push(label, value, color);
    }

    dataset
}

fn category_value(breakdown: &PaymentBreakdown, category: ChartCategory) -> Money {
    match category {
        ChartCategory::PrincipalInterest => breakdown.principal_interest,
        ChartCategory::PropertyTax => breakdown.property_tax,
        ChartCategory::Insurance => breakdown.insurance,
        ChartCategory::HoaFees => breakdown.hoa,
        ChartCategory::Pmi => breakdown.pmi,
    }
}
