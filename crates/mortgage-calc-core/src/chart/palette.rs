use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::MortgageResult;

/// A slice of the monthly payment chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartCategory {
    PrincipalInterest,
    PropertyTax,
    Insurance,
    HoaFees,
    Pmi,
}

impl ChartCategory {
    /// Legend order. HOA and PMI only appear when non-zero.
    pub const ORDER: [ChartCategory; 5] = [
        ChartCategory::PrincipalInterest,
        ChartCategory::PropertyTax,
        ChartCategory::Insurance,
        ChartCategory::HoaFees,
        ChartCategory::Pmi,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ChartCategory::PrincipalInterest => "Principal & Interest",
            ChartCategory::PropertyTax => "Property Tax",
            ChartCategory::Insurance => "Insurance",
            ChartCategory::HoaFees => "HOA Fees",
            ChartCategory::Pmi => "PMI",
        }
    }

    /// Whether the slice is drawn even when its value is zero.
    pub fn is_base(self) -> bool {
        matches!(
            self,
            ChartCategory::PrincipalInterest | ChartCategory::PropertyTax | ChartCategory::Insurance
        )
    }
}

impl fmt::Display for ChartCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Category label → color token, owned by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorMap {
    colors: BTreeMap<String, String>,
}

impl Default for ColorMap {
    fn default() -> Self {
        [
            (ChartCategory::PrincipalInterest, "#2563eb"),
            (ChartCategory::PropertyTax, "#16a34a"),
            (ChartCategory::Insurance, "#f59e0b"),
            (ChartCategory::HoaFees, "#9333ea"),
            (ChartCategory::Pmi, "#dc2626"),
        ]
        .into_iter()
        .map(|(c, color)| (c.label(), color))
        .collect()
    }
}

impl ColorMap {
    /// A palette with no colors at all.
    pub fn empty() -> Self {
        Self {
            colors: BTreeMap::new(),
        }
    }

    pub fn from_json(json: &str) -> MortgageResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn color(&self, label: &str) -> Option<&str> {
        self.colors.get(label).map(String::as_str)
    }

    pub fn set(&mut self, label: impl Into<String>, color: impl Into<String>) {
        self.colors.insert(label.into(), color.into());
    }

    /// Entries of `overrides` replace ours; everything else is kept.
    pub fn with_overrides(mut self, overrides: ColorMap) -> Self {
        self.colors.extend(overrides.colors);
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ColorMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            colors: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette_covers_every_category() {
        let palette = ColorMap::default();
        for category in ChartCategory::ORDER {
            assert!(palette.color(category.label()).is_some(), "missing {}", category);
        }
    }

    #[test]
    fn test_overrides_replace_only_named_entries() {
        let custom = ColorMap::from_json(r##"{"PMI": "#000000"}"##).unwrap();
        let palette = ColorMap::default().with_overrides(custom);
        assert_eq!(palette.color("PMI"), Some("#000000"));
        assert_eq!(palette.color("Insurance"), Some("#f59e0b"));
    }

    #[test]
    fn test_bad_json_is_serialization_error() {
        assert!(ColorMap::from_json("[1, 2]").is_err());
    }
}
