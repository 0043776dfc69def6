//! Cost-distribution dataset for the payment pie chart.

pub mod dataset;
pub mod palette;

pub use dataset::{build_chart_data, ChartDataset, ChartSegment};
pub use palette::{ChartCategory, ColorMap};
