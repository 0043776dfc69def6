//! Presentation of a [`PaymentBreakdown`](crate::payment::PaymentBreakdown):
//! whole-dollar currency strings and row visibility for the results panel.

pub mod currency;
pub mod presenter;

pub use currency::{format_currency, format_percent};
pub use presenter::{present, DisplayModel, DisplayRow};
