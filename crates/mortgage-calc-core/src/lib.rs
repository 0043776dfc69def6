pub mod error;
pub mod payment;
pub mod types;

#[cfg(feature = "display")]
pub mod display;

#[cfg(feature = "chart")]
pub mod chart;

pub use error::MortgageError;
pub use types::*;

/// Standard result type for the fallible edges of the engine
pub type MortgageResult<T> = Result<T, MortgageError>;
