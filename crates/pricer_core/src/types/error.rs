//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors from pricing operations, shared by every model crate

use thiserror::Error;

/// Categorised pricing errors.
///
/// Model-specific errors (instrument validation, lattice construction,
/// analytical formulas) convert into this type so callers can handle every
/// pricing failure through a single enum.
///
/// # Variants
/// - `InvalidInput`: Invalid contract data or parameters
/// - `NumericalInstability`: Computation produced a non-finite or undefined value
/// - `ModelFailure`: Model assumptions violated (e.g. arbitrage in the lattice)
/// - `UnsupportedInstrument`: Instrument type not supported by model
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("Negative spot price".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: Negative spot price");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Invalid input data or parameters
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Numerical instability during computation
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),

    /// Model failed to produce valid result
    #[error("Model failure: {0}")]
    ModelFailure(String),

    /// Instrument type not supported
    #[error("Unsupported instrument: {0}")]
    UnsupportedInstrument(String),
}

impl PricingError {
    /// Returns whether the error was caused by caller-supplied input.
    #[inline]
    pub fn is_input_error(&self) -> bool {
        matches!(self, PricingError::InvalidInput(_))
    }
}
