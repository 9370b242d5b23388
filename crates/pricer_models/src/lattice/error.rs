//! Error types for lattice construction and valuation.

use pricer_core::types::PricingError;
use thiserror::Error;

use crate::instruments::InstrumentError;

/// Lattice pricing errors.
///
/// Every variant except `NonFinitePrice` is raised before the backward
/// induction starts. A pricing call either returns a finite price or one
/// of these, never a partially folded value.
///
/// # Variants
/// - `Instrument`: Contract terms failed validation
/// - `InvalidSteps`: Step count is zero or too large for the lattice
/// - `InvalidParameter`: Non-finite rate/volatility, or unusable move factors
/// - `DegenerateLattice`: u == d, so the risk-neutral probability is undefined
/// - `ArbitrageViolation`: Risk-neutral probability outside (0, 1)
/// - `NonFinitePrice`: Lattice node values overflowed during the fold
///
/// # Examples
/// ```
/// use pricer_models::lattice::LatticeError;
///
/// let err = LatticeError::DegenerateLattice { up: 1.0, down: 1.0 };
/// assert!(format!("{}", err).contains("Degenerate lattice"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LatticeError {
    /// Contract validation failure.
    #[error(transparent)]
    Instrument(#[from] InstrumentError),

    /// Step count outside the supported range.
    #[error("Invalid step count: N = {steps} (must be between 1 and {max})")]
    InvalidSteps {
        /// The rejected step count
        steps: usize,
        /// Largest supported step count
        max: usize,
    },

    /// Invalid model parameter.
    #[error("Invalid parameter: {message}")]
    InvalidParameter {
        /// Description of the parameter error
        message: String,
    },

    /// Zero-width spread between the up and down factors.
    #[error("Degenerate lattice: up factor {up} equals down factor {down}")]
    DegenerateLattice {
        /// Up factor
        up: f64,
        /// Down factor
        down: f64,
    },

    /// Risk-neutral probability outside the open unit interval.
    #[error("Arbitrage in lattice: risk-neutral probability p = {probability} is outside (0, 1)")]
    ArbitrageViolation {
        /// The offending probability
        probability: f64,
    },

    /// The folded root value is infinite or NaN.
    #[error("Non-finite lattice price after {steps} steps (up factor {up})")]
    NonFinitePrice {
        /// Step count of the lattice
        steps: usize,
        /// Up factor
        up: f64,
    },
}

impl LatticeError {
    pub(crate) fn invalid_parameter(message: impl Into<String>) -> Self {
        LatticeError::InvalidParameter {
            message: message.into(),
        }
    }
}

impl From<LatticeError> for PricingError {
    fn from(err: LatticeError) -> Self {
        match err {
            LatticeError::Instrument(inner) => inner.into(),
            LatticeError::InvalidSteps { .. } | LatticeError::InvalidParameter { .. } => {
                PricingError::InvalidInput(err.to_string())
            }
            LatticeError::DegenerateLattice { .. } | LatticeError::NonFinitePrice { .. } => {
                PricingError::NumericalInstability(err.to_string())
            }
            LatticeError::ArbitrageViolation { .. } => PricingError::ModelFailure(err.to_string()),
        }
    }
}
