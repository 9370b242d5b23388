//! Instrument error types.
//!
//! This module provides structured error handling for contract
//! construction and for parsing payoff/exercise names.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Instrument-related errors.
///
/// # Variants
/// - `InvalidSpot`: Initial underlying price is non-positive or non-finite
/// - `InvalidStrike`: Strike price is non-positive or non-finite
/// - `InvalidExpiry`: Time to maturity is non-positive or non-finite
/// - `UnknownPayoff`: Unrecognised payoff name
/// - `UnknownExercise`: Unrecognised exercise style name
///
/// # Examples
/// ```
/// use pricer_models::instruments::InstrumentError;
///
/// let err = InstrumentError::InvalidStrike { strike: -100.0 };
/// assert!(format!("{}", err).contains("-100"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InstrumentError {
    /// Invalid initial underlying price.
    #[error("Invalid spot: S0 = {spot}")]
    InvalidSpot {
        /// The invalid spot value
        spot: f64,
    },

    /// Invalid strike price.
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Invalid time to maturity.
    #[error("Invalid expiry: T = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry value
        expiry: f64,
    },

    /// Payoff name could not be parsed.
    #[error("Unknown payoff type: '{name}' (expected 'call' or 'put')")]
    UnknownPayoff {
        /// The name that failed to parse
        name: String,
    },

    /// Exercise style name could not be parsed.
    #[error("Unknown exercise style: '{name}' (expected 'european' or 'american')")]
    UnknownExercise {
        /// The name that failed to parse
        name: String,
    },
}

impl From<InstrumentError> for PricingError {
    fn from(err: InstrumentError) -> Self {
        match err {
            InstrumentError::UnknownPayoff { .. } | InstrumentError::UnknownExercise { .. } => {
                PricingError::UnsupportedInstrument(err.to_string())
            }
            _ => PricingError::InvalidInput(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_spot_display() {
        let err = InstrumentError::InvalidSpot { spot: 0.0 };
        assert_eq!(format!("{}", err), "Invalid spot: S0 = 0");
    }

    #[test]
    fn test_invalid_expiry_display() {
        let err = InstrumentError::InvalidExpiry { expiry: -0.5 };
        assert_eq!(format!("{}", err), "Invalid expiry: T = -0.5");
    }

    #[test]
    fn test_unknown_payoff_display() {
        let err = InstrumentError::UnknownPayoff {
            name: "straddle".to_string(),
        };
        assert!(format!("{}", err).contains("'straddle'"));
    }

    #[test]
    fn test_conversion_to_pricing_error() {
        let err: PricingError = InstrumentError::InvalidStrike { strike: -1.0 }.into();
        assert_eq!(err, PricingError::InvalidInput("Invalid strike: K = -1".to_string()));

        let err: PricingError = InstrumentError::UnknownExercise {
            name: "asian".to_string(),
        }
        .into();
        assert!(matches!(err, PricingError::UnsupportedInstrument(_)));
    }
}
