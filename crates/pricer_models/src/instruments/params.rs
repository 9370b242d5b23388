//! Contract parameters.
//!
//! This module provides the validated economic terms shared by every
//! option contract: initial underlying price, strike and time to maturity.

use num_traits::Float;

use super::error::InstrumentError;

/// Validated contract terms.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`)
///
/// # Examples
/// ```
/// use pricer_models::instruments::ContractParams;
///
/// let params = ContractParams::new(20.0_f64, 21.0, 0.5).unwrap();
/// assert_eq!(params.spot(), 20.0);
/// assert_eq!(params.strike(), 21.0);
/// assert_eq!(params.expiry(), 0.5);
///
/// assert!(ContractParams::new(20.0_f64, 21.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContractParams<T: Float> {
    spot: T,
    strike: T,
    expiry: T,
}

/// `value > 0` and finite. NaN fails the comparison.
#[inline]
fn is_positive<T: Float>(value: T) -> bool {
    value > T::zero() && value.is_finite()
}

impl<T: Float> ContractParams<T> {
    /// Creates new contract parameters with validation.
    ///
    /// # Arguments
    /// * `spot` - Initial underlying price S0 (must be positive)
    /// * `strike` - Strike price K (must be positive)
    /// * `expiry` - Time to maturity T in years (must be positive)
    ///
    /// # Errors
    /// The first non-positive or non-finite field, checked in argument order.
    pub fn new(spot: T, strike: T, expiry: T) -> Result<Self, InstrumentError> {
        if !is_positive(spot) {
            return Err(InstrumentError::InvalidSpot {
                spot: spot.to_f64().unwrap_or(f64::NAN),
            });
        }

        if !is_positive(strike) {
            return Err(InstrumentError::InvalidStrike {
                strike: strike.to_f64().unwrap_or(f64::NAN),
            });
        }

        if !is_positive(expiry) {
            return Err(InstrumentError::InvalidExpiry {
                expiry: expiry.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(Self {
            spot,
            strike,
            expiry,
        })
    }

    /// Returns the initial underlying price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> T {
        self.strike
    }

    /// Returns the time to maturity in years.
    #[inline]
    pub fn expiry(&self) -> T {
        self.expiry
    }
}
