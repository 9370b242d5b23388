//! Vanilla option contract.

use num_traits::Float;

use super::error::InstrumentError;
use super::exercise::ExerciseStyle;
use super::params::ContractParams;
use super::payoff::PayoffType;

/// Single-asset vanilla option: payoff, exercise style and contract terms.
///
/// Immutable once constructed; the terms were validated by
/// [`ContractParams::new`].
///
/// # Examples
/// ```
/// use pricer_models::instruments::{ExerciseStyle, PayoffType, VanillaOption};
///
/// let option = VanillaOption::new(
///     PayoffType::Put,
///     ExerciseStyle::American,
///     50.0_f64,
///     52.0,
///     2.0,
/// )
/// .unwrap();
/// assert_eq!(option.intrinsic(40.0), 12.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VanillaOption<T: Float> {
    params: ContractParams<T>,
    payoff: PayoffType,
    exercise: ExerciseStyle,
}

impl<T: Float> VanillaOption<T> {
    /// Creates a vanilla option, validating spot, strike and expiry.
    pub fn new(
        payoff: PayoffType,
        exercise: ExerciseStyle,
        spot: T,
        strike: T,
        expiry: T,
    ) -> Result<Self, InstrumentError> {
        Ok(Self::from_params(
            ContractParams::new(spot, strike, expiry)?,
            payoff,
            exercise,
        ))
    }

    /// Creates a vanilla option from already validated terms.
    #[inline]
    pub fn from_params(
        params: ContractParams<T>,
        payoff: PayoffType,
        exercise: ExerciseStyle,
    ) -> Self {
        Self {
            params,
            payoff,
            exercise,
        }
    }

    /// Returns the contract terms.
    #[inline]
    pub fn params(&self) -> &ContractParams<T> {
        &self.params
    }

    /// Returns the payoff type.
    #[inline]
    pub fn payoff(&self) -> PayoffType {
        self.payoff
    }

    /// Returns the exercise style.
    #[inline]
    pub fn exercise(&self) -> ExerciseStyle {
        self.exercise
    }

    /// Immediate-exercise value at the given underlying price.
    #[inline]
    pub fn intrinsic(&self, spot: T) -> T {
        self.payoff.intrinsic(spot, self.params.strike())
    }
}
