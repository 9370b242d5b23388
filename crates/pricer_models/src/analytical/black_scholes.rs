//! Black-Scholes closed form for European options.
//!
//! Serves as the continuous-time limit the CRR lattice converges to, so
//! callers can report the discretisation error of a lattice price.
//!
//! **Call**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! with d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T) and d₂ = d₁ - σ√T.

use num_traits::Float;

use super::distributions::norm_cdf;
use super::error::AnalyticalError;
use crate::instruments::{PayoffType, VanillaOption};

/// Black-Scholes model for European option pricing.
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholes;
///
/// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
/// let call = bs.price_call(100.0, 1.0);
/// let put = bs.price_put(100.0, 1.0);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call - put - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BlackScholes<T: Float> {
    spot: T,
    rate: T,
    volatility: T,
}

impl<T: Float> BlackScholes<T> {
    /// Creates a new Black-Scholes model.
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidSpot` if spot <= 0
    /// - `AnalyticalError::InvalidVolatility` if volatility <= 0
    pub fn new(spot: T, rate: T, volatility: T) -> Result<Self, AnalyticalError> {
        let zero = T::zero();

        if spot <= zero || spot.is_nan() {
            return Err(AnalyticalError::InvalidSpot {
                spot: spot.to_f64().unwrap_or(f64::NAN),
            });
        }

        if volatility <= zero || volatility.is_nan() {
            return Err(AnalyticalError::InvalidVolatility {
                volatility: volatility.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(Self {
            spot,
            rate,
            volatility,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    fn d1_d2(&self, strike: T, expiry: T) -> (T, T) {
        let half = T::from(0.5).unwrap_or_else(T::nan);
        let vol_sqrt_t = self.volatility * expiry.sqrt();
        let drift = (self.rate + half * self.volatility * self.volatility) * expiry;
        let d1 = ((self.spot / strike).ln() + drift) / vol_sqrt_t;
        (d1, d1 - vol_sqrt_t)
    }

    /// European call price. Returns intrinsic value at or past expiry.
    pub fn price_call(&self, strike: T, expiry: T) -> T {
        if expiry <= T::zero() {
            return PayoffType::Call.intrinsic(self.spot, strike);
        }
        let (d1, d2) = self.d1_d2(strike, expiry);
        let discount = (-self.rate * expiry).exp();
        self.spot * norm_cdf(d1) - strike * discount * norm_cdf(d2)
    }

    /// European put price. Returns intrinsic value at or past expiry.
    pub fn price_put(&self, strike: T, expiry: T) -> T {
        if expiry <= T::zero() {
            return PayoffType::Put.intrinsic(self.spot, strike);
        }
        let (d1, d2) = self.d1_d2(strike, expiry);
        let discount = (-self.rate * expiry).exp();
        strike * discount * norm_cdf(-d2) - self.spot * norm_cdf(-d1)
    }

    /// Prices a European vanilla option.
    ///
    /// The option's own spot is used, not the model's.
    ///
    /// # Errors
    /// `UnsupportedExerciseStyle` for American options, which have no
    /// closed form in this model.
    pub fn price_option(
        rate: T,
        volatility: T,
        option: &VanillaOption<T>,
    ) -> Result<T, AnalyticalError> {
        if option.exercise().allows_early_exercise() {
            return Err(AnalyticalError::UnsupportedExerciseStyle {
                style: option.exercise().to_string(),
            });
        }

        let params = option.params();
        let model = Self::new(params.spot(), rate, volatility)?;
        Ok(match option.payoff() {
            PayoffType::Call => model.price_call(params.strike(), params.expiry()),
            PayoffType::Put => model.price_put(params.strike(), params.expiry()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instruments::ExerciseStyle;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_atm_reference_prices() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        assert_abs_diff_eq!(bs.price_call(100.0, 1.0), 10.450_583_572_185_565, epsilon = 1e-4);
        assert_abs_diff_eq!(bs.price_put(100.0, 1.0), 5.573_526_022_256_971, epsilon = 1e-4);
    }

    #[test]
    fn test_put_call_parity() {
        let bs = BlackScholes::new(50.0_f64, 0.05, 0.2).unwrap();
        let lhs = bs.price_call(52.0, 2.0) - bs.price_put(52.0, 2.0);
        let rhs = 50.0 - 52.0 * (-0.1_f64).exp();
        assert_abs_diff_eq!(lhs, rhs, epsilon = 1e-6);
    }

    #[test]
    fn test_expired_returns_intrinsic() {
        let bs = BlackScholes::new(110.0_f64, 0.05, 0.2).unwrap();
        assert_eq!(bs.price_call(100.0, 0.0), 10.0);
        assert_eq!(bs.price_put(100.0, 0.0), 0.0);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(matches!(
            BlackScholes::new(0.0_f64, 0.05, 0.2),
            Err(AnalyticalError::InvalidSpot { .. })
        ));
        assert!(matches!(
            BlackScholes::new(100.0_f64, 0.05, -0.2),
            Err(AnalyticalError::InvalidVolatility { .. })
        ));
    }

    #[test]
    fn test_price_option_european_put() {
        let option =
            VanillaOption::new(PayoffType::Put, ExerciseStyle::European, 50.0_f64, 52.0, 2.0)
                .unwrap();
        let price = BlackScholes::price_option(0.05, 0.2, &option).unwrap();
        assert_abs_diff_eq!(price, 4.107_758_382_232_078, epsilon = 1e-4);
    }

    #[test]
    fn test_price_option_rejects_american() {
        let option =
            VanillaOption::new(PayoffType::Put, ExerciseStyle::American, 50.0_f64, 52.0, 2.0)
                .unwrap();
        assert!(matches!(
            BlackScholes::price_option(0.05, 0.2, &option),
            Err(AnalyticalError::UnsupportedExerciseStyle { .. })
        ));
    }
}
