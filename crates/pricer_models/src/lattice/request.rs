//! Flat pricing request.
//!
//! One record carrying every input of a lattice valuation: contract terms,
//! market inputs and discretisation. Scenario files and the CLI build
//! these; [`PricingRequest::price`] validates and runs them.

use num_traits::Float;
use pricer_core::traits::Priceable;
use pricer_core::types::PricingError;

use super::binomial::BinomialPricer;
use super::config::{ArbitragePolicy, LatticeConfig};
use super::error::LatticeError;
use super::result::LatticeResult;
use crate::instruments::{ExerciseStyle, PayoffType, VanillaOption};

/// All inputs of a single binomial valuation.
///
/// Defaults: European call, S0 = 100, K = 110, T = 1, r = 0.05, σ = 0.2,
/// 100 CRR steps, no overrides, arbitrage rejected.
///
/// # Examples
/// ```
/// use pricer_models::instruments::{ExerciseStyle, PayoffType};
/// use pricer_models::lattice::PricingRequest;
///
/// let request = PricingRequest {
///     option_type: PayoffType::Put,
///     exercise_type: ExerciseStyle::American,
///     spot: 50.0_f64,
///     strike: 52.0,
///     expiry: 2.0,
///     rate: 0.05,
///     volatility: 0.2,
///     steps: 2,
///     fixed_moves: true,
///     ..Default::default()
/// };
/// let result = request.price().unwrap();
/// assert!((result.price - 5.089632474198373).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PricingRequest<T: Float> {
    /// Call or put.
    #[cfg_attr(feature = "serde", serde(alias = "kind"))]
    pub option_type: PayoffType,
    /// European or American.
    #[cfg_attr(feature = "serde", serde(alias = "exercise"))]
    pub exercise_type: ExerciseStyle,
    /// Initial underlying price S0.
    #[cfg_attr(feature = "serde", serde(alias = "S0"))]
    pub spot: T,
    /// Strike K.
    #[cfg_attr(feature = "serde", serde(alias = "K"))]
    pub strike: T,
    /// Time to maturity T in years.
    #[cfg_attr(feature = "serde", serde(alias = "T"))]
    pub expiry: T,
    /// Continuously compounded risk-free rate.
    #[cfg_attr(feature = "serde", serde(alias = "r"))]
    pub rate: T,
    /// σ in CRR mode, per-step move size when `fixed_moves` is set.
    #[cfg_attr(feature = "serde", serde(alias = "sigma"))]
    pub volatility: T,
    /// Number of lattice steps N.
    pub steps: usize,
    /// Use u = 1 + σ, d = 1 − σ instead of CRR factors.
    pub fixed_moves: bool,
    /// Explicit up factor.
    #[cfg_attr(feature = "serde", serde(alias = "u"))]
    pub up: Option<T>,
    /// Explicit down factor.
    #[cfg_attr(feature = "serde", serde(alias = "d"))]
    pub down: Option<T>,
    /// Handling of a risk-neutral probability outside (0, 1).
    pub arbitrage_policy: ArbitragePolicy,
}

impl<T: Float> Default for PricingRequest<T> {
    fn default() -> Self {
        let c = |v: f64| T::from(v).unwrap_or_else(T::nan);
        Self {
            option_type: PayoffType::Call,
            exercise_type: ExerciseStyle::European,
            spot: c(100.0),
            strike: c(110.0),
            expiry: T::one(),
            rate: c(0.05),
            volatility: c(0.2),
            steps: 100,
            fixed_moves: false,
            up: None,
            down: None,
            arbitrage_policy: ArbitragePolicy::Reject,
        }
    }
}

impl<T: Float> PricingRequest<T> {
    /// Validated contract.
    pub fn option(&self) -> Result<VanillaOption<T>, LatticeError> {
        Ok(VanillaOption::new(
            self.option_type,
            self.exercise_type,
            self.spot,
            self.strike,
            self.expiry,
        )?)
    }

    /// Validated discretisation.
    pub fn config(&self) -> Result<LatticeConfig<T>, LatticeError> {
        LatticeConfig::builder(self.steps)
            .fixed_moves(self.fixed_moves)
            .overrides(self.up, self.down)
            .arbitrage_policy(self.arbitrage_policy)
            .build()
    }

    /// Pricer for this request's market inputs and discretisation.
    pub fn pricer(&self) -> Result<BinomialPricer<T>, LatticeError> {
        Ok(BinomialPricer::new(self.rate, self.volatility, self.config()?))
    }

    /// Validates every input, then prices on the lattice.
    ///
    /// Contract terms are checked before the discretisation, so a request
    /// with both a bad spot and zero steps reports the spot.
    pub fn price(&self) -> Result<LatticeResult<T>, LatticeError> {
        let option = self.option()?;
        self.pricer()?.price(&option)
    }
}

impl<T: Float> Priceable<T> for PricingRequest<T> {
    fn price(&self) -> Result<T, PricingError> {
        PricingRequest::price(self)
            .map(|result| result.price)
            .map_err(PricingError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instruments::InstrumentError;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_defaults_match_reference_contract() {
        let request = PricingRequest::<f64>::default();
        assert_eq!(request.option_type, PayoffType::Call);
        assert_eq!(request.exercise_type, ExerciseStyle::European);
        assert_eq!(request.spot, 100.0);
        assert_eq!(request.strike, 110.0);
        assert_eq!(request.steps, 100);
        assert!(!request.fixed_moves);
        assert!(request.price().unwrap().price > 0.0);
    }

    #[test]
    fn test_contract_checked_before_steps() {
        let request = PricingRequest {
            spot: -1.0_f64,
            steps: 0,
            ..Default::default()
        };
        assert!(matches!(
            request.price(),
            Err(LatticeError::Instrument(InstrumentError::InvalidSpot { .. }))
        ));
    }

    #[test]
    fn test_zero_steps_rejected() {
        let request = PricingRequest::<f64> {
            steps: 0,
            ..Default::default()
        };
        assert!(matches!(
            request.price(),
            Err(LatticeError::InvalidSteps { steps: 0, .. })
        ));
    }

    #[test]
    fn test_priceable_returns_present_value() {
        let request = PricingRequest {
            exercise_type: ExerciseStyle::American,
            spot: 20.0_f64,
            strike: 21.0,
            expiry: 0.5,
            rate: 0.12,
            volatility: 0.1,
            steps: 2,
            fixed_moves: true,
            ..Default::default()
        };
        let pv = Priceable::price(&request).unwrap();
        assert_abs_diff_eq!(pv, 1.282_184_945_274_140_5, epsilon = 1e-12);
    }

    #[test]
    fn test_priceable_maps_errors() {
        let request = PricingRequest::<f64> {
            volatility: 0.0,
            fixed_moves: true,
            ..Default::default()
        };
        assert!(matches!(
            Priceable::price(&request),
            Err(PricingError::NumericalInstability(_))
        ));
    }

    #[test]
    fn test_priceable_rejects_overflow() {
        let request = PricingRequest {
            exercise_type: ExerciseStyle::American,
            spot: 50.0_f64,
            strike: 52.0,
            expiry: 2.0,
            volatility: 0.9,
            steps: 1500,
            fixed_moves: true,
            ..Default::default()
        };
        assert!(matches!(
            request.price(),
            Err(LatticeError::NonFinitePrice { steps: 1500, .. })
        ));
        assert!(matches!(
            Priceable::price(&request),
            Err(PricingError::NumericalInstability(_))
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_with_aliases() {
        let request: PricingRequest<f64> = serde_json::from_str(
            r#"{"kind": "put", "exercise": "american", "S0": 50.0, "K": 52.0,
                "T": 2.0, "r": 0.05, "sigma": 0.2, "steps": 2, "fixed_moves": true}"#,
        )
        .unwrap();
        assert_eq!(request.option_type, PayoffType::Put);
        assert_eq!(request.exercise_type, ExerciseStyle::American);
        assert_eq!(request.up, None);
        assert_eq!(request.arbitrage_policy, ArbitragePolicy::Reject);
        assert_abs_diff_eq!(
            request.price().unwrap().price,
            5.089_632_474_198_373,
            epsilon = 1e-12
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_toml_overrides() {
        let request: PricingRequest<f64> = toml::from_str(
            r#"
            option_type = "call"
            spot = 20.0
            strike = 21.0
            rate = 0.0
            steps = 1
            fixed_moves = true
            u = 1.1
            d = 0.9
            arbitrage_policy = "warn"
            "#,
        )
        .unwrap();
        assert_eq!(request.up, Some(1.1));
        assert_eq!(request.down, Some(0.9));
        assert_eq!(request.arbitrage_policy, ArbitragePolicy::Warn);
        assert_abs_diff_eq!(request.price().unwrap().price, 0.5, epsilon = 1e-12);
    }
}
