//! Derived lattice parameters.

use num_traits::Float;

use super::config::{LatticeConfig, MoveConvention};
use super::error::LatticeError;

/// Per-step scalars of a binomial lattice.
///
/// | field         | definition                      |
/// |---------------|---------------------------------|
/// | `dt`          | T / N                           |
/// | `up`, `down`  | see [`MoveConvention`]          |
/// | `probability` | (e^(r·dt) − d) / (u − d)        |
/// | `discount`    | e^(−r·dt)                       |
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatticeParams<T: Float> {
    /// Time increment per step.
    pub dt: T,
    /// Up factor u.
    pub up: T,
    /// Down factor d.
    pub down: T,
    /// Risk-neutral probability of an up move.
    pub probability: T,
    /// One-step discount factor.
    pub discount: T,
}

impl<T: Float> LatticeParams<T> {
    /// Derives the lattice parameters for a contract of maturity `expiry`.
    ///
    /// Explicit overrides in `config` replace the convention's factor one
    /// at a time. In CRR mode a derived `d` is `1/u` of the final `u`,
    /// overridden or not.
    ///
    /// # Errors
    /// - `InvalidParameter` for a non-finite rate or volatility, a
    ///   non-positive down factor, or an up factor below the down factor
    /// - `DegenerateLattice` when u == d
    ///
    /// # Examples
    /// ```
    /// use pricer_models::lattice::{LatticeConfig, LatticeParams};
    ///
    /// let config = LatticeConfig::builder(1).fixed_moves(true).build().unwrap();
    /// let params = LatticeParams::derive(1.0_f64, 0.0, 0.1, &config).unwrap();
    /// assert!((params.up - 1.1).abs() < 1e-12);
    /// assert!((params.down - 0.9).abs() < 1e-12);
    /// assert!((params.probability - 0.5).abs() < 1e-12);
    /// ```
    pub fn derive(
        expiry: T,
        rate: T,
        volatility: T,
        config: &LatticeConfig<T>,
    ) -> Result<Self, LatticeError> {
        if !rate.is_finite() {
            return Err(LatticeError::invalid_parameter(format!(
                "rate must be finite, got {}",
                to_f64(rate)
            )));
        }
        if !volatility.is_finite() {
            return Err(LatticeError::invalid_parameter(format!(
                "volatility must be finite, got {}",
                to_f64(volatility)
            )));
        }

        let steps = T::from(config.steps()).ok_or(LatticeError::InvalidSteps {
            steps: config.steps(),
            max: super::config::MAX_STEPS,
        })?;
        let dt = expiry / steps;

        let (up, down) = match config.moves() {
            MoveConvention::Fixed => (
                config.up().unwrap_or(T::one() + volatility),
                config.down().unwrap_or(T::one() - volatility),
            ),
            MoveConvention::CoxRossRubinstein => {
                let up = config.up().unwrap_or_else(|| (volatility * dt.sqrt()).exp());
                (up, config.down().unwrap_or(T::one() / up))
            }
        };

        if !(up.is_finite() && down.is_finite()) {
            return Err(LatticeError::invalid_parameter(format!(
                "move factors must be finite, got u = {}, d = {}",
                to_f64(up),
                to_f64(down)
            )));
        }
        if up == down {
            return Err(LatticeError::DegenerateLattice {
                up: to_f64(up),
                down: to_f64(down),
            });
        }
        if down <= T::zero() {
            return Err(LatticeError::invalid_parameter(format!(
                "down factor must be positive, got {}",
                to_f64(down)
            )));
        }
        if up < down {
            return Err(LatticeError::invalid_parameter(format!(
                "up factor {} must exceed down factor {}",
                to_f64(up),
                to_f64(down)
            )));
        }

        let probability = ((rate * dt).exp() - down) / (up - down);
        if !probability.is_finite() {
            return Err(LatticeError::DegenerateLattice {
                up: to_f64(up),
                down: to_f64(down),
            });
        }

        Ok(Self {
            dt,
            up,
            down,
            probability,
            discount: (-rate * dt).exp(),
        })
    }

    /// Returns whether 0 < p < 1.
    #[inline]
    pub fn is_arbitrage_free(&self) -> bool {
        self.probability > T::zero() && self.probability < T::one()
    }
}

#[inline]
fn to_f64<T: Float>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}
