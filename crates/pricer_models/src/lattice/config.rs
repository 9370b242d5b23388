//! Lattice discretisation settings.

use num_traits::Float;

use super::error::LatticeError;

/// Largest step count the lattice accepts.
///
/// Terminal prices use `powi`, whose exponent is an `i32`.
pub const MAX_STEPS: usize = i32::MAX as usize;

/// How the up/down factors are derived from the volatility input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MoveConvention {
    /// u = exp(σ·√dt), d = 1/u.
    #[default]
    CoxRossRubinstein,
    /// u = 1 + σ, d = 1 − σ, independent of dt.
    Fixed,
}

impl MoveConvention {
    /// Maps the `fixed_moves` flag onto a convention.
    #[inline]
    pub fn from_fixed_moves(fixed_moves: bool) -> Self {
        if fixed_moves {
            MoveConvention::Fixed
        } else {
            MoveConvention::CoxRossRubinstein
        }
    }

    /// Returns whether this is the fixed-percentage convention.
    #[inline]
    pub fn is_fixed(&self) -> bool {
        matches!(self, MoveConvention::Fixed)
    }
}

/// What to do when the risk-neutral probability falls outside (0, 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ArbitragePolicy {
    /// Fail with [`LatticeError::ArbitrageViolation`].
    #[default]
    Reject,
    /// Log a warning and price anyway; the result is flagged.
    Warn,
}

/// Immutable discretisation of a binomial lattice.
///
/// Built once through [`LatticeConfig::builder`] and validated there, so
/// the pricer never sees a zero step count or a non-finite override.
///
/// # Examples
/// ```
/// use pricer_models::lattice::{LatticeConfig, MoveConvention};
///
/// let config = LatticeConfig::builder(2)
///     .fixed_moves(true)
///     .up(1.1_f64)
///     .build()
///     .unwrap();
/// assert_eq!(config.steps(), 2);
/// assert_eq!(config.moves(), MoveConvention::Fixed);
/// assert_eq!(config.up(), Some(1.1));
/// assert_eq!(config.down(), None);
///
/// assert!(LatticeConfig::<f64>::builder(0).build().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatticeConfig<T: Float> {
    steps: usize,
    moves: MoveConvention,
    up: Option<T>,
    down: Option<T>,
    arbitrage: ArbitragePolicy,
}

impl<T: Float> LatticeConfig<T> {
    /// Starts a builder with the given step count and default settings:
    /// CRR moves, no overrides, arbitrage rejected.
    pub fn builder(steps: usize) -> LatticeConfigBuilder<T> {
        LatticeConfigBuilder {
            steps,
            moves: MoveConvention::default(),
            up: None,
            down: None,
            arbitrage: ArbitragePolicy::default(),
        }
    }

    /// Number of time steps N.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Move-factor convention.
    #[inline]
    pub fn moves(&self) -> MoveConvention {
        self.moves
    }

    /// Explicit up factor, if any.
    #[inline]
    pub fn up(&self) -> Option<T> {
        self.up
    }

    /// Explicit down factor, if any.
    #[inline]
    pub fn down(&self) -> Option<T> {
        self.down
    }

    /// Arbitrage handling.
    #[inline]
    pub fn arbitrage_policy(&self) -> ArbitragePolicy {
        self.arbitrage
    }
}

/// Builder for [`LatticeConfig`].
#[derive(Debug, Clone, Copy)]
pub struct LatticeConfigBuilder<T: Float> {
    steps: usize,
    moves: MoveConvention,
    up: Option<T>,
    down: Option<T>,
    arbitrage: ArbitragePolicy,
}

impl<T: Float> LatticeConfigBuilder<T> {
    /// Sets the move convention.
    pub fn moves(mut self, moves: MoveConvention) -> Self {
        self.moves = moves;
        self
    }

    /// Shorthand for `moves(MoveConvention::from_fixed_moves(fixed))`.
    pub fn fixed_moves(self, fixed: bool) -> Self {
        self.moves(MoveConvention::from_fixed_moves(fixed))
    }

    /// Overrides the derived up factor.
    pub fn up(mut self, up: T) -> Self {
        self.up = Some(up);
        self
    }

    /// Overrides the derived down factor.
    pub fn down(mut self, down: T) -> Self {
        self.down = Some(down);
        self
    }

    /// Sets both overrides from optional values, leaving `None` derived.
    pub fn overrides(mut self, up: Option<T>, down: Option<T>) -> Self {
        self.up = up;
        self.down = down;
        self
    }

    /// Sets the arbitrage policy.
    pub fn arbitrage_policy(mut self, policy: ArbitragePolicy) -> Self {
        self.arbitrage = policy;
        self
    }

    /// Validates and builds the configuration.
    ///
    /// # Errors
    /// - `InvalidSteps` if steps is 0 or exceeds [`MAX_STEPS`]
    /// - `InvalidParameter` if an override is non-finite or non-positive
    pub fn build(self) -> Result<LatticeConfig<T>, LatticeError> {
        if self.steps == 0 || self.steps > MAX_STEPS {
            return Err(LatticeError::InvalidSteps {
                steps: self.steps,
                max: MAX_STEPS,
            });
        }

        for (name, value) in [("up", self.up), ("down", self.down)] {
            if let Some(v) = value {
                if !(v.is_finite() && v > T::zero()) {
                    return Err(LatticeError::invalid_parameter(format!(
                        "{} factor must be positive and finite, got {}",
                        name,
                        v.to_f64().unwrap_or(f64::NAN)
                    )));
                }
            }
        }

        Ok(LatticeConfig {
            steps: self.steps,
            moves: self.moves,
            up: self.up,
            down: self.down,
            arbitrage: self.arbitrage,
        })
    }
}
