//! Binomial lattice pricer.
//!
//! Builds the terminal layer of a recombining tree and folds it back to
//! the root by discounted risk-neutral expectation. For American exercise
//! every folded node is floored at its intrinsic value.
//!
//! Node j at depth k is j down moves and k−j up moves from the root, so
//! node 0 is always the highest price at its depth.

use std::time::Instant;

use num_traits::Float;
use tracing::{debug, trace, warn};

use super::config::{ArbitragePolicy, LatticeConfig};
use super::error::LatticeError;
use super::params::LatticeParams;
use super::result::{node_count, LatticeResult};
use crate::instruments::VanillaOption;

/// Binomial lattice pricer for vanilla options.
///
/// Holds the market inputs and discretisation; the contract is supplied
/// per call. Each call allocates its own buffers, so one pricer can be
/// shared across threads.
///
/// # Examples
/// ```
/// use pricer_models::instruments::{ExerciseStyle, PayoffType, VanillaOption};
/// use pricer_models::lattice::{BinomialPricer, LatticeConfig};
///
/// let option =
///     VanillaOption::new(PayoffType::Call, ExerciseStyle::American, 20.0_f64, 21.0, 0.5).unwrap();
/// let config = LatticeConfig::builder(2).fixed_moves(true).build().unwrap();
/// let pricer = BinomialPricer::new(0.12, 0.1, config);
///
/// let result = pricer.price(&option).unwrap();
/// assert!((result.price - 1.2821849452741405).abs() < 1e-12);
/// assert_eq!(result.node_count, 6);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BinomialPricer<T: Float> {
    rate: T,
    volatility: T,
    config: LatticeConfig<T>,
}

impl<T: Float> BinomialPricer<T> {
    /// Creates a pricer.
    ///
    /// # Arguments
    /// * `rate` - Continuously compounded risk-free rate r
    /// * `volatility` - σ in CRR mode, per-step move size in fixed mode
    /// * `config` - Validated discretisation
    pub fn new(rate: T, volatility: T, config: LatticeConfig<T>) -> Self {
        Self {
            rate,
            volatility,
            config,
        }
    }

    /// Returns the discretisation.
    #[inline]
    pub fn config(&self) -> &LatticeConfig<T> {
        &self.config
    }

    /// Prices `option` on the lattice.
    ///
    /// # Errors
    /// Parameter derivation errors from [`LatticeParams::derive`],
    /// `ArbitrageViolation` when p is outside (0, 1) under
    /// [`ArbitragePolicy::Reject`], and `NonFinitePrice` when u^N overflows.
    pub fn price(&self, option: &VanillaOption<T>) -> Result<LatticeResult<T>, LatticeError> {
        let start = Instant::now();
        let steps = self.config.steps();
        let params = LatticeParams::derive(
            option.params().expiry(),
            self.rate,
            self.volatility,
            &self.config,
        )?;

        let arbitrage_free = params.is_arbitrage_free();
        if !arbitrage_free {
            let probability = params.probability.to_f64().unwrap_or(f64::NAN);
            match self.config.arbitrage_policy() {
                ArbitragePolicy::Reject => {
                    return Err(LatticeError::ArbitrageViolation { probability });
                }
                ArbitragePolicy::Warn => {
                    warn!(
                        probability,
                        "risk-neutral probability outside (0, 1); lattice admits arbitrage"
                    );
                }
            }
        }

        debug!(
            steps,
            payoff = %option.payoff(),
            exercise = %option.exercise(),
            up = params.up.to_f64(),
            down = params.down.to_f64(),
            probability = params.probability.to_f64(),
            discount = params.discount.to_f64(),
            "derived lattice parameters"
        );

        let price = fold_lattice(option, &params, steps);
        if !price.is_finite() {
            return Err(LatticeError::NonFinitePrice {
                steps,
                up: params.up.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(LatticeResult {
            price,
            elapsed: start.elapsed(),
            node_count: node_count(steps),
            params,
            arbitrage_free,
        })
    }
}

/// Underlying prices at depth `steps`: S0·u^(N−j)·d^j.
fn terminal_prices<T: Float>(spot: T, up: T, down: T, steps: usize) -> Vec<T> {
    // steps <= MAX_STEPS, so both exponents fit in i32.
    (0..=steps)
        .map(|j| spot * up.powi((steps - j) as i32) * down.powi(j as i32))
        .collect()
}

/// Backward induction from the terminal layer to the root value.
fn fold_lattice<T: Float>(
    option: &VanillaOption<T>,
    params: &LatticeParams<T>,
    steps: usize,
) -> T {
    let payoff = option.payoff();
    let strike = option.params().strike();
    let early_exercise = option.exercise().allows_early_exercise();

    let mut prices = terminal_prices(option.params().spot(), params.up, params.down, steps);
    let mut values: Vec<T> = prices.iter().map(|&s| payoff.intrinsic(s, strike)).collect();
    trace!(nodes = values.len(), "terminal layer built");

    let p = params.probability;
    let q = T::one() - p;
    let discount = params.discount;

    for depth in (0..steps).rev() {
        // values[j + 1] is read before it is overwritten on the next iteration.
        for j in 0..=depth {
            values[j] = discount * (p * values[j] + q * values[j + 1]);
        }
        values.truncate(depth + 1);

        if early_exercise {
            prices.truncate(depth + 1);
            for (value, price) in values.iter_mut().zip(prices.iter_mut()) {
                *price = *price / params.up;
                *value = value.max(payoff.intrinsic(*price, strike));
            }
        }
    }

    values[0]
}
