//! Trait for priceable entities.

use num_traits::Float;

use crate::types::PricingError;

/// Trait for entities that can be priced.
///
/// Implemented by fully-specified pricing requests in `pricer_models`, so
/// code that only needs a present value does not have to know which model
/// produced it.
///
/// # Type Parameters
/// * `T` - Floating-point type (f32 or f64)
///
/// # Examples
/// ```
/// use pricer_core::traits::priceable::Priceable;
/// use pricer_core::types::PricingError;
///
/// struct Forward {
///     spot: f64,
///     strike: f64,
///     discount: f64,
/// }
///
/// impl Priceable<f64> for Forward {
///     fn price(&self) -> Result<f64, PricingError> {
///         Ok(self.spot - self.strike * self.discount)
///     }
/// }
///
/// let fwd = Forward { spot: 100.0, strike: 100.0, discount: 0.95 };
/// assert!((fwd.price().unwrap() - 5.0).abs() < 1e-12);
/// ```
pub trait Priceable<T: Float> {
    /// Calculate the present value.
    ///
    /// # Invariants
    /// - The method must be pure (no side effects, deterministic)
    /// - A returned value is never NaN; failures are reported as errors
    fn price(&self) -> Result<T, PricingError>;
}
