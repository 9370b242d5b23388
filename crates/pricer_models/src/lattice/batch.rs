//! Batch pricing of independent requests.
//!
//! Lattice valuations share no state, so a batch is a plain map over the
//! requests. With the `parallel` feature the map runs on the rayon pool.

use num_traits::Float;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::debug;

use super::error::LatticeError;
use super::request::PricingRequest;
use super::result::LatticeResult;

/// Prices every request, preserving input order.
///
/// A failing request yields its own `Err` without affecting the others.
///
/// # Examples
/// ```
/// use pricer_models::lattice::{price_batch, PricingRequest};
///
/// let requests = vec![
///     PricingRequest::<f64>::default(),
///     PricingRequest { steps: 0, ..Default::default() },
/// ];
/// let results = price_batch(&requests);
/// assert!(results[0].is_ok());
/// assert!(results[1].is_err());
/// ```
pub fn price_batch<T>(
    requests: &[PricingRequest<T>],
) -> Vec<Result<LatticeResult<T>, LatticeError>>
where
    T: Float + Send + Sync,
{
    debug!(requests = requests.len(), "pricing batch");

    #[cfg(feature = "parallel")]
    let results = requests.par_iter().map(PricingRequest::price).collect();

    #[cfg(not(feature = "parallel"))]
    let results = requests.iter().map(PricingRequest::price).collect();

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instruments::{ExerciseStyle, PayoffType};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_batch_preserves_order() {
        let requests: Vec<PricingRequest<f64>> = (1..=20)
            .map(|steps| PricingRequest {
                steps,
                ..Default::default()
            })
            .collect();

        let results = price_batch(&requests);
        assert_eq!(results.len(), requests.len());
        for (request, result) in requests.iter().zip(&results) {
            let sequential = request.price().unwrap();
            let batched = result.as_ref().unwrap();
            assert_eq!(batched.price, sequential.price);
            assert_eq!(batched.node_count, sequential.node_count);
        }
    }

    #[test]
    fn test_batch_isolates_failures() {
        let good = PricingRequest {
            option_type: PayoffType::Put,
            exercise_type: ExerciseStyle::American,
            spot: 50.0_f64,
            strike: 52.0,
            expiry: 2.0,
            steps: 2,
            fixed_moves: true,
            ..Default::default()
        };
        let degenerate = PricingRequest {
            volatility: 0.0,
            ..good
        };

        let results = price_batch(&[good, degenerate, good]);
        assert_abs_diff_eq!(
            results[0].as_ref().unwrap().price,
            5.089_632_474_198_373,
            epsilon = 1e-12
        );
        assert!(matches!(
            results[1],
            Err(LatticeError::DegenerateLattice { .. })
        ));
        assert!(results[2].is_ok());
    }

    #[test]
    fn test_empty_batch() {
        assert!(price_batch::<f64>(&[]).is_empty());
    }
}
