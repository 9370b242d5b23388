//! Lattice pricing output.

use std::time::Duration;

use num_traits::Float;

use super::params::LatticeParams;

/// Number of positions in a recombining lattice of `steps` steps.
///
/// Depth k holds k+1 nodes, so the total over depths 0..=N is the
/// triangular number (N+1)(N+2)/2. Defined for `steps == 0` as well.
///
/// Exact for every step count up to [`MAX_STEPS`](super::MAX_STEPS).
/// Counts that do not fit in a `u64` saturate at `u64::MAX`.
///
/// # Examples
/// ```
/// use pricer_models::lattice::node_count;
///
/// assert_eq!(node_count(0), 1);
/// assert_eq!(node_count(2), 6);
/// assert_eq!(node_count(1000), 501_501);
/// ```
#[inline]
pub fn node_count(steps: usize) -> u64 {
    let n = steps as u128;
    (n + 1)
        .checked_mul(n + 2)
        .and_then(|twice| u64::try_from(twice / 2).ok())
        .unwrap_or(u64::MAX)
}

/// Present value plus diagnostics of a single lattice valuation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatticeResult<T: Float> {
    /// Present value at the root node.
    pub price: T,
    /// Wall-clock time spent deriving parameters and folding the lattice.
    pub elapsed: Duration,
    /// Total lattice positions, see [`node_count`].
    pub node_count: u64,
    /// Parameters the lattice was built with.
    pub params: LatticeParams<T>,
    /// `false` when p fell outside (0, 1) and the policy allowed pricing anyway.
    pub arbitrage_free: bool,
}

impl<T: Float> LatticeResult<T> {
    /// Elapsed time in seconds.
    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lattice::MAX_STEPS;

    #[test]
    fn test_node_count_small() {
        let expected = [1_u64, 3, 6, 10, 15];
        for (steps, &count) in expected.iter().enumerate() {
            assert_eq!(node_count(steps), count);
        }
    }

    #[test]
    fn test_node_count_matches_depth_sum() {
        for steps in [7_usize, 64, 365] {
            let sum: u64 = (0..=steps as u64).map(|k| k + 1).sum();
            assert_eq!(node_count(steps), sum);
        }
    }

    #[test]
    fn test_node_count_at_step_limit() {
        assert_eq!(node_count(MAX_STEPS), 2_305_843_010_287_435_776);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_node_count_saturates() {
        assert_eq!(node_count(usize::MAX), u64::MAX);
    }

    #[test]
    fn test_elapsed_secs() {
        let result = LatticeResult {
            price: 1.0_f64,
            elapsed: Duration::from_millis(1500),
            node_count: 6,
            params: LatticeParams {
                dt: 0.25,
                up: 1.1,
                down: 0.9,
                probability: 0.5,
                discount: 1.0,
            },
            arbitrage_free: true,
        };
        assert_eq!(result.elapsed_secs(), 1.5);
    }
}
