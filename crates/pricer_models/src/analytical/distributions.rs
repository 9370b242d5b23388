//! Standard normal distribution functions.

use num_traits::Float;

/// Complementary error function, Abramowitz and Stegun 7.1.26.
///
/// Absolute error below 1.5e-7 for all x.
fn erfc<T: Float>(x: T) -> T {
    const P: f64 = 0.327_591_1;
    const A: [f64; 5] = [
        0.254_829_592,
        -0.284_496_736,
        1.421_413_741,
        -1.453_152_027,
        1.061_405_429,
    ];

    let c = |v: f64| T::from(v).unwrap_or_else(T::nan);
    let z = x.abs();
    let t = T::one() / (T::one() + c(P) * z);
    let poly = A
        .iter()
        .rev()
        .fold(T::zero(), |acc, &a| (acc + c(a)) * t);
    let tail = poly * (-z * z).exp();

    if x < T::zero() {
        c(2.0) - tail
    } else {
        tail
    }
}

/// Standard normal cumulative distribution function Φ(x) = erfc(-x/√2) / 2.
///
/// # Examples
/// ```
/// use pricer_models::analytical::norm_cdf;
///
/// assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-7);
/// assert!(norm_cdf(-3.0_f64) < 0.01);
/// assert!(norm_cdf(3.0_f64) > 0.99);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    let half = T::from(0.5).unwrap_or_else(T::nan);
    let sqrt_2 = T::from(std::f64::consts::SQRT_2).unwrap_or_else(T::nan);
    half * erfc(-x / sqrt_2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_norm_cdf_reference_values() {
        assert_abs_diff_eq!(norm_cdf(0.0_f64), 0.5, epsilon = 1e-7);
        assert_abs_diff_eq!(norm_cdf(1.0_f64), 0.841_344_746_068_543, epsilon = 1e-7);
        assert_abs_diff_eq!(norm_cdf(-1.96_f64), 0.024_997_895_148_220, epsilon = 1e-7);
        assert_abs_diff_eq!(norm_cdf(2.5_f64), 0.993_790_334_674_224, epsilon = 1e-7);
    }

    #[test]
    fn test_norm_cdf_symmetry() {
        for &x in &[0.1_f64, 0.5, 1.3, 2.7, 4.0] {
            assert_abs_diff_eq!(norm_cdf(x) + norm_cdf(-x), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_norm_cdf_monotone() {
        let xs: Vec<f64> = (-40..=40).map(|i| i as f64 * 0.1).collect();
        for w in xs.windows(2) {
            assert!(norm_cdf(w[0]) <= norm_cdf(w[1]));
        }
    }
}
