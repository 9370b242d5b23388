//! Payoff type definitions.
//!
//! The lattice needs the exact (kinked) payoff at every node, so intrinsic
//! values are computed with a hard `max` rather than a smoothed one.

use std::fmt;
use std::str::FromStr;

use num_traits::Float;

use super::error::InstrumentError;

/// Type of option payoff.
///
/// # Variants
/// - `Call`: max(S - K, 0)
/// - `Put`: max(K - S, 0)
///
/// # Examples
/// ```
/// use pricer_models::instruments::PayoffType;
///
/// let call = PayoffType::Call;
/// assert_eq!(call.intrinsic(110.0_f64, 100.0), 10.0);
/// assert_eq!(call.intrinsic(90.0_f64, 100.0), 0.0);
///
/// let put: PayoffType = "put".parse().unwrap();
/// assert_eq!(put.intrinsic(90.0_f64, 100.0), 10.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PayoffType {
    /// Call option: max(S - K, 0)
    #[default]
    Call,
    /// Put option: max(K - S, 0)
    Put,
}

impl PayoffType {
    /// Immediate-exercise value for the given spot and strike.
    ///
    /// Always non-negative.
    #[inline]
    pub fn intrinsic<T: Float>(&self, spot: T, strike: T) -> T {
        let zero = T::zero();
        match self {
            PayoffType::Call => (spot - strike).max(zero),
            PayoffType::Put => (strike - spot).max(zero),
        }
    }

    /// Returns whether this is a call.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, PayoffType::Call)
    }

    /// Returns whether this is a put.
    #[inline]
    pub fn is_put(&self) -> bool {
        matches!(self, PayoffType::Put)
    }

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            PayoffType::Call => "call",
            PayoffType::Put => "put",
        }
    }
}

impl fmt::Display for PayoffType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PayoffType {
    type Err = InstrumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" | "c" => Ok(PayoffType::Call),
            "put" | "p" => Ok(PayoffType::Put),
            _ => Err(InstrumentError::UnknownPayoff {
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_intrinsic() {
        let call = PayoffType::Call;
        assert_eq!(call.intrinsic(22.0_f64, 21.0), 1.0);
        assert_eq!(call.intrinsic(18.0_f64, 21.0), 0.0);
        assert_eq!(call.intrinsic(21.0_f64, 21.0), 0.0);
    }

    #[test]
    fn test_put_intrinsic() {
        let put = PayoffType::Put;
        assert_eq!(put.intrinsic(32.0_f64, 52.0), 20.0);
        assert_eq!(put.intrinsic(72.0_f64, 52.0), 0.0);
    }

    #[test]
    fn test_f32_compatibility() {
        assert_eq!(PayoffType::Put.intrinsic(90.0_f32, 100.0), 10.0_f32);
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("CALL".parse::<PayoffType>().unwrap(), PayoffType::Call);
        assert_eq!(" Put ".parse::<PayoffType>().unwrap(), PayoffType::Put);
        assert_eq!("p".parse::<PayoffType>().unwrap(), PayoffType::Put);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "digital".parse::<PayoffType>().unwrap_err();
        assert!(matches!(err, InstrumentError::UnknownPayoff { name } if name == "digital"));
    }

    #[test]
    fn test_display_round_trip() {
        for payoff in [PayoffType::Call, PayoffType::Put] {
            assert_eq!(payoff.to_string().parse::<PayoffType>().unwrap(), payoff);
        }
    }

    #[test]
    fn test_predicates() {
        assert!(PayoffType::Call.is_call());
        assert!(!PayoffType::Call.is_put());
        assert!(PayoffType::Put.is_put());
    }
}
