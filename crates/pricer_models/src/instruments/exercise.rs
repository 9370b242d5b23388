//! Option exercise style definitions.

use std::fmt;
use std::str::FromStr;

use super::error::InstrumentError;

/// Option exercise style.
///
/// Defines when an option can be exercised during its lifetime.
///
/// # Variants
/// - `European`: Exercise only at expiry
/// - `American`: Exercise at any node of the lattice
///
/// # Examples
/// ```
/// use pricer_models::instruments::ExerciseStyle;
///
/// let american: ExerciseStyle = "American".parse().unwrap();
/// assert!(american.allows_early_exercise());
/// assert!(!ExerciseStyle::European.allows_early_exercise());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ExerciseStyle {
    /// European style: exercise only at expiry.
    #[default]
    European,

    /// American style: exercise at any time before expiry.
    American,
}

impl ExerciseStyle {
    /// Returns whether this is a European exercise style.
    #[inline]
    pub fn is_european(&self) -> bool {
        matches!(self, ExerciseStyle::European)
    }

    /// Returns whether this is an American exercise style.
    #[inline]
    pub fn is_american(&self) -> bool {
        matches!(self, ExerciseStyle::American)
    }

    /// Returns whether interior lattice nodes compare against immediate exercise.
    #[inline]
    pub fn allows_early_exercise(&self) -> bool {
        self.is_american()
    }

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            ExerciseStyle::European => "european",
            ExerciseStyle::American => "american",
        }
    }
}

impl fmt::Display for ExerciseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExerciseStyle {
    type Err = InstrumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "european" | "eu" => Ok(ExerciseStyle::European),
            "american" | "am" => Ok(ExerciseStyle::American),
            _ => Err(InstrumentError::UnknownExercise {
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_european() {
        assert_eq!(ExerciseStyle::default(), ExerciseStyle::European);
    }

    #[test]
    fn test_allows_early_exercise() {
        assert!(!ExerciseStyle::European.allows_early_exercise());
        assert!(ExerciseStyle::American.allows_early_exercise());
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            "European".parse::<ExerciseStyle>().unwrap(),
            ExerciseStyle::European
        );
        assert_eq!("am".parse::<ExerciseStyle>().unwrap(), ExerciseStyle::American);
        assert!(matches!(
            "bermudan".parse::<ExerciseStyle>(),
            Err(InstrumentError::UnknownExercise { .. })
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(ExerciseStyle::American.to_string(), "american");
        assert_eq!(format!("{:?}", ExerciseStyle::European), "European");
    }
}
