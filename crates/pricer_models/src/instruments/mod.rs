//! Option contract definitions.
//!
//! # Instrument Types
//!
//! - [`VanillaOption`]: European/American option with Call/Put payoff
//! - [`ContractParams`]: Validated spot, strike and expiry
//! - [`PayoffType`]: Call/Put intrinsic value
//! - [`ExerciseStyle`]: European/American exercise rights
//!
//! # Examples
//!
//! ```
//! use pricer_models::instruments::{ExerciseStyle, PayoffType, VanillaOption};
//!
//! let call = VanillaOption::new(PayoffType::Call, ExerciseStyle::European, 100.0_f64, 110.0, 1.0)
//!     .unwrap();
//! assert_eq!(call.intrinsic(120.0), 10.0);
//! ```

mod error;
mod exercise;
mod params;
mod payoff;
mod vanilla;

pub use error::InstrumentError;
pub use exercise::ExerciseStyle;
pub use params::ContractParams;
pub use payoff::PayoffType;
pub use vanilla::VanillaOption;
