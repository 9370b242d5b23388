//! Analytical pricing formulas for European options.
//!
//! Closed-form prices used as the reference a binomial lattice converges to.
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`**: same numeric type as the lattice
//! - **European only**: American contracts are rejected, not approximated

pub mod black_scholes;
pub mod distributions;
pub mod error;

pub use black_scholes::BlackScholes;
pub use distributions::norm_cdf;
pub use error::AnalyticalError;
