//! Binomial lattice pricing.
//!
//! Recombining Cox-Ross-Rubinstein trees for European and American
//! vanilla options, with an optional fixed-percentage move convention and
//! explicit up/down overrides.
//!
//! ## Flow
//!
//! 1. [`LatticeConfig`] fixes the step count and move convention
//! 2. [`LatticeParams::derive`] computes dt, u, d, p and the discount factor
//! 3. [`BinomialPricer::price`] folds the terminal payoffs back to the root
//!
//! [`PricingRequest`] bundles all inputs into one flat record and
//! [`price_batch`] prices many of them at once.

mod batch;
mod binomial;
mod config;
mod error;
mod params;
mod request;
mod result;

pub use batch::price_batch;
pub use binomial::BinomialPricer;
pub use config::{ArbitragePolicy, LatticeConfig, LatticeConfigBuilder, MoveConvention, MAX_STEPS};
pub use error::LatticeError;
pub use params::LatticeParams;
pub use request::PricingRequest;
pub use result::{node_count, LatticeResult};
