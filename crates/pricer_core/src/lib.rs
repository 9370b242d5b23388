//! # pricer_core: Foundation for the Lattice Pricer
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Traits for pricing (`traits`)
//! - Error types: `PricingError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derivation
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::traits::Priceable;
//! use pricer_core::types::PricingError;
//!
//! struct Intrinsic(f64);
//!
//! impl Priceable<f64> for Intrinsic {
//!     fn price(&self) -> Result<f64, PricingError> {
//!         Ok(self.0.max(0.0))
//!     }
//! }
//!
//! assert_eq!(Intrinsic(-1.0).price().unwrap(), 0.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod traits;
pub mod types;
