//! # Pricer Models (L2: Business Logic)
//!
//! Vanilla option contracts and the models that value them.
//!
//! This crate provides:
//! - Contract definitions (call/put payoff, European/American exercise)
//! - Binomial lattice pricing with batch support
//! - Black-Scholes closed forms as a European reference
//!
//! ## Design Principles
//!
//! - **Validated construction**: contracts and lattice settings reject bad
//!   input when built, never during pricing
//! - **Generic precision**: every model is generic over `T: Float`
//! - **Typed errors**: each module has its own error enum that converts
//!   into [`pricer_core::types::PricingError`]

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
pub mod lattice;
