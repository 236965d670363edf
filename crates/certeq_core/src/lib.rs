//! Certainty-equivalent discount rates for long-horizon economic analysis.
//!
//! Civil-infrastructure appraisals discount benefits that arrive decades or
//! centuries out, where the annual rate itself is uncertain. This crate
//! averages stochastic per-period discount factors over a time horizon and
//! back-solves the single constant rate with the same average present-value
//! effect, after the formulation of Lee & Ellingwood, "Ethical discounting
//! for civil infrastructure decisions extending over multiple generations"
//! (Structural Safety 57, 2015).
//!
//! Randomness is injected: every sampling entry point takes a
//! `rand::Rng`, so callers choose between a thread generator for production
//! draws and a seeded [`rand::rngs::SmallRng`] for reproducible runs.
//!
//! ```ignore
//! use certeq_core::{RateBounds, RateModel, cert_equiv_rate};
//! use rand::{SeedableRng, rngs::SmallRng};
//!
//! let model = RateModel::from(RateBounds::new(0.01, 0.1)?);
//! let mut rng = SmallRng::seed_from_u64(42);
//! let rate = cert_equiv_rate(&mut rng, 100, &model)?;
//! ```

#![warn(clippy::all)]

pub mod analysis;
pub mod error;
pub mod estimator;
pub mod model;

#[cfg(test)]
mod tests;

pub use analysis::{HorizonDistribution, rate_distribution, rate_distributions};
pub use error::EstimatorError;
pub use estimator::{
    HorizonPoint, cert_equiv_factor, cert_equiv_rate, discount_factor, equivalent_rate, rate_curve,
};
pub use model::{RateBounds, RateModel};
