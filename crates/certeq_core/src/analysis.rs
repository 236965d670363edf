//! Monte Carlo summaries of the estimator.
//!
//! A single run draws one rate per period, so the resulting curve is noisy.
//! Repeating the estimate across independently seeded trials and reporting
//! the mean and percentile band gives a stable picture of where the
//! certainty-equivalent rate concentrates.

use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::{EstimatorError, Result};
use crate::estimator::cert_equiv_rate;
use crate::model::RateModel;

/// Percentiles reported in every summary
pub const STANDARD_PERCENTILES: [f64; 3] = [0.05, 0.50, 0.95];

/// Distribution of the certainty-equivalent rate at one horizon across
/// independent trials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HorizonDistribution {
    pub horizon: u32,
    /// Mean certainty-equivalent rate across trials
    pub mean: f64,
    /// (percentile, value) pairs for [`STANDARD_PERCENTILES`]
    pub percentile_values: Vec<(f64, f64)>,
    pub num_trials: usize,
}

impl HorizonDistribution {
    /// Look up a percentile value recorded in this summary.
    #[must_use]
    pub fn percentile(&self, target: f64) -> Option<f64> {
        self.percentile_values
            .iter()
            .find(|(p, _)| (*p - target).abs() < 1e-3)
            .map(|(_, v)| *v)
    }
}

/// Estimate the distribution of the certainty-equivalent rate at one
/// horizon.
///
/// Each trial runs the full averaging pass with its own `SmallRng`, seeded
/// from a parent generator so the whole summary is reproducible from `seed`.
pub fn rate_distribution(
    model: &RateModel,
    horizon: u32,
    num_trials: usize,
    seed: u64,
) -> Result<HorizonDistribution> {
    if num_trials == 0 {
        return Err(EstimatorError::NoTrials);
    }

    let mut parent = SmallRng::seed_from_u64(seed);
    let seeds: Vec<u64> = (0..num_trials).map(|_| parent.next_u64()).collect();

    #[cfg(feature = "parallel")]
    let mut rates = seeds
        .into_par_iter()
        .map(|trial_seed| {
            let mut rng = SmallRng::seed_from_u64(trial_seed);
            cert_equiv_rate(&mut rng, horizon, model)
        })
        .collect::<Result<Vec<f64>>>()?;

    #[cfg(not(feature = "parallel"))]
    let mut rates = seeds
        .into_iter()
        .map(|trial_seed| {
            let mut rng = SmallRng::seed_from_u64(trial_seed);
            cert_equiv_rate(&mut rng, horizon, model)
        })
        .collect::<Result<Vec<f64>>>()?;

    rates.sort_unstable_by(|a, b| a.total_cmp(b));

    let mean = rates.iter().sum::<f64>() / rates.len() as f64;
    let percentile_values = STANDARD_PERCENTILES
        .iter()
        .map(|&p| (p, percentile(&rates, p)))
        .collect();

    Ok(HorizonDistribution {
        horizon,
        mean,
        percentile_values,
        num_trials,
    })
}

/// Per-horizon sweep of [`rate_distribution`], used for the smoothed band
/// behind the sampled curve.
pub fn rate_distributions(
    model: &RateModel,
    horizons: &[u32],
    num_trials: usize,
    seed: u64,
) -> Result<Vec<HorizonDistribution>> {
    // Deal a fresh seed per horizon so sweeps don't reuse trial seeds
    let mut parent = SmallRng::seed_from_u64(seed);
    horizons
        .iter()
        .map(|&horizon| rate_distribution(model, horizon, num_trials, parent.next_u64()))
        .collect()
}

/// Nearest-rank percentile on an ascending-sorted slice.
fn percentile(sorted: &[f64], p: f64) -> f64 {
    debug_assert!(!sorted.is_empty());
    let idx = ((sorted.len() - 1) as f64 * p).round() as usize;
    sorted[idx.min(sorted.len() - 1)]
}
