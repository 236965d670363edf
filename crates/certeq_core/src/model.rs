use rand::{Rng, distr::Distribution};
use serde::{Deserialize, Serialize};

use crate::error::{EstimatorError, Result};

/// Interval of admissible annual discount rates, sampled uniformly per
/// period.
///
/// Both bounds must be finite and above -1 (a rate at or below -1 makes the
/// per-period growth factor vanish or change sign), and the interval must be
/// non-empty. Invalid bounds are rejected when sampled, so configurations
/// built by hand or deserialized from data cannot bypass the checks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateBounds {
    pub min_rate: f64,
    pub max_rate: f64,
}

impl RateBounds {
    // 1%-10% interval used in long-horizon infrastructure studies
    // (Lee & Ellingwood, Structural Safety 57, 2015)
    pub const INFRASTRUCTURE_BASELINE: RateBounds = RateBounds {
        min_rate: 0.01,
        max_rate: 0.1,
    };

    pub fn new(min_rate: f64, max_rate: f64) -> Result<Self> {
        let bounds = Self { min_rate, max_rate };
        bounds.validate()?;
        Ok(bounds)
    }

    fn validate(&self) -> Result<()> {
        let err = |reason| EstimatorError::InvalidRateBounds {
            min_rate: self.min_rate,
            max_rate: self.max_rate,
            reason,
        };

        if !self.min_rate.is_finite() || !self.max_rate.is_finite() {
            return Err(err("bounds must be finite"));
        }
        if self.min_rate >= self.max_rate {
            return Err(err("min_rate must be below max_rate"));
        }
        if self.min_rate <= -1.0 {
            return Err(err("rates at or below -1 are not discountable"));
        }
        Ok(())
    }

    /// Draw one annual rate uniformly from the closed interval.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<f64> {
        self.validate()?;
        Ok(rng.random_range(self.min_rate..=self.max_rate))
    }
}

impl Default for RateBounds {
    fn default() -> Self {
        Self::INFRASTRUCTURE_BASELINE
    }
}

/// Distribution of the annual discount rate, drawn independently for each
/// period through a caller-supplied generator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RateModel {
    /// Degenerate distribution: every period uses the same rate
    Fixed { rate: f64 },
    /// Uniform draw from a bounded interval (the baseline behavior)
    Uniform(RateBounds),
    Normal { mean: f64, std_dev: f64 },
}

impl RateModel {
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<f64> {
        match self {
            RateModel::Fixed { rate } => Ok(*rate),
            RateModel::Uniform(bounds) => bounds.sample(rng),
            RateModel::Normal { mean, std_dev } => rand_distr::Normal::new(*mean, *std_dev)
                .map(|d| d.sample(rng))
                .map_err(|_| EstimatorError::InvalidDistributionParameters {
                    mean: *mean,
                    std_dev: *std_dev,
                    reason: "std_dev must be non-negative and finite",
                }),
        }
    }
}

impl Default for RateModel {
    fn default() -> Self {
        RateModel::Uniform(RateBounds::default())
    }
}

impl From<RateBounds> for RateModel {
    fn from(bounds: RateBounds) -> Self {
        RateModel::Uniform(bounds)
    }
}
