//! Certainty-equivalent discounting.
//!
//! A future cash flow discounted under a random annual rate has expected
//! present value `E[(1 + r_t)^-t]`. Averaging the per-period factors over a
//! horizon and back-solving `F^(-1/T) - 1` yields the single constant rate
//! with the same average present-value effect.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{EstimatorError, Result};
use crate::model::RateModel;

/// One evaluated point of the rate curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HorizonPoint {
    /// Number of annual periods averaged
    pub horizon: u32,
    /// Certainty-equivalent discount factor
    pub factor: f64,
    /// Certainty-equivalent annual rate backed out of the factor
    pub rate: f64,
}

/// Discount factor `(1 + r)^-t` for one period, with the rate drawn fresh
/// from the model. Exactly 1.0 at `t = 0` regardless of the drawn rate.
pub fn discount_factor<R: Rng + ?Sized>(rng: &mut R, t: u32, model: &RateModel) -> Result<f64> {
    let rate = model.sample(rng)?;
    Ok((1.0 + rate).powi(-(t as i32)))
}

/// Arithmetic mean of the discount factors for `t = 0 .. horizon-1`.
///
/// The `t = 0` term contributes exactly 1; the averaging convention keeps it,
/// following the published formulation.
pub fn cert_equiv_factor<R: Rng + ?Sized>(
    rng: &mut R,
    horizon: u32,
    model: &RateModel,
) -> Result<f64> {
    if horizon == 0 {
        return Err(EstimatorError::ZeroHorizon);
    }

    let mut total = 0.0;
    for t in 0..horizon {
        total += discount_factor(rng, t, model)?;
    }
    Ok(total / f64::from(horizon))
}

/// Back-solve the constant annual rate reproducing `factor` over `horizon`
/// periods: `factor^(-1/horizon) - 1`.
///
/// The base is guarded so pathological rate models surface an error instead
/// of a NaN or complex-valued result.
pub fn equivalent_rate(factor: f64, horizon: u32) -> Result<f64> {
    if horizon == 0 {
        return Err(EstimatorError::ZeroHorizon);
    }
    if !factor.is_finite() || factor <= 0.0 {
        return Err(EstimatorError::NonPositiveFactor { factor });
    }
    Ok(factor.powf(-1.0 / f64::from(horizon)) - 1.0)
}

/// Certainty-equivalent annual rate for one horizon: average the sampled
/// factors, then invert the mean.
pub fn cert_equiv_rate<R: Rng + ?Sized>(
    rng: &mut R,
    horizon: u32,
    model: &RateModel,
) -> Result<f64> {
    let factor = cert_equiv_factor(rng, horizon, model)?;
    equivalent_rate(factor, horizon)
}

/// Evaluate a list of horizons, one averaging pass per horizon.
///
/// Each point's rate is derived from the same pass as its factor, so the
/// pair is internally consistent.
pub fn rate_curve<R: Rng + ?Sized>(
    rng: &mut R,
    horizons: &[u32],
    model: &RateModel,
) -> Result<Vec<HorizonPoint>> {
    let mut points = Vec::with_capacity(horizons.len());
    for &horizon in horizons {
        let factor = cert_equiv_factor(rng, horizon, model)?;
        let rate = equivalent_rate(factor, horizon)?;
        points.push(HorizonPoint {
            horizon,
            factor,
            rate,
        });
    }
    Ok(points)
}
