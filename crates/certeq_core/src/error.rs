use std::fmt;

/// Errors surfaced by the estimator and the Monte Carlo summary layer.
#[derive(Debug, Clone, PartialEq)]
pub enum EstimatorError {
    InvalidRateBounds {
        min_rate: f64,
        max_rate: f64,
        reason: &'static str,
    },
    InvalidDistributionParameters {
        mean: f64,
        std_dev: f64,
        reason: &'static str,
    },
    /// A horizon of zero periods has no average to invert
    ZeroHorizon,
    /// The averaged factor cannot be raised to a fractional power
    NonPositiveFactor { factor: f64 },
    /// A Monte Carlo summary was requested over zero trials
    NoTrials,
}

impl fmt::Display for EstimatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EstimatorError::InvalidRateBounds {
                min_rate,
                max_rate,
                reason,
            } => {
                write!(
                    f,
                    "invalid rate bounds (min_rate={min_rate}, max_rate={max_rate}): {reason}"
                )
            }
            EstimatorError::InvalidDistributionParameters {
                mean,
                std_dev,
                reason,
            } => {
                write!(
                    f,
                    "invalid distribution parameters (mean={mean}, std_dev={std_dev}): {reason}"
                )
            }
            EstimatorError::ZeroHorizon => write!(f, "time horizon must be at least one period"),
            EstimatorError::NonPositiveFactor { factor } => {
                write!(
                    f,
                    "certainty-equivalent factor {factor} is not a positive finite number"
                )
            }
            EstimatorError::NoTrials => write!(f, "at least one trial is required"),
        }
    }
}

impl std::error::Error for EstimatorError {}

pub type Result<T> = std::result::Result<T, EstimatorError>;
