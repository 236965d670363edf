//! Tests for rate bounds validation and rate model sampling.

use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::error::EstimatorError;
use crate::model::{RateBounds, RateModel};

#[test]
fn default_bounds_are_the_baseline_interval() {
    let bounds = RateBounds::default();
    assert_eq!(bounds.min_rate, 0.01);
    assert_eq!(bounds.max_rate, 0.1);
}

#[test]
fn new_rejects_inverted_bounds() {
    let err = RateBounds::new(0.1, 0.01).unwrap_err();
    assert!(matches!(err, EstimatorError::InvalidRateBounds { .. }));

    // Empty interval is rejected as well
    let err = RateBounds::new(0.05, 0.05).unwrap_err();
    assert!(matches!(err, EstimatorError::InvalidRateBounds { .. }));
}

#[test]
fn new_rejects_non_discountable_rates() {
    let err = RateBounds::new(-1.5, 0.1).unwrap_err();
    assert!(matches!(err, EstimatorError::InvalidRateBounds { .. }));

    let err = RateBounds::new(-1.0, 0.1).unwrap_err();
    assert!(matches!(err, EstimatorError::InvalidRateBounds { .. }));
}

#[test]
fn new_rejects_non_finite_bounds() {
    assert!(RateBounds::new(f64::NAN, 0.1).is_err());
    assert!(RateBounds::new(0.01, f64::INFINITY).is_err());
}

#[test]
fn sample_revalidates_hand_built_bounds() {
    // Field access allows building an invalid interval; sampling must not
    // let it through.
    let bounds = RateBounds {
        min_rate: 0.2,
        max_rate: 0.1,
    };
    let mut rng = SmallRng::seed_from_u64(1);
    assert!(bounds.sample(&mut rng).is_err());
}

#[test]
fn uniform_samples_stay_inside_the_interval() {
    let bounds = RateBounds::new(0.01, 0.1).unwrap();
    let mut rng = SmallRng::seed_from_u64(7);

    for _ in 0..1_000 {
        let rate = bounds.sample(&mut rng).unwrap();
        assert!(
            (0.01..=0.1).contains(&rate),
            "uniform draw {rate} escaped [0.01, 0.1]"
        );
    }
}

#[test]
fn fixed_model_always_returns_its_rate() {
    let model = RateModel::Fixed { rate: 0.04 };
    let mut rng = SmallRng::seed_from_u64(3);

    for _ in 0..10 {
        assert_eq!(model.sample(&mut rng).unwrap(), 0.04);
    }
}

#[test]
fn normal_model_rejects_bad_std_dev() {
    let model = RateModel::Normal {
        mean: 0.05,
        std_dev: -0.01,
    };
    let mut rng = SmallRng::seed_from_u64(3);
    let err = model.sample(&mut rng).unwrap_err();
    assert!(matches!(
        err,
        EstimatorError::InvalidDistributionParameters { .. }
    ));
}

#[test]
fn default_model_is_uniform_over_default_bounds() {
    assert_eq!(
        RateModel::default(),
        RateModel::Uniform(RateBounds::default())
    );
}
