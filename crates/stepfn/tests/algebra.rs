//! Integration tests for the public stepfn surface.
//!
//! These tests drive the crate the way a downstream user would: through
//! the prelude, the builders, and the operator sugar.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use stepfn::prelude::*;

#[test]
fn test_tariff_style_pipeline() {
    let tariff = StepFunction::new(vec![0.0, 100.0, f64::INFINITY], vec![5.0, 3.0]).unwrap();
    let surcharge = indicator(80.0, 120.0).unwrap();

    // Add a 1-unit surcharge on the band; the domain narrows to the tariff's.
    let total = &tariff + &surcharge;
    assert_eq!(total.domain(), tariff.domain());
    assert_eq!(total.breakpoints(), &[0.0, 80.0, 100.0, 120.0, f64::INFINITY]);
    assert_eq!(total.values(), &[5.0, 6.0, 4.0, 3.0]);

    // Billing a usage window integrates the restricted function.
    assert_eq!(total.integral_between(90.0, 110.0).unwrap(), 6.0 * 10.0 + 4.0 * 10.0);
}

#[test]
fn test_ecdf_mixture_stays_between_its_parts() {
    let mut rng = StdRng::seed_from_u64(7);
    let a: Vec<f64> = (0..64).map(|_| rng.random_range(-1.0..1.0)).collect();
    let b: Vec<f64> = (0..64).map(|_| rng.random_range(-0.5..1.5)).collect();

    let f = ecdf(&a).unwrap();
    let g = ecdf(&b).unwrap();
    let mixture = (&f + &g) * 0.5;

    let lower = f.try_mul(&g).unwrap(); // fg <= (f + g) / 2 for values in [0, 1]
    assert!(mixture.try_ge(&lower).unwrap());
    assert!(mixture.try_ge(&StepFunction::zero()).unwrap());
    assert!(StepFunction::one().try_ge(&mixture).unwrap());

    // Pointwise, the mixture is the average of the parts.
    for z in [-0.9, -0.3, 0.0, 0.4, 1.2] {
        let expected = (f.value_at(z).unwrap() + g.value_at(z).unwrap()) * 0.5;
        assert_eq!(mixture.value_at(z).unwrap(), expected);
    }
}

#[test]
fn test_kolmogorov_smirnov_distance() {
    let f = ecdf(&[1.0, 2.0, 3.0, 4.0]).unwrap();
    let g = ecdf(&[3.0, 4.0, 5.0, 6.0]).unwrap();

    let gap = (&f - &g).abs();
    let ks = gap.values().iter().fold(0.0, |m: f64, &v| m.max(v));
    // All of f's mass below 3 sits where g has none yet.
    assert_eq!(ks, 0.5);

    // Identical samples give distance zero.
    let same = (&f - &f).abs();
    assert_eq!(same, StepFunction::zero());
}

#[test]
fn test_mean_from_tail_integrals() {
    // E[X] = integral of (1 - F) over [0, inf) minus integral of F over
    // (-inf, 0); for the two-point sample {-1, 1} the mean is 0.
    let f = ecdf(&[-1.0, 1.0]).unwrap();
    let upper = (1.0 - &f).integral_between(0.0, f64::INFINITY).unwrap();
    let lower = f.integral_between(f64::NEG_INFINITY, 0.0).unwrap();
    assert_eq!(upper, 0.5);
    assert_eq!(lower, 0.5);
    assert_eq!(upper - lower, 0.0);
}

#[test]
fn test_errors_surface_through_the_facade() {
    let f = StepFunction::new(vec![0.0, 1.0], vec![1.0]).unwrap();
    let g = StepFunction::new(vec![5.0, 6.0], vec![1.0]).unwrap();
    match f.try_add(&g) {
        Err(StepFnError::DomainMismatch { left, right }) => {
            assert_eq!(left, Domain::new(0.0, 1.0));
            assert_eq!(right, Domain::new(5.0, 6.0));
        }
        other => panic!("expected DomainMismatch, got {:?}", other),
    }
}
