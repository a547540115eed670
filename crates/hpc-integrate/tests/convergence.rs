//! Convergence behaviour of the Riemann-sum kernels

use approx::assert_relative_eq;
use hpc_core::scalar_sequential;
use hpc_integrate::{compute_pi, compute_pi_with, RiemannSum, SamplingRule};
use proptest::prelude::*;
use std::f64::consts::PI;

#[test]
fn test_pi_one_million_partitions() {
    let pi = compute_pi(1_000_000).unwrap();
    assert!((pi - PI).abs() < 1e-5);
    assert_relative_eq!(pi, 3.141594653588765, epsilon = 1e-9);
}

#[test]
fn test_error_shrinks_with_partitions() {
    let mut previous = f64::INFINITY;
    for partitions in [10, 100, 1_000, 10_000, 100_000] {
        let error = (compute_pi(partitions).unwrap() - PI).abs();
        assert!(
            error < previous,
            "error {error} at N={partitions} did not shrink from {previous}"
        );
        previous = error;
    }
}

#[test]
fn test_shifted_midpoint_first_order() {
    // The shifted rule overshoots by roughly 2 / N
    for partitions in [1_000u64, 10_000] {
        let error = compute_pi(partitions).unwrap() - PI;
        assert!(error > 0.0);
        assert_relative_eq!(error * partitions as f64, 2.0, epsilon = 0.01);
    }
}

#[test]
fn test_midpoint_second_order() {
    let coarse = compute_pi_with(scalar_sequential(), 100, SamplingRule::Midpoint).unwrap();
    let fine = compute_pi_with(scalar_sequential(), 1_000, SamplingRule::Midpoint).unwrap();
    let ratio = (coarse - PI).abs() / (fine - PI).abs();
    assert!(ratio > 90.0 && ratio < 110.0, "ratio {ratio}");
}

#[test]
fn test_general_integrand() {
    let riemann = RiemannSum::new(scalar_sequential(), 10_000)
        .unwrap()
        .with_rule(SamplingRule::Midpoint);
    let area = riemann.integrate(&f64::sin, 0.0, PI).unwrap();
    assert_relative_eq!(area, 2.0, epsilon = 1e-7);
}

#[cfg(feature = "parallel")]
#[test]
fn test_parallel_engine_large_partitions() {
    use hpc_core::scalar_parallel;
    use hpc_integrate::PiIntegrand;

    let riemann = RiemannSum::new(scalar_parallel(), 1_000_000).unwrap();
    let area = riemann.integrate(&PiIntegrand, 0.0, 1.0).unwrap();
    assert_relative_eq!(area, compute_pi(1_000_000).unwrap(), epsilon = 1e-10);
}

proptest! {
    #[test]
    fn prop_pi_estimate_bounded(partitions in 1u64..5_000) {
        let pi = compute_pi(partitions).unwrap();
        prop_assert!(pi.is_finite());
        // Every sample lies in (2, 4] so the sum does too
        prop_assert!(pi > PI);
        prop_assert!(pi <= 4.0);
    }

    #[test]
    fn prop_constant_integrand_exact(
        value in -100.0f64..100.0,
        lower in -10.0f64..10.0,
        width in 0.1f64..10.0,
        partitions in 1u64..500,
    ) {
        let riemann = RiemannSum::new(scalar_sequential(), partitions).unwrap();
        let area = riemann.integrate(&|_: f64| value, lower, lower + width).unwrap();
        prop_assert!((area - value * width).abs() <= 1e-9 * (1.0 + (value * width).abs()));
    }
}
