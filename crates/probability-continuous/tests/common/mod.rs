//! Shared utilities for integration tests

#![allow(dead_code)]

pub use approx::assert_relative_eq;

use probability_continuous::Laplace;

pub const EPSILON: f64 = 1e-10;

/// Parameter pairs covering narrow, wide and off-centre distributions
pub fn parameter_grid() -> Vec<(f64, f64)> {
    vec![
        (0.0, 1.0),
        (2.0, 3.0),
        (-7.5, 0.25),
        (100.0, 1e-3),
        (-1e4, 50.0),
        (1e-9, 1e3),
    ]
}

/// Scales at the edges of the representable range, from subnormal to `f64::MAX`
pub fn extreme_parameter_grid() -> Vec<(f64, f64)> {
    vec![
        (0.0, 1e-310),
        (0.0, f64::MIN_POSITIVE),
        (-1.0, f64::MIN_POSITIVE),
        (0.0, f64::MAX),
        (1e300, f64::MAX / 2.0),
    ]
}

pub fn laplace_grid() -> Vec<Laplace> {
    parameter_grid()
        .into_iter()
        .map(|(location, scale)| Laplace::new(location, scale).unwrap())
        .collect()
}

pub fn extreme_laplace_grid() -> Vec<Laplace> {
    extreme_parameter_grid()
        .into_iter()
        .map(|(location, scale)| Laplace::new(location, scale).unwrap())
        .collect()
}

/// Query points at fixed multiples of the scale around the location
pub fn query_points(laplace: &Laplace) -> Vec<f64> {
    [-20.0, -5.0, -1.0, -0.5, -1e-3, 0.0, 1e-3, 0.5, 1.0, 5.0, 20.0]
        .iter()
        .map(|z| laplace.location() + z * laplace.scale())
        .collect()
}

/// Special floating-point values every query must reject
pub fn non_finite_values() -> Vec<f64> {
    vec![f64::NAN, f64::INFINITY, f64::NEG_INFINITY]
}
