//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use nalgebra::Vector2;
use pathplane::float_types::Real;

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Component-wise comparison of two vectors.
pub fn vec_approx_eq(a: Vector2<Real>, b: Vector2<Real>, eps: Real) -> bool {
    (a - b).norm() < eps
}

/// Shorthand for `Vector2::new`.
pub fn v(x: Real, y: Real) -> Vector2<Real> {
    Vector2::new(x, y)
}
