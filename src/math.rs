//! Small 2D helpers shared by the sketch primitives.

use crate::float_types::{Real, tolerance};
use nalgebra::Vector2;

/// Unit vector at `angle` radians, i.e. `cos θ + i·sin θ` read as a 2D vector.
#[inline]
pub fn cis(angle: Real) -> Vector2<Real> {
    let (sin, cos) = angle.sin_cos();
    Vector2::new(cos, sin)
}

/// Three-way sign: `-1`, `0` or `1`.
///
/// Unlike [`Real::signum`] this maps both zeros (and NaN) to `0`, so an
/// axis-aligned move of length zero leaves no direction behind.
#[inline]
pub fn sign(value: Real) -> Real {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Rotate `v` by +90° (counter-clockwise).
#[inline]
pub fn perp(v: Vector2<Real>) -> Vector2<Real> {
    Vector2::new(-v.y, v.x)
}

/// z-component of the 3D cross product of two planar vectors.
#[inline]
pub fn cross(a: Vector2<Real>, b: Vector2<Real>) -> Real {
    a.x * b.y - a.y * b.x
}

/// Normalized copy of `v`, or `None` when `v` is (numerically) zero.
#[inline]
pub fn unit(v: Vector2<Real>) -> Option<Vector2<Real>> {
    let len = v.norm();
    if len <= tolerance() || !len.is_finite() {
        None
    } else {
        Some(v / len)
    }
}

/// Multiply two vectors as complex numbers. Rotates `a` by the angle of `b`
/// and scales it by `|b|`.
#[inline]
pub fn complex_mul(a: Vector2<Real>, b: Vector2<Real>) -> Vector2<Real> {
    Vector2::new(a.x * b.x - a.y * b.y, a.x * b.y + a.y * b.x)
}

/// Rotate `v` by `angle` radians.
#[inline]
pub fn rotate(v: Vector2<Real>, angle: Real) -> Vector2<Real> {
    complex_mul(v, cis(angle))
}
