// Our Real scalar type:
#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

use core::str::FromStr;
use std::sync::OnceLock;

/// Lazily-initialized tolerance used across the crate.
/// Defaults depend on precision (`f32` vs `f64`), but can be overridden:
///  1) **Build-time**: set env var `PATHPLANE_TOLERANCE` (e.g. `PATHPLANE_TOLERANCE=1e-6 cargo build`)
///  2) **Runtime**: call [`set_tolerance`] once before building any sketch
static TOLERANCE_CELL: OnceLock<Real> = OnceLock::new();

/// Parametric step used when flattening Bézier splines into line segments.
static FLATTENING_STEP_CELL: OnceLock<Real> = OnceLock::new();

#[inline]
const fn default_tolerance() -> Real {
    #[cfg(feature = "f32")]
    {
        1e-4
    }
    #[cfg(feature = "f64")]
    {
        1e-6
    }
}

/// Default parametric step for spline flattening (20 samples per cubic segment).
pub const DEFAULT_FLATTENING_STEP: Real = 0.05;

/// Returns the current tolerance value.
/// If not set yet, it tries `PATHPLANE_TOLERANCE` (parsed as the active `Real`) and
/// falls back to a sensible default.
pub fn tolerance() -> Real {
    *TOLERANCE_CELL.get_or_init(|| {
        // Compile-time env if provided, inherited by dependencies
        if let Some(environment_variable) = option_env!("PATHPLANE_TOLERANCE") {
            if let Ok(value) = Real::from_str(environment_variable) {
                return value.max(Real::EPSILON);
            }
        }
        default_tolerance()
    })
}

/// Set the tolerance programmatically once (subsequent calls are ignored).
/// Call near program start: `pathplane::float_types::set_tolerance(1e-6);`
pub fn set_tolerance(value: Real) {
    let _ = TOLERANCE_CELL.set(value.max(Real::EPSILON));
}

/// Returns the parametric step used by `spline_to`/`spline`.
/// Reads `PATHPLANE_FLATTENING_STEP` at build time, else [`DEFAULT_FLATTENING_STEP`].
pub fn flattening_step() -> Real {
    *FLATTENING_STEP_CELL.get_or_init(|| {
        if let Some(environment_variable) = option_env!("PATHPLANE_FLATTENING_STEP") {
            if let Ok(value) = Real::from_str(environment_variable) {
                if value >= tolerance() && value.is_finite() {
                    return value;
                }
            }
        }
        DEFAULT_FLATTENING_STEP
    })
}

/// Set the flattening step once. Steps below [`tolerance`] or non-finite steps are ignored.
pub fn set_flattening_step(value: Real) {
    if value >= tolerance() && value.is_finite() {
        let _ = FLATTENING_STEP_CELL.set(value);
    }
}

// Pi
/// Archimedes' constant (π)
#[cfg(feature = "f32")]
pub const PI: Real = core::f32::consts::PI;
/// Archimedes' constant (π)
#[cfg(feature = "f64")]
pub const PI: Real = core::f64::consts::PI;

// Frac Pi 2
/// π/2
#[cfg(feature = "f32")]
pub const FRAC_PI_2: Real = core::f32::consts::FRAC_PI_2;
/// π/2
#[cfg(feature = "f64")]
pub const FRAC_PI_2: Real = core::f64::consts::FRAC_PI_2;

// Tau
/// The full circle constant (τ)
#[cfg(feature = "f32")]
pub const TAU: Real = core::f32::consts::TAU;
/// The full circle constant (τ)
#[cfg(feature = "f64")]
pub const TAU: Real = core::f64::consts::TAU;
