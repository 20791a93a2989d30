//! A small, purely functional **sketch builder** for signed-distance-field rendering.
//!
//! A [`Workplane`] records a pen position, the outline points drawn so far, a
//! stack of circular segments contributed by arcs, and the direction of the
//! last edge. Primitives (lines, sagitta/radius/tangent arcs, Bézier splines)
//! each consume a workplane and return a new one; [`Workplane::close`] turns
//! the result into a [`Shape`]: an implicitly closed polygon unioned with
//! disk-minus-half-plane segments, ready to be serialized for a raymarching
//! shader through a [`ShapeStack`].
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod export;
pub mod float_types;
pub mod math;
pub mod shape;
pub mod traits;
pub mod workplane;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use errors::SketchError;
pub use export::{ShapeId, ShapeStack};
pub use shape::{Shape, ShapeDescriptor};
pub use traits::SignedDistance;
pub use workplane::Workplane;
pub use workplane::spline::{CubicSegment, bezier4};
