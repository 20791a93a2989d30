//! The immutable pen state threaded through every sketch primitive.
//!
//! A [`Workplane`] is created once with [`Workplane::new`] and then consumed by
//! a chain of primitives, each of which returns a fresh `Workplane`:
//!
//! ```
//! use nalgebra::Vector2;
//! use pathplane::Workplane;
//!
//! # fn main() -> Result<(), pathplane::errors::SketchError> {
//! let shape = Workplane::new()
//!     .line(Vector2::new(2.0, 0.0))
//!     .v_line(1.0)
//!     .sagitta_arc_to(0.25, Vector2::new(0.0, 1.0))?
//!     .close();
//! assert_eq!(shape.points.len(), 4);
//! # Ok(())
//! # }
//! ```
//!
//! Nothing is shared between workplanes, so cloning one forks the sketch.

pub mod arc;
pub mod linear;
pub mod spline;

use crate::float_types::Real;
use crate::shape::{Shape, ShapeDescriptor};
use nalgebra::Vector2;

/// Cursor state for a sketch under construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Workplane {
    /// Current pen location. Equals the last entry of `points` after any
    /// drawing primitive; `move_by`/`move_to` break that on purpose.
    pub position: Vector2<Real>,
    /// Polygon outline in insertion (winding) order.
    pub points: Vec<Vector2<Real>>,
    /// Circular segments contributed by the arc primitives.
    pub auxiliary_shapes: Vec<ShapeDescriptor>,
    /// Direction of the most recently drawn edge, `(0, 0)` when unknown.
    pub tangent_normal: Vector2<Real>,
}

impl Default for Workplane {
    fn default() -> Self {
        Self::new()
    }
}

impl Workplane {
    /// The identity workplane: pen at the origin, a single origin point,
    /// no auxiliary shapes and no tangent.
    pub fn new() -> Self {
        Workplane {
            position: Vector2::zeros(),
            points: vec![Vector2::zeros()],
            auxiliary_shapes: Vec::new(),
            tangent_normal: Vector2::zeros(),
        }
    }

    /// Move the pen to `point`, appending it to the outline.
    pub(crate) fn push_point(mut self, point: Vector2<Real>) -> Self {
        self.position = point;
        self.points.push(point);
        self
    }

    /// Terminal operation: the implicitly closed outline unioned with every
    /// auxiliary shape collected so far.
    ///
    /// Degenerate outlines (fewer than three points, zero area) are passed
    /// through unchanged; this layer does not validate them.
    pub fn close(self) -> Shape {
        log::debug!(
            "closing workplane: {} points, {} auxiliary shapes",
            self.points.len(),
            self.auxiliary_shapes.len()
        );
        Shape {
            points: self.points,
            auxiliary_shapes: self.auxiliary_shapes,
        }
    }
}
