//! Cubic Bézier splines and explicit poly-lines.
//!
//! Curves are flattened at a fixed parametric step; there is no adaptive
//! subdivision.

use crate::errors::SketchError;
use crate::float_types::{Real, flattening_step, tolerance};
use crate::math::unit;
use crate::workplane::Workplane;
use nalgebra::Vector2;

/// One cubic segment of a spline. Its start point is the previous segment's
/// `endpoint`, or the pen position for the first segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicSegment {
    pub control1: Vector2<Real>,
    pub control2: Vector2<Real>,
    pub endpoint: Vector2<Real>,
}

impl CubicSegment {
    pub const fn new(
        control1: Vector2<Real>,
        control2: Vector2<Real>,
        endpoint: Vector2<Real>,
    ) -> Self {
        CubicSegment {
            control1,
            control2,
            endpoint,
        }
    }

    fn translated(self, offset: Vector2<Real>) -> Self {
        CubicSegment {
            control1: self.control1 + offset,
            control2: self.control2 + offset,
            endpoint: self.endpoint + offset,
        }
    }
}

/// Sample the cubic Bézier
/// `B(t) = (1-t)³P0 + 3(1-t)²t P1 + 3(1-t)t² P2 + t³P3`
/// at `t = 0, step, 2·step, …` while `t < 1`.
///
/// The first sample is exactly `P0`. `t = 1` is **not** sampled; callers that
/// need the curve to reach `P3` append it themselves.
///
/// # Errors
/// [`SketchError::InvalidStep`] unless `step` is finite and at least
/// [`tolerance`], which bounds the sample count by `1 / tolerance()`.
pub fn bezier4(control: [Vector2<Real>; 4], step: Real) -> Result<Vec<Vector2<Real>>, SketchError> {
    if !(step >= tolerance() && step.is_finite()) {
        return Err(SketchError::InvalidStep(step));
    }
    let [p0, p1, p2, p3] = control;
    let count = (1.0 / step).ceil() as usize;

    // multiples of the step rather than an accumulator, so `t` does not drift
    Ok((0..count)
        .map(|i| i as Real * step)
        .take_while(|&t| t < 1.0)
        .map(|t| {
            let u = 1.0 - t;
            p0 * (u * u * u) + p1 * (3.0 * u * u * t) + p2 * (3.0 * u * t * t) + p3 * (t * t * t)
        })
        .collect())
}

/// Direction of the last non-degenerate edge of the path `start, drawn...`.
///
/// Only the newly `drawn` points and the point they continue from are
/// considered; earlier outline points belong to other primitives.
fn tail_direction(start: Vector2<Real>, drawn: &[Vector2<Real>]) -> Option<Vector2<Real>> {
    let (&last, rest) = drawn.split_last()?;
    rest.iter()
        .rev()
        .chain(std::iter::once(&start))
        .find_map(|&p| unit(last - p))
}

impl Workplane {
    /// Append a chain of cubic segments, flattened with the configured
    /// [`flattening_step`].
    pub fn spline_to(self, segments: &[CubicSegment]) -> Result<Self, SketchError> {
        self.spline_to_with_step(segments, flattening_step())
    }

    /// Append a chain of cubic segments flattened at `step`.
    ///
    /// Every segment contributes its samples for `t < 1` followed by its own
    /// end point, so the pen always lands on the final `endpoint`. Samples
    /// within [`tolerance`] of the point before them are dropped, so the
    /// flattened path has no zero-length edges; a segment end point that
    /// lands on the last kept sample replaces it.
    ///
    /// The stored tangent is the direction of the last flattened edge, an
    /// approximation of the analytic end tangent that improves as `step`
    /// shrinks. Only edges drawn by this spline count: a fully degenerate
    /// spline leaves the previous tangent untouched.
    ///
    /// # Errors
    /// - [`SketchError::InsufficientPoints`] for an empty segment list
    /// - [`SketchError::InvalidStep`] unless `step` is finite and at least
    ///   [`tolerance`]
    pub fn spline_to_with_step(
        mut self,
        segments: &[CubicSegment],
        step: Real,
    ) -> Result<Self, SketchError> {
        let Some(last) = segments.last() else {
            return Err(SketchError::InsufficientPoints {
                required: 1,
                supplied: 0,
            });
        };
        let final_point = last.endpoint;

        let pen = self.position;
        let coincides = |a: Vector2<Real>, b: Option<Vector2<Real>>| {
            b.is_some_and(|b| (a - b).norm() <= tolerance())
        };

        let mut start = pen;
        let mut previous = self.points.last().copied();
        let mut flattened: Vec<Vector2<Real>> = Vec::new();
        for segment in segments {
            let samples = bezier4(
                [start, segment.control1, segment.control2, segment.endpoint],
                step,
            )?;
            for sample in samples {
                if !coincides(sample, previous) {
                    flattened.push(sample);
                    previous = Some(sample);
                }
            }

            let end = segment.endpoint;
            if !coincides(end, previous) {
                flattened.push(end);
            } else if let Some(last) = flattened.last_mut() {
                *last = end;
            }
            previous = Some(end);
            start = end;
        }

        log::trace!(
            "spline of {} segments flattened into {} points (step {})",
            segments.len(),
            flattened.len(),
            step
        );

        if let Some(direction) = tail_direction(pen, &flattened) {
            self.tangent_normal = direction;
        }
        self.points.extend(flattened);
        self.position = final_point;
        Ok(self)
    }

    /// [`Workplane::spline_to`] with every control point relative to the pen.
    pub fn spline(self, segments: &[CubicSegment]) -> Result<Self, SketchError> {
        self.spline_with_step(segments, flattening_step())
    }

    /// [`Workplane::spline_to_with_step`] with every control point relative to the pen.
    pub fn spline_with_step(
        self,
        segments: &[CubicSegment],
        step: Real,
    ) -> Result<Self, SketchError> {
        let offset = self.position;
        let absolute: Vec<CubicSegment> =
            segments.iter().map(|s| s.translated(offset)).collect();
        self.spline_to_with_step(&absolute, step)
    }

    /// Append `points` verbatim and move the pen to the last one.
    /// The tangent is the direction of the final edge.
    ///
    /// # Errors
    /// - [`SketchError::InsufficientPoints`] for fewer than two points
    /// - [`SketchError::DegenerateGeometry`] when the last two points coincide
    pub fn polyline(mut self, points: &[Vector2<Real>]) -> Result<Self, SketchError> {
        let [.., before, last] = points else {
            return Err(SketchError::InsufficientPoints {
                required: 2,
                supplied: points.len(),
            });
        };
        let direction = unit(last - before).ok_or(SketchError::DegenerateGeometry {
            from: *before,
            to: *last,
        })?;

        self.points.extend_from_slice(points);
        self.position = *last;
        self.tangent_normal = direction;
        Ok(self)
    }
}
