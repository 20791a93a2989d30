//! Circular arc primitives.
//!
//! Every arc appends its end point to the outline, exactly like a straight
//! segment, and pushes a [`ShapeDescriptor`] for the circular segment that
//! lies between the chord and the arc. Unioning the outline polygon with
//! those segments yields the curved shape without ever sampling the arc.
//!
//! ## Outgoing direction
//! The two arc families leave different tangents behind:
//! - [`Workplane::sagitta_arc_to`] and [`Workplane::radius_arc_to`] store the
//!   **chord direction**. This differs from the true end tangent by half the
//!   swept angle.
//! - [`Workplane::tangent_arc_point_to`] stores the **true end tangent**, so
//!   consecutive tangent arcs join with G1 continuity.

use crate::errors::SketchError;
use crate::float_types::{Real, tolerance};
use crate::math::{cross, perp, sign, unit};
use crate::shape::ShapeDescriptor;
use crate::workplane::Workplane;
use nalgebra::Vector2;

impl Workplane {
    fn push_arc(
        mut self,
        endpoint: Vector2<Real>,
        descriptor: ShapeDescriptor,
        tangent: Vector2<Real>,
    ) -> Self {
        self.auxiliary_shapes.push(descriptor);
        self.tangent_normal = tangent;
        self.push_point(endpoint)
    }

    /// Unit chord direction from the pen to `endpoint`, with its length.
    fn chord_to(&self, endpoint: Vector2<Real>) -> Result<(Vector2<Real>, Real), SketchError> {
        let chord = endpoint - self.position;
        let length = chord.norm();
        if length <= tolerance() || !length.is_finite() {
            return Err(SketchError::DegenerateGeometry {
                from: self.position,
                to: endpoint,
            });
        }
        Ok((chord / length, length))
    }

    /// Arc to `endpoint` bulging `sagitta` away from its chord.
    ///
    /// With `c` the chord length and `l = c/2`, the supporting circle has
    /// radius `r = (s² + l²) / 2s` and its centre sits `r - s` behind the chord
    /// midpoint. The bulge is on the right-hand side of the direction of
    /// travel, so arcs drawn along a counter-clockwise outline bow outwards.
    /// A sagitta larger than `l` draws the major arc.
    ///
    /// The stored tangent is the chord direction, not the arc's end tangent.
    ///
    /// # Errors
    /// - [`SketchError::InvalidSagitta`] unless `sagitta` is positive and finite
    /// - [`SketchError::DegenerateGeometry`] when `endpoint` is the pen position
    pub fn sagitta_arc_to(
        self,
        sagitta: Real,
        endpoint: Vector2<Real>,
    ) -> Result<Self, SketchError> {
        if !(sagitta > 0.0 && sagitta.is_finite()) {
            return Err(SketchError::InvalidSagitta(sagitta));
        }
        let (direction, chord) = self.chord_to(endpoint)?;

        let half_chord = chord / 2.0;
        let radius = (sagitta * sagitta + half_chord * half_chord) / (2.0 * sagitta);
        let midpoint = (self.position + endpoint) / 2.0;
        // unit normal of the chord, pointing at the bulge
        let normal = -perp(direction);
        let center = midpoint - normal * (radius - sagitta);

        log::trace!(
            "sagitta arc {:?} -> {:?}: r = {}, centre = {:?}",
            self.position,
            endpoint,
            radius,
            center
        );

        let descriptor = ShapeDescriptor::new(radius, center, radius - sagitta, normal);
        Ok(self.push_arc(endpoint, descriptor, direction))
    }

    /// [`Workplane::sagitta_arc_to`] with `endpoint` relative to the pen.
    pub fn sagitta_arc(self, sagitta: Real, endpoint: Vector2<Real>) -> Result<Self, SketchError> {
        let endpoint = self.position + endpoint;
        self.sagitta_arc_to(sagitta, endpoint)
    }

    /// Arc of the given `radius` to `endpoint` (the minor arc).
    ///
    /// Derives the sagitta `s = r - √(r² - l²)` and delegates to
    /// [`Workplane::sagitta_arc_to`].
    ///
    /// # Errors
    /// - [`SketchError::InvalidRadius`] when `radius` is not positive, is
    ///   shorter than half the chord, or is so large that the sagitta
    ///   underflows to zero
    /// - [`SketchError::DegenerateGeometry`] when `endpoint` is the pen position
    pub fn radius_arc_to(self, radius: Real, endpoint: Vector2<Real>) -> Result<Self, SketchError> {
        let (_, chord) = self.chord_to(endpoint)?;
        let half_chord = chord / 2.0;
        if !(radius > 0.0 && radius.is_finite()) || radius + tolerance() < half_chord {
            return Err(SketchError::InvalidRadius { radius, half_chord });
        }
        // s = l² / (r + √(r² - l²)) written in q = l/r, so neither the
        // cancellation in r - √(r² - l²) nor r² can lose the result
        let q = half_chord / radius;
        let sagitta = half_chord * q / (1.0 + ((1.0 - q) * (1.0 + q)).max(0.0).sqrt());
        if !(sagitta > 0.0) {
            // the arc is flatter than the scalar type can represent
            return Err(SketchError::InvalidRadius { radius, half_chord });
        }
        self.sagitta_arc_to(sagitta, endpoint)
    }

    /// [`Workplane::radius_arc_to`] with `endpoint` relative to the pen.
    pub fn radius_arc(self, radius: Real, endpoint: Vector2<Real>) -> Result<Self, SketchError> {
        let endpoint = self.position + endpoint;
        self.radius_arc_to(radius, endpoint)
    }

    /// The unique arc that leaves the pen along the current tangent and ends
    /// at `endpoint`.
    ///
    /// With `s = T·n` the alignment between the incoming tangent `T` and the
    /// unit chord `n`, the diameter is `c / cos(asin(s))`. The centre lies one
    /// radius from the pen along `T` rotated a quarter turn towards the chord.
    /// The stored tangent is the exact direction of travel at `endpoint`, so
    /// tangent arcs can be chained.
    ///
    /// # Errors
    /// - [`SketchError::MissingTangentContext`] when no directional segment
    ///   has been drawn yet (`tangent_normal == (0, 0)`)
    /// - [`SketchError::DegenerateGeometry`] when `endpoint` is the pen position
    /// - [`SketchError::InvalidTangent`] when `endpoint` lies straight ahead of
    ///   or behind the pen (infinite radius)
    pub fn tangent_arc_point_to(self, endpoint: Vector2<Real>) -> Result<Self, SketchError> {
        let tangent = unit(self.tangent_normal).ok_or(SketchError::MissingTangentContext)?;
        let (direction, chord) = self.chord_to(endpoint)?;

        let mut alignment = tangent.dot(&direction);
        if !alignment.is_finite() || alignment.abs() > 1.0 + tolerance() {
            return Err(SketchError::InvalidTangent { alignment });
        }
        if alignment.abs() > 1.0 {
            log::warn!("clamping tangent alignment {} into [-1, 1]", alignment);
            alignment = alignment.clamp(-1.0, 1.0);
        }

        let spread = alignment.asin().cos();
        let turn = sign(cross(tangent, direction));
        if turn == 0.0 || spread <= tolerance() {
            return Err(SketchError::InvalidTangent { alignment });
        }

        let radius = chord / spread / 2.0;
        let center = self.position + perp(tangent) * (turn * radius);
        let outgoing = perp((endpoint - center) / radius) * turn;

        // the arc leaves the chord line on the side the tangent points to
        let mut normal = perp(direction);
        if normal.dot(&tangent) < 0.0 {
            normal = -normal;
        }
        let midpoint = (self.position + endpoint) / 2.0;
        let offset = (midpoint - center).dot(&normal);

        log::trace!(
            "tangent arc {:?} -> {:?}: r = {}, centre = {:?}, turn = {}",
            self.position,
            endpoint,
            radius,
            center,
            turn
        );

        let descriptor = ShapeDescriptor::new(radius, center, offset, normal);
        Ok(self.push_arc(endpoint, descriptor, outgoing))
    }

    /// [`Workplane::tangent_arc_point_to`] with `endpoint` relative to the pen.
    pub fn tangent_arc_point(self, endpoint: Vector2<Real>) -> Result<Self, SketchError> {
        let endpoint = self.position + endpoint;
        self.tangent_arc_point_to(endpoint)
    }
}
