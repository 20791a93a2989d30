//! Finished shapes: the outline polygon plus its circular segments.
//!
//! This is the hand-off format for the renderer. The outline becomes a
//! point array evaluated by the polygon distance function and each
//! [`ShapeDescriptor`] becomes a `circle - half_plane` primitive; the results
//! are combined with `min` (union).

use crate::float_types::{Real, tolerance};
use crate::math::{perp, rotate};
use crate::traits::SignedDistance;
use geo::{Area, BooleanOps, LineString, MultiPolygon, Polygon as GeoPolygon};
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// A disk with a half-plane removed: the circular segment cut from the disk
/// by a chord.
///
/// The removed half-plane is `dot(p - center, half_plane_normal) <= half_plane_offset`,
/// so the segment lies on the side the normal points to. A positive offset
/// keeps a minor segment, a negative one keeps a major segment.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShapeDescriptor {
    pub radius: Real,
    pub center: Vector2<Real>,
    pub half_plane_offset: Real,
    /// Unit normal of the chord, pointing towards the arc.
    pub half_plane_normal: Vector2<Real>,
}

impl ShapeDescriptor {
    pub const fn new(
        radius: Real,
        center: Vector2<Real>,
        half_plane_offset: Real,
        half_plane_normal: Vector2<Real>,
    ) -> Self {
        ShapeDescriptor {
            radius,
            center,
            half_plane_offset,
            half_plane_normal,
        }
    }

    /// Height of the arc above its chord.
    pub fn sagitta(&self) -> Real {
        self.radius - self.half_plane_offset
    }

    /// Half of the angle the arc subtends at the centre.
    pub fn half_sweep(&self) -> Real {
        (self.half_plane_offset / self.radius).clamp(-1.0, 1.0).acos()
    }

    /// Where the chord meets the circle, in counter-clockwise order about the
    /// centre starting before the arc.
    pub fn chord_endpoints(&self) -> [Vector2<Real>; 2] {
        let n = self.half_plane_normal;
        let foot = self.center + n * self.half_plane_offset;
        let half = (self.radius * self.radius - self.half_plane_offset * self.half_plane_offset)
            .max(0.0)
            .sqrt();
        [foot - perp(n) * half, foot + perp(n) * half]
    }

    /// Tessellate the segment: `segments` chords along the arc, closed by the
    /// original chord. Fewer than two segments yield an empty polygon.
    pub fn to_polygon(&self, segments: usize) -> GeoPolygon<Real> {
        if segments < 2 {
            return GeoPolygon::new(LineString::new(vec![]), vec![]);
        }
        let phi = self.half_sweep();
        let radial = self.half_plane_normal * self.radius;
        let coords: Vec<(Real, Real)> = (0..=segments)
            .map(|i| {
                let theta = -phi + 2.0 * phi * (i as Real) / (segments as Real);
                let p = self.center + rotate(radial, theta);
                (p.x, p.y)
            })
            .collect();
        GeoPolygon::new(LineString::from(coords), vec![])
    }
}

impl SignedDistance for ShapeDescriptor {
    /// `max(disk, -half_plane)`: exact outside the clipping line's influence,
    /// a bound elsewhere, which is all sphere tracing needs.
    fn signed_distance(&self, p: &Vector2<Real>) -> Real {
        let local = p - self.center;
        let disk = local.norm() - self.radius;
        let kept_side = self.half_plane_offset - local.dot(&self.half_plane_normal);
        disk.max(kept_side)
    }
}

/// The result of [`Workplane::close`](crate::Workplane::close).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    /// Outline in winding order; the last point joins the first implicitly.
    pub points: Vec<Vector2<Real>>,
    pub auxiliary_shapes: Vec<ShapeDescriptor>,
}

impl Shape {
    /// Distance to the outline polygon alone, negative inside (even-odd rule).
    pub fn polygon_signed_distance(&self, p: &Vector2<Real>) -> Real {
        let vertices = &self.points;
        let Some(first) = vertices.first() else {
            return Real::INFINITY;
        };

        let mut d = (p - first).norm_squared();
        let mut s: Real = 1.0;
        let mut j = vertices.len() - 1;
        for (i, vi) in vertices.iter().enumerate() {
            let vj = vertices[j];
            let e = vj - vi;
            let w = p - vi;
            let len2 = e.norm_squared();
            let h = if len2 > 0.0 {
                (w.dot(&e) / len2).clamp(0.0, 1.0)
            } else {
                0.0
            };
            d = d.min((w - e * h).norm_squared());

            // crossing test for a ray towards +x
            let c = [p.y >= vi.y, p.y < vj.y, e.x * w.y > e.y * w.x];
            if c.iter().all(|&b| b) || c.iter().all(|&b| !b) {
                s = -s;
            }
            j = i;
        }
        s * d.sqrt()
    }

    /// The outline as a `geo` polygon. `geo` closes the ring.
    pub fn to_geo_polygon(&self) -> GeoPolygon<Real> {
        let coords: Vec<(Real, Real)> = self.points.iter().map(|p| (p.x, p.y)).collect();
        GeoPolygon::new(LineString::from(coords), vec![])
    }

    /// Outline unioned with every auxiliary segment, each tessellated with
    /// `segments` chords.
    ///
    /// Outlines with fewer than three points contribute nothing.
    pub fn to_multi_polygon(&self, segments: usize) -> MultiPolygon<Real> {
        let mut acc = if self.points.len() >= 3 {
            MultiPolygon::new(vec![self.to_geo_polygon()])
        } else {
            MultiPolygon::new(vec![])
        };
        for descriptor in &self.auxiliary_shapes {
            let cap = descriptor.to_polygon(segments);
            if cap.exterior().0.is_empty() {
                continue;
            }
            acc = acc.union(&MultiPolygon::new(vec![cap]));
        }
        log::debug!(
            "tessellated shape into {} polygons ({} auxiliary segments)",
            acc.0.len(),
            self.auxiliary_shapes.len()
        );
        acc
    }

    /// Area of [`Shape::to_multi_polygon`].
    pub fn area(&self, segments: usize) -> Real {
        self.to_multi_polygon(segments).unsigned_area()
    }

    /// True when the outline has no extent (all points collinear).
    pub fn is_degenerate(&self) -> bool {
        self.to_geo_polygon().unsigned_area() <= tolerance()
    }
}

impl SignedDistance for Shape {
    fn signed_distance(&self, p: &Vector2<Real>) -> Real {
        self.auxiliary_shapes
            .iter()
            .map(|s| s.signed_distance(p))
            .fold(self.polygon_signed_distance(p), Real::min)
    }
}
