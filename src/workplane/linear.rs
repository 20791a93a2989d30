//! Straight segments and pen moves.
//!
//! All of these are total over finite inputs and never fail.

use crate::float_types::Real;
use crate::math::{cis, sign};
use crate::workplane::Workplane;
use nalgebra::Vector2;

impl Workplane {
    /// Straight segment by `delta` from the current position.
    /// The tangent is left as it was.
    pub fn line(self, delta: Vector2<Real>) -> Self {
        let p = self.position + delta;
        self.push_point(p)
    }

    /// Straight segment to the absolute point `point`.
    /// The tangent is left as it was.
    pub fn line_to(self, point: Vector2<Real>) -> Self {
        self.push_point(point)
    }

    /// Horizontal segment of signed length `dx`; tangent becomes `(sign(dx), 0)`.
    pub fn h_line(self, dx: Real) -> Self {
        let p = Vector2::new(self.position.x + dx, self.position.y);
        let mut wp = self.push_point(p);
        wp.tangent_normal = Vector2::new(sign(dx), 0.0);
        wp
    }

    /// Horizontal segment to the absolute abscissa `x`.
    ///
    /// The tangent becomes `(sign(x), 0)`: it follows the sign of the target
    /// coordinate, not of the distance travelled.
    pub fn h_line_to(self, x: Real) -> Self {
        let p = Vector2::new(x, self.position.y);
        let mut wp = self.push_point(p);
        wp.tangent_normal = Vector2::new(sign(x), 0.0);
        wp
    }

    /// Vertical segment of signed length `dy`; tangent becomes `(0, sign(dy))`.
    pub fn v_line(self, dy: Real) -> Self {
        let p = Vector2::new(self.position.x, self.position.y + dy);
        let mut wp = self.push_point(p);
        wp.tangent_normal = Vector2::new(0.0, sign(dy));
        wp
    }

    /// Vertical segment to the absolute ordinate `y`; tangent becomes `(0, sign(y))`.
    pub fn v_line_to(self, y: Real) -> Self {
        let p = Vector2::new(self.position.x, y);
        let mut wp = self.push_point(p);
        wp.tangent_normal = Vector2::new(0.0, sign(y));
        wp
    }

    /// Segment of length `distance` heading `angle` radians from +X.
    pub fn polar_line(self, distance: Real, angle: Real) -> Self {
        let direction = cis(angle);
        let p = self.position + direction * distance;
        let mut wp = self.push_point(p);
        wp.tangent_normal = direction;
        wp
    }

    /// Segment to the point at polar coordinates `(distance, angle)` about the origin.
    pub fn polar_line_to(self, distance: Real, angle: Real) -> Self {
        let direction = cis(angle);
        let mut wp = self.push_point(direction * distance);
        wp.tangent_normal = direction;
        wp
    }

    /// Shift the pen by `delta` without drawing.
    ///
    /// The outline stays a single point sequence: the next drawn point is
    /// still joined to the last drawn one when the polygon is built. No new
    /// sub-path is started.
    pub fn move_by(mut self, delta: Vector2<Real>) -> Self {
        self.position += delta;
        self
    }

    /// Put the pen at `point` without drawing.
    pub fn move_to(mut self, point: Vector2<Real>) -> Self {
        self.position = point;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_length_h_line_clears_direction() {
        let wp = Workplane::new().h_line(0.0);
        assert_eq!(wp.tangent_normal, Vector2::zeros());
        assert_eq!(wp.points.len(), 2);
    }

    #[test]
    fn line_keeps_previous_tangent() {
        let wp = Workplane::new().v_line(-1.0).line(Vector2::new(3.0, 3.0));
        assert_eq!(wp.tangent_normal, Vector2::new(0.0, -1.0));
        assert_eq!(wp.position, Vector2::new(3.0, 2.0));
    }
}
