use crate::float_types::{Real, tolerance};
use nalgebra::Vector2;

/// Anything the renderer can evaluate as a 2D signed distance field.
///
/// Negative inside, positive outside, zero on the boundary.
pub trait SignedDistance {
    fn signed_distance(&self, p: &Vector2<Real>) -> Real;

    /// Returns true if `p` is inside or on the boundary (within tolerance).
    fn contains(&self, p: &Vector2<Real>) -> bool {
        self.signed_distance(p) <= tolerance()
    }

    /// Returns true if `p` lies on the boundary (within tolerance).
    fn is_on_boundary(&self, p: &Vector2<Real>) -> bool {
        self.signed_distance(p).abs() <= tolerance()
    }

    /// Sample the field on a `columns x rows` grid spanning `min..max`,
    /// row-major from `min`. Grids smaller than 2x2 return an empty list.
    fn sample_grid(
        &self,
        min: Vector2<Real>,
        max: Vector2<Real>,
        columns: usize,
        rows: usize,
    ) -> Vec<Real> {
        if columns < 2 || rows < 2 {
            return Vec::new();
        }
        let dx = (max.x - min.x) / (columns - 1) as Real;
        let dy = (max.y - min.y) / (rows - 1) as Real;

        let mut field = Vec::with_capacity(columns * rows);
        for r in 0..rows {
            for c in 0..columns {
                let p = Vector2::new(min.x + dx * c as Real, min.y + dy * r as Real);
                field.push(self.signed_distance(&p));
            }
        }
        field
    }
}
