//! Collects finished shapes for the shader generator.
//!
//! A [`ShapeStack`] is the explicit context the shader assembler works
//! against: every registered [`Shape`] gets a sequential [`ShapeId`] that
//! indexes its point list in the uniform points buffer.

use crate::shape::{Shape, ShapeDescriptor};
use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// Index of a shape inside its [`ShapeStack`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ShapeId(pub u32);

/// One outline point as laid out in the points uniform.
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct GpuPoint {
    pub xy: [f32; 2],
}

impl GpuPoint {
    /// Little-endian byte order of both coordinates, whatever the host order.
    pub fn to_le(self) -> Self {
        GpuPoint {
            xy: self.xy.map(|c| f32::from_bits(c.to_bits().to_le())),
        }
    }
}

/// Size of the placeholder buffer bound when no shape has been registered.
pub const EMPTY_UNIFORM_SIZE: usize = 64;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ShapeStack {
    shapes: Vec<Shape>,
}

/// JSON payload: per-shape point lists plus the full shapes.
#[derive(Serialize)]
struct Payload<'a> {
    data: Vec<Vec<[f32; 2]>>,
    shapes: &'a [Shape],
}

impl ShapeStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `shape` and return its identifier.
    pub fn push(&mut self, shape: Shape) -> ShapeId {
        let id = ShapeId(self.shapes.len() as u32);
        log::debug!(
            "registered shape {:?} ({} points, {} auxiliary)",
            id,
            shape.points.len(),
            shape.auxiliary_shapes.len()
        );
        self.shapes.push(shape);
        id
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.get(id.0 as usize)
    }

    /// Auxiliary segments of shape `id`, in the order the arcs were drawn.
    pub fn descriptors(&self, id: ShapeId) -> Option<&[ShapeDescriptor]> {
        self.get(id).map(|s| s.auxiliary_shapes.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (ShapeId, &Shape)> {
        self.shapes
            .iter()
            .enumerate()
            .map(|(i, s)| (ShapeId(i as u32), s))
    }

    /// Per-shape outline points narrowed to `f32`, indexed by [`ShapeId`].
    pub fn data(&self) -> Vec<Vec<[f32; 2]>> {
        self.shapes
            .iter()
            .map(|s| s.points.iter().map(|p| [p.x as f32, p.y as f32]).collect())
            .collect()
    }

    /// Contents of the points uniform: every outline back to back as
    /// little-endian `f32` pairs. Each [`GpuPoint`] is 8 bytes, so every list
    /// starts on an 8-byte boundary. An empty stack yields
    /// [`EMPTY_UNIFORM_SIZE`] zero bytes so a buffer can still be bound.
    pub fn to_uniform_bytes(&self) -> Vec<u8> {
        let points: Vec<GpuPoint> = self
            .data()
            .into_iter()
            .flatten()
            .map(|xy| GpuPoint { xy }.to_le())
            .collect();
        if points.is_empty() {
            return vec![0u8; EMPTY_UNIFORM_SIZE];
        }
        bytemuck::cast_slice(&points).to_vec()
    }

    /// `{ "data": [[[x, y], ...], ...], "shapes": [...] }`
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&Payload {
            data: self.data(),
            shapes: &self.shapes,
        })
    }
}
