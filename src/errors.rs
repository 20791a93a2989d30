//! Sketch construction errors

use crate::float_types::Real;
use nalgebra::Vector2;

/// Everything a sketch primitive can reject.
///
/// These are input errors, not transient failures: each primitive reports
/// them synchronously and leaves the previous `Workplane` untouched, so the
/// caller may retry with a different primitive.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SketchError {
    /// (DegenerateGeometry) A direction was required between two coincident points
    #[error("(DegenerateGeometry) zero-length chord between {from:?} and {to:?}")]
    DegenerateGeometry {
        from: Vector2<Real>,
        to: Vector2<Real>,
    },
    /// (InvalidSagitta) The arc bulge is zero, negative or not finite
    #[error("(InvalidSagitta) sagitta must be positive and finite, got {0}")]
    InvalidSagitta(Real),
    /// (InvalidRadius) No circle of this radius passes through both chord endpoints
    #[error("(InvalidRadius) radius {radius} is smaller than half the chord ({half_chord})")]
    InvalidRadius { radius: Real, half_chord: Real },
    /// (InvalidTangent) The tangent/chord alignment leaves no computable arc
    #[error("(InvalidTangent) tangent/chord alignment {alignment} admits no tangent arc")]
    InvalidTangent { alignment: Real },
    /// (MissingTangentContext) A tangent arc was requested before any directional edge
    #[error("(MissingTangentContext) tangent arc requires a preceding directional segment")]
    MissingTangentContext,
    /// (InvalidStep) The Bézier flattening step is not finite or is below the tolerance
    #[error("(InvalidStep) flattening step must be finite and at least the tolerance, got {0}")]
    InvalidStep(Real),
    /// (InsufficientPoints) A primitive received fewer points than it needs
    #[error("(InsufficientPoints) expected at least {required} points, got {supplied}")]
    InsufficientPoints { required: usize, supplied: usize },
}
