use unistroke_core::GeometryError;

use crate::RotationMode;

/// Errors returned by the resample / normalize / match pipeline.
///
/// All of them describe bad input rather than transient conditions; retrying
/// with the same stroke gives the same error.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RecognizeError {
    #[error("stroke needs at least 2 points to resample, got {got}")]
    InsufficientPoints { got: usize },
    #[error("stroke point {index} has a non-finite coordinate")]
    NonFiniteCoordinate { index: usize },
    #[error("stroke path length overflows to {0}")]
    PathLengthOverflow(f64),
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    #[error("degenerate stroke: bounding box {width} x {height} cannot be scaled to a square")]
    DegenerateStroke { width: f64, height: f64 },
    #[error("expected {expected} points, got {got}")]
    TemplateSizeMismatch { expected: usize, got: usize },
    #[error("no templates registered")]
    NoTemplates,
    #[error("resample count must be in 2..={max}, got {count}")]
    InvalidResampleCount { count: usize, max: usize },
    #[error("reference size must be finite and > 0, got {0}")]
    InvalidReferenceSize(f64),
    #[error("search window and threshold must be finite and >= 0, got angle_range={angle_range} threshold={threshold}")]
    InvalidSearchParams { angle_range: f64, threshold: f64 },
    #[error("built-in templates need reference size {required} with rotate-to-zero, got {reference_size} with {rotation:?}")]
    IncompatibleBuiltins {
        required: f64,
        reference_size: f64,
        rotation: RotationMode,
    },
}
