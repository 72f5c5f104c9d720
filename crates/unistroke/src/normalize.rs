//! Translation / rotation / scale normalization of resampled strokes.

use nalgebra::Point2;
use serde::{Deserialize, Serialize};
use unistroke_core::{bounding_box, centroid, rotate, scale, translate};

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::RecognizeError;

/// Relative extent below which an axis counts as collapsed.
const DEGENERATE_REL_EPS: f64 = 1e-9;

/// How the indicative angle is treated during normalization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RotationMode {
    /// Rotate the stroke so that its first point lies on the positive x axis.
    #[default]
    RotateToZero,
    /// Keep the drawn orientation; only the bounded angle search absorbs rotation.
    Preserve,
}

/// Normalization settings.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeParams {
    /// Side of the reference square both axes are scaled to.
    pub reference_size: f64,
    pub rotation: RotationMode,
}

impl Default for NormalizeParams {
    fn default() -> Self {
        Self {
            reference_size: 2.0,
            rotation: RotationMode::RotateToZero,
        }
    }
}

/// A stroke in canonical form: centroid at the origin, each axis spanning
/// `reference_size`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NormalizedStroke {
    pub points: Vec<Point2<f64>>,
    /// Angle (radians) removed by indicative-angle correction; 0 when the
    /// rotation step was skipped or the points were supplied pre-normalized.
    #[serde(default)]
    pub indicative_angle: f64,
}

impl NormalizedStroke {
    /// Wrap points that are already normalized (e.g. template data).
    pub fn from_normalized(points: Vec<Point2<f64>>) -> Self {
        Self {
            points,
            indicative_angle: 0.0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Plain `[x, y]` pairs, the interchange form used by template files.
    pub fn to_pairs(&self) -> Vec<[f64; 2]> {
        self.points.iter().map(|p| [p.x, p.y]).collect()
    }
}

/// Normalize a resampled stroke.
///
/// Steps: translate the centroid to the origin, optionally rotate the first
/// point onto the x axis, scale each axis to `reference_size`, re-center.
/// Collapsed axes fail with [`RecognizeError::DegenerateStroke`].
#[cfg_attr(
    feature = "tracing",
    instrument(level = "trace", skip(points, params), fields(points = points.len()))
)]
pub fn normalize(
    points: &[Point2<f64>],
    params: &NormalizeParams,
) -> Result<NormalizedStroke, RecognizeError> {
    validate_reference_size(params.reference_size)?;

    let c = centroid(points)?;
    let mut pts = translate(points, -c.x, -c.y);

    let mut indicative_angle = 0.0;
    if params.rotation == RotationMode::RotateToZero {
        let p0 = pts[0];
        indicative_angle = p0.y.atan2(p0.x);
        pts = rotate(&pts, -indicative_angle);
    }

    let bbox = bounding_box(&pts)?;
    let (width, height) = (bbox.width(), bbox.height());
    let tol = DEGENERATE_REL_EPS * width.max(height);
    // Negated comparisons also reject NaN extents.
    if !(width > tol) || !(height > tol) {
        return Err(RecognizeError::DegenerateStroke { width, height });
    }

    let size = params.reference_size;
    let pts = scale(&pts, size / width, size / height);

    let c = centroid(&pts)?;
    let points = translate(&pts, -c.x, -c.y);

    Ok(NormalizedStroke {
        points,
        indicative_angle,
    })
}

pub(crate) fn validate_reference_size(size: f64) -> Result<(), RecognizeError> {
    if size.is_finite() && size > 0.0 {
        Ok(())
    } else {
        Err(RecognizeError::InvalidReferenceSize(size))
    }
}
