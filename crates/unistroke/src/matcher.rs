//! Rotation-invariant stroke distance via golden-section search.
//!
//! The search assumes the distance-vs-angle curve is unimodal inside the
//! window. That holds for strokes close to the template but is not
//! guaranteed, so the result is an approximation of the true minimum.

use nalgebra::Point2;
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_4;
use unistroke_core::{distance, rotate, GeometryError};

use crate::{NormalizedStroke, RecognizeError};

/// Hard cap on search iterations; 0.618^100 is far below any useful bracket.
const MAX_SEARCH_ITERATIONS: usize = 100;

/// Golden-section search settings.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    /// Half-width of the angle window `[-angle_range, angle_range]` (radians).
    pub angle_range: f64,
    /// Stop once the bracket is narrower than this (radians).
    pub threshold: f64,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            angle_range: FRAC_PI_4,
            threshold: 0.1,
        }
    }
}

impl SearchParams {
    /// Both bounds must be finite and non-negative.
    pub fn validate(&self) -> Result<(), RecognizeError> {
        let ok = |v: f64| v.is_finite() && v >= 0.0;
        if ok(self.angle_range) && ok(self.threshold) {
            Ok(())
        } else {
            Err(RecognizeError::InvalidSearchParams {
                angle_range: self.angle_range,
                threshold: self.threshold,
            })
        }
    }
}

/// Result of matching one candidate against one template.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AngleMatch {
    /// Mean point-to-point distance at the best angle found.
    pub distance: f64,
    /// Rotation applied to the candidate (radians).
    pub angle: f64,
    /// Bracket refinements performed.
    pub iterations: usize,
}

/// Mean point-to-point distance between two equally sized sequences.
pub fn path_distance(a: &[Point2<f64>], b: &[Point2<f64>]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    let sum: f64 = a.iter().zip(b).map(|(p, q)| distance(p, q)).sum();
    sum / a.len() as f64
}

/// [`path_distance`] after rotating `candidate` by `theta` about the origin.
pub fn distance_at_angle(candidate: &[Point2<f64>], template: &[Point2<f64>], theta: f64) -> f64 {
    path_distance(&rotate(candidate, theta), template)
}

/// Golden-section minimization of [`distance_at_angle`] over the window.
pub fn best_match(
    candidate: &NormalizedStroke,
    template: &NormalizedStroke,
    params: &SearchParams,
) -> Result<AngleMatch, RecognizeError> {
    params.validate()?;
    if candidate.len() != template.len() {
        return Err(RecognizeError::TemplateSizeMismatch {
            expected: template.len(),
            got: candidate.len(),
        });
    }
    if candidate.is_empty() {
        return Err(GeometryError::EmptyInput.into());
    }

    let cand = candidate.points.as_slice();
    let tmpl = template.points.as_slice();
    let phi = 0.5 * (5.0_f64.sqrt() - 1.0);

    let mut a = -params.angle_range;
    let mut b = params.angle_range;
    let mut x1 = phi * a + (1.0 - phi) * b;
    let mut f1 = distance_at_angle(cand, tmpl, x1);
    let mut x2 = (1.0 - phi) * a + phi * b;
    let mut f2 = distance_at_angle(cand, tmpl, x2);

    let mut iterations = 0;
    while (b - a).abs() > params.threshold && iterations < MAX_SEARCH_ITERATIONS {
        if f1 < f2 {
            b = x2;
            x2 = x1;
            f2 = f1;
            x1 = phi * a + (1.0 - phi) * b;
            f1 = distance_at_angle(cand, tmpl, x1);
        } else {
            a = x1;
            x1 = x2;
            f1 = f2;
            x2 = (1.0 - phi) * a + phi * b;
            f2 = distance_at_angle(cand, tmpl, x2);
        }
        iterations += 1;
    }

    let (distance, angle) = if f1 <= f2 { (f1, x1) } else { (f2, x2) };
    Ok(AngleMatch {
        distance,
        angle,
        iterations,
    })
}

/// Minimum mean distance between `candidate` and `template` over the angle window.
pub fn best_distance(
    candidate: &NormalizedStroke,
    template: &NormalizedStroke,
    params: &SearchParams,
) -> Result<f64, RecognizeError> {
    best_match(candidate, template, params).map(|m| m.distance)
}
