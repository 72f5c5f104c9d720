use serde::{Deserialize, Serialize};

/// Best template for a classified stroke.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recognition {
    pub name: String,
    /// `1 - distance / half_diagonal` of the reference square. Close to 1 for a
    /// near-exact match; at or below 0 when nothing meaningful matched. This is
    /// a bounded heuristic, not a probability.
    pub score: f64,
    /// Mean point-to-point distance at the best rotation.
    pub distance: f64,
    /// Rotation (radians) applied to the stroke to reach `distance`.
    pub angle: f64,
}

impl Recognition {
    /// Whether the score reaches `min_score`.
    #[inline]
    pub fn is_match(&self, min_score: f64) -> bool {
        self.score >= min_score
    }
}

/// Convert a mean distance into a score relative to the reference square.
pub fn score_from_distance(distance: f64, reference_size: f64) -> f64 {
    let half_diagonal = 0.5 * (reference_size * reference_size * 2.0).sqrt();
    1.0 - distance / half_diagonal
}
