use serde::{Deserialize, Serialize};

use crate::normalize::validate_reference_size;
use crate::{NormalizeParams, RecognizeError, SearchParams};

/// Number of points strokes and templates are resampled to by default.
pub const DEFAULT_RESAMPLE_COUNT: usize = 32;

/// Upper bound on the resample count, which caps the per-template cost.
pub const MAX_RESAMPLE_COUNT: usize = 1024;

/// Configuration for the recognizer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecognizerParams {
    /// Points per resampled stroke; every template must have exactly this many.
    pub resample_count: usize,
    pub normalize: NormalizeParams,
    pub search: SearchParams,
}

impl Default for RecognizerParams {
    fn default() -> Self {
        Self {
            resample_count: DEFAULT_RESAMPLE_COUNT,
            normalize: NormalizeParams::default(),
            search: SearchParams::default(),
        }
    }
}

impl RecognizerParams {
    /// Check the resample count range, the reference size and the search bounds.
    pub fn validate(&self) -> Result<(), RecognizeError> {
        if !(2..=MAX_RESAMPLE_COUNT).contains(&self.resample_count) {
            return Err(RecognizeError::InvalidResampleCount {
                count: self.resample_count,
                max: MAX_RESAMPLE_COUNT,
            });
        }
        validate_reference_size(self.normalize.reference_size)?;
        self.search.validate()
    }
}
