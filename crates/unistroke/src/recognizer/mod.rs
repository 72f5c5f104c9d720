//! Capture buffer plus the resample → normalize → match pipeline.
//!
//! This module wires the capture buffer, parameter validation, template
//! ranking, and the distance-to-score conversion together.

mod params;
mod pipeline;
mod result;

pub use params::{RecognizerParams, DEFAULT_RESAMPLE_COUNT, MAX_RESAMPLE_COUNT};
pub use pipeline::{Recognizer, RecognizerState};
pub use result::{score_from_distance, Recognition};
