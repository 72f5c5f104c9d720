//! Template-based single-stroke gesture recognition.
//!
//! A raw stroke goes through three stages:
//! - [`resample`] to a fixed number of points evenly spaced along the path,
//! - [`normalize`] to remove position, size and (optionally) orientation,
//! - [`best_distance`] against every template in a [`TemplateStore`], using a
//!   golden-section search over a bounded rotation window.
//!
//! [`Recognizer`] wraps the pipeline with a capture buffer that a touch or
//! mouse layer feeds point by point.
//!
//! ## Quickstart
//!
//! ```
//! use unistroke::{Recognizer, RecognizerParams};
//!
//! # fn main() -> Result<(), unistroke::RecognizeError> {
//! let mut rec = Recognizer::with_builtins(RecognizerParams::default())?;
//! for i in 0..48 {
//!     let t = std::f64::consts::TAU * i as f64 / 47.0;
//!     rec.add_point(200.0 + 60.0 * t.sin(), 150.0 - 60.0 * t.cos());
//! }
//! let result = rec.classify()?;
//! println!("{} ({:.2})", result.name, result.score);
//! # Ok(())
//! # }
//! ```
//!
//! Capture, rendering and result presentation are left to the caller.

pub mod builtins;
mod error;
pub mod io;
mod matcher;
mod normalize;
mod recognizer;
mod resample;
mod templates;

pub use unistroke_core as core;

pub use error::RecognizeError;
pub use matcher::{
    best_distance, best_match, distance_at_angle, path_distance, AngleMatch, SearchParams,
};
pub use normalize::{normalize, NormalizeParams, NormalizedStroke, RotationMode};
pub use recognizer::{
    score_from_distance, Recognition, Recognizer, RecognizerParams, RecognizerState,
    DEFAULT_RESAMPLE_COUNT, MAX_RESAMPLE_COUNT,
};
pub use resample::resample;
pub use templates::{Template, TemplateStore};
