//! Geometry primitives for single-stroke gesture recognition.
//!
//! This crate is intentionally small and purely geometric. It knows nothing
//! about templates or matching; see the `unistroke` crate for the recognizer.

mod geometry;
mod logger;

pub use geometry::{
    bounding_box, centroid, distance, path_length, rotate, scale, translate, BoundingBox,
    GeometryError,
};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
