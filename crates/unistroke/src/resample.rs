//! Arc-length resampling of raw strokes.

use log::warn;
use nalgebra::Point2;
use unistroke_core::{distance, path_length};

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{RecognizeError, MAX_RESAMPLE_COUNT};

/// Redistribute `stroke` into exactly `n` points evenly spaced along its path.
///
/// The first output point is the first input point. A stroke without any
/// movement (path length 0) yields its first point repeated `n` times.
/// Non-finite coordinates are rejected.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "trace", skip(stroke), fields(points = stroke.len()))
)]
pub fn resample(stroke: &[Point2<f64>], n: usize) -> Result<Vec<Point2<f64>>, RecognizeError> {
    if !(2..=MAX_RESAMPLE_COUNT).contains(&n) {
        return Err(RecognizeError::InvalidResampleCount {
            count: n,
            max: MAX_RESAMPLE_COUNT,
        });
    }
    if stroke.len() < 2 {
        return Err(RecognizeError::InsufficientPoints { got: stroke.len() });
    }

    if let Some(index) = stroke
        .iter()
        .position(|p| !(p.x.is_finite() && p.y.is_finite()))
    {
        return Err(RecognizeError::NonFiniteCoordinate { index });
    }

    let first = stroke[0];
    let total = path_length(stroke);
    if !total.is_finite() {
        return Err(RecognizeError::PathLengthOverflow(total));
    }
    if total <= 0.0 {
        return Ok(vec![first; n]);
    }

    let interval = total / (n - 1) as f64;
    let mut out = Vec::with_capacity(n);
    out.push(first);

    // `acc < interval` holds on every iteration, so a segment that closes the
    // interval always has positive length.
    let mut acc = 0.0;
    let mut prev = first;
    let mut i = 1;
    while i < stroke.len() && out.len() < n {
        let cur = stroke[i];
        let d = distance(&prev, &cur);
        if d > 0.0 && acc + d >= interval {
            let t = (interval - acc) / d;
            let q = prev + (cur - prev) * t;
            out.push(q);
            // The rest of the segment stays eligible for the next interval.
            prev = q;
            acc = 0.0;
        } else {
            acc += d;
            prev = cur;
            i += 1;
        }
    }

    // Floating-point accumulation usually leaves the last sample a rounding
    // error short of the end of the stroke.
    let missing = n - out.len();
    if missing > 1 {
        warn!(
            "resample fell {} points short of {}; padding with the last input point",
            missing, n
        );
    }
    let last = stroke[stroke.len() - 1];
    out.resize(n, last);

    Ok(out)
}
