//! Embedded built-in templates.
//!
//! The source of truth lives in `unistroke/data/builtin_templates.json`; the
//! build script turns it into the static table below. Templates were
//! normalized with the default [`NormalizeParams`](crate::NormalizeParams).

#![allow(clippy::unreadable_literal, clippy::excessive_precision)]

use nalgebra::Point2;

use crate::{RecognizeError, RecognizerParams, RotationMode};

/// One embedded template.
#[derive(Clone, Copy, Debug)]
pub struct BuiltinTemplate {
    pub name: &'static str,
    /// Normalized `[x, y]` pairs, `BUILTIN_RESAMPLE_COUNT` of them.
    pub points: &'static [[f64; 2]],
}

impl BuiltinTemplate {
    pub fn to_points(&self) -> Vec<Point2<f64>> {
        self.points.iter().map(|&[x, y]| Point2::new(x, y)).collect()
    }
}

include!(concat!(env!("OUT_DIR"), "/builtins.rs"));

/// Look up a built-in template by name.
pub fn builtin_template(name: &str) -> Option<BuiltinTemplate> {
    BUILTIN_TEMPLATES.iter().copied().find(|t| t.name == name)
}

/// Check that strokes processed with `params` are comparable to the embedded table.
pub fn check_params(params: &RecognizerParams) -> Result<(), RecognizeError> {
    if params.resample_count != BUILTIN_RESAMPLE_COUNT {
        return Err(RecognizeError::TemplateSizeMismatch {
            expected: params.resample_count,
            got: BUILTIN_RESAMPLE_COUNT,
        });
    }
    let normalize = &params.normalize;
    if normalize.reference_size != BUILTIN_REFERENCE_SIZE
        || normalize.rotation != RotationMode::RotateToZero
    {
        return Err(RecognizeError::IncompatibleBuiltins {
            required: BUILTIN_REFERENCE_SIZE,
            reference_size: normalize.reference_size,
            rotation: normalize.rotation,
        });
    }
    Ok(())
}

/// Names of all built-in templates, in registration order.
pub fn builtin_names() -> impl Iterator<Item = &'static str> {
    BUILTIN_TEMPLATES.iter().map(|t| t.name)
}
