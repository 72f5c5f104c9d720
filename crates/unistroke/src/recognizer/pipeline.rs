use log::debug;
use nalgebra::Point2;

#[cfg(feature = "tracing")]
use tracing::instrument;

use super::{Recognition, RecognizerParams};
use crate::{normalize, resample, NormalizedStroke, RecognizeError, TemplateStore};

/// Capture state of a [`Recognizer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecognizerState {
    /// No buffered points.
    Idle,
    /// At least one point buffered since the last reset or classification.
    Capturing,
}

/// Single-stroke recognizer: a capture buffer plus a template store.
///
/// One instance tracks one gesture at a time. Classify several gestures
/// concurrently by giving each its own instance, or by sharing one
/// [`TemplateStore`] read-only and calling [`TemplateStore::recognize`].
#[derive(Clone, Debug)]
pub struct Recognizer {
    params: RecognizerParams,
    store: TemplateStore,
    buffer: Vec<Point2<f64>>,
}

impl Recognizer {
    /// Recognizer with an empty template store.
    pub fn new(params: RecognizerParams) -> Result<Self, RecognizeError> {
        params.validate()?;
        let store = TemplateStore::new(params.resample_count);
        Ok(Self {
            params,
            store,
            buffer: Vec::new(),
        })
    }

    /// Recognizer over an existing store. The store must use the same resample count.
    pub fn with_store(
        params: RecognizerParams,
        store: TemplateStore,
    ) -> Result<Self, RecognizeError> {
        params.validate()?;
        if store.resample_count() != params.resample_count {
            return Err(RecognizeError::TemplateSizeMismatch {
                expected: params.resample_count,
                got: store.resample_count(),
            });
        }
        Ok(Self {
            params,
            store,
            buffer: Vec::new(),
        })
    }

    /// Recognizer pre-loaded with the embedded built-in templates.
    pub fn with_builtins(params: RecognizerParams) -> Result<Self, RecognizeError> {
        let store = TemplateStore::with_builtins(&params)?;
        Self::with_store(params, store)
    }

    #[inline]
    pub fn params(&self) -> &RecognizerParams {
        &self.params
    }

    #[inline]
    pub fn store(&self) -> &TemplateStore {
        &self.store
    }

    /// Register or replace a template from already normalized points.
    pub fn add_template(
        &mut self,
        name: impl Into<String>,
        points: Vec<Point2<f64>>,
    ) -> Result<(), RecognizeError> {
        self.store.add_template(name, points)
    }

    /// Register or replace a template from a normalized stroke, e.g. the output of [`Self::serialize`].
    pub fn add_normalized(
        &mut self,
        name: impl Into<String>,
        stroke: NormalizedStroke,
    ) -> Result<(), RecognizeError> {
        self.store.add_normalized(name, stroke)
    }

    /// Append one captured coordinate to the in-progress stroke.
    pub fn add_point(&mut self, x: f64, y: f64) {
        self.buffer.push(Point2::new(x, y));
    }

    /// Discard the in-progress stroke.
    pub fn reset(&mut self) {
        self.buffer.clear();
    }

    pub fn state(&self) -> RecognizerState {
        if self.buffer.is_empty() {
            RecognizerState::Idle
        } else {
            RecognizerState::Capturing
        }
    }

    /// Points captured since the last reset.
    #[inline]
    pub fn points(&self) -> &[Point2<f64>] {
        &self.buffer
    }

    /// Classify the captured stroke and clear the buffer.
    ///
    /// The buffer is consumed even when classification fails.
    pub fn classify(&mut self) -> Result<Recognition, RecognizeError> {
        let stroke = std::mem::take(&mut self.buffer);
        self.classify_stroke(&stroke)
    }

    /// Canonical form of the captured stroke, for template authoring. Clears the buffer.
    pub fn serialize(&mut self) -> Result<NormalizedStroke, RecognizeError> {
        let stroke = std::mem::take(&mut self.buffer);
        self.serialize_stroke(&stroke)
    }

    /// Classify a complete stroke without touching the capture buffer.
    #[cfg_attr(
        feature = "tracing",
        instrument(
            level = "debug",
            skip(self, stroke),
            fields(points = stroke.len(), templates = self.store.len())
        )
    )]
    pub fn classify_stroke(&self, stroke: &[Point2<f64>]) -> Result<Recognition, RecognizeError> {
        if self.store.is_empty() {
            return Err(RecognizeError::NoTemplates);
        }
        let candidate = self.serialize_stroke(stroke)?;
        let recognition = self.store.recognize(
            &candidate,
            &self.params.search,
            self.params.normalize.reference_size,
        )?;
        debug!(
            "classified {} raw points against {} templates: {} (score={:.3}, distance={:.4})",
            stroke.len(),
            self.store.len(),
            recognition.name,
            recognition.score,
            recognition.distance
        );
        Ok(recognition)
    }

    /// Resample and normalize a complete stroke without touching the capture buffer.
    pub fn serialize_stroke(
        &self,
        stroke: &[Point2<f64>],
    ) -> Result<NormalizedStroke, RecognizeError> {
        let resampled = resample(stroke, self.params.resample_count)?;
        normalize(&resampled, &self.params.normalize)
    }
}
