//! Name-keyed, insertion-ordered template storage and ranking.

use log::trace;
use nalgebra::Point2;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::builtins::{self, BUILTIN_TEMPLATES};
use crate::matcher::{best_match, SearchParams};
use crate::recognizer::{score_from_distance, Recognition, RecognizerParams};
use crate::{NormalizedStroke, RecognizeError};

/// A named reference stroke with exactly `resample_count` normalized points.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub name: String,
    pub stroke: NormalizedStroke,
}

/// Template collection with deterministic iteration order.
///
/// Templates iterate in first-insertion order. Re-adding an existing name
/// replaces the stroke in place, so the name keeps its original position.
#[derive(Clone, Debug)]
pub struct TemplateStore {
    resample_count: usize,
    templates: Vec<Template>,
    index: HashMap<String, usize>,
}

impl TemplateStore {
    /// Empty store accepting templates of `resample_count` points.
    pub fn new(resample_count: usize) -> Self {
        Self {
            resample_count,
            templates: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Store pre-loaded with the embedded built-in templates.
    ///
    /// Fails when `params` would normalize strokes differently from the
    /// embedded table.
    pub fn with_builtins(params: &RecognizerParams) -> Result<Self, RecognizeError> {
        params.validate()?;
        builtins::check_params(params)?;
        let mut store = Self::new(params.resample_count);
        for builtin in BUILTIN_TEMPLATES {
            store.add_template(builtin.name, builtin.to_points())?;
        }
        Ok(store)
    }

    /// Number of points every template must have.
    #[inline]
    pub fn resample_count(&self) -> usize {
        self.resample_count
    }

    /// Register or replace a template from already normalized points.
    pub fn add_template(
        &mut self,
        name: impl Into<String>,
        points: Vec<Point2<f64>>,
    ) -> Result<(), RecognizeError> {
        self.add_normalized(name, NormalizedStroke::from_normalized(points))
    }

    /// Register or replace a template from a [`NormalizedStroke`].
    pub fn add_normalized(
        &mut self,
        name: impl Into<String>,
        stroke: NormalizedStroke,
    ) -> Result<(), RecognizeError> {
        if stroke.len() != self.resample_count {
            return Err(RecognizeError::TemplateSizeMismatch {
                expected: self.resample_count,
                got: stroke.len(),
            });
        }

        let name = name.into();
        match self.index.get(&name) {
            Some(&slot) => self.templates[slot].stroke = stroke,
            None => {
                self.index.insert(name.clone(), self.templates.len());
                self.templates.push(Template { name, stroke });
            }
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Template> {
        self.index.get(name).map(|&slot| &self.templates[slot])
    }

    /// Templates in store order. The iterator is cheap to clone and restart.
    pub fn templates(&self) -> std::slice::Iter<'_, Template> {
        self.templates.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.templates.iter().map(|t| t.name.as_str())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Rank every template against `candidate` and return the closest one.
    ///
    /// Exact distance ties resolve to the template that comes first in store order.
    pub fn recognize(
        &self,
        candidate: &NormalizedStroke,
        search: &SearchParams,
        reference_size: f64,
    ) -> Result<Recognition, RecognizeError> {
        let mut best: Option<(&Template, f64, f64)> = None;
        for template in self.templates() {
            let m = best_match(candidate, &template.stroke, search)?;
            trace!(
                "template {:>12}: distance={:.5} angle={:+.4} iters={}",
                template.name,
                m.distance,
                m.angle,
                m.iterations
            );
            match best {
                Some((_, d, _)) if m.distance >= d => {}
                _ => best = Some((template, m.distance, m.angle)),
            }
        }

        let (template, distance, angle) = best.ok_or(RecognizeError::NoTemplates)?;
        Ok(Recognition {
            name: template.name.clone(),
            score: score_from_distance(distance, reference_size),
            distance,
            angle,
        })
    }
}
