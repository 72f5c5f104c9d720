//! JSON configuration, template-set, and stroke file helpers.

use nalgebra::Point2;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::{
    NormalizedStroke, RecognizeError, Recognizer, RecognizerParams, TemplateStore,
    DEFAULT_RESAMPLE_COUNT,
};

#[derive(thiserror::Error, Debug)]
pub enum IoError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Recognize(#[from] RecognizeError),
}

/// One template as stored on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateRecord {
    pub name: String,
    pub points: Vec<[f64; 2]>,
}

impl TemplateRecord {
    pub fn from_stroke(name: impl Into<String>, stroke: &NormalizedStroke) -> Self {
        Self {
            name: name.into(),
            points: stroke.to_pairs(),
        }
    }

    pub fn to_points(&self) -> Vec<Point2<f64>> {
        pairs_to_points(&self.points)
    }
}

fn default_resample_count() -> usize {
    DEFAULT_RESAMPLE_COUNT
}

/// A named collection of normalized templates, in registration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateSet {
    #[serde(default = "default_resample_count")]
    pub resample_count: usize,
    #[serde(default)]
    pub templates: Vec<TemplateRecord>,
}

impl TemplateSet {
    pub fn new(resample_count: usize) -> Self {
        Self {
            resample_count,
            templates: Vec::new(),
        }
    }

    /// Load a JSON template set from disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, IoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this template set to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), IoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Insert or replace a record by name, keeping the position of an existing name.
    pub fn upsert(&mut self, record: TemplateRecord) {
        match self.templates.iter_mut().find(|t| t.name == record.name) {
            Some(existing) => *existing = record,
            None => self.templates.push(record),
        }
    }

    /// Validate every record into a fresh store.
    pub fn to_store(&self) -> Result<TemplateStore, RecognizeError> {
        let mut store = TemplateStore::new(self.resample_count);
        self.add_to(&mut store)?;
        Ok(store)
    }

    /// Add every record to an existing store (upsert semantics).
    pub fn add_to(&self, store: &mut TemplateStore) -> Result<(), RecognizeError> {
        for record in &self.templates {
            store.add_template(record.name.clone(), record.to_points())?;
        }
        Ok(())
    }

    pub fn from_store(store: &TemplateStore) -> Self {
        Self {
            resample_count: store.resample_count(),
            templates: store
                .templates()
                .map(|t| TemplateRecord::from_stroke(t.name.clone(), &t.stroke))
                .collect(),
        }
    }
}

fn default_builtin_templates() -> bool {
    true
}

/// Recognizer configuration document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognizerConfig {
    #[serde(default)]
    pub params: RecognizerParams,
    /// Extra template set loaded after the built-ins.
    #[serde(default)]
    pub templates_path: Option<String>,
    #[serde(default = "default_builtin_templates")]
    pub builtin_templates: bool,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            params: RecognizerParams::default(),
            templates_path: None,
            builtin_templates: default_builtin_templates(),
        }
    }
}

impl RecognizerConfig {
    /// Load a JSON config from disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, IoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this config to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), IoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Build the template store described by this config.
    pub fn build_store(&self) -> Result<TemplateStore, IoError> {
        let count = self.params.resample_count;
        let mut store = if self.builtin_templates {
            TemplateStore::with_builtins(&self.params)?
        } else {
            TemplateStore::new(count)
        };
        if let Some(path) = &self.templates_path {
            let set = TemplateSet::load_json(path)?;
            if set.resample_count != count {
                return Err(RecognizeError::TemplateSizeMismatch {
                    expected: count,
                    got: set.resample_count,
                }
                .into());
            }
            set.add_to(&mut store)?;
        }
        Ok(store)
    }

    /// Build a recognizer from this config.
    pub fn build_recognizer(&self) -> Result<Recognizer, IoError> {
        let store = self.build_store()?;
        Ok(Recognizer::with_store(self.params.clone(), store)?)
    }
}

/// Load a raw stroke stored as a JSON array of `[x, y]` pairs.
pub fn load_stroke_json(path: impl AsRef<Path>) -> Result<Vec<Point2<f64>>, IoError> {
    let raw = fs::read_to_string(path)?;
    let pairs: Vec<[f64; 2]> = serde_json::from_str(&raw)?;
    Ok(pairs_to_points(&pairs))
}

/// Write a raw stroke as a JSON array of `[x, y]` pairs.
pub fn write_stroke_json(path: impl AsRef<Path>, stroke: &[Point2<f64>]) -> Result<(), IoError> {
    let pairs: Vec<[f64; 2]> = stroke.iter().map(|p| [p.x, p.y]).collect();
    fs::write(path, serde_json::to_string(&pairs)?)?;
    Ok(())
}

fn pairs_to_points(pairs: &[[f64; 2]]) -> Vec<Point2<f64>> {
    pairs.iter().map(|&[x, y]| Point2::new(x, y)).collect()
}
