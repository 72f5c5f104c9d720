//! Pure geometry on ordered 2D point sequences.
//!
//! Every transform returns a new `Vec`; inputs are never mutated.

use nalgebra::{Point2, Rotation2, Vector2};
use serde::{Deserialize, Serialize};

/// Errors produced by geometry helpers that need at least one point.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    #[error("operation requires at least one point")]
    EmptyInput,
}

/// Axis-aligned extents of a point sequence.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: Point2<f64>,
    pub max: Point2<f64>,
}

impl BoundingBox {
    /// Extent along x. Zero for vertical or single-point input.
    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Extent along y. Zero for horizontal or single-point input.
    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn center(&self) -> Point2<f64> {
        nalgebra::center(&self.min, &self.max)
    }
}

/// Arithmetic mean of all points.
pub fn centroid(points: &[Point2<f64>]) -> Result<Point2<f64>, GeometryError> {
    if points.is_empty() {
        return Err(GeometryError::EmptyInput);
    }
    let sum = points
        .iter()
        .fold(Vector2::zeros(), |acc: Vector2<f64>, p| acc + p.coords);
    Ok(Point2::from(sum / points.len() as f64))
}

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: &Point2<f64>, b: &Point2<f64>) -> f64 {
    nalgebra::distance(a, b)
}

/// Sum of distances between consecutive points; 0 for fewer than two points.
pub fn path_length(points: &[Point2<f64>]) -> f64 {
    points.windows(2).map(|w| distance(&w[0], &w[1])).sum()
}

pub fn bounding_box(points: &[Point2<f64>]) -> Result<BoundingBox, GeometryError> {
    let first = points.first().ok_or(GeometryError::EmptyInput)?;
    let mut min = *first;
    let mut max = *first;
    for p in &points[1..] {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }
    Ok(BoundingBox { min, max })
}

/// Rotate every point by `theta` radians (counter-clockwise) about the origin.
pub fn rotate(points: &[Point2<f64>], theta: f64) -> Vec<Point2<f64>> {
    let r = Rotation2::new(theta);
    points.iter().map(|p| r * *p).collect()
}

pub fn translate(points: &[Point2<f64>], dx: f64, dy: f64) -> Vec<Point2<f64>> {
    let t = Vector2::new(dx, dy);
    points.iter().map(|p| *p + t).collect()
}

/// Scale about the origin, independently per axis.
pub fn scale(points: &[Point2<f64>], sx: f64, sy: f64) -> Vec<Point2<f64>> {
    points
        .iter()
        .map(|p| Point2::new(p.x * sx, p.y * sy))
        .collect()
}
