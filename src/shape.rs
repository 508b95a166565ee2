//! Shape model: rectangle records and the insertion-ordered store.
//!
//! Shapes live in shape space: the camera offset is added at render time and
//! subtracted when pointer world coordinates are mapped back onto shapes. The
//! store keeps insertion order so hit-testing can honor first-match-wins and
//! newly committed shapes append at the end of the draw order.

#[cfg(test)]
#[path = "shape_test.rs"]
mod shape_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a shape.
pub type ShapeId = Uuid;

fn fresh_id() -> ShapeId {
    Uuid::new_v4()
}

/// An axis-aligned rectangle on the board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shape {
    /// Unique identifier; generated when absent from host input.
    #[serde(default = "fresh_id")]
    pub id: ShapeId,
    /// Left edge in shape coordinates.
    pub left: f64,
    /// Top edge in shape coordinates.
    pub top: f64,
    /// Width of the rectangle.
    pub width: f64,
    /// Height of the rectangle.
    pub height: f64,
}

impl Shape {
    /// Create a shape with a fresh id.
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { id: fresh_id(), left, top, width, height }
    }
}

/// Parse the host's construction input: a JSON array of shapes.
///
/// # Errors
///
/// Returns the underlying `serde_json` error when the payload is not a valid
/// shape array.
pub fn shapes_from_json(json: &str) -> Result<Vec<Shape>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Insertion-ordered store of all shapes on the board.
#[derive(Debug, Default)]
pub struct ShapeStore {
    shapes: Vec<Shape>,
}

impl ShapeStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    /// Build a store from an initial shape list, preserving its order.
    #[must_use]
    pub fn from_shapes(shapes: Vec<Shape>) -> Self {
        Self { shapes }
    }

    /// Append a shape at the end of the draw/scan order.
    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Look up a shape by id.
    #[must_use]
    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id == id)
    }

    /// Mutable lookup by id.
    pub fn get_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|s| s.id == id)
    }

    /// Iterate shapes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter()
    }

    /// Number of shapes in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns `true` if the store contains no shapes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
