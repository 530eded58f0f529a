//! Geometric shape element (walls, lines, arrows, circles).

use kurbo::Point;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    #[default]
    Rectangle,
    Circle,
    Line,
    Arrow,
}

impl ShapeKind {
    /// Whether the shape is drawn as an open polyline.
    pub fn is_linear(&self) -> bool {
        matches!(self, ShapeKind::Line | ShapeKind::Arrow)
    }
}

/// Shape-specific fields.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Shape {
    pub shape_type: ShapeKind,
    /// Flat `[x0, y0, x1, y1, ...]` list in element-local coordinates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<Vec<f64>>,
}

impl Shape {
    pub fn new(shape_type: ShapeKind) -> Self {
        Self {
            shape_type,
            points: None,
        }
    }

    /// Polyline vertices, falling back to the box diagonal.
    pub fn polyline(&self, width: f64, height: f64) -> Vec<Point> {
        match &self.points {
            Some(points) if points.len() >= 4 => points
                .chunks_exact(2)
                .map(|pair| Point::new(pair[0], pair[1]))
                .collect(),
            _ => vec![Point::ZERO, Point::new(width, height)],
        }
    }

    pub fn apply(&mut self, patch: &ShapePatch) {
        if let Some(kind) = patch.shape_type {
            self.shape_type = kind;
        }
        if let Some(points) = &patch.points {
            self.points = points.clone();
        }
    }
}

/// Partial update for shape fields.
///
/// `points: Some(None)` clears the point list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShapePatch {
    pub shape_type: Option<ShapeKind>,
    pub points: Option<Option<Vec<f64>>>,
}
