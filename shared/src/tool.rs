use serde::{Deserialize, Serialize};

use crate::geometry::Shape;
use crate::Point;

#[cfg(test)]
#[path = "tool_test.rs"]
mod tool_test;

pub const DEFAULT_COLOR: &str = "#000000";
pub const DEFAULT_LINE_WIDTH: f64 = 5.0;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ShapeMode {
    #[default]
    Freehand,
    Rectangle,
    Ellipse,
    Triangle,
}

impl ShapeMode {
    /// Resolves the toolbar's shape toggles. Rectangle wins over ellipse,
    /// ellipse over triangle; nothing checked means freehand.
    pub fn from_flags(rectangle: bool, ellipse: bool, triangle: bool) -> Self {
        if rectangle {
            ShapeMode::Rectangle
        } else if ellipse {
            ShapeMode::Ellipse
        } else if triangle {
            ShapeMode::Triangle
        } else {
            ShapeMode::Freehand
        }
    }

    /// The preview shape spanning `anchor` to `current`, or `None` for
    /// freehand strokes.
    pub fn shape(self, anchor: Point, current: Point) -> Option<Shape> {
        match self {
            ShapeMode::Freehand => None,
            ShapeMode::Rectangle => Some(Shape::rectangle(anchor, current)),
            ShapeMode::Ellipse => Some(Shape::ellipse(anchor, current)),
            ShapeMode::Triangle => Some(Shape::triangle(anchor, current)),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PenMode {
    #[default]
    Pen,
    Eraser,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ToolConfig {
    pub color: String,
    pub line_width: f64,
    pub shape: ShapeMode,
    pub pen: PenMode,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR.to_string(),
            line_width: DEFAULT_LINE_WIDTH,
            shape: ShapeMode::Freehand,
            pen: PenMode::Pen,
        }
    }
}

impl ToolConfig {
    /// Color actually laid down: the eraser paints with the canvas background
    /// and leaves `color` alone.
    pub fn effective_color<'a>(&'a self, background: &'a str) -> &'a str {
        match self.pen {
            PenMode::Pen => &self.color,
            PenMode::Eraser => background,
        }
    }

    pub fn is_erasing(&self) -> bool {
        self.pen == PenMode::Eraser
    }
}

/// Parses a line-width control value. Values the canvas would ignore
/// (non-numeric, non-finite, zero or negative) yield `None`.
pub fn parse_line_width(value: &str) -> Option<f64> {
    let width = value.trim().parse::<f64>().ok()?;
    if width.is_finite() && width > 0.0 {
        Some(width)
    } else {
        None
    }
}
