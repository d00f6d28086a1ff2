//! Portable core of the sketchpad widget.
//!
//! Nothing in here touches the DOM. The browser crate implements [`Board`]
//! over two canvases and drives a [`Sketch`] from DOM events; tests drive the
//! same controller with an in-memory board.

use serde::{Deserialize, Serialize};

pub mod config;
pub mod error;
pub mod geometry;
pub mod history;
pub mod keys;
pub mod restore;
pub mod sketch;
pub mod tool;

pub use config::{debug_requested, ControlIds, WidgetConfig};
pub use error::ConfigError;
pub use geometry::{map_client_point, CanvasRect, Shape};
pub use history::{History, Restore};
pub use keys::Shortcut;
pub use restore::{RestoreGate, RestoreTicket};
pub use sketch::{Board, Sketch, StrokeState};
pub use tool::{PenMode, ShapeMode, ToolConfig};

/// A position in canvas pixel space.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

pub fn normalize_point(point: Point) -> Option<Point> {
    if !point.x.is_finite() || !point.y.is_finite() {
        return None;
    }
    Some(point)
}
