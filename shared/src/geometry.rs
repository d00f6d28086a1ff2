use std::f64::consts::PI;

use crate::{normalize_point, Point};

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

/// Half-angle between the two triangle legs and the anchor->cursor axis.
pub const TRIANGLE_SPREAD: f64 = PI / 9.0;

/// The rendered CSS box of a canvas element, as reported by
/// `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Maps a viewport position onto the canvas bitmap, compensating for CSS
/// scaling between the intrinsic `width`×`height` and the rendered box.
pub fn map_client_point(
    client_x: f64,
    client_y: f64,
    rect: CanvasRect,
    width: f64,
    height: f64,
) -> Option<Point> {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return None;
    }
    let scale_x = width / rect.width;
    let scale_y = height / rect.height;
    normalize_point(Point {
        x: (client_x - rect.left) * scale_x,
        y: (client_y - rect.top) * scale_y,
    })
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    /// Axis-aligned rectangle stroked from `origin`; sizes may be negative.
    Rectangle { origin: Point, width: f64, height: f64 },
    Ellipse {
        center: Point,
        radius_x: f64,
        radius_y: f64,
    },
    /// Isosceles triangle whose height axis points from `apex` to the cursor.
    Triangle { apex: Point, first: Point, second: Point },
}

impl Shape {
    pub fn rectangle(anchor: Point, current: Point) -> Self {
        Shape::Rectangle {
            origin: anchor,
            width: current.x - anchor.x,
            height: current.y - anchor.y,
        }
    }

    pub fn ellipse(anchor: Point, current: Point) -> Self {
        let width = current.x - anchor.x;
        let height = current.y - anchor.y;
        Shape::Ellipse {
            center: Point {
                x: anchor.x + width / 2.0,
                y: anchor.y + height / 2.0,
            },
            radius_x: (width / 2.0).abs(),
            radius_y: (height / 2.0).abs(),
        }
    }

    pub fn triangle(anchor: Point, current: Point) -> Self {
        let side = anchor.distance(current);
        let angle = (current.y - anchor.y).atan2(current.x - anchor.x);
        let vertex = |offset: f64| Point {
            x: anchor.x + side * (angle + offset).cos(),
            y: anchor.y + side * (angle + offset).sin(),
        };
        Shape::Triangle {
            apex: anchor,
            first: vertex(TRIANGLE_SPREAD),
            second: vertex(-TRIANGLE_SPREAD),
        }
    }
}
