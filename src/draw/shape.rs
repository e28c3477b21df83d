//! Shape definitions for the drawing canvas.

use super::color::Color;

/// Represents a drawable shape placed on the canvas.
///
/// Each variant is one drawing primitive with its defining coordinates. All
/// shapes carry their own color and stroke thickness so they can be rendered
/// independently of the editor's current settings.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// Filled dot centered on a point, diameter equal to the thickness
    Point {
        /// Center X coordinate
        x: i32,
        /// Center Y coordinate
        y: i32,
        /// Fill color
        color: Color,
        /// Dot diameter in pixels
        thick: u32,
    },
    /// Straight segment between two endpoints
    Line {
        /// Starting X coordinate
        x1: i32,
        /// Starting Y coordinate
        y1: i32,
        /// Ending X coordinate
        x2: i32,
        /// Ending Y coordinate
        y2: i32,
        /// Line color
        color: Color,
        /// Line thickness in pixels
        thick: u32,
    },
    /// Ellipse outline inscribed in the box spanned by two corners
    Circle {
        /// First corner X coordinate
        x1: i32,
        /// First corner Y coordinate
        y1: i32,
        /// Opposite corner X coordinate
        x2: i32,
        /// Opposite corner Y coordinate
        y2: i32,
        /// Outline color
        color: Color,
        /// Outline thickness in pixels
        thick: u32,
    },
    /// Rectangle outline spanned by two corners (sides need not be equal)
    Square {
        /// First corner X coordinate
        x1: i32,
        /// First corner Y coordinate
        y1: i32,
        /// Opposite corner X coordinate
        x2: i32,
        /// Opposite corner Y coordinate
        y2: i32,
        /// Outline color
        color: Color,
        /// Outline thickness in pixels
        thick: u32,
    },
    /// Isosceles triangle outline with its apex at the first point
    Triangle {
        /// Apex X coordinate
        x1: i32,
        /// Apex Y coordinate
        y1: i32,
        /// Drag corner X coordinate (sets the base width)
        x2: i32,
        /// Drag corner Y coordinate (sets the height)
        y2: i32,
        /// Outline color
        color: Color,
        /// Outline thickness in pixels
        thick: u32,
    },
}

impl Shape {
    /// Stroke color of the shape (fill color for points).
    pub fn color(&self) -> Color {
        match self {
            Shape::Point { color, .. }
            | Shape::Line { color, .. }
            | Shape::Circle { color, .. }
            | Shape::Square { color, .. }
            | Shape::Triangle { color, .. } => *color,
        }
    }

    /// Stroke thickness (dot diameter for points).
    pub fn thickness(&self) -> u32 {
        match self {
            Shape::Point { thick, .. }
            | Shape::Line { thick, .. }
            | Shape::Circle { thick, .. }
            | Shape::Square { thick, .. }
            | Shape::Triangle { thick, .. } => *thick,
        }
    }

    /// The two defining corners, normalized to (left, top, right, bottom).
    ///
    /// Returns `None` for points and triangles, which are not described by a box.
    pub fn corners(&self) -> Option<(i32, i32, i32, i32)> {
        match self {
            Shape::Circle { x1, y1, x2, y2, .. } | Shape::Square { x1, y1, x2, y2, .. } => Some((
                (*x1).min(*x2),
                (*y1).min(*y2),
                (*x1).max(*x2),
                (*y1).max(*y2),
            )),
            _ => None,
        }
    }

    /// Vertices of a triangle: apex first, then base-left and base-right.
    ///
    /// The base is `|x2 - x1|` wide, centered under the apex, and sits
    /// `|y2 - y1|` below it regardless of drag direction.
    pub fn triangle_vertices(&self) -> Option<[(f64, f64); 3]> {
        if let Shape::Triangle { x1, y1, x2, y2, .. } = self {
            let half_side = (x2 - x1).abs() as f64 / 2.0;
            let height = (y2 - y1).abs() as f64;
            let (ax, ay) = (*x1 as f64, *y1 as f64);
            Some([
                (ax, ay),
                (ax - half_side, ay + height),
                (ax + half_side, ay + height),
            ])
        } else {
            None
        }
    }
}
