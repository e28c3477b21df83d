//! Drawing tool selection.

use crate::draw::{Color, Shape};

/// Drawing tool selection.
///
/// The active tool determines what the pointer creates on the canvas. Tools
/// are chosen from the toolbar; the editor starts with no tool selected, in
/// which case pointer input on the canvas does nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// Single dot placed where the pointer goes down
    Point,
    /// Straight line - between start and end points
    Line,
    /// Ellipse outline inscribed in the dragged box
    Circle,
    /// Rectangle outline - from corner to corner
    Square,
    /// Isosceles triangle with its apex at the press point
    Triangle,
    /// Freehand drawing - follows pointer path as connected segments
    Freehand,
}

impl Tool {
    /// All tools in toolbar order.
    pub const ALL: [Tool; 6] = [
        Tool::Point,
        Tool::Line,
        Tool::Circle,
        Tool::Square,
        Tool::Triangle,
        Tool::Freehand,
    ];

    /// Button label shown in the toolbar.
    pub fn label(self) -> &'static str {
        match self {
            Tool::Point => "Point",
            Tool::Line => "Line",
            Tool::Circle => "Circle",
            Tool::Square => "Square",
            Tool::Triangle => "Triangle",
            Tool::Freehand => "Freehand",
        }
    }

    /// Builds the shape this tool produces for the given anchor and current point.
    ///
    /// Points only use the anchor. Freehand produces the line segment between
    /// the previous and the current pointer position.
    pub fn shape(self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color, thick: u32) -> Shape {
        match self {
            Tool::Point => Shape::Point {
                x: x1,
                y: y1,
                color,
                thick,
            },
            Tool::Line | Tool::Freehand => Shape::Line {
                x1,
                y1,
                x2,
                y2,
                color,
                thick,
            },
            Tool::Circle => Shape::Circle {
                x1,
                y1,
                x2,
                y2,
                color,
                thick,
            },
            Tool::Square => Shape::Square {
                x1,
                y1,
                x2,
                y2,
                color,
                thick,
            },
            Tool::Triangle => Shape::Triangle {
                x1,
                y1,
                x2,
                y2,
                color,
                thick,
            },
        }
    }
}
