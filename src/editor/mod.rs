//! Drawing controller.
//!
//! Owns the canvas, the undo history, the selected tool and the current
//! color/thickness, and turns pointer press/drag/release into items on the
//! canvas. Shapes are previewed by replacing a tentative item on every
//! pointer move and committed to the history on release.

mod core;
pub mod history;
mod pointer;
pub mod thickness;
pub mod tool;
#[cfg(test)]
mod tests;

pub use self::core::{DrawingState, Editor};
pub use history::History;
pub use thickness::{ThicknessError, parse_thickness};
pub use tool::Tool;
