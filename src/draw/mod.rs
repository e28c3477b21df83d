//! Rendering primitives and shape definitions (Cairo-based).
//!
//! This module defines the core drawing types:
//! - [`Color`]: RGBA color representation with predefined colors and the picker palette
//! - [`Shape`]: The drawable primitives (point, line, circle, square, triangle)
//! - [`Canvas`]: Item store holding every shape currently on screen
//! - Rendering functions for Cairo-based output

pub mod canvas;
pub mod color;
pub mod render;
pub mod shape;

// Re-export commonly used types at module level
pub use canvas::{Canvas, ItemId};
pub use color::{Color, ColorParseError};
pub use render::{render_canvas, render_shape};
pub use shape::Shape;

pub use color::{BLACK, PALETTE, WHITE};
