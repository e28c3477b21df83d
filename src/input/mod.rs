//! Input handling and routing.
//!
//! This module translates backend keyboard and mouse events into editor
//! operations. Clicks are routed to the color picker dialog when it is open,
//! otherwise to the toolbar or the canvas; key presses edit the thickness
//! field or dismiss the dialog.

pub mod events;
pub mod state;

// Re-export commonly used types at module level
pub use events::{Key, MouseButton};
pub use state::{InputState, ThicknessField};
