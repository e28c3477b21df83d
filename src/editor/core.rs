//! Editor state: canvas, history, current tool and drawing parameters.

use super::history::History;
use super::thickness::{ThicknessError, parse_thickness};
use super::tool::Tool;
use crate::draw::{Canvas, Color, ItemId};
use crate::util;
use log::debug;

/// Pointer drag state machine.
///
/// Tracks whether a drag is in progress and what it is producing. The tool
/// is captured when the drag starts, so switching tools mid-drag only
/// affects the next press.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawingState {
    /// Not dragging - waiting for a pointer press
    Idle,
    /// Dragging out a shape that is replaced on every pointer move
    Shaping {
        /// Tool the drag started with
        tool: Tool,
        /// X coordinate where the pointer went down
        start_x: i32,
        /// Y coordinate where the pointer went down
        start_y: i32,
        /// Item currently showing the tentative shape
        item: ItemId,
    },
    /// Freehand stroke; each move commits one segment
    Freehand {
        /// X coordinate of the previous pointer position
        last_x: i32,
        /// Y coordinate of the previous pointer position
        last_y: i32,
    },
}

/// Controller owning everything drawn plus the settings used for new items.
///
/// Every committed item has exactly one entry in the history; the tentative
/// shape of an in-progress drag is on the canvas but not in the history
/// until the pointer is released.
#[derive(Debug)]
pub struct Editor {
    pub(super) canvas: Canvas,
    pub(super) history: History,
    pub(super) tool: Option<Tool>,
    pub(super) current_color: Color,
    pub(super) current_thickness: u32,
    pub(super) state: DrawingState,
}

impl Editor {
    /// Creates an editor with an empty canvas and no tool selected.
    ///
    /// A zero thickness is raised to 1.
    pub fn new(width: u32, height: u32, color: Color, thickness: u32) -> Self {
        Self {
            canvas: Canvas::new(width, height),
            history: History::new(),
            tool: None,
            current_color: color,
            current_thickness: thickness.max(1),
            state: DrawingState::Idle,
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Currently selected tool, if any.
    pub fn tool(&self) -> Option<Tool> {
        self.tool
    }

    pub fn current_color(&self) -> Color {
        self.current_color
    }

    pub fn current_thickness(&self) -> u32 {
        self.current_thickness
    }

    pub fn state(&self) -> &DrawingState {
        &self.state
    }

    /// Item showing the shape being dragged out, if a drag is in progress.
    pub fn tentative(&self) -> Option<ItemId> {
        match self.state {
            DrawingState::Shaping { item, .. } => Some(item),
            _ => None,
        }
    }

    /// Selects the tool used by the next pointer press.
    pub fn set_tool(&mut self, tool: Tool) {
        if self.tool != Some(tool) {
            debug!("Tool changed to {}", tool.label());
        }
        self.tool = Some(tool);
    }

    /// Sets the color used for items created from now on.
    pub fn set_color(&mut self, color: Color) {
        debug!(
            "Color changed to {} ({})",
            color.to_hex(),
            util::color_to_name(&color)
        );
        self.current_color = color;
    }

    /// Applies thickness text typed by the user.
    ///
    /// On success the new thickness is used for items created from now on.
    /// Invalid text leaves the previous thickness in place.
    pub fn set_thickness_input(&mut self, text: &str) -> Result<u32, ThicknessError> {
        match parse_thickness(text) {
            Ok(thickness) => {
                if thickness != self.current_thickness {
                    debug!("Thickness changed to {thickness}");
                }
                self.current_thickness = thickness;
                Ok(thickness)
            }
            Err(err) => {
                debug!(
                    "Ignoring thickness input: {err}; keeping {}",
                    self.current_thickness
                );
                Err(err)
            }
        }
    }

    /// Removes the most recently committed item.
    ///
    /// Returns the removed handle, or `None` when there is nothing to undo.
    pub fn undo(&mut self) -> Option<ItemId> {
        let id = self.history.pop()?;
        if self.canvas.delete(id).is_none() {
            log::warn!("Undo popped {id}, which was no longer on the canvas");
        }
        debug!("Undo removed {id} ({} left)", self.history.len());
        Some(id)
    }
}
