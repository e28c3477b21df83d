use log::debug;

use super::{DrawingState, Editor, Tool};

impl Editor {
    /// Processes a pointer press on the canvas.
    ///
    /// # Arguments
    /// * `x` - Pointer X coordinate in canvas space
    /// * `y` - Pointer Y coordinate in canvas space
    ///
    /// # Behavior
    /// - No tool selected: nothing happens
    /// - Point: the dot is drawn and committed immediately
    /// - Freehand: the press position becomes the stroke anchor
    /// - Other tools: a zero-size tentative shape is drawn at the press position
    ///
    /// Returns true if the canvas changed.
    pub fn on_pointer_down(&mut self, x: i32, y: i32) -> bool {
        let Some(tool) = self.tool else {
            return false;
        };

        match tool {
            Tool::Point => {
                let shape = tool.shape(x, y, x, y, self.current_color, self.current_thickness);
                let id = self.canvas.create(shape);
                self.history.push(id);
                self.state = DrawingState::Idle;
                debug!("Committed point {id} at ({x}, {y})");
                true
            }
            Tool::Freehand => {
                self.state = DrawingState::Freehand {
                    last_x: x,
                    last_y: y,
                };
                false
            }
            _ => {
                let shape = tool.shape(x, y, x, y, self.current_color, self.current_thickness);
                let item = self.canvas.create(shape);
                self.state = DrawingState::Shaping {
                    tool,
                    start_x: x,
                    start_y: y,
                    item,
                };
                true
            }
        }
    }

    /// Processes pointer motion while the button is held.
    ///
    /// A tentative shape is deleted and drawn again with the new corner.
    /// A freehand stroke commits the segment from the previous position and
    /// advances the anchor. Current color and thickness are read on every
    /// move, so changes made mid-drag apply to what is drawn next.
    ///
    /// Returns true if the canvas changed.
    pub fn on_pointer_drag(&mut self, x: i32, y: i32) -> bool {
        let color = self.current_color;
        let thick = self.current_thickness;

        match &mut self.state {
            DrawingState::Idle => false,
            DrawingState::Shaping {
                tool,
                start_x,
                start_y,
                item,
            } => {
                self.canvas.delete(*item);
                *item = self
                    .canvas
                    .create(tool.shape(*start_x, *start_y, x, y, color, thick));
                true
            }
            DrawingState::Freehand { last_x, last_y } => {
                let segment = Tool::Freehand.shape(*last_x, *last_y, x, y, color, thick);
                let id = self.canvas.create(segment);
                self.history.push(id);
                *last_x = x;
                *last_y = y;
                true
            }
        }
    }

    /// Processes the pointer release.
    ///
    /// Commits the tentative shape, if any, and returns to idle. Freehand
    /// segments are already committed, so releasing only ends the stroke.
    pub fn on_pointer_up(&mut self) {
        if let DrawingState::Shaping { tool, item, .. } = self.state {
            self.history.push(item);
            debug!("Committed {} {item}", tool.label());
        }
        self.state = DrawingState::Idle;
    }
}
