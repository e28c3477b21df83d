use crate::input::events::MouseButton;
use crate::ui::{PickerHit, ToolbarControl};
use log::debug;

use super::InputState;

impl InputState {
    /// Processes a mouse button press event.
    ///
    /// # Arguments
    /// * `button` - Which mouse button was pressed
    /// * `x` - Pointer X coordinate in window space
    /// * `y` - Pointer Y coordinate in window space
    ///
    /// # Behavior
    /// - Color picker open: a swatch picks the color, Apply picks the typed
    ///   hex color if it is complete, Cancel or a click outside dismisses it;
    ///   nothing else receives the click
    /// - Toolbar: activates the control under the pointer
    /// - Canvas: starts an editor drag in canvas coordinates
    ///
    /// Any click outside the thickness field drops its focus. Only the left
    /// button does anything.
    pub fn on_mouse_press(&mut self, button: MouseButton, x: f64, y: f64) {
        if button != MouseButton::Left {
            return;
        }

        if let Some(picker) = &self.color_picker {
            match picker.hit(x, y) {
                PickerHit::Swatch(color) => self.close_color_picker(Some(color)),
                PickerHit::Apply => {
                    if let Some(color) = picker.hex_color() {
                        self.close_color_picker(Some(color));
                    }
                }
                PickerHit::Cancel | PickerHit::Outside => self.close_color_picker(None),
                PickerHit::Inside => {}
            }
            return;
        }

        if y < self.toolbar.height() as f64 {
            let control = self.toolbar.hit(x, y);
            if control != Some(ToolbarControl::ThicknessField) {
                self.blur_thickness_field();
            }
            if let Some(control) = control {
                self.activate(control);
            }
            return;
        }

        self.blur_thickness_field();

        let area = self.canvas_area();
        if area.contains(x, y) {
            let (cx, cy) = self.to_canvas(x, y);
            if self.editor.on_pointer_down(cx, cy) {
                self.needs_redraw = true;
            }
            self.canvas_drag = true;
        }
    }

    /// Processes mouse motion events.
    ///
    /// Only motion during a drag that started on the canvas reaches the editor;
    /// it keeps tracking even when the pointer leaves the canvas.
    pub fn on_mouse_motion(&mut self, x: f64, y: f64) {
        if !self.canvas_drag {
            return;
        }
        let (cx, cy) = self.to_canvas(x, y);
        if self.editor.on_pointer_drag(cx, cy) {
            self.needs_redraw = true;
        }
    }

    /// Processes mouse button release events.
    ///
    /// Ends a canvas drag, committing any tentative shape.
    pub fn on_mouse_release(&mut self, button: MouseButton, _x: f64, _y: f64) {
        if button != MouseButton::Left || !self.canvas_drag {
            return;
        }
        self.canvas_drag = false;
        self.editor.on_pointer_up();
        self.needs_redraw = true;
    }

    fn activate(&mut self, control: ToolbarControl) {
        debug!("Toolbar control {control:?} pressed");
        match control {
            ToolbarControl::Color => self.open_color_picker(),
            ToolbarControl::ThicknessField => self.thickness_field.focus(),
            ToolbarControl::Tool(tool) => self.editor.set_tool(tool),
            ToolbarControl::Undo => {
                self.editor.undo();
            }
            ToolbarControl::ThicknessLabel => {}
        }
        self.needs_redraw = true;
    }

    /// Converts window coordinates to integer canvas coordinates.
    fn to_canvas(&self, x: f64, y: f64) -> (i32, i32) {
        let area = self.canvas_area();
        (
            (x - area.x as f64).floor() as i32,
            (y - area.y as f64).floor() as i32,
        )
    }
}
