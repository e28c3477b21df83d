use crate::input::events::Key;

use super::InputState;

impl InputState {
    /// Processes a key press event.
    ///
    /// - Color picker open: keys edit its hex entry, Return applies a complete
    ///   `#rrggbb`, Escape dismisses the dialog
    /// - Thickness field focused: printable characters are appended, Backspace
    ///   deletes, Return/Escape/Tab drop focus; every edit is pushed to the editor
    /// - Otherwise keys are ignored
    pub fn on_key_press(&mut self, key: Key) {
        if let Some(picker) = self.color_picker.as_mut() {
            match key {
                Key::Escape => self.close_color_picker(None),
                Key::Return => {
                    if let Some(color) = picker.hex_color() {
                        self.close_color_picker(Some(color));
                    }
                }
                Key::Char(c) => {
                    if picker.insert_hex(c) {
                        self.needs_redraw = true;
                    }
                }
                Key::Backspace => {
                    if picker.backspace_hex() {
                        self.needs_redraw = true;
                    }
                }
                Key::Tab | Key::Space | Key::Unknown => {}
            }
            return;
        }

        if !self.thickness_field.is_focused() {
            return;
        }

        match key {
            Key::Char(c) if !c.is_control() => {
                self.thickness_field.insert(c);
                self.apply_thickness_text();
            }
            Key::Space => {
                self.thickness_field.insert(' ');
                self.apply_thickness_text();
            }
            Key::Backspace => {
                if self.thickness_field.backspace() {
                    self.apply_thickness_text();
                }
            }
            Key::Return | Key::Escape | Key::Tab => self.blur_thickness_field(),
            Key::Char(_) | Key::Unknown => {}
        }
    }
}
