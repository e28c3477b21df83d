//! Window-level input state: editor plus the widgets around it.

use super::field::ThicknessField;
use crate::editor::Editor;
use crate::ui::{ColorPicker, ToolbarLayout};
use crate::util::Rect;
use log::debug;

/// Main input state containing all session state.
///
/// This struct holds the editor (canvas, history, tool, color, thickness),
/// the toolbar layout, the thickness field and the optional color picker
/// dialog. It routes keyboard and mouse events to whichever of these is
/// active and records when a redraw is needed.
pub struct InputState {
    /// Drawing controller
    pub editor: Editor,
    /// Control positions in the toolbar strip
    pub toolbar: ToolbarLayout,
    /// Thickness text field shown in the toolbar
    pub thickness_field: ThicknessField,
    /// Open color picker dialog, if any (blocks all other input)
    pub color_picker: Option<ColorPicker>,
    /// Whether the display needs to be redrawn
    pub needs_redraw: bool,
    /// Whether the user requested to close the window
    pub should_exit: bool,
    /// Canvas rectangle in window coordinates
    canvas_area: Rect,
    /// Full window width in pixels
    window_width: i32,
    /// Whether the left button went down on the canvas and is still held
    pub(super) canvas_drag: bool,
}

impl InputState {
    /// Creates the input state for an editor and its toolbar.
    ///
    /// The canvas sits directly below the toolbar; the window is wide enough
    /// for both.
    pub fn new(editor: Editor, toolbar: ToolbarLayout) -> Self {
        let canvas = editor.canvas();
        let canvas_area = Rect {
            x: 0,
            y: toolbar.height(),
            width: canvas.width() as i32,
            height: canvas.height() as i32,
        };
        let window_width = toolbar.width().max(canvas_area.width);
        let thickness_field = ThicknessField::new(editor.current_thickness().to_string());

        Self {
            editor,
            toolbar,
            thickness_field,
            color_picker: None,
            needs_redraw: true,
            should_exit: false,
            canvas_area,
            window_width,
            canvas_drag: false,
        }
    }

    /// Window size in pixels (toolbar plus canvas).
    pub fn window_size(&self) -> (u32, u32) {
        (
            self.window_width as u32,
            (self.canvas_area.y + self.canvas_area.height) as u32,
        )
    }

    /// Canvas rectangle in window coordinates.
    pub fn canvas_area(&self) -> Rect {
        self.canvas_area
    }

    /// Opens the color picker over the canvas.
    pub fn open_color_picker(&mut self) {
        debug!("Opening color picker");
        self.color_picker = Some(ColorPicker::new(
            self.canvas_area,
            self.editor.current_color(),
        ));
        self.needs_redraw = true;
    }

    /// Closes the color picker, applying `picked` if a swatch was chosen.
    pub fn close_color_picker(&mut self, picked: Option<crate::draw::Color>) {
        if self.color_picker.take().is_none() {
            return;
        }
        match picked {
            Some(color) => self.editor.set_color(color),
            None => debug!("Color picker dismissed"),
        }
        self.needs_redraw = true;
    }

    /// Pushes the field text to the editor, which keeps it only if valid.
    pub(super) fn apply_thickness_text(&mut self) {
        let _ = self.editor.set_thickness_input(self.thickness_field.text());
        self.needs_redraw = true;
    }

    /// Removes keyboard focus from the thickness field.
    ///
    /// Text the editor rejected is replaced by the thickness still in effect.
    pub(super) fn blur_thickness_field(&mut self) {
        if !self.thickness_field.blur() {
            return;
        }
        let current = self.editor.current_thickness();
        if self.editor.set_thickness_input(self.thickness_field.text()) != Ok(current) {
            self.thickness_field.set_text(current.to_string());
        }
        self.needs_redraw = true;
    }
}
