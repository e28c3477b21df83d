//! Modal color picker dialog.

use super::{Align, draw_label, fill_rect, stroke_rect};
use crate::config::UiConfig;
use crate::draw::{Color, PALETTE};
use crate::util::Rect;

const SWATCH_SIZE: i32 = 36;
const SWATCH_GAP: i32 = 6;
const COLUMNS: i32 = 4;
const PADDING: i32 = 12;
const TITLE_HEIGHT: i32 = 24;
const BUTTON_HEIGHT: i32 = 28;
const CANCEL_WIDTH: i32 = 80;
const APPLY_WIDTH: i32 = 64;

const TITLE: &str = "Choose a color";

/// What a click on the dialog landed on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PickerHit {
    /// A palette swatch
    Swatch(Color),
    /// The Apply button next to the hex entry
    Apply,
    /// The Cancel button
    Cancel,
    /// Dialog background, title, hex entry or gaps between swatches
    Inside,
    /// Anywhere outside the dialog frame
    Outside,
}

/// Open color picker: palette grid, a `#rrggbb` entry with an Apply button
/// and a Cancel button, centered in an area.
///
/// The hex entry always has keyboard focus while the dialog is open. It
/// starts with the current color and accepts only hex digits and a
/// leading `#`.
#[derive(Debug, Clone)]
pub struct ColorPicker {
    frame: Rect,
    swatches: Vec<(Color, Rect)>,
    hex_entry: Rect,
    apply: Rect,
    cancel: Rect,
    current: Color,
    hex_text: String,
}

impl ColorPicker {
    /// Builds the dialog centered over `area`, marking `current` as selected.
    pub fn new(area: Rect, current: Color) -> Self {
        let rows = (PALETTE.len() as i32 + COLUMNS - 1) / COLUMNS;
        let grid_width = COLUMNS * SWATCH_SIZE + (COLUMNS - 1) * SWATCH_GAP;
        let grid_height = rows * SWATCH_SIZE + (rows - 1) * SWATCH_GAP;

        let width = grid_width + 2 * PADDING;
        let height = PADDING
            + TITLE_HEIGHT
            + grid_height
            + PADDING
            + BUTTON_HEIGHT
            + PADDING
            + BUTTON_HEIGHT
            + PADDING;
        let frame = Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            width,
            height,
        };

        let grid_x = frame.x + PADDING;
        let grid_y = frame.y + PADDING + TITLE_HEIGHT;
        let swatches = PALETTE
            .iter()
            .enumerate()
            .map(|(index, color)| {
                let column = index as i32 % COLUMNS;
                let row = index as i32 / COLUMNS;
                let rect = Rect {
                    x: grid_x + column * (SWATCH_SIZE + SWATCH_GAP),
                    y: grid_y + row * (SWATCH_SIZE + SWATCH_GAP),
                    width: SWATCH_SIZE,
                    height: SWATCH_SIZE,
                };
                (*color, rect)
            })
            .collect();

        let hex_row_y = grid_y + grid_height + PADDING;
        let hex_entry = Rect {
            x: grid_x,
            y: hex_row_y,
            width: grid_width - APPLY_WIDTH - SWATCH_GAP,
            height: BUTTON_HEIGHT,
        };
        let apply = Rect {
            x: grid_x + grid_width - APPLY_WIDTH,
            y: hex_row_y,
            width: APPLY_WIDTH,
            height: BUTTON_HEIGHT,
        };

        let cancel = Rect {
            x: frame.x + (frame.width - CANCEL_WIDTH) / 2,
            y: hex_row_y + BUTTON_HEIGHT + PADDING,
            width: CANCEL_WIDTH,
            height: BUTTON_HEIGHT,
        };

        Self {
            frame,
            swatches,
            hex_entry,
            apply,
            cancel,
            current,
            hex_text: current.to_hex(),
        }
    }

    /// Outer dialog rectangle.
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Color that was active when the dialog opened.
    pub fn current(&self) -> Color {
        self.current
    }

    pub fn swatches(&self) -> &[(Color, Rect)] {
        &self.swatches
    }

    pub fn hex_entry_rect(&self) -> Rect {
        self.hex_entry
    }

    pub fn apply_rect(&self) -> Rect {
        self.apply
    }

    pub fn cancel_rect(&self) -> Rect {
        self.cancel
    }

    pub fn hex_text(&self) -> &str {
        &self.hex_text
    }

    /// Appends a typed character to the hex entry.
    ///
    /// Returns false when the character is not accepted: anything but a hex
    /// digit, a `#` that is not first, or input past `#rrggbb`.
    pub fn insert_hex(&mut self, c: char) -> bool {
        let accepted = if c == '#' {
            self.hex_text.is_empty()
        } else {
            c.is_ascii_hexdigit() && self.hex_text.trim_start_matches('#').len() < 6
        };
        if accepted {
            self.hex_text.push(c);
        }
        accepted
    }

    /// Deletes the last character of the hex entry; false when already empty.
    pub fn backspace_hex(&mut self) -> bool {
        self.hex_text.pop().is_some()
    }

    /// Color spelled by the hex entry, with or without the leading `#`.
    pub fn hex_color(&self) -> Option<Color> {
        let digits = self.hex_text.trim_start_matches('#');
        Color::from_hex(&format!("#{digits}")).ok()
    }

    /// Classifies a click at window coordinates.
    pub fn hit(&self, x: f64, y: f64) -> PickerHit {
        if !self.frame.contains(x, y) {
            return PickerHit::Outside;
        }
        if self.cancel.contains(x, y) {
            return PickerHit::Cancel;
        }
        if self.apply.contains(x, y) {
            return PickerHit::Apply;
        }
        self.swatches
            .iter()
            .find(|(_, rect)| rect.contains(x, y))
            .map_or(PickerHit::Inside, |(color, _)| PickerHit::Swatch(*color))
    }
}

/// Renders the dialog with a dimmed backdrop covering `backdrop`.
pub fn render_picker(ctx: &cairo::Context, picker: &ColorPicker, style: &UiConfig, backdrop: Rect) {
    fill_rect(ctx, backdrop, [0.0, 0.0, 0.0, 0.35]);

    let frame = picker.frame();
    fill_rect(ctx, frame, style.button_color);
    stroke_rect(ctx, frame, style.accent_color, 2.0);

    let title_rect = Rect {
        x: frame.x + PADDING,
        y: frame.y + PADDING / 2,
        width: frame.width - 2 * PADDING,
        height: TITLE_HEIGHT,
    };
    draw_label(ctx, TITLE, title_rect, style.font_size, style.text_color, Align::Center);

    for (color, rect) in picker.swatches() {
        fill_rect(ctx, *rect, [color.r, color.g, color.b, color.a]);
        if *color == picker.current() {
            stroke_rect(ctx, *rect, style.accent_color, 3.0);
        } else {
            // Light swatches need a dark outline to stand out from the dialog
            let outline = if color.luminance() > 0.5 { 0.0 } else { 1.0 };
            stroke_rect(ctx, *rect, [outline, outline, outline, 0.5], 1.0);
        }
    }

    render_hex_entry(ctx, picker, style);

    let cancel = picker.cancel_rect();
    fill_rect(ctx, cancel, style.background_color);
    stroke_rect(ctx, cancel, [0.0, 0.0, 0.0, 0.25], 1.0);
    draw_label(ctx, "Cancel", cancel, style.font_size, style.text_color, Align::Center);
}

fn render_hex_entry(ctx: &cairo::Context, picker: &ColorPicker, style: &UiConfig) {
    let entry = picker.hex_entry_rect();
    let parsed = picker.hex_color();

    fill_rect(ctx, entry, [1.0, 1.0, 1.0, 1.0]);
    match parsed {
        Some(_) => stroke_rect(ctx, entry, style.accent_color, 2.0),
        None => stroke_rect(ctx, entry, [0.8, 0.1, 0.1, 1.0], 2.0),
    }

    let text_rect = Rect {
        x: entry.x + 6,
        width: entry.width - 12,
        ..entry
    };
    let text_width = draw_label(
        ctx,
        picker.hex_text(),
        text_rect,
        style.font_size,
        style.text_color,
        Align::Start,
    );
    let caret_x = text_rect.x as f64 + text_width + 1.0;
    let [r, g, b, a] = style.text_color;
    ctx.set_source_rgba(r, g, b, a);
    ctx.set_line_width(1.0);
    ctx.move_to(caret_x + 0.5, (entry.y + 4) as f64);
    ctx.line_to(caret_x + 0.5, (entry.bottom() - 4) as f64);
    let _ = ctx.stroke();

    // Apply is filled with the typed color once it parses
    let apply = picker.apply_rect();
    match parsed {
        Some(color) => {
            fill_rect(ctx, apply, [color.r, color.g, color.b, color.a]);
            let label = if color.luminance() > 0.5 {
                [0.0, 0.0, 0.0, 1.0]
            } else {
                [1.0, 1.0, 1.0, 1.0]
            };
            stroke_rect(ctx, apply, [0.0, 0.0, 0.0, 0.25], 1.0);
            draw_label(ctx, "Apply", apply, style.font_size, label, Align::Center);
        }
        None => {
            fill_rect(ctx, apply, style.background_color);
            stroke_rect(ctx, apply, [0.0, 0.0, 0.0, 0.25], 1.0);
            let [r, g, b, _] = style.text_color;
            draw_label(ctx, "Apply", apply, style.font_size, [r, g, b, 0.4], Align::Center);
        }
    }
}
