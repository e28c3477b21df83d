//! UI rendering: toolbar strip, canvas placement and the color picker dialog.

pub mod picker;
pub mod toolbar;

pub use picker::{ColorPicker, PickerHit, render_picker};
pub use toolbar::{ToolbarControl, ToolbarLayout, ToolbarView, render_toolbar};

use crate::config::UiConfig;
use crate::draw::{Color, render_canvas};
use crate::input::InputState;
use crate::util::Rect;

/// Horizontal placement of a label inside its rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Align {
    Start,
    Center,
}

/// Render the whole window: toolbar on top, canvas below, picker overlay last.
///
/// # Arguments
/// * `ctx` - Cairo drawing context covering the full window
/// * `input` - Current input state (editor, toolbar, field, picker)
/// * `style` - Toolbar and dialog colors
/// * `background` - Canvas background color
pub fn render_window(ctx: &cairo::Context, input: &InputState, style: &UiConfig, background: Color) {
    let (width, height) = input.window_size();
    let window = Rect {
        x: 0,
        y: 0,
        width: width as i32,
        height: height as i32,
    };
    fill_rect(ctx, window, style.background_color);

    let editor = &input.editor;
    let view = ToolbarView {
        tool: editor.tool(),
        color: editor.current_color(),
        thickness_text: input.thickness_field.text(),
        field_focused: input.thickness_field.is_focused(),
    };
    render_toolbar(ctx, &input.toolbar, &view, style, window.width);

    let area = input.canvas_area();
    let _ = ctx.save();
    ctx.translate(area.x as f64, area.y as f64);
    render_canvas(ctx, editor.canvas(), background);
    let _ = ctx.restore();

    if let Some(picker) = &input.color_picker {
        render_picker(ctx, picker, style, window);
    }
}

pub(crate) fn fill_rect(ctx: &cairo::Context, rect: Rect, rgba: [f64; 4]) {
    let [r, g, b, a] = rgba;
    ctx.set_source_rgba(r, g, b, a);
    ctx.rectangle(
        rect.x as f64,
        rect.y as f64,
        rect.width as f64,
        rect.height as f64,
    );
    let _ = ctx.fill();
}

/// Outline drawn inside the rectangle so neighbouring controls never overlap.
pub(crate) fn stroke_rect(ctx: &cairo::Context, rect: Rect, rgba: [f64; 4], line_width: f64) {
    let [r, g, b, a] = rgba;
    let inset = line_width / 2.0;
    ctx.set_source_rgba(r, g, b, a);
    ctx.set_line_width(line_width);
    ctx.rectangle(
        rect.x as f64 + inset,
        rect.y as f64 + inset,
        (rect.width as f64 - line_width).max(0.0),
        (rect.height as f64 - line_width).max(0.0),
    );
    let _ = ctx.stroke();
}

/// Draws single-line text vertically centered in `rect`, returning its pixel width.
pub(crate) fn draw_label(
    ctx: &cairo::Context,
    text: &str,
    rect: Rect,
    font_size: f64,
    rgba: [f64; 4],
    align: Align,
) -> f64 {
    let layout = pangocairo::functions::create_layout(ctx);

    let mut font_desc = pango::FontDescription::from_string("Sans");
    font_desc.set_absolute_size(font_size * pango::SCALE as f64);
    layout.set_font_description(Some(&font_desc));
    layout.set_text(text);

    let (text_width, text_height) = layout.pixel_size();
    let x = match align {
        Align::Start => rect.x as f64,
        Align::Center => rect.x as f64 + (rect.width - text_width) as f64 / 2.0,
    };
    let y = rect.y as f64 + (rect.height - text_height) as f64 / 2.0;

    let [r, g, b, a] = rgba;
    ctx.set_source_rgba(r, g, b, a);
    ctx.move_to(x, y);
    pangocairo::functions::show_layout(ctx, &layout);

    text_width as f64
}
