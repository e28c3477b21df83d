//! Toolbar strip above the canvas: layout, hit-testing and rendering.

use super::{Align, draw_label, fill_rect, stroke_rect};
use crate::config::UiConfig;
use crate::draw::Color;
use crate::editor::Tool;
use crate::util::Rect;

/// Gap between the toolbar edge and its controls
const MARGIN: i32 = 4;
/// Gap between neighbouring controls
const SPACING: i32 = 4;
/// Horizontal padding inside a button around its label
const PADDING_X: i32 = 8;
/// Average glyph width relative to the font size, used for layout
const CHAR_WIDTH_FACTOR: f64 = 0.6;
/// Characters the thickness field is sized for
const FIELD_CHARS: usize = 4;

/// Estimated pixel width of a label.
///
/// Layout uses an estimate instead of measuring with Pango so that hit-testing
/// is deterministic and does not need a drawing context.
pub fn estimate_text_width(text: &str, font_size: f64) -> i32 {
    (text.chars().count() as f64 * font_size * CHAR_WIDTH_FACTOR).ceil() as i32
}

/// One control in the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarControl {
    /// Opens the color picker dialog
    Color,
    /// Static "Thickness:" caption
    ThicknessLabel,
    /// Editable thickness text
    ThicknessField,
    /// Selects a drawing tool
    Tool(Tool),
    /// Removes the most recent item
    Undo,
}

impl ToolbarControl {
    /// Controls in left-to-right order.
    pub fn all() -> Vec<ToolbarControl> {
        let mut controls = vec![
            ToolbarControl::Color,
            ToolbarControl::ThicknessLabel,
            ToolbarControl::ThicknessField,
        ];
        controls.extend(Tool::ALL.into_iter().map(ToolbarControl::Tool));
        controls.push(ToolbarControl::Undo);
        controls
    }

    pub fn label(self) -> &'static str {
        match self {
            ToolbarControl::Color => "Color",
            ToolbarControl::ThicknessLabel => "Thickness:",
            ToolbarControl::ThicknessField => "",
            ToolbarControl::Tool(tool) => tool.label(),
            ToolbarControl::Undo => "Undo",
        }
    }

    /// Whether clicking the control does anything.
    pub fn is_interactive(self) -> bool {
        !matches!(self, ToolbarControl::ThicknessLabel)
    }
}

/// A control together with its position in toolbar coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolbarItem {
    pub control: ToolbarControl,
    pub rect: Rect,
}

/// Computed positions of every toolbar control.
#[derive(Debug, Clone)]
pub struct ToolbarLayout {
    items: Vec<ToolbarItem>,
    width: i32,
    height: i32,
    font_size: f64,
}

impl ToolbarLayout {
    /// Lays out all controls in one row for a toolbar of the given height.
    pub fn new(height: u32, font_size: f64) -> Self {
        let height = height as i32;
        let control_height = (height - 2 * MARGIN).max(1);
        let swatch = swatch_size(control_height);

        let mut items = Vec::new();
        let mut x = MARGIN;
        for control in ToolbarControl::all() {
            let width = match control {
                ToolbarControl::Color => {
                    estimate_text_width(control.label(), font_size) + 3 * PADDING_X / 2 + swatch
                        + PADDING_X
                }
                ToolbarControl::ThicknessLabel => estimate_text_width(control.label(), font_size),
                ToolbarControl::ThicknessField => {
                    estimate_text_width(&"0".repeat(FIELD_CHARS), font_size) + 2 * PADDING_X
                }
                _ => estimate_text_width(control.label(), font_size) + 2 * PADDING_X,
            };
            let width = width.max(1);
            if let Some(rect) = Rect::new(x, MARGIN, width, control_height) {
                items.push(ToolbarItem { control, rect });
            }
            x += width + SPACING;
        }

        Self {
            items,
            width: x - SPACING + MARGIN,
            height,
            font_size,
        }
    }

    /// Minimum width needed to show every control.
    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    pub fn items(&self) -> &[ToolbarItem] {
        &self.items
    }

    pub fn rect_of(&self, control: ToolbarControl) -> Option<Rect> {
        self.items
            .iter()
            .find(|item| item.control == control)
            .map(|item| item.rect)
    }

    /// Returns the interactive control under the given toolbar coordinates.
    pub fn hit(&self, x: f64, y: f64) -> Option<ToolbarControl> {
        self.items
            .iter()
            .find(|item| item.control.is_interactive() && item.rect.contains(x, y))
            .map(|item| item.control)
    }
}

fn swatch_size(control_height: i32) -> i32 {
    (control_height - 8).max(4)
}

/// Editor values the toolbar reflects.
#[derive(Debug, Clone, Copy)]
pub struct ToolbarView<'a> {
    /// Tool whose button is highlighted
    pub tool: Option<Tool>,
    /// Color shown in the Color button's swatch
    pub color: Color,
    /// Current thickness field text
    pub thickness_text: &'a str,
    /// Whether the thickness field has keyboard focus
    pub field_focused: bool,
}

/// Renders the toolbar strip at the top-left of the context.
///
/// # Arguments
/// * `ctx` - Cairo drawing context to render to
/// * `layout` - Control positions
/// * `view` - Current editor values to display
/// * `style` - Toolbar colors
/// * `width` - Full strip width (at least `layout.width()`)
pub fn render_toolbar(
    ctx: &cairo::Context,
    layout: &ToolbarLayout,
    view: &ToolbarView<'_>,
    style: &UiConfig,
    width: i32,
) {
    let strip = Rect {
        x: 0,
        y: 0,
        width: width.max(layout.width()),
        height: layout.height(),
    };
    fill_rect(ctx, strip, style.background_color);

    // Separator between toolbar and canvas
    ctx.set_source_rgba(0.0, 0.0, 0.0, 0.2);
    ctx.rectangle(0.0, (layout.height() - 1) as f64, strip.width as f64, 1.0);
    let _ = ctx.fill();

    let font_size = layout.font_size();
    for item in layout.items() {
        let rect = item.rect;
        match item.control {
            ToolbarControl::ThicknessLabel => {
                draw_label(ctx, item.control.label(), rect, font_size, style.text_color, Align::Start);
            }
            ToolbarControl::ThicknessField => {
                fill_rect(ctx, rect, [1.0, 1.0, 1.0, 1.0]);
                if view.field_focused {
                    stroke_rect(ctx, rect, style.accent_color, 2.0);
                } else {
                    stroke_rect(ctx, rect, [0.5, 0.5, 0.5, 1.0], 1.0);
                }

                let text_rect = Rect {
                    x: rect.x + PADDING_X / 2,
                    width: rect.width - PADDING_X,
                    ..rect
                };
                let text_width = draw_label(
                    ctx,
                    view.thickness_text,
                    text_rect,
                    font_size,
                    style.text_color,
                    Align::Start,
                );
                if view.field_focused {
                    let caret_x = text_rect.x as f64 + text_width + 1.0;
                    let [r, g, b, a] = style.text_color;
                    ctx.set_source_rgba(r, g, b, a);
                    ctx.set_line_width(1.0);
                    ctx.move_to(caret_x + 0.5, (rect.y + 4) as f64);
                    ctx.line_to(caret_x + 0.5, (rect.bottom() - 4) as f64);
                    let _ = ctx.stroke();
                }
            }
            ToolbarControl::Color => {
                draw_button(ctx, rect, style, false);
                let swatch = swatch_size(rect.height);
                let label_rect = Rect {
                    width: rect.width - swatch - PADDING_X / 2,
                    ..rect
                };
                draw_label(ctx, item.control.label(), label_rect, font_size, style.text_color, Align::Center);

                if let Some(swatch_rect) = Rect::new(
                    rect.right() - PADDING_X - swatch,
                    rect.y + (rect.height - swatch) / 2,
                    swatch,
                    swatch,
                ) {
                    let color = view.color;
                    fill_rect(ctx, swatch_rect, [color.r, color.g, color.b, color.a]);
                    stroke_rect(ctx, swatch_rect, [0.0, 0.0, 0.0, 0.6], 1.0);
                }
            }
            ToolbarControl::Tool(tool) => {
                let active = view.tool == Some(tool);
                draw_button(ctx, rect, style, active);
                draw_label(ctx, item.control.label(), rect, font_size, style.text_color, Align::Center);
            }
            ToolbarControl::Undo => {
                draw_button(ctx, rect, style, false);
                draw_label(ctx, item.control.label(), rect, font_size, style.text_color, Align::Center);
            }
        }
    }
}

fn draw_button(ctx: &cairo::Context, rect: Rect, style: &UiConfig, active: bool) {
    if active {
        let [r, g, b, _] = style.accent_color;
        fill_rect(ctx, rect, [r, g, b, 0.35]);
        stroke_rect(ctx, rect, style.accent_color, 2.0);
    } else {
        fill_rect(ctx, rect, style.button_color);
        stroke_rect(ctx, rect, [0.0, 0.0, 0.0, 0.25], 1.0);
    }
}
