//! Cairo-based rendering functions for shapes.

use super::canvas::Canvas;
use super::color::Color;
use super::shape::Shape;

/// Paints the canvas background and every item on it.
///
/// Drawing happens in canvas-local coordinates with (0, 0) at the top-left of
/// the drawing area; callers translate the context when the canvas is placed
/// inside a larger surface. Output is clipped to the canvas rectangle so
/// strokes that leave the drawing area do not bleed into surrounding UI.
///
/// # Arguments
/// * `ctx` - Cairo drawing context to render to
/// * `canvas` - The item store to render
/// * `background` - Fill color behind all items
pub fn render_canvas(ctx: &cairo::Context, canvas: &Canvas, background: Color) {
    let _ = ctx.save();

    ctx.rectangle(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
    ctx.clip();

    ctx.set_source_rgba(background.r, background.g, background.b, background.a);
    let _ = ctx.paint();

    for (_, shape) in canvas.items() {
        render_shape(ctx, shape);
    }

    let _ = ctx.restore();
}

/// Renders a single shape to a Cairo context.
///
/// Dispatches to the appropriate internal rendering function based on shape type.
pub fn render_shape(ctx: &cairo::Context, shape: &Shape) {
    match shape {
        Shape::Point { x, y, color, thick } => {
            render_point(ctx, *x, *y, *color, *thick);
        }
        Shape::Line {
            x1,
            y1,
            x2,
            y2,
            color,
            thick,
        } => {
            render_line(ctx, *x1, *y1, *x2, *y2, *color, *thick);
        }
        Shape::Circle { color, thick, .. } => {
            if let Some((left, top, right, bottom)) = shape.corners() {
                render_ellipse(ctx, left, top, right, bottom, *color, *thick);
            }
        }
        Shape::Square { color, thick, .. } => {
            if let Some((left, top, right, bottom)) = shape.corners() {
                render_rect(ctx, left, top, right, bottom, *color, *thick);
            }
        }
        Shape::Triangle { color, thick, .. } => {
            if let Some(vertices) = shape.triangle_vertices() {
                render_polygon(ctx, &vertices, *color, *thick);
            }
        }
    }
}

fn set_color(ctx: &cairo::Context, color: Color) {
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
}

/// Render a filled dot whose diameter equals the thickness
fn render_point(ctx: &cairo::Context, x: i32, y: i32, color: Color, thick: u32) {
    let radius = (thick as f64 / 2.0).max(0.5);
    set_color(ctx, color);
    ctx.new_path();
    ctx.arc(x as f64, y as f64, radius, 0.0, std::f64::consts::PI * 2.0);
    let _ = ctx.fill();
}

/// Render a straight line
fn render_line(ctx: &cairo::Context, x1: i32, y1: i32, x2: i32, y2: i32, color: Color, thick: u32) {
    render_segment(ctx, x1 as f64, y1 as f64, x2 as f64, y2 as f64, color, thick);
}

/// Stroke one segment with round caps; a zero-length segment leaves a dot.
///
/// Outlines whose box has no width or no height are drawn this way.
fn render_segment(ctx: &cairo::Context, x1: f64, y1: f64, x2: f64, y2: f64, color: Color, thick: u32) {
    set_color(ctx, color);
    ctx.set_line_width(thick as f64);
    ctx.set_line_cap(cairo::LineCap::Round);

    ctx.new_path();
    ctx.move_to(x1, y1);
    ctx.line_to(x2, y2);
    let _ = ctx.stroke();
}

/// Render a rectangle outline from normalized corners
fn render_rect(
    ctx: &cairo::Context,
    left: i32,
    top: i32,
    right: i32,
    bottom: i32,
    color: Color,
    thick: u32,
) {
    if left == right || top == bottom {
        render_segment(ctx, left as f64, top as f64, right as f64, bottom as f64, color, thick);
        return;
    }

    set_color(ctx, color);
    ctx.set_line_width(thick as f64);
    ctx.set_line_join(cairo::LineJoin::Miter);

    ctx.new_path();
    ctx.rectangle(
        left as f64,
        top as f64,
        (right - left) as f64,
        (bottom - top) as f64,
    );
    let _ = ctx.stroke();
}

/// Render an ellipse inscribed in the box by scaling a unit circle
fn render_ellipse(
    ctx: &cairo::Context,
    left: i32,
    top: i32,
    right: i32,
    bottom: i32,
    color: Color,
    thick: u32,
) {
    let rx = (right - left) as f64 / 2.0;
    let ry = (bottom - top) as f64 / 2.0;
    if rx <= 0.0 || ry <= 0.0 {
        render_segment(ctx, left as f64, top as f64, right as f64, bottom as f64, color, thick);
        return;
    }

    set_color(ctx, color);
    ctx.set_line_width(thick as f64);

    ctx.new_path();
    ctx.save().ok();
    ctx.translate(left as f64 + rx, top as f64 + ry);
    ctx.scale(rx, ry);
    ctx.arc(0.0, 0.0, 1.0, 0.0, 2.0 * std::f64::consts::PI);
    ctx.restore().ok();

    let _ = ctx.stroke();
}

/// Render a closed polygon outline
fn render_polygon(ctx: &cairo::Context, vertices: &[(f64, f64)], color: Color, thick: u32) {
    let Some(&(x0, y0)) = vertices.first() else {
        return;
    };

    // Collinear vertices along one axis enclose nothing
    let (min_x, max_x) = vertices
        .iter()
        .fold((x0, x0), |(lo, hi), &(x, _)| (lo.min(x), hi.max(x)));
    let (min_y, max_y) = vertices
        .iter()
        .fold((y0, y0), |(lo, hi), &(_, y)| (lo.min(y), hi.max(y)));
    if min_x == max_x || min_y == max_y {
        render_segment(ctx, min_x, min_y, max_x, max_y, color, thick);
        return;
    }

    set_color(ctx, color);
    ctx.set_line_width(thick as f64);
    ctx.set_line_join(cairo::LineJoin::Miter);

    ctx.new_path();
    ctx.move_to(x0, y0);
    for &(x, y) in &vertices[1..] {
        ctx.line_to(x, y);
    }
    ctx.close_path();
    let _ = ctx.stroke();
}
