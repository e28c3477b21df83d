use cairo::{Context, ImageSurface};
use sketchpad::config::UiConfig;
use sketchpad::draw::color::{BLUE, RED};
use sketchpad::draw::{BLACK, Canvas, Shape, WHITE, render_canvas};
use sketchpad::editor::{Editor, Tool};
use sketchpad::input::InputState;
use sketchpad::ui::{ToolbarLayout, render_window};

const TOOLBAR_HEIGHT: i32 = 36;

fn make_input_state() -> InputState {
    InputState::new(
        Editor::new(600, 400, BLACK, 3),
        ToolbarLayout::new(TOOLBAR_HEIGHT as u32, 12.0),
    )
}

fn surface_with_context(width: i32, height: i32) -> (ImageSurface, Context) {
    let surface = ImageSurface::create(cairo::Format::ARgb32, width, height).unwrap();
    let ctx = Context::new(&surface).unwrap();
    (surface, ctx)
}

fn render(input: &InputState) -> ImageSurface {
    let (width, height) = input.window_size();
    let (surface, ctx) = surface_with_context(width as i32, height as i32);
    render_window(&ctx, input, &UiConfig::default(), WHITE);
    drop(ctx);
    surface
}

/// Reads one pixel as premultiplied ARGB packed in a native-endian u32.
fn pixel(surface: &mut ImageSurface, x: i32, y: i32) -> u32 {
    surface.flush();
    let stride = surface.stride() as usize;
    let data = surface.data().unwrap();
    let offset = y as usize * stride + x as usize * 4;
    u32::from_ne_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}

fn argb(color: sketchpad::draw::Color) -> u32 {
    let channel = |v: f64| (v * 255.0).round() as u32;
    (channel(color.a) << 24) | (channel(color.r) << 16) | (channel(color.g) << 8) | channel(color.b)
}

/// Compares two pixels allowing one step of rounding per channel.
fn close_to(actual: u32, expected: u32) -> bool {
    (0..4).all(|i| {
        let a = (actual >> (i * 8)) & 0xff;
        let e = (expected >> (i * 8)) & 0xff;
        a.abs_diff(e) <= 1
    })
}

#[test]
fn empty_window_shows_toolbar_and_blank_canvas() {
    let input = make_input_state();
    let mut surface = render(&input);

    assert_eq!(pixel(&mut surface, 300, 200), argb(WHITE));
    assert_eq!(pixel(&mut surface, 599, 435), argb(WHITE));

    let [r, g, b, a] = UiConfig::default().background_color;
    let ui_bg = sketchpad::draw::Color::new(r, g, b, a);
    // Toolbar margin, left of the first control
    assert!(close_to(pixel(&mut surface, 1, 1), argb(ui_bg)));

    // The toolbar is wider than the canvas; the strip beside the canvas keeps
    // the window background
    let (width, _) = input.window_size();
    assert!(width > 600);
    assert!(close_to(
        pixel(&mut surface, width as i32 - 1, 200),
        argb(ui_bg)
    ));
}

#[test]
fn square_outline_is_drawn_below_the_toolbar() {
    let mut input = make_input_state();
    input.editor.set_tool(Tool::Square);
    input.editor.set_color(RED);
    input.editor.on_pointer_down(10, 10);
    input.editor.on_pointer_drag(50, 40);
    input.editor.on_pointer_up();

    let mut surface = render(&input);
    let top = TOOLBAR_HEIGHT;

    // Left edge of the square, centered on the stroke
    assert_eq!(pixel(&mut surface, 10, top + 25), argb(RED));
    // Interior is left unfilled
    assert_eq!(pixel(&mut surface, 30, top + 25), argb(WHITE));
}

#[test]
fn point_is_painted_at_press_position() {
    let mut input = make_input_state();
    input.editor.set_tool(Tool::Point);
    input.editor.set_color(BLUE);
    input.editor.set_thickness_input("6").unwrap();
    input.editor.on_pointer_down(100, 100);
    input.editor.on_pointer_up();

    let mut surface = render(&input);
    assert_eq!(pixel(&mut surface, 100, TOOLBAR_HEIGHT + 100), argb(BLUE));
    assert_eq!(pixel(&mut surface, 120, TOOLBAR_HEIGHT + 100), argb(WHITE));
}

/// Draws one shape with a press/drag/release sequence in red, 6px thick.
fn draw(input: &mut InputState, tool: Tool, from: (i32, i32), to: (i32, i32)) {
    input.editor.set_tool(tool);
    input.editor.set_color(RED);
    input.editor.set_thickness_input("6").unwrap();
    input.editor.on_pointer_down(from.0, from.1);
    if from != to {
        input.editor.on_pointer_drag(to.0, to.1);
    }
    input.editor.on_pointer_up();
}

#[test]
fn clicked_outlines_leave_a_dot() {
    let mut input = make_input_state();
    draw(&mut input, Tool::Circle, (200, 200), (200, 200));
    draw(&mut input, Tool::Square, (300, 200), (300, 200));
    draw(&mut input, Tool::Triangle, (400, 200), (400, 200));
    assert_eq!(input.editor.history().len(), 3);

    let mut surface = render(&input);
    let y = TOOLBAR_HEIGHT + 200;
    for x in [200, 300, 400] {
        assert_eq!(pixel(&mut surface, x, y), argb(RED), "no mark at x={x}");
        assert_eq!(pixel(&mut surface, x + 10, y), argb(WHITE));
    }
}

#[test]
fn flat_outlines_are_drawn_as_lines() {
    let mut input = make_input_state();
    // Horizontal circle drag
    draw(&mut input, Tool::Circle, (100, 300), (160, 300));
    // Vertical square drag
    draw(&mut input, Tool::Square, (250, 250), (250, 330));
    // Triangle dragged sideways only: base collapses onto the apex row
    draw(&mut input, Tool::Triangle, (400, 100), (440, 100));
    // Triangle dragged straight down: zero-width base below the apex
    draw(&mut input, Tool::Triangle, (500, 100), (500, 160));

    let mut surface = render(&input);
    let top = TOOLBAR_HEIGHT;
    assert_eq!(pixel(&mut surface, 130, top + 300), argb(RED));
    assert_eq!(pixel(&mut surface, 250, top + 290), argb(RED));
    assert_eq!(pixel(&mut surface, 390, top + 100), argb(RED));
    assert_eq!(pixel(&mut surface, 410, top + 100), argb(RED));
    assert_eq!(pixel(&mut surface, 500, top + 130), argb(RED));

    // Nothing beyond the collapsed extent
    assert_eq!(pixel(&mut surface, 130, top + 310), argb(WHITE));
    assert_eq!(pixel(&mut surface, 500, top + 170), argb(WHITE));
}

#[test]
fn undo_clears_rendered_item() {
    let mut input = make_input_state();
    input.editor.set_tool(Tool::Point);
    input.editor.on_pointer_down(100, 100);
    input.editor.on_pointer_up();
    input.editor.undo();

    let mut surface = render(&input);
    assert_eq!(pixel(&mut surface, 100, TOOLBAR_HEIGHT + 100), argb(WHITE));
}

#[test]
fn open_color_picker_shows_palette_swatches() {
    let mut input = make_input_state();
    input.open_color_picker();
    let (_, rect) = input
        .color_picker
        .as_ref()
        .unwrap()
        .swatches()
        .iter()
        .copied()
        .find(|(color, _)| *color == RED)
        .unwrap();

    let mut surface = render(&input);
    let (cx, cy) = (rect.x + rect.width / 2, rect.y + rect.height / 2);
    assert_eq!(pixel(&mut surface, cx, cy), argb(RED));

    // The rest of the canvas is dimmed behind the dialog
    assert_ne!(pixel(&mut surface, 2, 434), argb(WHITE));
}

#[test]
fn canvas_rendering_is_clipped_to_canvas_bounds() {
    let mut canvas = Canvas::new(100, 100);
    canvas.create(Shape::Line {
        x1: 50,
        y1: 50,
        x2: 190,
        y2: 50,
        color: RED,
        thick: 5,
    });

    let (mut surface, ctx) = surface_with_context(200, 100);
    render_canvas(&ctx, &canvas, WHITE);
    drop(ctx);

    assert_eq!(pixel(&mut surface, 80, 50), argb(RED));
    // Past the right edge of the canvas nothing is painted
    assert_eq!(pixel(&mut surface, 150, 50), 0);
}
