use super::*;
use crate::draw::color::{BLACK, BLUE, RED};
use crate::draw::{ItemId, Shape};

fn create_test_editor() -> Editor {
    Editor::new(600, 400, BLACK, 3)
}

fn drag(editor: &mut Editor, points: &[(i32, i32)]) {
    let (&(x, y), rest) = points.split_first().expect("drag needs a start point");
    editor.on_pointer_down(x, y);
    for &(x, y) in rest {
        editor.on_pointer_drag(x, y);
    }
    editor.on_pointer_up();
}

fn shapes(editor: &Editor) -> Vec<Shape> {
    editor
        .canvas()
        .items()
        .map(|(_, shape)| shape.clone())
        .collect()
}

#[test]
fn test_pointer_without_tool_draws_nothing() {
    let mut editor = create_test_editor();
    assert!(!editor.on_pointer_down(10, 10));
    assert!(!editor.on_pointer_drag(20, 20));
    editor.on_pointer_up();

    assert!(editor.canvas().is_empty());
    assert!(editor.history().is_empty());
}

#[test]
fn test_circle_drag_replaces_tentative_shape() {
    let mut editor = create_test_editor();
    editor.set_tool(Tool::Circle);

    editor.on_pointer_down(10, 10);
    editor.on_pointer_drag(50, 40);
    let first = editor.tentative().expect("drag shows a tentative circle");
    assert_eq!(
        editor.canvas().get(first).and_then(Shape::corners),
        Some((10, 10, 50, 40))
    );

    editor.on_pointer_drag(60, 20);
    let second = editor.tentative().unwrap();
    assert_ne!(first, second);
    assert!(!editor.canvas().contains(first));
    assert_eq!(
        editor.canvas().get(second).and_then(Shape::corners),
        Some((10, 10, 60, 20))
    );
    assert!(editor.history().is_empty());

    editor.on_pointer_up();
    assert_eq!(editor.canvas().len(), 1);
    assert_eq!(editor.history().entries(), &[second]);
    assert!(editor.tentative().is_none());
    assert_eq!(editor.state(), &DrawingState::Idle);
}

#[test]
fn test_press_creates_degenerate_shape() {
    let mut editor = create_test_editor();
    editor.set_tool(Tool::Square);

    editor.on_pointer_down(30, 40);
    let item = editor.tentative().unwrap();
    assert_eq!(
        editor.canvas().get(item),
        Some(&Shape::Square {
            x1: 30,
            y1: 40,
            x2: 30,
            y2: 40,
            color: BLACK,
            thick: 3,
        })
    );

    editor.on_pointer_up();
    assert_eq!(editor.history().len(), 1);
}

#[test]
fn test_triangle_drag_produces_expected_vertices() {
    let mut editor = create_test_editor();
    editor.set_tool(Tool::Triangle);
    drag(&mut editor, &[(100, 100), (140, 180)]);

    let id = editor.history().last().unwrap();
    let vertices = editor
        .canvas()
        .get(id)
        .and_then(Shape::triangle_vertices)
        .unwrap();
    assert_eq!(vertices, [(100.0, 100.0), (80.0, 180.0), (120.0, 180.0)]);
}

#[test]
fn test_freehand_commits_each_segment() {
    let mut editor = create_test_editor();
    editor.set_tool(Tool::Freehand);

    assert!(!editor.on_pointer_down(0, 0));
    assert!(editor.canvas().is_empty());

    editor.on_pointer_drag(5, 5);
    editor.on_pointer_drag(10, 10);
    editor.on_pointer_up();

    assert_eq!(editor.history().len(), 2);
    assert_eq!(
        shapes(&editor),
        vec![
            Shape::Line {
                x1: 0,
                y1: 0,
                x2: 5,
                y2: 5,
                color: BLACK,
                thick: 3,
            },
            Shape::Line {
                x1: 5,
                y1: 5,
                x2: 10,
                y2: 10,
                color: BLACK,
                thick: 3,
            },
        ]
    );

    let second = editor.history().last().unwrap();
    assert_eq!(editor.undo(), Some(second));
    assert_eq!(editor.canvas().len(), 1);
    assert!(editor.undo().is_some());
    assert!(editor.canvas().is_empty());
}

#[test]
fn test_point_commits_on_press() {
    let mut editor = create_test_editor();
    editor.set_tool(Tool::Point);

    assert!(editor.on_pointer_down(7, 8));
    assert_eq!(editor.history().len(), 1);
    assert!(!editor.on_pointer_drag(20, 20));
    editor.on_pointer_up();

    assert_eq!(
        shapes(&editor),
        vec![Shape::Point {
            x: 7,
            y: 8,
            color: BLACK,
            thick: 3,
        }]
    );
    assert_eq!(editor.history().len(), 1);
}

#[test]
fn test_undo_reverses_commits_in_order() {
    let mut editor = create_test_editor();
    editor.set_tool(Tool::Line);
    drag(&mut editor, &[(0, 0), (10, 10)]);
    let before: Vec<ItemId> = editor.canvas().item_ids();

    editor.set_tool(Tool::Square);
    drag(&mut editor, &[(5, 5), (15, 20)]);
    editor.set_tool(Tool::Point);
    drag(&mut editor, &[(50, 50)]);
    editor.set_tool(Tool::Freehand);
    drag(&mut editor, &[(1, 1), (2, 2), (3, 3)]);

    let committed = editor.history().entries()[1..].to_vec();
    assert_eq!(committed.len(), 4);

    for expected in committed.iter().rev() {
        assert_eq!(editor.undo(), Some(*expected));
    }
    assert_eq!(editor.canvas().item_ids(), before);
}

#[test]
fn test_undo_on_empty_history_is_noop() {
    let mut editor = create_test_editor();
    assert_eq!(editor.undo(), None);
    assert_eq!(editor.undo(), None);
    assert!(editor.canvas().is_empty());
}

#[test]
fn test_undo_during_drag_keeps_tentative_shape() {
    let mut editor = create_test_editor();
    editor.set_tool(Tool::Line);
    drag(&mut editor, &[(0, 0), (10, 0)]);

    editor.on_pointer_down(0, 20);
    editor.on_pointer_drag(10, 20);
    let tentative = editor.tentative().unwrap();

    editor.undo();
    assert!(editor.canvas().contains(tentative));
    editor.on_pointer_up();
    assert_eq!(editor.history().entries(), &[tentative]);
}

#[test]
fn test_invalid_thickness_keeps_previous_value() {
    let mut editor = create_test_editor();

    assert!(editor.set_thickness_input("abc").is_err());
    assert_eq!(editor.current_thickness(), 3);

    assert_eq!(editor.set_thickness_input("7"), Ok(7));
    assert_eq!(editor.current_thickness(), 7);

    assert!(editor.set_thickness_input("0").is_err());
    assert!(editor.set_thickness_input("").is_err());
    assert_eq!(editor.current_thickness(), 7);

    editor.set_tool(Tool::Line);
    drag(&mut editor, &[(0, 0), (1, 1)]);
    assert_eq!(shapes(&editor)[0].thickness(), 7);
}

#[test]
fn test_tool_change_mid_drag_does_not_affect_current_shape() {
    let mut editor = create_test_editor();
    editor.set_tool(Tool::Circle);

    editor.on_pointer_down(10, 10);
    editor.set_tool(Tool::Line);
    editor.on_pointer_drag(30, 30);
    editor.on_pointer_up();

    assert!(matches!(shapes(&editor)[0], Shape::Circle { .. }));
    assert_eq!(editor.tool(), Some(Tool::Line));
}

#[test]
fn test_color_change_applies_to_next_drag_update() {
    let mut editor = create_test_editor();
    editor.set_tool(Tool::Line);

    editor.on_pointer_down(0, 0);
    assert_eq!(
        editor.canvas().get(editor.tentative().unwrap()).unwrap().color(),
        BLACK
    );
    editor.set_color(RED);
    editor.on_pointer_drag(10, 10);
    editor.on_pointer_up();

    editor.set_color(BLUE);
    assert_eq!(shapes(&editor)[0].color(), RED);
    assert_eq!(editor.current_color(), BLUE);
}

#[test]
fn test_zero_thickness_is_raised_to_one() {
    let editor = Editor::new(600, 400, BLACK, 0);
    assert_eq!(editor.current_thickness(), 1);
}
