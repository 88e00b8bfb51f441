use egui::Color32;
use inkpad::editor::{CanvasEditor, UndoStatus};

fn white_editor() -> CanvasEditor {
    CanvasEditor::new(800, 500, Color32::WHITE)
}

// Drives a full pointer-down / move / up gesture.
fn stroke(editor: &mut CanvasEditor, from: (i32, i32), to: (i32, i32)) {
    editor.pointer_down(from.0, from.1);
    editor.pointer_move(to.0, to.1);
    editor.pointer_up();
}

#[test]
fn stroke_then_undo_scenario() {
    let mut editor = white_editor();
    editor.set_brush_size(10);
    editor.set_color(Color32::BLACK);

    stroke(&mut editor, (10, 10), (50, 10));

    assert_eq!(editor.history().len(), 2);
    assert_eq!(editor.history().step(), 1);
    assert_eq!(editor.canvas().pixel(30, 10), Some(Color32::BLACK));

    assert_eq!(editor.undo(), UndoStatus::Undone);
    assert_eq!(editor.history().step(), 0);
    assert_eq!(editor.canvas().pixel(30, 10), Some(Color32::WHITE));
}

#[test]
fn undo_at_bottom_is_a_reported_noop() {
    let mut editor = white_editor();

    assert_eq!(editor.undo(), UndoStatus::NothingToUndo);
    assert_eq!(editor.history().step(), 0);
    assert_eq!(editor.canvas().pixel(100, 100), Some(Color32::WHITE));
}

#[test]
fn repeated_undo_walks_back_through_strokes() {
    let mut editor = white_editor();
    editor.set_brush_size(10);
    editor.set_color(Color32::BLACK);

    // Three strokes on separate rows, one probe pixel each.
    stroke(&mut editor, (10, 10), (50, 10));
    stroke(&mut editor, (10, 100), (50, 100));
    stroke(&mut editor, (10, 200), (50, 200));

    assert_eq!(editor.canvas().pixel(30, 10), Some(Color32::BLACK));
    assert_eq!(editor.canvas().pixel(30, 100), Some(Color32::BLACK));
    assert_eq!(editor.canvas().pixel(30, 200), Some(Color32::BLACK));

    assert_eq!(editor.undo(), UndoStatus::Undone);
    assert_eq!(editor.canvas().pixel(30, 200), Some(Color32::WHITE));
    assert_eq!(editor.canvas().pixel(30, 100), Some(Color32::BLACK));

    assert_eq!(editor.undo(), UndoStatus::Undone);
    assert_eq!(editor.canvas().pixel(30, 100), Some(Color32::WHITE));
    assert_eq!(editor.canvas().pixel(30, 10), Some(Color32::BLACK));

    assert_eq!(editor.undo(), UndoStatus::Undone);
    assert_eq!(editor.canvas().pixel(30, 10), Some(Color32::WHITE));
    assert_eq!(editor.undo(), UndoStatus::NothingToUndo);
}

#[test]
fn history_cursor_always_matches_displayed_raster() {
    let mut editor = white_editor();
    editor.set_color(Color32::BLACK);

    stroke(&mut editor, (10, 10), (50, 10));
    stroke(&mut editor, (10, 100), (50, 100));
    assert_eq!(
        &**editor.history().current(),
        &*editor.canvas().snapshot(),
        "after strokes, history[step] must equal the displayed raster"
    );

    editor.undo();
    assert_eq!(
        &**editor.history().current(),
        &*editor.canvas().snapshot(),
        "after undo, history[step] must equal the displayed raster"
    );
}

#[test]
fn pointer_leave_finalizes_like_pointer_up() {
    let mut editor = white_editor();
    editor.set_brush_size(10);
    editor.set_color(Color32::BLACK);

    editor.pointer_down(10, 10);
    editor.pointer_move(50, 10);
    editor.pointer_leave();

    assert!(!editor.is_drawing());
    assert_eq!(editor.history().len(), 2);
    assert_eq!(editor.stroke_count(), 1);

    // Moves after the stroke ended paint nothing.
    editor.pointer_move(100, 300);
    assert_eq!(editor.canvas().pixel(100, 300), Some(Color32::WHITE));
}

#[test]
fn moves_while_idle_paint_nothing() {
    let mut editor = white_editor();
    editor.set_color(Color32::BLACK);

    editor.pointer_move(100, 100);
    assert_eq!(editor.canvas().pixel(100, 100), Some(Color32::WHITE));
    assert_eq!(editor.history().len(), 1);
    assert_eq!(editor.stroke_count(), 0);
}

#[test]
fn stroke_counter_counts_completed_strokes() {
    let mut editor = white_editor();

    stroke(&mut editor, (10, 10), (50, 10));
    stroke(&mut editor, (10, 50), (50, 50));
    assert_eq!(editor.stroke_count(), 2);

    // An unfinished stroke is not counted yet.
    editor.pointer_down(10, 90);
    editor.pointer_move(50, 90);
    assert_eq!(editor.stroke_count(), 2);
    editor.pointer_up();
    assert_eq!(editor.stroke_count(), 3);
}

#[test]
fn clear_wipes_surface_and_reseeds_history() {
    let mut editor = white_editor();
    editor.set_brush_size(10);
    editor.set_color(Color32::BLACK);
    stroke(&mut editor, (10, 10), (50, 10));

    editor.clear();

    assert_eq!(editor.canvas().pixel(30, 10), Some(Color32::WHITE));
    assert_eq!(editor.history().len(), 1);
    assert_eq!(editor.history().step(), 0);
    assert_eq!(editor.stroke_count(), 0);

    // Clear is not undoable: the surface stays blank.
    assert_eq!(editor.undo(), UndoStatus::NothingToUndo);
    assert_eq!(editor.canvas().pixel(30, 10), Some(Color32::WHITE));
}

#[test]
fn history_is_capacity_bounded() {
    let capacity = 8;
    let mut editor = CanvasEditor::with_capacity(800, 500, Color32::WHITE, capacity);
    editor.set_color(Color32::BLACK);

    for i in 0..(capacity + 5) {
        let y = (10 + 12 * i) as i32;
        stroke(&mut editor, (10, y), (50, y));
    }

    assert_eq!(editor.history().len(), capacity);
    assert_eq!(editor.history().step(), capacity - 1);

    // Only capacity - 1 steps remain reachable via undo.
    let mut undos = 0;
    while editor.undo() == UndoStatus::Undone {
        undos += 1;
    }
    assert_eq!(undos, capacity - 1);
}

#[test]
fn brush_size_is_clamped_silently() {
    let mut editor = white_editor();

    editor.set_brush_size(3);
    assert_eq!(editor.brush().size(), 5);

    editor.set_brush_size(500);
    assert_eq!(editor.brush().size(), 100);

    editor.set_brush_size(40);
    assert_eq!(editor.brush().size(), 40);
}

#[test]
fn exported_png_round_trips_through_image() {
    let mut editor = white_editor();
    editor.set_brush_size(10);
    editor.set_color(Color32::BLACK);
    stroke(&mut editor, (10, 10), (50, 10));

    let bytes = editor.export_png().expect("export should succeed");
    assert_eq!(&bytes[..4], b"\x89PNG");

    let decoded = image::load_from_memory(&bytes)
        .expect("exported bytes should decode")
        .to_rgba8();
    assert_eq!(decoded.dimensions(), (800, 500));
    assert_eq!(decoded.get_pixel(30, 10), &image::Rgba([0, 0, 0, 255]));
    assert_eq!(decoded.get_pixel(700, 400), &image::Rgba([255, 255, 255, 255]));
}

#[test]
fn export_leaves_editor_state_untouched() {
    let mut editor = white_editor();
    stroke(&mut editor, (10, 10), (50, 10));

    editor.export_png().expect("export should succeed");

    assert_eq!(editor.history().len(), 2);
    assert_eq!(editor.history().step(), 1);
    assert_eq!(editor.stroke_count(), 1);
    assert!(!editor.is_drawing());
}
