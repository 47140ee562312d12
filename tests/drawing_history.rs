use egui::Color32;
use sketchpad::element::{ElementPatch, Shape, Style, factory};
use sketchpad::error::DrawingError;
use sketchpad::{Drawing, Point};

fn style() -> Style {
    Style::new(Color32::BLACK, 2.0, Color32::TRANSPARENT)
}

fn line(x: f32) -> sketchpad::Element {
    factory::create_line(Point::new(x, 0.0), Point::new(x, 10.0), style())
}

// The visible elements always equal the snapshot at the history cursor
fn assert_in_sync(drawing: &Drawing) {
    let current = drawing.history().current().expect("history should not be empty");
    assert_eq!(drawing.elements(), &current[..]);
}

#[test]
fn test_every_mutation_commits_a_snapshot() {
    let mut drawing = Drawing::new();
    assert!(drawing.history().is_empty());

    drawing.append(line(1.0));
    assert_in_sync(&drawing);
    drawing.append(line(2.0));
    assert_in_sync(&drawing);
    drawing.replace_all(vec![line(3.0)]);
    assert_in_sync(&drawing);
    drawing.clear();
    assert_in_sync(&drawing);

    assert_eq!(drawing.history().len(), 4);
    assert_eq!(drawing.history().current_index(), Some(3));
}

#[test]
fn test_undo_redo_round_trip() {
    let mut drawing = Drawing::new();
    drawing.append(line(1.0));
    drawing.append(line(2.0));
    let before = drawing.elements().to_vec();

    drawing.undo();
    assert_eq!(drawing.elements().len(), 1);
    assert_in_sync(&drawing);

    drawing.redo();
    assert_eq!(drawing.elements(), before.as_slice());
    assert_in_sync(&drawing);
}

#[test]
fn test_clear_then_undo_restores_elements() {
    let mut drawing = Drawing::new();
    drawing.append(line(1.0));
    drawing.append(line(2.0));
    let before = drawing.elements().to_vec();

    drawing.clear();
    assert!(drawing.elements().is_empty());

    drawing.undo();
    assert_eq!(drawing.elements(), before.as_slice());
}

#[test]
fn test_commit_after_undo_truncates_redo_branch() {
    let mut drawing = Drawing::new();
    for x in 0..4 {
        drawing.append(line(x as f32));
    }
    drawing.undo();
    drawing.undo();
    let index_before = drawing.history().current_index().unwrap();

    drawing.append(line(9.0));

    assert_eq!(drawing.history().len(), index_before + 2);
    assert!(!drawing.can_redo());
    assert_in_sync(&drawing);
}

#[test]
fn test_undo_and_redo_at_the_edges_do_nothing() {
    let mut drawing = Drawing::new();
    drawing.undo();
    drawing.redo();
    assert!(drawing.elements().is_empty());

    drawing.append(line(1.0));
    drawing.undo();
    // the very first snapshot is the floor
    assert_eq!(drawing.elements().len(), 1);
    drawing.redo();
    assert_eq!(drawing.history().current_index(), Some(0));
}

#[test]
fn test_update_by_id_patches_without_history() {
    let mut drawing = Drawing::new();
    drawing.append(line(1.0));
    let id = drawing.elements()[0].id();
    let entries = drawing.history().len();

    let moved = Shape::Line([Point::new(5.0, 5.0), Point::new(6.0, 6.0)]);
    drawing.update_by_id(id, ElementPatch::shape(moved.clone())).unwrap();

    assert_eq!(drawing.find_element_by_id(id).unwrap().shape(), &moved);
    assert_eq!(drawing.history().len(), entries);

    let unknown = sketchpad::id_generator::generate_id();
    assert_eq!(
        drawing.update_by_id(unknown, ElementPatch::style(style())),
        Err(DrawingError::UnknownElement(unknown))
    );
}
