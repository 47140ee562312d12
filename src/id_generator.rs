use uuid::Uuid;

/// Identifier of a drawing element, stable for the element's lifetime.
pub type ElementId = Uuid;

// Random v4 ids stay unique across undo/redo and whole-drawing replacement.
pub fn generate_id() -> ElementId {
    Uuid::new_v4()
}
