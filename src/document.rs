//! The drawing: an ordered element store with its undo/redo history.
//!
//! All mutation of the drawing goes through [`Drawing`]. Committing operations
//! (`append`, `replace_all`, `clear`) keep the invariant that the live element
//! list equals the history entry under the cursor.

use log::debug;

use crate::element::{Element, ElementPatch};
use crate::error::{DrawingError, DrawingResult};
use crate::history::History;
use crate::id_generator::ElementId;

#[derive(Debug, Clone, Default)]
pub struct Drawing {
    elements: Vec<Element>,
    history: History,
    /// Bumped whenever `elements` changes
    revision: u64,
}

impl Drawing {
    /// Empty drawing with an empty history
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn last(&self) -> Option<&Element> {
        self.elements.last()
    }

    pub fn find_element_by_id(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|element| element.id() == id)
    }

    /// Add an element on top of the drawing and commit
    pub fn append(&mut self, element: Element) {
        debug!("append {} {}", element.kind().as_str(), element.id());
        self.elements.push(element);
        self.commit();
    }

    /// Replace the whole element list and commit
    pub fn replace_all(&mut self, elements: Vec<Element>) {
        debug!("replace_all with {} elements", elements.len());
        self.elements = elements;
        self.commit();
    }

    /// Replace the topmost element and commit, without changing the element count.
    /// Appends instead when the drawing is empty.
    pub fn replace_last(&mut self, element: Element) {
        let mut elements = self.elements.clone();
        match elements.last_mut() {
            Some(last) => *last = element,
            None => elements.push(element),
        }
        self.replace_all(elements);
    }

    /// Remove every element and commit, so clearing can be undone
    pub fn clear(&mut self) {
        debug!("clear {} elements", self.elements.len());
        self.elements.clear();
        self.commit();
    }

    /// Edit one element in place. No history entry is created.
    pub fn update_by_id(&mut self, id: ElementId, patch: ElementPatch) -> DrawingResult<()> {
        if patch.shape.as_ref().is_some_and(|shape| !shape.has_valid_arity()) {
            return Err(DrawingError::EmptyPath);
        }
        let element = self
            .elements
            .iter_mut()
            .find(|element| element.id() == id)
            .ok_or(DrawingError::UnknownElement(id))?;
        element.apply(patch);
        self.revision += 1;
        Ok(())
    }

    pub fn undo(&mut self) {
        if let Some(snapshot) = self.history.undo() {
            self.elements = snapshot.to_vec();
            self.revision += 1;
            debug!("undo to entry {:?}", self.history.current_index());
        }
    }

    pub fn redo(&mut self) {
        if let Some(snapshot) = self.history.redo() {
            self.elements = snapshot.to_vec();
            self.revision += 1;
            debug!("redo to entry {:?}", self.history.current_index());
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    fn commit(&mut self) {
        self.history.commit(&self.elements);
        self.revision += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{Shape, Style, factory};
    use crate::geometry::Point;

    fn rect(x: f32) -> Element {
        factory::create_rectangle(Point::ZERO, Point::new(x, x), Style::default())
    }

    fn assert_in_sync(drawing: &Drawing) {
        let current = drawing.history().current().expect("history has an entry");
        assert_eq!(drawing.elements(), &current[..]);
    }

    #[test]
    fn test_new_drawing_is_empty() {
        let drawing = Drawing::new();
        assert!(drawing.elements().is_empty());
        assert!(drawing.history().is_empty());
        assert_eq!(drawing.history().current_index(), None);
    }

    #[test]
    fn test_commits_keep_store_and_history_in_sync() {
        let mut drawing = Drawing::new();
        drawing.append(rect(1.0));
        assert_in_sync(&drawing);
        drawing.append(rect(2.0));
        assert_in_sync(&drawing);
        drawing.clear();
        assert_in_sync(&drawing);
        drawing.replace_all(vec![rect(3.0)]);
        assert_in_sync(&drawing);
        assert_eq!(drawing.history().len(), 4);
    }

    #[test]
    fn test_replace_last_keeps_count() {
        let mut drawing = Drawing::new();
        drawing.append(rect(1.0));
        drawing.append(rect(2.0));
        let replacement = rect(5.0);
        drawing.replace_last(replacement.clone());
        assert_eq!(drawing.elements().len(), 2);
        assert_eq!(drawing.last(), Some(&replacement));
        assert_eq!(drawing.history().len(), 3);
    }

    #[test]
    fn test_update_by_id_skips_history() {
        let mut drawing = Drawing::new();
        let element = rect(1.0);
        let id = element.id();
        drawing.append(element);

        let shape = Shape::Rectangle([Point::ZERO, Point::new(9.0, 9.0)]);
        drawing.update_by_id(id, ElementPatch::shape(shape.clone())).unwrap();

        assert_eq!(drawing.find_element_by_id(id).unwrap().shape(), &shape);
        assert_eq!(drawing.history().len(), 1);
        // the stored snapshot still holds the original geometry
        assert_ne!(drawing.history().current().unwrap()[0].shape(), &shape);
    }

    #[test]
    fn test_update_by_id_errors() {
        let mut drawing = Drawing::new();
        let pencil = factory::create_pencil(Point::ZERO, Style::default());
        let id = pencil.id();
        drawing.append(pencil);

        let unknown = crate::id_generator::generate_id();
        assert_eq!(
            drawing.update_by_id(unknown, ElementPatch::default()),
            Err(DrawingError::UnknownElement(unknown))
        );
        assert_eq!(
            drawing.update_by_id(id, ElementPatch::shape(Shape::Pencil(Vec::new()))),
            Err(DrawingError::EmptyPath)
        );
        assert_eq!(drawing.elements()[0].points().len(), 1);
    }

    #[test]
    fn test_revision_changes_on_every_mutation() {
        let mut drawing = Drawing::new();
        let start = drawing.revision();
        drawing.append(rect(1.0));
        drawing.append(rect(2.0));
        let after_commits = drawing.revision();
        assert!(after_commits > start);
        drawing.undo();
        assert!(drawing.revision() > after_commits);
    }

    #[test]
    fn test_undo_redo_at_bounds_are_noops() {
        let mut drawing = Drawing::new();
        drawing.undo();
        drawing.redo();
        assert!(drawing.elements().is_empty());

        drawing.append(rect(1.0));
        let revision = drawing.revision();
        drawing.redo();
        drawing.undo();
        assert_eq!(drawing.elements().len(), 1);
        assert_eq!(drawing.revision(), revision);
    }
}
