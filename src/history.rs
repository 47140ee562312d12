use std::sync::Arc;

use crate::element::Element;

/// One immutable entry of the history log.
/// Entries share elements with each other through `Arc`, never through mutable aliasing.
pub type Snapshot = Arc<[Element]>;

/// Linear, snapshot based undo/redo log.
///
/// Every commit discards the redo branch beyond the current entry, appends a
/// snapshot and moves the cursor onto it. Undo and redo only move the cursor.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<Snapshot>,
    /// `None` until the first commit
    current_index: Option<usize>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `elements` as the new tip of the history
    pub fn commit(&mut self, elements: &[Element]) {
        let keep = self.current_index.map_or(0, |index| index + 1);
        self.entries.truncate(keep);
        self.entries.push(Arc::from(elements));
        self.current_index = Some(self.entries.len() - 1);
    }

    /// Step back one entry and return it, or `None` when already at the first entry
    pub fn undo(&mut self) -> Option<Snapshot> {
        if !self.can_undo() {
            return None;
        }
        let index = self.current_index? - 1;
        self.current_index = Some(index);
        Some(Arc::clone(&self.entries[index]))
    }

    /// Step forward one entry and return it, or `None` at the tip
    pub fn redo(&mut self) -> Option<Snapshot> {
        if !self.can_redo() {
            return None;
        }
        let index = self.current_index.map_or(0, |index| index + 1);
        self.current_index = Some(index);
        Some(Arc::clone(&self.entries[index]))
    }

    pub fn can_undo(&self) -> bool {
        self.current_index.is_some_and(|index| index > 0)
    }

    pub fn can_redo(&self) -> bool {
        match self.current_index {
            Some(index) => index + 1 < self.entries.len(),
            None => !self.entries.is_empty(),
        }
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    pub fn current(&self) -> Option<&Snapshot> {
        self.current_index.map(|index| &self.entries[index])
    }

    pub fn entries(&self) -> &[Snapshot] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{Style, factory};
    use crate::geometry::Point;

    fn line(x: f32) -> Element {
        factory::create_line(Point::ZERO, Point::new(x, x), Style::default())
    }

    #[test]
    fn test_empty_history() {
        let mut history = History::new();
        assert_eq!(history.current_index(), None);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert!(history.undo().is_none());
        assert!(history.redo().is_none());
    }

    #[test]
    fn test_first_entry_cannot_be_undone() {
        let mut history = History::new();
        history.commit(&[line(1.0)]);
        assert_eq!(history.current_index(), Some(0));
        assert!(!history.can_undo());
        assert!(history.undo().is_none());
    }

    #[test]
    fn test_commit_truncates_redo_branch() {
        let mut history = History::new();
        let a = line(1.0);
        let b = line(2.0);
        let c = line(3.0);
        history.commit(&[a.clone()]);
        history.commit(&[a.clone(), b.clone()]);
        history.commit(&[a.clone(), b, c]);
        history.undo();
        history.undo();
        assert_eq!(history.current_index(), Some(0));

        history.commit(&[a.clone(), line(4.0)]);
        assert_eq!(history.len(), 2);
        assert!(!history.can_redo());
    }

    #[test]
    fn test_snapshots_are_independent() {
        let mut history = History::new();
        let mut elements = vec![line(1.0)];
        history.commit(&elements);
        elements.push(line(2.0));
        assert_eq!(history.current().unwrap().len(), 1);
    }
}
