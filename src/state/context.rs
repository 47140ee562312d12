//! The owned editor state: the drawing, the tool settings and the gesture in progress.
//!
//! `EditorContext` is the one place pointer input turns into drawing mutations.
//! It replaces any ambient global state: the app owns one context and passes
//! it by reference to whatever needs it.
//!
//! # Gestures
//!
//! - `pointer_down`: start a gesture. The pencil commits a one-point path at once.
//! - `pointer_move`: the pencil appends the point and commits again (one history
//!   entry per sample); bounded tools only update the preview.
//! - `pointer_up`: bounded tools commit their final shape.
//! - `pointer_leave`: end the gesture without committing a bounded shape.
//!
//! # Example
//!
//! ```rust
//! use sketchpad::geometry::Point;
//! use sketchpad::state::EditorContext;
//! use sketchpad::tools::Tool;
//!
//! let mut context = EditorContext::new();
//! context.set_tool(Tool::Rectangle);
//! context.pointer_down(Point::new(10.0, 10.0));
//! context.pointer_move(Point::new(30.0, 20.0));
//! assert!(context.preview().is_some());
//! context.pointer_up(Point::new(50.0, 40.0));
//! assert_eq!(context.drawing().elements().len(), 1);
//! ```
use egui::Color32;
use log::{debug, warn};

use super::{EditorState, Gesture, Preview};
use crate::document::Drawing;
use crate::element::factory;
use crate::geometry::Point;
use crate::tools::{Tool, ToolSettings};

#[derive(Debug, Clone, Default)]
pub struct EditorContext {
    state: EditorState,
    drawing: Drawing,
    settings: ToolSettings,
}

impl EditorContext {
    /// Empty drawing, pencil tool, black 2px stroke, no fill
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn drawing(&self) -> &Drawing {
        &self.drawing
    }

    /// Mutable access for collaborators that edit elements directly
    pub fn drawing_mut(&mut self) -> &mut Drawing {
        &mut self.drawing
    }

    pub fn settings(&self) -> &ToolSettings {
        &self.settings
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.settings.set_tool(tool);
    }

    pub fn set_stroke_color(&mut self, color: Color32) {
        self.settings.set_stroke_color(color);
    }

    pub fn set_stroke_width(&mut self, width: f32) {
        self.settings.set_stroke_width(width);
    }

    pub fn set_fill_color(&mut self, color: Color32) {
        self.settings.set_fill_color(color);
    }

    pub fn undo(&mut self) {
        self.drawing.undo();
    }

    pub fn redo(&mut self) {
        self.drawing.redo();
    }

    pub fn clear(&mut self) {
        self.drawing.clear();
    }

    /// Shape to draw over the committed elements, if a bounded gesture is in progress
    pub fn preview(&self) -> Option<Preview> {
        self.state.gesture().and_then(Gesture::preview)
    }

    /// Idle → Drawing
    pub fn pointer_down(&mut self, point: Point) {
        if let Some(previous) = self.state.finish() {
            // A release we never saw; treat it as a cancel.
            debug!("dropping unfinished {} gesture", previous.tool.name());
        }

        let tool = self.settings.current_tool();
        let style = self.settings.style();
        let mut gesture = Gesture {
            tool,
            style,
            start: point,
            current: point,
            pencil_id: None,
        };

        if tool.is_freehand() {
            let element = factory::create_pencil(point, style);
            gesture.pencil_id = Some(element.id());
            self.drawing.append(element);
        }

        debug!("{} gesture started at ({}, {})", tool.name(), point.x, point.y);
        self.state = EditorState::Drawing(gesture);
    }

    /// Drawing → Drawing. Ignored while idle.
    pub fn pointer_move(&mut self, point: Point) {
        let Some(gesture) = self.state.gesture_mut() else {
            return;
        };
        gesture.current = point;

        if !gesture.tool.is_freehand() {
            return;
        }

        let extended = self
            .drawing
            .last()
            .filter(|last| Some(last.id()) == gesture.pencil_id)
            .and_then(|last| last.with_appended_point(point));

        match extended {
            Some(element) => self.drawing.replace_last(element),
            None => warn!("pencil path is no longer the topmost element, ignoring move"),
        }
    }

    /// Drawing → Idle, committing a bounded shape. Ignored while idle.
    pub fn pointer_up(&mut self, point: Point) {
        let Some(gesture) = self.state.finish() else {
            return;
        };

        if gesture.tool.is_freehand() {
            // already committed sample by sample
            return;
        }

        let element = factory::create_bounded(gesture.tool.shape_kind(), gesture.start, point, gesture.style);
        self.drawing.append(element);
    }

    /// Drawing → Idle without committing. A pencil path keeps the points it already has.
    pub fn pointer_leave(&mut self) {
        if let Some(gesture) = self.state.finish() {
            debug!("{} gesture cancelled", gesture.tool.name());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{Shape, ShapeKind};

    #[test]
    fn test_pencil_commits_on_press() {
        let mut context = EditorContext::new();
        context.pointer_down(Point::new(1.0, 1.0));
        assert!(context.state().is_drawing());
        assert_eq!(context.drawing().elements().len(), 1);
        assert_eq!(context.drawing().history().len(), 1);
        assert!(context.preview().is_none());
    }

    #[test]
    fn test_bounded_tool_previews_without_committing() {
        let mut context = EditorContext::new();
        context.set_tool(Tool::Line);
        context.pointer_down(Point::new(0.0, 0.0));
        context.pointer_move(Point::new(5.0, 5.0));

        let preview = context.preview().expect("line preview");
        assert_eq!(preview.shape, Shape::Line([Point::new(0.0, 0.0), Point::new(5.0, 5.0)]));
        assert!(context.drawing().elements().is_empty());
        assert!(context.drawing().history().is_empty());
    }

    #[test]
    fn test_leave_discards_bounded_shape() {
        let mut context = EditorContext::new();
        context.set_tool(Tool::Circle);
        context.pointer_down(Point::new(0.0, 0.0));
        context.pointer_move(Point::new(5.0, 5.0));
        context.pointer_leave();

        assert!(context.state().is_idle());
        assert!(context.preview().is_none());
        assert!(context.drawing().elements().is_empty());

        // a release after leaving has nothing to commit
        context.pointer_up(Point::new(9.0, 9.0));
        assert!(context.drawing().elements().is_empty());
    }

    #[test]
    fn test_leave_keeps_pencil_points() {
        let mut context = EditorContext::new();
        context.pointer_down(Point::new(0.0, 0.0));
        context.pointer_move(Point::new(2.0, 2.0));
        context.pointer_leave();
        assert_eq!(context.drawing().elements()[0].points().len(), 2);
    }

    #[test]
    fn test_pointer_up_without_down_is_noop() {
        let mut context = EditorContext::new();
        context.set_tool(Tool::Rectangle);
        context.pointer_up(Point::new(3.0, 3.0));
        context.pointer_move(Point::new(4.0, 4.0));
        assert!(context.drawing().elements().is_empty());
        assert!(context.drawing().history().is_empty());
    }

    #[test]
    fn test_tool_change_mid_gesture_applies_to_next_gesture() {
        let mut context = EditorContext::new();
        context.set_tool(Tool::Rectangle);
        context.pointer_down(Point::new(0.0, 0.0));
        context.set_tool(Tool::Pencil);
        context.set_stroke_color(Color32::RED);
        context.pointer_up(Point::new(4.0, 4.0));

        let element = &context.drawing().elements()[0];
        assert_eq!(element.kind(), ShapeKind::Rectangle);
        assert_eq!(element.style().stroke_color, Color32::BLACK);
    }

    #[test]
    fn test_pencil_move_after_undo_is_ignored() {
        let mut context = EditorContext::new();
        context.set_tool(Tool::Line);
        context.pointer_down(Point::ZERO);
        context.pointer_up(Point::new(1.0, 1.0));

        context.set_tool(Tool::Pencil);
        context.pointer_down(Point::new(5.0, 5.0));
        context.undo();
        context.pointer_move(Point::new(6.0, 6.0));

        let elements = context.drawing().elements();
        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].kind(), ShapeKind::Line);
    }
}
