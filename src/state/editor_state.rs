//! The gesture state machine of the canvas.
//!
//! ```text
//!            pointer down
//!   ┌──────┐ ───────────► ┌─────────┐ ◄─┐
//!   │ Idle │              │ Drawing │   │ pointer move
//!   └──────┘ ◄─────────── └─────────┘ ──┘
//!          pointer up / pointer leave
//! ```
//!
//! A gesture captures the tool and style at pointer down, so changing either
//! while drawing only affects the next gesture.
use crate::element::{Shape, Style};
use crate::geometry::Point;
use crate::id_generator::ElementId;
use crate::tools::Tool;

/// An in-progress drawing gesture
#[derive(Debug, Clone, PartialEq)]
pub struct Gesture {
    pub tool: Tool,
    pub style: Style,
    pub start: Point,
    pub current: Point,
    /// Element being extended by a freehand gesture
    pub pencil_id: Option<ElementId>,
}

impl Gesture {
    /// Transient shape for a bounded tool, `None` for freehand gestures
    pub fn preview(&self) -> Option<Preview> {
        if self.tool.is_freehand() {
            return None;
        }
        Some(Preview {
            shape: Shape::bounded(self.tool.shape_kind(), self.start, self.current),
            style: self.style,
        })
    }
}

/// Shape drawn on top of the committed elements while a bounded gesture is in progress.
/// Never stored in the drawing or its history.
#[derive(Debug, Clone, PartialEq)]
pub struct Preview {
    pub shape: Shape,
    pub style: Style,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum EditorState {
    #[default]
    Idle,
    Drawing(Gesture),
}

impl EditorState {
    pub fn is_idle(&self) -> bool {
        matches!(self, EditorState::Idle)
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self, EditorState::Drawing(_))
    }

    pub fn gesture(&self) -> Option<&Gesture> {
        match self {
            EditorState::Drawing(gesture) => Some(gesture),
            EditorState::Idle => None,
        }
    }

    pub fn gesture_mut(&mut self) -> Option<&mut Gesture> {
        match self {
            EditorState::Drawing(gesture) => Some(gesture),
            EditorState::Idle => None,
        }
    }

    /// Leave the drawing state, returning the gesture that was in progress
    pub fn finish(&mut self) -> Option<Gesture> {
        match std::mem::take(self) {
            EditorState::Drawing(gesture) => Some(gesture),
            EditorState::Idle => None,
        }
    }
}
