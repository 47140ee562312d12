use egui::Rect;

use super::InputEvent;
use crate::geometry::coordinates_from_event;
use crate::state::EditorContext;

/// Apply one canvas input event to the editor
pub fn route_event(event: &InputEvent, context: &mut EditorContext, canvas_rect: Rect) {
    match event {
        InputEvent::PointerDown(sample) => {
            context.pointer_down(coordinates_from_event(sample, canvas_rect));
        }
        InputEvent::PointerMove(sample) => {
            context.pointer_move(coordinates_from_event(sample, canvas_rect));
        }
        InputEvent::PointerUp(sample) => {
            context.pointer_up(coordinates_from_event(sample, canvas_rect));
        }
        InputEvent::PointerLeave => context.pointer_leave(),
    }
}
