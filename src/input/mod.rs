use egui::{Context, Event, PointerButton, Pos2, Rect};

use crate::geometry::PointerSample;

mod router;
pub use router::route_event;

/// Canvas input events, in screen coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed over the canvas
    PointerDown(PointerSample),
    /// Pointer moved over the canvas
    PointerMove(PointerSample),
    /// Primary button released over the canvas
    PointerUp(PointerSample),
    /// Pointer left the canvas
    PointerLeave,
}

/// Handles converting raw egui input into canvas InputEvents
#[derive(Debug, Default)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    was_inside: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process this frame's raw egui input against the canvas rectangle
    pub fn process_input(&mut self, ctx: &Context, canvas_rect: Rect) -> Vec<InputEvent> {
        ctx.input(|input| {
            let touches: Vec<Pos2> = input
                .raw
                .events
                .iter()
                .filter_map(|event| match event {
                    Event::Touch { pos, .. } => Some(*pos),
                    _ => None,
                })
                .collect();

            let released = input.pointer.button_released(PointerButton::Primary);
            // A touch end is followed by PointerGone, which clears the hover position.
            let pointer_pos = input
                .pointer
                .hover_pos()
                .or_else(|| released.then(|| input.pointer.interact_pos()).flatten());

            self.translate(
                pointer_pos,
                input.pointer.button_pressed(PointerButton::Primary),
                released,
                touches,
                canvas_rect,
            )
        })
    }

    /// Turn one frame of pointer state into events.
    /// Order within a frame is down, move, up, leave.
    ///
    /// A release without a position is placed at the last position seen on the canvas.
    pub fn translate(
        &mut self,
        pointer_pos: Option<Pos2>,
        pressed: bool,
        released: bool,
        touches: Vec<Pos2>,
        canvas_rect: Rect,
    ) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let inside = pointer_pos.is_some_and(|pos| canvas_rect.contains(pos));

        let sample = |pos: Pos2| {
            if touches.is_empty() {
                PointerSample::mouse(pos)
            } else {
                PointerSample::Touch {
                    touches: touches.clone(),
                }
            }
        };

        if let Some(pos) = pointer_pos.filter(|_| inside) {
            if pressed {
                events.push(InputEvent::PointerDown(sample(pos)));
            } else if Some(pos) != self.last_pointer_pos {
                events.push(InputEvent::PointerMove(sample(pos)));
            }
        }

        if released {
            let release_pos = pointer_pos.or(self.last_pointer_pos.filter(|_| self.was_inside));
            if let Some(pos) = release_pos.filter(|pos| canvas_rect.contains(*pos)) {
                events.push(InputEvent::PointerUp(sample(pos)));
            }
        }

        if self.was_inside && !inside {
            events.push(InputEvent::PointerLeave);
        }

        self.last_pointer_pos = pointer_pos;
        self.was_inside = inside;
        events
    }
}
