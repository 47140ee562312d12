//! Render dispatcher: maps elements onto draw calls of a [`SketchSurface`].

use egui::{Painter, Rect, Shape as EguiShape};
use log::trace;

use crate::document::Drawing;
use crate::element::{Element, Shape, Style};
use crate::geometry::{CircleGeometry, Point, RectangleGeometry};
use crate::id_generator::ElementId;
use crate::state::Preview;

mod rough;

pub use rough::RoughSurface;

/// Seed used for the in-progress preview, so it does not flicker between frames
pub const PREVIEW_SEED: u64 = 0x5eed;

/// Options for a single draw call: the element style plus the seed for its jitter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoughOptions {
    pub style: Style,
    pub seed: u64,
}

impl RoughOptions {
    pub fn new(style: Style, seed: u64) -> Self {
        Self { style, seed }
    }

    pub fn for_element(element: &Element) -> Self {
        Self::new(*element.style(), seed_for(element.id()))
    }
}

/// Stable jitter seed derived from an element id
pub fn seed_for(id: ElementId) -> u64 {
    let bits = id.as_u128();
    (bits as u64) ^ ((bits >> 64) as u64)
}

/// A 2D drawing target that renders shapes in a hand-drawn style
pub trait SketchSurface {
    /// Wipe everything drawn so far
    fn clear(&mut self);

    fn draw_line(&mut self, start: Point, end: Point, options: &RoughOptions);

    /// `width` and `height` may be negative
    fn draw_rectangle(&mut self, origin: Point, width: f32, height: f32, options: &RoughOptions);

    fn draw_circle(&mut self, center: Point, diameter: f32, options: &RoughOptions);

    fn draw_path(&mut self, points: &[Point], options: &RoughOptions);
}

/// Issue exactly one draw call for `shape`
pub fn draw_shape(shape: &Shape, options: &RoughOptions, target: &mut dyn SketchSurface) {
    match shape {
        Shape::Pencil(points) => target.draw_path(points, options),
        Shape::Line([start, end]) => target.draw_line(*start, *end, options),
        Shape::Rectangle([corner, opposite]) => {
            let rect = RectangleGeometry::from_corners(*corner, *opposite);
            target.draw_rectangle(rect.origin, rect.width, rect.height, options);
        }
        Shape::Circle([center, edge]) => {
            let circle = CircleGeometry::from_center_and_edge(*center, *edge);
            target.draw_circle(circle.center, circle.diameter, options);
        }
    }
}

/// Clear the target and draw every element in order, later elements on top
pub fn render_all(elements: &[Element], target: &mut dyn SketchSurface) {
    target.clear();
    for element in elements {
        draw_shape(element.shape(), &RoughOptions::for_element(element), target);
    }
    trace!("rendered {} elements", elements.len());
}

/// Committed elements plus one transient draw call for the preview
pub fn render_preview(elements: &[Element], preview: &Preview, target: &mut dyn SketchSurface) {
    render_all(elements, target);
    draw_shape(&preview.shape, &RoughOptions::new(preview.style, PREVIEW_SEED), target);
}

/// A draw call as seen by a [`RecordingSurface`]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Line {
        start: Point,
        end: Point,
        options: RoughOptions,
    },
    Rectangle {
        origin: Point,
        width: f32,
        height: f32,
        options: RoughOptions,
    },
    Circle {
        center: Point,
        diameter: f32,
        options: RoughOptions,
    },
    Path {
        points: Vec<Point>,
        options: RoughOptions,
    },
}

/// Surface that records draw calls instead of painting them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingSurface {
    calls: Vec<DrawCall>,
    clears: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls issued since the last clear
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn clear_count(&self) -> usize {
        self.clears
    }
}

impl SketchSurface for RecordingSurface {
    fn clear(&mut self) {
        self.calls.clear();
        self.clears += 1;
    }

    fn draw_line(&mut self, start: Point, end: Point, options: &RoughOptions) {
        self.calls.push(DrawCall::Line {
            start,
            end,
            options: *options,
        });
    }

    fn draw_rectangle(&mut self, origin: Point, width: f32, height: f32, options: &RoughOptions) {
        self.calls.push(DrawCall::Rectangle {
            origin,
            width,
            height,
            options: *options,
        });
    }

    fn draw_circle(&mut self, center: Point, diameter: f32, options: &RoughOptions) {
        self.calls.push(DrawCall::Circle {
            center,
            diameter,
            options: *options,
        });
    }

    fn draw_path(&mut self, points: &[Point], options: &RoughOptions) {
        self.calls.push(DrawCall::Path {
            points: points.to_vec(),
            options: *options,
        });
    }
}

struct CachedFrame {
    revision: u64,
    rect: Rect,
    shapes: Vec<EguiShape>,
}

/// Paints the drawing onto the egui canvas.
///
/// Committed elements are re-rendered only when the drawing changes or the
/// canvas is resized; the preview is drawn fresh every frame on top.
#[derive(Default)]
pub struct CanvasRenderer {
    cache: Option<CachedFrame>,
}

impl std::fmt::Debug for CanvasRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CanvasRenderer")
            .field("cached_shapes", &self.cache.as_ref().map(|frame| frame.shapes.len()))
            .finish()
    }
}

impl CanvasRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shapes for the committed elements, re-rendered if stale
    pub fn committed_shapes(&mut self, drawing: &Drawing, rect: Rect) -> &[EguiShape] {
        let stale = self
            .cache
            .as_ref()
            .is_none_or(|frame| frame.revision != drawing.revision() || frame.rect != rect);

        if stale {
            let mut surface = RoughSurface::new(rect);
            render_all(drawing.elements(), &mut surface);
            log::debug!(
                "re-rendered {} elements at revision {}",
                drawing.elements().len(),
                drawing.revision()
            );
            self.cache = Some(CachedFrame {
                revision: drawing.revision(),
                rect,
                shapes: surface.into_shapes(),
            });
        }

        self.cache
            .as_ref()
            .map(|frame| frame.shapes.as_slice())
            .unwrap_or_default()
    }

    pub fn paint(&mut self, painter: &Painter, rect: Rect, drawing: &Drawing, preview: Option<&Preview>) {
        painter.extend(self.committed_shapes(drawing, rect).iter().cloned());

        if let Some(preview) = preview {
            let mut surface = RoughSurface::new(rect);
            draw_shape(&preview.shape, &RoughOptions::new(preview.style, PREVIEW_SEED), &mut surface);
            painter.extend(surface.into_shapes());
        }
    }
}
