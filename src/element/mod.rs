use crate::geometry::Point;
use crate::id_generator::{self, ElementId};

mod style;

pub use style::{DEFAULT_ROUGHNESS, Style};

/// Kind of shape, without its geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Pencil,
    Line,
    Rectangle,
    Circle,
}

impl ShapeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Pencil => "pencil",
            ShapeKind::Line => "line",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Circle => "circle",
        }
    }
}

/// Geometry of an element.
///
/// Bounded shapes hold exactly two points, so their arity is fixed by the type.
/// A pencil path always holds at least one point; every constructor in this crate
/// upholds that.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Freehand path, one or more points
    Pencil(Vec<Point>),
    /// Start and end point
    Line([Point; 2]),
    /// Two opposite corners
    Rectangle([Point; 2]),
    /// Center, then a point on the circle
    Circle([Point; 2]),
}

impl Shape {
    /// Build a bounded shape of `kind` spanning `start` to `end`.
    /// For `ShapeKind::Pencil` this yields a two-point path.
    pub fn bounded(kind: ShapeKind, start: Point, end: Point) -> Self {
        match kind {
            ShapeKind::Pencil => Shape::Pencil(vec![start, end]),
            ShapeKind::Line => Shape::Line([start, end]),
            ShapeKind::Rectangle => Shape::Rectangle([start, end]),
            ShapeKind::Circle => Shape::Circle([start, end]),
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Pencil(_) => ShapeKind::Pencil,
            Shape::Line(_) => ShapeKind::Line,
            Shape::Rectangle(_) => ShapeKind::Rectangle,
            Shape::Circle(_) => ShapeKind::Circle,
        }
    }

    pub fn points(&self) -> &[Point] {
        match self {
            Shape::Pencil(points) => points,
            Shape::Line(points) | Shape::Rectangle(points) | Shape::Circle(points) => points,
        }
    }

    /// True if the point count matches what the kind requires
    pub fn has_valid_arity(&self) -> bool {
        match self {
            Shape::Pencil(points) => !points.is_empty(),
            _ => true,
        }
    }
}

/// One persisted shape record of the drawing
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    id: ElementId,
    style: Style,
    shape: Shape,
}

impl Element {
    pub(crate) fn new(id: ElementId, shape: Shape, style: Style) -> Self {
        debug_assert!(shape.has_valid_arity(), "element created with an empty path");
        Self { id, style, shape }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn kind(&self) -> ShapeKind {
        self.shape.kind()
    }

    pub fn points(&self) -> &[Point] {
        self.shape.points()
    }

    /// Copy of this element with one more point on its freehand path.
    /// Returns `None` for bounded shapes.
    pub fn with_appended_point(&self, point: Point) -> Option<Element> {
        match &self.shape {
            Shape::Pencil(points) => {
                let mut points = points.clone();
                points.push(point);
                Some(Element {
                    shape: Shape::Pencil(points),
                    ..self.clone()
                })
            }
            _ => None,
        }
    }

    pub(crate) fn apply(&mut self, patch: ElementPatch) {
        if let Some(shape) = patch.shape {
            self.shape = shape;
        }
        if let Some(style) = patch.style {
            self.style = style;
        }
    }
}

/// Partial update for [`crate::document::Drawing::update_by_id`].
/// Fields left as `None` keep their current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementPatch {
    pub shape: Option<Shape>,
    pub style: Option<Style>,
}

impl ElementPatch {
    pub fn shape(shape: Shape) -> Self {
        Self {
            shape: Some(shape),
            style: None,
        }
    }

    pub fn style(style: Style) -> Self {
        Self {
            shape: None,
            style: Some(style),
        }
    }
}

/// Factory functions for creating elements with fresh ids
pub mod factory {
    use super::*;

    /// Start a freehand path at `start`. The path is never filled.
    pub fn create_pencil(start: Point, style: Style) -> Element {
        Element::new(id_generator::generate_id(), Shape::Pencil(vec![start]), style.without_fill())
    }

    pub fn create_line(start: Point, end: Point, style: Style) -> Element {
        Element::new(id_generator::generate_id(), Shape::Line([start, end]), style)
    }

    pub fn create_rectangle(corner: Point, opposite: Point, style: Style) -> Element {
        Element::new(id_generator::generate_id(), Shape::Rectangle([corner, opposite]), style)
    }

    pub fn create_circle(center: Point, edge: Point, style: Style) -> Element {
        Element::new(id_generator::generate_id(), Shape::Circle([center, edge]), style)
    }

    /// Create a bounded shape of the given kind from a gesture's start and end point
    pub fn create_bounded(kind: ShapeKind, start: Point, end: Point, style: Style) -> Element {
        Element::new(id_generator::generate_id(), Shape::bounded(kind, start, end), style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pencil_drops_fill() {
        let style = Style::new(egui::Color32::RED, 2.0, egui::Color32::BLUE);
        let pencil = factory::create_pencil(Point::new(1.0, 2.0), style);
        assert_eq!(pencil.kind(), ShapeKind::Pencil);
        assert!(!pencil.style().is_filled());
        assert_eq!(pencil.points(), &[Point::new(1.0, 2.0)]);
    }

    #[test]
    fn test_appended_point_keeps_id() {
        let pencil = factory::create_pencil(Point::ZERO, Style::default());
        let longer = pencil.with_appended_point(Point::new(5.0, 5.0)).unwrap();
        assert_eq!(longer.id(), pencil.id());
        assert_eq!(longer.points().len(), 2);
        // original untouched
        assert_eq!(pencil.points().len(), 1);
    }

    #[test]
    fn test_bounded_shapes_do_not_append() {
        let line = factory::create_line(Point::ZERO, Point::new(1.0, 1.0), Style::default());
        assert!(line.with_appended_point(Point::new(2.0, 2.0)).is_none());
    }

    #[test]
    fn test_ids_are_unique() {
        let a = factory::create_circle(Point::ZERO, Point::new(1.0, 0.0), Style::default());
        let b = factory::create_circle(Point::ZERO, Point::new(1.0, 0.0), Style::default());
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_empty_path_has_invalid_arity() {
        assert!(!Shape::Pencil(Vec::new()).has_valid_arity());
        assert!(Shape::Line([Point::ZERO, Point::ZERO]).has_valid_arity());
    }
}
