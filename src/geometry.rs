use egui::{Pos2, Rect, Vec2};

/// A position in canvas-local coordinates (origin at the canvas top-left, units in pixels).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance(self, other: Point) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Map back to screen space given the canvas origin
    pub fn to_screen(self, canvas_origin: Pos2) -> Pos2 {
        canvas_origin + Vec2::new(self.x, self.y)
    }
}

impl From<Pos2> for Point {
    fn from(pos: Pos2) -> Self {
        Self::new(pos.x, pos.y)
    }
}

impl From<Point> for Pos2 {
    fn from(point: Point) -> Self {
        Pos2::new(point.x, point.y)
    }
}

/// Raw pointer sample as delivered by the input surface, in absolute screen coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerSample {
    /// Mouse or pen style event (`clientX/clientY`)
    Mouse { client_x: f32, client_y: f32 },
    /// Touch event carrying every active touch point; only the first one is used
    Touch { touches: Vec<Pos2> },
}

impl PointerSample {
    pub fn mouse(pos: Pos2) -> Self {
        Self::Mouse {
            client_x: pos.x,
            client_y: pos.y,
        }
    }

    fn client_pos(&self) -> Option<Pos2> {
        match self {
            Self::Mouse { client_x, client_y } => Some(Pos2::new(*client_x, *client_y)),
            Self::Touch { touches } => touches.first().copied(),
        }
    }
}

/// Convert a pointer or touch sample into canvas-local coordinates by subtracting
/// the canvas bounding-box origin. A touch sample without touch points maps to the origin.
pub fn coordinates_from_event(event: &PointerSample, canvas_bounds: Rect) -> Point {
    match event.client_pos() {
        Some(pos) => Point::new(pos.x - canvas_bounds.min.x, pos.y - canvas_bounds.min.y),
        None => Point::ZERO,
    }
}

/// Origin plus signed extents of a rectangle spanned by two corners.
/// Negative width/height are kept; the rectangle extends in the negative direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectangleGeometry {
    pub origin: Point,
    pub width: f32,
    pub height: f32,
}

impl RectangleGeometry {
    pub fn from_corners(first: Point, second: Point) -> Self {
        Self {
            origin: first,
            width: second.x - first.x,
            height: second.y - first.y,
        }
    }

    /// The four corners in drawing order, starting at the origin
    pub fn corners(&self) -> [Point; 4] {
        let Point { x, y } = self.origin;
        [
            Point::new(x, y),
            Point::new(x + self.width, y),
            Point::new(x + self.width, y + self.height),
            Point::new(x, y + self.height),
        ]
    }
}

/// Center and diameter of a circle defined by its center and a point on its surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleGeometry {
    pub center: Point,
    pub diameter: f32,
}

impl CircleGeometry {
    pub fn from_center_and_edge(center: Point, edge: Point) -> Self {
        // The draw call takes a full diameter, not the radius.
        Self {
            center,
            diameter: 2.0 * center.distance(edge),
        }
    }

    pub fn radius(&self) -> f32 {
        self.diameter / 2.0
    }
}
