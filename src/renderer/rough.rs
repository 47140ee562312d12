use egui::epaint::CubicBezierShape;
use egui::{Color32, Pos2, Rect, Shape, Stroke, Vec2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{RoughOptions, SketchSurface};
use crate::element::Style;
use crate::geometry::{Point, RectangleGeometry};

const MAX_RANDOMNESS_OFFSET: f32 = 2.0;
const BOWING: f32 = 1.0;
const HACHURE_ANGLE_DEGREES: f32 = -41.0;
const BACKGROUND: Color32 = Color32::WHITE;

/// egui surface with a hand-drawn look.
///
/// Every draw call seeds its own generator from [`RoughOptions::seed`], so the same
/// input always produces the same shapes.
#[derive(Debug, Clone)]
pub struct RoughSurface {
    rect: Rect,
    shapes: Vec<Shape>,
}

impl RoughSurface {
    /// Surface covering `rect`; canvas-local points are offset by its top-left corner
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            shapes: Vec::new(),
        }
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn into_shapes(self) -> Vec<Shape> {
        self.shapes
    }

    fn to_screen(&self, point: Point) -> Pos2 {
        point.to_screen(self.rect.min)
    }

    fn stroke(style: &Style) -> Stroke {
        Stroke::new(style.stroke_width, style.stroke_color)
    }

    /// Two slightly different passes over the same segment
    fn rough_line(&mut self, rng: &mut StdRng, a: Pos2, b: Pos2, stroke: Stroke, roughness: f32) {
        for overlay in [false, true] {
            let points = bezier_points(rng, a, b, roughness, overlay);
            self.shapes.push(Shape::CubicBezier(CubicBezierShape::from_points_stroke(
                points,
                false,
                Color32::TRANSPARENT,
                stroke,
            )));
        }
    }

    /// Fill a convex polygon with sketchy parallel strokes
    fn hachure(&mut self, rng: &mut StdRng, polygon: &[Pos2], style: &Style) {
        if polygon.len() < 3 {
            return;
        }

        let gap = (style.stroke_width * 4.0).max(4.0);
        let stroke = Stroke::new((style.stroke_width / 2.0).max(0.5), style.fill_color);
        let (sin, cos) = HACHURE_ANGLE_DEGREES.to_radians().sin_cos();

        // Rotate so the fill lines become horizontal, scan, then rotate back.
        let rotated: Vec<Pos2> = polygon
            .iter()
            .map(|p| Pos2::new(p.x * cos + p.y * sin, -p.x * sin + p.y * cos))
            .collect();
        let unrotate = |x: f32, y: f32| Pos2::new(x * cos - y * sin, x * sin + y * cos);

        let min_y = rotated.iter().map(|p| p.y).fold(f32::INFINITY, f32::min);
        let max_y = rotated.iter().map(|p| p.y).fold(f32::NEG_INFINITY, f32::max);

        let mut y = min_y + gap / 2.0;
        while y < max_y {
            let mut crossings: Vec<f32> = Vec::new();
            for (i, a) in rotated.iter().enumerate() {
                let b = rotated[(i + 1) % rotated.len()];
                if (a.y <= y && b.y > y) || (b.y <= y && a.y > y) {
                    let t = (y - a.y) / (b.y - a.y);
                    crossings.push(a.x + t * (b.x - a.x));
                }
            }
            crossings.sort_by(f32::total_cmp);

            for pair in crossings.chunks_exact(2) {
                let points = bezier_points(rng, unrotate(pair[0], y), unrotate(pair[1], y), style.roughness, false);
                self.shapes.push(Shape::CubicBezier(CubicBezierShape::from_points_stroke(
                    points,
                    false,
                    Color32::TRANSPARENT,
                    stroke,
                )));
            }
            y += gap;
        }
    }
}

/// Control points of one wobbly pass from `a` to `b`
fn bezier_points(rng: &mut StdRng, a: Pos2, b: Pos2, roughness: f32, overlay: bool) -> [Pos2; 4] {
    let length = (b - a).length();
    let mut offset = MAX_RANDOMNESS_OFFSET;
    if offset * offset * 100.0 > length * length {
        offset = length / 10.0;
    }
    let magnitude = if overlay { offset / 2.0 } else { offset };
    let diverge = 0.2 + rng.random::<f32>() * 0.2;
    let bow = Vec2::new(b.y - a.y, a.x - b.x) * (BOWING * MAX_RANDOMNESS_OFFSET / 200.0);

    let mut jitter = || {
        Vec2::new(
            rng.random_range(-magnitude..=magnitude),
            rng.random_range(-magnitude..=magnitude),
        ) * roughness
    };

    [
        a + jitter(),
        a + (b - a) * diverge + bow + jitter(),
        a + (b - a) * (2.0 * diverge) + bow + jitter(),
        b + jitter(),
    ]
}

impl SketchSurface for RoughSurface {
    fn clear(&mut self) {
        self.shapes.clear();
        self.shapes.push(Shape::rect_filled(self.rect, 0.0, BACKGROUND));
    }

    fn draw_line(&mut self, start: Point, end: Point, options: &RoughOptions) {
        let mut rng = StdRng::seed_from_u64(options.seed);
        let (a, b) = (self.to_screen(start), self.to_screen(end));
        self.rough_line(&mut rng, a, b, Self::stroke(&options.style), options.style.roughness);
    }

    fn draw_rectangle(&mut self, origin: Point, width: f32, height: f32, options: &RoughOptions) {
        let mut rng = StdRng::seed_from_u64(options.seed);
        let geometry = RectangleGeometry { origin, width, height };
        let corners = geometry.corners().map(|corner| self.to_screen(corner));

        if options.style.is_filled() {
            self.hachure(&mut rng, &corners, &options.style);
        }
        let stroke = Self::stroke(&options.style);
        for i in 0..corners.len() {
            let next = corners[(i + 1) % corners.len()];
            self.rough_line(&mut rng, corners[i], next, stroke, options.style.roughness);
        }
    }

    fn draw_circle(&mut self, center: Point, diameter: f32, options: &RoughOptions) {
        let radius = diameter / 2.0;
        if radius <= 0.0 {
            return;
        }
        let mut rng = StdRng::seed_from_u64(options.seed);
        let center = self.to_screen(center);
        let steps = (radius * std::f32::consts::TAU / 8.0).ceil().clamp(16.0, 72.0) as usize;
        let outline: Vec<Pos2> = (0..steps)
            .map(|i| {
                let angle = std::f32::consts::TAU * i as f32 / steps as f32;
                center + Vec2::angled(angle) * radius
            })
            .collect();

        if options.style.is_filled() {
            self.hachure(&mut rng, &outline, &options.style);
        }

        let stroke = Self::stroke(&options.style);
        let wobble = (radius * 0.05).min(MAX_RANDOMNESS_OFFSET * 1.5) * options.style.roughness;
        for _ in 0..2 {
            let start_angle: f32 = rng.random_range(0.0..std::f32::consts::TAU);
            let points: Vec<Pos2> = (0..steps)
                .map(|i| {
                    let angle = start_angle + std::f32::consts::TAU * i as f32 / steps as f32;
                    let r = radius + rng.random_range(-wobble..=wobble);
                    center + Vec2::angled(angle) * r
                })
                .collect();
            self.shapes.push(Shape::closed_line(points, stroke));
        }
    }

    fn draw_path(&mut self, points: &[Point], options: &RoughOptions) {
        let style = &options.style;
        let screen: Vec<Pos2> = points.iter().map(|point| self.to_screen(*point)).collect();

        match screen.as_slice() {
            [] => {}
            [dot] => {
                self.shapes.push(Shape::circle_filled(*dot, style.stroke_width / 2.0, style.stroke_color));
            }
            _ => {
                let mut rng = StdRng::seed_from_u64(options.seed);
                let stroke = Self::stroke(style);
                for magnitude in [0.75, 0.5] {
                    let magnitude = magnitude * style.roughness;
                    let wobbly: Vec<Pos2> = screen
                        .iter()
                        .map(|p| {
                            *p + Vec2::new(
                                rng.random_range(-magnitude..=magnitude),
                                rng.random_range(-magnitude..=magnitude),
                            )
                        })
                        .collect();
                    self.shapes.push(Shape::line(wobbly, stroke));
                }
            }
        }
    }
}
