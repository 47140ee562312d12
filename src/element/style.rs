use egui::Color32;

/// Sketchiness factor applied to every element.
pub const DEFAULT_ROUGHNESS: f32 = 1.0;

/// Visual attributes attached to an element when it is created.
///
/// A style is copied into the element and never changed in place afterwards;
/// restyling goes through [`crate::document::Drawing::update_by_id`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub stroke_color: Color32,
    /// Always at least 1.0
    pub stroke_width: f32,
    /// `Color32::TRANSPARENT` means unfilled
    pub fill_color: Color32,
    pub roughness: f32,
}

impl Style {
    pub fn new(stroke_color: Color32, stroke_width: f32, fill_color: Color32) -> Self {
        Self {
            stroke_color,
            stroke_width: stroke_width.max(1.0),
            fill_color,
            roughness: DEFAULT_ROUGHNESS,
        }
    }

    /// Same style without a fill (freehand paths are never filled)
    pub fn without_fill(self) -> Self {
        Self {
            fill_color: Color32::TRANSPARENT,
            ..self
        }
    }

    pub fn is_filled(&self) -> bool {
        self.fill_color != Color32::TRANSPARENT
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::new(Color32::BLACK, 2.0, Color32::TRANSPARENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stroke_width_is_clamped() {
        let style = Style::new(Color32::RED, 0.2, Color32::TRANSPARENT);
        assert_eq!(style.stroke_width, 1.0);
        assert_eq!(style.roughness, DEFAULT_ROUGHNESS);
    }

    #[test]
    fn test_without_fill() {
        let style = Style::new(Color32::RED, 3.0, Color32::BLUE);
        assert!(style.is_filled());
        assert!(!style.without_fill().is_filled());
    }
}
