use crate::element::ShapeKind;

pub mod settings;

pub use settings::ToolSettings;

/// Drawing tools available on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tool {
    #[default]
    Pencil,
    Line,
    Rectangle,
    Circle,
}

impl Tool {
    pub const ALL: [Tool; 4] = [Tool::Pencil, Tool::Line, Tool::Rectangle, Tool::Circle];

    pub fn name(&self) -> &'static str {
        match self {
            Tool::Pencil => "Pencil",
            Tool::Line => "Line",
            Tool::Rectangle => "Rectangle",
            Tool::Circle => "Circle",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Tool::Pencil => "✏",
            Tool::Line => "╱",
            Tool::Rectangle => "▭",
            Tool::Circle => "◯",
        }
    }

    /// Kind of element this tool creates
    pub fn shape_kind(&self) -> ShapeKind {
        match self {
            Tool::Pencil => ShapeKind::Pencil,
            Tool::Line => ShapeKind::Line,
            Tool::Rectangle => ShapeKind::Rectangle,
            Tool::Circle => ShapeKind::Circle,
        }
    }

    /// Freehand tools commit while the pointer moves; bounded tools commit on release
    pub fn is_freehand(&self) -> bool {
        matches!(self, Tool::Pencil)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tool_is_pencil() {
        assert_eq!(Tool::default(), Tool::Pencil);
        assert!(Tool::Pencil.is_freehand());
        assert!(!Tool::Circle.is_freehand());
    }

    #[test]
    fn test_tools_map_to_shape_kinds() {
        let kinds: Vec<_> = Tool::ALL.iter().map(Tool::shape_kind).collect();
        assert_eq!(
            kinds,
            vec![ShapeKind::Pencil, ShapeKind::Line, ShapeKind::Rectangle, ShapeKind::Circle]
        );
    }
}
