use egui::Color32;
use log::info;

use super::Tool;
use crate::element::Style;

pub const MIN_STROKE_WIDTH: f32 = 1.0;
pub const MAX_STROKE_WIDTH: f32 = 20.0;

/// Quick-pick widths shown next to the slider
pub const STROKE_WIDTH_PRESETS: [f32; 5] = [1.0, 2.0, 3.0, 5.0, 8.0];

/// Swatches offered for both stroke and fill
pub const COLOR_PALETTE: [Color32; 10] = [
    Color32::from_rgb(0x00, 0x00, 0x00),
    Color32::from_rgb(0xff, 0xff, 0xff),
    Color32::from_rgb(0xff, 0x00, 0x00),
    Color32::from_rgb(0x00, 0xff, 0x00),
    Color32::from_rgb(0x00, 0x00, 0xff),
    Color32::from_rgb(0xff, 0xff, 0x00),
    Color32::from_rgb(0xff, 0x00, 0xff),
    Color32::from_rgb(0x00, 0xff, 0xff),
    Color32::from_rgb(0xff, 0x80, 0x00),
    Color32::from_rgb(0x80, 0x00, 0xff),
];

/// Active tool and the style applied to newly created elements
#[derive(Debug, Clone, PartialEq)]
pub struct ToolSettings {
    current_tool: Tool,
    stroke_color: Color32,
    stroke_width: f32,
    fill_color: Color32,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            current_tool: Tool::Pencil,
            stroke_color: Color32::BLACK,
            stroke_width: 2.0,
            fill_color: Color32::TRANSPARENT,
        }
    }
}

impl ToolSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_tool(&self) -> Tool {
        self.current_tool
    }

    pub fn set_tool(&mut self, tool: Tool) {
        if tool != self.current_tool {
            info!("Tool changed: {} -> {}", self.current_tool.name(), tool.name());
            self.current_tool = tool;
        }
    }

    pub fn stroke_color(&self) -> Color32 {
        self.stroke_color
    }

    pub fn set_stroke_color(&mut self, color: Color32) {
        self.stroke_color = color;
    }

    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    pub fn set_stroke_width(&mut self, width: f32) {
        self.stroke_width = width.clamp(MIN_STROKE_WIDTH, MAX_STROKE_WIDTH);
    }

    pub fn fill_color(&self) -> Color32 {
        self.fill_color
    }

    pub fn set_fill_color(&mut self, color: Color32) {
        self.fill_color = color;
    }

    /// Style snapshot for an element created now
    pub fn style(&self) -> Style {
        Style::new(self.stroke_color, self.stroke_width, self.fill_color)
    }
}
