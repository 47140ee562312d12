pub mod color_swatch;
pub mod tool_button;

pub use color_swatch::ColorSwatch;
pub use tool_button::ToolButton;
