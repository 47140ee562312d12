#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod components;
pub mod config;
pub mod document;
pub mod element;
pub mod error;
pub mod export;
pub mod geometry;
pub mod history;
pub mod id_generator;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod state;
pub mod tools;
pub mod util;

pub use app::SketchApp;
pub use config::SketchConfig;
pub use document::Drawing;
pub use element::{Element, ElementPatch, Shape, ShapeKind, Style};
pub use geometry::{Point, PointerSample, coordinates_from_event};
pub use history::History;
pub use renderer::{CanvasRenderer, RecordingSurface, RoughSurface, SketchSurface, render_all, render_preview};
pub use state::EditorContext;
pub use tools::{Tool, ToolSettings};
