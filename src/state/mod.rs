mod editor_state;
pub mod context;

pub use editor_state::{EditorState, Gesture, Preview};
pub use context::EditorContext;
