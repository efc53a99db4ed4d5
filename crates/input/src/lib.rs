//! Terminal input for the viewer.
//!
//! Maps `crossterm` key events into [`crate::types::ViewerAction`] and decides
//! when a key press ends the session. Independent of any UI framework.

pub mod map;

pub use tui_render3d_types as types;

pub use map::{handle_key_event, should_quit};
