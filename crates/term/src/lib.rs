//! Terminal presentation for rendered scenes.
//!
//! A rendered frame is plain text. This layer places it into a styled
//! framebuffer next to a status line and flushes the result with crossterm,
//! redrawing only the cells that changed since the previous frame.
//!
//! Goals:
//! - Keep the renderer pure; all terminal I/O lives here
//! - One framebuffer pair per session, no per-frame cloning

pub mod fb;
pub mod renderer;
pub mod scene_view;

pub use tui_render3d_raster as raster;
pub use tui_render3d_scene as scene;
pub use tui_render3d_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_frame, TerminalRenderer};
pub use scene_view::{HudStatus, SceneView, Viewport};
