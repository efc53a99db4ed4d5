//! Text-mode 3D renderer (workspace facade crate).
//!
//! Re-exports the member crates under `crates/` as one API:
//! `tui_render3d::{math, types, geometry, particles, scene, raster, term, input}`.
//! The [`viewer`] module holds the interactive viewer's terminal-free state.

pub use tui_render3d_geometry as geometry;
pub use tui_render3d_input as input;
pub use tui_render3d_math as math;
pub use tui_render3d_particles as particles;
pub use tui_render3d_raster as raster;
pub use tui_render3d_scene as scene;
pub use tui_render3d_term as term;
pub use tui_render3d_types as types;

pub mod viewer;

pub use raster::render;
