//! Rasterization - projection, culling and the six text renderers
//!
//! [`render`] turns a [`Scene`](scene::Scene) into text. Underneath, a
//! [`Rasterizer`] draws into a [`RasterTarget`]:
//!
//! | Target | Raster unit | Wireframe / particles | Solid |
//! |--------|-------------|-----------------------|-------|
//! | [`AsciiBuffer`] | one cell | wireframe or particle glyph | shading ramp glyph |
//! | [`BrailleBuffer`] | 2x4 dots per cell | binary dot | dithered brightness |
//!
//! Each target keeps one depth store for everything drawn into it. A write
//! lands only when it is strictly nearer (`<`), so for a single render call
//! the output does not depend on drawing order.
//!
//! # Pipeline
//!
//! 1. [`Projector`]: world point to raster point, or `None` behind the camera
//! 2. [`culling`]: screen-space signed area picks front-facing triangles
//! 3. [`line`] / [`triangle`]: clipped Bresenham lines and scanline fills
//! 4. [`RasterTarget::to_frame`]: rows joined by `'\n'`, no trailing newline
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use tui_render3d_raster::render;
//! use tui_render3d_raster::geometry::BoxShape;
//! use tui_render3d_raster::scene::{Camera, Scene, SceneNode};
//! use tui_render3d_raster::types::{RenderMode, RenderOptions};
//!
//! let scene = Scene::new(Camera::default())
//!     .with_node(SceneNode::with_shape(Arc::new(BoxShape::cube(1.0))))
//!     .with_options(RenderOptions::default().with_mode(RenderMode::BrailleCulled));
//! let frame = render(&scene, 40, 12);
//! assert_eq!(frame.lines().count(), 12);
//! ```

pub mod buffer;
pub mod culling;
pub mod line;
pub mod projection;
pub mod rasterizer;
pub mod render;
pub mod triangle;

pub use tui_render3d_geometry as geometry;
pub use tui_render3d_math as math;
pub use tui_render3d_particles as particles;
pub use tui_render3d_scene as scene;
pub use tui_render3d_types as types;

pub use buffer::{encode_braille, AsciiBuffer, BrailleBuffer, RasterTarget};
pub use projection::{project, ProjectedPoint, Projector};
pub use rasterizer::{AsciiRenderer, BrailleRenderer, Rasterizer};
pub use render::render;
