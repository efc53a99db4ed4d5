//! Geometry model - shapes as vertex, edge and face lists
//!
//! Every renderable object implements [`Shape`]. A shape always has vertices;
//! edges feed the wireframe rasterizers and triangulated faces feed the solid
//! ones. Either list may be empty: an edge-less shape draws nothing in the
//! wireframe modes, and a face-less one draws nothing in the culled and solid
//! modes.
//!
//! # Module Structure
//!
//! - [`shape`]: the [`Shape`] trait, [`Edge`], [`Face`] and a free-form [`Mesh`]
//! - [`primitives`]: [`BoxShape`] (8 vertices / 12 edges / 12 faces) and
//!   [`Pyramid`] (5 vertices / 8 edges / wireframe only)
//! - [`text`]: extruded stroke-font [`Text`], generated lazily and cached
//! - [`font`]: the stroke table behind [`Text`]
//!
//! Shapes are shared between scene nodes through `Arc<dyn Shape>`, so the
//! trait requires `Send + Sync`.

pub mod font;
pub mod primitives;
pub mod shape;
pub mod text;

pub use tui_render3d_math as math;

pub use primitives::{BoxShape, Pyramid};
pub use shape::{Edge, Face, Mesh, Shape};
pub use text::Text;
