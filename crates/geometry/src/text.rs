//! Extruded stroke-font text.

use std::sync::OnceLock;

use crate::font::{glyph_strokes, GRID_HEIGHT, GRID_WIDTH};
use crate::math::Vector3;
use crate::shape::{Edge, Shape};

#[derive(Debug, Clone, Default)]
struct TextGeometry {
    vertices: Vec<Vector3>,
    edges: Vec<Edge>,
}

/// Text rendered as wireframe "tubes".
///
/// Glyphs are laid out left to right with a uniform advance and the whole
/// string is centered on the origin. Every stroke is duplicated on a front
/// (`+depth/2`) and back (`-depth/2`) plane and the two copies are joined at
/// their endpoints. Geometry is built on first access and cached.
#[derive(Debug)]
pub struct Text {
    text: String,
    size: f64,
    depth: f64,
    spacing: f64,
    geometry: OnceLock<TextGeometry>,
}

impl Text {
    /// Text with glyph height 1, extrusion depth 0.2 and spacing 0.2.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            size: 1.0,
            depth: 0.2,
            spacing: 0.2,
            geometry: OnceLock::new(),
        }
    }

    /// Glyph height in model units.
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self.geometry = OnceLock::new();
        self
    }

    pub fn with_depth(mut self, depth: f64) -> Self {
        self.depth = depth;
        self.geometry = OnceLock::new();
        self
    }

    /// Gap between neighbouring glyphs.
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self.geometry = OnceLock::new();
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Width of one glyph cell.
    pub fn char_width(&self) -> f64 {
        self.scale() * GRID_WIDTH as f64
    }

    /// Horizontal distance between glyph origins.
    pub fn advance(&self) -> f64 {
        self.char_width() + self.spacing
    }

    fn scale(&self) -> f64 {
        self.size / GRID_HEIGHT as f64
    }

    fn geometry(&self) -> &TextGeometry {
        self.geometry.get_or_init(|| self.build())
    }

    fn build(&self) -> TextGeometry {
        let count = self.text.chars().count();
        let mut geo = TextGeometry::default();
        if count == 0 {
            return geo;
        }

        let scale = self.scale();
        let advance = self.advance();
        let total = count as f64 * advance - self.spacing;
        let start_x = -total / 2.0;
        let top = self.size / 2.0;
        let (front, back) = (self.depth / 2.0, -self.depth / 2.0);

        for (i, ch) in self.text.chars().enumerate() {
            let origin_x = start_x + i as f64 * advance;
            for &((x0, y0), (x1, y1)) in glyph_strokes(ch) {
                let a = (origin_x + x0 as f64 * scale, top - y0 as f64 * scale);
                let b = (origin_x + x1 as f64 * scale, top - y1 as f64 * scale);

                let base = geo.vertices.len();
                geo.vertices.push(Vector3::new(a.0, a.1, front));
                geo.vertices.push(Vector3::new(b.0, b.1, front));
                geo.vertices.push(Vector3::new(a.0, a.1, back));
                geo.vertices.push(Vector3::new(b.0, b.1, back));

                geo.edges.push(Edge::new(base, base + 1));
                geo.edges.push(Edge::new(base + 2, base + 3));
                geo.edges.push(Edge::new(base, base + 2));
                geo.edges.push(Edge::new(base + 1, base + 3));
            }
        }
        geo
    }
}

impl Shape for Text {
    fn vertices(&self) -> &[Vector3] {
        &self.geometry().vertices
    }

    fn edges(&self) -> &[Edge] {
        &self.geometry().edges
    }
}
