//! Box and pyramid primitives, centered at the origin.

use crate::math::Vector3;
use crate::shape::{Edge, Face, Shape};

/// Box vertex order: back face (z-) counter-clockwise from bottom-left, then front face (z+).
const BOX_EDGES: [(usize, usize); 12] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 0),
    (4, 5),
    (5, 6),
    (6, 7),
    (7, 4),
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];

/// Two triangles per side, counter-clockwise seen from outside.
const BOX_FACES: [[usize; 3]; 12] = [
    // front (+z)
    [4, 5, 6],
    [4, 6, 7],
    // back (-z)
    [0, 3, 2],
    [0, 2, 1],
    // right (+x)
    [1, 2, 6],
    [1, 6, 5],
    // left (-x)
    [0, 4, 7],
    [0, 7, 3],
    // top (+y)
    [3, 7, 6],
    [3, 6, 2],
    // bottom (-y)
    [0, 1, 5],
    [0, 5, 4],
];

/// Axis-aligned box.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxShape {
    vertices: Vec<Vector3>,
    edges: Vec<Edge>,
    faces: Vec<Face>,
}

impl BoxShape {
    pub fn new(width: f64, height: f64, depth: f64) -> Self {
        let (hx, hy, hz) = (width / 2.0, height / 2.0, depth / 2.0);
        let vertices = vec![
            Vector3::new(-hx, -hy, -hz),
            Vector3::new(hx, -hy, -hz),
            Vector3::new(hx, hy, -hz),
            Vector3::new(-hx, hy, -hz),
            Vector3::new(-hx, -hy, hz),
            Vector3::new(hx, -hy, hz),
            Vector3::new(hx, hy, hz),
            Vector3::new(-hx, hy, hz),
        ];
        Self {
            vertices,
            edges: BOX_EDGES.iter().map(|&(a, b)| Edge::new(a, b)).collect(),
            faces: BOX_FACES.iter().map(|&[a, b, c]| Face::new(a, b, c)).collect(),
        }
    }

    pub fn cube(size: f64) -> Self {
        Self::new(size, size, size)
    }
}

impl Default for BoxShape {
    fn default() -> Self {
        Self::cube(1.0)
    }
}

impl Shape for BoxShape {
    fn vertices(&self) -> &[Vector3] {
        &self.vertices
    }

    fn edges(&self) -> &[Edge] {
        &self.edges
    }

    fn faces(&self) -> &[Face] {
        &self.faces
    }
}

/// Square-based pyramid, apex up. Wireframe only: it has no faces.
#[derive(Debug, Clone, PartialEq)]
pub struct Pyramid {
    vertices: Vec<Vector3>,
    edges: Vec<Edge>,
}

impl Pyramid {
    pub fn new(base: f64, height: f64) -> Self {
        let (hb, hh) = (base / 2.0, height / 2.0);
        let vertices = vec![
            Vector3::new(-hb, -hh, -hb),
            Vector3::new(hb, -hh, -hb),
            Vector3::new(hb, -hh, hb),
            Vector3::new(-hb, -hh, hb),
            Vector3::new(0.0, hh, 0.0),
        ];
        let edges = [(0, 1), (1, 2), (2, 3), (3, 0), (0, 4), (1, 4), (2, 4), (3, 4)]
            .iter()
            .map(|&(a, b)| Edge::new(a, b))
            .collect();
        Self { vertices, edges }
    }
}

impl Default for Pyramid {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}

impl Shape for Pyramid {
    fn vertices(&self) -> &[Vector3] {
        &self.vertices
    }

    fn edges(&self) -> &[Edge] {
        &self.edges
    }
}
