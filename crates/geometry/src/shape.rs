//! Shape capability trait and index types.

use std::fmt;

use crate::math::Vector3;

/// Unordered vertex index pair, stored as `(min, max)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge(pub usize, pub usize);

impl Edge {
    /// Create an edge with its indices normalized to `(min, max)`.
    pub fn new(a: usize, b: usize) -> Self {
        if a <= b {
            Self(a, b)
        } else {
            Self(b, a)
        }
    }
}

/// Triangle of three vertex indices, wound counter-clockwise seen from outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Face {
    pub v0: usize,
    pub v1: usize,
    pub v2: usize,
}

impl Face {
    pub const fn new(v0: usize, v1: usize, v2: usize) -> Self {
        Self { v0, v1, v2 }
    }

    pub const fn indices(&self) -> [usize; 3] {
        [self.v0, self.v1, self.v2]
    }

    /// The triangle's three sides as normalized edges.
    pub fn edges(&self) -> [Edge; 3] {
        [
            Edge::new(self.v0, self.v1),
            Edge::new(self.v1, self.v2),
            Edge::new(self.v2, self.v0),
        ]
    }
}

/// A renderable shape.
///
/// `edges` and `faces` default to empty. A shape without edges is invisible to
/// the wireframe rasterizers; one without faces is invisible to the culled and
/// solid ones.
pub trait Shape: fmt::Debug + Send + Sync {
    fn vertices(&self) -> &[Vector3];

    fn edges(&self) -> &[Edge] {
        &[]
    }

    fn faces(&self) -> &[Face] {
        &[]
    }
}

/// Free-form shape built from explicit lists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vector3>,
    edges: Vec<Edge>,
    faces: Vec<Face>,
}

impl Mesh {
    pub fn new(vertices: Vec<Vector3>) -> Self {
        Self {
            vertices,
            edges: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Add edges. Pairs are normalized and duplicates dropped.
    pub fn with_edges(mut self, edges: impl IntoIterator<Item = (usize, usize)>) -> Self {
        for (a, b) in edges {
            let e = Edge::new(a, b);
            if !self.edges.contains(&e) {
                self.edges.push(e);
            }
        }
        self
    }

    pub fn with_faces(mut self, faces: impl IntoIterator<Item = Face>) -> Self {
        self.faces.extend(faces);
        self
    }

    /// Add the edges of every face (deduplicated).
    pub fn with_face_edges(self) -> Self {
        let pairs: Vec<(usize, usize)> = self
            .faces
            .iter()
            .flat_map(|f| f.edges())
            .map(|e| (e.0, e.1))
            .collect();
        self.with_edges(pairs)
    }
}

impl Shape for Mesh {
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
