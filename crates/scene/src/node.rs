//! Scene node tree.

use std::sync::Arc;

use crate::geometry::Shape;
use crate::math::Matrix4;

/// A node with a local transform, an optional shared shape and owned children.
///
/// Children are owned, so the tree is acyclic by construction. Shapes are
/// shared through `Arc` and may appear under many nodes.
#[derive(Debug, Clone, Default)]
pub struct SceneNode {
    pub shape: Option<Arc<dyn Shape>>,
    /// Local transform, applied before the parent's world transform.
    pub transform: Matrix4,
    pub children: Vec<SceneNode>,
}

impl SceneNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Node drawing `shape` with an identity transform.
    pub fn with_shape(shape: Arc<dyn Shape>) -> Self {
        Self {
            shape: Some(shape),
            ..Self::default()
        }
    }

    pub fn transformed(mut self, transform: Matrix4) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_child(mut self, child: SceneNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn add_child(&mut self, child: SceneNode) {
        self.children.push(child);
    }

    /// Total nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(SceneNode::node_count).sum::<usize>()
    }

    /// Depth-first, pre-order walk over every node that has a shape.
    ///
    /// `f` receives the shape and its world transform
    /// (`parent_world * local`). Siblings are visited in insertion order.
    pub fn visit<F>(&self, parent_world: &Matrix4, f: &mut F)
    where
        F: FnMut(&dyn Shape, &Matrix4),
    {
        let world = *parent_world * self.transform;
        if let Some(shape) = &self.shape {
            f(shape.as_ref(), &world);
        }
        for child in &self.children {
            child.visit(&world, f);
        }
    }
}
