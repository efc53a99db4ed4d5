//! Scene description - camera, node tree and particle attachments
//!
//! A [`Scene`] is everything one frame needs: the [`Camera`], the root of the
//! [`SceneNode`] tree, the particle systems attached under the root and the
//! [`RenderOptions`] selecting how it is drawn.
//!
//! # World Transforms
//!
//! A node's world transform is `parent_world * local`, so a child's own
//! transform is applied first. Rendering walks the tree depth-first in
//! pre-order; particle attachments are drawn after the tree, in attachment
//! order, as points: their attachment transform moves them but never orients them.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use tui_render3d_scene::{Camera, Scene, SceneNode};
//! use tui_render3d_scene::geometry::BoxShape;
//! use tui_render3d_scene::math::Matrix4;
//!
//! let cube = SceneNode::with_shape(Arc::new(BoxShape::cube(1.0)))
//!     .transformed(Matrix4::rotation(0.3, 0.6, 0.0));
//! let scene = Scene::new(Camera::orbit(4.0, 0.5, 0.3, Default::default()))
//!     .with_node(cube);
//! assert_eq!(scene.root.node_count(), 2);
//! ```

pub mod camera;
pub mod node;

pub use tui_render3d_geometry as geometry;
pub use tui_render3d_math as math;
pub use tui_render3d_particles as particles;
pub use tui_render3d_types as types;

pub use camera::Camera;
pub use node::SceneNode;

use crate::math::Matrix4;
use crate::particles::ParticleSystem;
use crate::types::RenderOptions;

/// A particle system placed in the scene by a single transform.
#[derive(Debug)]
pub struct ParticleSceneNode {
    pub system: ParticleSystem,
    /// Applied to particle positions only.
    pub transform: Matrix4,
}

impl ParticleSceneNode {
    pub fn new(system: ParticleSystem) -> Self {
        Self {
            system,
            transform: Matrix4::identity(),
        }
    }

    pub fn transformed(mut self, transform: Matrix4) -> Self {
        self.transform = transform;
        self
    }
}

/// Complete frame description.
#[derive(Debug, Default)]
pub struct Scene {
    pub camera: Camera,
    pub root: SceneNode,
    pub particles: Vec<ParticleSceneNode>,
    pub options: RenderOptions,
}

impl Scene {
    /// Empty scene viewed through `camera` with default options.
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            ..Self::default()
        }
    }

    /// Attach `node` under the root.
    pub fn with_node(mut self, node: SceneNode) -> Self {
        self.root.add_child(node);
        self
    }

    pub fn with_particles(mut self, node: ParticleSceneNode) -> Self {
        self.particles.push(node);
        self
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// Tick every attached particle system by `dt` seconds.
    pub fn update(&mut self, dt: f64) {
        for node in &mut self.particles {
            node.system.update(dt);
        }
    }

    /// Clear every attached particle system.
    pub fn reset_particles(&mut self) {
        for node in &mut self.particles {
            node.system.reset();
        }
    }

    /// Live particles across all attachments.
    pub fn particle_count(&self) -> usize {
        self.particles.iter().map(|n| n.system.len()).sum()
    }
}
