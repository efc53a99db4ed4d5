//! Whole-scene rendering entry point.

use crate::buffer::RasterTarget;
use crate::math::Matrix4;
use crate::rasterizer::Rasterizer;
use crate::scene::Scene;
use crate::types::RenderMode;

/// Render `scene` to `height` lines of `width` terminal cells.
///
/// The mode in `scene.options` picks the rasterizer. The node tree is drawn
/// depth-first in pre-order, then every particle attachment in order, all
/// into one freshly allocated buffer. A zero `width` or `height` yields an
/// empty string.
pub fn render(scene: &Scene, width: usize, height: usize) -> String {
    if width == 0 || height == 0 {
        return String::new();
    }
    let options = &scene.options;
    let aspect = width as f64 / height as f64;
    let view_projection = scene.camera.view_projection(aspect);

    log::trace!(
        "render {}x{} {} nodes={} particles={}",
        width,
        height,
        options.mode.as_str(),
        scene.root.node_count(),
        scene.particle_count()
    );

    match options.mode {
        RenderMode::AsciiWireframe | RenderMode::AsciiCulled | RenderMode::AsciiSolid => {
            let mut r = Rasterizer::ascii(width, height, options);
            draw(&mut r, scene, &view_projection);
            r.frame()
        }
        RenderMode::BrailleWireframe | RenderMode::BrailleCulled | RenderMode::BrailleSolid => {
            let mut r = Rasterizer::braille(width, height, options);
            draw(&mut r, scene, &view_projection);
            r.frame()
        }
    }
}

fn draw<T: RasterTarget>(r: &mut Rasterizer<T>, scene: &Scene, view_projection: &Matrix4) {
    let mode = scene.options.mode;
    let style = scene.options.shading;

    scene.root.visit(&Matrix4::identity(), &mut |shape, model| match mode {
        RenderMode::AsciiWireframe | RenderMode::BrailleWireframe => {
            r.render_shape(shape, model, view_projection)
        }
        RenderMode::AsciiCulled | RenderMode::BrailleCulled => {
            r.render_shape_culled(shape, model, view_projection)
        }
        RenderMode::AsciiSolid | RenderMode::BrailleSolid => {
            r.render_shape_solid(shape, model, view_projection, style)
        }
    });

    for node in &scene.particles {
        r.render_particles(node.system.particles(), &node.transform, view_projection);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::geometry::BoxShape;
    use crate::scene::{Camera, SceneNode};
    use crate::types::RenderOptions;

    fn box_scene(mode: RenderMode) -> Scene {
        Scene::new(Camera::default())
            .with_node(
                SceneNode::with_shape(Arc::new(BoxShape::cube(1.5)))
                    .transformed(Matrix4::rotation(0.5, 0.8, 0.0)),
            )
            .with_options(RenderOptions::default().with_mode(mode))
    }

    #[test]
    fn empty_scene_is_blank() {
        let frame = render(&Scene::default(), 7, 3);
        assert_eq!(frame, "       \n       \n       ");

        let scene = Scene::default()
            .with_options(RenderOptions::default().with_mode(RenderMode::BrailleSolid));
        let frame = render(&scene, 4, 2);
        assert_eq!(frame, "\u{2800}\u{2800}\u{2800}\u{2800}\n\u{2800}\u{2800}\u{2800}\u{2800}");
    }

    #[test]
    fn zero_dimensions_render_nothing() {
        assert_eq!(render(&box_scene(RenderMode::AsciiSolid), 0, 10), "");
        assert_eq!(render(&box_scene(RenderMode::BrailleSolid), 10, 0), "");
    }

    #[test]
    fn every_mode_has_exact_dimensions() {
        for mode in RenderMode::ALL {
            let frame = render(&box_scene(mode), 32, 12);
            let lines: Vec<&str> = frame.split('\n').collect();
            assert_eq!(lines.len(), 12, "{}", mode.as_str());
            assert!(lines.iter().all(|l| l.chars().count() == 32), "{}", mode.as_str());
            let blank = if mode.is_braille() { '\u{2800}' } else { ' ' };
            assert!(frame.chars().any(|c| c != '\n' && c != blank), "{}", mode.as_str());
        }
    }

    #[test]
    fn rendering_is_deterministic() {
        let scene = box_scene(RenderMode::AsciiSolid);
        assert_eq!(render(&scene, 40, 20), render(&scene, 40, 20));
    }
}
