//! SceneView: composes a rendered scene and a status line into a framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::raster::render;
use crate::scene::Scene;
use crate::types::{RenderMode, BRAILLE_BLANK};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Viewer state shown in the status line.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HudStatus {
    pub paused: bool,
    /// Smoothed frames per second, if measured.
    pub fps: Option<f64>,
}

/// Draws a [`Scene`] above a one-line HUD.
#[derive(Debug, Clone, Copy)]
pub struct SceneView {
    show_hud: bool,
}

impl Default for SceneView {
    fn default() -> Self {
        Self { show_hud: true }
    }
}

impl SceneView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hud(mut self, show_hud: bool) -> Self {
        self.show_hud = show_hud;
        self
    }

    /// Rows left for the scene once the HUD is placed.
    pub fn scene_rows(&self, viewport: Viewport) -> u16 {
        if self.show_hud {
            viewport.height.saturating_sub(1)
        } else {
            viewport.height
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        scene: &Scene,
        status: &HudStatus,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Default::default());

        let rows = self.scene_rows(viewport);
        let text = render(scene, viewport.width as usize, rows as usize);
        let mode = scene.options.mode;
        let blank = if mode.is_braille() { BRAILLE_BLANK } else { ' ' };
        fb.blit_text(0, 0, &text, blank, scene_style(mode));

        if self.show_hud && viewport.height > 0 {
            self.draw_hud(fb, scene, status, viewport.height - 1);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, scene: &Scene, status: &HudStatus, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(scene, status, viewport, &mut fb);
        fb
    }

    fn draw_hud(&self, fb: &mut FrameBuffer, scene: &Scene, status: &HudStatus, y: u16) {
        let bar = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(30, 30, 40),
            bold: false,
            dim: false,
        };
        let label = CellStyle { bold: true, ..bar };
        let hint = CellStyle { dim: true, ..bar };
        fb.fill_rect(0, y, fb.width(), 1, ' ', bar);

        let mut fields: Vec<(&str, String)> = vec![
            ("MODE", scene.options.mode.as_str().to_string()),
            ("STYLE", scene.options.shading.as_str().to_string()),
            ("PARTICLES", scene.particle_count().to_string()),
        ];
        if let Some(fps) = status.fps {
            fields.push(("FPS", format!("{:.0}", fps)));
        }
        if status.paused {
            fields.push(("PAUSED", String::new()));
        }

        let mut x = 1u16;
        for (name, value) in fields {
            fb.put_str(x, y, name, label);
            x = x.saturating_add(name.chars().count() as u16 + 1);
            if !value.is_empty() {
                fb.put_str(x, y, &value, bar);
                x = x.saturating_add(value.chars().count() as u16 + 1);
            }
            x = x.saturating_add(1);
        }

        const KEYS: &str = "m mode  s style  arrows orbit  +/- zoom  r reset  p pause  q quit";
        let keys_w = KEYS.chars().count() as u16;
        if x.saturating_add(keys_w) < fb.width() {
            fb.put_str(fb.width() - keys_w - 1, y, KEYS, hint);
        }
    }
}

fn scene_style(mode: RenderMode) -> CellStyle {
    let fg = if mode.is_solid() {
        Rgb::new(240, 220, 160)
    } else {
        Rgb::new(120, 220, 220)
    };
    CellStyle::fg(fg)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::scene::geometry::BoxShape;
    use crate::scene::{Camera, SceneNode};
    use crate::types::RenderOptions;

    fn scene(mode: RenderMode) -> Scene {
        Scene::new(Camera::default())
            .with_node(SceneNode::with_shape(Arc::new(BoxShape::cube(1.5))))
            .with_options(RenderOptions::default().with_mode(mode))
    }

    #[test]
    fn hud_occupies_last_row() {
        let fb = SceneView::new().render(
            &scene(RenderMode::AsciiWireframe),
            &HudStatus::default(),
            Viewport::new(60, 10),
        );
        let hud = fb.row_text(9);
        assert!(hud.contains("MODE ascii-wireframe"));
        assert!(hud.contains("STYLE lit"));
        assert!(hud.contains("PARTICLES 0"));
        assert!(!hud.contains("PAUSED"));
    }

    #[test]
    fn paused_and_fps_are_shown() {
        let status = HudStatus {
            paused: true,
            fps: Some(29.6),
        };
        let fb = SceneView::new().render(
            &scene(RenderMode::BrailleSolid),
            &status,
            Viewport::new(60, 5),
        );
        let hud = fb.row_text(4);
        assert!(hud.contains("FPS 30"));
        assert!(hud.contains("PAUSED"));
    }

    #[test]
    fn scene_fills_rows_above_hud() {
        let fb = SceneView::new().render(
            &scene(RenderMode::AsciiWireframe),
            &HudStatus::default(),
            Viewport::new(40, 12),
        );
        assert!((0..11).any(|y| fb.row_text(y).contains('*')));
    }

    #[test]
    fn braille_blank_cells_stay_empty() {
        let fb = SceneView::new().with_hud(false).render(
            &Scene::default().with_options(RenderOptions::default().with_mode(RenderMode::BrailleWireframe)),
            &HudStatus::default(),
            Viewport::new(8, 3),
        );
        assert!(fb.cells().iter().all(|c| c.ch == ' '));
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        for (w, h) in [(0, 0), (1, 1), (3, 0), (0, 3)] {
            let fb = SceneView::new().render(
                &scene(RenderMode::AsciiSolid),
                &HudStatus::default(),
                Viewport::new(w, h),
            );
            assert_eq!(fb.width(), w);
            assert_eq!(fb.height(), h);
        }
    }
}
