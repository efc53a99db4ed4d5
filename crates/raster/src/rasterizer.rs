//! Shape rasterization into a [`RasterTarget`].

use crate::buffer::{AsciiBuffer, BrailleBuffer, RasterTarget};
use crate::culling::{face_points, front_faces, visible_edges};
use crate::geometry::{Edge, Shape};
use crate::line::draw_line;
use crate::math::{Matrix4, Vector3};
use crate::particles::Particle;
use crate::projection::{ProjectedPoint, Projector};
use crate::triangle::fill_triangle;
use crate::types::{RenderOptions, ShadingStyle, SOLID_BRIGHTNESS};

/// Draws shapes and particles into one target sharing one depth store.
///
/// The same code drives both families; the target decides what a plotted
/// point or a brightness sample looks like.
#[derive(Debug, Clone)]
pub struct Rasterizer<T> {
    target: T,
    wireframe_char: char,
    light_direction: Vector3,
    ambient: f64,
    aspect_correction: f64,
}

/// One glyph per cell.
pub type AsciiRenderer = Rasterizer<AsciiBuffer>;
/// 2x4 dots per cell.
pub type BrailleRenderer = Rasterizer<BrailleBuffer>;

impl Rasterizer<AsciiBuffer> {
    /// `width x height` cells shaded with the options' ramp.
    pub fn ascii(width: usize, height: usize, options: &RenderOptions) -> Self {
        Self::with_target(
            AsciiBuffer::with_ramp(width, height, &options.shading_ramp),
            options,
        )
    }
}

impl Rasterizer<BrailleBuffer> {
    /// `cols x rows` terminal cells of Braille dots.
    pub fn braille(cols: usize, rows: usize, options: &RenderOptions) -> Self {
        Self::with_target(BrailleBuffer::new(cols, rows), options)
    }
}

impl<T: RasterTarget> Rasterizer<T> {
    pub fn with_target(target: T, options: &RenderOptions) -> Self {
        Self {
            target,
            wireframe_char: options.wireframe_char,
            light_direction: options.light_direction.normalize(),
            ambient: options.ambient,
            aspect_correction: options.aspect_correction,
        }
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn into_target(self) -> T {
        self.target
    }

    /// Reset the target to empty with infinite depth.
    pub fn clear(&mut self) {
        self.target.clear();
    }

    /// The current raster as text.
    pub fn frame(&self) -> String {
        self.target.to_frame()
    }

    fn projector(&self, model: &Matrix4, view_projection: &Matrix4) -> Projector {
        Projector::new(
            *view_projection * *model,
            self.target.raster_width(),
            self.target.raster_height(),
            self.aspect_correction,
        )
    }

    fn draw_edges(&mut self, edges: &[Edge], projected: &[Option<ProjectedPoint>]) {
        let (w, h) = (self.target.raster_width(), self.target.raster_height());
        let glyph = self.wireframe_char;
        let target = &mut self.target;
        for edge in edges {
            let a = projected.get(edge.0).copied().flatten();
            let b = projected.get(edge.1).copied().flatten();
            if let (Some(a), Some(b)) = (a, b) {
                draw_line(a, b, w, h, |x, y, depth| {
                    target.plot(x, y, depth, glyph);
                });
            }
        }
    }

    /// Draw every edge of `shape`.
    pub fn render_shape(&mut self, shape: &dyn Shape, model: &Matrix4, view_projection: &Matrix4) {
        if shape.edges().is_empty() {
            log::debug!("shape has no edges, nothing to draw in wireframe");
            return;
        }
        let projected = self.projector(model, view_projection).project_all(shape.vertices());
        self.draw_edges(shape.edges(), &projected);
    }

    /// Draw the sides of the front-facing triangles of `shape`.
    ///
    /// A shape without faces has no front-facing triangles and draws nothing.
    pub fn render_shape_culled(
        &mut self,
        shape: &dyn Shape,
        model: &Matrix4,
        view_projection: &Matrix4,
    ) {
        if shape.faces().is_empty() {
            log::debug!("shape has no faces, nothing to draw culled");
            return;
        }
        let projected = self.projector(model, view_projection).project_all(shape.vertices());
        let edges = visible_edges(shape.faces(), &projected);
        self.draw_edges(&edges, &projected);
    }

    /// Fill the front-facing triangles of `shape`, shaded by `style`.
    ///
    /// Faces are filled back to front by average depth; the per-cell depth
    /// test still decides every pixel, so submission order never changes the
    /// result.
    pub fn render_shape_solid(
        &mut self,
        shape: &dyn Shape,
        model: &Matrix4,
        view_projection: &Matrix4,
        style: ShadingStyle,
    ) {
        if style == ShadingStyle::Wireframe {
            self.render_shape(shape, model, view_projection);
            return;
        }
        if shape.faces().is_empty() {
            log::debug!("shape has no faces, nothing to fill");
            return;
        }

        let vertices = shape.vertices();
        let projected = self.projector(model, view_projection).project_all(vertices);

        let mut fills: Vec<(f64, [ProjectedPoint; 3], f64)> = Vec::new();
        for face in front_faces(shape.faces(), &projected) {
            let Some(points) = face_points(face, &projected) else {
                continue;
            };
            let [a, b, c] = face.indices().map(|i| vertices[i]);
            let normal = model
                .transform_direction((b - a).cross(c - a).normalize())
                .normalize();
            let avg_depth = (points[0].depth + points[1].depth + points[2].depth) / 3.0;
            fills.push((avg_depth, points, self.brightness(style, normal, avg_depth)));
        }
        fills.sort_by(|a, b| b.0.total_cmp(&a.0));

        let (w, h) = (self.target.raster_width(), self.target.raster_height());
        let target = &mut self.target;
        for (_, [p0, p1, p2], brightness) in fills {
            fill_triangle(p0, p1, p2, w, h, |x, y, depth| {
                target.shade(x, y, depth, brightness);
            });
        }
    }

    /// Brightness in `[0, 1]` of a face with world-space `normal` and average
    /// projected depth `avg_depth`.
    pub fn brightness(&self, style: ShadingStyle, normal: Vector3, avg_depth: f64) -> f64 {
        let b = match style {
            ShadingStyle::Wireframe | ShadingStyle::Solid => SOLID_BRIGHTNESS,
            ShadingStyle::Depth => (1.0 - avg_depth.clamp(-1.0, 1.0)) / 2.0,
            ShadingStyle::Lit => {
                let diffuse = normal.dot(self.light_direction).max(0.0);
                self.ambient + (1.0 - self.ambient) * diffuse
            }
        };
        b.clamp(0.0, 1.0)
    }

    /// Plot live particles as single depth-tested points.
    ///
    /// `transform` moves particle positions into the world; the particle's own
    /// glyph is used where the target has glyphs.
    pub fn render_particles(
        &mut self,
        particles: &[Particle],
        transform: &Matrix4,
        view_projection: &Matrix4,
    ) {
        let projector = self.projector(transform, view_projection);
        for particle in particles.iter().filter(|p| p.is_alive()) {
            if let Some(p) = projector.project(particle.position) {
                let (x, y) = p.cell();
                self.target.plot(x, y, p.depth, particle.glyph);
            }
        }
    }
}
