//! World-to-raster projection.

use crate::math::{Matrix4, Vector3};

/// A point mapped onto the raster grid.
///
/// `x`/`y` are continuous raster coordinates (`y` grows downward); the cell
/// containing the point is `(x.floor(), y.floor())`. `depth` is the
/// perspective-divided z, roughly `[-1, 1]`, lower is nearer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedPoint {
    pub x: f64,
    pub y: f64,
    pub depth: f64,
}

impl ProjectedPoint {
    pub const fn new(x: f64, y: f64, depth: f64) -> Self {
        Self { x, y, depth }
    }

    /// Integer raster cell containing the point.
    pub fn cell(&self) -> (i64, i64) {
        (self.x.floor() as i64, self.y.floor() as i64)
    }
}

/// Projects points through one matrix onto a raster of fixed size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projector {
    matrix: Matrix4,
    width: f64,
    height: f64,
    aspect_correction: f64,
}

impl Projector {
    /// `width`/`height` are raster units (cells for ASCII, dots for Braille).
    pub fn new(matrix: Matrix4, width: usize, height: usize, aspect_correction: f64) -> Self {
        Self {
            matrix,
            width: width as f64,
            height: height as f64,
            aspect_correction,
        }
    }

    /// Project `p`, or `None` when it is at or behind the camera plane.
    ///
    /// Steps: homogeneous transform, reject `w <= 0`, divide by `w`, stretch
    /// x by the aspect correction, map NDC `[-1, 1]` to `[0, width) x [0,
    /// height)` with y flipped. Non-finite results are rejected as well.
    pub fn project(&self, p: Vector3) -> Option<ProjectedPoint> {
        let [x, y, z, w] = self.matrix.transform_homogeneous(p);
        if !(w > 0.0) {
            return None;
        }

        let ndc_x = x / w * self.aspect_correction;
        let ndc_y = y / w;
        let depth = z / w;

        let out = ProjectedPoint::new(
            (ndc_x + 1.0) * 0.5 * self.width,
            (1.0 - ndc_y) * 0.5 * self.height,
            depth,
        );
        if out.x.is_finite() && out.y.is_finite() && out.depth.is_finite() {
            Some(out)
        } else {
            log::debug!("projection of {:?} is not finite, dropped", p);
            None
        }
    }

    /// Project every point, keeping index alignment with the input.
    pub fn project_all(&self, points: &[Vector3]) -> Vec<Option<ProjectedPoint>> {
        points.iter().map(|p| self.project(*p)).collect()
    }
}

/// One-shot projection of `p` through `view_projection`.
pub fn project(
    p: Vector3,
    view_projection: &Matrix4,
    width: usize,
    height: usize,
    aspect_correction: f64,
) -> Option<ProjectedPoint> {
    Projector::new(*view_projection, width, height, aspect_correction).project(p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Camera;

    #[test]
    fn origin_lands_at_center() {
        let vp = Camera::default().view_projection(1.0);
        for (w, h) in [(2, 2), (3, 5), (80, 24), (81, 25)] {
            let p = project(Vector3::ZERO, &vp, w, h, 2.0).unwrap();
            assert!((p.x - w as f64 / 2.0).abs() <= 1.0);
            assert!((p.y - h as f64 / 2.0).abs() <= 1.0);
        }
    }

    #[test]
    fn points_behind_camera_are_rejected() {
        let vp = Camera::default().view_projection(1.0);
        // Camera sits at z=5 looking towards -z.
        assert!(project(Vector3::new(0.0, 0.0, 6.0), &vp, 10, 10, 2.0).is_none());
        // On the camera plane w == 0.
        assert!(project(Vector3::new(1.0, 0.0, 5.0), &vp, 10, 10, 2.0).is_none());
    }

    #[test]
    fn y_is_flipped_and_x_is_stretched() {
        let vp = Camera::default().view_projection(1.0);
        let up = project(Vector3::new(0.0, 1.0, 0.0), &vp, 100, 100, 1.0).unwrap();
        assert!(up.y < 50.0);

        let plain = project(Vector3::new(0.5, 0.0, 0.0), &vp, 100, 100, 1.0).unwrap();
        let stretched = project(Vector3::new(0.5, 0.0, 0.0), &vp, 100, 100, 2.0).unwrap();
        assert!(((stretched.x - 50.0) - 2.0 * (plain.x - 50.0)).abs() < 1e-9);
    }

    #[test]
    fn nearer_points_have_lower_depth() {
        let vp = Camera::default().view_projection(1.0);
        let near = project(Vector3::new(0.0, 0.0, 1.0), &vp, 10, 10, 2.0).unwrap();
        let far = project(Vector3::new(0.0, 0.0, -1.0), &vp, 10, 10, 2.0).unwrap();
        assert!(near.depth < far.depth);
    }

    #[test]
    fn negative_w_matrix_rejects_everything() {
        let m = Matrix4::from_cols_array([
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, -1.0,
        ]);
        for p in [Vector3::ZERO, Vector3::ONE, Vector3::new(-3.0, 2.0, 9.0)] {
            assert!(project(p, &m, 10, 10, 2.0).is_none());
        }
    }
}
