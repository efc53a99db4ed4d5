//! Perspective camera.

use crate::math::{Matrix4, Vector3};
use crate::types::{DEFAULT_FAR, DEFAULT_FOV_Y, DEFAULT_NEAR};

/// Look-at camera with a symmetric perspective frustum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vector3,
    pub target: Vector3,
    pub up: Vector3,
    /// Vertical field of view in radians.
    pub fov_y: f64,
    pub near: f64,
    pub far: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vector3::new(0.0, 0.0, 5.0), Vector3::ZERO)
    }
}

impl Camera {
    /// Camera at `position` looking at `target`, +Y up, default lens.
    pub fn new(position: Vector3, target: Vector3) -> Self {
        Self {
            position,
            target,
            up: Vector3::Y,
            fov_y: DEFAULT_FOV_Y,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
        }
    }

    /// Camera on a sphere of radius `distance` around `target`.
    ///
    /// `azimuth` rotates around +Y starting from +Z, `elevation` lifts towards
    /// +Y (both radians). `orbit(5, 0, 0, origin)` sits at `(0, 0, 5)`.
    pub fn orbit(distance: f64, azimuth: f64, elevation: f64, target: Vector3) -> Self {
        let (sin_az, cos_az) = azimuth.sin_cos();
        let (sin_el, cos_el) = elevation.sin_cos();
        let offset = Vector3::new(
            distance * cos_el * sin_az,
            distance * sin_el,
            distance * cos_el * cos_az,
        );
        Self::new(target + offset, target)
    }

    pub fn with_up(mut self, up: Vector3) -> Self {
        self.up = up;
        self
    }

    pub fn with_fov(mut self, fov_y: f64) -> Self {
        self.fov_y = fov_y;
        self
    }

    pub fn with_clip(mut self, near: f64, far: f64) -> Self {
        self.near = near;
        self.far = far;
        self
    }

    pub fn view_matrix(&self) -> Matrix4 {
        Matrix4::look_at(self.position, self.target, self.up)
    }

    pub fn projection_matrix(&self, aspect: f64) -> Matrix4 {
        Matrix4::perspective(self.fov_y, aspect, self.near, self.far)
    }

    /// `projection * view` for the given aspect ratio (width / height).
    pub fn view_projection(&self, aspect: f64) -> Matrix4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }

    /// Distance from the camera to its target.
    pub fn distance(&self) -> f64 {
        (self.position - self.target).length()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn approx(a: Vector3, b: Vector3) -> bool {
        (a - b).length() < 1e-9
    }

    #[test]
    fn orbit_at_zero_angles_sits_on_positive_z() {
        let cam = Camera::orbit(5.0, 0.0, 0.0, Vector3::ZERO);
        assert!(approx(cam.position, Vector3::new(0.0, 0.0, 5.0)));
        assert_eq!(cam.target, Vector3::ZERO);
    }

    #[test]
    fn orbit_azimuth_and_elevation() {
        let cam = Camera::orbit(2.0, FRAC_PI_2, 0.0, Vector3::ZERO);
        assert!(approx(cam.position, Vector3::new(2.0, 0.0, 0.0)));

        let cam = Camera::orbit(2.0, 0.0, FRAC_PI_2, Vector3::new(1.0, 1.0, 1.0));
        assert!(approx(cam.position, Vector3::new(1.0, 3.0, 1.0)));
        assert!((cam.distance() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn target_projects_to_ndc_center() {
        let cam = Camera::orbit(7.0, 0.4, 0.3, Vector3::new(1.0, -2.0, 0.5));
        let ndc = cam.view_projection(1.5).transform_point(cam.target);
        assert!(ndc.x.abs() < 1e-9 && ndc.y.abs() < 1e-9);
        assert!(ndc.z > -1.0 && ndc.z < 1.0);
    }

    #[test]
    fn straight_down_view_has_no_nan() {
        let cam = Camera::orbit(5.0, 0.0, FRAC_PI_2, Vector3::ZERO);
        let vp = cam.view_projection(1.0);
        assert!(vp.to_cols_array().iter().all(|v| v.is_finite()));
    }
}
