//! Column-major 4x4 homogeneous transform.

use std::ops::Mul;

use crate::vector::Vector3;
use crate::EPSILON;

/// 4x4 matrix stored column-major: element `(row, col)` lives at `m[col * 4 + row]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix4 {
    m: [f64; 16],
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix4 {
    pub const IDENTITY: Self = Self {
        m: [
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ],
    };

    pub fn identity() -> Self {
        Self::IDENTITY
    }

    pub const fn from_cols_array(m: [f64; 16]) -> Self {
        Self { m }
    }

    pub const fn to_cols_array(&self) -> [f64; 16] {
        self.m
    }

    #[inline(always)]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.m[col * 4 + row]
    }

    #[inline(always)]
    fn set(&mut self, row: usize, col: usize, v: f64) {
        self.m[col * 4 + row] = v;
    }

    pub fn translation(x: f64, y: f64, z: f64) -> Self {
        let mut out = Self::IDENTITY;
        out.set(0, 3, x);
        out.set(1, 3, y);
        out.set(2, 3, z);
        out
    }

    pub fn from_translation(t: Vector3) -> Self {
        Self::translation(t.x, t.y, t.z)
    }

    pub fn scale(x: f64, y: f64, z: f64) -> Self {
        let mut out = Self::IDENTITY;
        out.set(0, 0, x);
        out.set(1, 1, y);
        out.set(2, 2, z);
        out
    }

    pub fn uniform_scale(s: f64) -> Self {
        Self::scale(s, s, s)
    }

    /// Right-handed rotation around the X axis.
    pub fn rotation_x(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        let mut out = Self::IDENTITY;
        out.set(1, 1, c);
        out.set(1, 2, -s);
        out.set(2, 1, s);
        out.set(2, 2, c);
        out
    }

    /// Right-handed rotation around the Y axis.
    pub fn rotation_y(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        let mut out = Self::IDENTITY;
        out.set(0, 0, c);
        out.set(0, 2, s);
        out.set(2, 0, -s);
        out.set(2, 2, c);
        out
    }

    /// Right-handed rotation around the Z axis.
    pub fn rotation_z(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        let mut out = Self::IDENTITY;
        out.set(0, 0, c);
        out.set(0, 1, -s);
        out.set(1, 0, s);
        out.set(1, 1, c);
        out
    }

    /// Combined Euler rotation, composed as `Rz * Ry * Rx` (X applied first).
    pub fn rotation(rx: f64, ry: f64, rz: f64) -> Self {
        Self::rotation_z(rz) * Self::rotation_y(ry) * Self::rotation_x(rx)
    }

    /// Symmetric perspective frustum (OpenGL clip conventions, NDC z in `[-1, 1]`).
    ///
    /// `fov_y` is the vertical field of view in radians.
    pub fn perspective(fov_y: f64, aspect: f64, near: f64, far: f64) -> Self {
        let f = 1.0 / (fov_y / 2.0).tan();
        let nf = near - far;
        let mut out = Self { m: [0.0; 16] };
        out.set(0, 0, f / aspect);
        out.set(1, 1, f);
        out.set(2, 2, (far + near) / nf);
        out.set(2, 3, 2.0 * far * near / nf);
        out.set(3, 2, -1.0);
        out
    }

    /// Right-handed view matrix looking from `eye` towards `target`.
    ///
    /// When `up` is parallel to the view direction a fallback up axis is used
    /// (world Z, or world X if the view itself runs along Z). When `eye ==
    /// target` only the translation is applied.
    pub fn look_at(eye: Vector3, target: Vector3, up: Vector3) -> Self {
        let f = (target - eye).normalize();
        if f == Vector3::ZERO {
            log::debug!("look_at: eye and target coincide, using translation only");
            return Self::from_translation(-eye);
        }

        let mut s = f.cross(up);
        if s.length_squared() < EPSILON {
            let fallback = if f.z.abs() < 0.9 { Vector3::Z } else { Vector3::X };
            log::debug!("look_at: up {:?} parallel to view direction, falling back to {:?}", up, fallback);
            s = f.cross(fallback);
        }
        let s = s.normalize();
        let u = s.cross(f);

        let mut out = Self::IDENTITY;
        out.set(0, 0, s.x);
        out.set(0, 1, s.y);
        out.set(0, 2, s.z);
        out.set(1, 0, u.x);
        out.set(1, 1, u.y);
        out.set(1, 2, u.z);
        out.set(2, 0, -f.x);
        out.set(2, 1, -f.y);
        out.set(2, 2, -f.z);
        out.set(0, 3, -s.dot(eye));
        out.set(1, 3, -u.dot(eye));
        out.set(2, 3, f.dot(eye));
        out
    }

    /// Full homogeneous product `M * (p, 1)`, returned as `[x, y, z, w]`.
    pub fn transform_homogeneous(&self, p: Vector3) -> [f64; 4] {
        let mut out = [0.0; 4];
        for (row, slot) in out.iter_mut().enumerate() {
            *slot = self.get(row, 0) * p.x
                + self.get(row, 1) * p.y
                + self.get(row, 2) * p.z
                + self.get(row, 3);
        }
        out
    }

    /// Transform a point, dividing by `w` unless `w` is 0 or 1.
    pub fn transform_point(&self, p: Vector3) -> Vector3 {
        let [x, y, z, w] = self.transform_homogeneous(p);
        if w != 0.0 && w != 1.0 {
            Vector3::new(x / w, y / w, z / w)
        } else {
            Vector3::new(x, y, z)
        }
    }

    /// Transform a direction through the upper-left 3x3 block (no translation).
    pub fn transform_direction(&self, d: Vector3) -> Vector3 {
        Vector3::new(
            self.get(0, 0) * d.x + self.get(0, 1) * d.y + self.get(0, 2) * d.z,
            self.get(1, 0) * d.x + self.get(1, 1) * d.y + self.get(1, 2) * d.z,
            self.get(2, 0) * d.x + self.get(2, 1) * d.y + self.get(2, 2) * d.z,
        )
    }
}

impl Mul for Matrix4 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let mut out = Self { m: [0.0; 16] };
        for col in 0..4 {
            for row in 0..4 {
                let mut acc = 0.0;
                for k in 0..4 {
                    acc += self.get(row, k) * rhs.get(k, col);
                }
                out.set(row, col, acc);
            }
        }
        out
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
    fn identity_leaves_points_unchanged() {
        let p = Vector3::new(1.5, -2.0, 7.25);
        assert_eq!(Matrix4::identity().transform_point(p), p);
        assert_eq!(Matrix4::identity() * Matrix4::translation(1.0, 2.0, 3.0), Matrix4::translation(1.0, 2.0, 3.0));
    }

    #[test]
    fn translation_is_stored_in_last_column() {
        let m = Matrix4::translation(1.0, 2.0, 3.0).to_cols_array();
        assert_eq!(&m[12..15], &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn product_applies_right_operand_first() {
        let m = Matrix4::translation(10.0, 0.0, 0.0) * Matrix4::rotation_z(FRAC_PI_2);
        // Rotate X onto Y, then move along X.
        assert!(approx(m.transform_point(Vector3::X), Vector3::new(10.0, 1.0, 0.0)));
    }

    #[test]
    fn axis_rotations_are_right_handed() {
        assert!(approx(Matrix4::rotation_x(FRAC_PI_2).transform_point(Vector3::Y), Vector3::Z));
        assert!(approx(Matrix4::rotation_y(FRAC_PI_2).transform_point(Vector3::Z), Vector3::X));
        assert!(approx(Matrix4::rotation_z(FRAC_PI_2).transform_point(Vector3::X), Vector3::Y));
    }

    #[test]
    fn euler_rotation_applies_x_then_y_then_z() {
        let combined = Matrix4::rotation(0.3, 0.5, 0.7);
        let manual = Matrix4::rotation_z(0.7) * Matrix4::rotation_y(0.5) * Matrix4::rotation_x(0.3);
        let p = Vector3::new(1.0, 2.0, 3.0);
        assert!(approx(combined.transform_point(p), manual.transform_point(p)));
    }

    #[test]
    fn transform_direction_ignores_translation() {
        let m = Matrix4::translation(5.0, 5.0, 5.0) * Matrix4::scale(2.0, 1.0, 1.0);
        assert_eq!(m.transform_direction(Vector3::X), Vector3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn transform_point_divides_by_w() {
        let proj = Matrix4::perspective(FRAC_PI_2, 1.0, 0.1, 100.0);
        let [_, _, _, w] = proj.transform_homogeneous(Vector3::new(0.0, 0.0, -2.0));
        assert!((w - 2.0).abs() < 1e-12);
        let ndc = proj.transform_point(Vector3::new(2.0, 0.0, -2.0));
        assert!((ndc.x - 1.0).abs() < 1e-9);
    }

    #[test]
    fn perspective_maps_near_and_far_to_ndc_bounds() {
        let proj = Matrix4::perspective(1.0, 1.5, 0.5, 50.0);
        let near = proj.transform_point(Vector3::new(0.0, 0.0, -0.5));
        let far = proj.transform_point(Vector3::new(0.0, 0.0, -50.0));
        assert!((near.z + 1.0).abs() < 1e-9);
        assert!((far.z - 1.0).abs() < 1e-9);
    }

    #[test]
    fn look_at_moves_target_onto_negative_z() {
        let view = Matrix4::look_at(Vector3::new(0.0, 0.0, 5.0), Vector3::ZERO, Vector3::Y);
        assert!(approx(view.transform_point(Vector3::ZERO), Vector3::new(0.0, 0.0, -5.0)));
        assert!(approx(view.transform_point(Vector3::new(1.0, 0.0, 0.0)), Vector3::new(1.0, 0.0, -5.0)));
    }

    #[test]
    fn look_at_with_parallel_up_stays_finite() {
        let view = Matrix4::look_at(Vector3::new(0.0, 5.0, 0.0), Vector3::ZERO, Vector3::Y);
        assert!(view.to_cols_array().iter().all(|v| v.is_finite()));
        assert!(approx(view.transform_point(Vector3::ZERO), Vector3::new(0.0, 0.0, -5.0)));

        let same = Matrix4::look_at(Vector3::ONE, Vector3::ONE, Vector3::Y);
        assert!(same.to_cols_array().iter().all(|v| v.is_finite()));
    }
}
