//! Math kernel - vectors and homogeneous transforms
//!
//! Small, dependency-light linear algebra used by every other crate:
//!
//! - [`vector`]: [`Vector3`], an immutable 3D value type with the usual operators
//! - [`matrix`]: [`Matrix4`], a column-major 4x4 transform with constructors for
//!   translation, scale, axis rotations, perspective and look-at
//!
//! All operations are total over finite inputs. Normalizing the zero vector
//! yields the zero vector, and a degenerate look-at falls back to another up
//! axis instead of producing NaNs.
//!
//! # Conventions
//!
//! - Right-handed coordinates, camera looks down `-Z` in view space.
//! - `a * b` applies `b` first, then `a`.
//! - Euler rotation `(rx, ry, rz)` composes as `Rz * Ry * Rx`.
//!
//! # Example
//!
//! ```
//! use tui_render3d_math::{Matrix4, Vector3};
//!
//! let m = Matrix4::translation(1.0, 2.0, 3.0) * Matrix4::scale(2.0, 2.0, 2.0);
//! let p = m.transform_point(Vector3::new(1.0, 1.0, 1.0));
//! assert_eq!(p, Vector3::new(3.0, 4.0, 5.0));
//! ```

pub mod matrix;
pub mod vector;

pub use matrix::Matrix4;
pub use vector::Vector3;

/// Tolerance used for degeneracy checks (near-zero lengths, near-parallel axes).
pub const EPSILON: f64 = 1e-9;
