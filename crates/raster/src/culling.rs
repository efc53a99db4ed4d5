//! Screen-space back-face culling.
//!
//! With the projection's y-down raster, a triangle wound counter-clockwise
//! (seen from outside) has a negative signed area when it faces the camera.

use std::collections::BTreeSet;

use crate::geometry::{Edge, Face};
use crate::projection::ProjectedPoint;

/// Shoelace signed area of a raster-space triangle.
pub fn signed_area(a: &ProjectedPoint, b: &ProjectedPoint, c: &ProjectedPoint) -> f64 {
    0.5 * ((b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y))
}

/// Projected corners of `face`, or `None` if any corner failed to project.
pub fn face_points(face: &Face, projected: &[Option<ProjectedPoint>]) -> Option<[ProjectedPoint; 3]> {
    let get = |i: usize| projected.get(i).copied().flatten();
    Some([get(face.v0)?, get(face.v1)?, get(face.v2)?])
}

/// Whether a triangle faces the camera.
///
/// Triangles with a rejected corner are neither front- nor back-facing and
/// yield `None`.
pub fn is_front_facing(face: &Face, projected: &[Option<ProjectedPoint>]) -> Option<bool> {
    let [a, b, c] = face_points(face, projected)?;
    Some(signed_area(&a, &b, &c) < 0.0)
}

/// Front-facing faces, in input order.
pub fn front_faces<'a>(faces: &'a [Face], projected: &[Option<ProjectedPoint>]) -> Vec<&'a Face> {
    faces
        .iter()
        .filter(|f| is_front_facing(f, projected) == Some(true))
        .collect()
}

/// Union of the sides of all front-facing faces, deduplicated and sorted.
pub fn visible_edges(faces: &[Face], projected: &[Option<ProjectedPoint>]) -> Vec<Edge> {
    let set: BTreeSet<Edge> = front_faces(faces, projected)
        .into_iter()
        .flat_map(|f| f.edges())
        .collect();
    set.into_iter().collect()
}
