//! Scanline triangle fill with barycentric depth.

use crate::projection::ProjectedPoint;

/// Below this doubled area a triangle is treated as degenerate.
const MIN_AREA: f64 = 1e-12;

fn edge(a: &ProjectedPoint, b: &ProjectedPoint, px: f64, py: f64) -> f64 {
    (b.x - a.x) * (py - a.y) - (b.y - a.y) * (px - a.x)
}

fn inv_slope(a: &ProjectedPoint, b: &ProjectedPoint) -> f64 {
    let dy = b.y - a.y;
    if dy == 0.0 {
        0.0
    } else {
        (b.x - a.x) / dy
    }
}

/// Visit every raster cell whose center lies inside the triangle.
///
/// Vertices are sorted by y and the triangle is split at the middle vertex
/// into a flat-bottom and a flat-top half. Each scanline steps the long edge
/// and the active short edge by their inverse slopes; the depth of every
/// covered cell is the barycentric blend of the three vertex depths. Rows and
/// columns are clamped to the raster, so off-screen geometry costs nothing.
pub fn fill_triangle<F>(
    p0: ProjectedPoint,
    p1: ProjectedPoint,
    p2: ProjectedPoint,
    width: usize,
    height: usize,
    mut plot: F,
) where
    F: FnMut(i64, i64, f64),
{
    if width == 0 || height == 0 {
        return;
    }
    let mut v = [p0, p1, p2];
    v.sort_by(|a, b| a.y.total_cmp(&b.y));
    let [v0, v1, v2] = v;

    let area = edge(&v0, &v1, v2.x, v2.y);
    if area.abs() < MIN_AREA {
        return;
    }

    let inv_long = inv_slope(&v0, &v2);
    let inv_upper = inv_slope(&v0, &v1);
    let inv_lower = inv_slope(&v1, &v2);

    let max_x = (width - 1) as f64;
    let max_y = (height - 1) as f64;
    let row_start = (v0.y - 0.5).ceil().max(0.0);
    let row_end = (v2.y - 0.5).floor().min(max_y);
    if row_start > row_end {
        return;
    }

    for py in row_start as i64..=row_end as i64 {
        let sy = py as f64 + 0.5;
        let xa = v0.x + (sy - v0.y) * inv_long;
        let xb = if sy < v1.y {
            // flat-bottom half
            v0.x + (sy - v0.y) * inv_upper
        } else {
            // flat-top half
            v1.x + (sy - v1.y) * inv_lower
        };
        let (xl, xr) = if xa <= xb { (xa, xb) } else { (xb, xa) };

        let col_start = (xl - 0.5).ceil().max(0.0);
        let col_end = (xr - 0.5).floor().min(max_x);
        if col_start > col_end {
            continue;
        }

        for px in col_start as i64..=col_end as i64 {
            let sx = px as f64 + 0.5;
            let w0 = edge(&v1, &v2, sx, sy) / area;
            let w1 = edge(&v2, &v0, sx, sy) / area;
            let w2 = 1.0 - w0 - w1;
            plot(px, py, w0 * v0.depth + w1 * v1.depth + w2 * v2.depth);
        }
    }
}
