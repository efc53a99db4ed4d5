//! Bresenham line stepping with depth interpolation.

use crate::projection::ProjectedPoint;

/// Clip the segment `a -> b` to `[-1, width] x [-1, height]` (Liang-Barsky).
///
/// Depth is interpolated linearly at the clipped endpoints. Returns `None`
/// when the segment misses the raster entirely.
pub fn clip_line(
    a: ProjectedPoint,
    b: ProjectedPoint,
    width: usize,
    height: usize,
) -> Option<(ProjectedPoint, ProjectedPoint)> {
    let (xmin, ymin) = (-1.0, -1.0);
    let (xmax, ymax) = (width as f64, height as f64);
    let dx = b.x - a.x;
    let dy = b.y - a.y;

    let mut t0: f64 = 0.0;
    let mut t1: f64 = 1.0;
    for (p, q) in [
        (-dx, a.x - xmin),
        (dx, xmax - a.x),
        (-dy, a.y - ymin),
        (dy, ymax - a.y),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            t0 = t0.max(r);
        } else {
            t1 = t1.min(r);
        }
        if t0 > t1 {
            return None;
        }
    }

    let lerp = |t: f64| {
        ProjectedPoint::new(
            a.x + dx * t,
            a.y + dy * t,
            a.depth + (b.depth - a.depth) * t,
        )
    };
    Some((lerp(t0), lerp(t1)))
}

/// Visit every raster cell on the line `a -> b`.
///
/// The segment is clipped first, so the walk is bounded by the raster size.
/// Depth at each cell is interpolated by the squared distance travelled from
/// the start cell, normalized by the squared length of the line.
pub fn draw_line<F>(a: ProjectedPoint, b: ProjectedPoint, width: usize, height: usize, mut plot: F)
where
    F: FnMut(i64, i64, f64),
{
    let Some((a, b)) = clip_line(a, b, width, height) else {
        return;
    };

    let (x0, y0) = a.cell();
    let (x1, y1) = b.cell();
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let total = ((x1 - x0).pow(2) + (y1 - y0).pow(2)) as f64;

    let (mut x, mut y) = (x0, y0);
    let mut err = dx + dy;
    loop {
        let t = if total > 0.0 {
            ((x - x0).pow(2) + (y - y0).pow(2)) as f64 / total
        } else {
            0.0
        };
        plot(x, y, a.depth + (b.depth - a.depth) * t);

        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}
