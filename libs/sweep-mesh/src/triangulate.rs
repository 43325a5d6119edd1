//! # Polygon Triangulation
//!
//! Ear clipping over a simple (possibly non-convex) polygon outline.
//!
//! The outline is implicitly closed: the last point connects back to the
//! first. Output triangles are counter-clockwise; a reversed cap is produced
//! downstream by flipping each triangle's vertex order, never by
//! re-triangulating.

use crate::error::{ExtrudeError, ExtrudeResult};
use config::constants::EPSILON;
use glam::DVec2;

/// Signed area of the polygon (shoelace formula). Positive for
/// counter-clockwise outlines.
#[must_use]
pub fn signed_area(points: &[DVec2]) -> f64 {
    let n = points.len();
    let mut sum = 0.0;
    for i in 0..n {
        let p = points[i];
        let q = points[(i + 1) % n];
        sum += p.x * q.y - q.x * p.y;
    }
    sum / 2.0
}

/// Decomposes a simple polygon outline into triangles by ear clipping.
///
/// Returns index triples into `points`, wound counter-clockwise. Fails with
/// zero triangles when the outline cannot form a simple closed polygon:
/// fewer than 3 points, degenerate (zero-area) outlines, or
/// self-intersecting boundaries on which no ear can be found.
///
/// # Example
///
/// ```rust
/// use sweep_mesh::triangulate;
/// use glam::DVec2;
///
/// let square = [DVec2::ZERO, DVec2::X, DVec2::ONE, DVec2::Y];
/// let triangles = triangulate(&square).unwrap();
/// assert_eq!(triangles.len(), 2);
/// ```
pub fn triangulate(points: &[DVec2]) -> ExtrudeResult<Vec<[u32; 3]>> {
    let n = points.len();
    if n < 3 {
        return Err(ExtrudeError::triangulation_failed(format!(
            "polygon needs at least 3 points, got {n}"
        )));
    }

    // Work on a counter-clockwise index list so ears are convex corners.
    let mut indices: Vec<u32> = if signed_area(points) > 0.0 {
        (0..n as u32).collect()
    } else {
        (0..n as u32).rev().collect()
    };

    let mut triangles: Vec<[u32; 3]> = Vec::with_capacity(n - 2);
    let mut remaining = n;
    // If a full sweep over the remaining vertices finds no ear, the outline
    // is self-intersecting or degenerate.
    let mut budget = 2 * remaining;
    let mut v = remaining - 1;

    while remaining > 2 {
        if budget == 0 {
            return Err(ExtrudeError::triangulation_failed(
                "no ear found; the outline is not a simple closed polygon",
            ));
        }
        budget -= 1;

        let u = if v >= remaining { 0 } else { v };
        v = if u + 1 >= remaining { 0 } else { u + 1 };
        let w = if v + 1 >= remaining { 0 } else { v + 1 };

        if is_ear(points, &indices, u, v, w, remaining) {
            triangles.push([indices[u], indices[v], indices[w]]);
            indices.remove(v);
            remaining -= 1;
            budget = 2 * remaining;
        }
    }

    Ok(triangles)
}

/// Checks whether the corner `(u, v, w)` of the working outline is an ear:
/// convex, with no other outline vertex inside it.
fn is_ear(points: &[DVec2], indices: &[u32], u: usize, v: usize, w: usize, remaining: usize) -> bool {
    let a = points[indices[u] as usize];
    let b = points[indices[v] as usize];
    let c = points[indices[w] as usize];

    // Reflex or collinear corners cannot be clipped.
    if (b - a).perp_dot(c - a) < EPSILON {
        return false;
    }

    for p in 0..remaining {
        if p == u || p == v || p == w {
            continue;
        }
        if point_in_triangle(points[indices[p] as usize], a, b, c) {
            return false;
        }
    }
    true
}

/// True when `p` lies inside or on the boundary of the CCW triangle
/// `(a, b, c)`.
fn point_in_triangle(p: DVec2, a: DVec2, b: DVec2, c: DVec2) -> bool {
    (b - a).perp_dot(p - a) >= 0.0
        && (c - b).perp_dot(p - b) >= 0.0
        && (a - c).perp_dot(p - c) >= 0.0
}
