//! Internal/external diagonal classification for simple polygons.
//!
//! For every non-adjacent vertex pair `(i, j)`:
//! 1. the segment `v_i v_j` must not touch any edge other than the four edges
//!    incident to `v_i` or `v_j`, otherwise the pair is not a diagonal;
//! 2. at each endpoint the segment must leave into the interior wedge of that
//!    vertex;
//! 3. internal iff the wedge test passes at both ends, external otherwise.
//!
//! Local turn signs are multiplied by the global orientation sign, so CW and
//! CCW inputs classify identically. O(n^3).

use crate::error::Result;
use crate::predicates::{sign, signed_area};
use crate::segment::{intersects, on_segment_bounds};
use crate::types::{Diagonal, DiagonalSplit, Point, Polygon, Segment};

use super::classify::{ensure_simple, orientation_sign};

/// Classify all diagonals of a simple, non-degenerate polygon.
pub fn polygon_diagonals(poly: &Polygon) -> Result<DiagonalSplit> {
    ensure_simple(poly)?;
    let o = orientation_sign(poly)?;
    let n = poly.len();
    let mut split = DiagonalSplit::default();
    for i in 0..n {
        for j in (i + 2)..n {
            if i == 0 && j == n - 1 {
                continue;
            }
            let (a, b) = (poly.vertex(i), poly.vertex(j));
            if crosses_boundary(poly, i, j) {
                continue;
            }
            let d = Diagonal { i, j, a, b };
            let inside = wedge_accepts(o, poly.prev(i), a, poly.vertex(i + 1), b)
                && wedge_accepts(o, poly.prev(j), b, poly.vertex(j + 1), a);
            if inside {
                split.internal.push(d);
            } else {
                split.external.push(d);
            }
        }
    }
    tracing::debug!(
        vertices = n,
        internal = split.internal.len(),
        external = split.external.len(),
        "classified diagonals"
    );
    Ok(split)
}

/// True when `v_i v_j` touches an edge not incident to either endpoint, or
/// runs through any other vertex.
///
/// The vertex check matters for `j = i + 2` around a straight vertex: both of
/// its edges are incident, yet the segment lies on the boundary.
fn crosses_boundary(poly: &Polygon, i: usize, j: usize) -> bool {
    let n = poly.len();
    let incident = [i, j, (i + n - 1) % n, (j + n - 1) % n];
    let d = Segment::new(poly.vertex(i), poly.vertex(j));
    let through_vertex = (0..n)
        .filter(|&k| k != i && k != j)
        .any(|k| on_segment_bounds(poly.vertex(k), &d));
    through_vertex
        || (0..n)
            .filter(|k| !incident.contains(k))
            .any(|k| intersects(&d, &poly.edge(k)))
}

/// Does the segment `v -> w` start into the interior wedge at `v`?
///
/// `o` is the polygon's orientation sign; `prev`/`next` are the neighbours
/// of `v` along the boundary.
fn wedge_accepts(o: i8, prev: Point, v: Point, next: Point, w: Point) -> bool {
    let s = |x: f64| o * sign(x);
    let left_of_prev = s(signed_area(v, w, prev));
    let left_of_next = s(signed_area(v, w, next));
    if s(signed_area(prev, v, next)) > 0 {
        // Convex: strictly between the two incident edges.
        left_of_prev > 0 && left_of_next < 0
    } else {
        // Reflex or straight: anything not provably in the exterior wedge.
        !(left_of_prev < 0 && left_of_next > 0)
    }
}
