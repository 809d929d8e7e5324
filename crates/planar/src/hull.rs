//! Convex hull by gift wrapping (Jarvis march).
//!
//! Model
//! - Start at the lowest point (min y, then min x); it is always a hull vertex.
//! - From the current vertex pick the candidate with no other point strictly
//!   to its right; collinear ties go to the farther point, so points in the
//!   middle of hull edges are skipped.
//! - Stop when the walk returns to the start *index*.
//!
//! Input is de-duplicated first so the walk cannot stall on coincident points.
//! O(n·h) for h hull vertices.

use crate::cfg::COINCIDE_EPS;
use crate::predicates::{distance, lowest_point, sign, signed_area};
use crate::types::Point;

/// Hull vertices in CCW order, starting at the lowest point.
///
/// Fewer than three input points are returned unchanged; collinear input
/// yields its two extreme points.
pub fn convex_hull(points: &[Point]) -> Vec<Point> {
    if points.len() < 3 {
        return points.to_vec();
    }
    let pts = distinct(points);
    let start = match lowest_point(&pts) {
        Some(i) if pts.len() >= 3 => i,
        _ => return pts,
    };
    let mut hull = vec![pts[start]];
    let mut cur = start;
    for _ in 0..pts.len() {
        let next = wrap_step(&pts, cur);
        if next == start {
            return hull;
        }
        hull.push(pts[next]);
        cur = next;
    }
    tracing::warn!(
        points = pts.len(),
        hull = hull.len(),
        "gift wrap did not close; returning partial hull"
    );
    hull
}

/// Next hull vertex after `cur`.
fn wrap_step(pts: &[Point], cur: usize) -> usize {
    let c = pts[cur];
    let mut next = if cur == 0 { 1 } else { 0 };
    for (i, &p) in pts.iter().enumerate() {
        if i == cur || i == next {
            continue;
        }
        let s = sign(signed_area(c, pts[next], p));
        if s < 0 || (s == 0 && distance(c, p) > distance(c, pts[next])) {
            next = i;
        }
    }
    next
}

/// Lexicographically sorted copy with coincident points merged.
fn distinct(points: &[Point]) -> Vec<Point> {
    let mut pts = points.to_vec();
    pts.sort_by(|a, b| {
        a.x.partial_cmp(&b.x)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.y.partial_cmp(&b.y).unwrap_or(std::cmp::Ordering::Equal))
    });
    pts.dedup_by(|a, b| distance(*a, *b) <= COINCIDE_EPS);
    pts
}
