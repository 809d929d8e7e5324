//! Segment intersection and point-on-segment tests.
//!
//! Two on-segment tests exist on purpose:
//! - `on_segment_bounds`: collinear + inside the segment's bounding box. Used
//!   by `intersects`.
//! - `on_segment_dist`: collinear + `|p s0| + |p s1| == |s0 s1|` within a
//!   relative tolerance. Used for boundary detection in ray casting.

use crate::cfg::{LENGTH_REL_EPS, SIGN_EPS};
use crate::predicates::{distance, sign, signed_area};
use crate::types::{Point, Segment};

/// True when the closed segments `p` and `q` share at least one point.
///
/// Covers proper crossings, T-junctions, shared endpoints and collinear
/// overlap. False only for disjoint segments.
pub fn intersects(p: &Segment, q: &Segment) -> bool {
    let straddles_q = sign(signed_area(p.a, p.b, q.a)) * sign(signed_area(p.a, p.b, q.b)) < 0;
    let straddles_p = sign(signed_area(q.a, q.b, p.a)) * sign(signed_area(q.a, q.b, p.b)) < 0;
    if straddles_q && straddles_p {
        return true;
    }
    on_segment_bounds(p.a, q)
        || on_segment_bounds(p.b, q)
        || on_segment_bounds(q.a, p)
        || on_segment_bounds(q.b, p)
}

/// Point on segment: collinear and within the bounding box of the endpoints.
pub fn on_segment_bounds(p: Point, s: &Segment) -> bool {
    if sign(signed_area(p, s.a, s.b)) != 0 {
        return false;
    }
    within(p.x, s.a.x, s.b.x) && within(p.y, s.a.y, s.b.y)
}

#[inline]
fn within(v: f64, a: f64, b: f64) -> bool {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    v >= lo - SIGN_EPS && v <= hi + SIGN_EPS
}

/// Point on segment: collinear and the two partial lengths add up to the
/// full length.
pub fn on_segment_dist(p: Point, s: &Segment) -> bool {
    if sign(signed_area(p, s.a, s.b)) != 0 {
        return false;
    }
    let full = distance(s.a, s.b);
    let slack = LENGTH_REL_EPS * full.max(1.0);
    (distance(p, s.a) + distance(p, s.b) - full).abs() <= slack
}
