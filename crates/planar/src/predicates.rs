//! Orientation and distance predicates.
//!
//! `signed_area` is the single source of truth for every directional or
//! containment decision in the crate; decisions read it through the tolerant
//! `sign`, never through a raw comparison with zero.

use crate::cfg::{COINCIDE_EPS, SIGN_EPS};
use crate::types::{Orientation, Point};

/// Signed area of triangle `abc`: `((b - a) x (c - a)) / 2`.
///
/// Positive when `a -> b -> c` turns counterclockwise, negative when it turns
/// clockwise, zero when the points are collinear.
#[inline]
pub fn signed_area(a: Point, b: Point, c: Point) -> f64 {
    let ab = b - a;
    let ac = c - a;
    (ab.x * ac.y - ab.y * ac.x) / 2.0
}

/// Euclidean distance.
#[inline]
pub fn distance(p: Point, q: Point) -> f64 {
    (p - q).norm()
}

/// Tolerant sign with the crate default epsilon.
#[inline]
pub fn sign(x: f64) -> i8 {
    sign_eps(x, SIGN_EPS)
}

/// Tolerant sign: `0` when `|x| <= eps`.
#[inline]
pub fn sign_eps(x: f64, eps: f64) -> i8 {
    if x > eps {
        1
    } else if x < -eps {
        -1
    } else {
        0
    }
}

/// Orientation of the turn `a -> b -> c`.
#[inline]
pub fn orient(a: Point, b: Point, c: Point) -> Orientation {
    Orientation::from_sign(sign(signed_area(a, b, c)))
}

/// Tolerance equality of two points.
#[inline]
pub fn points_coincide(p: Point, q: Point) -> bool {
    distance(p, q) <= COINCIDE_EPS
}

/// Index of the point with minimum `y`, ties broken by minimum `x`.
pub fn lowest_point(points: &[Point]) -> Option<usize> {
    points
        .iter()
        .enumerate()
        .min_by(|(_, p), (_, q)| {
            p.y.partial_cmp(&q.y)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| p.x.partial_cmp(&q.x).unwrap_or(std::cmp::Ordering::Equal))
        })
        .map(|(i, _)| i)
}
