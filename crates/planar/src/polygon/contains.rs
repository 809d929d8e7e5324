//! Point-in-triangle and point-in-polygon queries.
//!
//! Two polygon methods, both counting the boundary as inside:
//! - `contains_fan`: convex polygons, fan of triangles `(v0, vi, vi+1)`.
//! - `contains_ray`: simple polygons, crossing-count parity along a caller
//!   supplied ray. `contains` picks the ray itself and retries when a ray
//!   runs through a vertex.

use crate::cfg::MAX_RAY_ATTEMPTS;
use crate::error::{GeomError, Result};
use crate::predicates::{distance, sign, signed_area};
use crate::segment::{intersects, on_segment_bounds, on_segment_dist};
use crate::types::{Point, Polygon, RayCast, Segment, Triangle};

use super::classify::{ensure_simple, is_convex};

/// Golden angle in radians; consecutive ray directions never repeat.
const RAY_ANGLE_STEP: f64 = 2.399_963_229_728_653;
const RAY_ANGLE_START: f64 = 0.5;

#[inline]
fn edge_signs(p: Point, t: &Triangle) -> [i8; 3] {
    [
        sign(signed_area(t[0], t[1], p)),
        sign(signed_area(t[1], t[2], p)),
        sign(signed_area(t[2], t[0], p)),
    ]
}

/// Strict interior test: `p` is on the same, non-zero side of all three edges.
pub fn in_triangle(p: Point, t: &Triangle) -> bool {
    let s = edge_signs(p, t);
    s.iter().all(|&x| x > 0) || s.iter().all(|&x| x < 0)
}

/// Closed triangle test (boundary included). A zero-area triangle contains
/// nothing.
pub fn in_triangle_closed(p: Point, t: &Triangle) -> bool {
    if sign(signed_area(t[0], t[1], t[2])) == 0 {
        return false;
    }
    let s = edge_signs(p, t);
    s.iter().all(|&x| x >= 0) || s.iter().all(|&x| x <= 0)
}

/// Fan-triangulation containment for convex polygons.
pub fn contains_fan(poly: &Polygon, q: Point) -> Result<bool> {
    if !is_convex(poly) {
        return Err(GeomError::NotConvex);
    }
    let v = poly.vertices();
    let v0 = v[0];
    Ok(v.windows(2)
        .skip(1)
        .any(|w| in_triangle_closed(q, &[v0, w[0], w[1]])))
}

/// Ray-casting containment along the segment `q -> far`.
///
/// Pre:
/// - `poly` is simple (`InvalidPolygon` otherwise).
/// - `far` lies strictly outside the polygon's bounding box.
/// - unless `q` is on the boundary, the ray passes through no vertex.
///
/// The last two fail with `DegenerateQuery`.
pub fn contains_ray(poly: &Polygon, q: Point, far: Point) -> Result<RayCast> {
    ensure_simple(poly)?;
    cast_ray(poly, q, far)
}

fn cast_ray(poly: &Polygon, q: Point, far: Point) -> Result<RayCast> {
    let (lo, hi) = poly.bounding_box();
    if far.x >= lo.x && far.x <= hi.x && far.y >= lo.y && far.y <= hi.y {
        return Err(GeomError::degenerate_query(
            "far point lies within the polygon's bounding box",
        ));
    }
    let ray = Segment::new(q, far);
    let on_boundary = poly.edges().any(|e| on_segment_dist(q, &e));
    if !on_boundary {
        if let Some(i) = poly
            .vertices()
            .iter()
            .position(|&v| on_segment_bounds(v, &ray))
        {
            return Err(GeomError::degenerate_query(format!(
                "ray passes through vertex {i}"
            )));
        }
    }
    let crossings = poly.edges().filter(|e| intersects(&ray, e)).count();
    Ok(RayCast {
        inside: on_boundary || crossings % 2 == 1,
        crossings,
        on_boundary,
    })
}

/// Far endpoint for the `attempt`-th ray from `q`.
///
/// The endpoint is farther from `q` than every corner of the bounding box, so
/// it always lies outside the box.
pub fn far_point(poly: &Polygon, q: Point, attempt: u32) -> Point {
    let (lo, hi) = poly.bounding_box();
    let corners = [lo, hi, Point::new(lo.x, hi.y), Point::new(hi.x, lo.y)];
    let reach = corners
        .iter()
        .map(|&c| distance(q, c))
        .fold(0.0, f64::max)
        + 1.0;
    let theta = RAY_ANGLE_START + f64::from(attempt) * RAY_ANGLE_STEP;
    q + Point::new(theta.cos(), theta.sin()) * reach
}

/// Ray-casting containment with automatic ray selection.
pub fn contains(poly: &Polygon, q: Point) -> Result<bool> {
    ensure_simple(poly)?;
    let mut last = None;
    for attempt in 0..MAX_RAY_ATTEMPTS {
        match cast_ray(poly, q, far_point(poly, q, attempt)) {
            Ok(cast) => return Ok(cast.inside),
            Err(err @ GeomError::DegenerateQuery { .. }) => {
                tracing::debug!(attempt, %err, "retrying ray cast");
                last = Some(err);
            }
            Err(err) => return Err(err),
        }
    }
    Err(last.unwrap_or_else(|| GeomError::degenerate_query("no ray direction attempted")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::pt;

    fn square() -> Polygon {
        Polygon::from_xy(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]).unwrap()
    }

    fn dart() -> Polygon {
        Polygon::from_xy(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (1.0, 1.0), (0.0, 2.0)]).unwrap()
    }

    #[test]
    fn triangle_strict_and_closed() {
        let t = [pt(0.0, 0.0), pt(1.0, 0.0), pt(0.0, 1.0)];
        assert!(!in_triangle(pt(0.5, 0.5), &t));
        assert!(in_triangle(pt(0.2, 0.2), &t));
        assert!(in_triangle_closed(pt(0.5, 0.5), &t));
        assert!(in_triangle_closed(pt(0.0, 0.0), &t));
        assert!(!in_triangle_closed(pt(0.6, 0.6), &t));
        // Clockwise vertex order works the same way.
        let cw = [t[0], t[2], t[1]];
        assert!(in_triangle(pt(0.2, 0.2), &cw));
        // Collinear "triangle" contains nothing, not even its own line.
        let flat = [pt(0.0, 0.0), pt(1.0, 1.0), pt(2.0, 2.0)];
        assert!(!in_triangle_closed(pt(3.0, 3.0), &flat));
    }

    #[test]
    fn fan_on_convex_and_rejects_concave() {
        let sq = square();
        assert!(contains_fan(&sq, pt(0.5, 0.5)).unwrap());
        assert!(contains_fan(&sq, pt(1.0, 0.3)).unwrap());
        assert!(!contains_fan(&sq, pt(1.5, 0.5)).unwrap());
        assert!(contains_fan(&sq.reversed(), pt(0.25, 0.75)).unwrap());
        assert_eq!(contains_fan(&dart(), pt(1.0, 0.5)), Err(GeomError::NotConvex));
    }

    #[test]
    fn ray_counts_crossings() {
        let sq = square();
        let inside = contains_ray(&sq, pt(0.5, 0.5), pt(10.0, 3.3)).unwrap();
        assert_eq!(
            inside,
            RayCast {
                inside: true,
                crossings: 1,
                on_boundary: false
            }
        );
        let outside = contains_ray(&sq, pt(-0.5, 0.5), pt(10.0, 0.6)).unwrap();
        assert!(!outside.inside);
        assert_eq!(outside.crossings, 2);
        let boundary = contains_ray(&sq, pt(1.0, 0.5), pt(10.0, 3.3)).unwrap();
        assert!(boundary.inside && boundary.on_boundary);
    }

    #[test]
    fn ray_through_vertex_is_degenerate() {
        let sq = square();
        let err = contains_ray(&sq, pt(0.5, 0.5), pt(10.0, 10.0)).unwrap_err();
        assert!(matches!(err, GeomError::DegenerateQuery { .. }));
        // Along an edge's line as well.
        let err = contains_ray(&sq, pt(-1.0, 0.0), pt(10.0, 0.0)).unwrap_err();
        assert!(matches!(err, GeomError::DegenerateQuery { .. }));
        // The automatic variant picks another direction.
        assert!(contains(&sq, pt(0.5, 0.5)).unwrap());
    }

    #[test]
    fn ray_requires_far_point_outside_bounds() {
        let err = contains_ray(&square(), pt(0.5, 0.5), pt(0.9, 0.9)).unwrap_err();
        assert!(matches!(err, GeomError::DegenerateQuery { .. }));
    }

    #[test]
    fn ray_rejects_non_simple() {
        let bowtie = Polygon::from_xy(&[(0.0, 0.0), (1.0, 1.0), (1.0, 0.0), (0.0, 1.0)]).unwrap();
        assert!(matches!(
            contains(&bowtie, pt(0.5, 0.2)),
            Err(GeomError::InvalidPolygon { .. })
        ));
    }

    #[test]
    fn concave_polygon_notch() {
        let d = dart();
        assert!(!contains(&d, pt(1.0, 1.5)).unwrap());
        assert!(contains(&d, pt(1.0, 0.5)).unwrap());
        assert!(contains(&d, pt(0.25, 1.5)).unwrap());
        assert!(contains(&d, pt(1.0, 1.0)).unwrap());
        assert!(!contains(&d, pt(3.0, 1.0)).unwrap());
    }

    #[test]
    fn far_points_leave_the_box() {
        let sq = square();
        for attempt in 0..MAX_RAY_ATTEMPTS {
            let f = far_point(&sq, pt(0.5, 0.5), attempt);
            assert!(f.x < 0.0 || f.x > 1.0 || f.y < 0.0 || f.y > 1.0);
        }
    }
}
