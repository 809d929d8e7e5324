//! Tangent points from an external point to a convex polygon.
//!
//! An edge is *visible* from `q` when `q` lies strictly on its outer side.
//! The tangent points are the vertices where visibility flips between the
//! incoming and the outgoing edge: the silhouette of the polygon seen from
//! `q`. The scan is cyclic, so the closing edge takes part like any other.

use crate::error::{GeomError, Result};
use crate::predicates::{sign, signed_area};
use crate::types::{Point, Polygon};

use super::classify::{is_convex, orientation_sign};
use super::contains::contains_fan;

/// Silhouette vertices of convex `poly` as seen from external `q`, in vertex
/// order.
///
/// Pre: `poly` convex with non-zero area; `q` strictly outside.
pub fn tangent_points(poly: &Polygon, q: Point) -> Result<Vec<Point>> {
    if !is_convex(poly) {
        return Err(GeomError::NotConvex);
    }
    let o = orientation_sign(poly)?;
    if contains_fan(poly, q)? {
        return Err(GeomError::PointNotExternal);
    }
    let visible: Vec<bool> = poly
        .edges()
        .map(|e| sign(signed_area(e.a, e.b, q)) == -o)
        .collect();
    let n = visible.len();
    Ok((0..n)
        .filter(|&k| visible[(k + n - 1) % n] != visible[k])
        .map(|k| poly.vertex(k))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::pt;

    fn square() -> Polygon {
        Polygon::from_xy(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]).unwrap()
    }

    #[test]
    fn square_from_the_right() {
        let t = tangent_points(&square(), pt(3.0, 0.5)).unwrap();
        assert_eq!(t, vec![pt(1.0, 0.0), pt(1.0, 1.0)]);
        let t = tangent_points(&square().reversed(), pt(3.0, 0.5)).unwrap();
        assert_eq!(t, vec![pt(1.0, 1.0), pt(1.0, 0.0)]);
    }

    #[test]
    fn square_from_a_corner_direction() {
        let t = tangent_points(&square(), pt(-5.0, -5.0)).unwrap();
        assert_eq!(t, vec![pt(1.0, 0.0), pt(0.0, 1.0)]);
        let t = tangent_points(&square(), pt(0.5, -3.0)).unwrap();
        assert_eq!(t, vec![pt(0.0, 0.0), pt(1.0, 0.0)]);
    }

    #[test]
    fn collinear_with_an_edge_still_yields_two() {
        // q on the supporting line of the bottom edge.
        let t = tangent_points(&square(), pt(2.0, 0.0)).unwrap();
        assert_eq!(t, vec![pt(1.0, 0.0), pt(1.0, 1.0)]);
    }

    #[test]
    fn regular_polygons_from_far_away() {
        for n in 3..12 {
            let pts = (0..n)
                .map(|k| {
                    let th = std::f64::consts::TAU * k as f64 / n as f64 + 0.1;
                    pt(th.cos(), th.sin())
                })
                .collect();
            let p = Polygon::new(pts).unwrap();
            let t = tangent_points(&p, pt(40.0, 17.0)).unwrap();
            assert_eq!(t.len(), 2, "n = {n}");
            assert!(t.iter().all(|v| p.vertices().contains(v)));
        }
    }

    #[test]
    fn preconditions() {
        assert_eq!(
            tangent_points(&square(), pt(0.5, 0.5)),
            Err(GeomError::PointNotExternal)
        );
        assert_eq!(
            tangent_points(&square(), pt(1.0, 0.5)),
            Err(GeomError::PointNotExternal)
        );
        let dart = Polygon::from_xy(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (1.0, 1.0), (0.0, 2.0)])
            .unwrap();
        assert_eq!(tangent_points(&dart, pt(5.0, 5.0)), Err(GeomError::NotConvex));
        let flat = Polygon::from_xy(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]).unwrap();
        assert_eq!(tangent_points(&flat, pt(5.0, 5.0)), Err(GeomError::ZeroArea));
    }
}
