//! Polygon area, orientation, convexity and vertex labelling.

use crate::error::{GeomError, Result};
use crate::predicates::{points_coincide, sign, signed_area};
use crate::segment::intersects;
use crate::types::{Orientation, Polygon, VertexClasses};

/// Signed polygon area as a fan of triangles anchored at vertex 0.
///
/// Positive for CCW vertex order, negative for CW.
pub fn polygon_area(p: &Polygon) -> f64 {
    let v = p.vertices();
    let v0 = v[0];
    v.windows(2)
        .skip(1)
        .map(|w| signed_area(v0, w[0], w[1]))
        .sum()
}

/// Global orientation from the sign of the polygon area.
#[inline]
pub fn orientation(p: &Polygon) -> Orientation {
    Orientation::from_sign(sign(polygon_area(p)))
}

/// Orientation sign, failing on zero-area polygons.
pub(crate) fn orientation_sign(p: &Polygon) -> Result<i8> {
    match orientation(p) {
        Orientation::Degenerate => Err(GeomError::ZeroArea),
        o => Ok(o.sign()),
    }
}

/// Tolerant turn sign at vertex `i` (`prev -> v_i -> next`).
#[inline]
pub(crate) fn turn_sign(p: &Polygon, i: usize) -> i8 {
    sign(signed_area(p.prev(i), p.vertex(i), p.vertex(i + 1)))
}

/// Convexity test: all non-zero turns share a sign.
///
/// Collinear vertices are ignored, so an all-collinear cycle is vacuously
/// convex.
pub fn is_convex(p: &Polygon) -> bool {
    let mut turns = (0..p.len()).map(|i| turn_sign(p, i)).filter(|&t| t != 0);
    match turns.next() {
        Some(first) => turns.all(|t| t == first),
        None => true,
    }
}

/// Label each vertex convex or concave relative to the global orientation.
pub fn classify_vertices(p: &Polygon) -> VertexClasses {
    let o = orientation(p).sign();
    let mut out = VertexClasses::default();
    if o == 0 {
        return out;
    }
    for i in 0..p.len() {
        let t = turn_sign(p, i);
        if t == o {
            out.convex.push(p.vertex(i));
        } else if t == -o {
            out.concave.push(p.vertex(i));
        }
    }
    out
}

/// True when no two edges meet except adjacent edges at their shared vertex.
#[inline]
pub fn is_simple(p: &Polygon) -> bool {
    simplicity_violation(p).is_none()
}

/// `InvalidPolygon` unless `p` is simple.
pub fn ensure_simple(p: &Polygon) -> Result<()> {
    match simplicity_violation(p) {
        Some(reason) => Err(GeomError::invalid(reason)),
        None => Ok(()),
    }
}

fn simplicity_violation(p: &Polygon) -> Option<String> {
    let n = p.len();
    let v = p.vertices();
    for i in 0..n {
        for j in (i + 1)..n {
            if points_coincide(v[i], v[j]) {
                return Some(format!("vertices {i} and {j} coincide"));
            }
        }
    }
    // Adjacent edges may only share their common vertex: a zero turn that
    // doubles back overlaps the two edges.
    for i in 0..n {
        let (prev, cur, next) = (p.prev(i), p.vertex(i), p.vertex(i + 1));
        if turn_sign(p, i) == 0 && (prev - cur).dot(&(next - cur)) > 0.0 {
            return Some(format!("edges meeting at vertex {i} fold back"));
        }
    }
    for k in 0..n {
        for l in (k + 2)..n {
            if k == 0 && l == n - 1 {
                continue;
            }
            if intersects(&p.edge(k), &p.edge(l)) {
                return Some(format!("edges {k} and {l} intersect"));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::pt;

    fn square() -> Polygon {
        Polygon::from_xy(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]).unwrap()
    }

    fn pentagon() -> Polygon {
        let pts = (0..5)
            .map(|k| {
                let th = std::f64::consts::TAU * k as f64 / 5.0;
                pt(th.cos(), th.sin())
            })
            .collect();
        Polygon::new(pts).unwrap()
    }

    #[test]
    fn unit_square_area_and_orientation() {
        let sq = square();
        assert!((polygon_area(&sq) - 1.0).abs() < 1e-15);
        assert!((polygon_area(&sq.reversed()) + 1.0).abs() < 1e-15);
        assert_eq!(orientation(&sq), Orientation::CounterClockwise);
        assert_eq!(orientation(&sq.reversed()), Orientation::Clockwise);
    }

    #[test]
    fn zero_area_polygon_is_degenerate() {
        let flat = Polygon::from_xy(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]).unwrap();
        assert_eq!(orientation(&flat), Orientation::Degenerate);
        assert_eq!(orientation_sign(&flat), Err(GeomError::ZeroArea));
        assert!(is_convex(&flat));
        assert_eq!(classify_vertices(&flat), VertexClasses::default());
    }

    #[test]
    fn convexity_pentagon_vs_reflex() {
        let penta = pentagon();
        assert!(is_convex(&penta));
        assert!(is_convex(&penta.reversed()));
        // Insert a reflex vertex between vertices 0 and 1.
        let mut pts = penta.vertices().to_vec();
        pts.insert(1, pt(0.3, 0.2));
        let dented = Polygon::new(pts).unwrap();
        assert!(!is_convex(&dented));
    }

    #[test]
    fn collinear_vertices_do_not_break_convexity() {
        let sq = Polygon::from_xy(&[(0.0, 0.0), (0.5, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)])
            .unwrap();
        assert!(is_convex(&sq));
        let classes = classify_vertices(&sq);
        assert_eq!(classes.convex.len(), 4);
        assert!(classes.concave.is_empty());
    }

    #[test]
    fn dart_vertices_split_by_orientation() {
        // CCW dart with a reflex vertex at (1, 1).
        let dart = Polygon::from_xy(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (1.0, 1.0), (0.0, 2.0)])
            .unwrap();
        let classes = classify_vertices(&dart);
        assert_eq!(classes.concave, vec![pt(1.0, 1.0)]);
        assert_eq!(classes.convex.len(), 4);
        // Reversing the order keeps the labels.
        let rev = classify_vertices(&dart.reversed());
        assert_eq!(rev.concave, vec![pt(1.0, 1.0)]);
        assert_eq!(rev.convex.len(), 4);
    }

    #[test]
    fn simplicity_validation() {
        assert!(is_simple(&square()));
        let bowtie = Polygon::from_xy(&[(0.0, 0.0), (1.0, 1.0), (1.0, 0.0), (0.0, 1.0)]).unwrap();
        assert!(!is_simple(&bowtie));
        assert!(matches!(
            ensure_simple(&bowtie),
            Err(GeomError::InvalidPolygon { .. })
        ));
        let dup = Polygon::from_xy(&[(0.0, 0.0), (1.0, 0.0), (1.0, 0.0), (0.0, 1.0)]).unwrap();
        assert!(!is_simple(&dup));
        let spike =
            Polygon::from_xy(&[(0.0, 0.0), (2.0, 0.0), (1.0, 0.0), (1.0, 1.0)]).unwrap();
        assert!(!is_simple(&spike));
        // A triangle with a straight vertex is still simple.
        let straight = Polygon::from_xy(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (1.0, 1.0)]).unwrap();
        assert!(is_simple(&straight));
    }
}
