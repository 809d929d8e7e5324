//! Predicate and polygon bindings.

use crate::common::{map_geom_err, point, polygon_from_py, xys, Xy};
use planar::api;
use planar::Segment;
use pyo3::prelude::*;

/// Signed area of triangle `abc`; positive for a counter-clockwise turn.
#[pyfunction]
pub fn signed_area(a: Xy, b: Xy, c: Xy) -> f64 {
    api::signed_area(point(a), point(b), point(c))
}

/// True when closed segments `p0p1` and `q0q1` share at least one point.
#[pyfunction]
pub fn segments_intersect(p0: Xy, p1: Xy, q0: Xy, q1: Xy) -> bool {
    let s = Segment::new(point(p0), point(p1));
    let t = Segment::new(point(q0), point(q1));
    api::intersects(&s, &t)
}

#[pyfunction]
pub fn convex_hull(points: Vec<Xy>) -> Vec<Xy> {
    let pts: Vec<_> = points.into_iter().map(point).collect();
    xys(&api::convex_hull(&pts))
}

/// Signed polygon area (positive when counter-clockwise).
#[pyfunction]
pub fn polygon_area(vertices: Vec<Xy>) -> PyResult<f64> {
    Ok(api::polygon_area(&polygon_from_py(vertices)?))
}

#[pyfunction]
pub fn is_convex(vertices: Vec<Xy>) -> PyResult<bool> {
    Ok(api::is_convex(&polygon_from_py(vertices)?))
}

/// Point-in-polygon, boundary inclusive. `method` is `"ray"` or `"fan"`.
#[pyfunction]
#[pyo3(signature = (vertices, q, method = "ray"))]
pub fn contains(vertices: Vec<Xy>, q: Xy, method: &str) -> PyResult<bool> {
    let poly = polygon_from_py(vertices)?;
    let res = match method {
        "ray" => api::contains(&poly, point(q)),
        "fan" => api::contains_fan(&poly, point(q)),
        other => {
            return Err(pyo3::exceptions::PyValueError::new_err(format!(
                "unknown method {other:?}; expected \"ray\" or \"fan\""
            )))
        }
    };
    res.map_err(map_geom_err)
}

/// `(internal, external)` diagonals as lists of `(i, j)` index pairs.
#[pyfunction]
pub fn polygon_diagonals(
    vertices: Vec<Xy>,
) -> PyResult<(Vec<(usize, usize)>, Vec<(usize, usize)>)> {
    let split = api::polygon_diagonals(&polygon_from_py(vertices)?).map_err(map_geom_err)?;
    let pairs = |ds: &[api::Diagonal]| -> Vec<(usize, usize)> {
        ds.iter().map(|d| (d.i, d.j)).collect()
    };
    Ok((pairs(&split.internal), pairs(&split.external)))
}

#[pyfunction]
pub fn tangent_points(vertices: Vec<Xy>, q: Xy) -> PyResult<Vec<Xy>> {
    let poly = polygon_from_py(vertices)?;
    let t = api::tangent_points(&poly, point(q)).map_err(map_geom_err)?;
    Ok(xys(&t))
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(signed_area, m)?)?;
    m.add_function(wrap_pyfunction!(segments_intersect, m)?)?;
    m.add_function(wrap_pyfunction!(convex_hull, m)?)?;
    m.add_function(wrap_pyfunction!(polygon_area, m)?)?;
    m.add_function(wrap_pyfunction!(is_convex, m)?)?;
    m.add_function(wrap_pyfunction!(contains, m)?)?;
    m.add_function(wrap_pyfunction!(polygon_diagonals, m)?)?;
    m.add_function(wrap_pyfunction!(tangent_points, m)?)?;
    Ok(())
}
