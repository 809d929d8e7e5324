use nalgebra::Vector2;
use planar::{GeomError, Point, Polygon};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

pub type Xy = (f64, f64);

#[inline]
pub fn point(p: Xy) -> Point {
    Vector2::new(p.0, p.1)
}

#[inline]
pub fn xy(p: &Point) -> Xy {
    (p.x, p.y)
}

pub fn xys(points: &[Point]) -> Vec<Xy> {
    points.iter().map(xy).collect()
}

pub fn polygon_from_py(vertices: Vec<Xy>) -> PyResult<Polygon> {
    Polygon::new(vertices.into_iter().map(point).collect()).map_err(map_geom_err)
}

pub fn map_geom_err(err: GeomError) -> PyErr {
    PyValueError::new_err(err.to_string())
}
