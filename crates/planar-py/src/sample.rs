//! Reproducible polygon draws, keyed by `(seed, index)`.

use crate::common::{map_geom_err, xys, Xy};
use planar::rand::{draw_convex_polygon, draw_star_polygon, RadialCfg, ReplayToken, VertexCount};
use pyo3::prelude::*;

#[pyfunction]
#[pyo3(signature = (vertices, seed, index = 0, convex = false))]
pub fn sample_polygon(vertices: usize, seed: u64, index: u64, convex: bool) -> PyResult<Vec<Xy>> {
    let cfg = RadialCfg {
        vertex_count: VertexCount::Fixed(vertices),
        ..RadialCfg::default()
    };
    let tok = ReplayToken { seed, index };
    let poly = if convex {
        draw_convex_polygon(cfg, tok)
    } else {
        draw_star_polygon(cfg, tok)
    }
    .map_err(map_geom_err)?;
    Ok(xys(poly.vertices()))
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(sample_polygon, m)?)?;
    Ok(())
}
