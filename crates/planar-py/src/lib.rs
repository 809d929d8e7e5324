//! PyO3 bindings for the `planar` geometry toolkit.
//!
//! Notes
//! - Bindings stay thin: points cross the boundary as `(x, y)` tuples and
//!   polygons as lists of them.
//! - Every `GeomError` surfaces as `ValueError` with the Rust message.

use pyo3::prelude::*;

mod common;
mod geom;
mod sample;

#[pymodule]
fn planar_native(_py: Python, m: &PyModule) -> PyResult<()> {
    geom::register(m)?;
    sample::register(m)?;
    m.add("__version__", planar::VERSION)?;
    Ok(())
}
