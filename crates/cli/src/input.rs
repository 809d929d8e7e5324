//! Point and polygon loading for the CLI.
//!
//! Accepted files:
//! - `.csv`: columns `x`, `y` (any numeric dtype), read lazily with polars.
//! - anything else: JSON, either `[[x, y], ...]` or `[{"x": .., "y": ..}, ...]`.

use anyhow::{anyhow, bail, Context, Result};
use planar::{pt, Point, Polygon};
use polars::prelude::*;
use serde::Deserialize;
use std::path::Path;

#[derive(Deserialize)]
#[serde(untagged)]
enum PointRow {
    Pair([f64; 2]),
    Named { x: f64, y: f64 },
}

impl From<PointRow> for Point {
    fn from(row: PointRow) -> Self {
        match row {
            PointRow::Pair([x, y]) => pt(x, y),
            PointRow::Named { x, y } => pt(x, y),
        }
    }
}

/// Load a point sequence, keeping file order.
pub fn read_points(path: &Path) -> Result<Vec<Point>> {
    let is_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    let points = if is_csv {
        read_csv(path)?
    } else {
        let bytes =
            std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        parse_json(&bytes).with_context(|| format!("parsing {}", path.display()))?
    };
    tracing::info!(path = %path.display(), points = points.len(), "loaded input");
    Ok(points)
}

/// Load a polygon; vertex order is the file order.
pub fn read_polygon(path: &Path) -> Result<Polygon> {
    let points = read_points(path)?;
    Polygon::new(points).with_context(|| format!("polygon from {}", path.display()))
}

fn parse_json(bytes: &[u8]) -> Result<Vec<Point>> {
    let rows: Vec<PointRow> = serde_json::from_slice(bytes)?;
    Ok(rows.into_iter().map(Point::from).collect())
}

fn read_csv(path: &Path) -> Result<Vec<Point>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading x,y columns of {}", path.display()))?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    xs.into_iter()
        .zip(ys.into_iter())
        .enumerate()
        .map(|(row, (x, y))| match (x, y) {
            (Some(x), Some(y)) => Ok(pt(x, y)),
            _ => Err(anyhow!("row {row}: missing coordinate")),
        })
        .collect()
}

/// Parse `x0,y0,x1,y1,...` into exactly `N` numbers.
pub fn parse_coords<const N: usize>(raw: &str) -> Result<[f64; N]> {
    let values = raw
        .split(',')
        .map(|s| {
            s.trim()
                .parse::<f64>()
                .with_context(|| format!("not a number: {s:?}"))
        })
        .collect::<Result<Vec<f64>>>()?;
    match <[f64; N]>::try_from(values) {
        Ok(arr) => Ok(arr),
        Err(v) => bail!("expected {N} comma-separated numbers, got {}", v.len()),
    }
}
