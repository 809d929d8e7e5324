//! Print diagonal and tangent summaries for a few random polygons.
//!
//! Usage:
//!   cargo run -p planar --example polygon_tour -- star
//!   cargo run -p planar --example polygon_tour -- convex
//!
//! - star mode: star-shaped (usually concave) draws, internal vs external
//!   diagonal counts and concave vertex counts
//! - convex mode: hull draws, tangent points seen from a far point

use planar::prelude::*;
use planar::rand::{draw_convex_polygon, draw_star_polygon, RadialCfg, ReplayToken, VertexCount};

fn cfg() -> RadialCfg {
    RadialCfg {
        vertex_count: VertexCount::Uniform { min: 5, max: 12 },
        radial_jitter: 0.5,
        ..RadialCfg::default()
    }
}

fn main() -> Result<(), GeomError> {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "star".to_string());
    match mode.as_str() {
        "star" => show_star_mode(),
        "convex" => show_convex_mode(),
        _ => {
            eprintln!("usage: polygon_tour [star|convex]");
            Ok(())
        }
    }
}

fn show_star_mode() -> Result<(), GeomError> {
    for index in 0..5 {
        let p = draw_star_polygon(cfg(), ReplayToken { seed: 2025, index })?;
        let split = polygon_diagonals(&p)?;
        let classes = classify_vertices(&p);
        println!(
            "star sample {index}: n={}, area={:.3}, concave={}, internal={}, external={}",
            p.len(),
            polygon_area(&p),
            classes.concave.len(),
            split.internal.len(),
            split.external.len()
        );
    }
    Ok(())
}

fn show_convex_mode() -> Result<(), GeomError> {
    let q = pt(4.0, 1.5);
    for index in 0..5 {
        let p = draw_convex_polygon(cfg(), ReplayToken { seed: 777, index })?;
        let t = tangent_points(&p, q)?;
        let shown: Vec<String> = t.iter().map(|v| format!("({:.3}, {:.3})", v.x, v.y)).collect();
        println!(
            "convex sample {index}: n={}, tangents from ({}, {}): {}",
            p.len(),
            q.x,
            q.y,
            shown.join(" ")
        );
    }
    Ok(())
}
