//! Random point clouds and polygons (radial jitter + replay tokens).
//!
//! Purpose
//! - Small, deterministic samplers for tests, benches and the CLI `sample`
//!   command. Every draw is reproducible from a `(seed, index)` replay token.
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π), add bounded angular and
//!   radial jitter. Keeping the angles sorted makes the vertex cycle a
//!   star-shaped simple polygon around the origin; wrapping it in a convex
//!   hull gives a convex polygon.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::Result;
use crate::hull::convex_hull;
use crate::types::{Point, Polygon};

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Radial-jitter sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radial jitter (relative amplitude). Radii = `base_radius * (1 + u)`, with `u∈[-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    pub base_radius: f64,
    /// Random global phase in [0, 2π)?
    pub random_phase: bool,
}

impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(12),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            base_radius: 1.0,
            random_phase: true,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

fn radial_vertices(cfg: RadialCfg, rng: &mut StdRng) -> Vec<Point> {
    let n = cfg.vertex_count.sample(rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.95);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = std::f64::consts::TAU / (n as f64);
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * std::f64::consts::TAU
    } else {
        0.0
    };
    // Jitter stays below half a spacing, so the angles remain increasing.
    let angles: Vec<f64> = (0..n)
        .map(|k| {
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            phase + (k as f64) * delta + jitter
        })
        .collect();
    angles
        .into_iter()
        .map(|th| {
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = (1.0 + u) * r0;
            Vector2::new(th.cos() * r, th.sin() * r)
        })
        .collect()
}

/// Star-shaped simple polygon (usually concave).
///
/// With four or more vertices every angular gap stays below π, so the origin
/// is interior and the order is CCW. Triangles may come out either way.
pub fn draw_star_polygon(cfg: RadialCfg, tok: ReplayToken) -> Result<Polygon> {
    let mut rng = tok.to_std_rng();
    Polygon::new(radial_vertices(cfg, &mut rng))
}

/// Convex polygon in CCW order: the hull of a radial draw.
///
/// The hull may have fewer vertices than requested.
pub fn draw_convex_polygon(cfg: RadialCfg, tok: ReplayToken) -> Result<Polygon> {
    let mut rng = tok.to_std_rng();
    Polygon::new(convex_hull(&radial_vertices(cfg, &mut rng)))
}

/// `n` points uniform in the square `[-half, half]^2`.
pub fn draw_point_cloud(n: usize, half: f64, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let h = half.abs().max(1e-9);
    (0..n)
        .map(|_| Vector2::new(rng.gen_range(-h..h), rng.gen_range(-h..h)))
        .collect()
}
