//! Basic planar value types.
//!
//! - `Point`: an `(x, y)` pair as `nalgebra::Vector2<f64>`.
//! - `Segment`: ordered endpoint pair; also used as a directed query ray.
//! - `Polygon`: implicitly closed vertex cycle with at least three vertices.
//! - `Orientation`, `Diagonal`, `DiagonalSplit`, `VertexClasses`, `RayCast`:
//!   the plain values produced by the algorithms.
//!
//! Code cross-refs: `predicates`, `segment`, `polygon`, `hull`

use nalgebra::Vector2;

use crate::error::{GeomError, Result};

/// A point in the plane.
pub type Point = Vector2<f64>;

/// Three vertices, used by the fan point-in-polygon test.
pub type Triangle = [Point; 3];

/// Shorthand constructor, mostly for tests and literals.
#[inline]
pub fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// Closed segment between `a` and `b`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub a: Point,
    pub b: Point,
}

impl Segment {
    #[inline]
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }
    #[inline]
    pub fn length(&self) -> f64 {
        (self.b - self.a).norm()
    }
}

/// Tri-state orientation of an ordered point sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    CounterClockwise,
    Clockwise,
    Degenerate,
}

impl Orientation {
    /// `+1`, `-1` or `0`.
    #[inline]
    pub fn sign(self) -> i8 {
        match self {
            Orientation::CounterClockwise => 1,
            Orientation::Clockwise => -1,
            Orientation::Degenerate => 0,
        }
    }

    #[inline]
    pub fn from_sign(s: i8) -> Self {
        match s {
            s if s > 0 => Orientation::CounterClockwise,
            s if s < 0 => Orientation::Clockwise,
            _ => Orientation::Degenerate,
        }
    }

    #[inline]
    pub fn reversed(self) -> Self {
        Self::from_sign(-self.sign())
    }
}

/// Simple-or-not polygon: an implicitly closed cycle of `n >= 3` vertices.
///
/// Invariants:
/// - `vertices.len() >= 3` (checked by `new`).
/// - Simplicity and orientation are *not* checked here; see
///   `polygon::classify::{ensure_simple, orientation}`.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    pub fn new(vertices: Vec<Point>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(GeomError::DegeneratePolygon {
                vertices: vertices.len(),
            });
        }
        Ok(Self { vertices })
    }

    /// Build from raw `(x, y)` pairs.
    pub fn from_xy(coords: &[(f64, f64)]) -> Result<Self> {
        Self::new(coords.iter().map(|&(x, y)| Point::new(x, y)).collect())
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    #[inline]
    pub fn into_vertices(self) -> Vec<Point> {
        self.vertices
    }

    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Vertex at cyclic index `i mod n`.
    #[inline]
    pub fn vertex(&self, i: usize) -> Point {
        self.vertices[i % self.vertices.len()]
    }

    /// Vertex before index `i` in cyclic order.
    #[inline]
    pub fn prev(&self, i: usize) -> Point {
        let n = self.vertices.len();
        self.vertices[(i + n - 1) % n]
    }

    /// Edge `k`: `P[k] -> P[k+1 mod n]`.
    #[inline]
    pub fn edge(&self, k: usize) -> Segment {
        Segment::new(self.vertex(k), self.vertex(k + 1))
    }

    /// All `n` edges, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = Segment> + '_ {
        (0..self.vertices.len()).map(move |k| self.edge(k))
    }

    /// Same vertex cycle, opposite orientation.
    pub fn reversed(&self) -> Self {
        let mut vertices = self.vertices.clone();
        vertices.reverse();
        Self { vertices }
    }

    /// Axis-aligned bounds as `(min, max)`.
    pub fn bounding_box(&self) -> (Point, Point) {
        let first = self.vertices[0];
        self.vertices[1..]
            .iter()
            .fold((first, first), |(lo, hi), v| (lo.inf(v), hi.sup(v)))
    }
}

/// A non-edge vertex pair of a polygon, `i < j`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Diagonal {
    pub i: usize,
    pub j: usize,
    pub a: Point,
    pub b: Point,
}

impl Diagonal {
    #[inline]
    pub fn segment(&self) -> Segment {
        Segment::new(self.a, self.b)
    }
}

/// Diagonals of a simple polygon, split by whether they stay inside.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DiagonalSplit {
    pub internal: Vec<Diagonal>,
    pub external: Vec<Diagonal>,
}

/// Vertices labelled by their local turn against the global orientation.
/// Straight (zero-turn) vertices appear in neither list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VertexClasses {
    pub convex: Vec<Point>,
    pub concave: Vec<Point>,
}

/// Outcome of a ray-casting containment query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RayCast {
    /// Boundary points count as inside.
    pub inside: bool,
    /// Number of polygon edges the query ray touches.
    pub crossings: usize,
    pub on_boundary: bool,
}
