//! Planar computational geometry: predicates and polygon algorithms.
//!
//! Every directional decision reduces to the tolerant sign of
//! `predicates::signed_area`. Algorithms are pure functions over plain
//! values; preconditions on polygons (convexity, simplicity, non-zero area)
//! are checked at the entry point of each algorithm and surface as
//! `GeomError`.
//!
//! Layout
//! - `predicates`, `segment`: orientation, distance, intersection.
//! - `polygon`: classification, containment, diagonals, tangents.
//! - `hull`: gift-wrapping convex hull.
//! - `rand`: reproducible samplers for tests, benches and the CLI.

pub mod api;
pub mod cfg;
pub mod error;
pub mod hull;
pub mod polygon;
pub mod predicates;
pub mod rand;
pub mod segment;
pub mod types;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{GeomError, Result};
pub use types::{
    pt, Diagonal, DiagonalSplit, Orientation, Point, Polygon, RayCast, Segment, Triangle,
    VertexClasses,
};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::hull::convex_hull;
    pub use crate::polygon::{
        classify_vertices, contains, contains_fan, contains_ray, is_convex, orientation,
        polygon_area, polygon_diagonals, tangent_points,
    };
    pub use crate::predicates::{distance, sign, signed_area};
    pub use crate::segment::intersects;
    pub use crate::types::{pt, Orientation, Point, Polygon, Segment};
    pub use crate::GeomError;
}
