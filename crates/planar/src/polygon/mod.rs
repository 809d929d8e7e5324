//! Polygon algorithms over `types::Polygon`.
//!
//! - `classify`: area, orientation, convexity, vertex labels, simplicity.
//! - `contains`: point-in-triangle, fan and ray-casting containment.
//! - `diagonals`: internal/external diagonal classification.
//! - `tangent`: silhouette vertices seen from an external point.
//!
//! Preconditions (convexity, simplicity, non-zero area) are checked at each
//! entry point and surface as `GeomError`.

pub mod classify;
pub mod contains;
pub mod diagonals;
pub mod tangent;

pub use classify::{
    classify_vertices, ensure_simple, is_convex, is_simple, orientation, polygon_area,
};
pub use contains::{
    contains, contains_fan, contains_ray, far_point, in_triangle, in_triangle_closed,
};
pub use diagonals::polygon_diagonals;
pub use tangent::tangent_points;
