//! Curated flat API surface.
//!
//! One import path for every operation, used by the CLI and the Python
//! bindings. Prefer these re-exports over reaching into submodules.

// Predicates
pub use crate::predicates::{
    distance, lowest_point, orient, points_coincide, sign, sign_eps, signed_area,
};
// Segments
pub use crate::segment::{intersects, on_segment_bounds, on_segment_dist};
// Polygons
pub use crate::polygon::{
    classify_vertices, contains, contains_fan, contains_ray, ensure_simple, far_point,
    in_triangle, in_triangle_closed, is_convex, is_simple, orientation, polygon_area,
    polygon_diagonals, tangent_points,
};
// Hull
pub use crate::hull::convex_hull;
// Samplers
pub use crate::rand::{
    draw_convex_polygon, draw_point_cloud, draw_star_polygon, RadialCfg, ReplayToken,
    VertexCount,
};
// Types
pub use crate::error::{GeomError, Result};
pub use crate::types::{
    pt, Diagonal, DiagonalSplit, Orientation, Point, Polygon, RayCast, Segment, Triangle,
    VertexClasses,
};
