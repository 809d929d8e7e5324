//! Error type shared by every fallible operation in the crate.

use thiserror::Error;

/// Typed failures for caller-input preconditions.
///
/// None of these are transient: every algorithm is a pure function of its
/// inputs, so retrying with the same input fails the same way.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeomError {
    /// Fewer than three vertices.
    #[error("degenerate polygon: need at least 3 vertices, got {vertices}")]
    DegeneratePolygon { vertices: usize },

    /// The polygon's signed area vanishes, so it has no orientation.
    #[error("degenerate polygon: signed area is zero within tolerance")]
    ZeroArea,

    /// The polygon is not simple where simplicity is required.
    #[error("invalid polygon: {reason}")]
    InvalidPolygon { reason: String },

    /// A convex-only algorithm was given a non-convex polygon.
    #[error("polygon is not convex")]
    NotConvex,

    /// The query cannot be answered reliably (e.g. a ray through a vertex).
    #[error("degenerate query: {reason}")]
    DegenerateQuery { reason: String },

    /// The tangent query point lies inside or on the polygon.
    #[error("query point is not strictly outside the polygon")]
    PointNotExternal,
}

impl GeomError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidPolygon {
            reason: reason.into(),
        }
    }

    pub(crate) fn degenerate_query(reason: impl Into<String>) -> Self {
        Self::DegenerateQuery {
            reason: reason.into(),
        }
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, GeomError>;
