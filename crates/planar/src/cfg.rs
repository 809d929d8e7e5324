//! Tolerance defaults (internal).
//!
//! Policy
//! - Defaults are fixed constants so call sites never juggle tolerances.
//!   `predicates::sign_eps` remains available when a caller needs a custom
//!   epsilon for its own decisions.

/// Half-width of the "zero" band of the tolerant sign test.
pub const SIGN_EPS: f64 = 1e-12;
/// Relative slack for the distance-sum on-segment test, scaled by `max(1, |s|)`.
pub const LENGTH_REL_EPS: f64 = 1e-12;
/// Two points closer than this are treated as the same point.
pub const COINCIDE_EPS: f64 = 1e-12;
/// Ray directions tried by `contains` before giving up on a vertex-free ray.
pub const MAX_RAY_ATTEMPTS: u32 = 16;
