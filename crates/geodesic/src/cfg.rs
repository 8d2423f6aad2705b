//! Tolerance defaults (internal).
//!
//! Policy
//! - Defaults are fixed constants so call sites do not juggle tolerances.
//!   Tunable knobs (the adjacency ratio) live in explicit config structs instead.

/// Vectors shorter than this are treated as zero by `vec3::unit`.
pub(crate) const ZERO_EPS: f64 = 1e-300;
/// Absolute tolerance for "lies on the unit sphere".
pub(crate) const UNIT_EPS: f64 = 1e-9;
/// Tie tolerance when picking the dominant axis in `Classifier::Axis`.
pub(crate) const AXIS_TIE_EPS: f64 = 1e-3;
/// Default neighbour ratio: an edge may be at most this many times the
/// nearest-neighbour distance of either endpoint.
pub(crate) const ADJACENCY_RATIO: f64 = 1.5;
