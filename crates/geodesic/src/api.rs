//! Function-call surface for orchestration layers.
//!
//! Callers that only hold raw inputs (a shape tag, a class-pattern string,
//! flags) go through `get_poly_points`; the analysis helpers take whatever
//! point sequence the caller supplies.

pub use crate::base::{get_poly, get_poly_by_tag, BaseKind, Polyhedron};
pub use crate::mesh::{
    dual_graph, find_adjacent_edges, find_dual_vertices, nearest_neighbor_distances,
    AdjacencyCfg, DualGraph, DualVertex, Edge,
};
pub use crate::pattern::{parse_class_pattern, ClassPattern, PatternClass};
pub use crate::shapegroup::Classifier;
pub use crate::subdiv::{
    generate_points, is_on_unit_sphere, project_to_sphere, subdivide, Division, GeodesicCfg,
    PointSet,
};

use crate::error::Result;

/// Pre: `repeats >= 1`; `base_tag` is one of `i`, `o`, `t`, `T`.
/// Post: base vertices first, then one entry per generated point; unit length
/// unless `flat_faced`.
pub fn get_poly_points(
    class_pattern: &str,
    repeats: u32,
    base_tag: &str,
    flat_faced: bool,
    equal_length: bool,
) -> Result<PointSet> {
    let cfg = GeodesicCfg::from_args(base_tag, class_pattern, repeats, flat_faced, equal_length)?;
    generate_points(&cfg)
}
