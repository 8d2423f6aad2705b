//! Geodesic polyhedron point generation and point-cloud mesh analysis.
//!
//! Given a base polyhedron (icosahedron, octahedron, tetrahedron or a single
//! triangle) and a class pattern (Class I, II or a Class III `(m, n)` pattern
//! with a repeat count), compute every point that tessellates the faces at the
//! resulting frequency, optionally projected onto the unit sphere. Downstream,
//! infer an edge graph from any point cloud and extract its dual vertices.
//!
//! Layout
//! - `vec3`: vector helpers over `nalgebra::Vector3<f64>`.
//! - `base`: fixed base polyhedra and validated custom meshes.
//! - `pattern`: class-pattern parsing and frequency.
//! - `subdiv`: lattice grid, per-face placement, projection, pipeline.
//! - `mesh`: adjacency inference, dual vertices, dual graph.
//! - `shapegroup`: explicit point/edge grouping strategies.
//!
//! Everything is synchronous and pure; no function keeps state between calls.

pub mod api;
pub mod base;
mod cfg;
pub mod error;
pub mod mesh;
pub mod pattern;
pub mod shapegroup;
pub mod subdiv;
pub mod vec3;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{GeodesicError, ParseError, Position, Result};
pub use pattern::{parse_class_pattern, ClassPattern, PatternClass};
pub use vec3::Vec3;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::base::{get_poly, get_poly_by_tag, BaseKind, Polyhedron};
    pub use crate::error::{GeodesicError, ParseError, Result};
    pub use crate::mesh::{
        dual_graph, find_adjacent_edges, find_dual_vertices, AdjacencyCfg, DualGraph, DualVertex,
        Edge,
    };
    pub use crate::pattern::{parse_class_pattern, ClassPattern};
    pub use crate::shapegroup::Classifier;
    pub use crate::subdiv::{generate_points, Division, GeodesicCfg, PointSet};
    pub use crate::vec3::{vec3, Vec3};
}
