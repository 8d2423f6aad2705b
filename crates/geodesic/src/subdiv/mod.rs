//! Geodesic subdivision: lattice grid, per-face placement, sphere projection.
//!
//! Purpose
//! - Turn a base polyhedron and a class pattern into the full point set of a
//!   geodesic sphere (or flat-faced variant).
//!
//! Pipeline
//! - `grid::make_grid` enumerates the admissible lattice of one face.
//! - `face::grid_to_points` maps lattice points to 3D positions on a face,
//!   skipping corners and unowned edges.
//! - `project::project_to_sphere` normalizes everything (unless flat-faced).
//! - `build::{generate_points, subdivide}` wires the stages together.
//!
//! Output order: base vertices first (ids preserved), then per-face points in
//! face order. No point is emitted twice.

mod build;
pub mod face;
pub mod grid;
pub mod project;
mod types;

pub use build::{generate_points, subdivide};
pub use face::grid_to_points;
pub use grid::make_grid;
pub use project::{is_on_unit_sphere, project_to_sphere};
pub use types::{Division, GeodesicCfg, LatticePoint, Location, PointSet};
