//! Pipeline: pattern → grid → per-face points → optional projection.

use crate::base::{get_poly, Polyhedron};
use crate::error::Result;
use crate::pattern::ClassPattern;

use super::face::grid_to_points;
use super::grid::make_grid;
use super::project::project_to_sphere;
use super::types::{Division, GeodesicCfg, PointSet};

/// Generate the geodesic point set described by `cfg`.
pub fn generate_points(cfg: &GeodesicCfg) -> Result<PointSet> {
    cfg.validate()?;
    let poly = get_poly(cfg.base);
    let set = subdivide(
        &poly,
        cfg.effective_pattern()?,
        cfg.division,
        !cfg.flat_faced,
    )?;
    tracing::debug!(
        base = %cfg.base,
        pattern = %cfg.pattern,
        repeats = cfg.repeats,
        freq = set.frequency,
        points = set.len(),
        "generated geodesic points"
    );
    Ok(set)
}

/// Subdivide any consistently wound triangle mesh.
///
/// `pattern.repeats` must already include any caller multiplier.
///
/// Edge ownership: a face emits the points on its directed edge `a→b` iff
/// `a < b`, or no other face traverses `b→a` (boundary edge). Neighbours on a
/// closed mesh traverse shared edges in opposite directions, so each shared
/// edge is emitted exactly once.
pub fn subdivide(
    poly: &Polyhedron,
    pattern: ClassPattern,
    division: Division,
    project: bool,
) -> Result<PointSet> {
    let freq = pattern.frequency()?;
    let grid = make_grid(freq, pattern.m, pattern.n);
    let directed = poly.directed_edge_set();

    let mut points = poly.vertices.clone();
    for (fi, face) in poly.faces.iter().enumerate() {
        let owned: [bool; 3] = std::array::from_fn(|k| {
            let (a, b) = (face[k], face[(k + 1) % 3]);
            a < b || !directed.contains(&(b, a))
        });
        let face_points = grid_to_points(&grid, freq, division, poly.face_vertices(fi), owned)?;
        points.extend(face_points);
    }

    if project {
        points = project_to_sphere(&points)?;
    }
    Ok(PointSet {
        points,
        base_count: poly.vertices.len(),
        frequency: freq,
    })
}
