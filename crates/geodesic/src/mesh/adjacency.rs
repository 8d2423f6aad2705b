//! Edge inference from bare point positions.
//!
//! Two points are joined iff their distance is at most `ratio ×` the smaller
//! of their two nearest-neighbour distances. This recovers the intended edges
//! of roughly uniform meshes (geodesic spheres, Platonic solids). It is an
//! approximation, not a topological reconstruction: on strongly non-uniform
//! clouds, or shapes whose diagonals are short relative to their edges (the
//! octahedron's vertex-to-opposite-vertex distance is only √2 × its edge),
//! extra or missing edges are expected.

use crate::cfg::ADJACENCY_RATIO;
use crate::vec3::Vec3;

/// Undirected edge between point indices `a < b`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
    pub length: f64,
}

impl Edge {
    #[inline]
    pub fn contains(&self, v: usize) -> bool {
        self.a == v || self.b == v
    }
    #[inline]
    pub fn endpoints(&self, points: &[Vec3]) -> (Vec3, Vec3) {
        (points[self.a], points[self.b])
    }
}

/// Adjacency configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AdjacencyCfg {
    pub ratio: f64,
}

impl Default for AdjacencyCfg {
    fn default() -> Self {
        Self {
            ratio: ADJACENCY_RATIO,
        }
    }
}

/// Distance from each point to its nearest other point (`+∞` if alone).
pub fn nearest_neighbor_distances(points: &[Vec3]) -> Vec<f64> {
    let mut nn = vec![f64::INFINITY; points.len()];
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            let d = (points[i] - points[j]).norm();
            if d < nn[i] {
                nn[i] = d;
            }
            if d < nn[j] {
                nn[j] = d;
            }
        }
    }
    nn
}

/// Edges of the point cloud, ordered by `(a, b)` with `a < b`.
///
/// Complexity: O(n²) distance evaluations.
pub fn find_adjacent_edges(points: &[Vec3], cfg: AdjacencyCfg) -> Vec<Edge> {
    let nn = nearest_neighbor_distances(points);
    let mut edges = Vec::new();
    for a in 0..points.len() {
        for b in (a + 1)..points.len() {
            let length = (points[a] - points[b]).norm();
            if length <= cfg.ratio * nn[a].min(nn[b]) {
                edges.push(Edge { a, b, length });
            }
        }
    }
    tracing::debug!(points = points.len(), edges = edges.len(), "adjacency");
    edges
}
