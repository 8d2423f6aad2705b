//! Triangle detection and dual vertices.

use std::collections::BTreeSet;

use crate::vec3::Vec3;

use super::adjacency::{find_adjacent_edges, AdjacencyCfg, Edge};

/// Centroid of a detected triangle `corners` (sorted point indices).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DualVertex {
    pub corners: [usize; 3],
    pub position: Vec3,
}

/// Dual vertices plus the edges inferred between them.
#[derive(Clone, Debug, PartialEq)]
pub struct DualGraph {
    pub vertices: Vec<DualVertex>,
    pub edges: Vec<Edge>,
}

impl DualGraph {
    pub fn positions(&self) -> Vec<Vec3> {
        self.vertices.iter().map(|d| d.position).collect()
    }
}

/// Every triangle `{a, b, c}` of pairwise-adjacent points, once, as its centroid.
///
/// Triangles are reported with `a < b < c`, ordered by the edge `(a, b)` they
/// are discovered from. Edges whose endpoints fall outside `points` are ignored.
pub fn find_dual_vertices(edges: &[Edge], points: &[Vec3]) -> Vec<DualVertex> {
    let mut nbrs: Vec<BTreeSet<usize>> = vec![BTreeSet::new(); points.len()];
    let mut pairs: BTreeSet<(usize, usize)> = BTreeSet::new();
    for e in edges {
        if e.a == e.b || e.a >= points.len() || e.b >= points.len() {
            continue;
        }
        nbrs[e.a].insert(e.b);
        nbrs[e.b].insert(e.a);
        pairs.insert((e.a.min(e.b), e.a.max(e.b)));
    }

    let mut out = Vec::new();
    for &(a, b) in &pairs {
        // c > b makes (a, b) the smallest pair of the triangle: counted once.
        for &c in nbrs[a].intersection(&nbrs[b]).filter(|&&c| c > b) {
            out.push(DualVertex {
                corners: [a, b, c],
                position: (points[a] + points[b] + points[c]) / 3.0,
            });
        }
    }
    out
}

/// Adjacency → dual vertices → adjacency over the dual vertices.
///
/// For a geodesic sphere this yields the "honeycomb" (Goldberg-style) net:
/// one vertex per triangle, edges between neighbouring triangles.
pub fn dual_graph(points: &[Vec3], cfg: AdjacencyCfg) -> DualGraph {
    let edges = find_adjacent_edges(points, cfg);
    let vertices = find_dual_vertices(&edges, points);
    let positions: Vec<Vec3> = vertices.iter().map(|d| d.position).collect();
    let dual_edges = find_adjacent_edges(&positions, cfg);
    tracing::debug!(
        triangles = vertices.len(),
        dual_edges = dual_edges.len(),
        "dual graph"
    );
    DualGraph {
        vertices,
        edges: dual_edges,
    }
}
