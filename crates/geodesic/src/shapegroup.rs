//! Shapegroups: partition points (and edges) into buckets by direction.
//!
//! The grouping strategy is a value picked once by the caller; reference
//! directions for `Nearest` are built explicitly (e.g. `icosahedral_faces`) and
//! carried inside the classifier rather than kept as module state.

use crate::base::{get_poly, BaseKind};
use crate::cfg::AXIS_TIE_EPS;
use crate::mesh::{find_adjacent_edges, find_dual_vertices, AdjacencyCfg, Edge};
use crate::vec3::Vec3;

/// Grouping strategy.
#[derive(Clone, Debug, PartialEq)]
pub enum Classifier {
    /// Everything in group 0.
    Single,
    /// Group 0 above `z_cut`, group 1 at or below.
    Hemisphere { z_cut: f64 },
    /// Group 1 for the cap `z ≥ 0, x² + y² ≤ radius²`; group 0 elsewhere.
    PolarCap { radius: f64 },
    /// Six groups by dominant signed axis: +x, −x, +y, −y, +z, −z.
    Axis,
    /// Index of the reference direction with the largest dot product.
    Nearest { directions: Vec<Vec3> },
}

impl Classifier {
    /// `Nearest` over the given directions; `None` if there are none.
    pub fn nearest(directions: Vec<Vec3>) -> Option<Self> {
        if directions.is_empty() {
            return None;
        }
        Some(Classifier::Nearest { directions })
    }

    /// `Nearest` over the 20 face centres of the unit icosahedron, found the
    /// same way as any other dual: adjacency then mutual triangles.
    pub fn icosahedral_faces() -> Self {
        let verts = get_poly(BaseKind::Icosahedron).vertices;
        let edges = find_adjacent_edges(&verts, AdjacencyCfg::default());
        let directions = find_dual_vertices(&edges, &verts)
            .into_iter()
            .map(|d| d.position)
            .collect();
        Classifier::Nearest { directions }
    }

    pub fn group_count(&self) -> usize {
        match self {
            Classifier::Single => 1,
            Classifier::Hemisphere { .. } | Classifier::PolarCap { .. } => 2,
            Classifier::Axis => 6,
            Classifier::Nearest { directions } => directions.len(),
        }
    }

    pub fn classify(&self, v: &Vec3) -> usize {
        match self {
            Classifier::Single => 0,
            Classifier::Hemisphere { z_cut } => usize::from(v.z <= *z_cut),
            Classifier::PolarCap { radius } => {
                usize::from(v.z >= 0.0 && v.x * v.x + v.y * v.y <= radius * radius)
            }
            Classifier::Axis => axis_key(v),
            Classifier::Nearest { directions } => directions
                .iter()
                .map(|d| d.dot(v))
                .enumerate()
                .fold((0, f64::NEG_INFINITY), |best, (k, dot)| {
                    if dot > best.1 {
                        (k, dot)
                    } else {
                        best
                    }
                })
                .0,
        }
    }

    /// Point indices per group; `out.len() == group_count()`.
    ///
    /// A `Nearest` built without directions has no groups and drops everything.
    pub fn group_points(&self, points: &[Vec3]) -> Vec<Vec<usize>> {
        let mut out = vec![Vec::new(); self.group_count()];
        for (idx, p) in points.iter().enumerate() {
            if let Some(bucket) = out.get_mut(self.classify(p)) {
                bucket.push(idx);
            }
        }
        out
    }

    /// Edge indices per group; an edge joins the smaller of its endpoints' groups.
    ///
    /// Edges with an endpoint outside `points` are dropped.
    pub fn group_edges(&self, edges: &[Edge], points: &[Vec3]) -> Vec<Vec<usize>> {
        let mut out = vec![Vec::new(); self.group_count()];
        for (idx, e) in edges.iter().enumerate() {
            let (Some(pa), Some(pb)) = (points.get(e.a), points.get(e.b)) else {
                continue;
            };
            let key = self.classify(pa).min(self.classify(pb));
            if let Some(bucket) = out.get_mut(key) {
                bucket.push(idx);
            }
        }
        out
    }
}

/// Dominant signed axis; near-ties go to x, then y.
fn axis_key(v: &Vec3) -> usize {
    let (ax, ay, az) = (v.x.abs(), v.y.abs(), v.z.abs());
    if ax >= ay - AXIS_TIE_EPS && ax >= az - AXIS_TIE_EPS {
        if v.x >= 0.0 {
            0
        } else {
            1
        }
    } else if ay > ax && ay >= az - AXIS_TIE_EPS {
        if v.y >= 0.0 {
            2
        } else {
            3
        }
    } else if v.z >= 0.0 {
        4
    } else {
        5
    }
}
