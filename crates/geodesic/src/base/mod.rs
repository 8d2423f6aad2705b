//! Base polyhedra: the shapes whose faces get subdivided.
//!
//! Purpose
//! - Provide the four fixed shapes (icosahedron, octahedron, tetrahedron,
//!   single triangle) as explicit vertex/face tables.
//! - Accept caller-built triangle meshes through `Polyhedron::new`, which checks
//!   that every face index names a vertex.
//!
//! Conventions
//! - Vertex id = index into `vertices`.
//! - Faces are `[usize; 3]`, consistently wound. A directed edge `a→b` belongs
//!   to the face that lists `a` then `b` (cyclically).

pub mod special;

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::error::{GeodesicError, Result};
use crate::vec3::Vec3;

/// Selector for the built-in base shapes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BaseKind {
    #[default]
    Icosahedron,
    Octahedron,
    Tetrahedron,
    Triangle,
}

impl BaseKind {
    pub const ALL: [BaseKind; 4] = [
        BaseKind::Icosahedron,
        BaseKind::Octahedron,
        BaseKind::Tetrahedron,
        BaseKind::Triangle,
    ];

    /// Single-letter tag (`i`, `o`, `t`, `T`).
    pub fn tag(self) -> char {
        match self {
            BaseKind::Icosahedron => 'i',
            BaseKind::Octahedron => 'o',
            BaseKind::Tetrahedron => 't',
            BaseKind::Triangle => 'T',
        }
    }
}

impl FromStr for BaseKind {
    type Err = GeodesicError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "i" | "icosahedron" => Ok(BaseKind::Icosahedron),
            "o" | "octahedron" => Ok(BaseKind::Octahedron),
            "t" | "tetrahedron" => Ok(BaseKind::Tetrahedron),
            "T" | "triangle" => Ok(BaseKind::Triangle),
            other => Err(GeodesicError::UnsupportedPolyhedron {
                tag: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for BaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BaseKind::Icosahedron => "icosahedron",
            BaseKind::Octahedron => "octahedron",
            BaseKind::Tetrahedron => "tetrahedron",
            BaseKind::Triangle => "triangle",
        };
        f.write_str(name)
    }
}

/// Triangle mesh: vertex positions plus consistently wound index triples.
///
/// Invariant: every face index is `< vertices.len()`.
#[derive(Clone, Debug, PartialEq)]
pub struct Polyhedron {
    pub vertices: Vec<Vec3>,
    pub faces: Vec<[usize; 3]>,
}

impl Polyhedron {
    /// Validated constructor for caller-built meshes.
    pub fn new(vertices: Vec<Vec3>, faces: Vec<[usize; 3]>) -> Result<Self> {
        for (fi, face) in faces.iter().enumerate() {
            if let Some(&index) = face.iter().find(|&&k| k >= vertices.len()) {
                return Err(GeodesicError::InvalidFace { face: fi, index });
            }
        }
        Ok(Self { vertices, faces })
    }

    /// Corner positions of face `fi`.
    #[inline]
    pub fn face_vertices(&self, fi: usize) -> [Vec3; 3] {
        let f = self.faces[fi];
        [self.vertices[f[0]], self.vertices[f[1]], self.vertices[f[2]]]
    }

    /// Undirected edges as `(lo, hi)` pairs, sorted and de-duplicated.
    pub fn edges(&self) -> Vec<(usize, usize)> {
        let mut out: Vec<(usize, usize)> = self
            .directed_edges()
            .map(|(a, b)| (a.min(b), a.max(b)))
            .collect();
        out.sort_unstable();
        out.dedup();
        out
    }

    /// True if no face traverses `b→a`, i.e. `a→b` has no neighbouring face.
    pub fn is_boundary_edge(&self, a: usize, b: usize) -> bool {
        !self.directed_edges().any(|e| e == (b, a))
    }

    /// Set of all directed face edges, for repeated ownership lookups.
    pub(crate) fn directed_edge_set(&self) -> HashSet<(usize, usize)> {
        self.directed_edges().collect()
    }

    fn directed_edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.faces
            .iter()
            .flat_map(|f| (0..3).map(move |k| (f[k], f[(k + 1) % 3])))
    }
}

/// Built-in base shape.
pub fn get_poly(kind: BaseKind) -> Polyhedron {
    match kind {
        BaseKind::Icosahedron => special::icosahedron(),
        BaseKind::Octahedron => special::octahedron(),
        BaseKind::Tetrahedron => special::tetrahedron(),
        BaseKind::Triangle => special::triangle(),
    }
}

/// Built-in base shape by tag; unknown tags are `UnsupportedPolyhedron`.
pub fn get_poly_by_tag(tag: &str) -> Result<Polyhedron> {
    Ok(get_poly(tag.parse()?))
}
