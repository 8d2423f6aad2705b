//! Fixed vertex/face tables for the base shapes.
//!
//! Winding is fixed per shape and consistent across faces: every shared edge
//! appears once as a→b and once as b→a. Edge ownership in the subdivider relies
//! on that.
//!
//! Radii
//! - Icosahedron and tetrahedron: unit circumradius.
//! - Octahedron: circumradius 0.5 (`X = √2/4`).
//! - Triangle: flat equilateral triangle in the plane z = −0.8.

use crate::vec3::{vec3, Vec3};

use super::Polyhedron;

/// Icosahedron coordinate pair `(1/r, φ/r)` with `r = √(φ+2)`.
pub fn ico_coords() -> (f64, f64) {
    let phi = (5.0_f64.sqrt() + 1.0) / 2.0;
    let rad = (phi + 2.0).sqrt();
    (1.0 / rad, phi / rad)
}

pub fn icosahedron() -> Polyhedron {
    let (x, z) = ico_coords();
    let vertices = vec![
        vec3(-x, 0.0, z),
        vec3(x, 0.0, z),
        vec3(-x, 0.0, -z),
        vec3(x, 0.0, -z),
        vec3(0.0, z, x),
        vec3(0.0, z, -x),
        vec3(0.0, -z, x),
        vec3(0.0, -z, -x),
        vec3(z, x, 0.0),
        vec3(-z, x, 0.0),
        vec3(z, -x, 0.0),
        vec3(-z, -x, 0.0),
    ];
    let faces = vec![
        [0, 4, 1],
        [0, 9, 4],
        [9, 5, 4],
        [4, 5, 8],
        [4, 8, 1],
        [8, 10, 1],
        [8, 3, 10],
        [5, 3, 8],
        [5, 2, 3],
        [2, 7, 3],
        [7, 10, 3],
        [7, 6, 10],
        [7, 11, 6],
        [11, 0, 6],
        [0, 1, 6],
        [6, 1, 10],
        [9, 0, 11],
        [9, 11, 2],
        [9, 2, 5],
        [7, 2, 11],
    ];
    Polyhedron { vertices, faces }
}

pub fn octahedron() -> Polyhedron {
    let x = 0.25 * 2.0_f64.sqrt();
    let vertices = vec![
        vec3(0.0, 0.5, 0.0),
        vec3(x, 0.0, -x),
        vec3(x, 0.0, x),
        vec3(-x, 0.0, x),
        vec3(-x, 0.0, -x),
        vec3(0.0, -0.5, 0.0),
    ];
    let faces = vec![
        [0, 1, 2],
        [0, 2, 3],
        [0, 3, 4],
        [0, 4, 1],
        [5, 2, 1],
        [2, 5, 3],
        [3, 5, 4],
        [4, 5, 1],
    ];
    Polyhedron { vertices, faces }
}

pub fn tetrahedron() -> Polyhedron {
    let x = 1.0 / 3.0_f64.sqrt();
    let vertices = vec![
        vec3(-x, x, -x),
        vec3(-x, -x, x),
        vec3(x, x, x),
        vec3(x, -x, -x),
    ];
    let faces = vec![[0, 1, 2], [0, 3, 1], [0, 2, 3], [2, 1, 3]];
    Polyhedron { vertices, faces }
}

/// Single flat triangle, used for non-spherical test patterns.
pub fn triangle() -> Polyhedron {
    let y = 3.0_f64.sqrt() / 12.0;
    let z = -0.8;
    let vertices: Vec<Vec3> = vec![vec3(-0.25, -y, z), vec3(0.25, -y, z), vec3(0.0, 2.0 * y, z)];
    Polyhedron {
        vertices,
        faces: vec![[0, 1, 2]],
    }
}
