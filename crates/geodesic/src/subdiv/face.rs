//! Lattice → 3D points for a single face.
//!
//! For each directed face edge `k` (`f_k → f_{k+1}`) we precompute `freq + 1`
//! offsets measured from `f_k`. A lattice point with steps `(n0, n1, n2)` is
//! then placed from corner `k` as
//!
//! `f_k + off_k[n_k] + off_{k−1}[freq − n_{k+1}] − off_{k−1}[freq]`
//!
//! i.e. walk `n_k` steps along edge `k` and `n_{k+1}` steps back along the
//! incoming edge. Equal-length division anchors at `f_0` only; equal-angle
//! division averages the three corner anchors, which removes the small
//! asymmetry great-circle steps have when measured from different corners.

use std::f64::consts::FRAC_PI_2;

use crate::cfg::ZERO_EPS;
use crate::error::{GeodesicError, Result};
use crate::vec3::{clamp_unit, unit, Vec3};

use super::types::{Division, LatticePoint, Location};

/// Per-edge offset tables, `offsets[k][s]` for step `s ∈ 0..=freq`.
type EdgeOffsets = [Vec<Vec3>; 3];

fn edge_offsets(f_verts: &[Vec3; 3], freq: usize, division: Division) -> Result<EdgeOffsets> {
    let mut out: EdgeOffsets = Default::default();
    for (k, steps) in out.iter_mut().enumerate() {
        let start = f_verts[k];
        let edge = f_verts[(k + 1) % 3] - start;
        steps.reserve(freq + 1);
        steps.push(Vec3::zeros());
        match division {
            Division::EqualLength => {
                for s in 1..=freq {
                    steps.push(edge * (s as f64 / freq as f64));
                }
            }
            Division::EqualAngle => {
                // Edge as a chord of the circle through the corner (radius r):
                // law of sines in the triangle (origin, f_k, point) gives the
                // distance from f_k at central angle θ. The chord must be
                // shorter than the diameter or the last step's denominator is 0.
                let r = start.norm();
                let chord = edge.norm();
                if r <= ZERO_EPS || chord >= 2.0 * r {
                    return Err(GeodesicError::DivisionByZero);
                }
                let dir = unit(&edge)?;
                let ang = 2.0 * clamp_unit(chord / (2.0 * r)).asin();
                for s in 1..=freq {
                    let theta = s as f64 * ang / freq as f64;
                    let denom = (FRAC_PI_2 + ang / 2.0 - theta).sin();
                    let len = r * theta.sin() / denom;
                    if denom <= ZERO_EPS || !len.is_finite() {
                        return Err(GeodesicError::DivisionByZero);
                    }
                    steps.push(dir * len);
                }
            }
        }
    }
    Ok(out)
}

#[inline]
fn place_from_corner(
    k: usize,
    n: &[usize; 3],
    f_verts: &[Vec3; 3],
    offs: &EdgeOffsets,
    freq: usize,
) -> Vec3 {
    let prev = (k + 2) % 3;
    f_verts[k] + offs[k][n[k]] + offs[prev][freq - n[(k + 1) % 3]] - offs[prev][freq]
}

/// Points for one face.
///
/// - Corner points are never emitted (base vertices are already present).
/// - Points on edge `k` are emitted only if `owned[k]`; the caller decides
///   ownership so every shared edge is emitted by exactly one face.
/// - Interior points are always emitted.
pub fn grid_to_points(
    grid: &[LatticePoint],
    freq: usize,
    division: Division,
    f_verts: [Vec3; 3],
    owned: [bool; 3],
) -> Result<Vec<Vec3>> {
    let offs = edge_offsets(&f_verts, freq, division)?;
    let mut points = Vec::new();
    for lp in grid {
        match lp.location(freq) {
            Location::Vertex => continue,
            Location::Edge(k) if !owned[k] => continue,
            Location::Edge(_) | Location::Interior => {}
        }
        let n = lp.barycentric(freq);
        let pt = match division {
            Division::EqualLength => place_from_corner(0, &n, &f_verts, &offs, freq),
            Division::EqualAngle => {
                (0..3)
                    .map(|k| place_from_corner(k, &n, &f_verts, &offs, freq))
                    .sum::<Vec3>()
                    / 3.0
            }
        };
        points.push(pt);
    }
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subdiv::grid::make_grid;
    use crate::vec3::vec3;

    fn flat_face() -> [Vec3; 3] {
        [
            vec3(0.0, 0.0, 1.0),
            vec3(1.0, 0.0, 1.0),
            vec3(0.0, 1.0, 1.0),
        ]
    }

    #[test]
    fn equal_length_matches_affine_combination() {
        let f = flat_face();
        let freq = 4;
        let grid = make_grid(freq, 1, 0);
        let pts = grid_to_points(&grid, freq, Division::EqualLength, f, [true; 3]).unwrap();
        let expected: Vec<Vec3> = grid
            .iter()
            .filter(|lp| lp.location(freq) != Location::Vertex)
            .map(|lp| {
                let t = freq as f64;
                f[0] + (f[1] - f[0]) * (lp.x as f64 / t) + (f[2] - f[0]) * (lp.y as f64 / t)
            })
            .collect();
        assert_eq!(pts.len(), expected.len());
        for (p, e) in pts.iter().zip(&expected) {
            assert!((p - e).norm() < 1e-12, "{p:?} vs {e:?}");
        }
    }

    #[test]
    fn unowned_edges_are_skipped() {
        let f = flat_face();
        let freq = 3;
        let grid = make_grid(freq, 1, 0);
        let all = grid_to_points(&grid, freq, Division::EqualLength, f, [true; 3]).unwrap();
        let none = grid_to_points(&grid, freq, Division::EqualLength, f, [false; 3]).unwrap();
        // 10 lattice points: 3 corners, 2 per edge, 1 interior
        assert_eq!(all.len(), 7);
        assert_eq!(none.len(), 1);
        let one = grid_to_points(&grid, freq, Division::EqualLength, f, [true, false, false])
            .unwrap();
        assert_eq!(one.len(), 3);
        assert!(one.iter().filter(|p| p.y.abs() < 1e-12).count() == 2);
    }

    #[test]
    fn equal_angle_offsets_span_the_edge() {
        let r = 1.0 / 2.0_f64.sqrt();
        let f = [vec3(1.0, 0.0, 0.0), vec3(0.0, 1.0, 0.0), vec3(r, 0.0, r)];
        let offs = edge_offsets(&f, 5, Division::EqualAngle).unwrap();
        for k in 0..3 {
            let edge = f[(k + 1) % 3] - f[k];
            assert!((offs[k][5] - edge).norm() < 1e-12);
        }
        // steps on the unit circle between x and y are 18° apart after projection
        for s in 0..=5 {
            let p = (f[0] + offs[0][s]).normalize();
            let ang = p.y.atan2(p.x).to_degrees();
            assert!((ang - 18.0 * s as f64).abs() < 1e-9, "step {s}: {ang}");
        }
    }

    #[test]
    fn degenerate_edge_is_division_by_zero() {
        let p = vec3(0.0, 0.0, 1.0);
        let grid = make_grid(2, 1, 0);
        let res = grid_to_points(&grid, 2, Division::EqualAngle, [p, p, p], [true; 3]);
        assert_eq!(res, Err(GeodesicError::DivisionByZero));
    }

    #[test]
    fn edge_past_the_corner_diameter_is_division_by_zero() {
        // |f0| = 0.1 but the edge f0→f1 has length 1
        let f = [
            vec3(0.0, 0.0, 0.1),
            vec3(1.0, 0.0, 0.1),
            vec3(0.0, 1.0, 0.1),
        ];
        let grid = make_grid(3, 1, 0);
        let res = grid_to_points(&grid, 3, Division::EqualAngle, f, [true; 3]);
        assert_eq!(res, Err(GeodesicError::DivisionByZero));
        // antipodal corners: chord equals the diameter
        let g = [vec3(0.0, 0.0, 1.0), vec3(0.0, 0.0, -1.0), vec3(1.0, 0.0, 0.0)];
        assert_eq!(
            edge_offsets(&g, 2, Division::EqualAngle),
            Err(GeodesicError::DivisionByZero)
        );
        // equal-length division has no such limit
        let pts = grid_to_points(&grid, 3, Division::EqualLength, f, [true; 3]).unwrap();
        assert!(pts.iter().all(|p| p.iter().all(|c| c.is_finite())));
    }
}
