//! 3D vector algebra on top of `nalgebra::Vector3<f64>`.
//!
//! `Vec3` is a `Copy` value type; negate, add, subtract, scale and divide come
//! from nalgebra's operators, as do `dot` and `cross`. This module adds the
//! operations the geodesic code needs under their own names.

use nalgebra::{Rotation3, Vector3};

use crate::cfg::ZERO_EPS;
use crate::error::{GeodesicError, Result};

/// Double-precision 3D vector.
pub type Vec3 = Vector3<f64>;

#[inline]
pub fn vec3(x: f64, y: f64, z: f64) -> Vec3 {
    Vec3::new(x, y, z)
}

/// Euclidean length.
#[inline]
pub fn mag(v: &Vec3) -> f64 {
    v.norm()
}

/// Squared length.
#[inline]
pub fn mag2(v: &Vec3) -> f64 {
    v.norm_squared()
}

/// `v / |v|`; fails with `DivisionByZero` for a zero (or non-finite) vector.
#[inline]
pub fn unit(v: &Vec3) -> Result<Vec3> {
    let m = v.norm();
    if !m.is_finite() || m <= ZERO_EPS {
        return Err(GeodesicError::DivisionByZero);
    }
    Ok(v / m)
}

/// Scalar triple product `a · (b × c)`.
#[inline]
pub fn triple(a: &Vec3, b: &Vec3, c: &Vec3) -> f64 {
    a.dot(&b.cross(c))
}

/// Rotate `v` about the z-axis by `ang` radians (counterclockwise seen from +z).
pub fn rot_z(v: &Vec3, ang: f64) -> Vec3 {
    Rotation3::from_axis_angle(&Vector3::z_axis(), ang) * v
}

/// Clamp a value into `[-1, 1]` before `asin`/`acos`.
#[inline]
pub fn clamp_unit(val: f64) -> f64 {
    val.clamp(-1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn operators_are_value_semantics() {
        let a = vec3(1.0, 2.0, 3.0);
        let b = vec3(-2.0, 0.5, 4.0);
        let sum = a + b;
        let diff = a - b;
        assert_eq!(sum, vec3(-1.0, 2.5, 7.0));
        assert_eq!(diff, vec3(3.0, 1.5, -1.0));
        assert_eq!(-a, vec3(-1.0, -2.0, -3.0));
        assert_eq!(a * 2.0, vec3(2.0, 4.0, 6.0));
        assert_eq!(a / 2.0, vec3(0.5, 1.0, 1.5));
        // inputs untouched
        assert_eq!(a, vec3(1.0, 2.0, 3.0));
    }

    #[test]
    fn dot_cross_triple() {
        let x = vec3(1.0, 0.0, 0.0);
        let y = vec3(0.0, 1.0, 0.0);
        let z = vec3(0.0, 0.0, 1.0);
        assert_eq!(x.cross(&y), z);
        assert_eq!(x.dot(&y), 0.0);
        assert!((triple(&x, &y, &z) - 1.0).abs() < 1e-15);
        assert!((triple(&y, &x, &z) + 1.0).abs() < 1e-15);
    }

    #[test]
    fn magnitude_and_unit() {
        let v = vec3(3.0, 4.0, 12.0);
        assert!((mag(&v) - 13.0).abs() < 1e-12);
        assert!((mag2(&v) - 169.0).abs() < 1e-12);
        let u = unit(&v).unwrap();
        assert!((mag(&u) - 1.0).abs() < 1e-15);
        assert!((u - v / 13.0).norm() < 1e-15);
    }

    #[test]
    fn unit_of_zero_is_division_by_zero() {
        assert_eq!(unit(&Vec3::zeros()), Err(GeodesicError::DivisionByZero));
    }

    #[test]
    fn rot_z_quarter_turn() {
        let v = vec3(1.0, 0.0, 0.5);
        let r = rot_z(&v, FRAC_PI_2);
        assert!((r - vec3(0.0, 1.0, 0.5)).norm() < 1e-12);
        // z and radius preserved for an arbitrary angle
        let w = rot_z(&vec3(0.3, -0.7, 2.0), 1.234);
        assert!((w.z - 2.0).abs() < 1e-12);
        assert!((w.xy().norm() - vec3(0.3, -0.7, 0.0).norm()).abs() < 1e-12);
    }

    #[test]
    fn clamp_unit_bounds() {
        assert_eq!(clamp_unit(1.0000001), 1.0);
        assert_eq!(clamp_unit(-3.0), -1.0);
        assert_eq!(clamp_unit(0.25), 0.25);
    }
}
