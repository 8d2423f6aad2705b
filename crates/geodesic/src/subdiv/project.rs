use crate::cfg::UNIT_EPS;
use crate::error::Result;
use crate::vec3::{unit, Vec3};

/// Replace every point by its unit-length direction.
///
/// Idempotent up to rounding: projecting unit vectors again is a no-op.
pub fn project_to_sphere(points: &[Vec3]) -> Result<Vec<Vec3>> {
    points.iter().map(unit).collect()
}

/// True if every point has length 1 within `UNIT_EPS`.
pub fn is_on_unit_sphere(points: &[Vec3]) -> bool {
    points.iter().all(|p| (p.norm() - 1.0).abs() <= UNIT_EPS)
}
