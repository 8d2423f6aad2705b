//! Data types shared by the grid, face and pipeline stages.

use std::str::FromStr;

use crate::base::BaseKind;
use crate::error::{GeodesicError, Result};
use crate::pattern::ClassPattern;
use crate::vec3::Vec3;

/// How base edges are divided before points are placed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Division {
    /// Equal central angle between consecutive points (after projection).
    #[default]
    EqualAngle,
    /// Equal chord length along the flat edge.
    EqualLength,
}

impl Division {
    #[inline]
    pub fn from_equal_length(equal_length: bool) -> Self {
        if equal_length {
            Division::EqualLength
        } else {
            Division::EqualAngle
        }
    }
}

/// Where a lattice point sits on its face.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Location {
    /// Coincides with a face corner.
    Vertex,
    /// On directed face edge `k`, i.e. `face[k] → face[(k+1)%3]`, not at a corner.
    Edge(usize),
    Interior,
}

/// Lattice index `(i, j)` with its face coordinates `(x, y)`.
///
/// `x` counts steps along `f0→f1`, `y` along `f0→f2`; admissible points have
/// `x ≥ 0`, `y ≥ 0`, `x + y ≤ freq`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LatticePoint {
    pub i: i64,
    pub j: i64,
    pub x: i64,
    pub y: i64,
}

impl LatticePoint {
    /// `(x, y, freq − x − y)`: steps from each corner's own edge frame.
    #[inline]
    pub fn barycentric(&self, freq: usize) -> [usize; 3] {
        let f = freq as i64;
        [self.x as usize, self.y as usize, (f - self.x - self.y) as usize]
    }

    pub fn location(&self, freq: usize) -> Location {
        let f = freq as i64;
        let on_20 = self.x == 0;
        let on_01 = self.y == 0;
        let on_12 = self.x + self.y == f;
        match (on_01, on_12, on_20) {
            (false, false, false) => Location::Interior,
            (true, false, false) => Location::Edge(0),
            (false, true, false) => Location::Edge(1),
            (false, false, true) => Location::Edge(2),
            _ => Location::Vertex,
        }
    }
}

/// Full set of generation inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeodesicCfg {
    pub base: BaseKind,
    pub pattern: ClassPattern,
    /// Caller multiplier on top of `pattern.repeats`; must be ≥ 1.
    pub repeats: u32,
    /// Keep flat-face positions instead of projecting onto the unit sphere.
    pub flat_faced: bool,
    pub division: Division,
}

impl Default for GeodesicCfg {
    fn default() -> Self {
        Self {
            base: BaseKind::Icosahedron,
            pattern: ClassPattern::CLASS_I,
            repeats: 1,
            flat_faced: false,
            division: Division::EqualAngle,
        }
    }
}

impl GeodesicCfg {
    /// Build from raw inputs: base tag, class-pattern string, multiplier, flags.
    pub fn from_args(
        base_tag: &str,
        class_pattern: &str,
        repeats: u32,
        flat_faced: bool,
        equal_length: bool,
    ) -> Result<Self> {
        let cfg = Self {
            base: BaseKind::from_str(base_tag)?,
            pattern: class_pattern.parse()?,
            repeats,
            flat_faced,
            division: Division::from_equal_length(equal_length),
        };
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if self.repeats == 0 || self.pattern.repeats == 0 {
            return Err(GeodesicError::ZeroRepeats);
        }
        self.frequency()?;
        Ok(())
    }

    /// Pattern with the caller multiplier folded in.
    #[inline]
    pub fn effective_pattern(&self) -> Result<ClassPattern> {
        self.pattern.with_repeats(self.repeats)
    }

    #[inline]
    pub fn frequency(&self) -> Result<usize> {
        self.effective_pattern()?.frequency()
    }
}

/// Generated points: base vertices first, then subdivision points in face order.
#[derive(Clone, Debug, PartialEq)]
pub struct PointSet {
    pub points: Vec<Vec3>,
    /// Number of leading entries that are base vertices.
    pub base_count: usize,
    pub frequency: usize,
}

impl PointSet {
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
    #[inline]
    pub fn base_vertices(&self) -> &[Vec3] {
        &self.points[..self.base_count]
    }
    #[inline]
    pub fn generated(&self) -> &[Vec3] {
        &self.points[self.base_count..]
    }
}
