//! Error types for pattern parsing and point generation.
//!
//! - `ParseError`: everything that can go wrong reading a class-pattern string.
//! - `GeodesicError`: the library-wide error; wraps `ParseError`.
//!
//! `DivisionByZero` marks degenerate geometry: a zero-length edge or vertex
//! vector, or an equal-angle step whose denominator vanishes (an edge at least
//! as long as the diameter through its corner). Valid base polyhedra and class
//! patterns never produce it.

use std::fmt;

use thiserror::Error;

/// Library result alias.
pub type Result<T> = std::result::Result<T, GeodesicError>;

/// Which of the two comma-separated pattern values a parse error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Position {
    First,
    Second,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::First => f.write_str("first"),
            Position::Second => f.write_str("second"),
        }
    }
}

/// Class-pattern parse failures.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("{position} class pattern value not an integer: {token:?}")]
    NonInteger { position: Position, token: String },
    #[error("{position} class pattern value cannot be negative: {value}")]
    NegativeValue { position: Position, value: i64 },
    #[error("class pattern values cannot both be 0")]
    BothZero,
    #[error("class pattern contains more than two values ({parts} given)")]
    TooManyParts { parts: usize },
    #[error("class type can only be 1 or 2 when a single value is given, got {token:?}")]
    InvalidClassToken { token: String },
}

/// Errors surfaced by the geometry pipeline.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GeodesicError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("unsupported base polyhedron {tag:?} (expected i, o, t or T)")]
    UnsupportedPolyhedron { tag: String },
    #[error("repeat multiplier must be at least 1")]
    ZeroRepeats,
    #[error("subdivision frequency does not fit in usize")]
    FrequencyOverflow,
    #[error("face {face} references missing vertex {index}")]
    InvalidFace { face: usize, index: usize },
    #[error("degenerate geometry: zero-length vector or vanishing denominator")]
    DivisionByZero,
}
