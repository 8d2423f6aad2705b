//! Class-pattern parsing and frequency arithmetic.
//!
//! A pattern is `(m, n, repeats)`. Class I is `(1,0)`, Class II is `(1,1)`,
//! anything else is a Class III (chiral) pattern. Parsing reduces `(m, n)` by
//! their gcd once, so stored `(m, n)` are coprime and `repeats` carries the
//! common factor. The frequency along a base edge is
//! `repeats · (m² + m·n + n²)`.

use std::fmt;
use std::str::FromStr;

use crate::error::{GeodesicError, ParseError, Position};

/// Reduced subdivision pattern.
///
/// Invariants: `gcd(m, n) == 1`, not both zero, `repeats >= 1` for parsed values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ClassPattern {
    pub m: u32,
    pub n: u32,
    pub repeats: u32,
}

/// Symmetry class of a pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PatternClass {
    I,
    II,
    III,
}

impl ClassPattern {
    pub const CLASS_I: ClassPattern = ClassPattern {
        m: 1,
        n: 0,
        repeats: 1,
    };
    pub const CLASS_II: ClassPattern = ClassPattern {
        m: 1,
        n: 1,
        repeats: 1,
    };

    /// Build from raw `(m, n)`, reducing by the gcd.
    pub fn new(m: u32, n: u32) -> Result<Self, ParseError> {
        if m == 0 && n == 0 {
            return Err(ParseError::BothZero);
        }
        let g = gcd(m, n);
        Ok(Self {
            m: m / g,
            n: n / g,
            repeats: g,
        })
    }

    /// Multiply the stored repeat count by a caller-supplied factor.
    pub fn with_repeats(self, k: u32) -> Result<Self, GeodesicError> {
        let repeats = self
            .repeats
            .checked_mul(k)
            .ok_or(GeodesicError::FrequencyOverflow)?;
        Ok(Self { repeats, ..self })
    }

    /// `m² + m·n + n²`.
    pub fn triangulation_number(&self) -> Result<usize, GeodesicError> {
        let (m, n) = (self.m as usize, self.n as usize);
        m.checked_mul(m)
            .zip(m.checked_mul(n))
            .zip(n.checked_mul(n))
            .and_then(|((mm, mn), nn)| mm.checked_add(mn)?.checked_add(nn))
            .ok_or(GeodesicError::FrequencyOverflow)
    }

    /// Divisions along a base edge: `repeats · (m² + m·n + n²)`.
    pub fn frequency(&self) -> Result<usize, GeodesicError> {
        (self.repeats as usize)
            .checked_mul(self.triangulation_number()?)
            .ok_or(GeodesicError::FrequencyOverflow)
    }

    pub fn class(&self) -> PatternClass {
        match (self.m, self.n) {
            (1, 0) | (0, 1) => PatternClass::I,
            (1, 1) => PatternClass::II,
            _ => PatternClass::III,
        }
    }
}

impl Default for ClassPattern {
    fn default() -> Self {
        Self::CLASS_I
    }
}

impl FromStr for ClassPattern {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        parse_class_pattern(s)
    }
}

/// Prints the un-reduced `"M,N"`; parsing it gives back the same pattern.
impl fmt::Display for ClassPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = u64::from(self.repeats);
        write!(f, "{},{}", u64::from(self.m) * r, u64::from(self.n) * r)
    }
}

/// Parse `"1"`, `"2"` or `"M,N"` into a reduced pattern.
///
/// - `"1"` → `(1,0,1)`, `"2"` → `(1,1,1)`; other single tokens are rejected.
/// - `"M,N"`: both non-negative integers, not both zero; reduced by `gcd(M,N)`.
/// - Three or more comma-separated parts are rejected.
pub fn parse_class_pattern(s: &str) -> Result<ClassPattern, ParseError> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    match parts.as_slice() {
        [single] => match *single {
            "1" => Ok(ClassPattern::CLASS_I),
            "2" => Ok(ClassPattern::CLASS_II),
            other => Err(ParseError::InvalidClassToken {
                token: other.to_string(),
            }),
        },
        [first, second] => {
            let m = parse_value(first, Position::First)?;
            let n = parse_value(second, Position::Second)?;
            ClassPattern::new(m, n)
        }
        _ => Err(ParseError::TooManyParts { parts: parts.len() }),
    }
}

fn parse_value(token: &str, position: Position) -> Result<u32, ParseError> {
    let non_integer = || ParseError::NonInteger {
        position,
        token: token.to_string(),
    };
    let value: i64 = token.parse().map_err(|_| non_integer())?;
    if value < 0 {
        return Err(ParseError::NegativeValue { position, value });
    }
    u32::try_from(value).map_err(|_| non_integer())
}

/// Euclid; `gcd(a, 0) == a`.
fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}
