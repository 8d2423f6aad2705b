use std::io::Write;

use anyhow::Result;
use geodesic::mesh::{DualVertex, Edge};
use geodesic::Vec3;
use serde::Serialize;
use serde_json::{json, Value};

/// Output format for point-like results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    /// One `x y z` line per point.
    Xyz,
    /// OFF header with vertices only (no faces).
    Off,
    /// JSON envelope with provenance.
    Json,
}

/// Serializable mirror of an inferred edge.
#[derive(Debug, Serialize)]
pub struct EdgeRow {
    pub a: usize,
    pub b: usize,
    pub length: f64,
}

impl From<&Edge> for EdgeRow {
    fn from(e: &Edge) -> Self {
        Self {
            a: e.a,
            b: e.b,
            length: e.length,
        }
    }
}

/// Serializable mirror of a dual vertex.
#[derive(Debug, Serialize)]
pub struct DualRow {
    pub corners: [usize; 3],
    pub position: [f64; 3],
}

impl From<&DualVertex> for DualRow {
    fn from(d: &DualVertex) -> Self {
        Self {
            corners: d.corners,
            position: xyz(&d.position),
        }
    }
}

#[inline]
pub fn xyz(p: &Vec3) -> [f64; 3] {
    [p.x, p.y, p.z]
}

/// `{code_rev, params, outputs}` document printed by every JSON response.
pub fn envelope(params: Value, outputs: Value) -> Value {
    json!({
        "code_rev": current_git_rev(),
        "params": params,
        "outputs": outputs
    })
}

pub fn write_points<W: Write>(out: &mut W, points: &[Vec3], format: Format, params: Value) -> Result<()> {
    match format {
        Format::Xyz => {
            for p in points {
                writeln!(out, "{} {} {}", p.x, p.y, p.z)?;
            }
        }
        Format::Off => {
            writeln!(out, "OFF")?;
            writeln!(out, "{} 0 0", points.len())?;
            for p in points {
                writeln!(out, "{} {} {}", p.x, p.y, p.z)?;
            }
        }
        Format::Json => {
            let rows: Vec<[f64; 3]> = points.iter().map(xyz).collect();
            let doc = envelope(params, json!({ "points": rows }));
            writeln!(out, "{}", serde_json::to_string_pretty(&doc)?)?;
        }
    }
    Ok(())
}

pub fn write_json<W: Write>(out: &mut W, params: Value, outputs: Value) -> Result<()> {
    let doc = envelope(params, outputs);
    writeln!(out, "{}", serde_json::to_string_pretty(&doc)?)?;
    Ok(())
}

/// Revision from `GIT_COMMIT` at run time, else at build time, else "unknown".
pub fn current_git_rev() -> String {
    pick_rev(std::env::var("GIT_COMMIT").ok(), option_env!("GIT_COMMIT"))
}

fn pick_rev(runtime: Option<String>, built: Option<&str>) -> String {
    runtime
        .into_iter()
        .chain(built.map(str::to_string))
        .find(|rev| !rev.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}
