use std::io::{self, BufWriter, Write};
use std::str::FromStr;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use geodesic::prelude::*;
use serde_json::{json, Value};
use tracing_subscriber::fmt::SubscriberBuilder;

mod report;

use report::{DualRow, EdgeRow, Format};

#[derive(Parser)]
#[command(name = "geodesic")]
#[command(about = "Geodesic sphere points, inferred edges and dual vertices", version)]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

/// Inputs shared by every subcommand.
#[derive(Args, Clone)]
struct GenArgs {
    /// Repeat the class pattern this many times
    #[arg(default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    repeats: u32,
    /// Base polyhedron: i (icosahedron), o (octahedron), t (tetrahedron), T (triangle)
    #[arg(short, long, default_value = "i", value_parser = BaseKind::from_str)]
    polyhedron: BaseKind,
    /// Class pattern: 1 (Class I), 2 (Class II) or M,N (Class III)
    #[arg(short, long, default_value = "1", value_parser = parse_class_pattern)]
    class_pattern: ClassPattern,
    /// Keep points on the flat faces (no projection onto the unit sphere)
    #[arg(short, long)]
    flat_faced: bool,
    /// Divide base edges into equal-length rather than equal-angle steps
    #[arg(short = 'l', long)]
    equal_length: bool,
}

impl GenArgs {
    fn cfg(&self) -> Result<GeodesicCfg> {
        let cfg = GeodesicCfg {
            base: self.polyhedron,
            pattern: self.class_pattern,
            repeats: self.repeats,
            flat_faced: self.flat_faced,
            division: Division::from_equal_length(self.equal_length),
        };
        cfg.validate()?;
        Ok(cfg)
    }

    fn params(&self) -> Value {
        let frequency = self
            .class_pattern
            .with_repeats(self.repeats)
            .and_then(|p| p.frequency())
            .ok();
        json!({
            "polyhedron": self.polyhedron.tag().to_string(),
            "class_pattern": self.class_pattern.to_string(),
            "repeats": self.repeats,
            "flat_faced": self.flat_faced,
            "equal_length": self.equal_length,
            "frequency": frequency,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ClassifierKind {
    Single,
    Hemisphere,
    Cap,
    Axis,
    Faces,
}

#[derive(Subcommand)]
enum Action {
    /// Print the generated points
    Points {
        #[command(flatten)]
        opts: GenArgs,
        #[arg(long, value_enum, default_value_t = Format::Xyz)]
        format: Format,
    },
    /// Infer nearest-neighbour edges between the generated points
    Edges {
        #[command(flatten)]
        opts: GenArgs,
        /// Edge threshold as a multiple of the nearest-neighbour distance
        #[arg(long, default_value_t = AdjacencyCfg::default().ratio)]
        ratio: f64,
        #[arg(long)]
        json: bool,
    },
    /// Dual vertices (centres of mutually adjacent triples)
    Duals {
        #[command(flatten)]
        opts: GenArgs,
        #[arg(long, default_value_t = AdjacencyCfg::default().ratio)]
        ratio: f64,
        /// Also infer edges between the dual vertices
        #[arg(long)]
        dual_edges: bool,
        #[arg(long)]
        json: bool,
    },
    /// Partition points and edges into shapegroups
    Groups {
        #[command(flatten)]
        opts: GenArgs,
        #[arg(long, value_enum, default_value_t = ClassifierKind::Single)]
        classifier: ClassifierKind,
        /// Hemisphere split height
        #[arg(long, default_value_t = -0.1, allow_negative_numbers = true)]
        z_cut: f64,
        /// Polar cap radius in the xy-plane
        #[arg(long, default_value_t = 0.4)]
        cap_radius: f64,
        #[arg(long)]
        json: bool,
    },
    /// Print a provenance JSON block with point, edge and dual counts
    Report {
        #[command(flatten)]
        opts: GenArgs,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(io::stderr)
        .init();
    let cmd = Cmd::parse();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match cmd.action {
        Action::Points { opts, format } => points(&mut out, &opts, format)?,
        Action::Edges { opts, ratio, json } => edges(&mut out, &opts, ratio, json)?,
        Action::Duals {
            opts,
            ratio,
            dual_edges,
            json,
        } => duals(&mut out, &opts, ratio, dual_edges, json)?,
        Action::Groups {
            opts,
            classifier,
            z_cut,
            cap_radius,
            json,
        } => {
            let classifier = match classifier {
                ClassifierKind::Single => Classifier::Single,
                ClassifierKind::Hemisphere => Classifier::Hemisphere { z_cut },
                ClassifierKind::Cap => Classifier::PolarCap { radius: cap_radius },
                ClassifierKind::Axis => Classifier::Axis,
                ClassifierKind::Faces => Classifier::icosahedral_faces(),
            };
            groups(&mut out, &opts, &classifier, json)?
        }
        Action::Report { opts } => report_counts(&mut out, &opts)?,
    }
    out.flush()?;
    Ok(())
}

fn points<W: Write>(out: &mut W, opts: &GenArgs, format: Format) -> Result<()> {
    let set = generate_points(&opts.cfg()?)?;
    tracing::info!(points = set.len(), frequency = set.frequency, "points");
    report::write_points(out, &set.points, format, opts.params())
}

fn edges<W: Write>(out: &mut W, opts: &GenArgs, ratio: f64, as_json: bool) -> Result<()> {
    let set = generate_points(&opts.cfg()?)?;
    let edges = find_adjacent_edges(&set.points, AdjacencyCfg { ratio });
    tracing::info!(points = set.len(), edges = edges.len(), ratio, "edges");
    if as_json {
        let rows: Vec<EdgeRow> = edges.iter().map(EdgeRow::from).collect();
        let mut params = opts.params();
        params["ratio"] = json!(ratio);
        return report::write_json(out, params, json!({ "edges": rows }));
    }
    for e in &edges {
        writeln!(out, "{} {} {}", e.a, e.b, e.length)?;
    }
    Ok(())
}

fn duals<W: Write>(
    out: &mut W,
    opts: &GenArgs,
    ratio: f64,
    dual_edges: bool,
    as_json: bool,
) -> Result<()> {
    let set = generate_points(&opts.cfg()?)?;
    let cfg = AdjacencyCfg { ratio };
    let graph = if dual_edges {
        dual_graph(&set.points, cfg)
    } else {
        let edges = find_adjacent_edges(&set.points, cfg);
        DualGraph {
            vertices: find_dual_vertices(&edges, &set.points),
            edges: Vec::new(),
        }
    };
    tracing::info!(
        points = set.len(),
        duals = graph.vertices.len(),
        dual_edges = graph.edges.len(),
        "duals"
    );
    if as_json {
        let verts: Vec<DualRow> = graph.vertices.iter().map(DualRow::from).collect();
        let mut outputs = json!({ "duals": verts });
        if dual_edges {
            let rows: Vec<EdgeRow> = graph.edges.iter().map(EdgeRow::from).collect();
            outputs["dual_edges"] = json!(rows);
        }
        let mut params = opts.params();
        params["ratio"] = json!(ratio);
        return report::write_json(out, params, outputs);
    }
    for d in &graph.vertices {
        let p = d.position;
        writeln!(out, "{} {} {}", p.x, p.y, p.z)?;
    }
    Ok(())
}

fn groups<W: Write>(
    out: &mut W,
    opts: &GenArgs,
    classifier: &Classifier,
    as_json: bool,
) -> Result<()> {
    let set = generate_points(&opts.cfg()?)?;
    let edges = find_adjacent_edges(&set.points, AdjacencyCfg::default());
    let point_groups = classifier.group_points(&set.points);
    let edge_groups = classifier.group_edges(&edges, &set.points);
    tracing::info!(groups = classifier.group_count(), points = set.len(), "groups");
    if as_json {
        let sizes: Vec<usize> = point_groups.iter().map(Vec::len).collect();
        return report::write_json(
            out,
            opts.params(),
            json!({
                "group_sizes": sizes,
                "points": point_groups,
                "edges": edge_groups,
            }),
        );
    }
    for (k, (pg, eg)) in point_groups.iter().zip(&edge_groups).enumerate() {
        writeln!(out, "group {k}: {} points, {} edges", pg.len(), eg.len())?;
    }
    Ok(())
}

fn report_counts<W: Write>(out: &mut W, opts: &GenArgs) -> Result<()> {
    let set = generate_points(&opts.cfg()?)?;
    let edges = find_adjacent_edges(&set.points, AdjacencyCfg::default());
    let duals = find_dual_vertices(&edges, &set.points);
    let pattern = opts.class_pattern.with_repeats(opts.repeats)?;
    tracing::info!(points = set.len(), "report");
    report::write_json(
        out,
        opts.params(),
        json!({
            "version": geodesic::VERSION,
            "triangulation_number": pattern.triangulation_number()?,
            "class": format!("{:?}", pattern.class()),
            "base_vertices": set.base_count,
            "points": set.len(),
            "edges": edges.len(),
            "duals": duals.len(),
        }),
    )
}
