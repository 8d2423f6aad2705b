//! Print point, edge, triangle and dual-edge counts for a few geodesic spheres.
//!
//! Usage:
//!   cargo run -p geodesic --example honeycomb -- 2,1
//!
//! The optional argument is a class pattern (default "1"); repeats 1..=4 are shown.

use geodesic::prelude::*;

fn main() {
    let pattern = std::env::args().nth(1).unwrap_or_else(|| "1".to_string());
    for repeats in 1..=4 {
        let cfg = match GeodesicCfg::from_args("i", &pattern, repeats, false, false) {
            Ok(cfg) => cfg,
            Err(err) => {
                eprintln!("honeycomb: {err}");
                return;
            }
        };
        let set = match generate_points(&cfg) {
            Ok(set) => set,
            Err(err) => {
                eprintln!("honeycomb: {err}");
                return;
            }
        };
        let edges = find_adjacent_edges(&set.points, AdjacencyCfg::default());
        let g = dual_graph(&set.points, AdjacencyCfg::default());
        println!(
            "pattern {} x{repeats}: freq={}, V={}, E={}, triangles={}, dual E={}",
            cfg.pattern,
            set.frequency,
            set.len(),
            edges.len(),
            g.vertices.len(),
            g.edges.len()
        );
    }
}
