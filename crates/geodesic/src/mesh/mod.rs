//! Mesh analysis over bare point clouds.
//!
//! - `adjacency`: nearest-neighbour edge inference.
//! - `dual`: mutual-triangle detection, centroids, and the dual ("honeycomb") graph.
//!
//! Both are pure functions of their inputs; pair loops are independent and
//! could be split across threads without changing results.

mod adjacency;
mod dual;

pub use adjacency::{find_adjacent_edges, nearest_neighbor_distances, AdjacencyCfg, Edge};
pub use dual::{dual_graph, find_dual_vertices, DualGraph, DualVertex};

#[cfg(test)]
mod tests;
