use super::*;
use crate::base::{get_poly, BaseKind};
use crate::subdiv::{generate_points, GeodesicCfg};
use crate::vec3::{rot_z, vec3, Vec3};
use nalgebra::{Rotation3, Vector3};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn ico_vertices() -> Vec<Vec3> {
    get_poly(BaseKind::Icosahedron).vertices
}

fn sorted_faces(kind: BaseKind) -> Vec<[usize; 3]> {
    let mut faces: Vec<[usize; 3]> = get_poly(kind)
        .faces
        .into_iter()
        .map(|mut f| {
            f.sort_unstable();
            f
        })
        .collect();
    faces.sort_unstable();
    faces
}

#[test]
fn icosahedron_has_thirty_equal_edges() {
    let pts = ico_vertices();
    let edges = find_adjacent_edges(&pts, AdjacencyCfg::default());
    assert_eq!(edges.len(), 30);
    let l0 = edges[0].length;
    for e in &edges {
        assert!(e.a < e.b);
        assert!(((e.length - l0) / l0).abs() < 1e-9);
    }
    let mut got: Vec<(usize, usize)> = edges.iter().map(|e| (e.a, e.b)).collect();
    got.sort_unstable();
    assert_eq!(got, get_poly(BaseKind::Icosahedron).edges());
}

#[test]
fn icosahedron_has_twenty_dual_vertices() {
    let pts = ico_vertices();
    let edges = find_adjacent_edges(&pts, AdjacencyCfg::default());
    let duals = find_dual_vertices(&edges, &pts);
    assert_eq!(duals.len(), 20);
    let mut corners: Vec<[usize; 3]> = duals.iter().map(|d| d.corners).collect();
    corners.sort_unstable();
    assert_eq!(corners, sorted_faces(BaseKind::Icosahedron));
    for d in &duals {
        let [a, b, c] = d.corners;
        assert!(a < b && b < c);
        let centroid = (pts[a] + pts[b] + pts[c]) / 3.0;
        assert!((d.position - centroid).norm() < 1e-15);
    }
}

#[test]
fn duplicate_and_reversed_edges_do_not_duplicate_triangles() {
    let pts = ico_vertices();
    let mut edges = find_adjacent_edges(&pts, AdjacencyCfg::default());
    let reversed: Vec<Edge> = edges
        .iter()
        .map(|e| Edge {
            a: e.b,
            b: e.a,
            length: e.length,
        })
        .collect();
    edges.extend(reversed);
    edges.push(Edge {
        a: 0,
        b: 99,
        length: 1.0,
    });
    assert_eq!(find_dual_vertices(&edges, &pts).len(), 20);
}

#[test]
fn tetrahedron_edges_and_faces() {
    let pts = get_poly(BaseKind::Tetrahedron).vertices;
    let edges = find_adjacent_edges(&pts, AdjacencyCfg::default());
    assert_eq!(edges.len(), 6);
    let duals = find_dual_vertices(&edges, &pts);
    let mut corners: Vec<[usize; 3]> = duals.iter().map(|d| d.corners).collect();
    corners.sort_unstable();
    assert_eq!(corners, sorted_faces(BaseKind::Tetrahedron));
}

#[test]
fn octahedron_diagonals_pass_the_ratio_test() {
    // Opposite vertices sit √2 edge lengths apart (< 1.5): the heuristic adds
    // the 3 diagonals. A tighter ratio recovers the 12 true edges.
    let pts = get_poly(BaseKind::Octahedron).vertices;
    assert_eq!(find_adjacent_edges(&pts, AdjacencyCfg::default()).len(), 15);
    let tight = AdjacencyCfg { ratio: 1.2 };
    let edges = find_adjacent_edges(&pts, tight);
    assert_eq!(edges.len(), 12);
    assert_eq!(find_dual_vertices(&edges, &pts).len(), 8);
}

#[test]
fn geodesic_spheres_recover_their_triangulation() {
    // (class pattern, repeats, points, edges, triangles) for icosahedral spheres
    for (pattern, repeats, v, e, f) in [
        ("1", 2, 42, 120, 80),
        ("1", 3, 92, 270, 180),
        ("2", 1, 32, 90, 60),
        ("2,1", 1, 72, 210, 140),
    ] {
        let cfg = GeodesicCfg::from_args("i", pattern, repeats, false, false).unwrap();
        let set = generate_points(&cfg).unwrap();
        assert_eq!(set.len(), v);
        let edges = find_adjacent_edges(&set.points, AdjacencyCfg::default());
        assert_eq!(edges.len(), e, "{pattern} x{repeats}");
        assert_eq!(find_dual_vertices(&edges, &set.points).len(), f);
    }
}

#[test]
fn dual_of_icosahedron_is_a_dodecahedron() {
    let g = dual_graph(&ico_vertices(), AdjacencyCfg::default());
    assert_eq!(g.vertices.len(), 20);
    assert_eq!(g.edges.len(), 30);
    // every dodecahedron vertex has degree 3
    let mut degree = vec![0usize; g.vertices.len()];
    for e in &g.edges {
        degree[e.a] += 1;
        degree[e.b] += 1;
    }
    assert!(degree.iter().all(|&d| d == 3));
    assert_eq!(g.positions().len(), 20);
    // the dodecahedron has pentagons, not triangles
    assert!(find_dual_vertices(&g.edges, &g.positions()).is_empty());
}

#[test]
fn adjacency_is_rigid_motion_invariant() {
    let mut rng = StdRng::seed_from_u64(7);
    let base = ico_vertices();
    for _ in 0..5 {
        let axis = Vector3::new(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
        );
        let rot = Rotation3::new(axis * rng.gen_range(0.1..3.0));
        let spin = rng.gen_range(0.0..std::f64::consts::TAU);
        let shift = vec3(rng.gen_range(-5.0..5.0), 0.0, rng.gen_range(-5.0..5.0));
        let moved: Vec<Vec3> = base
            .iter()
            .map(|p| rot_z(&(rot * p), spin) + shift)
            .collect();
        let edges = find_adjacent_edges(&moved, AdjacencyCfg::default());
        assert_eq!(edges.len(), 30);
        assert_eq!(find_dual_vertices(&edges, &moved).len(), 20);
    }
}

#[test]
fn degenerate_clouds() {
    assert!(find_adjacent_edges(&[], AdjacencyCfg::default()).is_empty());
    let one = [vec3(1.0, 2.0, 3.0)];
    assert_eq!(nearest_neighbor_distances(&one), vec![f64::INFINITY]);
    assert!(find_adjacent_edges(&one, AdjacencyCfg::default()).is_empty());
    let two = [vec3(0.0, 0.0, 0.0), vec3(0.0, 0.0, 2.0)];
    let edges = find_adjacent_edges(&two, AdjacencyCfg::default());
    assert_eq!(edges.len(), 1);
    assert!((edges[0].length - 2.0).abs() < 1e-15);
    assert!(edges[0].contains(1) && !edges[0].contains(2));
    assert_eq!(edges[0].endpoints(&two), (two[0], two[1]));
}
