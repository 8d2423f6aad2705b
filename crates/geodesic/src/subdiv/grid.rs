use super::types::LatticePoint;

/// Lattice points of one face for pattern `(m, n)` at frequency `freq`.
///
/// Enumerates `0 ≤ i, j < 2·freq/(m+n)`, maps each to
/// `(x, y) = (−n·i + (m+n)·j, (m+n)·i − m·j)` and keeps the admissible ones
/// (`x ≥ 0`, `y ≥ 0`, `x + y ≤ freq`). Order is `i` outer, `j` inner.
///
/// For Class I `(1,0)` this is the plain triangular row grid; for Class III
/// it is the rotated sub-lattice.
pub fn make_grid(freq: usize, m: u32, n: u32) -> Vec<LatticePoint> {
    let (m, n, f) = (m as i64, n as i64, freq as i64);
    let mn = m + n;
    if mn == 0 {
        return Vec::new();
    }
    let rng = (2 * f) / mn;
    let mut grid = Vec::new();
    for i in 0..rng {
        for j in 0..rng {
            let x = -n * i + mn * j;
            let y = mn * i - m * j;
            if x >= 0 && y >= 0 && x + y <= f {
                grid.push(LatticePoint { i, j, x, y });
            }
        }
    }
    grid
}
