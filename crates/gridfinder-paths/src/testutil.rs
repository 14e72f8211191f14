//! Fixtures shared by the algorithm tests.

use gridfinder_core::Pos;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

use crate::config::{SearchConfig, Variant};
use crate::grid::Grid;

/// A `rows × cols` grid with walls scattered at `density`, start in the
/// top-left corner and finish in the bottom-right one.
pub(crate) fn scattered(rows: i32, cols: i32, density: f64, seed: u64) -> Grid {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut g = Grid::new(rows, cols).unwrap();
    g.set_start(Pos::new(0, 0)).unwrap();
    g.set_finish(Pos::new(rows - 1, cols - 1)).unwrap();
    for p in g.bounds() {
        if rng.random_bool(density) {
            g.set_wall(p, true);
        }
    }
    g
}

/// Run `variant` between the grid's endpoints on a fresh copy of the grid
/// and return the number of nodes on the reconstructed path (0 if none).
pub(crate) fn path_len(grid: &Grid, variant: Variant, config: &SearchConfig) -> usize {
    let mut g = grid.clone();
    g.reset();
    let (s, f) = (g.start().unwrap(), g.finish().unwrap());
    g.search(variant, s, f, config).unwrap();
    g.path(f).len()
}
