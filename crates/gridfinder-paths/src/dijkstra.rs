use gridfinder_core::Pos;

use crate::config::{SearchConfig, Variant};
use crate::error::SearchError;
use crate::grid::Grid;
use crate::trace::Trace;

impl Grid {
    /// Uniform-cost search from `start` to `finish`.
    ///
    /// The frontier is keyed by accumulated distance. Improved neighbours
    /// are pushed again rather than decreased in place; stale entries are
    /// skipped when popped.
    pub fn dijkstra(&mut self, start: Pos, finish: Pos) -> Result<Trace, SearchError> {
        self.search(Variant::Dijkstra, start, finish, &SearchConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{path_len, scattered};

    #[test]
    fn open_five_by_five() {
        let mut g = Grid::new(5, 5).unwrap();
        let f = Pos::new(4, 4);
        let trace = g.dijkstra(Pos::new(0, 0), f).unwrap();
        assert!(trace.found());
        assert!(trace.len() <= 25);
        assert_eq!(g.path(f).len(), 9);
        assert!(trace.peak_frontier_size() >= 1);
    }

    #[test]
    fn pops_in_non_decreasing_distance() {
        let mut g = scattered(12, 12, 0.2, 3);
        let (s, f) = (g.start().unwrap(), g.finish().unwrap());
        let trace = g.dijkstra(s, f).unwrap();
        let d: Vec<i32> = trace.iter().map(|&p| g.node(p).unwrap().distance()).collect();
        assert!(d.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn agrees_with_bfs_on_walled_grids() {
        let cfg = SearchConfig::default();
        for seed in 0..40 {
            let g = scattered(15, 20, 0.3, seed);
            let bfs = path_len(&g, Variant::Bfs, &cfg);
            let dijkstra = path_len(&g, Variant::Dijkstra, &cfg);
            assert_eq!(bfs, dijkstra, "seed {seed}");
        }
    }

    #[test]
    fn path_length_is_the_grid_distance() {
        let mut g = Grid::parse(
            "
            S....
            ####.
            .....
            .####
            ....F",
        )
        .unwrap();
        let (s, f) = (g.start().unwrap(), g.finish().unwrap());
        g.dijkstra(s, f).unwrap();
        assert_eq!(g.node(f).unwrap().distance(), 16);
        assert_eq!(g.path_length(f), 17);
    }

    #[test]
    fn unreachable_finish_exhausts_the_frontier() {
        let mut g = Grid::parse(
            "
            S...
            ####
            ...F",
        )
        .unwrap();
        let (s, f) = (g.start().unwrap(), g.finish().unwrap());
        let trace = g.dijkstra(s, f).unwrap();
        assert!(!trace.found());
        assert_eq!(trace.len(), 4);
        assert!(g.path(f).is_empty());
    }
}
