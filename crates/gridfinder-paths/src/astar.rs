use gridfinder_core::Pos;

use crate::config::{SearchConfig, Variant};
use crate::error::SearchError;
use crate::grid::Grid;
use crate::trace::Trace;

impl Grid {
    /// A* search from `start` to `finish`, ranking nodes by
    /// `distance + weight × metric(node, finish)`.
    ///
    /// With Manhattan and weight 1 the first path found is a shortest one.
    /// Larger weights still give a valid path, possibly a longer one.
    pub fn astar(
        &mut self,
        start: Pos,
        finish: Pos,
        config: &SearchConfig,
    ) -> Result<Trace, SearchError> {
        self.search(Variant::AStar, start, finish, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristic::Metric;
    use crate::testutil::{path_len, scattered};

    #[test]
    fn admissible_heuristic_is_optimal() {
        let cfg = SearchConfig::new(Metric::Manhattan, 1.0);
        for seed in 0..40 {
            let g = scattered(15, 20, 0.3, seed);
            let optimal = path_len(&g, Variant::Dijkstra, &cfg);
            assert_eq!(path_len(&g, Variant::AStar, &cfg), optimal, "seed {seed}");
        }
    }

    #[test]
    fn euclidean_weight_one_is_optimal_too() {
        let cfg = SearchConfig::new(Metric::Euclidean, 1.0);
        for seed in 0..20 {
            let g = scattered(12, 18, 0.25, seed);
            let optimal = path_len(&g, Variant::Dijkstra, &cfg);
            assert_eq!(path_len(&g, Variant::AStar, &cfg), optimal, "seed {seed}");
        }
    }

    #[test]
    fn inflated_weight_never_beats_optimal() {
        for w in [1.5, 2.0, 5.0] {
            let cfg = SearchConfig::new(Metric::Manhattan, w);
            for seed in 0..30 {
                let g = scattered(15, 20, 0.3, seed);
                let optimal = path_len(&g, Variant::Dijkstra, &cfg);
                let inflated = path_len(&g, Variant::AStar, &cfg);
                assert!(inflated >= optimal, "w {w} seed {seed}");
                assert_eq!(inflated == 0, optimal == 0, "w {w} seed {seed}");
            }
        }
    }

    #[test]
    fn focuses_the_search_compared_to_dijkstra() {
        let (s, f) = (Pos::new(10, 2), Pos::new(10, 40));
        let mut a = Grid::new(21, 45).unwrap();
        let astar = a.astar(s, f, &SearchConfig::default()).unwrap();
        let mut d = Grid::new(21, 45).unwrap();
        let dijkstra = d.dijkstra(s, f).unwrap();
        assert!(astar.len() < dijkstra.len());
        assert_eq!(a.path_length(f), d.path_length(f));
    }

    #[test]
    fn total_distance_holds_the_ranking_key() {
        let mut g = Grid::new(3, 5).unwrap();
        let (s, f) = (Pos::new(1, 0), Pos::new(1, 4));
        g.astar(s, f, &SearchConfig::new(Metric::Manhattan, 2.0)).unwrap();
        let n = g.node(Pos::new(1, 1)).unwrap();
        assert_eq!(n.distance(), 1);
        assert_eq!(n.total_distance(), 1.0 + 2.0 * 3.0);
    }
}
