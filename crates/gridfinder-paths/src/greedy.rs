use gridfinder_core::Pos;

use crate::config::{SearchConfig, Variant};
use crate::error::SearchError;
use crate::grid::Grid;
use crate::trace::Trace;

impl Grid {
    /// Greedy best-first search: nodes are ranked by
    /// `weight × metric(node, finish)` alone.
    ///
    /// `distance` is still tracked and gates relaxation, but it plays no
    /// part in the ranking, so the path found is not necessarily shortest.
    pub fn greedy_best_first(
        &mut self,
        start: Pos,
        finish: Pos,
        config: &SearchConfig,
    ) -> Result<Trace, SearchError> {
        self.search(Variant::GreedyBestFirst, start, finish, config)
    }
}
