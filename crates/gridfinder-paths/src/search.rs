//! Variant dispatch and step-wise iteration over a running search.

use gridfinder_core::Pos;

use crate::best_first::{BestFirstRun, Ranking};
use crate::bfs::BfsRun;
use crate::config::{SearchConfig, Variant};
use crate::dfs::DfsRun;
use crate::error::SearchError;
use crate::grid::Grid;
use crate::trace::Trace;

#[derive(Debug)]
enum Run {
    BestFirst(BestFirstRun),
    Bfs(BfsRun),
    Dfs(DfsRun),
}

impl Run {
    fn step(&mut self, grid: &mut Grid) -> Option<Pos> {
        match self {
            Run::BestFirst(r) => r.step(grid),
            Run::Bfs(r) => r.step(grid),
            Run::Dfs(r) => r.step(grid),
        }
    }

    fn peak_frontier_size(&self) -> usize {
        match self {
            Run::BestFirst(r) => r.peak_frontier_size(),
            Run::Bfs(r) => r.peak_frontier_size(),
            Run::Dfs(r) => r.peak_frontier_size(),
        }
    }

    fn found(&self) -> bool {
        match self {
            Run::BestFirst(r) => r.found(),
            Run::Bfs(r) => r.found(),
            Run::Dfs(r) => r.found(),
        }
    }
}

/// A search in progress, yielding one finalized position per `next()`.
///
/// The iterator holds the grid mutably, so nothing else can touch the grid
/// while the search is alive. Each item is produced after the node has been
/// finalized and its neighbours relaxed, never half-way through.
///
/// Dropping the iterator early leaves partial node state behind; the grid
/// must be [`reset`](Grid::reset) before it is searched again. A run can
/// only be restarted from scratch.
#[derive(Debug)]
pub struct SearchSteps<'g> {
    grid: &'g mut Grid,
    run: Run,
    variant: Variant,
    visited: Vec<Pos>,
    done: bool,
}

impl<'g> SearchSteps<'g> {
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Read-only view of the grid as the search has left it so far.
    pub fn grid(&self) -> &Grid {
        self.grid
    }

    /// Positions yielded so far.
    pub fn visited(&self) -> &[Pos] {
        &self.visited
    }

    pub fn peak_frontier_size(&self) -> usize {
        self.run.peak_frontier_size()
    }

    /// Whether the finish has been reached.
    pub fn found(&self) -> bool {
        self.run.found()
    }

    /// Whether the search has terminated.
    pub fn is_finished(&self) -> bool {
        self.done
    }

    /// Run the search to completion and collect its trace.
    pub fn into_trace(mut self) -> Trace {
        while self.next().is_some() {}
        Trace {
            peak_frontier_size: self.run.peak_frontier_size(),
            found: self.run.found(),
            visited: self.visited,
        }
    }
}

impl Iterator for SearchSteps<'_> {
    type Item = Pos;

    fn next(&mut self) -> Option<Pos> {
        if self.done {
            return None;
        }
        match self.run.step(self.grid) {
            Some(p) => {
                self.visited.push(p);
                Some(p)
            }
            None => {
                self.done = true;
                log::debug!(
                    "{}: visited {} nodes, peak frontier {}, found {}",
                    self.variant,
                    self.visited.len(),
                    self.run.peak_frontier_size(),
                    self.run.found()
                );
                None
            }
        }
    }
}

impl std::iter::FusedIterator for SearchSteps<'_> {}

impl Grid {
    /// Run `variant` from `start` to `finish` to completion.
    ///
    /// The request is rejected without touching the grid if the endpoints
    /// coincide, lie outside the grid or on a wall, if the heuristic weight
    /// is invalid (for variants that use it), or if the grid has not been
    /// reset since its last search. An unreachable finish is not an error:
    /// the returned trace simply has `found() == false`.
    pub fn search(
        &mut self,
        variant: Variant,
        start: Pos,
        finish: Pos,
        config: &SearchConfig,
    ) -> Result<Trace, SearchError> {
        Ok(self.steps(variant, start, finish, config)?.into_trace())
    }

    /// Start `variant` without running it; see [`SearchSteps`].
    pub fn steps(
        &mut self,
        variant: Variant,
        start: Pos,
        finish: Pos,
        config: &SearchConfig,
    ) -> Result<SearchSteps<'_>, SearchError> {
        let ranking = match variant {
            Variant::AStar => Ranking::CostPlusEstimate(config.heuristic()?),
            Variant::GreedyBestFirst => Ranking::Estimate(config.heuristic()?),
            Variant::Dijkstra | Variant::Bfs | Variant::Dfs => Ranking::Cost,
        };
        self.begin_run(start, finish)?;

        let run = match variant {
            Variant::Bfs => Run::Bfs(BfsRun::new(self, start, finish)),
            Variant::Dfs => Run::Dfs(DfsRun::new(self, start, finish)),
            Variant::Dijkstra | Variant::AStar | Variant::GreedyBestFirst => {
                Run::BestFirst(BestFirstRun::new(self, start, finish, ranking))
            }
        };
        Ok(SearchSteps {
            grid: self,
            run,
            variant,
            visited: Vec::new(),
            done: false,
        })
    }
}
