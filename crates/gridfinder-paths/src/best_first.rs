//! Priority-frontier search shared by Dijkstra, A* and greedy best-first.
//!
//! The three algorithms differ only in the key a relaxed node is ranked
//! by; see [`Ranking`].

use gridfinder_core::Pos;

use crate::frontier::{Frontier, PriorityFrontier};
use crate::grid::Grid;
use crate::heuristic::Heuristic;
use crate::node::UNREACHABLE;

/// How a node is ranked in the priority frontier.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Ranking {
    /// `distance` (Dijkstra).
    Cost,
    /// `distance + h(node, finish)` (A*).
    CostPlusEstimate(Heuristic),
    /// `h(node, finish)` alone (greedy best-first).
    Estimate(Heuristic),
}

impl Ranking {
    #[inline]
    fn key(&self, distance: i32, p: Pos, goal: Pos) -> f64 {
        match self {
            Ranking::Cost => f64::from(distance),
            Ranking::CostPlusEstimate(h) => f64::from(distance) + h.estimate(p, goal),
            Ranking::Estimate(h) => h.estimate(p, goal),
        }
    }
}

/// Resumable state of one priority-frontier run.
#[derive(Debug)]
pub(crate) struct BestFirstRun {
    ranking: Ranking,
    finish: Pos,
    frontier: PriorityFrontier,
    peak: usize,
    found: bool,
    finished: bool,
}

impl BestFirstRun {
    /// Seed the frontier with `start`.
    pub(crate) fn new(grid: &mut Grid, start: Pos, finish: Pos, ranking: Ranking) -> Self {
        let key = ranking.key(0, start, finish);
        let node = grid.at_mut(start);
        node.distance = 0;
        node.total_distance = key;

        let mut frontier = PriorityFrontier::new();
        frontier.push(start, key);
        Self {
            ranking,
            finish,
            frontier,
            peak: 1,
            found: false,
            finished: false,
        }
    }

    /// Finalize the next node and expand it. Returns `None` once the finish
    /// has been returned or the frontier is exhausted.
    pub(crate) fn step(&mut self, grid: &mut Grid) -> Option<Pos> {
        if self.finished {
            return None;
        }

        while let Some(cur) = self.frontier.pop() {
            let node = grid.at(cur);
            // Skip stale duplicates.
            if node.is_visited {
                continue;
            }
            if node.distance == UNREACHABLE {
                break;
            }
            let cur_dist = node.distance;

            let node = grid.at_mut(cur);
            node.is_visited = true;
            if cur == self.finish {
                self.found = true;
                self.finished = true;
                return Some(cur);
            }
            node.was_processed = true;

            self.relax_neighbors(grid, cur, cur_dist);
            self.peak = self.peak.max(self.frontier.len());
            return Some(cur);
        }

        self.finished = true;
        None
    }

    fn relax_neighbors(&mut self, grid: &mut Grid, cur: Pos, cur_dist: i32) {
        let next = cur_dist + 1;
        for np in cur.neighbors_4() {
            if !grid.contains(np) {
                continue;
            }
            let n = grid.at_mut(np);
            if n.is_wall || n.is_visited || next >= n.distance {
                continue;
            }
            let key = self.ranking.key(next, np, self.finish);
            n.distance = next;
            n.total_distance = key;
            n.previous = Some(cur);
            self.frontier.push(np, key);
        }
    }

    pub(crate) fn peak_frontier_size(&self) -> usize {
        self.peak
    }

    pub(crate) fn found(&self) -> bool {
        self.found
    }
}
