use gridfinder_core::Pos;

use crate::config::{SearchConfig, Variant};
use crate::error::SearchError;
use crate::frontier::{FifoFrontier, Frontier};
use crate::grid::Grid;
use crate::trace::Trace;

/// Resumable state of a breadth-first run.
///
/// Nodes are marked visited when enqueued, not when dequeued, so no node
/// enters the queue twice and the first path found is a shortest one.
#[derive(Debug)]
pub(crate) struct BfsRun {
    finish: Pos,
    queue: FifoFrontier,
    peak: usize,
    found: bool,
    finished: bool,
}

impl BfsRun {
    pub(crate) fn new(grid: &mut Grid, start: Pos, finish: Pos) -> Self {
        let node = grid.at_mut(start);
        node.distance = 0;
        node.is_visited = true;

        let mut queue = FifoFrontier::new();
        queue.push(start);
        Self {
            finish,
            queue,
            peak: 1,
            found: false,
            finished: false,
        }
    }

    pub(crate) fn step(&mut self, grid: &mut Grid) -> Option<Pos> {
        if self.finished {
            return None;
        }
        let Some(cur) = self.queue.pop() else {
            self.finished = true;
            return None;
        };
        if cur == self.finish {
            self.found = true;
            self.finished = true;
            return Some(cur);
        }

        let node = grid.at_mut(cur);
        node.was_processed = true;
        let next = node.distance + 1;

        for np in cur.neighbors_4() {
            if !grid.contains(np) {
                continue;
            }
            let n = grid.at_mut(np);
            if n.is_wall || n.is_visited {
                continue;
            }
            n.is_visited = true;
            n.previous = Some(cur);
            n.distance = next;
            n.total_distance = f64::from(next);
            self.queue.push(np);
        }

        self.peak = self.peak.max(self.queue.len());
        Some(cur)
    }

    pub(crate) fn peak_frontier_size(&self) -> usize {
        self.peak
    }

    pub(crate) fn found(&self) -> bool {
        self.found
    }
}

impl Grid {
    /// Breadth-first search from `start` to `finish`.
    ///
    /// Every edge costs 1, so the reconstructed path is a shortest one.
    pub fn bfs(&mut self, start: Pos, finish: Pos) -> Result<Trace, SearchError> {
        self.search(Variant::Bfs, start, finish, &SearchConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_five_by_five() {
        let mut g = Grid::new(5, 5).unwrap();
        let trace = g.bfs(Pos::new(0, 0), Pos::new(4, 4)).unwrap();
        assert!(trace.found());
        assert!(trace.len() <= 25);
        assert_eq!(trace.visited().last(), Some(&Pos::new(4, 4)));
        assert_eq!(g.path(Pos::new(4, 4)).len(), 9);
        assert_eq!(g.node(Pos::new(4, 4)).unwrap().distance(), 8);
    }

    #[test]
    fn trace_is_in_layer_order() {
        let mut g = Grid::new(6, 6).unwrap();
        let trace = g.bfs(Pos::new(2, 2), Pos::new(5, 5)).unwrap();
        let depths: Vec<i32> = trace
            .iter()
            .map(|&p| g.node(p).unwrap().distance())
            .collect();
        assert!(depths.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn nodes_enter_the_queue_once() {
        let mut g = Grid::new(8, 8).unwrap();
        let trace = g.bfs(Pos::new(0, 0), Pos::new(7, 7)).unwrap();
        let mut seen = trace.visited().to_vec();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), trace.len());
    }

    #[test]
    fn walls_force_a_detour() {
        let mut g = Grid::parse(
            "
            S.#..
            .##.#
            ....F",
        )
        .unwrap();
        let (s, f) = (g.start().unwrap(), g.finish().unwrap());
        let trace = g.bfs(s, f).unwrap();
        assert!(trace.found());
        assert_eq!(g.path(f).len(), 7);
    }
}
