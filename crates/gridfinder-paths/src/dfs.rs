use gridfinder_core::Pos;

use crate::config::{SearchConfig, Variant};
use crate::error::SearchError;
use crate::frontier::{Frontier, StackFrontier};
use crate::grid::Grid;
use crate::node::UNREACHABLE;
use crate::trace::Trace;

/// Resumable state of a depth-first run.
///
/// A node's `previous` link is fixed the first time it is discovered, so
/// the link chain is acyclic even though the stack may hold duplicates.
#[derive(Debug)]
pub(crate) struct DfsRun {
    finish: Pos,
    stack: StackFrontier,
    peak: usize,
    found: bool,
    finished: bool,
}

impl DfsRun {
    pub(crate) fn new(grid: &mut Grid, start: Pos, finish: Pos) -> Self {
        grid.at_mut(start).distance = 0;
        let mut stack = StackFrontier::new();
        stack.push(start);
        Self {
            finish,
            stack,
            peak: 1,
            found: false,
            finished: false,
        }
    }

    pub(crate) fn step(&mut self, grid: &mut Grid) -> Option<Pos> {
        if self.finished {
            return None;
        }

        while let Some(cur) = self.stack.pop() {
            let node = grid.at_mut(cur);
            if node.is_visited {
                continue;
            }
            node.is_visited = true;
            if cur == self.finish {
                self.found = true;
                self.finished = true;
                return Some(cur);
            }
            node.was_processed = true;
            let next = node.distance + 1;

            // Pushed in reverse so the first neighbour (up) is explored first.
            for np in cur.neighbors_4().into_iter().rev() {
                if !grid.contains(np) {
                    continue;
                }
                let n = grid.at_mut(np);
                if n.is_wall || n.is_visited {
                    continue;
                }
                if n.distance == UNREACHABLE {
                    n.distance = next;
                    n.total_distance = f64::from(next);
                    n.previous = Some(cur);
                }
                self.stack.push(np);
            }

            self.peak = self.peak.max(self.stack.len());
            return Some(cur);
        }

        self.finished = true;
        None
    }

    pub(crate) fn peak_frontier_size(&self) -> usize {
        self.peak
    }

    pub(crate) fn found(&self) -> bool {
        self.found
    }
}

impl Grid {
    /// Depth-first search from `start` to `finish`.
    ///
    /// Finds some path if one exists; it is usually not a shortest one.
    pub fn dfs(&mut self, start: Pos, finish: Pos) -> Result<Trace, SearchError> {
        self.search(Variant::Dfs, start, finish, &SearchConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_valid_path(g: &Grid, start: Pos, finish: Pos) {
        let path = g.path(finish);
        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(&finish));
        assert!(path.windows(2).all(|w| w[0].is_adjacent(w[1])));
        let unique: HashSet<_> = path.iter().collect();
        assert_eq!(unique.len(), path.len());
        assert!(path.iter().all(|&p| !g.is_wall(p)));
    }

    #[test]
    fn finds_a_connected_acyclic_path() {
        let mut g = Grid::new(7, 9).unwrap();
        let (s, f) = (Pos::new(3, 1), Pos::new(0, 8));
        let trace = g.dfs(s, f).unwrap();
        assert!(trace.found());
        assert_valid_path(&g, s, f);
    }

    #[test]
    fn threads_a_maze() {
        let mut g = Grid::parse(
            "
            S.#......
            #.#.####.
            #...#..#.
            ###.#.##.
            ....#...F",
        )
        .unwrap();
        let (s, f) = (g.start().unwrap(), g.finish().unwrap());
        let trace = g.dfs(s, f).unwrap();
        assert!(trace.found());
        assert_valid_path(&g, s, f);
        assert!(g.is_path_valid(f));
    }

    #[test]
    fn each_node_is_finalized_once() {
        let mut g = Grid::new(6, 6).unwrap();
        let trace = g.dfs(Pos::new(0, 0), Pos::new(5, 5)).unwrap();
        let unique: HashSet<_> = trace.iter().collect();
        assert_eq!(unique.len(), trace.len());
    }

    #[test]
    fn dives_before_widening() {
        // Up is explored first, then right: from the bottom-left corner the
        // search runs straight up the first column.
        let mut g = Grid::new(4, 4).unwrap();
        let trace = g.dfs(Pos::new(3, 0), Pos::new(3, 3)).unwrap();
        assert_eq!(
            &trace.visited()[..4],
            &[Pos::new(3, 0), Pos::new(2, 0), Pos::new(1, 0), Pos::new(0, 0)]
        );
    }
}
