//! Path reconstruction from `previous` links.

use std::collections::HashSet;

use gridfinder_core::Pos;

use crate::grid::Grid;

impl Grid {
    /// Walk `previous` links back from `finish` and return the chain
    /// start-first.
    ///
    /// A single-element result for a node that is not the start means the
    /// node was never reached. The walk never exceeds the number of cells.
    pub fn reconstruct_path(&self, finish: Pos) -> Vec<Pos> {
        let mut path = Vec::new();
        let mut cur = self.node(finish).map(|n| n.pos);
        while let Some(p) = cur {
            if path.len() == self.len() {
                break;
            }
            path.push(p);
            cur = self.at(p).previous;
        }
        path.reverse();
        path
    }

    /// The start→`finish` path of the last search, or an empty vector when
    /// `finish` was not reached.
    pub fn path(&self, finish: Pos) -> Vec<Pos> {
        if !self.path_exists(finish) {
            return Vec::new();
        }
        self.reconstruct_path(finish)
    }

    /// Whether `finish` was reached: it has a predecessor or is the start.
    pub fn path_exists(&self, finish: Pos) -> bool {
        self.node(finish)
            .is_some_and(|n| n.previous.is_some() || n.is_start)
    }

    /// Number of nodes on the path to `finish`, 0 if there is none.
    pub fn path_length(&self, finish: Pos) -> usize {
        self.path(finish).len()
    }

    /// Whether the `previous` chain from `finish` is a real path: it
    /// exists, never revisits a node and only takes orthogonal steps
    /// through open cells.
    pub fn is_path_valid(&self, finish: Pos) -> bool {
        if !self.path_exists(finish) {
            return false;
        }
        let mut seen = HashSet::new();
        let mut cur = Some(finish);
        while let Some(p) = cur {
            if !seen.insert(p) || self.is_wall(p) {
                return false;
            }
            cur = self.at(p).previous;
            if let Some(prev) = cur {
                if !self.contains(prev) || !prev.is_adjacent(p) {
                    return false;
                }
            }
        }
        true
    }
}
