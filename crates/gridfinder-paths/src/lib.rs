//! Search engine for 4-connected grids with walls.
//!
//! Every edge costs 1 and there is no diagonal movement. The strategies on
//! offer are:
//!
//! - **Dijkstra** uniform-cost search ([`Grid::dijkstra`])
//! - **A\*** with a weighted heuristic ([`Grid::astar`])
//! - **BFS** unweighted shortest path ([`Grid::bfs`])
//! - **DFS** some path, quickly ([`Grid::dfs`])
//! - **Greedy best-first** heuristic-only ranking ([`Grid::greedy_best_first`])
//! - **Bidirectional greedy** two frontiers that meet in the middle
//!   ([`Grid::bidirectional_greedy`])
//!
//! A search borrows the [`Grid`] mutably, writes per-node state into it and
//! returns a [`Trace`] of finalized positions together with the peak
//! frontier size. Paths are then read back with [`Grid::path`] (or
//! [`BidirectionalTrace::path`]). The grid has to be [`reset`](Grid::reset)
//! before it is searched again.
//!
//! For step-wise consumption, [`Grid::steps`] returns an iterator that
//! yields one finalized position at a time.
//!
//! ```
//! use gridfinder_paths::{Grid, Pos};
//!
//! let mut grid = Grid::parse(
//!     "S..
//!      .#.
//!      ..F",
//! )
//! .unwrap();
//! let (start, finish) = (Pos::new(0, 0), Pos::new(2, 2));
//! let trace = grid.bfs(start, finish).unwrap();
//! assert!(trace.found());
//! assert_eq!(grid.path(finish).len(), 5);
//! ```

mod astar;
mod best_first;
mod bfs;
mod bidirectional;
mod config;
mod dfs;
mod dijkstra;
mod error;
mod frontier;
mod grid;
mod heuristic;
mod node;
mod path;
mod search;
mod trace;

#[cfg(test)]
mod testutil;

pub use bidirectional::{BidirectionalTrace, Meeting};
pub use config::{SearchConfig, UnknownVariant, Variant};
pub use error::{GridError, SearchError};
pub use frontier::{FifoFrontier, Frontier, PriorityFrontier, StackFrontier};
pub use grid::Grid;
pub use heuristic::{Heuristic, Metric, UnknownMetric, euclidean, manhattan};
pub use node::{Node, Side, UNREACHABLE};
pub use search::SearchSteps;
pub use trace::Trace;

pub use gridfinder_core::{Pos, Rect};
