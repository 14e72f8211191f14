//! The search grid: a flat arena of [`Node`]s indexed by position.

use std::fmt;

use gridfinder_core::{Pos, Rect};

use crate::error::{GridError, SearchError};
use crate::node::Node;

/// A rectangular, 4-connected grid of [`Node`]s.
///
/// Nodes are allocated once, row-major, and addressed by [`Pos`]. All
/// links between nodes (`previous`, parent maps) are positions into this
/// arena, never references.
///
/// A grid is owned exclusively by the search running on it: every search
/// borrows it mutably for its whole lifetime. After a search the grid
/// must be [`reset`](Self::reset) before the next one.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    bounds: Rect,
    width: usize,
    nodes: Vec<Node>,
    start: Option<Pos>,
    finish: Option<Pos>,
    dirty: bool,
}

impl Grid {
    /// Create an open grid (no walls, no endpoints).
    pub fn new(rows: i32, cols: i32) -> Result<Self, GridError> {
        if rows <= 0 || cols <= 0 {
            return Err(GridError::Empty);
        }
        let bounds = Rect::with_size(rows, cols);
        Ok(Self {
            bounds,
            width: cols as usize,
            nodes: bounds.iter().map(Node::new).collect(),
            start: None,
            finish: None,
            dirty: false,
        })
    }

    /// Build a grid from a text map.
    ///
    /// `.` is open, `#` is a wall, `S` marks the start and `F` the finish.
    /// Surrounding whitespace is trimmed from the whole string and from
    /// each line; every line must then have the same width.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = s.trim().lines().map(str::trim).collect();
        let expected = lines.first().map_or(0, |l| l.chars().count());
        if expected == 0 {
            return Err(GridError::Empty);
        }
        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != expected {
                return Err(GridError::InconsistentWidth { row, expected, found });
            }
        }

        let mut grid = Self::new(lines.len() as i32, expected as i32)?;
        for (row, line) in lines.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                let p = Pos::new(row as i32, col as i32);
                match ch {
                    '.' => {}
                    '#' => {
                        grid.set_wall(p, true);
                    }
                    'S' => grid.set_start(p)?,
                    'F' => grid.set_finish(p)?,
                    _ => return Err(GridError::InvalidChar { ch, pos: p }),
                }
            }
        }
        Ok(grid)
    }

    /// The rectangle covered by the grid.
    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.rows()
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.cols()
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: grids have at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn contains(&self, p: Pos) -> bool {
        self.bounds.contains(p)
    }

    /// The node at `p`, or `None` outside the grid.
    #[inline]
    pub fn node(&self, p: Pos) -> Option<&Node> {
        self.idx(p).map(|i| &self.nodes[i])
    }

    /// All nodes in row-major order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    // -----------------------------------------------------------------------
    // Structure: walls and endpoints
    // -----------------------------------------------------------------------

    /// Wall predicate. Positions outside the grid count as blocked.
    #[inline]
    pub fn is_wall(&self, p: Pos) -> bool {
        self.node(p).is_none_or(|n| n.is_wall)
    }

    /// Set or clear a wall. Returns `false` (and does nothing) when `p` is
    /// outside the grid or is the start or finish.
    pub fn set_wall(&mut self, p: Pos, wall: bool) -> bool {
        let Some(i) = self.idx(p) else {
            return false;
        };
        let n = &mut self.nodes[i];
        if n.is_start || n.is_finish {
            return false;
        }
        n.is_wall = wall;
        true
    }

    /// Turn every listed position into a wall, skipping endpoints and
    /// out-of-range positions. Returns how many walls were placed.
    pub fn apply_walls(&mut self, walls: &[Pos]) -> usize {
        walls.iter().filter(|&&p| self.set_wall(p, true)).count()
    }

    /// Remove every wall.
    pub fn clear_walls(&mut self) {
        for n in &mut self.nodes {
            n.is_wall = false;
        }
    }

    /// Positions of all walls, row-major.
    pub fn walls(&self) -> Vec<Pos> {
        self.nodes.iter().filter(|n| n.is_wall).map(|n| n.pos).collect()
    }

    /// Move the start flag to `p`. A wall at `p` is removed.
    pub fn set_start(&mut self, p: Pos) -> Result<(), GridError> {
        let i = self.idx(p).ok_or(GridError::OutOfBounds(p))?;
        if let Some(old) = self.start.take() {
            let j = self.index(old);
            self.nodes[j].is_start = false;
        }
        let n = &mut self.nodes[i];
        n.is_start = true;
        n.is_wall = false;
        self.start = Some(p);
        Ok(())
    }

    /// Move the finish flag to `p`. A wall at `p` is removed.
    pub fn set_finish(&mut self, p: Pos) -> Result<(), GridError> {
        let i = self.idx(p).ok_or(GridError::OutOfBounds(p))?;
        if let Some(old) = self.finish.take() {
            let j = self.index(old);
            self.nodes[j].is_finish = false;
        }
        let n = &mut self.nodes[i];
        n.is_finish = true;
        n.is_wall = false;
        self.finish = Some(p);
        Ok(())
    }

    #[inline]
    pub fn start(&self) -> Option<Pos> {
        self.start
    }

    #[inline]
    pub fn finish(&self) -> Option<Pos> {
        self.finish
    }

    // -----------------------------------------------------------------------
    // Neighbours
    // -----------------------------------------------------------------------

    /// In-bounds orthogonal neighbours of `p` (up, right, down, left).
    pub fn neighbors(&self, p: Pos) -> impl Iterator<Item = Pos> + use<> {
        let bounds = self.bounds;
        p.neighbors_4().into_iter().filter(move |&n| bounds.contains(n))
    }

    /// Neighbours of `p` that are not walls.
    pub fn open_neighbors(&self, p: Pos) -> impl Iterator<Item = Pos> + '_ {
        self.neighbors(p).filter(|&n| !self.nodes[self.index(n)].is_wall)
    }

    // -----------------------------------------------------------------------
    // Run lifecycle
    // -----------------------------------------------------------------------

    /// Clear all per-run node state, keeping walls and endpoints.
    ///
    /// Idempotent.
    pub fn reset(&mut self) {
        for n in &mut self.nodes {
            n.reset();
        }
        self.dirty = false;
    }

    /// Whether a search has touched the grid since the last reset.
    #[inline]
    pub fn needs_reset(&self) -> bool {
        self.dirty
    }

    /// Validate a search request and claim the grid for it.
    ///
    /// Nothing is mutated when validation fails.
    pub(crate) fn begin_run(&mut self, start: Pos, finish: Pos) -> Result<(), SearchError> {
        if start == finish {
            return Err(SearchError::SameEndpoints(start));
        }
        for p in [start, finish] {
            match self.node(p) {
                None => return Err(SearchError::OutOfBounds(p)),
                Some(n) if n.is_wall => return Err(SearchError::Blocked(p)),
                Some(_) => {}
            }
        }
        if self.dirty {
            return Err(SearchError::NotReset);
        }
        self.dirty = true;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a position to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Pos) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some(p.row as usize * self.width + p.col as usize)
    }

    /// Flat index of an in-bounds position.
    #[inline]
    pub(crate) fn index(&self, p: Pos) -> usize {
        debug_assert!(self.bounds.contains(p), "{p} outside {}", self.bounds);
        p.row as usize * self.width + p.col as usize
    }

    #[inline]
    pub(crate) fn at(&self, p: Pos) -> &Node {
        &self.nodes[self.index(p)]
    }

    #[inline]
    pub(crate) fn at_mut(&mut self, p: Pos) -> &mut Node {
        let i = self.index(p);
        &mut self.nodes[i]
    }
}

impl fmt::Display for Grid {
    /// Renders the grid in the format accepted by [`Grid::parse`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, n) in self.nodes.iter().enumerate() {
            if i > 0 && i % self.width == 0 {
                writeln!(f)?;
            }
            let ch = if n.is_start {
                'S'
            } else if n.is_finish {
                'F'
            } else if n.is_wall {
                '#'
            } else {
                '.'
            };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAP: &str = "
        S..#
        .#..
        ...F";

    #[test]
    fn parse_and_render_round_trip() {
        let g = Grid::parse(MAP).unwrap();
        assert_eq!(g.rows(), 3);
        assert_eq!(g.cols(), 4);
        assert_eq!(g.start(), Some(Pos::new(0, 0)));
        assert_eq!(g.finish(), Some(Pos::new(2, 3)));
        assert_eq!(g.walls(), vec![Pos::new(0, 3), Pos::new(1, 1)]);
        assert_eq!(g.to_string(), "S..#\n.#..\n...F");
    }

    #[test]
    fn parse_rejects_ragged_rows() {
        let err = Grid::parse("...\n..").unwrap_err();
        assert_eq!(err, GridError::InconsistentWidth { row: 1, expected: 3, found: 2 });
    }

    #[test]
    fn parse_rejects_unknown_chars() {
        let err = Grid::parse("..\n.x").unwrap_err();
        assert_eq!(err, GridError::InvalidChar { ch: 'x', pos: Pos::new(1, 1) });
    }

    #[test]
    fn empty_grids_are_rejected() {
        assert_eq!(Grid::new(0, 5).unwrap_err(), GridError::Empty);
        assert_eq!(Grid::parse("   ").unwrap_err(), GridError::Empty);
    }

    #[test]
    fn neighbors_are_bounds_checked() {
        let g = Grid::new(3, 3).unwrap();
        let corner: Vec<_> = g.neighbors(Pos::new(0, 0)).collect();
        assert_eq!(corner, vec![Pos::new(0, 1), Pos::new(1, 0)]);
        assert_eq!(g.neighbors(Pos::new(1, 1)).count(), 4);
    }

    #[test]
    fn open_neighbors_skip_walls() {
        let g = Grid::parse(MAP).unwrap();
        let n: Vec<_> = g.open_neighbors(Pos::new(0, 1)).collect();
        assert_eq!(n, vec![Pos::new(0, 2), Pos::new(0, 0)]);
    }

    #[test]
    fn walls_never_cover_endpoints() {
        let mut g = Grid::parse(MAP).unwrap();
        assert!(!g.set_wall(Pos::new(0, 0), true));
        assert!(!g.set_wall(Pos::new(9, 9), true));
        let placed = g.apply_walls(&[Pos::new(2, 3), Pos::new(2, 0), Pos::new(-1, 0)]);
        assert_eq!(placed, 1);
        assert!(g.is_wall(Pos::new(2, 0)));
        assert!(!g.is_wall(Pos::new(2, 3)));
        assert!(g.is_wall(Pos::new(-1, 0)));
    }

    #[test]
    fn moving_endpoints_clears_old_flags_and_walls() {
        let mut g = Grid::parse(MAP).unwrap();
        g.set_start(Pos::new(1, 1)).unwrap();
        assert!(!g.node(Pos::new(0, 0)).unwrap().is_start());
        let n = g.node(Pos::new(1, 1)).unwrap();
        assert!(n.is_start());
        assert!(!n.is_wall());
        assert_eq!(
            g.set_finish(Pos::new(3, 0)),
            Err(GridError::OutOfBounds(Pos::new(3, 0)))
        );
        assert_eq!(g.finish(), Some(Pos::new(2, 3)));
    }

    #[test]
    fn begin_run_validates_without_mutating() {
        let mut g = Grid::parse(MAP).unwrap();
        let s = Pos::new(0, 0);
        assert_eq!(g.begin_run(s, s), Err(SearchError::SameEndpoints(s)));
        assert_eq!(
            g.begin_run(s, Pos::new(0, 3)),
            Err(SearchError::Blocked(Pos::new(0, 3)))
        );
        assert_eq!(
            g.begin_run(s, Pos::new(5, 0)),
            Err(SearchError::OutOfBounds(Pos::new(5, 0)))
        );
        assert!(!g.needs_reset());

        g.begin_run(s, Pos::new(2, 3)).unwrap();
        assert!(g.needs_reset());
        assert_eq!(g.begin_run(s, Pos::new(2, 3)), Err(SearchError::NotReset));
        g.reset();
        assert!(g.begin_run(s, Pos::new(2, 3)).is_ok());
    }

    #[test]
    fn clear_walls_removes_everything() {
        let mut g = Grid::parse(MAP).unwrap();
        g.clear_walls();
        assert!(g.walls().is_empty());
    }
}
