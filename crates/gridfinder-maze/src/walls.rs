//! Wall generators.
//!
//! Every generator takes the grid rectangle and the two endpoints, never
//! places a wall on an endpoint and returns the wall positions sorted
//! row-major without duplicates. Generators do not check reachability;
//! see [`generate_map`](crate::generate_map) for that.

use std::fmt;
use std::str::FromStr;

use gridfinder_core::{Pos, Rect};
use gridfinder_paths::Grid;
use rand::{Rng, RngExt};

/// Probability of a cell becoming a wall in [`WallKind::Random`] maps.
pub const RANDOM_DENSITY: f64 = 0.3;

/// The families of wall layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum WallKind {
    /// Independent walls with probability [`RANDOM_DENSITY`].
    Random,
    /// A wall on every odd row, each with one gap.
    Horizontal,
    /// A wall on every odd column, each with one gap.
    Vertical,
    /// Border walls, then chambers split recursively.
    RecursiveDivision,
}

impl WallKind {
    pub const ALL: [WallKind; 4] = [
        WallKind::Random,
        WallKind::Horizontal,
        WallKind::Vertical,
        WallKind::RecursiveDivision,
    ];

    pub fn name(self) -> &'static str {
        match self {
            WallKind::Random => "random",
            WallKind::Horizontal => "horizontal",
            WallKind::Vertical => "vertical",
            WallKind::RecursiveDivision => "recursive",
        }
    }
}

impl fmt::Display for WallKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown wall kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownWallKind(pub String);

impl fmt::Display for UnknownWallKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown wall kind \u{201c}{}\u{201d}", self.0)
    }
}

impl std::error::Error for UnknownWallKind {}

impl FromStr for WallKind {
    type Err = UnknownWallKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['-', '_', ' '], "").as_str() {
            "random" => Ok(WallKind::Random),
            "horizontal" => Ok(WallKind::Horizontal),
            "vertical" => Ok(WallKind::Vertical),
            "recursive" | "recursivedivision" => Ok(WallKind::RecursiveDivision),
            _ => Err(UnknownWallKind(s.to_string())),
        }
    }
}

/// Generate walls of the given kind for `grid`.
pub fn generate_walls(
    kind: WallKind,
    grid: &Grid,
    start: Pos,
    finish: Pos,
    rng: &mut impl Rng,
) -> Vec<Pos> {
    let bounds = grid.bounds();
    match kind {
        WallKind::Random => random_walls(bounds, start, finish, RANDOM_DENSITY, rng),
        WallKind::Horizontal => horizontal_walls(bounds, start, finish, rng),
        WallKind::Vertical => vertical_walls(bounds, start, finish, rng),
        WallKind::RecursiveDivision => recursive_division(bounds, start, finish, rng),
    }
}

/// Each cell other than the endpoints is a wall with probability
/// `density` (clamped to `[0, 1]`).
pub fn random_walls(
    bounds: Rect,
    start: Pos,
    finish: Pos,
    density: f64,
    rng: &mut impl Rng,
) -> Vec<Pos> {
    let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
    let mut walls = Walls::new(start, finish);
    for p in bounds {
        if rng.random_bool(density) {
            walls.add(p);
        }
    }
    walls.finish()
}

/// Fill every odd row, leaving one random gap per row.
pub fn horizontal_walls(bounds: Rect, start: Pos, finish: Pos, rng: &mut impl Rng) -> Vec<Pos> {
    let mut walls = Walls::new(start, finish);
    if bounds.is_empty() {
        return walls.finish();
    }
    for row in (bounds.min.row + 1..bounds.max.row).step_by(2) {
        let gap = rng.random_range(bounds.min.col..bounds.max.col);
        walls.line(bounds.row(row), Pos::new(row, gap));
    }
    walls.finish()
}

/// Fill every odd column, leaving one random gap per column.
pub fn vertical_walls(bounds: Rect, start: Pos, finish: Pos, rng: &mut impl Rng) -> Vec<Pos> {
    let mut walls = Walls::new(start, finish);
    if bounds.is_empty() {
        return walls.finish();
    }
    for col in (bounds.min.col + 1..bounds.max.col).step_by(2) {
        let gap = rng.random_range(bounds.min.row..bounds.max.row);
        walls.line(bounds.column(col), Pos::new(gap, col));
    }
    walls.finish()
}

/// Recursive division maze.
///
/// The outer ring becomes wall. The interior chamber is then split by a
/// wall on an even line (relative to the grid origin) with a single gap on
/// an odd line, and both halves are split again until no chamber can hold
/// another wall. The longer axis is split first; ties are decided at
/// random.
pub fn recursive_division(bounds: Rect, start: Pos, finish: Pos, rng: &mut impl Rng) -> Vec<Pos> {
    let mut walls = Walls::new(start, finish);
    if bounds.is_empty() {
        return walls.finish();
    }
    let (top, bottom) = (bounds.min.row, bounds.max.row - 1);
    let (left, right) = (bounds.min.col, bounds.max.col - 1);
    for p in bounds {
        if p.row == top || p.row == bottom || p.col == left || p.col == right {
            walls.add(p);
        }
    }

    let mut chambers = vec![Rect {
        min: Pos::new(top + 1, left + 1),
        max: Pos::new(bottom, right),
    }];
    while let Some(ch) = chambers.pop() {
        if ch.is_empty() {
            continue;
        }
        let rows = split_lines(ch.min.row, ch.max.row);
        let cols = split_lines(ch.min.col, ch.max.col);
        let horizontal = match (rows > 0, cols > 0) {
            (false, false) => continue,
            (true, false) => true,
            (false, true) => false,
            (true, true) => match ch.rows().cmp(&ch.cols()) {
                std::cmp::Ordering::Greater => true,
                std::cmp::Ordering::Less => false,
                std::cmp::Ordering::Equal => rng.random_bool(0.5),
            },
        };

        if horizontal {
            let row = ch.min.row + 1 + 2 * rng.random_range(0..rows);
            let gap = ch.min.col + 2 * rng.random_range(0..gap_lines(ch.cols()));
            walls.line(ch.row(row), Pos::new(row, gap));
            chambers.push(Rect::new(ch.min.row, ch.min.col, row, ch.max.col));
            chambers.push(Rect::new(row + 1, ch.min.col, ch.max.row, ch.max.col));
        } else {
            let col = ch.min.col + 1 + 2 * rng.random_range(0..cols);
            let gap = ch.min.row + 2 * rng.random_range(0..gap_lines(ch.rows()));
            walls.line(ch.column(col), Pos::new(gap, col));
            chambers.push(Rect::new(ch.min.row, ch.min.col, ch.max.row, col));
            chambers.push(Rect::new(ch.min.row, col + 1, ch.max.row, ch.max.col));
        }
    }
    walls.finish()
}

/// Number of lines strictly inside the half-open span `[min, max)` a
/// dividing wall may occupy: `min + 1, min + 3, …` up to `max - 2`.
fn split_lines(min: i32, max: i32) -> i32 {
    let span = max - min;
    if span < 3 { 0 } else { (span - 1) / 2 }
}

/// Number of candidate gap positions `min, min + 2, …` in a span of `len`.
fn gap_lines(len: i32) -> i32 {
    (len + 1) / 2
}

/// Accumulates wall positions, skipping the endpoints.
struct Walls {
    start: Pos,
    finish: Pos,
    cells: Vec<Pos>,
}

impl Walls {
    fn new(start: Pos, finish: Pos) -> Self {
        Self {
            start,
            finish,
            cells: Vec::new(),
        }
    }

    fn add(&mut self, p: Pos) {
        if p != self.start && p != self.finish {
            self.cells.push(p);
        }
    }

    /// Wall every cell of `line` except `gap`.
    fn line(&mut self, line: Rect, gap: Pos) {
        for p in line {
            if p != gap {
                self.add(p);
            }
        }
    }

    fn finish(mut self) -> Vec<Pos> {
        self.cells.sort_unstable();
        self.cells.dedup();
        self.cells
    }
}
