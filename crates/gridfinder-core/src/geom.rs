//! Geometry primitives: [`Pos`] and [`Rect`].

use std::fmt;

// ---------------------------------------------------------------------------
// Pos
// ---------------------------------------------------------------------------

/// A grid position. Rows grow down, columns grow right.
///
/// Coordinates are signed so that neighbour arithmetic never underflows;
/// bounds checking is left to the owner of the grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

impl Pos {
    /// Create a new position.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The four orthogonal neighbours in the order up, right, down, left.
    #[inline]
    pub const fn neighbors_4(self) -> [Pos; 4] {
        [
            Self::new(self.row - 1, self.col),
            Self::new(self.row, self.col + 1),
            Self::new(self.row + 1, self.col),
            Self::new(self.row, self.col - 1),
        ]
    }

    /// Whether `other` is one orthogonal step away.
    #[inline]
    pub fn is_adjacent(self, other: Pos) -> bool {
        self.manhattan(other) == 1
    }

    /// L1 distance.
    #[inline]
    pub fn manhattan(self, other: Pos) -> i32 {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }

    /// L2 distance.
    #[inline]
    pub fn euclidean(self, other: Pos) -> f64 {
        let dr = f64::from(self.row - other.row);
        let dc = f64::from(self.col - other.col);
        (dr * dr + dc * dc).sqrt()
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    /// Row-major ordering.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Pos {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

// ---------------------------------------------------------------------------
// Rect
// ---------------------------------------------------------------------------

/// A half-open rectangle \[min, max). `min` is inclusive, `max` is exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub min: Pos,
    pub max: Pos,
}

impl Rect {
    /// Create a rectangle from two corners, canonicalized so that
    /// `min` ≤ `max` on each axis.
    #[inline]
    pub fn new(row0: i32, col0: i32, row1: i32, col1: i32) -> Self {
        Self {
            min: Pos::new(row0.min(row1), col0.min(col1)),
            max: Pos::new(row0.max(row1), col0.max(col1)),
        }
    }

    /// Rectangle anchored at the origin with the given dimensions.
    #[inline]
    pub fn with_size(rows: i32, cols: i32) -> Self {
        Self::new(0, 0, rows, cols)
    }

    /// Number of rows.
    #[inline]
    pub fn rows(self) -> i32 {
        self.max.row - self.min.row
    }

    /// Number of columns.
    #[inline]
    pub fn cols(self) -> i32 {
        self.max.col - self.min.col
    }

    /// Total number of cells.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.rows() as usize) * (self.cols() as usize)
    }

    /// Whether the rectangle has zero area.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.row >= self.max.row || self.min.col >= self.max.col
    }

    /// Whether `p` lies inside the half-open rectangle.
    #[inline]
    pub fn contains(self, p: Pos) -> bool {
        p.row >= self.min.row && p.row < self.max.row && p.col >= self.min.col && p.col < self.max.col
    }

    /// Intersection of two rectangles; the zero rectangle if they do not
    /// overlap.
    #[inline]
    pub fn intersect(self, other: Rect) -> Self {
        let r = Self {
            min: Pos::new(self.min.row.max(other.min.row), self.min.col.max(other.min.col)),
            max: Pos::new(self.max.row.min(other.max.row), self.max.col.min(other.max.col)),
        };
        if r.is_empty() { Self::default() } else { r }
    }

    /// The single row `row` (absolute) of this rectangle, or empty.
    #[inline]
    pub fn row(self, row: i32) -> Self {
        self.intersect(Self::new(row, self.min.col, row + 1, self.max.col))
    }

    /// The single column `col` (absolute) of this rectangle, or empty.
    #[inline]
    pub fn column(self, col: i32) -> Self {
        self.intersect(Self::new(self.min.row, col, self.max.row, col + 1))
    }

    /// Row-major iterator over every position in the rectangle.
    #[inline]
    pub fn iter(self) -> RectIter {
        RectIter {
            rect: self,
            cur: self.min,
        }
    }
}

impl IntoIterator for Rect {
    type Item = Pos;
    type IntoIter = RectIter;
    #[inline]
    fn into_iter(self) -> RectIter {
        self.iter()
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{})", self.min, self.max)
    }
}

// ---------------------------------------------------------------------------
// RectIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the positions in a [`Rect`].
#[derive(Clone, Debug)]
pub struct RectIter {
    rect: Rect,
    cur: Pos,
}

impl Iterator for RectIter {
    type Item = Pos;

    #[inline]
    fn next(&mut self) -> Option<Pos> {
        if self.cur.row >= self.rect.max.row || self.rect.is_empty() {
            return None;
        }
        let p = self.cur;
        self.cur.col += 1;
        if self.cur.col >= self.rect.max.col {
            self.cur.col = self.rect.min.col;
            self.cur.row += 1;
        }
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.rect.is_empty() || self.cur.row >= self.rect.max.row {
            return (0, Some(0));
        }
        let w = self.rect.cols() as usize;
        let remaining_in_row = (self.rect.max.col - self.cur.col) as usize;
        let remaining_rows = (self.rect.max.row - self.cur.row - 1) as usize;
        let total = remaining_in_row + remaining_rows * w;
        (total, Some(total))
    }
}

impl ExactSizeIterator for RectIter {}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn pos_serializes_as_row_col() {
        let json = serde_json::to_string(&Pos::new(3, 7)).unwrap();
        assert_eq!(json, r#"{"row":3,"col":7}"#);
        let back: Pos = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Pos::new(3, 7));
    }
}
