use gridfinder_core::Pos;

/// Start and finish placement for a benchmark map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EndpointLayout {
    pub start: Pos,
    pub finish: Pos,
}

impl EndpointLayout {
    /// Number of distinct canonical layouts.
    pub const COUNT: usize = 5;

    /// The canonical layout for map `number` (1-based) on a `rows × cols`
    /// grid:
    ///
    /// 1. centre-left to centre-right
    /// 2. upper-left to lower-right
    /// 3. lower-left to upper-right
    /// 4. centre-top to centre-bottom
    /// 5. near opposite corners
    ///
    /// Numbers outside `1..=5` use the first layout. Coordinates are
    /// fractions of the grid size, rounded down.
    pub fn for_map(number: usize, rows: i32, cols: i32) -> Self {
        let frac = |n: i32, (num, den): (i64, i64)| (i64::from(n) * num / den) as i32;
        let at = |r, c| Pos::new(frac(rows, r), frac(cols, c));
        let (start, finish) = match number {
            2 => (at((1, 4), (1, 4)), at((3, 4), (3, 4))),
            3 => (at((3, 4), (1, 5)), at((1, 5), (4, 5))),
            4 => (at((1, 5), (1, 2)), at((4, 5), (1, 2))),
            5 => (at((1, 6), (1, 6)), at((5, 6), (5, 6))),
            _ => (at((1, 2), (1, 4)), at((1, 2), (3, 4))),
        };
        Self { start, finish }
    }

    /// All canonical layouts in order.
    pub fn all(rows: i32, cols: i32) -> impl Iterator<Item = Self> {
        (1..=Self::COUNT).map(move |n| Self::for_map(n, rows, cols))
    }
}
