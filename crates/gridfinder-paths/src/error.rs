use std::fmt;

use gridfinder_core::Pos;

/// Reasons a search request is rejected before any node is touched.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchError {
    /// Start and finish are the same cell.
    SameEndpoints(Pos),
    /// An endpoint lies outside the grid.
    OutOfBounds(Pos),
    /// An endpoint is a wall.
    Blocked(Pos),
    /// Heuristic weight is negative, NaN or infinite.
    InvalidWeight(f64),
    /// The grid still carries state from a previous run.
    NotReset,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SameEndpoints(p) => write!(f, "start and finish are both {p}"),
            Self::OutOfBounds(p) => write!(f, "endpoint {p} is outside the grid"),
            Self::Blocked(p) => write!(f, "endpoint {p} is a wall"),
            Self::InvalidWeight(w) => write!(f, "heuristic weight must be finite and >= 0, got {w}"),
            Self::NotReset => write!(f, "grid must be reset before starting another search"),
        }
    }
}

impl std::error::Error for SearchError {}

/// Errors raised while building a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Zero rows or zero columns.
    Empty,
    /// A text row has a different width from the first one.
    InconsistentWidth { row: usize, expected: usize, found: usize },
    /// A character outside the map alphabet was found.
    InvalidChar { ch: char, pos: Pos },
    /// A position outside the grid was used as an endpoint.
    OutOfBounds(Pos),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid must have at least one row and one column"),
            Self::InconsistentWidth { row, expected, found } => {
                write!(f, "row {row} has width {found}, expected {expected}")
            }
            Self::InvalidChar { ch, pos } => {
                write!(f, "invalid map character \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::OutOfBounds(p) => write!(f, "position {p} is outside the grid"),
        }
    }
}

impl std::error::Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_position() {
        let e = SearchError::Blocked(Pos::new(2, 3));
        assert_eq!(e.to_string(), "endpoint (2, 3) is a wall");
        let e = GridError::InconsistentWidth { row: 1, expected: 4, found: 3 };
        assert_eq!(e.to_string(), "row 1 has width 3, expected 4");
    }
}
