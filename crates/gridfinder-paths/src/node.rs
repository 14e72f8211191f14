use gridfinder_core::Pos;

/// Sentinel distance meaning "not yet relaxed".
pub const UNREACHABLE: i32 = i32::MAX;

/// Which end of a bidirectional search discovered a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Start,
    Finish,
}

impl Side {
    /// The other side.
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Side::Start => Side::Finish,
            Side::Finish => Side::Start,
        }
    }
}

/// One cell of a [`Grid`](crate::Grid) together with its search metadata.
///
/// The structural flags (`wall`, `start`, `finish`) survive a
/// [`reset`](crate::Grid::reset); everything else is per-run state that
/// only the running search writes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub(crate) pos: Pos,
    pub(crate) is_wall: bool,
    pub(crate) is_start: bool,
    pub(crate) is_finish: bool,
    pub(crate) distance: i32,
    pub(crate) total_distance: f64,
    pub(crate) is_visited: bool,
    pub(crate) was_processed: bool,
    pub(crate) previous: Option<Pos>,
    pub(crate) visited_from: Option<Side>,
    pub(crate) is_intersection: bool,
}

impl Node {
    pub(crate) fn new(pos: Pos) -> Self {
        Self {
            pos,
            is_wall: false,
            is_start: false,
            is_finish: false,
            distance: UNREACHABLE,
            total_distance: f64::INFINITY,
            is_visited: false,
            was_processed: false,
            previous: None,
            visited_from: None,
            is_intersection: false,
        }
    }

    /// Clear per-run state, keeping wall/start/finish.
    pub(crate) fn reset(&mut self) {
        self.distance = UNREACHABLE;
        self.total_distance = f64::INFINITY;
        self.is_visited = false;
        self.was_processed = false;
        self.previous = None;
        self.visited_from = None;
        self.is_intersection = false;
    }

    pub fn pos(&self) -> Pos {
        self.pos
    }

    pub fn is_wall(&self) -> bool {
        self.is_wall
    }

    pub fn is_start(&self) -> bool {
        self.is_start
    }

    pub fn is_finish(&self) -> bool {
        self.is_finish
    }

    /// Accumulated cost from the source that reached this node, or
    /// [`UNREACHABLE`].
    pub fn distance(&self) -> i32 {
        self.distance
    }

    /// The priority key the last relaxation assigned (`+∞` if none).
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Whether the node has been finalized (or, for BFS, enqueued).
    pub fn is_visited(&self) -> bool {
        self.is_visited
    }

    /// Whether the node's neighbours have been expanded.
    pub fn was_processed(&self) -> bool {
        self.was_processed
    }

    /// Predecessor on the best known path.
    pub fn previous(&self) -> Option<Pos> {
        self.previous
    }

    pub fn visited_from(&self) -> Option<Side> {
        self.visited_from
    }

    /// Whether two bidirectional frontiers met here.
    pub fn is_intersection(&self) -> bool {
        self.is_intersection
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_keeps_structural_flags() {
        let mut n = Node::new(Pos::new(1, 2));
        n.is_wall = true;
        n.is_start = true;
        n.distance = 4;
        n.total_distance = 6.5;
        n.is_visited = true;
        n.was_processed = true;
        n.previous = Some(Pos::new(1, 1));
        n.visited_from = Some(Side::Finish);
        n.is_intersection = true;

        n.reset();
        let mut expected = Node::new(Pos::new(1, 2));
        expected.is_wall = true;
        expected.is_start = true;
        assert_eq!(n, expected);
    }

    #[test]
    fn opposite_side() {
        assert_eq!(Side::Start.opposite(), Side::Finish);
        assert_eq!(Side::Finish.opposite(), Side::Start);
    }
}
