//! Bidirectional greedy best-first search.
//!
//! Two greedy frontiers grow at once, one from each endpoint. Every node
//! is owned by the side that discovered it first (its `visited_from` tag),
//! and each side records predecessors in its own parent map, so a node
//! reached from both directions keeps both chains intact.
//!
//! The search succeeds when either
//! - the two nodes popped in the same iteration are grid-adjacent, or
//! - one side, while expanding, runs into a node owned by the other side.

use std::collections::HashMap;

use gridfinder_core::Pos;

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::frontier::{Frontier, PriorityFrontier};
use crate::grid::Grid;
use crate::heuristic::Heuristic;
use crate::node::Side;

/// Where the two frontiers met.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Meeting {
    /// The nodes popped from each side in the same iteration were
    /// neighbours.
    Adjacent { start_side: Pos, finish_side: Pos },
    /// A node owned by one side was discovered by the other.
    Node(Pos),
}

/// The outcome of a bidirectional search.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BidirectionalTrace {
    start_side: Vec<Pos>,
    finish_side: Vec<Pos>,
    peak_frontier_size: usize,
    meeting: Option<Meeting>,
    start_parents: HashMap<Pos, Pos>,
    finish_parents: HashMap<Pos, Pos>,
}

impl BidirectionalTrace {
    /// Nodes finalized by the frontier grown from the start, in order.
    pub fn start_side(&self) -> &[Pos] {
        &self.start_side
    }

    /// Nodes finalized by the frontier grown from the finish, in order.
    pub fn finish_side(&self) -> &[Pos] {
        &self.finish_side
    }

    /// Whether the frontiers met.
    pub fn found(&self) -> bool {
        self.meeting.is_some()
    }

    pub fn meeting(&self) -> Option<Meeting> {
        self.meeting
    }

    /// Largest combined size of both frontiers during the run.
    pub fn peak_frontier_size(&self) -> usize {
        self.peak_frontier_size
    }

    /// Total nodes finalized by both sides.
    pub fn nodes_visited(&self) -> usize {
        self.start_side.len() + self.finish_side.len()
    }

    /// Predecessor of `p` on the given side's chain, if any.
    pub fn parent(&self, side: Side, p: Pos) -> Option<Pos> {
        match side {
            Side::Start => self.start_parents.get(&p).copied(),
            Side::Finish => self.finish_parents.get(&p).copied(),
        }
    }

    /// The stitched start→finish path, or an empty vector when the
    /// frontiers never met.
    pub fn path(&self) -> Vec<Pos> {
        let (from_start, from_finish) = match self.meeting {
            None => return Vec::new(),
            Some(Meeting::Adjacent {
                start_side,
                finish_side,
            }) => (start_side, Some(finish_side)),
            Some(Meeting::Node(m)) => (m, self.finish_parents.get(&m).copied()),
        };
        let mut path = chain(&self.start_parents, from_start);
        path.reverse();
        if let Some(p) = from_finish {
            path.extend(chain(&self.finish_parents, p));
        }
        path
    }
}

/// Follow `parents` from `from` to the root of its side.
fn chain(parents: &HashMap<Pos, Pos>, from: Pos) -> Vec<Pos> {
    let mut out = vec![from];
    let mut cur = from;
    while let Some(&p) = parents.get(&cur) {
        if out.len() > parents.len() {
            break;
        }
        out.push(p);
        cur = p;
    }
    out
}

/// One side of the search.
#[derive(Debug)]
struct Half {
    side: Side,
    target: Pos,
    frontier: PriorityFrontier,
    visited: Vec<Pos>,
    parents: HashMap<Pos, Pos>,
}

impl Half {
    fn seed(grid: &mut Grid, side: Side, root: Pos, target: Pos, h: &Heuristic) -> Self {
        let key = h.estimate(root, target);
        let node = grid.at_mut(root);
        node.distance = 0;
        node.total_distance = key;
        node.visited_from = Some(side);

        let mut frontier = PriorityFrontier::new();
        frontier.push(root, key);
        Self {
            side,
            target,
            frontier,
            visited: Vec::new(),
            parents: HashMap::new(),
        }
    }

    /// Mark `p` visited unless it already was. Returns whether it was new.
    fn finalize(&mut self, grid: &mut Grid, p: Pos) -> bool {
        let node = grid.at_mut(p);
        if node.is_visited {
            return false;
        }
        node.is_visited = true;
        self.visited.push(p);
        true
    }

    /// Expand `cur` once. Returns the meeting node if a neighbour belongs
    /// to the other side.
    fn expand(&mut self, grid: &mut Grid, cur: Pos, h: &Heuristic) -> Option<Pos> {
        let node = grid.at_mut(cur);
        if node.was_processed {
            return None;
        }
        node.was_processed = true;
        let next = node.distance + 1;
        let other = self.side.opposite();

        for np in cur.neighbors_4() {
            if !grid.contains(np) {
                continue;
            }
            let n = grid.at_mut(np);
            if n.is_wall {
                continue;
            }
            if n.visited_from == Some(other) {
                n.is_intersection = true;
                self.parents.insert(np, cur);
                return Some(np);
            }
            if n.is_visited || next >= n.distance {
                continue;
            }
            let key = h.estimate(np, self.target);
            n.distance = next;
            n.total_distance = key;
            n.visited_from = Some(self.side);
            self.parents.insert(np, cur);
            self.frontier.push(np, key);
        }
        None
    }
}

impl Grid {
    /// Bidirectional greedy best-first search between `start` and
    /// `finish`.
    ///
    /// The start side ranks nodes by `h(node, finish)`, the finish side by
    /// `h(node, start)`. Each iteration pops one node from each frontier;
    /// a node is expanded at most once. The run fails when either frontier
    /// runs dry without the two meeting. The stitched path is valid but
    /// not necessarily shortest.
    pub fn bidirectional_greedy(
        &mut self,
        start: Pos,
        finish: Pos,
        config: &SearchConfig,
    ) -> Result<BidirectionalTrace, SearchError> {
        let h = config.heuristic()?;
        self.begin_run(start, finish)?;

        let mut from_start = Half::seed(self, Side::Start, start, finish, &h);
        let mut from_finish = Half::seed(self, Side::Finish, finish, start, &h);
        let mut peak = from_start.frontier.len() + from_finish.frontier.len();
        let meeting = self.meet(&mut from_start, &mut from_finish, &h, &mut peak);

        log::debug!(
            "bidirectional: visited {}+{} nodes, peak frontier {}, found {}",
            from_start.visited.len(),
            from_finish.visited.len(),
            peak,
            meeting.is_some()
        );
        Ok(BidirectionalTrace {
            start_side: from_start.visited,
            finish_side: from_finish.visited,
            peak_frontier_size: peak,
            meeting,
            start_parents: from_start.parents,
            finish_parents: from_finish.parents,
        })
    }

    fn meet(
        &mut self,
        from_start: &mut Half,
        from_finish: &mut Half,
        h: &Heuristic,
        peak: &mut usize,
    ) -> Option<Meeting> {
        while !from_start.frontier.is_empty() && !from_finish.frontier.is_empty() {
            let (Some(a), Some(b)) = (from_start.frontier.pop(), from_finish.frontier.pop()) else {
                break;
            };
            let fresh_a = from_start.finalize(self, a);
            let fresh_b = from_finish.finalize(self, b);
            if !fresh_a && !fresh_b {
                continue;
            }

            if a.is_adjacent(b) {
                self.at_mut(a).is_intersection = true;
                self.at_mut(b).is_intersection = true;
                log::trace!("frontiers met between {a} and {b}");
                return Some(Meeting::Adjacent {
                    start_side: a,
                    finish_side: b,
                });
            }
            for (half, cur) in [(&mut *from_start, a), (&mut *from_finish, b)] {
                if let Some(m) = half.expand(self, cur, h) {
                    log::trace!("{:?} side reached {m} owned by the other side", half.side);
                    return Some(Meeting::Node(m));
                }
            }

            *peak = (*peak).max(from_start.frontier.len() + from_finish.frontier.len());
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::heuristic::Metric;
    use crate::config::Variant;
    use crate::testutil::{path_len, scattered};

    fn assert_stitched(g: &Grid, trace: &BidirectionalTrace, s: Pos, f: Pos) {
        let path = trace.path();
        assert_eq!(path.first(), Some(&s));
        assert_eq!(path.last(), Some(&f));
        assert!(path.windows(2).all(|w| w[0].is_adjacent(w[1])), "{path:?}");
        assert!(path.iter().all(|&p| !g.is_wall(p)));
        let unique: HashSet<_> = path.iter().collect();
        assert_eq!(unique.len(), path.len());
    }

    #[test]
    fn adjacent_endpoints_meet_immediately() {
        let mut g = Grid::parse("SF").unwrap();
        let (s, f) = (Pos::new(0, 0), Pos::new(0, 1));
        let trace = g.bidirectional_greedy(s, f, &SearchConfig::default()).unwrap();
        assert_eq!(
            trace.meeting(),
            Some(Meeting::Adjacent {
                start_side: s,
                finish_side: f
            })
        );
        assert_eq!(trace.path(), vec![s, f]);
        assert_eq!(trace.nodes_visited(), 2);
        assert_eq!(trace.peak_frontier_size(), 2);
        assert!(g.node(s).unwrap().is_intersection());
        assert!(g.node(f).unwrap().is_intersection());
    }

    #[test]
    fn cross_discovery_stitches_both_chains() {
        let mut g = Grid::parse("S.F").unwrap();
        let (s, m, f) = (Pos::new(0, 0), Pos::new(0, 1), Pos::new(0, 2));
        let trace = g.bidirectional_greedy(s, f, &SearchConfig::default()).unwrap();
        assert_eq!(trace.meeting(), Some(Meeting::Node(m)));
        assert_eq!(trace.parent(Side::Start, m), Some(s));
        assert_eq!(trace.parent(Side::Finish, m), Some(f));
        assert_eq!(trace.path(), vec![s, m, f]);
        assert_eq!(trace.start_side(), &[s]);
        assert_eq!(trace.finish_side(), &[f]);
        let node = g.node(m).unwrap();
        assert!(node.is_intersection());
        assert_eq!(node.visited_from(), Some(Side::Start));
    }

    #[test]
    fn open_grid_path_is_valid() {
        for metric in Metric::ALL {
            let mut g = Grid::new(5, 5).unwrap();
            let (s, f) = (Pos::new(0, 0), Pos::new(4, 4));
            let trace = g.bidirectional_greedy(s, f, &SearchConfig::new(metric, 1.0)).unwrap();
            assert!(trace.found(), "{metric}");
            assert_stitched(&g, &trace, s, f);
            assert!(trace.nodes_visited() <= 25);
        }
    }

    #[test]
    fn found_exactly_when_a_path_exists() {
        let cfg = SearchConfig::default();
        for seed in 0..50 {
            let base = scattered(15, 20, 0.3, seed);
            let reachable = path_len(&base, Variant::Bfs, &cfg) > 0;

            let mut g = base.clone();
            let (s, f) = (g.start().unwrap(), g.finish().unwrap());
            let trace = g.bidirectional_greedy(s, f, &cfg).unwrap();
            assert_eq!(trace.found(), reachable, "seed {seed}");
            if trace.found() {
                assert_stitched(&g, &trace, s, f);
                assert!(trace.path().len() >= path_len(&base, Variant::Bfs, &cfg));
            } else {
                assert!(trace.path().is_empty());
            }
        }
    }

    #[test]
    fn separated_halves_never_meet() {
        let mut g = Grid::parse(
            "
            S....
            #####
            ....F",
        )
        .unwrap();
        let (s, f) = (g.start().unwrap(), g.finish().unwrap());
        let trace = g.bidirectional_greedy(s, f, &SearchConfig::default()).unwrap();
        assert!(!trace.found());
        assert_eq!(trace.meeting(), None);
        assert!(trace.path().is_empty());
        assert!(g.nodes().all(|n| !n.is_intersection()));
    }

    #[test]
    fn sides_never_share_a_finalized_node() {
        let mut g = Grid::new(25, 50).unwrap();
        let (s, f) = (Pos::new(3, 4), Pos::new(20, 45));
        let trace = g.bidirectional_greedy(s, f, &SearchConfig::default()).unwrap();
        assert!(trace.found());
        let a: HashSet<_> = trace.start_side().iter().collect();
        assert!(trace.finish_side().iter().all(|p| !a.contains(p)));
        assert!(trace.peak_frontier_size() >= 2);
        assert_stitched(&g, &trace, s, f);
    }

    #[test]
    fn rejects_bad_requests_without_mutation() {
        let mut g = Grid::new(3, 3).unwrap();
        let p = Pos::new(1, 1);
        let cfg = SearchConfig::default();
        assert_eq!(g.bidirectional_greedy(p, p, &cfg), Err(SearchError::SameEndpoints(p)));
        let bad = SearchConfig::new(Metric::Euclidean, f64::INFINITY);
        assert!(matches!(
            g.bidirectional_greedy(Pos::new(0, 0), p, &bad),
            Err(SearchError::InvalidWeight(_))
        ));
        assert!(!g.needs_reset());

        g.bidirectional_greedy(Pos::new(0, 0), p, &cfg).unwrap();
        assert_eq!(
            g.bidirectional_greedy(Pos::new(0, 0), p, &cfg),
            Err(SearchError::NotReset)
        );
        g.reset();
        assert!(g.nodes().all(|n| n.visited_from().is_none()));
    }
}
