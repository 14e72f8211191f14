//! Frontier containers: priority, FIFO and LIFO.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use gridfinder_core::Pos;

/// The set of discovered but not yet finalized positions.
pub trait Frontier {
    /// Remove the next position to finalize.
    fn pop(&mut self) -> Option<Pos>;

    /// Current number of entries (duplicates included).
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Heap entry ordered so that `BinaryHeap` (a max-heap) pops the smallest
/// key first, and among equal keys the earliest push.
#[derive(Clone, Copy, Debug)]
struct Entry {
    key: f64,
    seq: u64,
    pos: Pos,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .key
            .total_cmp(&self.key)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority frontier keyed by `f64`.
///
/// Ties are broken by insertion order, so runs are deterministic. Stale
/// duplicates are not removed; searches skip them when popped.
#[derive(Debug, Default)]
pub struct PriorityFrontier {
    heap: BinaryHeap<Entry>,
    seq: u64,
}

impl PriorityFrontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, pos: Pos, key: f64) {
        self.heap.push(Entry {
            key,
            seq: self.seq,
            pos,
        });
        self.seq += 1;
    }
}

impl Frontier for PriorityFrontier {
    fn pop(&mut self) -> Option<Pos> {
        self.heap.pop().map(|e| e.pos)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

/// First-in first-out frontier.
#[derive(Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<Pos>,
}

impl FifoFrontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, pos: Pos) {
        self.queue.push_back(pos);
    }
}

impl Frontier for FifoFrontier {
    fn pop(&mut self) -> Option<Pos> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Last-in first-out frontier.
#[derive(Debug, Default)]
pub struct StackFrontier {
    stack: Vec<Pos>,
}

impl StackFrontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, pos: Pos) {
        self.stack.push(pos);
    }
}

impl Frontier for StackFrontier {
    fn pop(&mut self) -> Option<Pos> {
        self.stack.pop()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_pops_smallest_key_first() {
        let mut f = PriorityFrontier::new();
        f.push(Pos::new(0, 0), 3.0);
        f.push(Pos::new(0, 1), 1.5);
        f.push(Pos::new(0, 2), 2.0);
        assert_eq!(f.len(), 3);
        assert_eq!(f.pop(), Some(Pos::new(0, 1)));
        assert_eq!(f.pop(), Some(Pos::new(0, 2)));
        assert_eq!(f.pop(), Some(Pos::new(0, 0)));
        assert!(f.is_empty());
        assert_eq!(f.pop(), None);
    }

    #[test]
    fn priority_ties_break_by_insertion_order() {
        let mut f = PriorityFrontier::new();
        for c in 0..5 {
            f.push(Pos::new(1, c), 4.0);
        }
        let order: Vec<_> = std::iter::from_fn(|| f.pop()).collect();
        assert_eq!(order, (0..5).map(|c| Pos::new(1, c)).collect::<Vec<_>>());
    }

    #[test]
    fn infinite_keys_sort_last() {
        let mut f = PriorityFrontier::new();
        f.push(Pos::new(0, 0), f64::INFINITY);
        f.push(Pos::new(0, 1), 1e9);
        assert_eq!(f.pop(), Some(Pos::new(0, 1)));
    }

    #[test]
    fn fifo_and_stack_orders() {
        let mut q = FifoFrontier::new();
        let mut s = StackFrontier::new();
        for c in 0..3 {
            q.push(Pos::new(0, c));
            s.push(Pos::new(0, c));
        }
        assert_eq!(q.pop(), Some(Pos::new(0, 0)));
        assert_eq!(s.pop(), Some(Pos::new(0, 2)));
        assert_eq!(q.len(), 2);
        assert_eq!(s.len(), 2);
    }
}
