use gridfinder_core::Pos;

/// The outcome of a single-frontier search.
///
/// `visited` lists positions in the order they were finalized; when the
/// finish was reached it is the last entry. `peak_frontier_size` is the
/// largest number of entries the frontier held at once, a proxy for
/// memory use.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trace {
    pub(crate) visited: Vec<Pos>,
    pub(crate) peak_frontier_size: usize,
    pub(crate) found: bool,
}

impl Trace {
    pub fn visited(&self) -> &[Pos] {
        &self.visited
    }

    /// Number of finalized nodes.
    pub fn len(&self) -> usize {
        self.visited.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visited.is_empty()
    }

    pub fn peak_frontier_size(&self) -> usize {
        self.peak_frontier_size
    }

    /// Whether the finish was reached.
    pub fn found(&self) -> bool {
        self.found
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pos> {
        self.visited.iter()
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Pos;
    type IntoIter = std::slice::Iter<'a, Pos>;

    fn into_iter(self) -> Self::IntoIter {
        self.visited.iter()
    }
}
