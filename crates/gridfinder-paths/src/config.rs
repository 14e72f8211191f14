use std::fmt;
use std::str::FromStr;

use crate::error::SearchError;
use crate::heuristic::{Heuristic, Metric};

/// Heuristic settings passed uniformly to every search.
///
/// Dijkstra, BFS and DFS ignore it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    pub metric: Metric,
    pub weight: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            metric: Metric::Manhattan,
            weight: 1.0,
        }
    }
}

impl SearchConfig {
    pub fn new(metric: Metric, weight: f64) -> Self {
        Self { metric, weight }
    }

    /// The heuristic bound to this metric and weight, after checking the
    /// weight is finite and non-negative.
    pub fn heuristic(&self) -> Result<Heuristic, SearchError> {
        if !self.weight.is_finite() || self.weight < 0.0 {
            return Err(SearchError::InvalidWeight(self.weight));
        }
        Ok(Heuristic::new(self.metric, self.weight))
    }
}

/// The single-frontier search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Variant {
    Dijkstra,
    AStar,
    Bfs,
    Dfs,
    GreedyBestFirst,
}

impl Variant {
    pub const ALL: [Variant; 5] = [
        Variant::Dijkstra,
        Variant::AStar,
        Variant::Bfs,
        Variant::Dfs,
        Variant::GreedyBestFirst,
    ];

    /// Whether the variant reads [`SearchConfig`].
    pub fn uses_heuristic(self) -> bool {
        matches!(self, Variant::AStar | Variant::GreedyBestFirst)
    }

    pub fn name(self) -> &'static str {
        match self {
            Variant::Dijkstra => "dijkstra",
            Variant::AStar => "astar",
            Variant::Bfs => "bfs",
            Variant::Dfs => "dfs",
            Variant::GreedyBestFirst => "greedy",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown variant name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant(pub String);

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown search variant \u{201c}{}\u{201d}", self.0)
    }
}

impl std::error::Error for UnknownVariant {}

impl FromStr for Variant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['-', '_', ' '], "").as_str() {
            "dijkstra" => Ok(Variant::Dijkstra),
            "astar" | "a*" => Ok(Variant::AStar),
            "bfs" | "breadthfirst" => Ok(Variant::Bfs),
            "dfs" | "depthfirst" => Ok(Variant::Dfs),
            "greedy" | "greedybestfirst" => Ok(Variant::GreedyBestFirst),
            _ => Err(UnknownVariant(s.to_string())),
        }
    }
}
