//! The set of algorithm configurations a benchmark compares.

use std::fmt;

use gridfinder_paths::{Metric, SearchConfig, Variant};

use crate::config::BenchConfig;

/// One entry of the benchmark roster.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Algorithm {
    Single { variant: Variant, config: SearchConfig },
    Bidirectional(SearchConfig),
}

impl Algorithm {
    fn single(variant: Variant) -> Self {
        Algorithm::Single {
            variant,
            config: SearchConfig::default(),
        }
    }

    /// Heuristic settings, if the algorithm reads them.
    pub fn search_config(&self) -> Option<SearchConfig> {
        match *self {
            Algorithm::Single { variant, config } if variant.uses_heuristic() => Some(config),
            Algorithm::Single { .. } => None,
            Algorithm::Bidirectional(config) => Some(config),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Algorithm::Single { variant, config } => match variant {
                Variant::Dijkstra => f.write_str("Dijkstra"),
                Variant::Bfs => f.write_str("BFS"),
                Variant::Dfs => f.write_str("DFS"),
                Variant::AStar => write!(f, "A* (w={}, {})", config.weight, config.metric),
                Variant::GreedyBestFirst => write!(f, "Greedy BFS ({})", config.metric),
            },
            Algorithm::Bidirectional(config) => {
                write!(f, "Bidirectional Greedy ({})", config.metric)
            }
        }
    }
}

/// Dijkstra, BFS and DFS; A* for every weight × metric; greedy and
/// bidirectional greedy for every metric at weight 1.
pub fn roster(cfg: &BenchConfig) -> Vec<Algorithm> {
    let mut out = vec![
        Algorithm::single(Variant::Dijkstra),
        Algorithm::single(Variant::Bfs),
        Algorithm::single(Variant::Dfs),
    ];
    for &weight in &cfg.astar_weights {
        for &metric in &cfg.metrics {
            out.push(Algorithm::Single {
                variant: Variant::AStar,
                config: SearchConfig::new(metric, weight),
            });
        }
    }
    let unit = |metric: Metric| SearchConfig::new(metric, 1.0);
    out.extend(cfg.metrics.iter().map(|&m| Algorithm::Single {
        variant: Variant::GreedyBestFirst,
        config: unit(m),
    }));
    out.extend(cfg.metrics.iter().map(|&m| Algorithm::Bidirectional(unit(m))));
    out
}
