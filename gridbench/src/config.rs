//! Benchmark configuration.
//!
//! Loaded from a JSON file (missing fields take their defaults) or built
//! from [`BenchConfig::default`], then adjusted by command-line flags.

use std::fmt;
use std::path::{Path, PathBuf};

use gridfinder_maze::{DEFAULT_MAX_ATTEMPTS, EndpointLayout};
use gridfinder_paths::Metric;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    pub rows: i32,
    pub cols: i32,
    /// Maps generated for every wall kind.
    pub maps_per_type: usize,
    /// A* is run once per weight and metric.
    pub astar_weights: Vec<f64>,
    pub metrics: Vec<Metric>,
    /// Timed runs per map and algorithm; the median is reported.
    pub iterations: usize,
    /// Untimed runs before the timed ones.
    pub warmup: usize,
    pub seed: u64,
    /// Wall layouts tried per map before giving up.
    pub max_attempts: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            rows: 25,
            cols: 50,
            maps_per_type: 5,
            astar_weights: vec![0.5, 1.0, 2.0],
            metrics: Metric::ALL.to_vec(),
            iterations: 5,
            warmup: 2,
            seed: 42,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl BenchConfig {
    /// Read a configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(text).map_err(ConfigError::Parse)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check that the configuration describes a runnable benchmark.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows <= 0 || self.cols <= 0 {
            return Err(ConfigError::Invalid(format!(
                "grid must have at least one row and column, got {}x{}",
                self.rows, self.cols
            )));
        }
        if i64::from(self.rows) * i64::from(self.cols) < 2 {
            return Err(ConfigError::Invalid("grid needs room for two endpoints".into()));
        }
        for number in 1..=self.maps_per_type.min(EndpointLayout::COUNT) {
            let layout = EndpointLayout::for_map(number, self.rows, self.cols);
            if layout.start == layout.finish {
                return Err(ConfigError::Invalid(format!(
                    "{}x{} grid puts both endpoints of layout {number} on {}",
                    self.rows, self.cols, layout.start
                )));
            }
        }
        if self.iterations == 0 {
            return Err(ConfigError::Invalid("iterations must be at least 1".into()));
        }
        if self.metrics.is_empty() {
            return Err(ConfigError::Invalid("at least one metric is required".into()));
        }
        if let Some(w) = self.astar_weights.iter().find(|w| !w.is_finite() || **w < 0.0) {
            return Err(ConfigError::Invalid(format!("invalid A* weight {w}")));
        }
        Ok(())
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: std::io::Error },
    Parse(serde_json::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "cannot read config {}: {source}", path.display())
            }
            ConfigError::Parse(e) => write!(f, "malformed config: {e}"),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}
