//! Timed execution of the roster over generated maps.

use std::time::Instant;

use gridfinder_maze::GeneratedMap;
use gridfinder_paths::{Grid, Pos, SearchError};
use serde::Serialize;

use crate::roster::Algorithm;
use crate::stats::Stats;

/// One algorithm measured on one map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunResult {
    pub map_type: String,
    pub map_number: usize,
    pub map_id: String,
    pub start_row: i32,
    pub start_col: i32,
    pub finish_row: i32,
    pub finish_col: i32,
    pub algorithm: String,
    pub path_found: bool,
    /// Nodes on the reconstructed path, 0 when none was found.
    pub path_length: usize,
    /// Finalized nodes; both sides together for bidirectional search.
    pub nodes_visited: usize,
    pub peak_frontier: usize,
    /// Median over the timed iterations, in milliseconds.
    pub time_ms: f64,
    pub min_time_ms: f64,
    pub max_time_ms: f64,
}

/// What one search run produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub found: bool,
    pub path_length: usize,
    pub nodes_visited: usize,
    pub peak_frontier: usize,
}

/// Reset `grid` and run `algorithm` once between `start` and `finish`.
pub fn run_once(
    grid: &mut Grid,
    algorithm: &Algorithm,
    start: Pos,
    finish: Pos,
) -> Result<Outcome, SearchError> {
    grid.reset();
    match *algorithm {
        Algorithm::Single { variant, config } => {
            let trace = grid.search(variant, start, finish, &config)?;
            Ok(Outcome {
                found: trace.found(),
                path_length: grid.path_length(finish),
                nodes_visited: trace.len(),
                peak_frontier: trace.peak_frontier_size(),
            })
        }
        Algorithm::Bidirectional(config) => {
            let trace = grid.bidirectional_greedy(start, finish, &config)?;
            Ok(Outcome {
                found: trace.found(),
                path_length: trace.path().len(),
                nodes_visited: trace.nodes_visited(),
                peak_frontier: trace.peak_frontier_size(),
            })
        }
    }
}

/// Measure `algorithm` on `map`: `warmup` untimed runs, then
/// `iterations` timed runs. Search counters come from the last run; runs
/// are deterministic, so every run reports the same ones.
pub fn measure(
    map: &GeneratedMap,
    algorithm: &Algorithm,
    iterations: usize,
    warmup: usize,
) -> Result<RunResult, SearchError> {
    let mut grid = map.grid.clone();
    for _ in 0..warmup {
        run_once(&mut grid, algorithm, map.start, map.finish)?;
    }

    let mut times = Vec::with_capacity(iterations.max(1));
    let mut timed = || {
        let t = Instant::now();
        let o = run_once(&mut grid, algorithm, map.start, map.finish)?;
        times.push(t.elapsed().as_secs_f64() * 1000.0);
        Ok::<_, SearchError>(o)
    };
    let mut outcome = timed()?;
    for _ in 1..iterations {
        outcome = timed()?;
    }
    let stats = Stats::of(&times);

    Ok(RunResult {
        map_type: map.kind.to_string(),
        map_number: map.number,
        map_id: map.id(),
        start_row: map.start.row,
        start_col: map.start.col,
        finish_row: map.finish.row,
        finish_col: map.finish.col,
        algorithm: algorithm.to_string(),
        path_found: outcome.found,
        path_length: if outcome.found { outcome.path_length } else { 0 },
        nodes_visited: outcome.nodes_visited,
        peak_frontier: outcome.peak_frontier,
        time_ms: stats.median,
        min_time_ms: stats.min,
        max_time_ms: stats.max,
    })
}

/// Run the whole roster over every map, in map-major order.
pub fn run_benchmark(
    maps: &[GeneratedMap],
    roster: &[Algorithm],
    iterations: usize,
    warmup: usize,
) -> Result<Vec<RunResult>, SearchError> {
    let total = maps.len() * roster.len();
    let mut results = Vec::with_capacity(total);
    for map in maps {
        log::info!("testing map {} ({} walls)", map.id(), map.wall_count());
        for algorithm in roster {
            let r = measure(map, algorithm, iterations, warmup)?;
            log::info!(
                "[{}/{total}] {} {:<36} | path {:>4} | visited {:>5} | peak {:>4} | {:.3}ms",
                results.len() + 1,
                if r.path_found { '✓' } else { '✗' },
                r.algorithm,
                r.path_length,
                r.nodes_visited,
                r.peak_frontier,
                r.time_ms
            );
            results.push(r);
        }
    }
    Ok(results)
}
