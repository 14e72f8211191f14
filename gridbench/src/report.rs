//! Result aggregation and output formats.

use std::io::{self, Write};

use serde::Serialize;

use crate::runner::RunResult;
use crate::stats::{Stats, mean, round3};

/// Aggregate over the runs of one algorithm in which a path was found.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub algorithm: String,
    /// Runs that found a path; the averages below are over these.
    pub tests_run: usize,
    /// Runs that did not find a path.
    pub failures: usize,
    pub avg_path_length: f64,
    pub avg_nodes_visited: f64,
    pub avg_peak_frontier: f64,
    pub min_path: usize,
    pub max_path: usize,
    pub min_nodes_visited: usize,
    pub max_nodes_visited: usize,
    pub min_peak_frontier: usize,
    pub max_peak_frontier: usize,
    pub time_mean_ms: f64,
    pub time_median_ms: f64,
    pub time_min_ms: f64,
    pub time_max_ms: f64,
    pub time_std_dev_ms: f64,
}

impl Summary {
    /// Timing statistics over the successful runs.
    pub fn time_ms(&self) -> Stats {
        Stats {
            mean: self.time_mean_ms,
            median: self.time_median_ms,
            min: self.time_min_ms,
            max: self.time_max_ms,
            std_dev: self.time_std_dev_ms,
        }
    }
}

/// Group results by algorithm, keeping first-seen order. Algorithms that
/// never found a path are left out.
pub fn summarize(results: &[RunResult]) -> Vec<Summary> {
    let mut order: Vec<&str> = Vec::new();
    for r in results {
        if !order.contains(&r.algorithm.as_str()) {
            order.push(&r.algorithm);
        }
    }

    order
        .into_iter()
        .filter_map(|name| {
            let runs: Vec<&RunResult> = results.iter().filter(|r| r.algorithm == name).collect();
            let found: Vec<&RunResult> = runs.iter().copied().filter(|r| r.path_found).collect();
            if found.is_empty() {
                return None;
            }
            let times: Vec<f64> = found.iter().map(|r| r.time_ms).collect();
            let t = Stats::of(&times);
            let range = |f: fn(&RunResult) -> usize| {
                let values: Vec<usize> = found.iter().map(|r| f(*r)).collect();
                let min = values.iter().copied().min().unwrap_or(0);
                (min, values.iter().copied().max().unwrap_or(0))
            };
            let (min_path, max_path) = range(|r| r.path_length);
            let (min_nodes_visited, max_nodes_visited) = range(|r| r.nodes_visited);
            let (min_peak_frontier, max_peak_frontier) = range(|r| r.peak_frontier);
            Some(Summary {
                algorithm: name.to_string(),
                tests_run: found.len(),
                failures: runs.len() - found.len(),
                avg_path_length: round3(mean(found.iter().map(|r| r.path_length as f64))),
                avg_nodes_visited: round3(mean(found.iter().map(|r| r.nodes_visited as f64))),
                avg_peak_frontier: round3(mean(found.iter().map(|r| r.peak_frontier as f64))),
                min_path,
                max_path,
                min_nodes_visited,
                max_nodes_visited,
                min_peak_frontier,
                max_peak_frontier,
                time_mean_ms: t.mean,
                time_median_ms: t.median,
                time_min_ms: t.min,
                time_max_ms: t.max,
                time_std_dev_ms: t.std_dev,
            })
        })
        .collect()
}

/// Per-run table, one line per map and algorithm.
pub fn write_table(w: &mut impl Write, results: &[RunResult]) -> io::Result<()> {
    writeln!(
        w,
        "{:<14} {:<36} {:>5} {:>6} {:>8} {:>6} {:>10}",
        "map", "algorithm", "found", "path", "visited", "peak", "time (ms)"
    )?;
    writeln!(w, "{}", "-".repeat(91))?;
    for r in results {
        writeln!(
            w,
            "{:<14} {:<36} {:>5} {:>6} {:>8} {:>6} {:>10.3}",
            r.map_id,
            r.algorithm,
            if r.path_found { "yes" } else { "no" },
            r.path_length,
            r.nodes_visited,
            r.peak_frontier,
            r.time_ms
        )?;
    }
    Ok(())
}

/// Per-algorithm averages.
pub fn write_summary_table(w: &mut impl Write, summaries: &[Summary]) -> io::Result<()> {
    writeln!(
        w,
        "{:<36} {:>5} {:>9} {:>9} {:>9} {:>10} {:>10}",
        "algorithm", "runs", "avg path", "avg visit", "avg peak", "mean (ms)", "sd (ms)"
    )?;
    writeln!(w, "{}", "-".repeat(94))?;
    for s in summaries {
        writeln!(
            w,
            "{:<36} {:>5} {:>9.2} {:>9.2} {:>9.2} {:>10.3} {:>10.3}",
            s.algorithm,
            s.tests_run,
            s.avg_path_length,
            s.avg_nodes_visited,
            s.avg_peak_frontier,
            s.time_mean_ms,
            s.time_std_dev_ms
        )?;
    }
    Ok(())
}

/// Any serializable rows as CSV with a header line.
pub fn write_csv<T: Serialize>(w: impl Write, rows: &[T]) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(w);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// `"A* (w=0.5, manhattan)"` becomes `"w=0.5_manhattan"`; other
/// algorithms have no label.
fn astar_label(algorithm: &str) -> Option<String> {
    let inner = algorithm.strip_prefix("A* (")?.strip_suffix(')')?;
    Some(inner.replace(", ", "_"))
}

const ASTAR_COLUMNS: [&str; 4] = ["path", "visited", "peak", "time_ms"];

/// Successful A* runs side by side: one row per map, and path, visited,
/// peak and time columns for every weight and metric. Cells of variants
/// that found no path on a map stay empty.
pub fn write_astar_csv(w: impl Write, results: &[RunResult]) -> csv::Result<()> {
    let astar: Vec<(String, &RunResult)> = results
        .iter()
        .filter(|r| r.path_found)
        .filter_map(|r| astar_label(&r.algorithm).map(|label| (label, r)))
        .collect();

    let mut variants: Vec<&str> = Vec::new();
    let mut maps: Vec<&str> = Vec::new();
    for (label, r) in &astar {
        if !variants.contains(&label.as_str()) {
            variants.push(label);
        }
        if !maps.contains(&r.map_id.as_str()) {
            maps.push(&r.map_id);
        }
    }

    let mut wtr = csv::Writer::from_writer(w);
    let mut header = vec!["map_id".to_string()];
    for v in &variants {
        header.extend(ASTAR_COLUMNS.iter().map(|c| format!("{v}_{c}")));
    }
    wtr.write_record(&header)?;

    for map in maps {
        let mut row = vec![map.to_string()];
        for &v in &variants {
            match astar.iter().find(|(l, r)| l.as_str() == v && r.map_id == map) {
                Some((_, r)) => row.extend([
                    r.path_length.to_string(),
                    r.nodes_visited.to_string(),
                    r.peak_frontier.to_string(),
                    r.time_ms.to_string(),
                ]),
                None => row.extend(std::iter::repeat_n(String::new(), ASTAR_COLUMNS.len())),
            }
        }
        wtr.write_record(&row)?;
    }
    wtr.flush()?;
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    results: &'a [RunResult],
    summary: &'a [Summary],
}

/// Results and summaries as one pretty-printed JSON document.
pub fn write_json(w: impl Write, results: &[RunResult], summaries: &[Summary]) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(
        w,
        &JsonReport {
            results,
            summary: summaries,
        },
    )
}
