use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use gridbench_lib::config::BenchConfig;
use gridbench_lib::report::{self, Summary};
use gridbench_lib::roster::roster;
use gridbench_lib::runner::{RunResult, run_benchmark};
use gridfinder_maze::generate_all_maps;
use gridfinder_paths::Metric;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Compare grid search strategies on generated maps.
#[derive(Parser, Debug)]
#[command(name = "gridbench", version, about)]
struct Args {
    /// JSON configuration file; flags below override its values.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long)]
    rows: Option<i32>,

    #[arg(long)]
    cols: Option<i32>,

    /// Maps generated per wall kind.
    #[arg(long)]
    maps_per_type: Option<usize>,

    /// Timed runs per map and algorithm.
    #[arg(short, long)]
    iterations: Option<usize>,

    /// Untimed runs before timing starts.
    #[arg(long)]
    warmup: Option<usize>,

    /// Seed for map generation.
    #[arg(short, long)]
    seed: Option<u64>,

    /// A* heuristic weights, comma separated.
    #[arg(long, value_delimiter = ',')]
    weights: Option<Vec<f64>>,

    /// Heuristic metrics, comma separated (manhattan, euclidean).
    #[arg(long, value_delimiter = ',')]
    metrics: Option<Vec<Metric>>,

    /// Write per-run results as CSV.
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write per-algorithm summaries as CSV.
    #[arg(long)]
    summary_csv: Option<PathBuf>,

    /// Write A* weight and metric comparisons, one row per map, as CSV.
    #[arg(long)]
    astar_csv: Option<PathBuf>,

    /// Write results and summaries as JSON.
    #[arg(long)]
    json: Option<PathBuf>,

    /// Skip the per-run table on stdout.
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    fn bench_config(&self) -> Result<BenchConfig, Box<dyn std::error::Error>> {
        let mut cfg = match &self.config {
            Some(path) => BenchConfig::load(path)?,
            None => BenchConfig::default(),
        };
        if let Some(v) = self.rows {
            cfg.rows = v;
        }
        if let Some(v) = self.cols {
            cfg.cols = v;
        }
        if let Some(v) = self.maps_per_type {
            cfg.maps_per_type = v;
        }
        if let Some(v) = self.iterations {
            cfg.iterations = v;
        }
        if let Some(v) = self.warmup {
            cfg.warmup = v;
        }
        if let Some(v) = self.seed {
            cfg.seed = v;
        }
        if let Some(v) = &self.weights {
            cfg.astar_weights = v.clone();
        }
        if let Some(v) = &self.metrics {
            cfg.metrics = v.clone();
        }
        cfg.validate()?;
        Ok(cfg)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let cfg = args.bench_config()?;
    log::info!(
        "{}x{} grid, {} maps per type, {} timed + {} warmup runs, seed {}",
        cfg.rows,
        cfg.cols,
        cfg.maps_per_type,
        cfg.iterations,
        cfg.warmup,
        cfg.seed
    );

    let mut rng = StdRng::seed_from_u64(cfg.seed);
    let maps = generate_all_maps(cfg.rows, cfg.cols, cfg.maps_per_type, &mut rng, cfg.max_attempts)?;
    let algorithms = roster(&cfg);
    log::info!("{} maps × {} algorithms", maps.len(), algorithms.len());

    let results = run_benchmark(&maps, &algorithms, cfg.iterations, cfg.warmup)?;
    let summaries = report::summarize(&results);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if !args.quiet {
        report::write_table(&mut out, &results)?;
        writeln!(out)?;
    }
    report::write_summary_table(&mut out, &summaries)?;
    out.flush()?;

    write_outputs(&args, &results, &summaries)
}

fn write_outputs(
    args: &Args,
    results: &[RunResult],
    summaries: &[Summary],
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = &args.csv {
        report::write_csv(BufWriter::new(File::create(path)?), results)?;
        log::info!("results written to {}", path.display());
    }
    if let Some(path) = &args.summary_csv {
        report::write_csv(BufWriter::new(File::create(path)?), summaries)?;
        log::info!("summary written to {}", path.display());
    }
    if let Some(path) = &args.astar_csv {
        report::write_astar_csv(BufWriter::new(File::create(path)?), results)?;
        log::info!("A* comparison written to {}", path.display());
    }
    if let Some(path) = &args.json {
        let mut w = BufWriter::new(File::create(path)?);
        report::write_json(&mut w, results, summaries)?;
        w.flush()?;
        log::info!("report written to {}", path.display());
    }
    Ok(())
}
