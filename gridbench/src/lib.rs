//! Benchmark harness for the gridfinder search strategies.
//!
//! Generates solvable maps of every wall kind with `gridfinder-maze`, runs
//! each [`roster::Algorithm`] on each map, and reports per-run measurements
//! and per-algorithm summaries as text, CSV or JSON.

pub mod config;
pub mod report;
pub mod roster;
pub mod runner;
pub mod stats;
