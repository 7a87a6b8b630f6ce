//! bench_plot library
//!
//! Reads benchmark-result tables from parallel sieve runs and renders them
//! as comparison and wireframe charts.
//!
//! Module organization:
//! - `bench`: table records, grid reshaping, error types
//! - `render`: chart drawing over plotters
//! - `pipeline`: per-chart load → reshape → render orchestration
//! - `config`: tool configuration

pub mod bench;
pub mod config;
pub mod pipeline;
pub mod render;
