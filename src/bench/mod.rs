//! Benchmark table handling
//!
//! Structure:
//! - `data.rs`: typed CSV records and table loading
//! - `grid.rs`: dense grid construction for wireframe charts
//! - `error.rs`: error types

pub mod data;
pub mod error;
pub mod grid;

// Re-exports for convenience
pub use error::{BenchError, Result};
pub use grid::{broadcast, reshape, Grid, Reshaped};
