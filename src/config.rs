//! Tool configuration from environment variables
//!
//! The binary bridges command-line flags into environment variables, so the
//! environment is the single configuration source. Every setting has a
//! default; invalid values fall back to the default with a warning.

use crate::bench::{BenchError, Result};
use crate::pipeline::ChartKind;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct PlotConfig {
    /// Directory holding the benchmark result tables
    pub data_dir: PathBuf,

    /// Directory the PNG files are written into
    pub output_dir: PathBuf,

    /// Charts to render, in order
    pub charts: Vec<ChartKind>,

    /// Image width (pixels or Auto)
    pub plot_width: PlotDimension,

    /// Image height (pixels or Auto)
    pub plot_height: PlotDimension,

    /// Worker-count ceiling the sequential baseline is replicated across
    pub max_processes: usize,
}

impl PlotConfig {
    /// Create config from environment variables
    pub fn from_env() -> Result<Self> {
        let data_dir = PathBuf::from(env::var("BENCH_DATA_DIR").unwrap_or_else(|_| ".".into()));
        let output_dir = PathBuf::from(env::var("BENCH_OUT_DIR").unwrap_or_else(|_| ".".into()));

        let charts = match env::var("BENCH_CHARTS") {
            Ok(spec) => parse_chart_list(&spec)?,
            Err(_) => ChartKind::all().to_vec(),
        };

        let plot_width = PlotDimension::from_str(
            &env::var("BENCH_PLOT_WIDTH").unwrap_or_default(),
            PlotDimension::Auto,
        );
        let plot_height = PlotDimension::from_str(
            &env::var("BENCH_PLOT_HEIGHT").unwrap_or_default(),
            PlotDimension::Auto,
        );

        let max_processes = read_env_usize("BENCH_MAX_PROCS", 24);

        Ok(PlotConfig {
            data_dir,
            output_dir,
            charts,
            plot_width,
            plot_height,
            max_processes,
        })
    }

    /// Resolve image dimensions for one chart.
    ///
    /// Auto dimensions use the chart kind's defaults (the 2D comparison
    /// chart is landscape, the 3D charts square).
    pub fn resolve_dimensions(&self, kind: ChartKind) -> (u32, u32) {
        let (default_width, default_height) = kind.default_dimensions();
        (
            self.plot_width.resolve(default_width),
            self.plot_height.resolve(default_height),
        )
    }
}

/// Parse a comma-separated chart list; "all" or empty selects every chart
pub fn parse_chart_list(spec: &str) -> Result<Vec<ChartKind>> {
    let trimmed = spec.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
        return Ok(ChartKind::all().to_vec());
    }

    trimmed
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| {
            ChartKind::parse(name).ok_or_else(|| {
                BenchError::Config(format!(
                    "unknown chart '{}', expected one of: {} or all",
                    name,
                    ChartKind::all()
                        .iter()
                        .map(|k| k.name())
                        .collect::<Vec<_>>()
                        .join(", ")
                ))
            })
        })
        .collect()
}

fn read_env_usize(name: &str, default: usize) -> usize {
    match env::var(name) {
        Ok(value) => value.parse().unwrap_or_else(|_| {
            eprintln!(
                "⚠ Invalid value for {}: '{}', using default: {}",
                name, value, default
            );
            default
        }),
        Err(_) => default,
    }
}

/// Image dimension - either explicit pixels or "auto" (derived per chart)
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PlotDimension {
    #[default]
    Auto,
    Pixels(u32),
}

impl PlotDimension {
    /// Parse from a setting value
    ///
    /// Valid formats:
    /// - "auto" or "" (empty) → Auto
    /// - "1500" → Pixels(1500) if in valid range [100, 10000]
    pub fn from_str(value: &str, default: PlotDimension) -> Self {
        let trimmed = value.trim();

        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("auto") {
            return PlotDimension::Auto;
        }

        match trimmed.parse::<u32>() {
            Ok(px) if (100..=10000).contains(&px) => PlotDimension::Pixels(px),
            Ok(px) => {
                eprintln!(
                    "⚠ Plot dimension {} out of valid range [100-10000], using default: {:?}",
                    px, default
                );
                default
            }
            Err(_) => {
                eprintln!(
                    "⚠ Invalid plot dimension '{}', using default: {:?}",
                    trimmed, default
                );
                default
            }
        }
    }

    /// Resolve to actual pixels, with Auto taking the chart's default
    pub fn resolve(&self, default_px: u32) -> u32 {
        match self {
            PlotDimension::Pixels(px) => *px,
            PlotDimension::Auto => default_px,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_dimension_auto() {
        let dim = PlotDimension::from_str("auto", PlotDimension::Auto);
        assert_eq!(dim, PlotDimension::Auto);
        assert_eq!(dim.resolve(1500), 1500);
        assert_eq!(dim.resolve(600), 600);
    }

    #[test]
    fn test_plot_dimension_empty_string() {
        let dim = PlotDimension::from_str("", PlotDimension::Auto);
        assert_eq!(dim, PlotDimension::Auto);
    }

    #[test]
    fn test_plot_dimension_pixels() {
        let dim = PlotDimension::from_str("1500", PlotDimension::Auto);
        assert_eq!(dim, PlotDimension::Pixels(1500));
        assert_eq!(dim.resolve(600), 1500); // Ignores the default
    }

    #[test]
    fn test_plot_dimension_invalid() {
        let dim = PlotDimension::from_str("abc", PlotDimension::Auto);
        assert_eq!(dim, PlotDimension::Auto);
    }

    #[test]
    fn test_plot_dimension_out_of_range() {
        // Too small
        let dim = PlotDimension::from_str("50", PlotDimension::Auto);
        assert_eq!(dim, PlotDimension::Auto);

        // Too large
        let dim = PlotDimension::from_str("20000", PlotDimension::Auto);
        assert_eq!(dim, PlotDimension::Auto);
    }

    #[test]
    fn test_parse_chart_list_all() {
        assert_eq!(parse_chart_list("all").unwrap(), ChartKind::all().to_vec());
        assert_eq!(parse_chart_list("").unwrap(), ChartKind::all().to_vec());
    }

    #[test]
    fn test_parse_chart_list_subset() {
        let charts = parse_chart_list("comparison, openmp-segmented").unwrap();
        assert_eq!(
            charts,
            vec![ChartKind::Comparison, ChartKind::OpenmpSegmented]
        );
    }

    #[test]
    fn test_parse_chart_list_unknown() {
        let result = parse_chart_list("comparison,heatmap");
        assert!(matches!(result, Err(BenchError::Config(_))));
    }
}
