//! Shared chart generation pipeline
//!
//! Each chart runs the same sequence: load the table(s), reshape where the
//! chart is three-dimensional, render to a PNG in the output directory.
//!
//! The pipeline:
//! 1. Resolves the requested chart kinds
//! 2. Loads and reshapes the input tables per chart
//! 3. Renders each chart with plotters
//! 4. Returns one result per written image

use crate::bench::data::{
    BaselineRecord, ComparisonRecord, MpiScalingRecord, OpenmpScalingRecord, ScalingObservation,
    SegmentedRecord,
};
use crate::bench::{data, grid, BenchError, Result};
use crate::config::PlotConfig;
use crate::render;
use std::fmt;
use std::path::PathBuf;

/// Input file names, as written by the benchmark runners
const RESULTS_FILE: &str = "results.txt";
const RESULTS_MPI_FILE: &str = "results_mpi.csv";
const RESULTS_OPENMP_FILE: &str = "results_openmp.csv";
const RESULTS_SEGMENTED_FILE: &str = "results_openmp_segmented.csv";
const RESULTS_SEQUENTIAL_FILE: &str = "results_sequential.csv";

/// The charts this tool can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// 2D log-log comparison of all three strategies over problem size
    Comparison,
    /// 3D MPI execution time over (problem size, process count)
    MpiScaling,
    /// 3D OpenMP execution time over (problem size, thread count)
    OpenmpScaling,
    /// 3D OpenMP wireframe over (thread count, segment size)
    OpenmpSegmented,
}

impl ChartKind {
    pub fn all() -> &'static [ChartKind] {
        &[
            ChartKind::Comparison,
            ChartKind::MpiScaling,
            ChartKind::OpenmpScaling,
            ChartKind::OpenmpSegmented,
        ]
    }

    /// Parse a chart name as given on the command line
    pub fn parse(name: &str) -> Option<ChartKind> {
        match name {
            "comparison" => Some(ChartKind::Comparison),
            "mpi-scaling" => Some(ChartKind::MpiScaling),
            "openmp-scaling" => Some(ChartKind::OpenmpScaling),
            "openmp-segmented" => Some(ChartKind::OpenmpSegmented),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ChartKind::Comparison => "comparison",
            ChartKind::MpiScaling => "mpi-scaling",
            ChartKind::OpenmpScaling => "openmp-scaling",
            ChartKind::OpenmpSegmented => "openmp-segmented",
        }
    }

    /// Name of the image written into the output directory.
    ///
    /// The comparison chart keeps the fixed name the original tooling used.
    pub fn output_file(&self) -> &'static str {
        match self {
            ChartKind::Comparison => "execution_time_plot.png",
            ChartKind::MpiScaling => "mpi_scaling_3d.png",
            ChartKind::OpenmpScaling => "openmp_scaling_3d.png",
            ChartKind::OpenmpSegmented => "openmp_segmented_3d.png",
        }
    }

    /// Default image dimensions when none are configured
    pub fn default_dimensions(&self) -> (u32, u32) {
        match self {
            ChartKind::Comparison => (1000, 600),
            _ => (1500, 1500),
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One rendered chart
#[derive(Debug, Clone)]
pub struct ChartResult {
    pub kind: ChartKind,
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// Generate all requested charts.
///
/// Charts are rendered in the order configured; the first failure aborts the
/// run with the underlying error. No retries, no partial recovery.
pub fn generate_charts(config: &PlotConfig) -> Result<Vec<ChartResult>> {
    std::fs::create_dir_all(&config.output_dir).map_err(|source| BenchError::Io {
        path: config.output_dir.clone(),
        source,
    })?;

    println!("[1/2] Rendering {} chart(s)...", config.charts.len());

    let mut results = Vec::new();
    for (idx, &kind) in config.charts.iter().enumerate() {
        println!(
            "\n=== Chart {}/{}: {} ===",
            idx + 1,
            config.charts.len(),
            kind
        );

        let result = render_chart(config, kind)?;
        println!("✓ Wrote {}", result.path.display());
        results.push(result);
    }

    println!("\n[2/2] Chart generation complete");
    Ok(results)
}

/// Run one chart's load → reshape → render sequence
fn render_chart(config: &PlotConfig, kind: ChartKind) -> Result<ChartResult> {
    let (width, height) = config.resolve_dimensions(kind);
    let path = config.output_dir.join(kind.output_file());

    match kind {
        ChartKind::Comparison => {
            let rows: Vec<ComparisonRecord> =
                data::load_nonempty(config.data_dir.join(RESULTS_FILE))?;
            println!("  {} rows from {}", rows.len(), RESULTS_FILE);

            render::render_comparison(&rows, &path, width, height)?;
        }
        ChartKind::MpiScaling => {
            let rows: Vec<MpiScalingRecord> =
                data::load_nonempty(config.data_dir.join(RESULTS_MPI_FILE))?;
            println!("  {} rows from {}", rows.len(), RESULTS_MPI_FILE);

            let observations: Vec<ScalingObservation> = rows.into_iter().map(Into::into).collect();
            scaling_chart(
                config,
                &observations,
                "Parallel vs Sequential Execution Time (MPI)",
                &path,
                width,
                height,
            )?;
        }
        ChartKind::OpenmpScaling => {
            let rows: Vec<OpenmpScalingRecord> =
                data::load_nonempty(config.data_dir.join(RESULTS_OPENMP_FILE))?;
            println!("  {} rows from {}", rows.len(), RESULTS_OPENMP_FILE);

            let observations: Vec<ScalingObservation> = rows.into_iter().map(Into::into).collect();
            scaling_chart(
                config,
                &observations,
                "Parallel vs Sequential Execution Time (OpenMP)",
                &path,
                width,
                height,
            )?;
        }
        ChartKind::OpenmpSegmented => {
            let rows: Vec<SegmentedRecord> =
                data::load_nonempty(config.data_dir.join(RESULTS_SEGMENTED_FILE))?;
            println!("  {} rows from {}", rows.len(), RESULTS_SEGMENTED_FILE);

            let reshaped = grid::reshape(
                &rows,
                |r| r.num_threads,
                |r| r.segment_size.log10(),
                |r| r.execution_time,
            );
            let (n_rows, n_cols) = reshaped.grid.shape();
            println!(
                "  Grid {}×{} from {} observations",
                n_rows,
                n_cols,
                rows.len()
            );

            render::render_wireframe(
                &reshaped,
                "Execution Time by Threads and Segment Size (log scale)",
                &path,
                width,
                height,
            )?;
        }
    }

    Ok(ChartResult {
        kind,
        path,
        width,
        height,
    })
}

/// Render one scaling chart: measured observations plus the sequential
/// baseline replicated across worker counts 1..max
fn scaling_chart(
    config: &PlotConfig,
    observations: &[ScalingObservation],
    caption: &str,
    path: &std::path::Path,
    width: u32,
    height: u32,
) -> Result<()> {
    let measured = grid::reshape(observations, |o| o.log_n, |o| o.workers, |o| o.time);
    let (n_rows, n_cols) = measured.grid.shape();
    println!(
        "  Grid {}×{} from {} observations",
        n_rows,
        n_cols,
        observations.len()
    );

    let baseline_rows: Vec<BaselineRecord> =
        data::load_nonempty(config.data_dir.join(RESULTS_SEQUENTIAL_FILE))?;
    println!(
        "  {} baseline rows from {}",
        baseline_rows.len(),
        RESULTS_SEQUENTIAL_FILE
    );

    let series: Vec<(f64, f64)> = baseline_rows
        .iter()
        .map(|r| (r.n.log10(), r.execution_time))
        .collect();
    let workers: Vec<f64> = (1..=config.max_processes).map(|p| p as f64).collect();
    let baseline = grid::broadcast(&series, &workers);

    render::render_scaling(&measured, &baseline, caption, path, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlotDimension;

    #[test]
    fn test_chart_kind_parse_roundtrip() {
        for &kind in ChartKind::all() {
            assert_eq!(ChartKind::parse(kind.name()), Some(kind));
        }
        assert_eq!(ChartKind::parse("heatmap"), None);
    }

    #[test]
    fn test_output_files_are_distinct() {
        let mut files: Vec<&str> = ChartKind::all().iter().map(|k| k.output_file()).collect();
        files.sort();
        files.dedup();
        assert_eq!(files.len(), ChartKind::all().len());
    }

    /// Full pipeline over a small scratch directory: write the runner CSVs,
    /// generate every chart, check the images exist.
    #[test]
    fn test_generate_charts_end_to_end() {
        let scratch = std::env::temp_dir().join(format!("bench_plot_e2e_{}", std::process::id()));
        let data_dir = scratch.join("data");
        let out_dir = scratch.join("out");
        std::fs::create_dir_all(&data_dir).unwrap();

        std::fs::write(
            data_dir.join(RESULTS_FILE),
            "n,Sequential_Time,OpenMP_Time,MPI_Time\n\
             1000,0.5,0.2,0.3\n\
             100000,5.1,1.9,2.4\n\
             10000000,52.0,18.7,23.9\n",
        )
        .unwrap();
        std::fs::write(
            data_dir.join(RESULTS_MPI_FILE),
            "n,num_processes,Execution_Time\n\
             1000,1,0.6\n\
             1000,2,0.4\n\
             100000,1,6.0\n\
             100000,2,3.2\n\
             100000,4,1.8\n",
        )
        .unwrap();
        std::fs::write(
            data_dir.join(RESULTS_OPENMP_FILE),
            "n,num_threads,Execution_Time\n\
             1000,1,0.5\n\
             1000,4,0.2\n\
             100000,1,5.5\n\
             100000,4,1.6\n",
        )
        .unwrap();
        std::fs::write(
            data_dir.join(RESULTS_SEGMENTED_FILE),
            "n,num_threads,segment_size,Execution_Time\n\
             100000,2,10,1.5\n\
             100000,4,10,0.9\n\
             100000,2,100,2.0\n",
        )
        .unwrap();
        std::fs::write(
            data_dir.join(RESULTS_SEQUENTIAL_FILE),
            "n,Execution_Time\n\
             1000,0.5\n\
             100000,5.1\n",
        )
        .unwrap();

        let config = PlotConfig {
            data_dir,
            output_dir: out_dir.clone(),
            charts: ChartKind::all().to_vec(),
            plot_width: PlotDimension::Pixels(400),
            plot_height: PlotDimension::Pixels(300),
            max_processes: 4,
        };

        let results = generate_charts(&config).unwrap();
        assert_eq!(results.len(), ChartKind::all().len());
        for result in &results {
            assert_eq!(result.width, 400);
            assert_eq!(result.height, 300);
            assert!(result.path.exists(), "missing {}", result.path.display());
        }

        std::fs::remove_dir_all(&scratch).unwrap();
    }

    #[test]
    fn test_missing_input_file_fails() {
        let scratch =
            std::env::temp_dir().join(format!("bench_plot_missing_{}", std::process::id()));
        let config = PlotConfig {
            data_dir: scratch.join("data"),
            output_dir: scratch.join("out"),
            charts: vec![ChartKind::Comparison],
            plot_width: PlotDimension::Auto,
            plot_height: PlotDimension::Auto,
            max_processes: 4,
        };

        let result = generate_charts(&config);
        assert!(matches!(result, Err(BenchError::Io { .. })));

        std::fs::remove_dir_all(&scratch).unwrap();
    }
}
