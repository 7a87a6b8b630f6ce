//! bench_plot - Main entry point
//!
//! Reads the CSV tables the sieve benchmark runners emit and renders them as
//! PNG charts: a 2D strategy comparison and 3D scaling/wireframe views.

use anyhow::Context;
use bench_plot::config::PlotConfig;
use bench_plot::pipeline;

fn main() {
    env_logger::init();

    println!("bench_plot v{}", env!("CARGO_PKG_VERSION"));

    // Parse command-line arguments
    // Flags are bridged into environment variables so the config has a
    // single source
    let args: Vec<String> = std::env::args().collect();
    parse_args(&args);

    // Print environment info
    print_env_info();

    if let Err(e) = run() {
        eprintln!("✗ Chart generation failed: {:#}", e);
        eprintln!("\nNote: expected inputs in the data directory:");
        eprintln!("  results.txt, results_mpi.csv, results_openmp.csv,");
        eprintln!("  results_openmp_segmented.csv, results_sequential.csv");
        std::process::exit(1);
    }

    println!("\nAll charts written!");
}

fn run() -> anyhow::Result<()> {
    let config = PlotConfig::from_env().context("failed to load configuration")?;

    println!("✓ Configuration loaded");
    println!("  Data dir: {}", config.data_dir.display());
    println!("  Output dir: {}", config.output_dir.display());
    println!(
        "  Charts: {}",
        config
            .charts
            .iter()
            .map(|kind| kind.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!(
        "  Plot dimensions: {:?} × {:?}",
        config.plot_width, config.plot_height
    );
    println!("  Baseline worker ceiling: {}", config.max_processes);

    let results = pipeline::generate_charts(&config).context("chart pipeline failed")?;

    println!();
    for result in &results {
        println!(
            "  {} → {} ({}×{})",
            result.kind,
            result.path.display(),
            result.width,
            result.height
        );
    }

    Ok(())
}

/// Parse command-line arguments and set environment variables
fn parse_args(args: &[String]) {
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--dataDir" if i + 1 < args.len() => {
                std::env::set_var("BENCH_DATA_DIR", &args[i + 1]);
                i += 2;
            }
            "--outDir" if i + 1 < args.len() => {
                std::env::set_var("BENCH_OUT_DIR", &args[i + 1]);
                i += 2;
            }
            "--charts" if i + 1 < args.len() => {
                std::env::set_var("BENCH_CHARTS", &args[i + 1]);
                i += 2;
            }
            "--width" if i + 1 < args.len() => {
                std::env::set_var("BENCH_PLOT_WIDTH", &args[i + 1]);
                i += 2;
            }
            "--height" if i + 1 < args.len() => {
                std::env::set_var("BENCH_PLOT_HEIGHT", &args[i + 1]);
                i += 2;
            }
            "--maxProcs" if i + 1 < args.len() => {
                std::env::set_var("BENCH_MAX_PROCS", &args[i + 1]);
                i += 2;
            }
            _ => i += 1,
        }
    }
}

/// Print environment info for debugging
fn print_env_info() {
    for name in [
        "BENCH_DATA_DIR",
        "BENCH_OUT_DIR",
        "BENCH_CHARTS",
        "BENCH_PLOT_WIDTH",
        "BENCH_PLOT_HEIGHT",
        "BENCH_MAX_PROCS",
    ] {
        if let Ok(value) = std::env::var(name) {
            println!("{}: {}", name, value);
        } else {
            println!("{} not set", name);
        }
    }
    println!();
}
