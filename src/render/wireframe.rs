//! 3D wireframe and scaling charts
//!
//! A reshaped grid is drawn as polylines along both grid directions. Runs
//! are split wherever a cell is missing, so sparse data renders as gaps in
//! the wire, never as zero-valued points.
//!
//! Chart space is (axis1, value, axis2): the first axis runs along x, the
//! measured value is the vertical y axis and the second axis recedes along z.

use super::{axis_range, render_err};
use crate::bench::{BenchError, Reshaped, Result};
use plotters::prelude::*;
use std::path::Path;

/// Point in chart space: (axis1 value, measured value, axis2 value)
type Point3 = (f64, f64, f64);

/// Line colors cycled across measured groups
const GROUP_COLORS: [RGBColor; 8] = [
    RED,
    BLUE,
    GREEN,
    MAGENTA,
    CYAN,
    RGBColor(255, 140, 0),
    RGBColor(128, 0, 128),
    RGBColor(139, 69, 19),
];

const BASELINE_COLOR: RGBColor = RGBColor(173, 216, 230);

/// Split a cell sequence into polyline runs, breaking at missing cells
fn split_runs(points: impl Iterator<Item = (f64, Option<f64>, f64)>) -> Vec<Vec<Point3>> {
    let mut runs = Vec::new();
    let mut current = Vec::new();
    for (a1, cell, a2) in points {
        match cell {
            Some(value) => current.push((a1, value, a2)),
            None => {
                if !current.is_empty() {
                    runs.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

/// Polyline runs along axis1 for one grid row
fn row_runs(reshaped: &Reshaped, row: usize) -> Vec<Vec<Point3>> {
    let a2 = reshaped.axis2[row];
    split_runs(
        reshaped
            .grid
            .row(row)
            .iter()
            .zip(&reshaped.axis1)
            .map(|(&cell, &a1)| (a1, cell, a2)),
    )
}

/// Polyline runs along axis2 for one grid column
fn column_runs(reshaped: &Reshaped, col: usize) -> Vec<Vec<Point3>> {
    let a1 = reshaped.axis1[col];
    split_runs(
        reshaped
            .axis2
            .iter()
            .enumerate()
            .map(|(row, &a2)| (a1, reshaped.grid.get(row, col), a2)),
    )
}

/// All wireframe polylines of a grid: every row and every column direction
fn wireframe_polylines(reshaped: &Reshaped) -> Vec<Vec<Point3>> {
    let (n_rows, n_cols) = reshaped.grid.shape();
    let mut lines = Vec::new();
    for row in 0..n_rows {
        lines.extend(row_runs(reshaped, row));
    }
    for col in 0..n_cols {
        lines.extend(column_runs(reshaped, col));
    }
    lines
}

fn require_measurements(reshaped: &Reshaped) -> Result<()> {
    if reshaped.grid.values().next().is_none() {
        return Err(BenchError::Render("grid has no measurements".to_string()));
    }
    Ok(())
}

/// Render a reshaped grid as a 3D wireframe chart
pub fn render_wireframe(
    reshaped: &Reshaped,
    caption: &str,
    path: &Path,
    width: u32,
    height: u32,
) -> Result<()> {
    require_measurements(reshaped)?;

    let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 40))
        .margin(20)
        .build_cartesian_3d(
            axis_range(reshaped.axis1.iter().copied()),
            axis_range(reshaped.grid.values()),
            axis_range(reshaped.axis2.iter().copied()),
        )
        .map_err(render_err)?;

    chart.with_projection(|mut pb| {
        pb.pitch = 0.35;
        pb.yaw = 0.8;
        pb.scale = 0.85;
        pb.into_matrix()
    });

    chart
        .configure_axes()
        .x_labels(10)
        .y_labels(10)
        .z_labels(10)
        .label_style(("sans-serif", 14))
        .draw()
        .map_err(render_err)?;

    for line in wireframe_polylines(reshaped) {
        chart
            .draw_series(LineSeries::new(line, &BLUE))
            .map_err(render_err)?;
    }

    root.present().map_err(render_err)?;
    Ok(())
}

/// Render measured scaling groups against a replicated sequential baseline.
///
/// `measured` holds the parallel observations (axis1 = log10 problem size,
/// axis2 = worker count); each axis1 column becomes one labeled line across
/// worker counts. `baseline` is the sequential series broadcast over the
/// same worker axis, drawn as a light wireframe underneath.
pub fn render_scaling(
    measured: &Reshaped,
    baseline: &Reshaped,
    caption: &str,
    path: &Path,
    width: u32,
    height: u32,
) -> Result<()> {
    require_measurements(measured)?;

    let x_range = axis_range(
        measured
            .axis1
            .iter()
            .chain(baseline.axis1.iter())
            .copied(),
    );
    let y_range = axis_range(measured.grid.values().chain(baseline.grid.values()));
    let z_range = axis_range(
        measured
            .axis2
            .iter()
            .chain(baseline.axis2.iter())
            .copied(),
    );

    let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 40))
        .margin(20)
        .build_cartesian_3d(x_range, y_range, z_range)
        .map_err(render_err)?;

    chart.with_projection(|mut pb| {
        pb.pitch = 0.35;
        pb.yaw = 0.8;
        pb.scale = 0.85;
        pb.into_matrix()
    });

    chart
        .configure_axes()
        .x_labels(10)
        .y_labels(10)
        .z_labels(10)
        .label_style(("sans-serif", 14))
        .draw()
        .map_err(render_err)?;

    // Baseline wireframe first so measured lines draw on top of it
    let baseline_style = BASELINE_COLOR.mix(0.6);
    let mut baseline_labeled = false;
    for line in wireframe_polylines(baseline) {
        let annotation = chart
            .draw_series(LineSeries::new(line, &baseline_style))
            .map_err(render_err)?;
        if !baseline_labeled {
            annotation
                .label("Sequential (replicated)")
                .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BASELINE_COLOR));
            baseline_labeled = true;
        }
    }

    for (col, &log_n) in measured.axis1.iter().enumerate() {
        let color = GROUP_COLORS[col % GROUP_COLORS.len()];
        let mut labeled = false;
        for run in column_runs(measured, col) {
            let annotation = chart
                .draw_series(LineSeries::new(run.clone(), &color))
                .map_err(render_err)?;
            if !labeled {
                annotation
                    .label(format!("Parallel, log n = {:.2}", log_n))
                    .legend(move |(x, y)| {
                        PathElement::new(vec![(x, y), (x + 20, y)], color)
                    });
                labeled = true;
            }

            chart
                .draw_series(
                    run.iter()
                        .map(|&point| Circle::new(point, 3, color.filled())),
                )
                .map_err(render_err)?;
        }
    }

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    Ok(())
}
