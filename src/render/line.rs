//! 2D execution-time comparison chart
//!
//! One line-plus-markers series per strategy (sequential, OpenMP, MPI) over
//! the problem size, both axes log-scaled.

use super::{log_axis_range, render_err};
use crate::bench::data::ComparisonRecord;
use crate::bench::Result;
use plotters::prelude::*;
use std::path::Path;

/// Render the sequential/OpenMP/MPI comparison chart to a PNG file
pub fn render_comparison(
    records: &[ComparisonRecord],
    path: &Path,
    width: u32,
    height: u32,
) -> Result<()> {
    let series: [(&str, RGBColor, Vec<(f64, f64)>); 3] = [
        (
            "Sequential",
            RED,
            records.iter().map(|r| (r.n, r.sequential_time)).collect(),
        ),
        (
            "OpenMP",
            BLUE,
            records.iter().map(|r| (r.n, r.openmp_time)).collect(),
        ),
        (
            "MPI",
            GREEN,
            records.iter().map(|r| (r.n, r.mpi_time)).collect(),
        ),
    ];

    let x_range = log_axis_range(records.iter().map(|r| r.n));
    let y_range = log_axis_range(
        series
            .iter()
            .flat_map(|(_, _, points)| points.iter().map(|&(_, y)| y)),
    );
    // keep the top measurement off the plot border
    let y_range = y_range.start..(y_range.end * 1.1);

    let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Execution Time of Sieve of Eratosthenes",
            ("sans-serif", 30),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range.log_scale(), y_range.log_scale())
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_desc("n")
        .y_desc("Time (seconds)")
        .draw()
        .map_err(render_err)?;

    for (label, color, points) in &series {
        chart
            .draw_series(LineSeries::new(points.clone(), color))
            .map_err(render_err)?
            .label(*label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], *color));

        chart
            .draw_series(
                points
                    .iter()
                    .map(|&(x, y)| Circle::new((x, y), 3, color.filled())),
            )
            .map_err(render_err)?;
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
