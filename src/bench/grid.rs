//! Dense grid construction from sparse benchmark observations
//!
//! Wireframe charts need a rectangular value grid, but benchmark tables are
//! sparse and irregularly ordered: not every (parameter, parameter) pair was
//! measured. `reshape` turns an observation table into a dense grid over the
//! sorted distinct values of both parameters, with missing combinations held
//! as `None` so the renderer can leave gaps instead of drawing zeros.

use log::warn;

/// Dense rectangular grid of measurements.
///
/// Indexed by (row, column) where rows follow the second axis domain and
/// columns the first. Cells with no backing observation are `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    cells: Vec<Option<f64>>,
    n_rows: usize,
    n_cols: usize,
}

impl Grid {
    /// Grid shape as (rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.n_cols)
    }

    /// Cell value at (row, column), `None` for missing combinations
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.cells[row * self.n_cols + col]
    }

    /// One grid row as a slice of cells
    pub fn row(&self, row: usize) -> &[Option<f64>] {
        &self.cells[row * self.n_cols..(row + 1) * self.n_cols]
    }

    /// All measured values, skipping missing cells
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.cells.iter().filter_map(|c| *c)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// A grid together with the axis domains it was built over.
///
/// `axis1` maps to grid columns, `axis2` to grid rows, both sorted ascending.
#[derive(Debug, Clone, PartialEq)]
pub struct Reshaped {
    pub grid: Grid,
    pub axis1: Vec<f64>,
    pub axis2: Vec<f64>,
}

/// Sorted distinct values of one independent variable
pub fn sorted_domain(values: impl Iterator<Item = f64>) -> Vec<f64> {
    let mut domain: Vec<f64> = values.collect();
    domain.sort_by(f64::total_cmp);
    domain.dedup();
    domain
}

/// Reshape an observation table into a dense grid.
///
/// The axis domains are derived from the observations themselves (distinct +
/// ascending sort of each selector's values). For each (axis1, axis2)
/// combination the first observation matching both values exactly supplies
/// the cell; combinations with no observation stay `None`. Duplicate pairs
/// keep the first value in table order and are reported with a warning.
///
/// The nested linear search is O(|axis1|·|axis2|·|observations|), which is
/// fine for tables of tens of rows.
pub fn reshape<T>(
    observations: &[T],
    axis1: impl Fn(&T) -> f64,
    axis2: impl Fn(&T) -> f64,
    value: impl Fn(&T) -> f64,
) -> Reshaped {
    let axis1_values = sorted_domain(observations.iter().map(&axis1));
    let axis2_values = sorted_domain(observations.iter().map(&axis2));

    let mut cells = Vec::with_capacity(axis1_values.len() * axis2_values.len());
    for &a2 in &axis2_values {
        for &a1 in &axis1_values {
            let mut matches = observations
                .iter()
                .filter(|obs| axis1(obs) == a1 && axis2(obs) == a2);

            let cell = matches.next().map(|obs| value(obs));

            let duplicates = matches.count();
            if duplicates > 0 {
                warn!(
                    "{} duplicate observation(s) for ({}, {}); keeping the first",
                    duplicates, a1, a2
                );
            }

            cells.push(cell);
        }
    }

    Reshaped {
        grid: Grid {
            cells,
            n_rows: axis2_values.len(),
            n_cols: axis1_values.len(),
        },
        axis1: axis1_values,
        axis2: axis2_values,
    }
}

/// Replicate a fully-covered 1D series across every value of a second axis.
///
/// Used to overlay a sequential baseline across a range of worker counts.
/// The series already covers all of axis1, so no search and no missing
/// handling is needed: every grid row is the series' values.
pub fn broadcast(series: &[(f64, f64)], axis2_values: &[f64]) -> Reshaped {
    let mut cells = Vec::with_capacity(series.len() * axis2_values.len());
    for _ in axis2_values {
        cells.extend(series.iter().map(|&(_, time)| Some(time)));
    }

    Reshaped {
        grid: Grid {
            cells,
            n_rows: axis2_values.len(),
            n_cols: series.len(),
        },
        axis1: series.iter().map(|&(x, _)| x).collect(),
        axis2: axis2_values.to_vec(),
    }
}
