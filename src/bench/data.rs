//! Typed benchmark tables
//!
//! Each record type mirrors one of the CSV files the sieve runners emit.
//! Column names are matched exactly (case-sensitive); extra columns in the
//! file are ignored.

use super::error::{BenchError, Result};
use csv::ReaderBuilder;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// One row of `results.txt`: all three strategies timed at one problem size
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ComparisonRecord {
    pub n: f64,
    #[serde(rename = "Sequential_Time")]
    pub sequential_time: f64,
    #[serde(rename = "OpenMP_Time")]
    pub openmp_time: f64,
    #[serde(rename = "MPI_Time")]
    pub mpi_time: f64,
}

/// One row of `results_mpi.csv`
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct MpiScalingRecord {
    pub n: f64,
    pub num_processes: f64,
    #[serde(rename = "Execution_Time")]
    pub execution_time: f64,
}

/// One row of `results_openmp.csv`
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct OpenmpScalingRecord {
    pub n: f64,
    pub num_threads: f64,
    #[serde(rename = "Execution_Time")]
    pub execution_time: f64,
}

/// One row of `results_openmp_segmented.csv`.
///
/// The file also carries an `n` column; it is not part of the chart and is
/// the reason the same (threads, segment) pair can appear more than once.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SegmentedRecord {
    pub num_threads: f64,
    pub segment_size: f64,
    #[serde(rename = "Execution_Time")]
    pub execution_time: f64,
}

/// One row of `results_sequential.csv`, the single-core baseline
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct BaselineRecord {
    pub n: f64,
    #[serde(rename = "Execution_Time")]
    pub execution_time: f64,
}

/// Scaling observation normalized from either MPI or OpenMP records
#[derive(Debug, Clone, Copy)]
pub struct ScalingObservation {
    /// log10 of the problem size
    pub log_n: f64,
    /// Process or thread count
    pub workers: f64,
    /// Measured execution time in seconds
    pub time: f64,
}

impl From<MpiScalingRecord> for ScalingObservation {
    fn from(record: MpiScalingRecord) -> Self {
        ScalingObservation {
            log_n: record.n.log10(),
            workers: record.num_processes,
            time: record.execution_time,
        }
    }
}

impl From<OpenmpScalingRecord> for ScalingObservation {
    fn from(record: OpenmpScalingRecord) -> Self {
        ScalingObservation {
            log_n: record.n.log10(),
            workers: record.num_threads,
            time: record.execution_time,
        }
    }
}

/// Decode a header-prefixed CSV table from any reader
pub fn read_table<T, R>(reader: R) -> std::result::Result<Vec<T>, csv::Error>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut csv_reader = ReaderBuilder::new().has_headers(true).from_reader(reader);

    let mut rows = Vec::new();
    for result in csv_reader.deserialize() {
        rows.push(result?);
    }
    Ok(rows)
}

/// Load a table from a file
pub fn load_table<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<Vec<T>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| BenchError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    read_table(file).map_err(|source| BenchError::Table {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a table and require at least one data row
pub fn load_nonempty<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<Vec<T>> {
    let path = path.as_ref();
    let rows = load_table(path)?;
    if rows.is_empty() {
        return Err(BenchError::EmptyTable(path.to_path_buf()));
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_comparison_table() {
        let csv = "n,Sequential_Time,OpenMP_Time,MPI_Time\n\
                   1000,0.5,0.2,0.3\n\
                   10000,5.1,1.9,2.4\n";
        let rows: Vec<ComparisonRecord> = read_table(csv.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].n, 1000.0);
        assert_eq!(rows[0].sequential_time, 0.5);
        assert_eq!(rows[1].openmp_time, 1.9);
        assert_eq!(rows[1].mpi_time, 2.4);
    }

    #[test]
    fn test_read_segmented_table_ignores_extra_column() {
        // Real files carry n as a leading column the chart does not use
        let csv = "n,num_threads,segment_size,Execution_Time\n\
                   100000,2,1000,1.5\n\
                   100000,4,1000,0.9\n";
        let rows: Vec<SegmentedRecord> = read_table(csv.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].num_threads, 2.0);
        assert_eq!(rows[0].segment_size, 1000.0);
        assert_eq!(rows[1].execution_time, 0.9);
    }

    #[test]
    fn test_read_table_missing_column_fails() {
        let csv = "n,Execution_Time\n1000,0.5\n";
        let result: std::result::Result<Vec<MpiScalingRecord>, csv::Error> =
            read_table(csv.as_bytes());
        assert!(result.is_err());
    }

    #[test]
    fn test_read_table_malformed_value_fails() {
        let csv = "n,Execution_Time\n1000,fast\n";
        let result: std::result::Result<Vec<BaselineRecord>, csv::Error> =
            read_table(csv.as_bytes());
        assert!(result.is_err());
    }

    #[test]
    fn test_scaling_observation_from_mpi() {
        let record = MpiScalingRecord {
            n: 1000.0,
            num_processes: 8.0,
            execution_time: 0.25,
        };
        let observation = ScalingObservation::from(record);
        assert_eq!(observation.log_n, 3.0);
        assert_eq!(observation.workers, 8.0);
        assert_eq!(observation.time, 0.25);
    }

    #[test]
    fn test_load_missing_file() {
        let result: Result<Vec<BaselineRecord>> =
            load_table(std::env::temp_dir().join("bench_plot_does_not_exist.csv"));
        assert!(matches!(result, Err(BenchError::Io { .. })));
    }

    #[test]
    fn test_load_nonempty_rejects_header_only_file() {
        let path = std::env::temp_dir().join(format!(
            "bench_plot_empty_{}.csv",
            std::process::id()
        ));
        std::fs::write(&path, "n,Execution_Time\n").unwrap();
        let result: Result<Vec<BaselineRecord>> = load_nonempty(&path);
        assert!(matches!(result, Err(BenchError::EmptyTable(_))));
        std::fs::remove_file(&path).unwrap();
    }
}
