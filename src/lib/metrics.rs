//! Per-output run metrics and TSV writing.

use anyhow::{Context, Result};
use fgoxide::io::DelimFile;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One row per sequence file written by `simulate` or `random`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationMetric {
    /// Reference file the sequence was modelled on (`-` for uniform random sequences)
    pub input: String,
    /// Name of the FASTA file written
    pub output: String,
    /// Replicate number, starting at 1
    pub replicate: usize,
    /// The k-mer length
    pub k: usize,
    /// Number of distinct k-mers in the sampling alphabet
    pub distinct_kmers: usize,
    /// Length drawn from the target length model
    pub target_length: usize,
    /// Length actually generated (`target_length / k * k`)
    pub generated_length: usize,
    /// Non-canonical characters removed from the reference, e.g. `N:12, R:1`
    pub dropped_bases: String,
}

/// Write metrics rows to a TSV file with a header line.
///
/// # Errors
/// Returns an error if the file cannot be created or written to
///
/// # Example
/// ```no_run
/// use genomesim_lib::metrics::{SimulationMetric, write_metrics};
///
/// let rows = vec![SimulationMetric { k: 3, ..Default::default() }];
/// write_metrics("metrics.tsv", &rows).unwrap();
/// ```
pub fn write_metrics<P: AsRef<Path>, T: Serialize>(path: P, metrics: &[T]) -> Result<()> {
    let path_ref = path.as_ref();
    DelimFile::default()
        .write_tsv(&path_ref, metrics)
        .with_context(|| format!("Failed to write metrics: {}", path_ref.display()))
}
