//! Uniform random nucleotide sequences.
//!
//! Sequences are simulated exactly as in [`super::markov`], but from a fixed table that
//! gives each of A, C, G, T equal weight with `k = 1`.

use super::markov::{SimulationRequest, simulate_from_table};
use super::rng::{create_rng, next_output_seed, seed_label};
use crate::batch::{BatchSummary, prepare_output_dir};
use crate::errors::Result;
use crate::fasta::write_single_record;
use crate::kmer::FrequencyTable;
use crate::logging::{OperationTimer, format_count};
use crate::metrics::{SimulationMetric, write_metrics};
use anyhow::Context;
use log::{debug, info, warn};
use std::path::PathBuf;

/// Default mean length of a uniform random sequence.
pub const DEFAULT_RANDOM_MEAN_LENGTH: f64 = 1_000_000.0;

/// Configuration for a `random` batch.
#[derive(Debug, Clone)]
pub struct RandomConfig {
    /// Directory to write the sequences to
    pub output_dir: PathBuf,
    /// Number of sequence files to write
    pub num_files: usize,
    /// Per-sequence parameters; `k` must be 1
    pub request: SimulationRequest,
    /// Optional TSV of per-output metrics
    pub metrics: Option<PathBuf>,
}

/// File name of the `index`-th (1-based) uniform random sequence.
#[must_use]
pub fn random_file_name(seed: Option<u64>, index: usize) -> String {
    format!("{}_random_sequence_{index}_default_1mer.fasta", seed_label(seed))
}

/// FASTA record name of the `index`-th uniform random sequence.
#[must_use]
pub fn random_record_name(index: usize) -> String {
    format!("random_sequence_{index}")
}

/// Writes `num_files` uniform random sequences.
///
/// A failure to generate or write one sequence is logged and counted; the rest are
/// still written.
///
/// # Errors
///
/// Fails if the output directory cannot be prepared or the metrics cannot be written.
pub fn run_random(config: &RandomConfig) -> anyhow::Result<BatchSummary> {
    prepare_output_dir(&config.output_dir).context("Failed to prepare output directory")?;

    let table = FrequencyTable::uniform_nucleotides();
    let mut master = create_rng(config.request.seed);
    let mut summary = BatchSummary::default();
    let mut metrics = Vec::new();

    let timer = OperationTimer::new("Generating random sequences");
    for index in 1..=config.num_files {
        let output_seed = next_output_seed(&mut master);
        match write_random_sequence(config, &table, index, output_seed) {
            Ok(metric) => {
                summary.succeeded += 1;
                summary.lengths.push(metric.generated_length);
                summary.outputs.push(config.output_dir.join(&metric.output));
                metrics.push(metric);
            }
            Err(e) => {
                warn!("Failed to write random sequence {index}: {e}");
                summary.failed += 1;
            }
        }
    }
    timer.log_completion(summary.succeeded as u64, "sequences");

    if let Some(metrics_path) = &config.metrics {
        write_metrics(metrics_path, &metrics)?;
        info!("Wrote metrics to {}", metrics_path.display());
    }
    Ok(summary)
}

fn write_random_sequence(
    config: &RandomConfig,
    table: &FrequencyTable,
    index: usize,
    output_seed: u64,
) -> Result<SimulationMetric> {
    let mut rng = create_rng(Some(output_seed));
    let simulated = simulate_from_table(table, &config.request, &mut rng)?;

    let file_name = random_file_name(config.request.seed, index);
    let out_path = config.output_dir.join(&file_name);
    write_single_record(&out_path, &random_record_name(index), &simulated.bases)?;
    debug!("Wrote {} bases to {}", format_count(simulated.bases.len() as u64), out_path.display());

    Ok(SimulationMetric {
        input: "-".to_string(),
        output: file_name,
        replicate: index,
        k: table.k(),
        distinct_kmers: table.len(),
        target_length: simulated.target_length,
        generated_length: simulated.bases.len(),
        dropped_bases: String::new(),
    })
}
