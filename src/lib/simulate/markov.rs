//! Markov-order-k sequence simulation from reference FASTA files.
//!
//! For each reference the first record is read and turned into a [`FrequencyTable`].
//! Every output then perturbs the table's probabilities, draws a target length, and
//! samples k-mers until the length is reached.
//!
//! Per-output randomness comes from a private RNG whose seed is drawn from the
//! batch's master RNG. The seeds for every replicate of a file are drawn before the
//! file is read, so a failing reference does not shift the seeds of later files.
//! Within an output the draw order is fixed: target length, then perturbation, then
//! k-mer draws.

use super::length::TargetLengthModel;
use super::perturb::{NegativeProbabilityPolicy, perturb};
use super::rng::{create_rng, next_output_seed, seed_label};
use super::sampler::KmerSampler;
use crate::batch::{
    BatchSummary, discover_fasta_files, file_stem, prepare_output_dir, unique_output_labels,
};
use crate::dna::format_dropped;
use crate::errors::{Result, SimulationError};
use crate::fasta::{read_first_record, write_single_record};
use crate::kmer::FrequencyTable;
use crate::logging::{OperationTimer, format_count, format_percent};
use crate::metrics::{SimulationMetric, write_metrics};
use anyhow::Context;
use log::{debug, info, warn};
use rand::Rng;
use std::path::{Path, PathBuf};

/// Number of references whose monitored k-mer frequencies are logged.
pub const MONITORED_FILE_LIMIT: usize = 10;

/// Parameters for simulating one sequence from a frequency table.
#[derive(Debug, Clone)]
pub struct SimulationRequest {
    /// K-mer length
    pub k: usize,
    /// Target length distribution
    pub length: TargetLengthModel,
    /// Bound of the uniform noise added to each k-mer probability
    pub randomness: f64,
    /// What to do with probabilities pushed below zero
    pub policy: NegativeProbabilityPolicy,
    /// Master seed; `None` draws from OS entropy
    pub seed: Option<u64>,
}

/// A generated sequence and the target length it was generated for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatedSequence {
    /// Length drawn from the target length model
    pub target_length: usize,
    /// Concatenated k-mers, `target_length / k * k` bases long
    pub bases: Vec<u8>,
}

/// Simulates one sequence from `table`.
///
/// Draws, in order, the target length, the perturbation, and the k-mers from `rng`.
///
/// # Errors
///
/// * [`SimulationError::InvalidParameter`] if the table's k differs from the request's
/// * any error from [`perturb`] or [`KmerSampler::new`]
///
/// # Examples
///
/// ```
/// use genomesim_lib::kmer::FrequencyTable;
/// use genomesim_lib::simulate::{
///     NegativeProbabilityPolicy, SimulationRequest, TargetLengthModel, create_rng,
///     simulate_from_table,
/// };
///
/// let table = FrequencyTable::from_sequence(b"ACGTTGCAACGT", 3).unwrap();
/// let request = SimulationRequest {
///     k: 3,
///     length: TargetLengthModel::new(100.0, 0.0, 3).unwrap(),
///     randomness: 0.0,
///     policy: NegativeProbabilityPolicy::Clamp,
///     seed: Some(42),
/// };
/// let simulated = simulate_from_table(&table, &request, &mut create_rng(Some(42))).unwrap();
/// assert_eq!(simulated.target_length, 100);
/// assert_eq!(simulated.bases.len(), 99);
/// ```
pub fn simulate_from_table(
    table: &FrequencyTable,
    request: &SimulationRequest,
    rng: &mut impl Rng,
) -> Result<SimulatedSequence> {
    if table.k() != request.k {
        return Err(SimulationError::invalid_parameter(
            "kmer-length",
            format!("frequency table has k={} but k={} was requested", table.k(), request.k),
        ));
    }
    let target_length = request.length.sample(rng);
    let probabilities = perturb(&table.probabilities(), request.randomness, request.policy, rng)?;
    let sampler = KmerSampler::new(table.kmers(), &probabilities)?;
    let bases = sampler.generate(target_length, rng);
    Ok(SimulatedSequence { target_length, bases })
}

/// Configuration for a `simulate` batch.
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Directories and/or FASTA files to simulate from
    pub inputs: Vec<PathBuf>,
    /// Directory to write simulated FASTA files to
    pub output_dir: PathBuf,
    /// Per-sequence simulation parameters
    pub request: SimulationRequest,
    /// Simulated sequences per reference
    pub replicates: usize,
    /// K-mers whose reference frequency is logged for the first few references
    pub monitor_kmers: Vec<String>,
    /// Optional TSV of per-output metrics
    pub metrics: Option<PathBuf>,
}

/// File name for replicate `replicate` simulated from the reference with stem `stem`.
#[must_use]
pub fn simulated_file_name(stem: &str, seed: Option<u64>, replicate: usize, k: usize) -> String {
    format!("{stem}_{}_sim_{replicate}_{k}mer.fasta", seed_label(seed))
}

/// FASTA record name for replicate `replicate` simulated from `stem`.
#[must_use]
pub fn simulated_record_name(stem: &str, replicate: usize) -> String {
    format!("{stem}_simulated_{replicate}")
}

/// Runs a `simulate` batch.
///
/// Per-file failures are logged and counted in the returned summary; the loop moves
/// on to the next reference.
///
/// # Errors
///
/// Fails if no references are found, the output directory cannot be prepared, or the
/// metrics file cannot be written.
pub fn run_simulation(config: &SimulationConfig) -> anyhow::Result<BatchSummary> {
    let files = discover_fasta_files(&config.inputs).context("Failed to find reference files")?;
    info!("Found {} reference files", format_count(files.len() as u64));
    prepare_output_dir(&config.output_dir).context("Failed to prepare output directory")?;
    let stems = unique_output_labels(&files, file_stem);

    let mut master = create_rng(config.request.seed);
    let mut summary = BatchSummary::default();
    let mut metrics = Vec::new();
    let mut monitored = 0usize;

    let timer = OperationTimer::new("Simulating sequences");
    for (path, stem) in files.iter().zip(&stems) {
        let output_seeds: Vec<u64> =
            (0..config.replicates).map(|_| next_output_seed(&mut master)).collect();

        let table = match load_table(path, config.request.k) {
            Ok(table) => table,
            Err(e) => {
                warn!("Skipping {}: {e}", path.display());
                summary.failed += 1;
                continue;
            }
        };

        if !config.monitor_kmers.is_empty() && monitored < MONITORED_FILE_LIMIT {
            log_monitored_kmers(path, &table, &config.monitor_kmers);
            monitored += 1;
        }

        let outputs = simulate_replicates(config, path, stem, &table, &output_seeds, &mut metrics);
        match outputs {
            Ok(written) => {
                summary.succeeded += 1;
                for (out_path, length) in written {
                    summary.lengths.push(length);
                    summary.outputs.push(out_path);
                }
            }
            Err(e) => {
                warn!("Failed to simulate from {}: {e}", path.display());
                summary.failed += 1;
            }
        }
    }
    timer.log_completion(summary.outputs.len() as u64, "sequences");

    if let Some(metrics_path) = &config.metrics {
        write_metrics(metrics_path, &metrics)?;
        info!("Wrote metrics to {}", metrics_path.display());
    }

    Ok(summary)
}

/// Reads the first record of `path` and counts its k-mers, warning about dropped bases.
fn load_table(path: &Path, k: usize) -> Result<FrequencyTable> {
    let sequence = read_first_record(path)?;
    let table = FrequencyTable::from_sequence(&sequence, k)?;
    if !table.dropped().is_empty() {
        let n_dropped: usize = table.dropped().values().sum();
        warn!(
            "{}: removed {} non-ACGT characters before counting k-mers ({})",
            path.display(),
            format_count(n_dropped as u64),
            format_dropped(table.dropped())
        );
    }
    debug!(
        "{}: {} distinct {k}-mers over {} windows",
        path.display(),
        format_count(table.len() as u64),
        format_count(table.total_windows())
    );
    Ok(table)
}

/// Writes one output per seed and returns the `(path, length)` of each.
///
/// Nothing is added to `metrics` unless every replicate succeeds.
fn simulate_replicates(
    config: &SimulationConfig,
    path: &Path,
    stem: &str,
    table: &FrequencyTable,
    output_seeds: &[u64],
    metrics: &mut Vec<SimulationMetric>,
) -> Result<Vec<(PathBuf, usize)>> {
    let k = config.request.k;
    let mut written = Vec::with_capacity(output_seeds.len());
    let mut rows = Vec::with_capacity(output_seeds.len());

    for (i, &output_seed) in output_seeds.iter().enumerate() {
        let replicate = i + 1;
        let mut rng = create_rng(Some(output_seed));
        let simulated = simulate_from_table(table, &config.request, &mut rng)?;

        let file_name = simulated_file_name(stem, config.request.seed, replicate, k);
        let out_path = config.output_dir.join(&file_name);
        write_single_record(&out_path, &simulated_record_name(stem, replicate), &simulated.bases)?;
        debug!(
            "Wrote {} bases to {}",
            format_count(simulated.bases.len() as u64),
            out_path.display()
        );

        written.push((out_path, simulated.bases.len()));
        rows.push(SimulationMetric {
            input: path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default(),
            output: file_name,
            replicate,
            k,
            distinct_kmers: table.len(),
            target_length: simulated.target_length,
            generated_length: simulated.bases.len(),
            dropped_bases: format_dropped(table.dropped()),
        });
    }
    metrics.extend(rows);
    Ok(written)
}

fn log_monitored_kmers(path: &Path, table: &FrequencyTable, kmers: &[String]) {
    info!("Monitored k-mer frequencies in {}:", path.display());
    for kmer in kmers {
        let upper = kmer.to_ascii_uppercase();
        info!(
            "  {upper}: {} ({} of {} windows)",
            format_percent(table.frequency(upper.as_bytes()), 4),
            format_count(table.count(upper.as_bytes())),
            format_count(table.total_windows())
        );
    }
}
