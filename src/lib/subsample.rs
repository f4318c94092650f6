//! Fixed-length random fragments cut from reference FASTA files.
//!
//! All records of a reference are concatenated, then up to `num_fragments` distinct
//! start positions are drawn without replacement and the fragments written, in
//! ascending position order, to a multi-record FASTA named after the reference.
//! Records are named `{file_name}_{i}` with `i` counting from 0.

use crate::batch::{
    BatchSummary, discover_fasta_files, file_name, prepare_output_dir, unique_output_labels,
};
use crate::errors::{Result, SimulationError};
use crate::fasta::{FastaWriter, read_concatenated};
use crate::logging::{OperationTimer, format_count};
use crate::simulate::{create_rng, next_output_seed};
use anyhow::Context;
use log::{debug, info, warn};
use rand::Rng;
use std::path::{Path, PathBuf};

/// Configuration for a `subsample` batch.
#[derive(Debug, Clone)]
pub struct SubsampleConfig {
    /// Directories and/or FASTA files to cut fragments from
    pub inputs: Vec<PathBuf>,
    /// Directory to write fragment files to
    pub output_dir: PathBuf,
    /// Length of every fragment
    pub fragment_length: usize,
    /// Maximum fragments per reference
    pub num_fragments: usize,
    /// Master seed; `None` draws from OS entropy
    pub seed: Option<u64>,
}

/// Draws the sorted start positions of fragments of `fragment_length` from a sequence
/// of `sequence_length` bases.
///
/// At most `sequence_length / fragment_length` fragments are drawn, so fragments may
/// overlap but never repeat a start position.
///
/// # Errors
///
/// * [`SimulationError::InvalidParameter`] if `fragment_length` is zero
/// * [`SimulationError::InvalidInput`] if the sequence is shorter than one fragment
///
/// # Examples
///
/// ```
/// use genomesim_lib::simulate::create_rng;
/// use genomesim_lib::subsample::fragment_starts;
///
/// let starts = fragment_starts(100, 10, 50, &mut create_rng(Some(1))).unwrap();
/// assert_eq!(starts.len(), 10);
/// assert!(starts.windows(2).all(|w| w[0] < w[1]));
/// assert!(starts.iter().all(|&s| s <= 90));
/// ```
pub fn fragment_starts(
    sequence_length: usize,
    fragment_length: usize,
    num_fragments: usize,
    rng: &mut impl Rng,
) -> Result<Vec<usize>> {
    if fragment_length == 0 {
        return Err(SimulationError::invalid_parameter("fragment-length", "must be >= 1"));
    }
    if sequence_length < fragment_length {
        return Err(SimulationError::InvalidInput {
            reason: format!(
                "sequence of {sequence_length} bases is shorter than the fragment length \
                 {fragment_length}"
            ),
        });
    }

    let amount = num_fragments.min(sequence_length / fragment_length);
    let positions = sequence_length - fragment_length + 1;
    let mut starts = rand::seq::index::sample(rng, positions, amount).into_vec();
    starts.sort_unstable();
    Ok(starts)
}

/// Runs a `subsample` batch.
///
/// References shorter than the fragment length, or that cannot be read, are logged
/// and counted as failures.
///
/// # Errors
///
/// Fails if no references are found or the output directory cannot be prepared.
pub fn run_subsample(config: &SubsampleConfig) -> anyhow::Result<BatchSummary> {
    let files = discover_fasta_files(&config.inputs).context("Failed to find reference files")?;
    info!("Found {} reference files", format_count(files.len() as u64));
    prepare_output_dir(&config.output_dir).context("Failed to prepare output directory")?;
    let names = unique_output_labels(&files, file_name);

    let mut master = create_rng(config.seed);
    let mut summary = BatchSummary::default();

    let timer = OperationTimer::new("Subsampling references");
    for (path, out_name) in files.iter().zip(&names) {
        let file_seed = next_output_seed(&mut master);
        match subsample_file(config, path, out_name, file_seed) {
            Ok((out_path, n_fragments)) => {
                summary.succeeded += 1;
                summary.lengths.extend(std::iter::repeat_n(config.fragment_length, n_fragments));
                summary.outputs.push(out_path);
            }
            Err(e) => {
                warn!("Skipping {}: {e}", path.display());
                summary.failed += 1;
            }
        }
    }
    timer.log_completion(summary.succeeded as u64, "files");
    Ok(summary)
}

fn subsample_file(
    config: &SubsampleConfig,
    path: &Path,
    out_name: &str,
    file_seed: u64,
) -> Result<(PathBuf, usize)> {
    let sequence = read_concatenated(path)?;
    let mut rng = create_rng(Some(file_seed));
    let starts =
        fragment_starts(sequence.len(), config.fragment_length, config.num_fragments, &mut rng)?;

    let out_path = config.output_dir.join(out_name);
    let mut writer = FastaWriter::new(&out_path)?;
    for (i, &start) in starts.iter().enumerate() {
        let fragment = &sequence[start..start + config.fragment_length];
        writer.write_record(&format!("{out_name}_{i}"), fragment)?;
    }
    writer.finish()?;

    debug!(
        "Wrote {} fragments of {} bases to {}",
        format_count(starts.len() as u64),
        format_count(config.fragment_length as u64),
        out_path.display()
    );
    Ok((out_path, starts.len()))
}
