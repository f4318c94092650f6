//! Shared plumbing for batch commands: finding reference files, preparing the output
//! directory, and tallying per-file outcomes.

use crate::errors::{Result, SimulationError};
use crate::fasta::has_fasta_extension;
use crate::logging::{format_count, log_length_summary};
use ahash::{AHashMap, AHashSet};
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Collects the FASTA files named by `inputs`.
///
/// Each input may be a directory (its direct children with a FASTA extension are
/// taken) or a single file (taken as-is). The result is sorted and de-duplicated so
/// that batch order, and therefore seeded output, does not depend on directory
/// listing order.
///
/// # Errors
///
/// * [`SimulationError::InvalidInput`] if an input does not exist or nothing is found
/// * [`SimulationError::Io`] if a directory cannot be listed
pub fn discover_fasta_files(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for input in inputs {
        if input.is_dir() {
            let entries = fs::read_dir(input).map_err(|e| SimulationError::io(input, e))?;
            for entry in entries {
                let path = entry.map_err(|e| SimulationError::io(input, e))?.path();
                if path.is_file() && has_fasta_extension(&path) {
                    files.push(path);
                }
            }
        } else if input.is_file() {
            files.push(input.clone());
        } else {
            return Err(SimulationError::InvalidInput {
                reason: format!("input does not exist: {}", input.display()),
            });
        }
    }

    files.sort();
    files.dedup();

    if files.is_empty() {
        let listed: Vec<String> = inputs.iter().map(|p| p.display().to_string()).collect();
        return Err(SimulationError::InvalidInput {
            reason: format!("no FASTA files (.fasta, .fa, .fna) found in: {}", listed.join(", ")),
        });
    }
    Ok(files)
}

/// Name of the empty file used to check that the output directory accepts writes.
const WRITE_CHECK_FILE: &str = ".genomesim_write_check";

/// Creates the output directory, or warns that an existing one may be overwritten.
///
/// The directory must accept new files; this is checked up front so that an unwritable
/// directory stops the run instead of failing every reference in turn.
///
/// # Errors
///
/// Returns [`SimulationError::Io`] if the directory cannot be created or written to,
/// or if the path exists but is not a directory.
pub fn prepare_output_dir(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        warn!(
            "Output directory {} already exists; existing files may be overwritten",
            dir.display()
        );
        return check_writable(dir);
    }
    if dir.exists() {
        return Err(SimulationError::io(
            dir,
            std::io::Error::new(
                std::io::ErrorKind::AlreadyExists,
                "path exists and is not a directory",
            ),
        ));
    }
    fs::create_dir_all(dir).map_err(|e| SimulationError::io(dir, e))?;
    info!("Created output directory {}", dir.display());
    check_writable(dir)
}

fn check_writable(dir: &Path) -> Result<()> {
    let marker = dir.join(WRITE_CHECK_FILE);
    fs::File::create(&marker)
        .and_then(|_| fs::remove_file(&marker))
        .map_err(|e| SimulationError::io(dir, e))
}

/// The file stem used to name outputs derived from `path`.
#[must_use]
pub fn file_stem(path: &Path) -> String {
    path.file_stem().map_or_else(|| "sequence".to_string(), |s| s.to_string_lossy().into_owned())
}

/// The file name (with extension) of `path`.
#[must_use]
pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| "sequence.fasta".to_string(), |s| s.to_string_lossy().into_owned())
}

/// Labels that name the outputs of each of `files`, unique within the batch.
///
/// Every file starts from `label(path)`. When labels clash, a file whose full name is
/// unique in the batch is labelled by that name instead, so `ref.fa` and `ref.fasta`
/// stay apart. Clashes that remain (the same name under two input directories) get a
/// `_2`, `_3`, ... suffix on the later files, placed before any FASTA extension.
///
/// # Examples
///
/// ```
/// use genomesim_lib::batch::{file_stem, unique_output_labels};
/// use std::path::PathBuf;
///
/// let files = vec![
///     PathBuf::from("a/ref.fa"),
///     PathBuf::from("a/ref.fasta"),
///     PathBuf::from("a/x.fasta"),
///     PathBuf::from("b/x.fasta"),
/// ];
/// let labels = unique_output_labels(&files, file_stem);
/// assert_eq!(labels, vec!["ref.fa", "ref.fasta", "x", "x_2"]);
/// ```
pub fn unique_output_labels(files: &[PathBuf], label: impl Fn(&Path) -> String) -> Vec<String> {
    let names: Vec<String> = files.iter().map(|p| file_name(p)).collect();
    let mut labels: Vec<String> = files.iter().map(|p| label(p)).collect();

    let label_counts = occurrences(&labels);
    let name_counts = occurrences(&names);
    let use_name: Vec<bool> = labels
        .iter()
        .zip(&names)
        .map(|(label, name)| {
            label_counts.get(label.as_str()).is_some_and(|&n| n > 1)
                && name_counts.get(name.as_str()) == Some(&1)
        })
        .collect();
    for ((label, name), use_name) in labels.iter_mut().zip(&names).zip(use_name) {
        if use_name {
            label.clone_from(name);
        }
    }

    let planned: AHashSet<String> = labels.iter().cloned().collect();
    let mut taken: AHashSet<String> = AHashSet::with_capacity(labels.len());
    let mut unique = Vec::with_capacity(labels.len());
    for (label, path) in labels.into_iter().zip(files) {
        let mut candidate = label.clone();
        let mut n = 2;
        while taken.contains(&candidate)
            || (candidate != label && planned.contains(&candidate))
        {
            candidate = with_suffix(&label, n);
            n += 1;
        }
        if candidate != label {
            warn!(
                "{} shares its output name with another input; its outputs are named {candidate}",
                path.display()
            );
        }
        taken.insert(candidate.clone());
        unique.push(candidate);
    }
    unique
}

fn occurrences(values: &[String]) -> AHashMap<&str, usize> {
    let mut counts = AHashMap::with_capacity(values.len());
    for value in values {
        *counts.entry(value.as_str()).or_insert(0) += 1;
    }
    counts
}

/// Inserts `_{n}` before a FASTA extension, or appends it.
fn with_suffix(label: &str, n: usize) -> String {
    let path = Path::new(label);
    match (path.file_stem(), path.extension()) {
        (Some(stem), Some(ext)) if has_fasta_extension(path) => {
            format!("{}_{n}.{}", stem.to_string_lossy(), ext.to_string_lossy())
        }
        _ => format!("{label}_{n}"),
    }
}

/// Outcome counts for one batch run.
#[derive(Debug, Clone, Default)]
pub struct BatchSummary {
    /// Units (input files, or outputs for `random`) that completed
    pub succeeded: usize,
    /// Units that failed and were skipped
    pub failed: usize,
    /// Length of every sequence written
    pub lengths: Vec<usize>,
    /// Output files written
    pub outputs: Vec<PathBuf>,
}

impl BatchSummary {
    /// Total units attempted.
    #[must_use]
    pub fn attempted(&self) -> usize {
        self.succeeded + self.failed
    }

    /// True when units were attempted and every one failed.
    #[must_use]
    pub fn all_failed(&self) -> bool {
        self.succeeded == 0 && self.failed > 0
    }

    /// Logs the success/failure tally and the length summary.
    pub fn log(&self, unit: &str) {
        info!(
            "Processed {} {unit}: {} succeeded, {} failed",
            format_count(self.attempted() as u64),
            format_count(self.succeeded as u64),
            format_count(self.failed as u64)
        );
        info!("Wrote {} output files", format_count(self.outputs.len() as u64));
        log_length_summary(&self.lengths);
    }
}
