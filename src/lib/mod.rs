#![deny(unsafe_code)]
// Clippy lint configuration for CI
// These lints are allowed because:
// - cast_*: Counts, lengths, and probabilities are routinely converted between numeric types
// - missing_*_doc: Documentation improvements tracked separately
// - needless_pass_by_value: Some APIs designed for ownership transfer
// - items_after_statements: Some test code uses late item declarations
#![allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::needless_pass_by_value,
    clippy::items_after_statements,
    clippy::redundant_closure_for_method_calls,
    clippy::uninlined_format_args
)]

//! # genomesim - synthetic genome sequences for machine-learning datasets
//!
//! This library simulates DNA sequences that preserve the k-mer composition of a
//! reference, generates uniform random sequences, and cuts fixed-length fragments
//! out of references.
//!
//! ## Overview
//!
//! ### Core Functionality
//!
//! - **[`kmer`]** - Empirical k-mer frequency tables
//! - **[`simulate`]** - Perturbation, target lengths, weighted k-mer sampling, and the
//!   `simulate` / `random` batch runners
//! - **[`subsample`]** - Random fixed-length fragments from references
//!
//! ### Utilities
//!
//! - **[`fasta`]** - FASTA reading and unwrapped FASTA writing
//! - **[`batch`]** - Reference discovery, output directories, and batch summaries
//! - **[`dna`]** - Canonical nucleotide filtering
//! - **[`validation`]** - Parameter validation with consistent error messages
//! - **[`logging`]** - Formatted counts, durations, and run summaries
//! - **[`metrics`]** - Per-output metrics and TSV writing
//! - **[`errors`]** - Structured error types
//!
//! ## Quick Start
//!
//! ```
//! use genomesim_lib::kmer::FrequencyTable;
//! use genomesim_lib::simulate::{
//!     KmerSampler, NegativeProbabilityPolicy, create_rng, perturb,
//! };
//!
//! let table = FrequencyTable::from_sequence(b"ACGTTGCAACGGTACCAGT", 3).unwrap();
//! let mut rng = create_rng(Some(42));
//!
//! let probs =
//!     perturb(&table.probabilities(), 0.01, NegativeProbabilityPolicy::Clamp, &mut rng).unwrap();
//! let sampler = KmerSampler::new(table.kmers(), &probs).unwrap();
//! let seq = sampler.generate(1000, &mut rng);
//! assert_eq!(seq.len(), 999);
//! ```

pub mod batch;
pub mod dna;
pub mod errors;
pub mod fasta;
pub mod kmer;
pub mod logging;
pub mod metrics;
pub mod simulate;
pub mod subsample;
pub mod validation;

pub use errors::{Result, SimulationError};
