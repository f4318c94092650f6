//! Input validation utilities
//!
//! Common validation functions for command-line parameters with consistent error
//! messages. Failures are reported as structured
//! [`SimulationError`]s.

use crate::errors::{Result, SimulationError};
use std::fmt::Display;

/// Validate that a value is positive (> 0)
///
/// # Errors
/// Returns an error if the value is not positive
///
/// # Example
/// ```
/// use genomesim_lib::validation::validate_positive;
///
/// validate_positive(10, "num-files").unwrap();
/// assert!(validate_positive(0, "num-files").is_err());
/// ```
#[allow(clippy::needless_pass_by_value)]
pub fn validate_positive<T: Ord + Display + Default>(value: T, name: &str) -> Result<()> {
    if value <= T::default() {
        return Err(SimulationError::invalid_parameter(
            name,
            format!("Must be positive (> 0), got: {value}"),
        ));
    }
    Ok(())
}

/// Validate that a floating point value is finite and >= 0
///
/// # Errors
/// Returns an error for negative, NaN, or infinite values
pub fn validate_non_negative(value: f64, name: &str) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(SimulationError::invalid_parameter(
            name,
            format!("Must be a finite value >= 0, got: {value}"),
        ));
    }
    Ok(())
}

/// Validate a k-mer length (must be >= 1)
///
/// # Errors
/// Returns an error if `k` is zero
///
/// # Example
/// ```
/// use genomesim_lib::validation::validate_kmer_length;
///
/// validate_kmer_length(3).unwrap();
/// assert!(validate_kmer_length(0).is_err());
/// ```
pub fn validate_kmer_length(k: usize) -> Result<()> {
    validate_positive(k, "kmer-length")
}

/// Validate the perturbation magnitude (must be finite and >= 0)
///
/// # Errors
/// Returns an error for negative or non-finite magnitudes, or one whose noise range
/// `[-randomness, randomness]` is too wide to represent
pub fn validate_randomness(randomness: f64) -> Result<()> {
    validate_non_negative(randomness, "randomness")?;
    if !(2.0 * randomness).is_finite() {
        return Err(SimulationError::invalid_parameter(
            "randomness",
            format!("{randomness} is too large"),
        ));
    }
    Ok(())
}

/// Validate the target length model parameters
///
/// # Errors
/// Returns an error if either the mean or the standard deviation is negative or not finite
pub fn validate_length_model(mean: f64, stddev: f64) -> Result<()> {
    validate_non_negative(mean, "length-mean")?;
    validate_non_negative(stddev, "length-stddev")
}

/// Validate fragment length and fragment count for subsampling
///
/// # Errors
/// Returns an error if either value is zero
pub fn validate_fragment_params(fragment_length: usize, num_fragments: usize) -> Result<()> {
    validate_positive(fragment_length, "fragment-length")?;
    validate_positive(num_fragments, "num-fragments")
}

/// Validate that every monitored k-mer has length `k` and uses only A, C, G, T
///
/// # Errors
/// Returns an error naming the first k-mer that does not qualify
pub fn validate_monitor_kmers(kmers: &[String], k: usize) -> Result<()> {
    for kmer in kmers {
        let ok = kmer.len() == k
            && kmer.bytes().all(|b| crate::dna::is_canonical(b.to_ascii_uppercase()));
        if !ok {
            return Err(SimulationError::invalid_parameter(
                "monitor-kmers",
                format!("'{kmer}' is not a {k}-mer over A, C, G, T"),
            ));
        }
    }
    Ok(())
}
