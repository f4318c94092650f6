//! Custom error types for genomesim operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for genomesim operations
pub type Result<T> = std::result::Result<T, SimulationError>;

/// Error type for genomesim operations
#[derive(Error, Debug)]
pub enum SimulationError {
    /// Input sequence or file cannot be used (too short, empty, missing)
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Explanation of the problem
        reason: String,
    },

    /// A probability vector cannot be renormalized
    #[error("Degenerate distribution: {reason}")]
    DegenerateDistribution {
        /// Explanation of the problem
        reason: String,
    },

    /// A perturbed probability went negative under the reject policy
    #[error("Perturbed probability at index {index} is negative ({value})")]
    NegativeProbability {
        /// Position of the offending entry in the probability vector
        index: usize,
        /// The negative value
        value: f64,
    },

    /// Invalid parameter value provided
    #[error("Invalid parameter '{parameter}': {reason}")]
    InvalidParameter {
        /// The parameter name
        parameter: String,
        /// Explanation of why it's invalid
        reason: String,
    },

    /// File format error
    #[error("Invalid {file_type} file '{path}': {reason}")]
    InvalidFileFormat {
        /// Type of file (e.g., "FASTA")
        file_type: String,
        /// Path to the file
        path: String,
        /// Explanation of the problem
        reason: String,
    },

    /// Filesystem failure while creating or writing output
    #[error("I/O failure on '{}': {source}", path.display())]
    Io {
        /// The path being created or written
        path: PathBuf,
        /// The underlying error
        #[source]
        source: std::io::Error,
    },
}

impl SimulationError {
    /// Shorthand for an [`SimulationError::InvalidParameter`].
    pub fn invalid_parameter(parameter: &str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter { parameter: parameter.to_string(), reason: reason.into() }
    }

    /// Wraps an I/O error together with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}
