//! Helper utilities for integration tests.

pub mod fasta_files;

pub use fasta_files::*;
