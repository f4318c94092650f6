//! CLI command implementations for genomesim.
//!
//! Each submodule implements one subcommand.
//!
//! ## Simulation
//! - [`simulate`] - Simulate sequences from reference k-mer frequencies
//! - [`random`] - Generate uniform random sequences
//!
//! ## Sampling
//! - [`subsample`] - Cut random fixed-length fragments from references

#![allow(
    clippy::cast_precision_loss,
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
    clippy::uninlined_format_args
)]

pub mod command;
pub mod common;
pub mod random;
pub mod simulate;
pub mod subsample;
