//! Shared CLI arguments for the sequence generation commands.

use anyhow::Result;
use clap::Args;
use genomesim_lib::simulate::{NegativeProbabilityPolicy, SimulationRequest, TargetLengthModel};
use genomesim_lib::simulate::length::DEFAULT_STDDEV_FRACTION;
use genomesim_lib::validation::{validate_length_model, validate_randomness};
use log::info;
use std::path::PathBuf;

/// Seed and k-mer perturbation options.
#[derive(Args, Debug, Clone)]
pub struct SamplingArgs {
    /// Random seed for reproducibility; outputs are named "random" when omitted
    #[arg(long = "seed")]
    pub seed: Option<u64>,

    /// Bound of the uniform noise added to each k-mer probability before renormalizing
    #[arg(long = "randomness", default_value = "0.0")]
    pub randomness: f64,

    /// How to treat perturbed probabilities that fall below zero
    #[arg(long = "negative-probabilities", value_enum, default_value = "clamp")]
    pub negative_probabilities: NegativeProbabilityPolicy,
}

impl SamplingArgs {
    /// Build a [`SimulationRequest`] for k-mers of length `k` and the given length model.
    pub fn to_request(&self, k: usize, length: TargetLengthModel) -> Result<SimulationRequest> {
        validate_randomness(self.randomness)?;
        Ok(SimulationRequest {
            k,
            length,
            randomness: self.randomness,
            policy: self.negative_probabilities,
            seed: self.seed,
        })
    }

    /// Log the options in the command header.
    pub fn log(&self) {
        match self.seed {
            Some(seed) => info!("  Random seed: {seed}"),
            None => info!("  Random seed: none (outputs named 'random')"),
        }
        info!("  Randomness: {}", self.randomness);
        info!("  Negative probabilities: {}", self.negative_probabilities);
    }
}

/// Target length distribution options.
#[derive(Args, Debug, Clone, Default)]
pub struct LengthArgs {
    /// Mean target length in bases (overrides the command's default size)
    #[arg(long = "length-mean")]
    pub length_mean: Option<f64>,

    /// Standard deviation of the target length (default: 10% of the mean)
    #[arg(long = "length-stddev")]
    pub length_stddev: Option<f64>,
}

impl LengthArgs {
    /// Convert to a [`TargetLengthModel`], falling back to `default_mean` when no mean
    /// was given. Draws are clamped to at least `min`.
    pub fn to_length_model(&self, default_mean: f64, min: usize) -> Result<TargetLengthModel> {
        let mean = self.length_mean.unwrap_or(default_mean);
        let stddev = self.length_stddev.unwrap_or(mean * DEFAULT_STDDEV_FRACTION);
        validate_length_model(mean, stddev)?;
        Ok(TargetLengthModel::new(mean, stddev, min)?)
    }
}

/// Output location options.
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Output directory; created if it does not exist
    #[arg(short = 'o', long = "output", required = true)]
    pub output: PathBuf,

    /// Optional TSV file with one metrics row per sequence written
    #[arg(long = "metrics")]
    pub metrics: Option<PathBuf>,
}
