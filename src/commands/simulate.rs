//! Simulate sequences that preserve the k-mer composition of reference genomes.

use crate::commands::command::Command;
use crate::commands::common::{LengthArgs, OutputArgs, SamplingArgs};
use anyhow::{Result, bail};
use clap::Parser;
use genomesim_lib::simulate::{SimulationConfig, run_simulation};
use genomesim_lib::validation::{validate_kmer_length, validate_monitor_kmers, validate_positive};
use log::info;
use std::path::PathBuf;

/// Simulate Markov-order-k sequences from reference FASTA files.
#[derive(Parser, Debug)]
#[command(
    name = "simulate",
    about = "\x1b[38;5;72m[SIMULATION]\x1b[0m     \x1b[36mSimulate sequences from reference k-mer frequencies\x1b[0m",
    long_about = r#"
Simulate synthetic sequences that preserve the k-mer composition of each reference.

For every FASTA file (.fasta, .fa, .fna) found in the inputs, the first record is
read, restricted to A/C/G/T, and its overlapping k-mers are counted. Each output then:

1. draws a target length from a normal distribution (clamped to at least k),
2. adds uniform noise in [-randomness, randomness] to every k-mer probability and
   renormalizes,
3. draws target_length / k k-mers with replacement and concatenates them.

Outputs are single-record, unwrapped FASTA files named
{stem}_{seed|random}_sim_{replicate}_{k}mer.fasta. With --seed, outputs are
byte-identical across runs.

A reference that cannot be simulated is reported and skipped. The command fails
only if no references are found or every reference fails.
"#
)]
pub struct Simulate {
    /// Input directories and/or FASTA files
    #[arg(short = 'i', long = "input", required = true, num_args = 1..)]
    pub inputs: Vec<PathBuf>,

    /// K-mer length
    #[arg(short = 'k', long = "kmer-length", default_value = "3")]
    pub kmer_length: usize,

    /// Mean simulated size in kilobases (standard deviation 10% of the mean)
    #[arg(long = "sim-size-kb", default_value = "100")]
    pub sim_size_kb: f64,

    /// Number of simulated sequences per reference
    #[arg(short = 'n', long = "replicates", default_value = "1")]
    pub replicates: usize,

    /// K-mers whose reference frequencies are logged for the first 10 references
    #[arg(long = "monitor-kmers", value_delimiter = ',')]
    pub monitor_kmers: Vec<String>,

    #[command(flatten)]
    pub sampling: SamplingArgs,

    #[command(flatten)]
    pub length: LengthArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl Simulate {
    fn to_config(&self) -> Result<SimulationConfig> {
        validate_kmer_length(self.kmer_length)?;
        validate_positive(self.replicates, "replicates")?;
        validate_monitor_kmers(&self.monitor_kmers, self.kmer_length)?;

        let length = self.length.to_length_model(self.sim_size_kb * 1000.0, self.kmer_length)?;
        Ok(SimulationConfig {
            inputs: self.inputs.clone(),
            output_dir: self.output.output.clone(),
            request: self.sampling.to_request(self.kmer_length, length)?,
            replicates: self.replicates,
            monitor_kmers: self.monitor_kmers.clone(),
            metrics: self.output.metrics.clone(),
        })
    }
}

impl Command for Simulate {
    fn execute(&self) -> Result<()> {
        let config = self.to_config()?;

        info!("Starting Simulate");
        for input in &config.inputs {
            info!("  Input: {}", input.display());
        }
        info!("  Output: {}", config.output_dir.display());
        info!("  K-mer length: {}", config.request.k);
        info!(
            "  Target length: {:.0} ± {:.0}",
            config.request.length.mean, config.request.length.stddev
        );
        info!("  Replicates: {}", config.replicates);
        self.sampling.log();
        if !config.monitor_kmers.is_empty() {
            info!("  Monitored k-mers: {}", config.monitor_kmers.join(", "));
        }

        let summary = run_simulation(&config)?;
        summary.log("references");

        if summary.all_failed() {
            bail!("All {} references failed to simulate", summary.failed);
        }
        Ok(())
    }
}
