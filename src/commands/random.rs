//! Generate uniform random nucleotide sequences.

use crate::commands::command::Command;
use crate::commands::common::{LengthArgs, OutputArgs, SamplingArgs};
use anyhow::{Result, bail};
use clap::Parser;
use genomesim_lib::simulate::uniform::DEFAULT_RANDOM_MEAN_LENGTH;
use genomesim_lib::simulate::{RandomConfig, run_random};
use genomesim_lib::validation::validate_positive;
use log::info;

/// Generate sequences with equal A, C, G, T frequencies.
#[derive(Parser, Debug)]
#[command(
    name = "random",
    about = "\x1b[38;5;72m[SIMULATION]\x1b[0m     \x1b[36mGenerate uniform random sequences\x1b[0m",
    long_about = r#"
Generate sequences whose bases are drawn from a uniform A/C/G/T distribution.

Each file draws a target length (default mean 1,000,000, standard deviation 10% of
the mean), optionally perturbs the four base probabilities with --randomness, and
writes {seed|random}_random_sequence_{i}_default_1mer.fasta.
"#
)]
pub struct Random {
    /// Number of sequence files to generate
    #[arg(short = 'n', long = "num-files", required = true)]
    pub num_files: usize,

    #[command(flatten)]
    pub sampling: SamplingArgs,

    #[command(flatten)]
    pub length: LengthArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl Random {
    fn to_config(&self) -> Result<RandomConfig> {
        validate_positive(self.num_files, "num-files")?;
        let length = self.length.to_length_model(DEFAULT_RANDOM_MEAN_LENGTH, 1)?;
        Ok(RandomConfig {
            output_dir: self.output.output.clone(),
            num_files: self.num_files,
            request: self.sampling.to_request(1, length)?,
            metrics: self.output.metrics.clone(),
        })
    }
}

impl Command for Random {
    fn execute(&self) -> Result<()> {
        let config = self.to_config()?;

        info!("Starting Random");
        info!("  Output: {}", config.output_dir.display());
        info!("  Files: {}", config.num_files);
        info!(
            "  Target length: {:.0} ± {:.0}",
            config.request.length.mean, config.request.length.stddev
        );
        self.sampling.log();

        let summary = run_random(&config)?;
        summary.log("sequences");

        if summary.all_failed() {
            bail!("All {} random sequences failed", summary.failed);
        }
        Ok(())
    }
}
