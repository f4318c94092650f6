//! Cut fixed-length random fragments from reference genomes.

use crate::commands::command::Command;
use anyhow::{Result, bail};
use clap::Parser;
use genomesim_lib::subsample::{SubsampleConfig, run_subsample};
use genomesim_lib::validation::validate_fragment_params;
use log::info;
use std::path::PathBuf;

/// Subsample reference FASTA files into fixed-length fragments.
#[derive(Parser, Debug)]
#[command(
    name = "subsample",
    about = "\x1b[38;5;30m[SAMPLING]\x1b[0m       \x1b[36mCut random fixed-length fragments from references\x1b[0m",
    long_about = r#"
Cut random fixed-length fragments from each reference FASTA file.

All records of a reference are concatenated. Up to --num-fragments distinct start
positions (never more than length / fragment-length) are drawn and the fragments
are written, in position order, to {output}/{reference file name} as records named
{reference file name}_{i}.

References shorter than the fragment length are reported and skipped.
"#
)]
pub struct Subsample {
    /// Input directories and/or FASTA files
    #[arg(short = 'i', long = "input", required = true, num_args = 1..)]
    pub inputs: Vec<PathBuf>,

    /// Output directory; created if it does not exist
    #[arg(short = 'o', long = "output", required = true)]
    pub output: PathBuf,

    /// Length of each fragment in bases
    #[arg(short = 'l', long = "fragment-length", default_value = "4000")]
    pub fragment_length: usize,

    /// Maximum number of fragments per reference
    #[arg(short = 'n', long = "num-fragments", default_value = "2500")]
    pub num_fragments: usize,

    /// Random seed for reproducibility
    #[arg(long = "seed")]
    pub seed: Option<u64>,
}

impl Subsample {
    fn to_config(&self) -> Result<SubsampleConfig> {
        validate_fragment_params(self.fragment_length, self.num_fragments)?;
        Ok(SubsampleConfig {
            inputs: self.inputs.clone(),
            output_dir: self.output.clone(),
            fragment_length: self.fragment_length,
            num_fragments: self.num_fragments,
            seed: self.seed,
        })
    }
}

impl Command for Subsample {
    fn execute(&self) -> Result<()> {
        let config = self.to_config()?;

        info!("Starting Subsample");
        for input in &config.inputs {
            info!("  Input: {}", input.display());
        }
        info!("  Output: {}", config.output_dir.display());
        info!("  Fragment length: {}", config.fragment_length);
        info!("  Fragments per reference: {}", config.num_fragments);
        if let Some(seed) = config.seed {
            info!("  Random seed: {seed}");
        }

        let summary = run_subsample(&config)?;
        summary.log("references");

        if summary.all_failed() {
            bail!("All {} references failed to subsample", summary.failed);
        }
        Ok(())
    }
}
