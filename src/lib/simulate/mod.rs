//! Sequence simulation.
//!
//! # Modules
//!
//! - [`rng`] - Seeded random number generator utilities
//! - [`length`] - Target length model
//! - [`perturb`] - Bounded perturbation and renormalization of probabilities
//! - [`sampler`] - Weighted k-mer sampling
//! - [`markov`] - Markov-order-k simulation from reference FASTA files
//! - [`uniform`] - Uniform random nucleotide sequences

pub mod length;
pub mod markov;
pub mod perturb;
pub mod rng;
pub mod sampler;
pub mod uniform;

pub use length::TargetLengthModel;
pub use markov::{
    SimulatedSequence, SimulationConfig, SimulationRequest, run_simulation, simulate_from_table,
};
pub use perturb::{NegativeProbabilityPolicy, normalize, perturb};
pub use rng::{create_rng, next_output_seed, seed_label};
pub use sampler::KmerSampler;
pub use uniform::{RandomConfig, run_random};
