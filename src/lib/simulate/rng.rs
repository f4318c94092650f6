//! Seeded random number generation for reproducible simulation.
//!
//! A batch run owns one master RNG created from the user's seed. Every output file
//! draws its own `u64` seed from the master, in input order, and then uses a private
//! RNG built from that seed. Given the same seed and inputs, every output is
//! byte-identical across runs.

use rand::rngs::StdRng;
use rand::{Rng, RngExt, SeedableRng};

/// Create a random number generator, optionally seeded for reproducibility.
///
/// # Arguments
///
/// * `seed` - Optional seed value. If `None`, uses OS entropy for randomness.
///
/// # Examples
///
/// ```
/// use genomesim_lib::simulate::create_rng;
///
/// // Reproducible simulation
/// let mut rng1 = create_rng(Some(42));
/// let mut rng2 = create_rng(Some(42));
/// // rng1 and rng2 will produce identical sequences
///
/// // Random simulation (different each run)
/// let mut rng3 = create_rng(None);
/// ```
#[must_use]
pub fn create_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => rand::make_rng(),
    }
}

/// Draws the seed for the next output file from the batch's master RNG.
pub fn next_output_seed(master: &mut impl Rng) -> u64 {
    master.random()
}

/// The seed as it appears in output file names: the number, or `random` when unseeded.
#[must_use]
pub fn seed_label(seed: Option<u64>) -> String {
    seed.map_or_else(|| "random".to_string(), |s| s.to_string())
}
