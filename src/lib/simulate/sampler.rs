//! Weighted k-mer sampling.
//!
//! Sequences are generated by drawing k-mers independently, with replacement, from a
//! weighted alphabet and concatenating them in draw order.

use crate::errors::{Result, SimulationError};
use rand::{Rng, RngExt};

/// Draws k-mers from a fixed alphabet according to a probability vector.
///
/// Sampling walks a cumulative distribution with one uniform draw per k-mer, in the
/// same way as an empirical histogram. K-mers with zero weight are never drawn, even
/// when rounding puts a draw at the very top of the distribution.
///
/// # Examples
///
/// ```
/// use genomesim_lib::simulate::{KmerSampler, create_rng};
///
/// let kmers = vec![b"ACG".to_vec(), b"TTT".to_vec()];
/// let sampler = KmerSampler::new(&kmers, &[0.5, 0.5]).unwrap();
/// let mut rng = create_rng(Some(42));
///
/// // 10 bases requested, 3 draws of 3 bases made
/// let seq = sampler.generate(10, &mut rng);
/// assert_eq!(seq.len(), 9);
/// ```
#[derive(Debug, Clone)]
pub struct KmerSampler<'a> {
    kmers: &'a [Vec<u8>],
    cdf: Vec<f64>,
    /// Index of the last k-mer with positive weight
    last_drawable: usize,
    k: usize,
}

impl<'a> KmerSampler<'a> {
    /// Builds a sampler over `kmers` with parallel weights `probabilities`.
    ///
    /// The weights need not sum exactly to one; they are used relative to their total.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidParameter`] if the alphabet is empty, the
    /// vectors differ in length, the k-mers differ in length, or any weight is negative
    /// or not finite. Returns [`SimulationError::DegenerateDistribution`] if the
    /// weights sum to zero.
    pub fn new(kmers: &'a [Vec<u8>], probabilities: &[f64]) -> Result<Self> {
        let Some(first) = kmers.first() else {
            return Err(SimulationError::invalid_parameter("kmers", "alphabet is empty"));
        };
        if kmers.len() != probabilities.len() {
            return Err(SimulationError::invalid_parameter(
                "probabilities",
                format!("{} weights for {} k-mers", probabilities.len(), kmers.len()),
            ));
        }
        let k = first.len();
        if k == 0 || kmers.iter().any(|kmer| kmer.len() != k) {
            return Err(SimulationError::invalid_parameter(
                "kmers",
                "all k-mers must share the same non-zero length",
            ));
        }

        let mut cdf = Vec::with_capacity(probabilities.len());
        let mut cumulative = 0.0;
        let mut last_drawable = 0;
        for (i, &p) in probabilities.iter().enumerate() {
            if !p.is_finite() || p < 0.0 {
                return Err(SimulationError::invalid_parameter(
                    "probabilities",
                    format!("weights must be finite and >= 0, got {p}"),
                ));
            }
            if p > 0.0 {
                last_drawable = i;
            }
            cumulative += p;
            cdf.push(cumulative);
        }
        if cumulative <= 0.0 {
            return Err(SimulationError::DegenerateDistribution {
                reason: "k-mer weights sum to zero".to_string(),
            });
        }

        Ok(Self { kmers, cdf, last_drawable, k })
    }

    /// Index of one weighted draw from the alphabet.
    pub fn draw_index(&self, rng: &mut impl Rng) -> usize {
        let total = self.cdf[self.cdf.len() - 1];
        self.index_at(rng.random_range(0.0..total))
    }

    /// Index of the k-mer whose cumulative weight interval contains `u`.
    fn index_at(&self, u: f64) -> usize {
        self.cdf.partition_point(|&c| c <= u).min(self.last_drawable)
    }

    /// One weighted draw from the alphabet.
    pub fn draw(&self, rng: &mut impl Rng) -> &'a [u8] {
        let kmers: &'a [Vec<u8>] = self.kmers;
        &kmers[self.draw_index(rng)]
    }

    /// Generates `target_length / k` k-mers and concatenates them.
    ///
    /// The result has length `(target_length / k) * k`, so any remainder of the target
    /// that is not a whole k-mer is dropped.
    pub fn generate(&self, target_length: usize, rng: &mut impl Rng) -> Vec<u8> {
        let draws = target_length / self.k;
        let mut seq = Vec::with_capacity(draws * self.k);
        for _ in 0..draws {
            seq.extend_from_slice(self.draw(rng));
        }
        seq
    }
}
