//! Empirical k-mer frequency tables.
//!
//! A [`FrequencyTable`] is built once per reference sequence by sliding a window of
//! length `k` with stride 1 over the sequence (after restricting it to A/C/G/T) and
//! counting each distinct k-mer. The table's support is exactly the set of observed
//! k-mers; unseen k-mers are never padded in with zero probability.

use crate::dna::{CANONICAL_BASES, filter_canonical};
use crate::errors::{Result, SimulationError};
use ahash::AHashMap;
use std::collections::BTreeMap;

/// Observed k-mer counts and probabilities for a single reference sequence.
///
/// K-mers are kept in order of first occurrence in the reference, so that a seeded
/// sampler walks the same alphabet in the same order on every run.
///
/// # Examples
///
/// ```
/// use genomesim_lib::kmer::FrequencyTable;
///
/// let table = FrequencyTable::from_sequence(b"ACGTACGTACGT", 4).unwrap();
/// assert_eq!(table.len(), 4);
/// assert_eq!(table.total_windows(), 9);
/// assert_eq!(table.count(b"ACGT"), 3);
/// assert!((table.probabilities().iter().sum::<f64>() - 1.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct FrequencyTable {
    k: usize,
    kmers: Vec<Vec<u8>>,
    counts: Vec<u64>,
    index: AHashMap<Vec<u8>, usize>,
    total: u64,
    dropped: BTreeMap<u8, usize>,
}

impl FrequencyTable {
    /// Counts every overlapping k-mer in `seq`.
    ///
    /// The sequence is upper-cased and characters outside A/C/G/T are removed before
    /// windowing; the removed characters are available from [`Self::dropped`].
    ///
    /// # Errors
    ///
    /// * [`SimulationError::InvalidParameter`] if `k` is zero
    /// * [`SimulationError::InvalidInput`] if fewer than `k` canonical bases remain
    pub fn from_sequence(seq: &[u8], k: usize) -> Result<Self> {
        if k == 0 {
            return Err(SimulationError::invalid_parameter("kmer-length", "must be >= 1"));
        }

        let filtered = filter_canonical(seq);
        if filtered.bases.len() < k {
            return Err(SimulationError::InvalidInput {
                reason: format!(
                    "sequence has {} canonical bases, fewer than the k-mer length {k}",
                    filtered.bases.len()
                ),
            });
        }

        let mut kmers: Vec<Vec<u8>> = Vec::new();
        let mut counts: Vec<u64> = Vec::new();
        let mut index: AHashMap<Vec<u8>, usize> = AHashMap::new();

        for window in filtered.bases.windows(k) {
            if let Some(&i) = index.get(window) {
                counts[i] += 1;
            } else {
                index.insert(window.to_vec(), kmers.len());
                kmers.push(window.to_vec());
                counts.push(1);
            }
        }

        let total = (filtered.bases.len() - k + 1) as u64;
        Ok(Self { k, kmers, counts, index, total, dropped: filtered.dropped })
    }

    /// A table over the four nucleotides with equal weight and `k = 1`.
    #[must_use]
    pub fn uniform_nucleotides() -> Self {
        let kmers: Vec<Vec<u8>> = CANONICAL_BASES.iter().map(|&b| vec![b]).collect();
        let index = kmers.iter().enumerate().map(|(i, kmer)| (kmer.clone(), i)).collect();
        Self {
            k: 1,
            kmers,
            counts: vec![1; CANONICAL_BASES.len()],
            index,
            total: CANONICAL_BASES.len() as u64,
            dropped: BTreeMap::new(),
        }
    }

    /// The k-mer length.
    #[must_use]
    pub fn k(&self) -> usize {
        self.k
    }

    /// Number of distinct k-mers observed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.kmers.len()
    }

    /// True if no k-mers were observed. Never true for a table built by this module.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kmers.is_empty()
    }

    /// Number of overlapping windows counted (`len - k + 1` of the filtered sequence).
    #[must_use]
    pub fn total_windows(&self) -> u64 {
        self.total
    }

    /// The observed k-mers, in first-occurrence order.
    #[must_use]
    pub fn kmers(&self) -> &[Vec<u8>] {
        &self.kmers
    }

    /// Raw counts, parallel to [`Self::kmers`].
    #[must_use]
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Characters removed from the reference before counting.
    #[must_use]
    pub fn dropped(&self) -> &BTreeMap<u8, usize> {
        &self.dropped
    }

    /// Probabilities (count / total windows), parallel to [`Self::kmers`].
    #[must_use]
    pub fn probabilities(&self) -> Vec<f64> {
        let total = self.total as f64;
        self.counts.iter().map(|&c| c as f64 / total).collect()
    }

    /// Count for `kmer`, or 0 if it was not observed.
    #[must_use]
    pub fn count(&self, kmer: &[u8]) -> u64 {
        self.index.get(kmer).map_or(0, |&i| self.counts[i])
    }

    /// Probability of `kmer`, or 0.0 if it was not observed.
    #[must_use]
    pub fn frequency(&self, kmer: &[u8]) -> f64 {
        self.count(kmer) as f64 / self.total as f64
    }
}
