//! DNA alphabet utilities.
//!
//! This module restricts sequences to the canonical nucleotide alphabet before
//! k-mer extraction and keeps track of what was removed.

use std::collections::BTreeMap;

/// The canonical nucleotide alphabet, in sort order.
pub const CANONICAL_BASES: [u8; 4] = [b'A', b'C', b'G', b'T'];

/// Returns true if `base` is one of the upper-case canonical bases A, C, G or T.
#[inline]
#[must_use]
pub const fn is_canonical(base: u8) -> bool {
    matches!(base, b'A' | b'C' | b'G' | b'T')
}

/// A sequence reduced to the canonical alphabet, plus the characters dropped from it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilteredSequence {
    /// Upper-cased bases drawn only from A, C, G, T, in their original order
    pub bases: Vec<u8>,
    /// Count of every removed character, keyed by the (upper-cased) character
    pub dropped: BTreeMap<u8, usize>,
}

/// Renders a dropped-character map as `N:12, R:1`.
#[must_use]
pub fn format_dropped(dropped: &BTreeMap<u8, usize>) -> String {
    dropped.iter().map(|(&c, &n)| format!("{}:{n}", char::from(c))).collect::<Vec<_>>().join(", ")
}

/// Upper-cases `seq` and removes every character outside A, C, G, T.
///
/// # Examples
///
/// ```
/// use genomesim_lib::dna::filter_canonical;
///
/// let filtered = filter_canonical(b"acgtNNRacgt");
/// assert_eq!(filtered.bases, b"ACGTACGT".to_vec());
/// assert_eq!(filtered.dropped[&b'N'], 2);
/// assert_eq!(filtered.dropped[&b'R'], 1);
/// ```
#[must_use]
pub fn filter_canonical(seq: &[u8]) -> FilteredSequence {
    let mut filtered =
        FilteredSequence { bases: Vec::with_capacity(seq.len()), ..Default::default() };
    for &raw in seq {
        let base = raw.to_ascii_uppercase();
        if is_canonical(base) {
            filtered.bases.push(base);
        } else {
            *filtered.dropped.entry(base).or_insert(0) += 1;
        }
    }
    filtered
}
