use crate::error::{Error, Result};
use std::fmt;

/// Training-time population of each bin.
///
/// Stored densely: every bin in `0..k` has an entry, empty bins hold 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinCounts {
    counts: Vec<usize>,
}

impl BinCounts {
    pub(crate) fn zeros(n_bins: usize) -> Self {
        Self {
            counts: vec![0; n_bins],
        }
    }

    #[inline]
    pub(crate) fn increment(&mut self, bin: usize) {
        self.counts[bin] += 1;
    }

    /// Count for bin `i`, or [`Error::OutOfRange`] when `i >= k`.
    pub fn get(&self, i: usize) -> Result<usize> {
        self.counts.get(i).copied().ok_or(Error::OutOfRange {
            index: i,
            len: self.counts.len(),
        })
    }

    /// Number of bins.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Always false for a fitted binning (k >= 1).
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum over all bins.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Counts in bin order.
    pub fn as_slice(&self) -> &[usize] {
        &self.counts
    }

    /// `(bin, count)` pairs in bin order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.counts.iter().copied().enumerate()
    }
}

impl fmt::Display for BinCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (bin, count) in self.iter() {
            writeln!(f, "Bin {bin} count: {count}")?;
        }
        Ok(())
    }
}
