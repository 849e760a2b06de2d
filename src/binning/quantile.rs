//! Equal-frequency (quantile) binning.
//!
//! The sorted sample is split into `k` contiguous groups whose sizes differ
//! by at most one. With `base = n / k` and `extra = n % k`, the first `extra`
//! groups hold `base + 1` points and the rest hold `base`:
//!
//! ```text
//! sorted = [1, 2, 15, 18 | 19, 30, 35 | 36, 43, 44], k = 3
//! sizes  = 4, 3, 3
//! edges  = [18, 35, 44, 44]
//! ```
//!
//! Edge `i < k` is the last value of group `i`; edge `k` is the sample
//! maximum. When `k > n` the trailing groups are empty and repeat the
//! previous edge.

use super::counts::BinCounts;
use super::traits::{Binner, Discretizer};
use super::util::{sorted_sample, write_edges};
use crate::error::Result;
use std::fmt;
use tracing::debug;

/// Quantile binner configuration.
#[derive(Debug, Clone)]
pub struct QuantileBinner {
    /// Number of bins.
    k: usize,
}

/// Edges and training counts produced by [`QuantileBinner::fit`].
#[derive(Debug, Clone, PartialEq)]
pub struct QuantileFit {
    edges: Vec<f64>,
    counts: BinCounts,
}

impl QuantileBinner {
    /// Create a new quantile binner with `k` bins.
    pub fn new(k: usize) -> Self {
        Self { k }
    }

    /// Set the number of bins.
    pub fn with_n_bins(mut self, k: usize) -> Self {
        self.k = k;
        self
    }
}

/// Exclusive end position of each group in the sorted sample.
fn group_ends(n: usize, k: usize) -> Vec<usize> {
    let base = n / k;
    let extra = n % k;
    let mut ends = Vec::with_capacity(k);
    let mut end = 0;
    for i in 0..k {
        end += base + usize::from(i < extra);
        ends.push(end);
    }
    ends
}

impl Binner for QuantileBinner {
    type Fit = QuantileFit;

    fn fit(&self, sample: &[f64]) -> Result<QuantileFit> {
        let sorted = sorted_sample(sample, self.k)?;
        let n = sorted.len();
        let k = self.k;
        debug!(strategy = "quantile", n, k, "fitting bins");

        let ends = group_ends(n, k);

        // An empty group ends where the previous one did, so `end - 1`
        // is the previous group's last value. Group 0 is never empty.
        let mut edges: Vec<f64> = ends.iter().map(|&end| sorted[end - 1]).collect();
        edges.push(sorted[n - 1]);

        // Sweep the sorted sample once, moving the cursor past every group
        // whose end has been reached.
        let mut counts = BinCounts::zeros(k);
        let mut cursor = 0;
        for pos in 0..n {
            while cursor < k - 1 && pos >= ends[cursor] {
                cursor += 1;
            }
            counts.increment(cursor);
        }

        Ok(QuantileFit { edges, counts })
    }

    fn n_bins(&self) -> usize {
        self.k
    }
}

impl QuantileFit {
    /// Per-bin training counts.
    pub fn counts(&self) -> &BinCounts {
        &self.counts
    }

    /// Training count for bin `i`.
    pub fn count(&self, i: usize) -> Result<usize> {
        self.counts.get(i)
    }
}

impl Discretizer for QuantileFit {
    fn edges(&self) -> &[f64] {
        &self.edges
    }

    /// First bin whose closing edge is at or above `value`; values past
    /// the maximum go to the last bin.
    ///
    /// When the training sample has ties that straddle a group boundary,
    /// every copy of the tied value lands in the first bin whose edge
    /// reaches it. Classifying the training sample then does not reproduce
    /// [`QuantileFit::counts`], which keeps the balanced group sizes.
    fn bin_of(&self, value: f64) -> usize {
        let k = self.edges.len() - 1;
        self.edges[..k]
            .iter()
            .position(|&e| value <= e)
            .unwrap_or(k - 1)
    }
}

impl fmt::Display for QuantileFit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_edges(f, &self.edges)?;
        write!(f, "{}", self.counts)
    }
}
