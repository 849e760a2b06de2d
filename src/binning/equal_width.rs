//! Equal-width (index-stride) binning.
//!
//! Edges are taken from the sorted sample at a fixed index stride
//! `n / k`, so the bins are balanced by **position** in the sorted
//! sample, not by width in value space:
//!
//! ```text
//! sorted = [1, 2, 15, 18, 19, 30, 35, 36, 43, 44], k = 3
//! stride = 10 / 3 = 3
//! edges  = sorted[0], sorted[3], sorted[6], sorted[9] = [1, 18, 35, 44]
//! ```
//!
//! When `k * stride` runs past the end of the sample, the edge is the
//! sample maximum. When `n % k != 0` the last bin absorbs the leftover
//! points, so its population (and width) is not tied to the others.
//!
//! Bin `i` covers `[edge[i], edge[i + 1])`; the last bin is closed on
//! the right and also takes anything above the last edge.

use super::counts::BinCounts;
use super::traits::{Binner, Discretizer};
use super::util::{sorted_sample, upper_bound, write_edges};
use crate::error::Result;
use std::fmt;
use tracing::debug;

/// Equal-width binner configuration.
#[derive(Debug, Clone)]
pub struct EqualWidthBinner {
    /// Number of bins.
    k: usize,
}

/// Edges and training counts produced by [`EqualWidthBinner::fit`].
#[derive(Debug, Clone, PartialEq)]
pub struct EqualWidthFit {
    edges: Vec<f64>,
    counts: BinCounts,
}

impl EqualWidthBinner {
    /// Create a new equal-width binner with `k` bins.
    pub fn new(k: usize) -> Self {
        Self { k }
    }

    /// Set the number of bins.
    pub fn with_n_bins(mut self, k: usize) -> Self {
        self.k = k;
        self
    }
}

impl Binner for EqualWidthBinner {
    type Fit = EqualWidthFit;

    fn fit(&self, sample: &[f64]) -> Result<EqualWidthFit> {
        let sorted = sorted_sample(sample, self.k)?;
        let n = sorted.len();
        let k = self.k;
        debug!(strategy = "equal-width", n, k, "fitting bins");

        let stride = n / k;
        let max = sorted[n - 1];
        let edges: Vec<f64> = (0..=k)
            .map(|i| {
                let index = i * stride;
                if index < n { sorted[index] } else { max }
            })
            .collect();

        let mut counts = BinCounts::zeros(k);
        for &v in &sorted {
            counts.increment(bin_index(&edges, v));
        }

        Ok(EqualWidthFit { edges, counts })
    }

    fn n_bins(&self) -> usize {
        self.k
    }
}

/// Bin `p - 1` where `p` is the upper bound of `value` in `edges`,
/// clamped to `0..k`.
fn bin_index(edges: &[f64], value: f64) -> usize {
    let k = edges.len() - 1;
    upper_bound(edges, value).saturating_sub(1).min(k - 1)
}

impl EqualWidthFit {
    /// Per-bin training counts.
    pub fn counts(&self) -> &BinCounts {
        &self.counts
    }

    /// Training count for bin `i`.
    pub fn count(&self, i: usize) -> Result<usize> {
        self.counts.get(i)
    }
}

impl Discretizer for EqualWidthFit {
    fn edges(&self) -> &[f64] {
        &self.edges
    }

    fn bin_of(&self, value: f64) -> usize {
        bin_index(&self.edges, value)
    }
}

impl fmt::Display for EqualWidthFit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_edges(f, &self.edges)?;
        write!(f, "{}", self.counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn sample() -> Vec<f64> {
        vec![43.0, 44.0, 15.0, 30.0, 35.0, 2.0, 18.0, 1.0, 19.0, 36.0]
    }

    #[test]
    fn test_equal_width_edges() {
        let fit = EqualWidthBinner::new(3).fit(&sample()).unwrap();
        assert_eq!(fit.edges(), &[1.0, 18.0, 35.0, 44.0]);
        assert_eq!(fit.n_bins(), 3);
    }

    #[test]
    fn test_equal_width_counts() {
        let fit = EqualWidthBinner::new(3).fit(&sample()).unwrap();
        assert_eq!(fit.counts().as_slice(), &[3, 3, 4]);
        assert_eq!(fit.counts().total(), 10);
        assert_eq!(fit.count(2), Ok(4));
    }

    #[test]
    fn test_equal_width_single_bin() {
        let fit = EqualWidthBinner::new(1).fit(&sample()).unwrap();
        assert_eq!(fit.edges(), &[1.0, 44.0]);
        assert_eq!(fit.count(0), Ok(10));
    }

    #[test]
    fn test_equal_width_last_edge_below_max() {
        // n = 11, k = 3: stride 3, last edge is sorted[9], max lands in the last bin.
        let data: Vec<f64> = (0..11u32).map(f64::from).collect();
        let fit = EqualWidthBinner::new(3).fit(&data).unwrap();
        assert_eq!(fit.edges(), &[0.0, 3.0, 6.0, 9.0]);
        assert_eq!(fit.counts().as_slice(), &[3, 3, 5]);
    }

    #[test]
    fn test_equal_width_more_bins_than_points() {
        let fit = EqualWidthBinner::new(5).fit(&[2.0, 1.0]).unwrap();
        // stride is 0, every edge is the minimum.
        assert_eq!(fit.edges(), &[1.0; 6]);
        assert_eq!(fit.counts().total(), 2);
        assert_eq!(fit.count(4), Ok(2));
    }

    #[test]
    fn test_equal_width_constant_sample() {
        let fit = EqualWidthBinner::new(2).fit(&[7.0; 4]).unwrap();
        assert_eq!(fit.edges(), &[7.0, 7.0, 7.0]);
        assert_eq!(fit.counts().as_slice(), &[0, 4]);
    }

    #[test]
    fn test_equal_width_bin_of_unseen() {
        let fit = EqualWidthBinner::new(3).fit(&sample()).unwrap();
        assert_eq!(fit.bin_of(-100.0), 0);
        assert_eq!(fit.bin_of(1.0), 0);
        assert_eq!(fit.bin_of(17.5), 0);
        assert_eq!(fit.bin_of(18.0), 1);
        assert_eq!(fit.bin_of(40.0), 2);
        assert_eq!(fit.bin_of(1000.0), 2);
        assert_eq!(fit.cut(&[0.0, 20.0, 50.0]), vec![0, 1, 2]);
    }

    #[test]
    fn test_equal_width_out_of_range() {
        let fit = EqualWidthBinner::new(3).fit(&sample()).unwrap();
        assert_eq!(fit.count(5), Err(Error::OutOfRange { index: 5, len: 3 }));
        assert!(fit.bin_range(3).is_err());
        assert_eq!(fit.bin_range(1), Ok((18.0, 35.0)));
        assert_eq!(fit.edge(3), Ok(44.0));
        assert!(fit.edge(4).is_err());
    }

    #[test]
    fn test_equal_width_invalid_input() {
        assert_eq!(EqualWidthBinner::new(3).fit(&[]), Err(Error::EmptyInput));
        assert_eq!(
            EqualWidthBinner::new(0).fit(&sample()),
            Err(Error::InvalidBinCount { requested: 0 })
        );
    }

    #[test]
    fn test_equal_width_display() {
        let fit = EqualWidthBinner::new(3).fit(&sample()).unwrap();
        let text = fit.to_string();
        assert!(text.starts_with("Bin Edges: 1 18 35 44\n"));
        assert!(text.contains("Bin 2 count: 4"));
    }
}
