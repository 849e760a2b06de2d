use crate::error::{Error, Result};

/// Common interface for binning strategies: fit bin edges from a training sample.
pub trait Binner {
    /// The fitted, immutable result of [`Binner::fit`].
    type Fit: Discretizer;

    /// Fit bin edges to `sample`. The caller's slice is never modified.
    fn fit(&self, sample: &[f64]) -> Result<Self::Fit>;

    /// The configured number of bins.
    fn n_bins(&self) -> usize;
}

/// A fitted binning: `k + 1` edges and a rule that maps any value to a bin in `0..k`.
pub trait Discretizer {
    /// The bin edges, `n_bins() + 1` non-decreasing values.
    fn edges(&self) -> &[f64];

    /// Bin index for a single value. Always in `0..n_bins()`.
    fn bin_of(&self, value: f64) -> usize;

    /// Number of bins.
    fn n_bins(&self) -> usize {
        self.edges().len().saturating_sub(1)
    }

    /// Classify every value in `values`, one bin index per input.
    fn cut(&self, values: &[f64]) -> Vec<usize> {
        values.iter().map(|&v| self.bin_of(v)).collect()
    }

    /// Edge `i`, for `i` in `0..=n_bins()`.
    fn edge(&self, i: usize) -> Result<f64> {
        let edges = self.edges();
        edges.get(i).copied().ok_or(Error::OutOfRange {
            index: i,
            len: edges.len(),
        })
    }

    /// The `[lower, upper)` bounds of bin `i`.
    fn bin_range(&self, i: usize) -> Result<(f64, f64)> {
        let n_bins = self.n_bins();
        if i >= n_bins {
            return Err(Error::OutOfRange {
                index: i,
                len: n_bins,
            });
        }
        let edges = self.edges();
        Ok((edges[i], edges[i + 1]))
    }
}
