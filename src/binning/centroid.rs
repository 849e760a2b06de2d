//! Centroid binning: 1-D k-means, then edges between neighbouring centres.
//!
//! # Lloyd's Algorithm
//!
//! 1. Initialize k centroids by drawing k sample values uniformly, with replacement
//! 2. **Assign**: each point → nearest centroid (absolute distance)
//! 3. **Update**: each centroid → mean of its assigned points
//! 4. Repeat until the centroids stop moving, or [`MAX_ITER`] rounds
//!
//! Ties in step 2 go to the lowest centroid index. A centroid that loses all
//! of its points keeps its previous position instead of being re-seeded, so
//! duplicate initial draws simply stay duplicated.
//!
//! # Edges
//!
//! After the loop the centroids are sorted. With sorted centres `c`:
//!
//! ```text
//! edge[i]     = (c[i] + c[i+1]) / 2     for 0 <= i < k-1
//! edge[k-1]   = c[k-1]
//! edge[k]     = +inf
//! ```
//!
//! Midpoints never overflow: two large same-sign centres are halved
//! before they are added.
//!
//! # Classification
//!
//! [`CentroidFit::bin_of`] returns the first `i` with
//! `edge[i] <= value < edge[i + 1]`. Values matching no bin fall back to
//! bin 0; this is not an error. Everything below the first midpoint, i.e.
//! the whole lowest cluster, resolves through that fallback, as do `+inf`
//! and NaN. Cluster `j > 0` therefore maps to bin `j - 1` up to its centre,
//! and the top bin `[c[k-1], +inf)` holds the upper half of the highest
//! cluster.

use super::traits::{Binner, Discretizer};
use super::util::{check_sample, write_edges};
use crate::error::Result;
use rand::prelude::*;
use std::fmt;
use tracing::{debug, trace, warn};

/// Hard upper bound on Lloyd iterations per fit.
pub const MAX_ITER: usize = 1000;

/// Centroid (k-means) binner configuration.
#[derive(Debug, Clone)]
pub struct CentroidBinner {
    /// Number of bins (clusters).
    k: usize,
    /// Largest per-centroid shift still treated as "unchanged".
    tol: f64,
    /// Random seed.
    seed: Option<u64>,
}

/// Result of [`CentroidBinner::fit`].
#[derive(Debug, Clone, PartialEq)]
pub struct CentroidFit {
    edges: Vec<f64>,
    centroids: Vec<f64>,
    iterations: usize,
    converged: bool,
}

impl CentroidBinner {
    /// Create a new centroid binner with `k` bins.
    ///
    /// The default tolerance is `0.0`: iteration stops only when no
    /// centroid moved at all.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            tol: 0.0,
            seed: None,
        }
    }

    /// Set the number of bins.
    pub fn with_n_bins(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    /// Set convergence tolerance (maximum absolute centroid shift).
    ///
    /// A negative tolerance can never be met, so the fit always runs
    /// [`MAX_ITER`] rounds and reports `converged() == false`.
    pub fn with_tol(mut self, tol: f64) -> Self {
        self.tol = tol;
        self
    }

    /// Set random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Fit using a caller-supplied random source for centroid initialization.
    pub fn fit_with_rng<R: Rng>(&self, sample: &[f64], rng: &mut R) -> Result<CentroidFit> {
        check_sample(sample, self.k)?;
        let n = sample.len();
        let k = self.k;
        debug!(strategy = "centroid", n, k, tol = self.tol, "fitting bins");

        let mut centroids: Vec<f64> = (0..k).map(|_| sample[rng.random_range(0..n)]).collect();
        let mut labels = vec![0usize; n];
        let mut iterations = 0;
        let mut converged = false;

        while iterations < MAX_ITER {
            assign(sample, &centroids, &mut labels);
            let updated = update(sample, &labels, &centroids);
            iterations += 1;

            let shift = centroids
                .iter()
                .zip(&updated)
                .map(|(a, b)| (a - b).abs())
                .fold(0.0, f64::max);
            trace!(iteration = iterations, shift, "lloyd step");

            centroids = updated;
            if shift <= self.tol {
                converged = true;
                break;
            }
        }

        if converged {
            debug!(iterations, "centroids converged");
        } else {
            warn!(max_iter = MAX_ITER, "centroid binning hit the iteration cap");
        }

        centroids.sort_by(f64::total_cmp);

        let mut edges = Vec::with_capacity(k + 1);
        edges.extend(centroids.windows(2).map(|w| midpoint(w[0], w[1])));
        edges.push(centroids[k - 1]);
        edges.push(f64::INFINITY);

        Ok(CentroidFit {
            edges,
            centroids,
            iterations,
            converged,
        })
    }
}

/// Nearest centroid per point; ties go to the lower index.
fn assign(sample: &[f64], centroids: &[f64], labels: &mut [usize]) {
    for (label, &x) in labels.iter_mut().zip(sample) {
        let mut best_cluster = 0;
        let mut best_dist = f64::INFINITY;
        for (c, &centroid) in centroids.iter().enumerate() {
            let dist = (x - centroid).abs();
            if dist < best_dist {
                best_dist = dist;
                best_cluster = c;
            }
        }
        *label = best_cluster;
    }
}

/// Mean of each cluster; empty clusters keep their previous centroid.
///
/// A cluster whose plain sum overflows is re-accumulated as `sum(x / m)`,
/// which stays within the range of its points.
fn update(sample: &[f64], labels: &[usize], previous: &[f64]) -> Vec<f64> {
    let k = previous.len();
    let mut sums = vec![0.0f64; k];
    let mut counts = vec![0usize; k];
    for (&x, &label) in sample.iter().zip(labels) {
        sums[label] += x;
        counts[label] += 1;
    }

    (0..k)
        .map(|c| match counts[c] {
            0 => previous[c],
            m if sums[c].is_finite() => sums[c] / m as f64,
            m => {
                let m = m as f64;
                sample
                    .iter()
                    .zip(labels)
                    .filter(|&(_, &label)| label == c)
                    .map(|(&x, _)| x / m)
                    .sum()
            }
        })
        .collect()
}

/// `(a + b) / 2`, halving first when the sum would overflow.
#[inline]
fn midpoint(a: f64, b: f64) -> f64 {
    let sum = a + b;
    if sum.is_finite() {
        sum / 2.0
    } else {
        a / 2.0 + b / 2.0
    }
}

impl Binner for CentroidBinner {
    type Fit = CentroidFit;

    fn fit(&self, sample: &[f64]) -> Result<CentroidFit> {
        match self.seed {
            Some(s) => self.fit_with_rng(sample, &mut StdRng::seed_from_u64(s)),
            None => self.fit_with_rng(sample, &mut rand::rng()),
        }
    }

    fn n_bins(&self) -> usize {
        self.k
    }
}

impl CentroidFit {
    /// Final cluster centres, ascending.
    pub fn centroids(&self) -> &[f64] {
        &self.centroids
    }

    /// Number of assign/update rounds that ran.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// False when the fit stopped at [`MAX_ITER`].
    pub fn converged(&self) -> bool {
        self.converged
    }
}

impl Discretizer for CentroidFit {
    fn edges(&self) -> &[f64] {
        &self.edges
    }

    fn bin_of(&self, value: f64) -> usize {
        self.edges
            .windows(2)
            .position(|w| w[0] <= value && value < w[1])
            // No matching bin: fall back to the first one.
            .unwrap_or(0)
    }
}

impl fmt::Display for CentroidFit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_edges(f, &self.edges)?;
        write!(f, "Centroids:")?;
        for c in &self.centroids {
            write!(f, " {c}")?;
        }
        writeln!(f)
    }
}
