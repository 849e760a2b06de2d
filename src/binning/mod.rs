//! Binning strategies for one-dimensional samples.
//!
//! Every strategy follows the same two-step contract:
//!
//! 1. [`Binner::fit`] a training sample into `k` bins, producing `k + 1`
//!    non-decreasing edges (and, where defined, per-bin training counts).
//! 2. Classify any value, seen at fit time or not, with
//!    [`Discretizer::bin_of`] / [`Discretizer::cut`]. Results always lie in `0..k`.
//!
//! Bin `i` covers `[edge[i], edge[i + 1])`.
//!
//! ## Strategies
//!
//! ### Equal-width
//!
//! Edges sit at a fixed stride of `n / k` positions in the sorted sample.
//! Despite the name this balances bins by population rather than by width
//! in value space; the last bin picks up any remainder.
//!
//! ### Quantile
//!
//! The sorted sample is cut into `k` groups whose sizes differ by at most
//! one, extra points going to the leading groups. Each edge is the last
//! value of its group.
//!
//! ### Centroid
//!
//! One-dimensional k-means (Lloyd iterations from random draws of the
//! sample). The leading edges are the midpoints between neighbouring sorted
//! centroids, followed by the largest centroid, and the last bin is
//! open-ended. Values outside every bin, including the lowest cluster below
//! the first midpoint, fall back to bin 0.
//!
//! | Strategy | Counts | Last edge | Randomness |
//! |----------|--------|-----------|------------|
//! | Equal-width | yes | a sample value | none |
//! | Quantile | yes, `n / k` or `n / k + 1` | sample max | none |
//! | Centroid | no | `+inf` | seedable |
//!
//! ## Usage
//!
//! ```rust
//! use bucketize::binning::{Binner, CentroidBinner, Discretizer, QuantileBinner};
//!
//! let data = vec![43.0, 44.0, 15.0, 30.0, 35.0, 2.0, 18.0, 1.0, 19.0, 36.0];
//!
//! let fit = QuantileBinner::new(3).fit(&data).unwrap();
//! assert_eq!(fit.edges(), &[18.0, 35.0, 44.0, 44.0]);
//! assert_eq!(fit.count(0).unwrap(), 4);
//!
//! let fit = CentroidBinner::new(2).with_seed(42).fit(&data).unwrap();
//! assert_eq!(fit.edges().len(), 3);
//! assert!(fit.cut(&[0.0, 100.0]).iter().all(|&b| b < 2));
//! ```

mod centroid;
mod counts;
mod equal_width;
mod quantile;
mod strategy;
mod traits;
mod util;

pub use centroid::{CentroidBinner, CentroidFit, MAX_ITER};
pub use counts::BinCounts;
pub use equal_width::{EqualWidthBinner, EqualWidthFit};
pub use quantile::{QuantileBinner, QuantileFit};
pub use strategy::Strategy;
pub use traits::{Binner, Discretizer};
