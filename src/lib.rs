//! One-dimensional feature discretization.
//!
//! `bucketize` turns a sample of continuous values into a handful of bins and
//! assigns new values to them afterwards.
//!
//! The primary public API is under [`binning`], which provides:
//! - equal-width binning (index-stride edges over the sorted sample)
//! - quantile binning (equal-population groups)
//! - centroid binning (1-D k-means, edges at centroid midpoints)

#![forbid(unsafe_code)]

pub mod binning;
pub mod error;

pub use binning::{
    BinCounts, Binner, CentroidBinner, CentroidFit, Discretizer, EqualWidthBinner, EqualWidthFit,
    QuantileBinner, QuantileFit, Strategy,
};
pub use error::{Error, Result};
