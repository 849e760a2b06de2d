//! Runtime choice of binning strategy, e.g. from a config string.

use super::centroid::CentroidBinner;
use super::equal_width::EqualWidthBinner;
use super::quantile::QuantileBinner;
use super::traits::{Binner, Discretizer};
use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Which binner to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// [`EqualWidthBinner`].
    EqualWidth,
    /// [`QuantileBinner`].
    #[default]
    Quantile,
    /// [`CentroidBinner`], optionally seeded.
    Centroid {
        /// Random seed for centroid initialization.
        seed: Option<u64>,
    },
}

impl Strategy {
    /// Fit `k` bins to `sample` with this strategy.
    pub fn fit(&self, sample: &[f64], k: usize) -> Result<Box<dyn Discretizer>> {
        Ok(match *self {
            Strategy::EqualWidth => Box::new(EqualWidthBinner::new(k).fit(sample)?),
            Strategy::Quantile => Box::new(QuantileBinner::new(k).fit(sample)?),
            Strategy::Centroid { seed } => {
                let mut binner = CentroidBinner::new(k);
                if let Some(s) = seed {
                    binner = binner.with_seed(s);
                }
                Box::new(binner.fit(sample)?)
            }
        })
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::EqualWidth => write!(f, "equal-width"),
            Strategy::Quantile => write!(f, "quantile"),
            Strategy::Centroid { .. } => write!(f, "centroid"),
        }
    }
}

impl FromStr for Strategy {
    type Err = Error;

    /// Accepts `equal-width` / `uniform`, `quantile`, `centroid` / `kmeans`
    /// (case-insensitive, `_` and `-` interchangeable). Parsed centroid
    /// strategies are unseeded.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "equal-width" | "uniform" => Ok(Strategy::EqualWidth),
            "quantile" => Ok(Strategy::Quantile),
            "centroid" | "kmeans" | "k-means" => Ok(Strategy::Centroid { seed: None }),
            _ => Err(Error::UnknownStrategy(s.to_string())),
        }
    }
}
