use crate::error::{Error, Result};
use std::fmt;

/// Validate the fit arguments and return a sorted private copy of `sample`.
///
/// Checks run in a fixed order: empty sample, bin count, then finiteness.
pub(crate) fn sorted_sample(sample: &[f64], n_bins: usize) -> Result<Vec<f64>> {
    check_sample(sample, n_bins)?;

    let mut sorted = sample.to_vec();
    sorted.sort_by(f64::total_cmp);
    Ok(sorted)
}

pub(crate) fn check_sample(sample: &[f64], n_bins: usize) -> Result<()> {
    if sample.is_empty() {
        return Err(Error::EmptyInput);
    }
    if n_bins < 1 {
        return Err(Error::InvalidBinCount { requested: n_bins });
    }
    if let Some((index, &value)) = sample.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(Error::NonFiniteValue { index, value });
    }
    Ok(())
}

/// Number of edges strictly less than or equal to `value`
/// (the position of the first edge strictly greater than it).
#[inline]
pub(crate) fn upper_bound(edges: &[f64], value: f64) -> usize {
    edges.partition_point(|&e| e <= value)
}

/// Render edges as `Bin Edges: e0 e1 ...` followed by a newline.
pub(crate) fn write_edges(f: &mut fmt::Formatter<'_>, edges: &[f64]) -> fmt::Result {
    write!(f, "Bin Edges:")?;
    for e in edges {
        write!(f, " {e}")?;
    }
    writeln!(f)
}
