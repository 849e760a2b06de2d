use thiserror::Error;

/// Errors returned by the binners in this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Sample slice is empty.
    #[error("empty input")]
    EmptyInput,

    /// Requested bin count is below 1.
    #[error("invalid bin count: requested {requested}, must be at least 1")]
    InvalidBinCount {
        /// Requested number of bins.
        requested: usize,
    },

    /// The sample contains NaN or an infinity.
    #[error("non-finite value {value} at index {index}")]
    NonFiniteValue {
        /// Position of the offending value in the caller's sample.
        index: usize,
        /// The offending value.
        value: f64,
    },

    /// A bin or edge index past the end of a fitted binning.
    #[error("index {index} out of range for length {len}")]
    OutOfRange {
        /// Requested index.
        index: usize,
        /// Number of valid indices.
        len: usize,
    },

    /// A strategy name that does not match any binner.
    #[error("unknown binning strategy: {0}")]
    UnknownStrategy(String),
}

impl Error {
    /// True for errors caused by the training sample or the bin count,
    /// i.e. everything `fit` can reject up front.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Error::EmptyInput | Error::InvalidBinCount { .. } | Error::NonFiniteValue { .. }
        )
    }
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
