//! Error types in rekta
//!
//! Every recoverable failure in the toolkit is a [`Error`] variant. Apart
//! from [`Error::NotYetImplemented`] all variants describe invalid input
//! data or parameters, diagnosed before any arithmetic runs.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone)]
pub enum Error {
    /// Two series that must align row by row have different lengths
    #[error("length mismatch: expected {0} entries, got {1}")]
    LengthMismatch(usize, usize),
    /// An operation that consumes data received a vector without entries
    #[error("vector `{0}` is empty")]
    EmptyVector(String),
    /// A proportion outside the open interval (0, 1)
    #[error("proportion must lie strictly between 0 and 1, got {0}")]
    InvalidProportion(f64),
    /// A train/test partition that would leave one side without rows
    #[error("splitting {rows} rows at proportion {proportion} leaves an empty partition")]
    DegenerateSplit { rows: usize, proportion: f64 },
    /// An operation over features received an empty feature list
    #[error("no feature vectors provided")]
    NoFeatures,
    /// Feature names must be unique within one fit
    #[error("duplicate feature name `{0}`")]
    DuplicateName(String),
    /// A constant series where nonzero spread is required
    #[error("`{0}` has zero variance")]
    ZeroVariance(String),
    /// Recognized operation that the current engine does not support
    #[error("not yet implemented: {0}")]
    NotYetImplemented(&'static str),
}
