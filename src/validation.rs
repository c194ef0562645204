//! Input checks shared across the toolkit
//!
//! Metrics, the splitter and the solvers all validate their inputs through
//! these functions before touching any numbers. Each check either returns
//! `Ok(())` or the [`Error`](crate::error::Error) variant describing the
//! violation.

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::vector::{Float, NamedVector};

/// Two series that are consumed row by row must have the same length
pub fn check_equal_length<F: Float>(a: &NamedVector<F>, b: &NamedVector<F>) -> Result<()> {
    if a.len() != b.len() {
        return Err(Error::LengthMismatch(a.len(), b.len()));
    }

    Ok(())
}

/// A series that is consumed as data must contain at least one entry
pub fn check_not_empty<F: Float>(v: &NamedVector<F>) -> Result<()> {
    if v.is_empty() {
        return Err(Error::EmptyVector(v.name().to_string()));
    }

    Ok(())
}

/// A proportion must lie strictly inside the open interval (0, 1)
///
/// NaN fails the interval comparison and is rejected like any other
/// out-of-range value.
pub fn check_proportion(proportion: f64) -> Result<()> {
    if !(proportion > 0.0 && proportion < 1.0) {
        return Err(Error::InvalidProportion(proportion));
    }

    Ok(())
}

/// Feature names must be unique within one fit
pub fn check_unique_names<F: Float>(xs: &[NamedVector<F>]) -> Result<()> {
    let mut seen = HashSet::with_capacity(xs.len());
    for x in xs {
        if !seen.insert(x.name()) {
            return Err(Error::DuplicateName(x.name().to_string()));
        }
    }

    Ok(())
}
