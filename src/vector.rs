//! Named data series
//!
//! This module implements [`NamedVector`], the one-dimensional building block
//! of the toolkit, together with the [`Float`] trait bound shared by every
//! generic algorithm.

use approx::AbsDiffEq;
use ndarray::{Array1, NdFloat};
use num_traits::{FromPrimitive, NumCast, Signed};

use std::fmt;
use std::iter::Sum;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Floating point numbers
///
/// This trait bound multiplexes to the most common assumptions on floating
/// point numbers and implements them for 32bit and 64bit floating points.
/// All vectors, metrics and solvers in this crate are generic over it.
pub trait Float:
    NdFloat + FromPrimitive + Default + Signed + Sum + AbsDiffEq<Epsilon = Self>
{
    fn cast<T: NumCast>(x: T) -> Self {
        NumCast::from(x).unwrap()
    }
}

impl Float for f32 {}
impl Float for f64 {}

/// A named, immutable series of floating point values
///
/// A `NamedVector` couples a human readable name to a dense data column. The
/// name travels with the data through splitting, fitting and prediction, so
/// error messages and fitted coefficients always identify the series they
/// refer to. Both fields are set at construction and never mutated
/// afterwards.
///
/// An empty vector is representable; operations that need data reject it
/// with [`Error::EmptyVector`] instead of producing NaN.
///
/// # Example
///
/// ```
/// use rekta::NamedVector;
///
/// let age = NamedVector::new("age", vec![21.0, 34.0, 55.0]);
/// assert_eq!(age.name(), "age");
/// assert_eq!(age.len(), 3);
/// ```
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct NamedVector<F> {
    name: String,
    data: Array1<F>,
}

impl<F: Float> NamedVector<F> {
    /// Create a new named vector from anything convertible into an `Array1`
    pub fn new(name: impl Into<String>, data: impl Into<Array1<F>>) -> NamedVector<F> {
        NamedVector {
            name: name.into(),
            data: data.into(),
        }
    }

    /// The name of the series
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The underlying data column
    pub fn data(&self) -> &Array1<F> {
        &self.data
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the vector holds no entries
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Arithmetic mean of the entries
    ///
    /// Fails with [`Error::EmptyVector`] when there is nothing to average.
    pub fn mean(&self) -> Result<F> {
        self.data
            .mean()
            .ok_or_else(|| Error::EmptyVector(self.name.clone()))
    }

    /// Inner product with another vector of the same length
    ///
    /// The length check runs before any arithmetic; mismatched inputs fail
    /// with [`Error::LengthMismatch`].
    pub fn dot(&self, other: &NamedVector<F>) -> Result<F> {
        if self.len() != other.len() {
            return Err(Error::LengthMismatch(self.len(), other.len()));
        }

        Ok(self.data.dot(&other.data))
    }
}

impl<F: Float> fmt::Display for NamedVector<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.data)
    }
}
