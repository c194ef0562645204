//! Deterministic train/test splitting
//!
//! The splitter partitions a feature set and its target into a contiguous
//! train block followed by a contiguous test block. There is no shuffling
//! involved: row `i` of every train output comes from row `i` of the input,
//! so repeated calls on the same input return identical partitions.

use ndarray::s;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::param_guard::ParamGuard;
use crate::validation::{check_equal_length, check_not_empty, check_proportion};
use crate::vector::{Float, NamedVector};

/// The outcome of a train/test split
///
/// Vectors keep their names and their input order; the train partition holds
/// the first `floor(n * proportion)` rows, the test partition the rest.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct SplitResult<F> {
    pub x_train: Vec<NamedVector<F>>,
    pub x_test: Vec<NamedVector<F>>,
    pub y_train: NamedVector<F>,
    pub y_test: NamedVector<F>,
}

/// A verified train/test splitter
///
/// Built through [`TrainTestSplit::params`] followed by
/// [`ParamGuard::check`]; the convenience [`TrainTestSplitParams::split`]
/// verifies and splits in one call.
///
/// # Example
///
/// ```
/// use rekta::prelude::*;
///
/// let x = vec![NamedVector::new("x", vec![1.0, 2.0, 3.0, 4.0, 5.0])];
/// let y = NamedVector::new("y", vec![2.0, 4.0, 6.0, 8.0, 10.0]);
///
/// let split = TrainTestSplit::params(0.5).split(&x, &y)?;
/// assert_eq!(split.y_train.len(), 2);
/// assert_eq!(split.y_test.len(), 3);
/// # Ok::<(), rekta::Error>(())
/// ```
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct TrainTestSplit {
    train_proportion: f64,
}

impl TrainTestSplit {
    /// Create an unchecked parameter set with the given train proportion
    ///
    /// The proportion must lie strictly between 0 and 1 and is validated by
    /// [`ParamGuard::check`] or on the first split.
    pub fn params(train_proportion: f64) -> TrainTestSplitParams {
        TrainTestSplitParams(TrainTestSplit { train_proportion })
    }

    /// The fraction of rows assigned to the train partition
    pub fn train_proportion(&self) -> f64 {
        self.train_proportion
    }

    /// Partition features and target into contiguous train and test blocks
    ///
    /// All features and the target must be non-empty and of one common
    /// length `n`. The cut sits at `floor(n * proportion)` rows; a cut that
    /// would leave either side empty fails with [`Error::DegenerateSplit`].
    pub fn split<F: Float>(
        &self,
        x: &[NamedVector<F>],
        y: &NamedVector<F>,
    ) -> Result<SplitResult<F>> {
        if x.is_empty() {
            return Err(Error::NoFeatures);
        }
        check_not_empty(y)?;
        for feature in x {
            check_not_empty(feature)?;
            check_equal_length(feature, y)?;
        }

        let n = y.len();
        let train_count = (n as f64 * self.train_proportion).floor() as usize;
        if train_count == 0 || train_count >= n {
            return Err(Error::DegenerateSplit {
                rows: n,
                proportion: self.train_proportion,
            });
        }

        let cut = |v: &NamedVector<F>| {
            (
                NamedVector::new(v.name(), v.data().slice(s![..train_count]).to_owned()),
                NamedVector::new(v.name(), v.data().slice(s![train_count..]).to_owned()),
            )
        };

        let (x_train, x_test) = x.iter().map(cut).unzip();
        let (y_train, y_test) = cut(y);

        Ok(SplitResult {
            x_train,
            x_test,
            y_train,
            y_test,
        })
    }
}

/// An unchecked train/test splitter, see [`TrainTestSplit`]
#[derive(Debug, Clone, PartialEq)]
pub struct TrainTestSplitParams(TrainTestSplit);

impl TrainTestSplitParams {
    /// Verify the proportion, then split
    ///
    /// Forwards any parameter error, so callers that never materialize the
    /// checked splitter still get the full validation.
    pub fn split<F: Float>(
        &self,
        x: &[NamedVector<F>],
        y: &NamedVector<F>,
    ) -> Result<SplitResult<F>> {
        self.check_ref()?.split(x, y)
    }
}

impl ParamGuard for TrainTestSplitParams {
    type Checked = TrainTestSplit;
    type Error = Error;

    fn check_ref(&self) -> Result<&Self::Checked> {
        check_proportion(self.0.train_proportion)?;
        Ok(&self.0)
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self.0)
    }
}
