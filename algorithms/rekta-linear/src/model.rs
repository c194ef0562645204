//! A fitted linear regression model

use std::fmt;

use ndarray::{Array1, Array2};

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use rekta::traits::Predict;
use rekta::validation::{check_equal_length, check_not_empty};
use rekta::{Float, NamedVector};

use crate::error::{LinearError, Result};

/// A fitted linear regression model which can be used for making predictions
///
/// The model keeps the predictor names in fit order next to the estimated
/// coefficients, together with the name of the target it was fitted against.
/// Predictions carry the target's name, so they drop straight into the
/// regression metrics against a held out target.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct FittedLinearRegression<F> {
    intercept: F,
    names: Vec<String>,
    params: Array1<F>,
    target_name: String,
}

impl<F: Float> FittedLinearRegression<F> {
    pub(crate) fn new(
        intercept: F,
        names: Vec<String>,
        params: Array1<F>,
        target_name: String,
    ) -> FittedLinearRegression<F> {
        FittedLinearRegression {
            intercept,
            names,
            params,
            target_name,
        }
    }

    /// Get the fitted intercept, 0. if no intercept was fitted
    pub fn intercept(&self) -> F {
        self.intercept
    }

    /// Get the fitted coefficients, one per predictor in fit order
    pub fn params(&self) -> &Array1<F> {
        &self.params
    }

    /// The predictor names, in fit order
    pub fn feature_names(&self) -> &[String] {
        &self.names
    }

    /// The name of the target the model was fitted against
    pub fn target_name(&self) -> &str {
        &self.target_name
    }

    /// Look up the coefficient of one predictor by name
    ///
    /// The intercept is not part of this mapping, it is available through
    /// [`intercept`](Self::intercept).
    pub fn coefficient(&self, name: &str) -> Option<F> {
        self.names
            .iter()
            .position(|known| known == name)
            .map(|index| self.params[index])
    }
}

impl<F: Float> fmt::Display for FittedLinearRegression<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ~ {}", self.target_name, self.intercept)?;
        for (name, coefficient) in self.names.iter().zip(self.params.iter()) {
            write!(f, " + {}*{}", coefficient, name)?;
        }
        Ok(())
    }
}

/// Columns of the prediction matrix, one per feature
///
/// Callers have already checked that the list is non-empty and the lengths
/// agree.
pub(crate) fn feature_matrix<F: Float>(x: &[NamedVector<F>]) -> Array2<F> {
    let mut matrix = Array2::zeros((x[0].len(), x.len()));
    for (j, feature) in x.iter().enumerate() {
        matrix.column_mut(j).assign(feature.data());
    }
    matrix
}

/// Predict from a single predictor vector
///
/// Available on models with exactly one coefficient; the vector's values are
/// mapped through the fitted affine function.
impl<F: Float> Predict<NamedVector<F>, NamedVector<F>, LinearError>
    for FittedLinearRegression<F>
{
    fn predict(&self, x: &NamedVector<F>) -> Result<NamedVector<F>> {
        check_not_empty(x)?;
        if self.params.len() != 1 {
            return Err(LinearError::FeatureMismatch(
                x.name().to_string(),
                self.names.join(", "),
            ));
        }

        let slope = self.params[0];
        let values = x.data().mapv(|v| self.intercept + slope * v);
        Ok(NamedVector::new(self.target_name.as_str(), values))
    }
}

/// Predict from a feature list
///
/// The features must carry the same names in the same order as the fit; a
/// reordered or renamed feature list fails with
/// [`LinearError::FeatureMismatch`] instead of silently pairing values with
/// the wrong coefficients.
impl<F: Float> Predict<[NamedVector<F>], NamedVector<F>, LinearError>
    for FittedLinearRegression<F>
{
    fn predict(&self, x: &[NamedVector<F>]) -> Result<NamedVector<F>> {
        if x.is_empty() {
            return Err(rekta::Error::NoFeatures.into());
        }
        for feature in x {
            check_not_empty(feature)?;
            check_equal_length(feature, &x[0])?;
        }
        if x.len() != self.names.len()
            || x.iter().zip(self.names.iter()).any(|(f, name)| f.name() != name)
        {
            return Err(LinearError::FeatureMismatch(
                x.iter().map(|f| f.name()).collect::<Vec<_>>().join(", "),
                self.names.join(", "),
            ));
        }

        let values = feature_matrix(x).dot(&self.params) + self.intercept;
        Ok(NamedVector::new(self.target_name.as_str(), values))
    }
}
