//! Closed form least squares for a single predictor

use ndarray::array;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use rekta::traits::Fit;
use rekta::validation::{check_equal_length, check_not_empty};
use rekta::{Float, NamedVector};

use crate::error::{LinearError, Result};
use crate::model::FittedLinearRegression;

/// An ordinary least squares regression model with a single predictor
///
/// The slope and intercept come from the closed form: the slope is the
/// covariance of predictor and target over the variance of the predictor,
/// the intercept re-centers the line through the means. A constant predictor
/// has no variance to regress on and fails with
/// [`ZeroVariance`](rekta::Error::ZeroVariance).
///
/// # Example
///
/// ```
/// use rekta::prelude::*;
/// use rekta_linear::SimpleLinearRegression;
///
/// let x = NamedVector::new("x", vec![1.0, 2.0, 3.0, 4.0]);
/// let y: NamedVector<f64> = NamedVector::new("y", vec![10.0, 20.0, 30.0, 40.0]);
///
/// let model = SimpleLinearRegression::new().fit(&x, &y)?;
/// assert!((model.coefficient("x").unwrap() - 10.0).abs() < 1e-12);
/// assert!(model.intercept().abs() < 1e-12);
/// # Ok::<(), rekta_linear::LinearError>(())
/// ```
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleLinearRegression {
    with_intercept: bool,
}

impl Default for SimpleLinearRegression {
    fn default() -> Self {
        SimpleLinearRegression::new()
    }
}

impl SimpleLinearRegression {
    /// Create a default simple linear regression model
    ///
    /// By default, an intercept will be fitted. To disable fitting an
    /// intercept, call `.with_intercept(false)` before calling `.fit()`.
    pub fn new() -> SimpleLinearRegression {
        SimpleLinearRegression {
            with_intercept: true,
        }
    }

    /// Configure the model to fit an intercept, defaults to `true`
    ///
    /// Without an intercept the fitted line passes through the origin and
    /// the slope minimizes the residuals of `y = slope * x`.
    pub fn with_intercept(mut self, with_intercept: bool) -> Self {
        self.with_intercept = with_intercept;
        self
    }
}

/// Fit a simple linear regression model from a predictor and a target of one
/// common length
impl<F: Float> Fit<NamedVector<F>, NamedVector<F>, LinearError> for SimpleLinearRegression {
    type Object = FittedLinearRegression<F>;

    fn fit(&self, x: &NamedVector<F>, y: &NamedVector<F>) -> Result<FittedLinearRegression<F>> {
        check_equal_length(x, y)?;
        check_not_empty(x)?;

        let (slope, intercept) = if self.with_intercept {
            let x_mean = x.mean()?;
            let y_mean = y.mean()?;

            let centered_x = x.data().mapv(|v| v - x_mean);
            let centered_y = y.data().mapv(|v| v - y_mean);

            // the 1/n factors of covariance and variance cancel in the ratio
            let sxx = centered_x.dot(&centered_x);
            if sxx == F::zero() {
                return Err(rekta::Error::ZeroVariance(x.name().to_string()).into());
            }
            let slope = centered_x.dot(&centered_y) / sxx;

            (slope, y_mean - slope * x_mean)
        } else {
            let sxx = x.dot(x)?;
            if sxx == F::zero() {
                return Err(rekta::Error::ZeroVariance(x.name().to_string()).into());
            }

            (x.dot(y)? / sxx, F::zero())
        };

        Ok(FittedLinearRegression::new(
            intercept,
            vec![x.name().to_string()],
            array![slope],
            y.name().to_string(),
        ))
    }
}
