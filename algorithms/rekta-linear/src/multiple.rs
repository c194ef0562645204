//! Least squares over several named predictors

use ndarray::{Array1, Array2, Axis};

use linfa_linalg::cholesky::Cholesky;
use linfa_linalg::triangular::{SolveTriangularInplace, UPLO};

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use rekta::traits::Fit;
use rekta::validation::{check_equal_length, check_not_empty, check_unique_names};
use rekta::{Float, NamedVector};

use crate::error::{LinearError, Result};
use crate::model::{feature_matrix, FittedLinearRegression};

/// An ordinary least squares regression model over several predictors
///
/// Given predictors `x_1 .. x_k` and a target `y`, the fit minimizes the
/// residual sum of squares of `y = b0 + b1*x_1 + .. + bk*x_k` by solving the
/// normal equations `X^T X b = X^T y`, where `X` is the design matrix with a
/// leading column of ones when an intercept is fitted.
///
/// The normal equations are solved through a Cholesky factorization of
/// `X^T X`. Linearly dependent predictors leave nothing to factorize and
/// fail with [`LinearError::Singular`]; fewer observations than parameters
/// are rejected up front with [`LinearError::NotEnoughSamples`].
///
/// # Example
///
/// ```
/// use rekta::prelude::*;
/// use rekta_linear::MultipleLinearRegression;
///
/// let x = vec![
///     NamedVector::new("a", vec![0.0, 1.0, 0.0]),
///     NamedVector::new("b", vec![0.0, 0.0, 1.0]),
/// ];
/// let y: NamedVector<f64> = NamedVector::new("y", vec![1.0, 3.0, 4.0]);
///
/// let model = MultipleLinearRegression::new().fit(x.as_slice(), &y)?;
/// assert!((model.coefficient("a").unwrap() - 2.0).abs() < 1e-10);
/// assert!((model.coefficient("b").unwrap() - 3.0).abs() < 1e-10);
/// # Ok::<(), rekta_linear::LinearError>(())
/// ```
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipleLinearRegression {
    with_intercept: bool,
}

impl Default for MultipleLinearRegression {
    fn default() -> Self {
        MultipleLinearRegression::new()
    }
}

impl MultipleLinearRegression {
    /// Create a default multiple linear regression model
    ///
    /// By default, an intercept will be fitted. To disable fitting an
    /// intercept, call `.with_intercept(false)` before calling `.fit()`.
    pub fn new() -> MultipleLinearRegression {
        MultipleLinearRegression {
            with_intercept: true,
        }
    }

    /// Configure the model to fit an intercept, defaults to `true`
    pub fn with_intercept(mut self, with_intercept: bool) -> Self {
        self.with_intercept = with_intercept;
        self
    }

    fn design_matrix<F: Float>(&self, x: &[NamedVector<F>]) -> Array2<F> {
        let features = feature_matrix(x);
        if !self.with_intercept {
            return features;
        }

        let n = features.nrows();
        let mut design = Array2::zeros((n, x.len() + 1));
        design.column_mut(0).fill(F::one());
        design.slice_mut(ndarray::s![.., 1..]).assign(&features);
        design
    }
}

/// Solves `a * x = b` for a symmetric positive definite `a` through its
/// Cholesky factor, one lower and one upper triangular solve.
fn solve_spd_system<F: Float>(a: Array2<F>, b: Array1<F>) -> Result<Array1<F>> {
    let factor = a.cholesky()?;
    let mut rhs = b.insert_axis(Axis(1));
    factor.solve_triangular_inplace(&mut rhs, UPLO::Lower)?;
    factor.t().solve_triangular_inplace(&mut rhs, UPLO::Upper)?;
    Ok(rhs.remove_axis(Axis(1)))
}

/// Fit a multiple linear regression model from a feature list and a target
/// of one common length
impl<F: Float> Fit<[NamedVector<F>], NamedVector<F>, LinearError> for MultipleLinearRegression {
    type Object = FittedLinearRegression<F>;

    fn fit(&self, x: &[NamedVector<F>], y: &NamedVector<F>) -> Result<FittedLinearRegression<F>> {
        if x.is_empty() {
            return Err(rekta::Error::NoFeatures.into());
        }
        check_unique_names(x)?;
        check_not_empty(y)?;
        for feature in x {
            check_not_empty(feature)?;
            check_equal_length(feature, y)?;
        }

        let n = y.len();
        let nparams = x.len() + usize::from(self.with_intercept);
        if n < nparams {
            return Err(LinearError::NotEnoughSamples(n, nparams));
        }

        let design = self.design_matrix(x);
        let xtx = design.t().dot(&design);
        let xty = design.t().dot(y.data());
        let beta = solve_spd_system(xtx, xty)?;

        let (intercept, params) = if self.with_intercept {
            (beta[0], beta.slice(ndarray::s![1..]).to_owned())
        } else {
            (F::zero(), beta)
        };

        let names = x.iter().map(|f| f.name().to_string()).collect();
        Ok(FittedLinearRegression::new(
            intercept,
            names,
            params,
            y.name().to_string(),
        ))
    }
}
