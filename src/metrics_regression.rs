//! Common metrics for regression
//!
//! This module implements common comparison metrics for continuous
//! variables. All metrics validate their inputs before any arithmetic: the
//! prediction and the ground truth must have the same length and must not be
//! empty, so no metric ever returns NaN or an infinity for structurally
//! broken input.

use std::ops::Sub;

use crate::error::{Error, Result};
use crate::validation::{check_equal_length, check_not_empty};
use crate::vector::{Float, NamedVector};

/// Regression metrics trait
///
/// The receiver is the prediction, the argument the ground truth. To
/// evaluate the accuracy of a prediction, use
/// ```ignore
/// prediction.r2(&ground_truth)?
/// ```
pub trait Regression<F: Float> {
    /// Maximal absolute error between two continuous variables
    fn max_error(&self, compare_to: &NamedVector<F>) -> Result<F>;
    /// Mean absolute error between two continuous variables
    fn mean_absolute_error(&self, compare_to: &NamedVector<F>) -> Result<F>;
    /// Mean squared error between two continuous variables
    fn mean_squared_error(&self, compare_to: &NamedVector<F>) -> Result<F>;
    /// Square root of the mean squared error, in the units of the target
    fn root_mean_squared_error(&self, compare_to: &NamedVector<F>) -> Result<F>;
    /// Median absolute error between two continuous variables
    fn median_absolute_error(&self, compare_to: &NamedVector<F>) -> Result<F>;
    /// R squared coefficient: the proportion of the variance in the
    /// dependent variable that is predictable from the independent variable
    ///
    /// A constant ground truth has no variance to explain and fails with
    /// [`Error::ZeroVariance`].
    fn r2(&self, compare_to: &NamedVector<F>) -> Result<F>;
    /// Same as R squared, but insensitive to a constant offset in the
    /// residuals
    fn explained_variance(&self, compare_to: &NamedVector<F>) -> Result<F>;
}

fn check_pair<F: Float>(prediction: &NamedVector<F>, truth: &NamedVector<F>) -> Result<()> {
    check_equal_length(prediction, truth)?;
    check_not_empty(truth)
}

impl<F: Float> Regression<F> for NamedVector<F> {
    fn max_error(&self, compare_to: &NamedVector<F>) -> Result<F> {
        check_pair(self, compare_to)?;

        Ok(self
            .data()
            .sub(compare_to.data())
            .iter()
            .map(|x| x.abs())
            .fold(F::neg_infinity(), F::max))
    }

    fn mean_absolute_error(&self, compare_to: &NamedVector<F>) -> Result<F> {
        check_pair(self, compare_to)?;

        let n = F::cast(self.len());
        Ok(self.data().sub(compare_to.data()).mapv(|x| x.abs()).sum() / n)
    }

    fn mean_squared_error(&self, compare_to: &NamedVector<F>) -> Result<F> {
        check_pair(self, compare_to)?;

        let n = F::cast(self.len());
        Ok(self.data().sub(compare_to.data()).mapv(|x| x * x).sum() / n)
    }

    fn root_mean_squared_error(&self, compare_to: &NamedVector<F>) -> Result<F> {
        self.mean_squared_error(compare_to).map(|mse| mse.sqrt())
    }

    fn median_absolute_error(&self, compare_to: &NamedVector<F>) -> Result<F> {
        check_pair(self, compare_to)?;

        let mut abs_error = self.data().sub(compare_to.data()).mapv(|x| x.abs()).to_vec();
        abs_error.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let mid = abs_error.len() / 2;
        if abs_error.len() % 2 == 0 {
            Ok((abs_error[mid - 1] + abs_error[mid]) / F::cast(2.0))
        } else {
            Ok(abs_error[mid])
        }
    }

    // r2 = 1 - sum((pred_i - y_i)^2) / sum((y_i - mean_y)^2)
    // where the mean is taken over `compare_to`, the ground truth
    fn r2(&self, compare_to: &NamedVector<F>) -> Result<F> {
        check_pair(self, compare_to)?;

        let mean = compare_to.mean()?;
        let ss_tot = compare_to
            .data()
            .mapv(|x| (x - mean) * (x - mean))
            .sum();
        if ss_tot == F::zero() {
            return Err(Error::ZeroVariance(compare_to.name().to_string()));
        }

        let ss_res = self.data().sub(compare_to.data()).mapv(|x| x * x).sum();

        Ok(F::one() - ss_res / ss_tot)
    }

    fn explained_variance(&self, compare_to: &NamedVector<F>) -> Result<F> {
        check_pair(self, compare_to)?;

        let mean = compare_to.mean()?;
        let ss_tot = compare_to
            .data()
            .mapv(|x| (x - mean) * (x - mean))
            .sum();
        if ss_tot == F::zero() {
            return Err(Error::ZeroVariance(compare_to.name().to_string()));
        }

        let diff = self.data().sub(compare_to.data());
        let mean_error = diff.sum() / F::cast(diff.len());
        let ss_res = diff.mapv(|x| (x - mean_error) * (x - mean_error)).sum();

        Ok(F::one() - ss_res / ss_tot)
    }
}

#[cfg(test)]
mod tests {
    use super::Regression;
    use crate::error::Error;
    use crate::vector::NamedVector;
    use approx::assert_abs_diff_eq;
    use ndarray::Array1;

    fn named<F: crate::Float>(name: &str, values: Vec<F>) -> NamedVector<F> {
        NamedVector::new(name, values)
    }

    #[test]
    fn same_vector_has_no_error() {
        let a = NamedVector::new("a", Array1::<f32>::ones(100));

        assert_abs_diff_eq!(a.max_error(&a).unwrap(), 0.0f32);
        assert_abs_diff_eq!(a.mean_absolute_error(&a).unwrap(), 0.0f32);
        assert_abs_diff_eq!(a.mean_squared_error(&a).unwrap(), 0.0f32);
        assert_abs_diff_eq!(a.root_mean_squared_error(&a).unwrap(), 0.0f32);
        assert_abs_diff_eq!(a.median_absolute_error(&a).unwrap(), 0.0f32);
    }

    #[test]
    fn perfect_prediction_explains_all_variance() {
        let a = named("a", vec![0.0, 0.1, 0.2, 0.3, 0.4]);

        assert_abs_diff_eq!(a.r2(&a).unwrap(), 1.0);
        assert_abs_diff_eq!(a.explained_variance(&a).unwrap(), 1.0);
    }

    #[test]
    fn max_error() {
        let a = named("a", vec![0.0, 0.1, 0.2, 0.3, 0.4]);
        let b = named("b", vec![0.1, 0.3, 0.2, 0.5, 0.7]);

        assert_abs_diff_eq!(a.max_error(&b).unwrap(), 0.3f32, epsilon = 1e-5);
    }

    #[test]
    fn median_absolute_error() {
        let a = named("a", vec![0.0, 0.1, 0.2, 0.3, 0.4]);
        let b = named("b", vec![0.1, 0.3, 0.2, 0.5, 0.7]);
        // 0.1, 0.2, 0.0, 0.2, 0.3 -> median error is 0.2

        assert_abs_diff_eq!(a.median_absolute_error(&b).unwrap(), 0.2, epsilon = 1e-5);

        // even number of entries -> average of the two middle errors
        let a = named("a", vec![0.0, 0.1, 0.2, 0.4]);
        let b = named("b", vec![0.1, 0.3, 0.2, 0.7]);
        assert_abs_diff_eq!(a.median_absolute_error(&b).unwrap(), 0.15, epsilon = 1e-5);
    }

    #[test]
    fn mean_absolute_error() {
        let pred = named("pred", vec![1.0, 2.0, 3.0, 4.0]);
        let truth = named("truth", vec![5.0, 10.0, 15.0, 20.0]);

        assert_abs_diff_eq!(pred.mean_absolute_error(&truth).unwrap(), 10.0);
    }

    #[test]
    fn mean_squared_error_and_its_root() {
        let pred = named("pred", vec![1.0, 2.0, 3.0, 4.0]);
        let truth = named("truth", vec![5.0, 10.0, 15.0, 20.0]);

        assert_abs_diff_eq!(pred.mean_squared_error(&truth).unwrap(), 120.0);
        assert_abs_diff_eq!(
            pred.root_mean_squared_error(&truth).unwrap(),
            10.954451,
            epsilon = 1e-6
        );
    }

    #[test]
    fn mse_is_the_square_of_rmse() {
        let pred = named("pred", vec![151.0, 75.0, 141.0, 206.0, 135.0]);
        let truth = named("truth", vec![1.0, 2.0, 3.0, 4.0, 5.0]);

        let mse = pred.mean_squared_error(&truth).unwrap();
        let rmse = pred.root_mean_squared_error(&truth).unwrap();
        assert_abs_diff_eq!(mse, 20915.4, epsilon = 1e-9);
        assert_abs_diff_eq!(rmse, 144.62157515391678, epsilon = 1e-12);
        assert_abs_diff_eq!(rmse * rmse, mse, epsilon = 1e-9);
    }

    #[test]
    fn r2_against_observed_values() {
        let truth = named("truth", vec![151.0, 75.0, 141.0, 206.0, 135.0]);
        let pred = named("pred", vec![140.0, 86.0, 120.0, 240.0, 140.0]);

        assert_abs_diff_eq!(
            pred.r2(&truth).unwrap(),
            0.7861208004406095,
            epsilon = 1e-12
        );
    }

    #[test]
    fn r2_can_be_negative() {
        let truth = named("truth", vec![0.0, 0.1, 0.2, 0.3, 0.4]);
        let pred = named("pred", vec![0.1, 0.3, 0.2, 0.5, 0.7]);

        assert_abs_diff_eq!(pred.r2(&truth).unwrap(), -0.8, epsilon = 1e-5);
        assert_abs_diff_eq!(pred.explained_variance(&truth).unwrap(), 0.48, epsilon = 1e-5);
    }

    #[test]
    fn constant_ground_truth_has_no_variance_to_explain() {
        let truth = named("truth", vec![3.0, 3.0, 3.0]);
        let pred = named("pred", vec![1.0, 2.0, 3.0]);

        assert!(matches!(
            pred.r2(&truth),
            Err(Error::ZeroVariance(name)) if name == "truth"
        ));
        assert!(matches!(
            pred.explained_variance(&truth),
            Err(Error::ZeroVariance(_))
        ));
    }

    #[test]
    fn metrics_reject_mismatched_or_empty_input() {
        let short = named("short", vec![1.0, 2.0]);
        let long = named("long", vec![1.0, 2.0, 3.0]);
        let empty = named("empty", Vec::<f64>::new());

        assert!(matches!(
            short.mean_absolute_error(&long),
            Err(Error::LengthMismatch(2, 3))
        ));
        assert!(matches!(
            empty.mean_squared_error(&empty),
            Err(Error::EmptyVector(_))
        ));
        assert!(matches!(empty.r2(&empty), Err(Error::EmptyVector(_))));
    }
}
