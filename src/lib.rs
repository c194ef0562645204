//! `rekta` is a small toolkit for fitting and evaluating regression models
//! over named data series.
//!
//! Everything revolves around the [`NamedVector`]: a one-dimensional column
//! of floating point values that carries its own name. Names travel through
//! train/test splitting, model fitting and prediction, so fitted
//! coefficients and error messages always identify the series they belong
//! to.
//!
//! The crate provides
//!
//! * the [`NamedVector`] data type and the [`Float`] bound shared by all
//!   generic code,
//! * input [`validation`] used by every operation,
//! * regression [`metrics`](crate::metrics) such as mean absolute error,
//!   mean squared error and R squared,
//! * a deterministic, order-preserving train/test
//!   [splitter](crate::model_selection::TrainTestSplit),
//! * the [`Fit`](crate::traits::Fit) and
//!   [`Predict`](crate::traits::Predict) seams implemented by the solver
//!   crates, guarded by [`ParamGuard`] parameter checking.
//!
//! The ordinary least squares solvers live in the `rekta-linear` crate of
//! this workspace.
//!
//! ## Example
//!
//! ```
//! use rekta::prelude::*;
//!
//! let y_pred = NamedVector::new("target", vec![1.0, 2.0, 3.0, 4.0]);
//! let y_test = NamedVector::new("target", vec![5.0, 10.0, 15.0, 20.0]);
//!
//! let mae: f64 = y_pred.mean_absolute_error(&y_test)?;
//! assert!((mae - 10.0).abs() < 1e-12);
//! # Ok::<(), rekta::Error>(())
//! ```

pub mod error;
mod metrics_regression;
pub mod model_selection;
mod param_guard;
pub mod prelude;
pub mod traits;
pub mod validation;
pub mod vector;

pub use error::{Error, Result};
pub use param_guard::ParamGuard;
pub use vector::{Float, NamedVector};

/// Common metrics functions for regression
pub mod metrics {
    pub use crate::metrics_regression::Regression;
}
