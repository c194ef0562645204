//! # Ordinary least squares regression for named data series
//!
//! `rekta-linear` provides the linear regression solvers of the `rekta`
//! workspace: [`SimpleLinearRegression`] fits an affine function of a single
//! predictor through its closed form, [`MultipleLinearRegression`] fits any
//! number of predictors by solving the normal equations through a Cholesky
//! factorization. Both produce a [`FittedLinearRegression`], which maps
//! every predictor name to its coefficient and predicts through
//! [`Predict`](rekta::traits::Predict).
//!
//! ## Examples
//!
//! There is a usage example in the `examples/` directory. To run, use:
//!
//! ```bash
//! $ cargo run --example diabetes
//! ```
//!
//! Fitting a line:
//!
//! ```
//! use rekta::prelude::*;
//! use rekta_linear::SimpleLinearRegression;
//!
//! let x = NamedVector::new("x", vec![1.0, 2.0, 3.0, 4.0]);
//! let y = NamedVector::new("y", vec![10.0, 20.0, 30.0, 40.0]);
//!
//! let model = SimpleLinearRegression::new().fit(&x, &y)?;
//! let prediction = model.predict(&NamedVector::new("x", vec![5.0, 6.0]))?;
//!
//! assert_eq!(prediction.len(), 2);
//! # Ok::<(), rekta_linear::LinearError>(())
//! ```

mod error;
mod model;
mod multiple;
mod simple;

pub use error::{LinearError, Result};
pub use model::FittedLinearRegression;
pub use multiple::MultipleLinearRegression;
pub use simple::SimpleLinearRegression;
