//! `rekta-datasets` provides a collection of sample data ready to be used in
//! tests and examples.
//!
//! ## Current state
//!
//! Currently the following data is provided:
//!
//! * [`diabetes`] : a five-observation slice of the classic diabetes data
//!   with the `age` and `bmi` predictors and the disease progression target
//!
//! The vectors come back as [`rekta::NamedVector`] values, ready for the
//! splitter, the solvers and the metrics:
//!
//! ```
//! use rekta::prelude::*;
//!
//! let (x, y) = rekta_datasets::diabetes();
//! let split = TrainTestSplit::params(0.5).split(&x, &y)?;
//! assert_eq!(split.y_train.len() + split.y_test.len(), y.len());
//! # Ok::<(), rekta::Error>(())
//! ```

use rekta::NamedVector;

/// A five-observation slice of the diabetes dataset
///
/// Predictors are mean centered and scaled as in the full dataset; the
/// target is the disease progression one year after baseline.
pub fn diabetes() -> (Vec<NamedVector<f64>>, NamedVector<f64>) {
    let age = NamedVector::new(
        "age",
        vec![0.038076, -0.001882, 0.085299, -0.089063, 0.005383],
    );
    let bmi = NamedVector::new(
        "bmi",
        vec![0.061696, -0.051474, 0.044451, -0.011595, -0.036385],
    );
    let progression = NamedVector::new("progression", vec![151.0, 75.0, 141.0, 206.0, 135.0]);

    (vec![age, bmi], progression)
}
