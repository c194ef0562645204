use approx::{assert_abs_diff_eq, assert_relative_eq};
use ndarray::Array1;

use rekta::prelude::*;
use rekta_linear::{MultipleLinearRegression, SimpleLinearRegression};

#[test]
fn bmi_alone_explains_part_of_the_progression() {
    let (x, y) = rekta_datasets::diabetes();

    let model = SimpleLinearRegression::new().fit(&x[1], &y).unwrap();

    assert_abs_diff_eq!(model.intercept(), 141.12926309276477, epsilon = 1e-8);
    assert_abs_diff_eq!(
        model.coefficient("bmi").unwrap(),
        351.66360917020086,
        epsilon = 1e-8
    );
}

#[test]
fn age_and_bmi_fit_the_recorded_coefficients() {
    let (x, y) = rekta_datasets::diabetes();

    let model = MultipleLinearRegression::new().fit(x.as_slice(), &y).unwrap();

    assert_relative_eq!(model.intercept(), 145.653177, max_relative = 1e-3);
    assert_relative_eq!(
        model.coefficient("age").unwrap(),
        -684.310177,
        max_relative = 1e-3
    );
    assert_relative_eq!(
        model.coefficient("bmi").unwrap(),
        838.089455,
        max_relative = 1e-3
    );
}

#[test]
fn a_noiseless_line_survives_the_whole_pipeline() {
    let base = Array1::linspace(0.0, 9.0, 10);
    let x = vec![NamedVector::new("x", base.clone())];
    let y = NamedVector::new("y", base.mapv(|v| 3.0 + 2.0 * v));

    let split = TrainTestSplit::params(0.5).split(&x, &y).unwrap();
    assert_eq!(split.y_train.len(), 5);
    assert_eq!(split.y_test.len(), 5);

    let model = MultipleLinearRegression::new()
        .fit(split.x_train.as_slice(), &split.y_train)
        .unwrap();
    let prediction = model.predict(split.x_test.as_slice()).unwrap();

    assert_abs_diff_eq!(
        prediction.mean_absolute_error(&split.y_test).unwrap(),
        0.0,
        epsilon = 1e-9
    );
    assert_abs_diff_eq!(
        prediction.root_mean_squared_error(&split.y_test).unwrap(),
        0.0,
        epsilon = 1e-9
    );
    assert_abs_diff_eq!(prediction.r2(&split.y_test).unwrap(), 1.0, epsilon = 1e-9);
}

#[test]
fn the_diabetes_pipeline_is_reproducible() {
    let (x, y) = rekta_datasets::diabetes();

    let splitter = TrainTestSplit::params(0.6).check().unwrap();
    let split = splitter.split(&x, &y).unwrap();
    assert_eq!(split.y_train.len(), 3);
    assert_eq!(split.y_test.len(), 2);

    let model = MultipleLinearRegression::new()
        .fit(split.x_train.as_slice(), &split.y_train)
        .unwrap();

    let first = model.predict(split.x_test.as_slice()).unwrap();
    let second = model.predict(split.x_test.as_slice()).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.name(), "progression");

    let mae = first.mean_absolute_error(&split.y_test).unwrap();
    let rmse = first.root_mean_squared_error(&split.y_test).unwrap();
    assert!(mae.is_finite());
    assert!(rmse >= mae);
}
