use rekta::prelude::*;
use rekta_linear::{MultipleLinearRegression, Result};

fn main() -> Result<()> {
    // load the diabetes sample and hold out the last two observations
    let (x, y) = rekta_datasets::diabetes();
    let split = TrainTestSplit::params(0.6).split(&x, &y)?;

    let model = MultipleLinearRegression::new().fit(split.x_train.as_slice(), &split.y_train)?;

    println!("intercept:  {}", model.intercept());
    println!("parameters: {}", model.params());
    println!("model:      {}", model);

    let prediction = model.predict(split.x_test.as_slice())?;
    println!(
        "held out mae:  {}",
        prediction.mean_absolute_error(&split.y_test)?
    );
    println!(
        "held out rmse: {}",
        prediction.root_mean_squared_error(&split.y_test)?
    );

    Ok(())
}
