use thiserror::Error;

pub type Result<T> = std::result::Result<T, LinearError>;

/// An error when fitting a linear regression model or predicting from it
#[derive(Error, Debug)]
pub enum LinearError {
    /// The input data violates one of the toolkit invariants
    #[error(transparent)]
    BaseCrate(#[from] rekta::Error),
    /// Fewer observations than parameters to estimate
    #[error("not enough samples: {0} observations for {1} parameters")]
    NotEnoughSamples(usize, usize),
    /// The normal equations have no unique solution, the predictors are
    /// linearly dependent
    #[error("singular design matrix: {0}")]
    Singular(#[from] linfa_linalg::LinalgError),
    /// Prediction input does not line up with the fitted predictors
    #[error("prediction features `{0}` do not match fitted features `{1}`")]
    FeatureMismatch(String, String),
}
