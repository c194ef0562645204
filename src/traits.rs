//! Provide traits for different classes of algorithms
//!

/// Fit a model from a feature set `x` and a target `y`
///
/// The error type is generic so that algorithm crates can surface their own
/// error enums through the common interface.
pub trait Fit<X: ?Sized, Y: ?Sized, E: std::error::Error> {
    /// The fitted object
    type Object;

    fn fit(&self, x: &X, y: &Y) -> Result<Self::Object, E>;
}

/// Predict target values for a set of new observations
pub trait Predict<X: ?Sized, T, E: std::error::Error> {
    fn predict(&self, x: &X) -> Result<T, E>;
}
