//! Rekta prelude.
//!
//! This module contains the most used types, type aliases, traits and
//! functions that you can import easily as a group.
//!

#[doc(no_inline)]
pub use crate::error::{Error, Result};

#[doc(no_inline)]
pub use crate::traits::*;

#[doc(no_inline)]
pub use crate::vector::{Float, NamedVector};

#[doc(no_inline)]
pub use crate::metrics_regression::Regression;

#[doc(no_inline)]
pub use crate::model_selection::{SplitResult, TrainTestSplit, TrainTestSplitParams};

#[doc(no_inline)]
pub use crate::param_guard::ParamGuard;
