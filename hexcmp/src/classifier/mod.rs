//! Classification collaborator.
//!
//! A [`Classifier`] maps a [`FeatureVector`](crate::features::FeatureVector)
//! to a [`Label`]. The model is always reached through an explicit handle
//! ([`Predictor`]); nothing here is cached process-wide.

pub mod linear;
pub mod mock;
pub mod predictor;
pub mod traits;

pub use linear::LinearClassifier;
pub use mock::MockClassifier;
pub use predictor::Predictor;
pub use traits::{Classifier, Label};
