// hexcmp/src/classifier/traits.rs

use derive_more::Display;

use crate::compare::Comparison;
use crate::features::FeatureVector;
use crate::Result;

/// Classifier output.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Label {
    /// Value at most 2
    #[display(fmt = "<=2.0")]
    #[cfg_attr(feature = "serde", serde(rename = "<=2.0"))]
    AtMostTwo,
    /// Value above 2
    #[display(fmt = ">2.0")]
    #[cfg_attr(feature = "serde", serde(rename = ">2.0"))]
    AboveTwo,
}

impl Label {
    /// Label a direct comparison would have produced.
    pub fn from_comparison(c: Comparison) -> Self {
        match c {
            Comparison::GreaterThanTwo => Label::AboveTwo,
            Comparison::LessThanTwo | Comparison::EqualToTwo => Label::AtMostTwo,
        }
    }
}

/// Classifier trait abstracts the model away from feature extraction.
pub trait Classifier {
    /// Produce a label for one feature vector
    fn predict(&self, features: &FeatureVector) -> Result<Label>;

    /// Short human-readable model description
    fn name(&self) -> &str {
        "classifier"
    }
}

impl<C: Classifier + ?Sized> Classifier for Box<C> {
    fn predict(&self, features: &FeatureVector) -> Result<Label> {
        (**self).predict(features)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
