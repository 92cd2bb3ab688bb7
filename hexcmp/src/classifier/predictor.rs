// hexcmp/src/classifier/predictor.rs

use crate::classifier::traits::{Classifier, Label};
use crate::features::{extract, FeatureVector};
use crate::parser::parse;
use crate::types::ParsedHex;
use crate::Result;

/// Handle owning a classifier. Input is validated before any feature
/// reaches the model.
#[derive(Debug)]
pub struct Predictor<C: Classifier> {
    classifier: C,
}

impl<C: Classifier> Predictor<C> {
    /// Wrap `classifier`.
    pub fn new(classifier: C) -> Self {
        Self { classifier }
    }

    /// Borrow the wrapped classifier.
    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Release the wrapped classifier.
    pub fn into_inner(self) -> C {
        self.classifier
    }

    /// Parse `input`, extract features and classify.
    pub fn predict(&self, input: &str) -> Result<Label> {
        let parsed = parse(input)?;
        self.predict_parsed(&parsed)
    }

    /// Classify an already validated value.
    pub fn predict_parsed(&self, parsed: &ParsedHex) -> Result<Label> {
        let features = extract(parsed);
        self.predict_features(&features)
    }

    /// Classify precomputed features.
    pub fn predict_features(&self, features: &FeatureVector) -> Result<Label> {
        let label = self.classifier.predict(features)?;
        log::debug!("{} predicted {}", self.classifier.name(), label);
        Ok(label)
    }
}
