// hexcmp/src/classifier/linear.rs

use crate::classifier::traits::{Classifier, Label};
use crate::constants::FEATURE_WIDTH;
use crate::features::FeatureVector;
use crate::{Error, Result};

/// Linear model: `AboveTwo` when `bias + w . x > 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearClassifier {
    weights: Vec<f64>,
    bias: f64,
}

impl LinearClassifier {
    /// Weight count must equal the feature width.
    pub fn new(weights: Vec<f64>, bias: f64) -> Result<Self> {
        if weights.len() != FEATURE_WIDTH {
            return Err(Error::ModelShape {
                expected: FEATURE_WIDTH,
                actual: weights.len(),
            });
        }
        Ok(Self { weights, bias })
    }

    /// One weight per feature.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Constant term of the score.
    pub fn bias(&self) -> f64 {
        self.bias
    }

    /// `bias + w . x`
    pub fn score(&self, features: &FeatureVector) -> f64 {
        self.bias
            + self
                .weights
                .iter()
                .zip(features.as_slice())
                .map(|(w, x)| w * x)
                .sum::<f64>()
    }
}

impl Classifier for LinearClassifier {
    fn predict(&self, features: &FeatureVector) -> Result<Label> {
        let score = self.score(features);
        if !score.is_finite() {
            return Err(Error::Classifier(format!("non-finite score {}", score)));
        }
        Ok(if score > 0.0 {
            Label::AboveTwo
        } else {
            Label::AtMostTwo
        })
    }

    fn name(&self) -> &str {
        "linear"
    }
}

#[cfg(feature = "serde")]
mod load {
    use std::path::Path;

    use serde::Deserialize;

    use super::LinearClassifier;
    use crate::{Error, Result};

    /// On-disk model document: `{ "weights": [...], "bias": 0.0 }`
    #[derive(Debug, Deserialize)]
    struct ModelFile {
        weights: Vec<f64>,
        #[serde(default)]
        bias: f64,
    }

    impl LinearClassifier {
        /// Decode a model document.
        pub fn from_json_str(s: &str) -> Result<Self> {
            let doc: ModelFile =
                serde_json::from_str(s).map_err(|e| Error::ModelFormat(e.to_string()))?;
            LinearClassifier::new(doc.weights, doc.bias)
        }

        /// Load a model saved as JSON.
        pub fn load(path: impl AsRef<Path>) -> Result<Self> {
            let path = path.as_ref();
            let text = std::fs::read_to_string(path)?;
            let model = Self::from_json_str(&text)?;
            log::debug!("loaded linear model from {}", path.display());
            Ok(model)
        }
    }
}
