// hexcmp/src/classifier/mock.rs

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::classifier::traits::{Classifier, Label};
use crate::features::FeatureVector;
use crate::{Error, Result};

/// Mock classifier for tests. It records seen features and returns queued labels.
#[derive(Debug, Default)]
pub struct MockClassifier {
    labels: RefCell<VecDeque<Label>>,
    seen: RefCell<Vec<FeatureVector>>,
}

impl MockClassifier {
    /// Mock with an empty label queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mock returning `labels` in order.
    pub fn with_labels(labels: Vec<Label>) -> Self {
        Self {
            labels: RefCell::new(labels.into()),
            seen: RefCell::new(Vec::new()),
        }
    }

    /// Queue one more label.
    pub fn push_label(&self, label: Label) {
        self.labels.borrow_mut().push_back(label);
    }

    /// Feature vectors passed to `predict`, oldest first.
    pub fn seen(&self) -> Vec<FeatureVector> {
        self.seen.borrow().clone()
    }

    /// Number of `predict` calls so far.
    pub fn call_count(&self) -> usize {
        self.seen.borrow().len()
    }
}

impl Classifier for MockClassifier {
    fn predict(&self, features: &FeatureVector) -> Result<Label> {
        self.seen.borrow_mut().push(*features);
        self.labels
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| Error::Classifier("no queued label".into()))
    }

    fn name(&self) -> &str {
        "mock"
    }
}
