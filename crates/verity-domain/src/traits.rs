//! Trait definitions for external capabilities
//!
//! These traits define the boundaries between the feature/report logic and
//! the collaborators that do tokenization, sentiment scoring, and
//! classification. Implementations live in other crates.

use crate::FeatureVector;

/// Sentence splitting and sentiment scoring
///
/// Implemented by the adapter layer (verity-text). Every call may fail
/// independently; callers decide how to degrade.
pub trait TextAnalyzer {
    /// Error type for analyzer operations
    type Error;

    /// Split text into sentences, in order
    fn sentences(&self, text: &str) -> Result<Vec<String>, Self::Error>;

    /// Polarity of the text in [-1, 1]
    fn polarity(&self, text: &str) -> Result<f64, Self::Error>;

    /// Subjectivity of the text in [0, 1]
    fn subjectivity(&self, text: &str) -> Result<f64, Self::Error>;
}

/// Scored binary classifier over the feature schema
///
/// Implemented by the infrastructure layer (verity-classifier). The raw
/// label is a class index in {0, 1}; its meaning is fixed by a
/// [`crate::LabelConvention`].
pub trait Classifier {
    /// Error type for classification
    type Error;

    /// Predict the raw class index
    fn predict(&self, features: &FeatureVector) -> Result<u8, Self::Error>;

    /// Probability of each class, indexed by raw class
    fn predict_proba(&self, features: &FeatureVector) -> Result<[f64; 2], Self::Error>;

    /// Label and probabilities for one input, computed by the same model
    ///
    /// Implementations that can swap their model between calls should
    /// override this so both answers come from one model.
    fn classify(&self, features: &FeatureVector) -> Result<(u8, [f64; 2]), Self::Error> {
        Ok((self.predict(features)?, self.predict_proba(features)?))
    }

    /// Whether the classifier can answer without loading anything first
    fn is_ready(&self) -> bool {
        true
    }
}

impl<T: TextAnalyzer + ?Sized> TextAnalyzer for std::sync::Arc<T> {
    type Error = T::Error;

    fn sentences(&self, text: &str) -> Result<Vec<String>, Self::Error> {
        (**self).sentences(text)
    }

    fn polarity(&self, text: &str) -> Result<f64, Self::Error> {
        (**self).polarity(text)
    }

    fn subjectivity(&self, text: &str) -> Result<f64, Self::Error> {
        (**self).subjectivity(text)
    }
}

impl<T: Classifier + ?Sized> Classifier for std::sync::Arc<T> {
    type Error = T::Error;

    fn predict(&self, features: &FeatureVector) -> Result<u8, Self::Error> {
        (**self).predict(features)
    }

    fn predict_proba(&self, features: &FeatureVector) -> Result<[f64; 2], Self::Error> {
        (**self).predict_proba(features)
    }

    fn classify(&self, features: &FeatureVector) -> Result<(u8, [f64; 2]), Self::Error> {
        (**self).classify(features)
    }

    fn is_ready(&self) -> bool {
        (**self).is_ready()
    }
}
