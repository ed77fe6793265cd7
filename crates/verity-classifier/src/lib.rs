//! Verity Classifier Layer
//!
//! Implementations of the `Classifier` trait from `verity-domain`.
//!
//! # Classifiers
//!
//! - `ModelArtifact`: a JSON model (logistic regression or random forest)
//! - `ModelHandle`: loads a `ModelArtifact` from disk on first use and shares it
//! - `MockClassifier`: fixed label and probability, for testing
//!
//! # Examples
//!
//! ```
//! use verity_classifier::MockClassifier;
//! use verity_domain::traits::Classifier;
//! use verity_domain::FeatureVector;
//!
//! let classifier = MockClassifier::new(1, 0.91);
//! let features = FeatureVector::zeros();
//! assert_eq!(classifier.predict(&features).unwrap(), 1);
//! assert_eq!(classifier.predict_proba(&features).unwrap()[1], 0.91);
//! ```

#![warn(missing_docs)]

pub mod artifact;
mod error;
pub mod handle;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use verity_domain::traits::Classifier;
use verity_domain::FeatureVector;

pub use artifact::{ModelArtifact, FORMAT_VERSION};
pub use error::ClassifierError;
pub use handle::ModelHandle;

/// Mock classifier for deterministic testing
///
/// Always answers with the configured raw label. The probability of that
/// label is `probability`; the other class gets the remainder.
///
/// # Examples
///
/// ```
/// use verity_classifier::MockClassifier;
/// use verity_domain::traits::Classifier;
/// use verity_domain::FeatureVector;
///
/// let down = MockClassifier::unavailable();
/// assert!(!down.is_ready());
/// assert!(down.predict(&FeatureVector::zeros()).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct MockClassifier {
    label: u8,
    probabilities: [f64; 2],
    available: bool,
    call_count: Arc<AtomicUsize>,
}

impl MockClassifier {
    /// Create a mock that predicts `label` with the given probability
    pub fn new(label: u8, probability: f64) -> Self {
        let probabilities = if label == 0 {
            [probability, 1.0 - probability]
        } else {
            [1.0 - probability, probability]
        };
        Self {
            label,
            probabilities,
            available: true,
            call_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a mock whose model can never be loaded
    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::new(0, 0.5)
        }
    }

    /// Override the probability vector, e.g. with one that is not a distribution
    pub fn with_probabilities(mut self, probabilities: [f64; 2]) -> Self {
        self.probabilities = probabilities;
        self
    }

    /// Number of predictions requested so far
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    fn check(&self) -> Result<(), ClassifierError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        if self.available {
            Ok(())
        } else {
            Err(ClassifierError::Unavailable {
                path: "<mock>".to_string(),
                reason: "Mock model unavailable".to_string(),
            })
        }
    }
}

impl Classifier for MockClassifier {
    type Error = ClassifierError;

    fn predict(&self, _features: &FeatureVector) -> Result<u8, Self::Error> {
        self.check()?;
        Ok(self.label)
    }

    fn predict_proba(&self, _features: &FeatureVector) -> Result<[f64; 2], Self::Error> {
        self.check()?;
        Ok(self.probabilities)
    }

    fn is_ready(&self) -> bool {
        self.available
    }
}
