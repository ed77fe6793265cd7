//! Verity Text Analysis Layer
//!
//! Implementations of the `TextAnalyzer` trait from `verity-domain`:
//! sentence splitting plus polarity and subjectivity scoring.
//!
//! # Analyzers
//!
//! - `PatternAnalyzer`: rule-based sentence splitter and lexicon sentiment
//! - `MockAnalyzer`: fixed scores with switchable failures, for testing
//!
//! # Examples
//!
//! ```
//! use verity_text::PatternAnalyzer;
//! use verity_domain::traits::TextAnalyzer;
//!
//! let analyzer = PatternAnalyzer::new();
//! let sentences = analyzer.sentences("First sentence. Second sentence.").unwrap();
//! assert_eq!(sentences, vec!["First sentence.", "Second sentence."]);
//!
//! let polarity = analyzer.polarity("What a wonderful, happy day").unwrap();
//! assert!(polarity > 0.0);
//! ```

#![warn(missing_docs)]

pub mod pattern;
pub mod sentences;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use thiserror::Error;
use verity_domain::traits::TextAnalyzer;

pub use pattern::PatternAnalyzer;
pub use sentences::SentenceSplitter;

/// Errors that can occur during text analysis
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalyzerError {
    /// Input exceeds the analyzer's size limit
    #[error("Text too long: {0} chars (max: {1})")]
    TextTooLong(usize, usize),

    /// The analyzer could not produce a result
    #[error("Analysis unavailable: {0}")]
    Unavailable(String),
}

/// Mock analyzer for deterministic testing
///
/// Returns fixed polarity and subjectivity, splits sentences with the real
/// [`SentenceSplitter`], and can be told to fail either capability.
///
/// # Examples
///
/// ```
/// use verity_text::MockAnalyzer;
/// use verity_domain::traits::TextAnalyzer;
///
/// let analyzer = MockAnalyzer::new(0.4, 0.7);
/// assert_eq!(analyzer.polarity("anything").unwrap(), 0.4);
///
/// let broken = MockAnalyzer::new(0.4, 0.7).with_failing_sentiment();
/// assert!(broken.polarity("anything").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct MockAnalyzer {
    polarity: f64,
    subjectivity: f64,
    fail_sentences: bool,
    fail_sentiment: bool,
    splitter: SentenceSplitter,
    call_count: Arc<AtomicUsize>,
}

impl MockAnalyzer {
    /// Create a mock with fixed sentiment scores
    pub fn new(polarity: f64, subjectivity: f64) -> Self {
        Self {
            polarity,
            subjectivity,
            fail_sentences: false,
            fail_sentiment: false,
            splitter: SentenceSplitter::new(),
            call_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Mock where every capability fails
    pub fn failing() -> Self {
        Self::new(0.0, 0.0)
            .with_failing_sentences()
            .with_failing_sentiment()
    }

    /// Make sentence splitting fail
    pub fn with_failing_sentences(mut self) -> Self {
        self.fail_sentences = true;
        self
    }

    /// Make polarity and subjectivity fail
    pub fn with_failing_sentiment(mut self) -> Self {
        self.fail_sentiment = true;
        self
    }

    /// Total number of capability calls made so far
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    fn record_call(&self) {
        self.call_count.fetch_add(1, Ordering::SeqCst);
    }
}

impl Default for MockAnalyzer {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl TextAnalyzer for MockAnalyzer {
    type Error = AnalyzerError;

    fn sentences(&self, text: &str) -> Result<Vec<String>, Self::Error> {
        self.record_call();
        if self.fail_sentences {
            return Err(AnalyzerError::Unavailable("Mock sentence failure".to_string()));
        }
        Ok(self.splitter.split(text))
    }

    fn polarity(&self, _text: &str) -> Result<f64, Self::Error> {
        self.record_call();
        if self.fail_sentiment {
            return Err(AnalyzerError::Unavailable("Mock sentiment failure".to_string()));
        }
        Ok(self.polarity)
    }

    fn subjectivity(&self, _text: &str) -> Result<f64, Self::Error> {
        self.record_call();
        if self.fail_sentiment {
            return Err(AnalyzerError::Unavailable("Mock sentiment failure".to_string()));
        }
        Ok(self.subjectivity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_fixed_scores() {
        let mock = MockAnalyzer::new(-0.25, 0.6);
        assert_eq!(mock.polarity("x").unwrap(), -0.25);
        assert_eq!(mock.subjectivity("x").unwrap(), 0.6);
        assert_eq!(mock.call_count(), 2);
    }

    #[test]
    fn test_mock_failures_are_independent() {
        let mock = MockAnalyzer::new(0.1, 0.2).with_failing_sentiment();
        assert!(mock.polarity("x").is_err());
        assert!(mock.subjectivity("x").is_err());
        assert!(mock.sentences("One. Two.").is_ok());

        let mock = MockAnalyzer::new(0.1, 0.2).with_failing_sentences();
        assert!(mock.sentences("One. Two.").is_err());
        assert!(mock.polarity("x").is_ok());
    }

    #[test]
    fn test_mock_call_count_shared_across_clones() {
        let mock = MockAnalyzer::default();
        let clone = mock.clone();
        clone.polarity("x").unwrap();
        assert_eq!(mock.call_count(), 1);
    }

    #[test]
    fn test_error_display() {
        let err = AnalyzerError::TextTooLong(10, 5);
        assert_eq!(err.to_string(), "Text too long: 10 chars (max: 5)");
    }
}
