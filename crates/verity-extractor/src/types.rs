//! Extraction output types

use serde::Serialize;
use verity_domain::FeatureVector;

/// A part of the extraction that depends on the text analyzer
///
/// When one fails, its features take fixed defaults instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Subcomputation {
    /// Polarity score (feeds `emotion_ratio` and `polarity`)
    Polarity,
    /// Subjectivity score
    Subjectivity,
    /// Sentence splitting (feeds the title proxy and `avg_sentence_length`)
    Sentences,
}

impl Subcomputation {
    /// Get the name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Subcomputation::Polarity => "polarity",
            Subcomputation::Subjectivity => "subjectivity",
            Subcomputation::Sentences => "sentences",
        }
    }
}

impl std::fmt::Display for Subcomputation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of extracting features from one (text, title) pair
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedFeatures {
    /// The 18 feature values in schema order
    pub vector: FeatureVector,

    /// Title the title features were computed on: the given one, or the
    /// proxy derived from the body
    pub title: String,

    /// Sub-computations that failed and were replaced by defaults
    pub degraded: Vec<Subcomputation>,
}

impl ExtractedFeatures {
    /// Whether every sub-computation succeeded
    pub fn is_complete(&self) -> bool {
        self.degraded.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subcomputation_names() {
        assert_eq!(Subcomputation::Sentences.to_string(), "sentences");
        assert_eq!(
            serde_json::to_string(&Subcomputation::Polarity).unwrap(),
            "\"polarity\""
        );
    }

    #[test]
    fn test_is_complete() {
        let mut extracted = ExtractedFeatures {
            vector: FeatureVector::zeros(),
            title: String::new(),
            degraded: vec![],
        };
        assert!(extracted.is_complete());
        extracted.degraded.push(Subcomputation::Subjectivity);
        assert!(!extracted.is_complete());
    }
}
