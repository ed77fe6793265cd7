//! Core FeatureExtractor implementation

use crate::types::{ExtractedFeatures, Subcomputation};
use std::fmt::Display;
use std::sync::Arc;
use tracing::{debug, warn};
use verity_domain::traits::TextAnalyzer;
use verity_domain::{Feature, FeatureVector, LexiconSet, Lexicons};

/// Characters of body text used as the title when no sentence is found
pub const TITLE_FALLBACK_CHARS: usize = 100;

/// `avg_sentence_length` when sentence splitting fails
pub const DEFAULT_AVG_SENTENCE_LENGTH: f64 = 15.0;

/// `emotion_ratio` when polarity fails
pub const DEFAULT_EMOTION_RATIO: f64 = 0.5;

/// `subjectivity` when subjectivity fails
pub const DEFAULT_SUBJECTIVITY: f64 = 0.5;

/// `polarity` when polarity fails
pub const DEFAULT_POLARITY: f64 = 0.0;

/// Computes the 18 features for a text and its headline
///
/// Holds no per-request state; one instance can serve any number of
/// concurrent callers.
#[derive(Debug, Clone)]
pub struct FeatureExtractor<A> {
    lexicons: Arc<Lexicons>,
    analyzer: A,
}

impl<A> FeatureExtractor<A>
where
    A: TextAnalyzer,
    A::Error: Display,
{
    /// Create an extractor over shared lexicons and a text analyzer
    pub fn new(lexicons: Arc<Lexicons>, analyzer: A) -> Self {
        Self { lexicons, analyzer }
    }

    /// The lexicons in use
    pub fn lexicons(&self) -> &Lexicons {
        &self.lexicons
    }

    /// The text analyzer in use
    pub fn analyzer(&self) -> &A {
        &self.analyzer
    }

    /// Extract features from a body with no headline
    pub fn extract_body(&self, text: &str) -> ExtractedFeatures {
        self.extract(text, "")
    }

    /// Extract features from a body and its headline
    ///
    /// An empty or whitespace-only `title` is replaced by the first sentence
    /// of `text`. Empty `text` yields 18 zeros without touching the analyzer.
    pub fn extract(&self, text: &str, title: &str) -> ExtractedFeatures {
        if text.is_empty() {
            return ExtractedFeatures {
                vector: FeatureVector::zeros(),
                title: title.to_string(),
                degraded: Vec::new(),
            };
        }

        let mut degraded = Vec::new();

        let sentences = match self.analyzer.sentences(text) {
            Ok(sentences) => Some(sentences),
            Err(e) => {
                warn!("Sentence splitting failed, using defaults: {}", e);
                degraded.push(Subcomputation::Sentences);
                None
            }
        };

        let title = if title.trim().is_empty() {
            title_proxy(text, sentences.as_deref())
        } else {
            title.to_string()
        };

        let words: Vec<String> = text
            .to_lowercase()
            .split_whitespace()
            .map(str::to_string)
            .collect();
        let title_words: Vec<String> = title
            .to_lowercase()
            .split_whitespace()
            .map(str::to_string)
            .collect();
        let total_words = words.len().max(1) as f64;
        let total_title_words = title_words.len().max(1) as f64;

        let body_ratio =
            |lexicon: &LexiconSet| lexicon.count_matches(&words[..]) as f64 / total_words;

        let polarity = match self
            .analyzer
            .polarity(text)
            .map_err(|e| e.to_string())
            .and_then(|p| finite(p, "polarity"))
        {
            Ok(p) => Some(p.clamp(-1.0, 1.0)),
            Err(e) => {
                warn!("Polarity failed, using defaults: {}", e);
                degraded.push(Subcomputation::Polarity);
                None
            }
        };

        let subjectivity = match self
            .analyzer
            .subjectivity(text)
            .map_err(|e| e.to_string())
            .and_then(|s| finite(s, "subjectivity"))
        {
            Ok(s) => s.clamp(0.0, 1.0),
            Err(e) => {
                warn!("Subjectivity failed, using default: {}", e);
                degraded.push(Subcomputation::Subjectivity);
                DEFAULT_SUBJECTIVITY
            }
        };

        let avg_sentence_length = match &sentences {
            Some(sentences) => {
                let words_in_sentences: usize =
                    sentences.iter().map(|s| s.split_whitespace().count()).sum();
                words_in_sentences as f64 / sentences.len().max(1) as f64
            }
            None => DEFAULT_AVG_SENTENCE_LENGTH,
        };

        let lex = &self.lexicons;
        let mut vector = FeatureVector::zeros();

        vector.set(Feature::CertaintyRatio, body_ratio(&lex.certainty));
        vector.set(Feature::HedgingRatio, body_ratio(&lex.hedging));
        vector.set(
            Feature::EmotionRatio,
            polarity.map_or(DEFAULT_EMOTION_RATIO, |p| (p + 1.0) / 2.0),
        );
        vector.set(Feature::Subjectivity, subjectivity);
        vector.set(Feature::Polarity, polarity.unwrap_or(DEFAULT_POLARITY));
        vector.set(Feature::AvgSentenceLength, avg_sentence_length);
        vector.set(Feature::PronounRatio, body_ratio(&lex.pronoun));
        vector.set(
            Feature::SensationalRatioTitle,
            lex.sensational.count_matches(&title_words[..]) as f64 / total_title_words,
        );
        vector.set(Feature::SensationalRatioBody, body_ratio(&lex.sensational));
        vector.set(Feature::HeadlineExclamations, count_char(&title, '!'));
        vector.set(Feature::HeadlineQuestions, count_char(&title, '?'));
        vector.set(
            Feature::CapitalWordRatioTitle,
            count_capital_words(&title) as f64 / total_title_words,
        );
        vector.set(
            Feature::CapitalWordRatioBody,
            count_capital_words(text) as f64 / total_words,
        );
        vector.set(Feature::NegEmotionRatio, body_ratio(&lex.negative_emotion));
        vector.set(Feature::PosEmotionRatio, body_ratio(&lex.positive_emotion));
        vector.set(Feature::ObjectiveRatio, body_ratio(&lex.objective));
        vector.set(Feature::BodyExclamations, count_char(text, '!'));
        vector.set(Feature::BodyQuestions, count_char(text, '?'));

        debug!(
            "Extracted features: {} body words, {} title words, {} degraded",
            words.len(),
            title_words.len(),
            degraded.len()
        );

        ExtractedFeatures {
            vector,
            title,
            degraded,
        }
    }
}

/// First sentence, or the first [`TITLE_FALLBACK_CHARS`] characters of the
/// body when there is none (or splitting failed)
fn title_proxy(text: &str, sentences: Option<&[String]>) -> String {
    match sentences.and_then(|s| s.first()) {
        Some(first) => first.clone(),
        None => text.chars().take(TITLE_FALLBACK_CHARS).collect(),
    }
}

fn finite(value: f64, what: &str) -> Result<f64, String> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("non-finite {}: {}", what, value))
    }
}

fn count_char(s: &str, c: char) -> f64 {
    s.chars().filter(|&x| x == c).count() as f64
}

/// Raw whitespace tokens that are all-caps and longer than one character
fn count_capital_words(s: &str) -> usize {
    s.split_whitespace()
        .filter(|w| w.chars().count() > 1 && is_all_caps(w))
        .count()
}

/// At least one cased character and no lowercase ones
///
/// Digits and punctuation are ignored, so "BREAKING:" and "COVID-19" count.
fn is_all_caps(word: &str) -> bool {
    let mut has_cased = false;
    for c in word.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            has_cased = true;
        }
    }
    has_cased
}
