//! Lexicon-based polarity and subjectivity scoring
//!
//! Each word found in the sentiment lexicon contributes one assessment of
//! (polarity, subjectivity). An intensifier directly before a scored word
//! scales that assessment; a negation within the previous few words flips
//! the polarity and halves it. The text's scores are the means of its
//! assessments, clamped to [-1, 1] and [0, 1]. Text without any scored word
//! is neutral and objective (0.0, 0.0).

use crate::sentences::SentenceSplitter;
use crate::AnalyzerError;
use std::collections::HashMap;
use verity_domain::traits::TextAnalyzer;

/// Default maximum input size (characters)
pub const DEFAULT_MAX_TEXT_LENGTH: usize = 1_000_000;

/// Number of words after a negation that it still applies to
const NEGATION_WINDOW: usize = 3;

/// Polarity multiplier applied to negated assessments
const NEGATION_FACTOR: f64 = -0.5;

/// (word, polarity, subjectivity)
const SENTIMENT_LEXICON: &[(&str, f64, f64)] = &[
    // Positive
    ("good", 0.7, 0.6),
    ("great", 0.8, 0.75),
    ("excellent", 1.0, 1.0),
    ("wonderful", 1.0, 1.0),
    ("fantastic", 0.4, 0.9),
    ("amazing", 0.6, 0.9),
    ("incredible", 0.9, 0.9),
    ("brilliant", 0.9, 1.0),
    ("outstanding", 0.5, 0.75),
    ("remarkable", 0.75, 0.75),
    ("extraordinary", 0.3, 0.5),
    ("superb", 1.0, 1.0),
    ("magnificent", 1.0, 1.0),
    ("glorious", 0.5, 0.8),
    ("happy", 0.8, 1.0),
    ("love", 0.5, 0.6),
    ("beautiful", 0.85, 1.0),
    ("best", 1.0, 0.3),
    ("better", 0.5, 0.5),
    ("nice", 0.6, 1.0),
    ("positive", 0.23, 0.55),
    ("success", 0.3, 0.4),
    ("successful", 0.75, 0.95),
    ("win", 0.8, 0.4),
    ("victory", 0.5, 0.5),
    ("heroic", 0.5, 0.7),
    ("inspiring", 0.5, 0.6),
    ("uplifting", 0.6, 0.7),
    ("joy", 0.8, 0.9),
    ("safe", 0.5, 0.5),
    ("strong", 0.43, 0.73),
    ("important", 0.4, 1.0),
    ("true", 0.35, 0.65),
    ("clear", 0.1, 0.38),
    ("fair", 0.7, 0.9),
    ("healthy", 0.5, 0.5),
    ("hope", 0.3, 0.5),
    ("interesting", 0.5, 0.5),
    ("proud", 0.8, 1.0),
    ("stable", 0.3, 0.5),
    ("significant", 0.38, 0.88),
    ("popular", 0.6, 0.8),
    ("free", 0.4, 0.8),
    ("easy", 0.43, 0.83),
    ("new", 0.14, 0.45),
    ("major", 0.06, 0.5),
    ("large", 0.21, 0.43),
    ("high", 0.16, 0.54),
    // Negative
    ("bad", -0.7, 0.67),
    ("terrible", -1.0, 1.0),
    ("horrible", -1.0, 1.0),
    ("awful", -1.0, 1.0),
    ("worst", -1.0, 1.0),
    ("worse", -0.4, 0.6),
    ("shocking", -1.0, 1.0),
    ("disgusting", -1.0, 1.0),
    ("dreadful", -1.0, 1.0),
    ("evil", -1.0, 1.0),
    ("vile", -1.0, 1.0),
    ("wicked", -0.5, 1.0),
    ("outrageous", -0.5, 0.8),
    ("appalling", -0.8, 0.9),
    ("atrocious", -1.0, 1.0),
    ("horrific", -1.0, 1.0),
    ("horrifying", -0.9, 1.0),
    ("terrifying", -0.8, 0.9),
    ("devastating", -0.8, 0.9),
    ("catastrophic", -0.8, 0.9),
    ("alarming", -0.6, 0.8),
    ("dangerous", -0.6, 0.9),
    ("scary", -0.5, 1.0),
    ("angry", -0.5, 1.0),
    ("sad", -0.5, 1.0),
    ("corrupt", -0.5, 0.5),
    ("fake", -0.5, 1.0),
    ("false", -0.4, 0.6),
    ("wrong", -0.5, 0.9),
    ("poor", -0.4, 0.6),
    ("weak", -0.38, 0.63),
    ("hate", -0.8, 0.9),
    ("fear", -0.5, 0.8),
    ("crisis", -0.4, 0.6),
    ("disaster", -0.7, 0.8),
    ("stupid", -0.8, 1.0),
    ("ridiculous", -0.33, 1.0),
    ("unbelievable", -0.5, 1.0),
    ("bizarre", -0.25, 0.75),
    ("secret", -0.4, 0.5),
    ("hidden", -0.17, 0.33),
    ("illegal", -0.5, 0.5),
    ("difficult", -0.5, 1.0),
    ("low", 0.0, 0.3),
    ("old", 0.1, 0.2),
    // Subjective but neutral
    ("dramatic", -0.1, 0.6),
    ("urgent", 0.0, 0.4),
    ("exclusive", 0.0, 0.5),
    ("official", 0.0, 0.0),
    ("real", 0.2, 0.3),
    ("certain", 0.21, 0.57),
    ("obvious", 0.0, 0.5),
    ("likely", 0.0, 1.0),
    ("possible", 0.0, 1.0),
    ("sure", 0.5, 0.89),
];

/// (word, multiplier) applied to the next scored word
const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("extremely", 1.5),
    ("really", 1.2),
    ("so", 1.2),
    ("totally", 1.4),
    ("absolutely", 1.4),
    ("incredibly", 1.5),
    ("truly", 1.2),
    ("highly", 1.3),
    ("most", 1.3),
    ("quite", 1.1),
    ("somewhat", 0.7),
    ("slightly", 0.6),
];

const NEGATIONS: &[&str] = &["not", "no", "never", "nor", "neither", "without", "hardly"];

/// Rule-based analyzer: [`SentenceSplitter`] plus lexicon sentiment
///
/// Cheap to share: build once and wrap in an `Arc`.
#[derive(Debug, Clone)]
pub struct PatternAnalyzer {
    splitter: SentenceSplitter,
    lexicon: HashMap<String, (f64, f64)>,
    intensifiers: HashMap<String, f64>,
    max_text_length: usize,
}

/// Aggregate sentiment of a text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sentiment {
    /// Mean polarity in [-1, 1]
    pub polarity: f64,
    /// Mean subjectivity in [0, 1]
    pub subjectivity: f64,
}

impl PatternAnalyzer {
    /// Create an analyzer with the built-in lexicon
    pub fn new() -> Self {
        Self {
            splitter: SentenceSplitter::new(),
            lexicon: SENTIMENT_LEXICON
                .iter()
                .map(|(w, p, s)| (w.to_string(), (*p, *s)))
                .collect(),
            intensifiers: INTENSIFIERS
                .iter()
                .map(|(w, m)| (w.to_string(), *m))
                .collect(),
            max_text_length: DEFAULT_MAX_TEXT_LENGTH,
        }
    }

    /// Set the maximum accepted input size in characters
    pub fn with_max_text_length(mut self, max: usize) -> Self {
        self.max_text_length = max;
        self
    }

    /// Replace the sentence splitter
    pub fn with_splitter(mut self, splitter: SentenceSplitter) -> Self {
        self.splitter = splitter;
        self
    }

    /// Add or override a lexicon entry
    pub fn with_entry(mut self, word: &str, polarity: f64, subjectivity: f64) -> Self {
        self.lexicon
            .insert(word.to_lowercase(), (polarity, subjectivity));
        self
    }

    /// Score a text
    pub fn sentiment(&self, text: &str) -> Result<Sentiment, AnalyzerError> {
        self.check_length(text)?;

        let mut assessments: Vec<(f64, f64)> = Vec::new();
        let mut multiplier = 1.0;
        let mut words_since_negation: Option<usize> = None;

        for token in text.split_whitespace() {
            let word = normalize(token);
            if word.is_empty() {
                continue;
            }

            if NEGATIONS.contains(&word.as_str()) || word.ends_with("n't") {
                words_since_negation = Some(0);
                continue;
            }

            if let Some(m) = self.intensifiers.get(&word) {
                multiplier = *m;
                continue;
            }

            if let Some((polarity, subjectivity)) = self.lexicon.get(&word) {
                let mut p = (polarity * multiplier).clamp(-1.0, 1.0);
                let s = (subjectivity * multiplier).clamp(0.0, 1.0);
                if words_since_negation.is_some_and(|n| n < NEGATION_WINDOW) {
                    p *= NEGATION_FACTOR;
                    words_since_negation = None;
                }
                assessments.push((p, s));
            }

            multiplier = 1.0;
            words_since_negation = match words_since_negation {
                Some(n) if n + 1 < NEGATION_WINDOW => Some(n + 1),
                _ => None,
            };
        }

        if assessments.is_empty() {
            return Ok(Sentiment {
                polarity: 0.0,
                subjectivity: 0.0,
            });
        }

        let n = assessments.len() as f64;
        let polarity = assessments.iter().map(|(p, _)| p).sum::<f64>() / n;
        let subjectivity = assessments.iter().map(|(_, s)| s).sum::<f64>() / n;

        Ok(Sentiment {
            polarity: polarity.clamp(-1.0, 1.0),
            subjectivity: subjectivity.clamp(0.0, 1.0),
        })
    }

    fn check_length(&self, text: &str) -> Result<(), AnalyzerError> {
        // Byte length bounds the char count from above; only count when needed
        if text.len() > self.max_text_length {
            let chars = text.chars().count();
            if chars > self.max_text_length {
                return Err(AnalyzerError::TextTooLong(chars, self.max_text_length));
            }
        }
        Ok(())
    }
}

impl Default for PatternAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextAnalyzer for PatternAnalyzer {
    type Error = AnalyzerError;

    fn sentences(&self, text: &str) -> Result<Vec<String>, Self::Error> {
        self.check_length(text)?;
        Ok(self.splitter.split(text))
    }

    fn polarity(&self, text: &str) -> Result<f64, Self::Error> {
        self.sentiment(text).map(|s| s.polarity)
    }

    fn subjectivity(&self, text: &str) -> Result<f64, Self::Error> {
        self.sentiment(text).map(|s| s.subjectivity)
    }
}

/// Lowercase a token and strip surrounding punctuation, keeping inner
/// apostrophes and hyphens ("don't", "jaw-dropping").
fn normalize(token: &str) -> String {
    token
        .trim_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase()
        .replace('\u{2019}', "'")
}
