//! Lexicon tables for the ratio features
//!
//! The word lists are part of the training contract: the model was fitted
//! on ratios computed against exactly these entries. Matching is whole-token
//! and case-insensitive; there is no stemming and no substring matching.
//!
//! Some entries are multi-word phrases ("without doubt", "said to"). The
//! extractor matches single whitespace tokens, so those entries never match.
//! They are kept because the training-time extraction behaved the same way.

use std::collections::HashSet;

/// Words signalling certainty or absolute claims
pub const CERTAINTY_WORDS: &[&str] = &[
    "always", "never", "definitely", "certainly", "undeniable", "proven",
    "fact", "clearly", "everyone", "nobody", "certain", "sure", "absolutely",
    "without doubt", "guaranteed", "obvious", "proof", "undoubtedly", "irrefutable",
    "unquestionable", "conclusively", "must", "will", "impossible", "inevitably",
];

/// Words signalling hedging or attribution
pub const HEDGING_WORDS: &[&str] = &[
    "may", "might", "could", "possibly", "allegedly", "reported", "appears",
    "suggests", "likely", "unlikely", "apparently", "presumably", "according",
    "claims", "said to", "believed", "considered", "seems", "thought to",
    "estimated", "expected", "potential", "possible", "perhaps", "sometimes",
    "often", "usually", "generally", "typically", "tends", "indicate",
];

/// Clickbait and sensational vocabulary
pub const SENSATIONAL_WORDS: &[&str] = &[
    "shocking", "breaking", "unbelievable", "exposed", "truth", "secret",
    "revealed", "miracle", "amazing", "guaranteed", "exclusive", "dramatic",
    "incredible", "unprecedented", "alert", "urgent", "bizarre", "astonishing",
    "warning", "revolutionary", "bombshell", "explosive", "scandalous",
    "outrageous", "stunning", "terrifying", "alarming", "catastrophic",
    "devastating", "horrifying", "jaw-dropping", "mind-blowing", "earth-shattering",
    "game-changing", "must-see", "viral", "hidden", "suppressed", "forbidden",
    "banned", "censored", "conspiracy", "hoax", "rigged", "corrupt",
];

/// Negatively charged emotional vocabulary
pub const NEGATIVE_EMOTION_WORDS: &[&str] = &[
    "shocking", "terrible", "disaster", "horrible", "corrupt", "angry",
    "hate", "fear", "crisis", "danger", "horrific", "devastating", "evil",
    "disgusting", "outrageous", "despicable", "vile", "wicked", "monstrous",
    "atrocious", "appalling", "dreadful", "alarming", "threatening", "dangerous",
];

/// Positively charged emotional vocabulary
pub const POSITIVE_EMOTION_WORDS: &[&str] = &[
    "amazing", "incredible", "fantastic", "great", "excellent", "happy",
    "joy", "success", "win", "love", "wonderful", "brilliant", "outstanding",
    "remarkable", "extraordinary", "superb", "magnificent", "glorious",
    "triumphant", "victory", "heroic", "inspiring", "uplifting",
];

/// Personal pronouns
pub const PRONOUN_WORDS: &[&str] = &[
    "we", "they", "you", "he", "she", "them", "us", "our", "him", "her",
    "i", "me", "my", "their", "your", "his", "hers", "ours", "theirs",
];

/// Sourcing and evidence vocabulary typical of factual reporting
pub const OBJECTIVE_WORDS: &[&str] = &[
    "reported", "confirmed", "according", "stated", "official", "data",
    "evidence", "statistics", "record", "announcement", "declaration",
    "study", "research", "analysis", "report", "survey", "findings",
    "investigation", "source", "spokesperson", "authority",
];

/// Immutable set of lowercase words or short phrases
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconSet {
    entries: HashSet<String>,
}

impl LexiconSet {
    /// Build a set from entries; entries are lowercased on insertion
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|e| e.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Case-insensitive whole-token membership
    pub fn contains(&self, token: &str) -> bool {
        if self.entries.contains(token) {
            return true;
        }
        // Tokens from the extractor are already lowercase; only pay for
        // lowercasing when the caller passed something else.
        token.chars().any(char::is_uppercase) && self.entries.contains(&token.to_lowercase())
    }

    /// Count how many tokens are members of the set
    pub fn count_matches<S: AsRef<str>>(&self, tokens: &[S]) -> usize {
        tokens.iter().filter(|t| self.contains(t.as_ref())).count()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The seven lexicons used by the feature extractor
///
/// Built once at startup and shared read-only (typically behind an `Arc`).
#[derive(Debug, Clone)]
pub struct Lexicons {
    /// Certainty / absolute-claim words
    pub certainty: LexiconSet,
    /// Hedging / attribution words
    pub hedging: LexiconSet,
    /// Sensational vocabulary
    pub sensational: LexiconSet,
    /// Negative emotion vocabulary
    pub negative_emotion: LexiconSet,
    /// Positive emotion vocabulary
    pub positive_emotion: LexiconSet,
    /// Personal pronouns
    pub pronoun: LexiconSet,
    /// Objective / sourcing vocabulary
    pub objective: LexiconSet,
}

impl Lexicons {
    /// The tables the deployed model was trained against
    pub fn standard() -> Self {
        Self {
            certainty: LexiconSet::new(CERTAINTY_WORDS),
            hedging: LexiconSet::new(HEDGING_WORDS),
            sensational: LexiconSet::new(SENSATIONAL_WORDS),
            negative_emotion: LexiconSet::new(NEGATIVE_EMOTION_WORDS),
            positive_emotion: LexiconSet::new(POSITIVE_EMOTION_WORDS),
            pronoun: LexiconSet::new(PRONOUN_WORDS),
            objective: LexiconSet::new(OBJECTIVE_WORDS),
        }
    }
}

impl Default for Lexicons {
    fn default() -> Self {
        Self::standard()
    }
}
