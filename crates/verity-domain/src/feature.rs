//! Feature schema - the column layout the model was trained on
//!
//! The order of [`FEATURE_NAMES`] is part of the contract with the trained
//! artifact. Never reorder, insert, or remove a column.

/// Number of columns in the feature schema
pub const FEATURE_COUNT: usize = 18;

/// Column names in the exact order the model expects them
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "certainty_ratio",
    "hedging_ratio",
    "emotion_ratio",
    "subjectivity",
    "polarity",
    "avg_sentence_length",
    "pronoun_ratio",
    "sensational_ratio_title",
    "sensational_ratio_body",
    "headline_exclamations",
    "headline_questions",
    "capital_word_ratio_title",
    "capital_word_ratio_body",
    "neg_emotion_ratio",
    "pos_emotion_ratio",
    "objective_ratio",
    "body_exclamations",
    "body_questions",
];

/// A single column of the feature schema
///
/// Discriminants are the column positions, so `Feature as usize` is the
/// index into a [`crate::FeatureVector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Feature {
    /// Body words found in the certainty lexicon / body word count
    CertaintyRatio = 0,
    /// Body words found in the hedging lexicon / body word count
    HedgingRatio = 1,
    /// Polarity mapped from [-1, 1] into [0, 1]
    EmotionRatio = 2,
    /// Subjectivity score in [0, 1]
    Subjectivity = 3,
    /// Raw polarity in [-1, 1]
    Polarity = 4,
    /// Mean whitespace word count per sentence
    AvgSentenceLength = 5,
    /// Body words found in the pronoun lexicon / body word count
    PronounRatio = 6,
    /// Title words found in the sensational lexicon / title word count
    SensationalRatioTitle = 7,
    /// Body words found in the sensational lexicon / body word count
    SensationalRatioBody = 8,
    /// Count of `!` in the title
    HeadlineExclamations = 9,
    /// Count of `?` in the title
    HeadlineQuestions = 10,
    /// All-caps title tokens / title word count
    CapitalWordRatioTitle = 11,
    /// All-caps body tokens / body word count
    CapitalWordRatioBody = 12,
    /// Body words found in the negative-emotion lexicon / body word count
    NegEmotionRatio = 13,
    /// Body words found in the positive-emotion lexicon / body word count
    PosEmotionRatio = 14,
    /// Body words found in the objective lexicon / body word count
    ObjectiveRatio = 15,
    /// Count of `!` in the body
    BodyExclamations = 16,
    /// Count of `?` in the body
    BodyQuestions = 17,
}

impl Feature {
    /// Every feature in schema order
    pub const ALL: [Feature; FEATURE_COUNT] = [
        Feature::CertaintyRatio,
        Feature::HedgingRatio,
        Feature::EmotionRatio,
        Feature::Subjectivity,
        Feature::Polarity,
        Feature::AvgSentenceLength,
        Feature::PronounRatio,
        Feature::SensationalRatioTitle,
        Feature::SensationalRatioBody,
        Feature::HeadlineExclamations,
        Feature::HeadlineQuestions,
        Feature::CapitalWordRatioTitle,
        Feature::CapitalWordRatioBody,
        Feature::NegEmotionRatio,
        Feature::PosEmotionRatio,
        Feature::ObjectiveRatio,
        Feature::BodyExclamations,
        Feature::BodyQuestions,
    ];

    /// Column position in the vector
    pub fn index(self) -> usize {
        self as usize
    }

    /// Column name as used by the trained artifact
    pub fn name(self) -> &'static str {
        FEATURE_NAMES[self.index()]
    }

    /// Look up a feature by column name
    pub fn from_name(name: &str) -> Option<Self> {
        FEATURE_NAMES
            .iter()
            .position(|n| *n == name)
            .map(|i| Feature::ALL[i])
    }

    /// Human-readable name: underscores become spaces, words are title-cased
    ///
    /// `avg_sentence_length` → `Avg Sentence Length`
    pub fn display_name(self) -> String {
        title_case(&self.name().replace('_', " "))
    }

    /// Whether the feature is a count normalized by a word count
    ///
    /// Ratio features are always within [0, 1].
    pub fn is_ratio(self) -> bool {
        matches!(
            self,
            Feature::CertaintyRatio
                | Feature::HedgingRatio
                | Feature::PronounRatio
                | Feature::SensationalRatioTitle
                | Feature::SensationalRatioBody
                | Feature::CapitalWordRatioTitle
                | Feature::CapitalWordRatioBody
                | Feature::NegEmotionRatio
                | Feature::PosEmotionRatio
                | Feature::ObjectiveRatio
        )
    }

    /// Whether the feature is a literal character count
    pub fn is_count(self) -> bool {
        matches!(
            self,
            Feature::HeadlineExclamations
                | Feature::HeadlineQuestions
                | Feature::BodyExclamations
                | Feature::BodyQuestions
        )
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Feature {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| format!("Unknown feature: {}", s))
    }
}

/// Title-case a string: a letter following a non-letter is uppercased,
/// every other letter is lowercased.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_letter = false;

    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_order() {
        assert_eq!(FEATURE_NAMES.len(), FEATURE_COUNT);
        assert_eq!(FEATURE_NAMES[0], "certainty_ratio");
        assert_eq!(FEATURE_NAMES[5], "avg_sentence_length");
        assert_eq!(FEATURE_NAMES[9], "headline_exclamations");
        assert_eq!(FEATURE_NAMES[17], "body_questions");
    }

    #[test]
    fn test_enum_matches_names() {
        for (i, feature) in Feature::ALL.iter().enumerate() {
            assert_eq!(feature.index(), i);
            assert_eq!(feature.name(), FEATURE_NAMES[i]);
            assert_eq!(Feature::from_name(feature.name()), Some(*feature));
        }
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(Feature::from_name("sensational_ratio"), None);
        assert!("capital_word_ratio".parse::<Feature>().is_err());
    }

    #[test]
    fn test_display_name() {
        assert_eq!(Feature::CertaintyRatio.display_name(), "Certainty Ratio");
        assert_eq!(Feature::AvgSentenceLength.display_name(), "Avg Sentence Length");
        assert_eq!(
            Feature::CapitalWordRatioTitle.display_name(),
            "Capital Word Ratio Title"
        );
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("hello world"), "Hello World");
        assert_eq!(title_case("HELLO wORLD"), "Hello World");
        assert_eq!(title_case("they're"), "They'Re");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_kinds_are_disjoint() {
        for feature in Feature::ALL {
            assert!(!(feature.is_ratio() && feature.is_count()), "{}", feature);
        }
        assert_eq!(Feature::ALL.iter().filter(|f| f.is_ratio()).count(), 10);
        assert_eq!(Feature::ALL.iter().filter(|f| f.is_count()).count(), 4);
    }
}
