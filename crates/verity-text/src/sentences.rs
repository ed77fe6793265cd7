//! Sentence boundary detection
//!
//! Candidate boundaries come from Unicode sentence segmentation (UAX #29).
//! A candidate is kept only when the text before it ends in `.`, `!` or `?`
//! (plus any closing quotes or brackets). A single period does not end a
//! sentence when it closes a known abbreviation or an initialism ("Dr.",
//! "U.S.", "J."). Line breaks alone never split a sentence.

use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

const TERMINATORS: &[char] = &['.', '!', '?'];

const CLOSERS: &[char] = &['"', '\'', ')', ']', '}', '\u{201D}', '\u{2019}'];

/// Abbreviations that do not end a sentence when followed by a period
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "etc", "inc", "ltd",
    "co", "corp", "gov", "sen", "rep", "gen", "col", "lt", "sgt", "capt", "rev",
    "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov",
    "dec", "no", "fig", "approx", "dept", "est", "mt", "ave", "blvd",
];

/// Splits text into sentences
#[derive(Debug, Clone)]
pub struct SentenceSplitter {
    abbreviations: HashSet<String>,
}

impl SentenceSplitter {
    /// Create a splitter with the default abbreviation list
    pub fn new() -> Self {
        Self::with_abbreviations(ABBREVIATIONS.iter().copied())
    }

    /// Create a splitter with a custom abbreviation list (without periods)
    pub fn with_abbreviations<I, S>(abbreviations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            abbreviations: abbreviations
                .into_iter()
                .map(|a| a.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Split text into trimmed, non-empty sentences
    pub fn split(&self, text: &str) -> Vec<String> {
        let mut sentences = Vec::new();
        let mut start = 0;
        let mut end = 0;

        // Segments are contiguous, so byte offsets add up
        for segment in text.split_sentence_bounds() {
            end += segment.len();
            let candidate = text[start..end].trim();
            if self.ends_sentence(candidate) {
                sentences.push(candidate.to_string());
                start = end;
            }
        }

        let rest = text[start..].trim();
        if !rest.is_empty() {
            sentences.push(rest.to_string());
        }

        sentences
    }

    /// Whether a candidate (already trimmed) is a complete sentence
    fn ends_sentence(&self, candidate: &str) -> bool {
        let body = candidate.trim_end_matches(CLOSERS);
        if !body.ends_with(TERMINATORS) {
            return false;
        }

        let stem = body.trim_end_matches(TERMINATORS);
        if &body[stem.len()..] != "." {
            return true;
        }

        let word = stem.rsplit(char::is_whitespace).next().unwrap_or("");
        let word = word
            .trim_start_matches(|c: char| !c.is_alphanumeric())
            .to_lowercase();

        if word.is_empty() {
            return true;
        }

        !(self.abbreviations.contains(&word) || is_initialism(&word))
    }
}

impl Default for SentenceSplitter {
    fn default() -> Self {
        Self::new()
    }
}

/// Single letters separated by periods: "j", "u.s", "e.g"
fn is_initialism(word: &str) -> bool {
    word.split('.').all(|segment| {
        let mut chars = segment.chars();
        matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic())
    })
}
