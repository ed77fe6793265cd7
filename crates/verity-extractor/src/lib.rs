//! Verity Feature Extractor
//!
//! Turns raw article text (and an optional headline) into the 18-column
//! [`FeatureVector`](verity_domain::FeatureVector) the credibility model was
//! trained on.
//!
//! # Architecture
//!
//! ```text
//! text, title → FeatureExtractor → Lexicons + TextAnalyzer → FeatureVector
//! ```
//!
//! # Key Features
//!
//! - **Frozen schema**: values are written by [`Feature`](verity_domain::Feature)
//!   position, never reordered
//! - **Title proxy**: an empty title is replaced by the first sentence of the body
//! - **Graceful degradation**: sentiment or sentence-splitting failures fall back
//!   to fixed defaults and are reported in [`ExtractedFeatures::degraded`]
//!
//! # Example Usage
//!
//! ```
//! use std::sync::Arc;
//! use verity_domain::{Feature, Lexicons};
//! use verity_extractor::FeatureExtractor;
//! use verity_text::PatternAnalyzer;
//!
//! let extractor = FeatureExtractor::new(Arc::new(Lexicons::standard()), PatternAnalyzer::new());
//! let extracted = extractor.extract("BREAKING: Scientists PROVE shocking truth!!", "");
//!
//! assert_eq!(extracted.vector.get(Feature::BodyExclamations), 2.0);
//! assert!(extracted.vector.get(Feature::SensationalRatioBody) > 0.0);
//! assert!(extracted.degraded.is_empty());
//! ```

#![warn(missing_docs)]

mod extractor;
mod types;

#[cfg(test)]
mod tests;

pub use extractor::{
    FeatureExtractor, DEFAULT_AVG_SENTENCE_LENGTH, DEFAULT_EMOTION_RATIO, DEFAULT_POLARITY,
    DEFAULT_SUBJECTIVITY, TITLE_FALLBACK_CHARS,
};
pub use types::{ExtractedFeatures, Subcomputation};
