//! Verity Domain Layer
//!
//! This crate holds the frozen contract between Verity and the externally
//! trained credibility model, plus the trait interfaces every other layer
//! depends upon. It has no external runtime dependencies.
//!
//! ## Key Concepts
//!
//! - **Feature schema**: 18 named columns in a fixed order, shared with the
//!   model at training time
//! - **FeatureVector**: the ordered numeric input to the classifier
//! - **Lexicons**: immutable word tables used by the ratio features
//! - **Label convention**: how the classifier's raw class index maps to
//!   "Likely Real" / "Likely Fake"
//!
//! ## Architecture
//!
//! - Pure data and logic only
//! - Sentiment/tokenization and classification are capability traits,
//!   implemented in `verity-text` and `verity-classifier`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod feature;
pub mod label;
pub mod lexicon;
pub mod traits;
pub mod vector;

// Re-exports for convenience
pub use feature::{Feature, FEATURE_COUNT, FEATURE_NAMES};
pub use label::{Label, LabelConvention, Risk};
pub use lexicon::{LexiconSet, Lexicons};
pub use traits::{Classifier, TextAnalyzer};
pub use vector::FeatureVector;
