//! Verity Pipeline
//!
//! Runs a text through feature extraction and classification and builds the
//! credibility report returned by every entry point.
//!
//! # Architecture
//!
//! ```text
//! text → FeatureExtractor → FeatureVector → Classifier → (label, probability) → Report
//! ```
//!
//! # Example Usage
//!
//! ```
//! use std::sync::Arc;
//! use verity_classifier::MockClassifier;
//! use verity_domain::{LabelConvention, Lexicons};
//! use verity_extractor::FeatureExtractor;
//! use verity_pipeline::Pipeline;
//! use verity_text::PatternAnalyzer;
//!
//! let extractor = FeatureExtractor::new(Arc::new(Lexicons::standard()), PatternAnalyzer::new());
//! let pipeline = Pipeline::new(extractor, MockClassifier::new(1, 0.91), LabelConvention::RealIsOne);
//!
//! let report = pipeline.analyze("Officials confirmed the figures in a report.").unwrap();
//! assert_eq!(report.credibility, "Likely Real");
//! assert_eq!(report.risk, "Low");
//! assert_eq!(report.confidence, 91.0);
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod pipeline;
mod report;

pub use config::PipelineConfig;
pub use error::PipelineError;
pub use pipeline::{DefaultPipeline, Pipeline};
pub use report::{round_to, ErrorResponse, FeatureMap, Insight, Report};
pub use verity_classifier::ClassifierError;
