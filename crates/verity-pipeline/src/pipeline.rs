//! Extract → classify → report

use crate::config::PipelineConfig;
use crate::error::PipelineError;
use crate::report::Report;
use std::fmt::Display;
use std::sync::Arc;
use tracing::{debug, info, warn};
use verity_classifier::{ClassifierError, ModelHandle};
use verity_domain::traits::{Classifier, TextAnalyzer};
use verity_domain::{LabelConvention, Lexicons};
use verity_extractor::{ExtractedFeatures, FeatureExtractor};
use verity_text::PatternAnalyzer;

/// Pipeline used by the HTTP service and the CLI
pub type DefaultPipeline = Pipeline<PatternAnalyzer, ModelHandle>;

/// Turns text into a credibility [`Report`]
///
/// Stateless apart from the classifier's resident model; share one instance
/// behind an `Arc`.
pub struct Pipeline<A, C> {
    extractor: FeatureExtractor<A>,
    classifier: C,
    convention: LabelConvention,
}

impl DefaultPipeline {
    /// Build the standard pipeline from configuration
    ///
    /// With `eager_load`, a model that fails to load is logged and retried on
    /// the first request rather than failing startup.
    pub fn from_config(config: &PipelineConfig) -> Result<Self, PipelineError> {
        config.validate().map_err(PipelineError::Config)?;
        let convention = config.convention().map_err(PipelineError::Config)?;

        let handle = ModelHandle::new(&config.model_path);
        if config.eager_load {
            if let Err(e) = handle.load() {
                warn!("Eager model load failed, will retry on first request: {}", e);
            }
        }

        let extractor =
            FeatureExtractor::new(Arc::new(Lexicons::standard()), PatternAnalyzer::new());
        Ok(Pipeline::new(extractor, handle, convention))
    }
}

impl<A, C> Pipeline<A, C>
where
    A: TextAnalyzer,
    A::Error: Display,
    C: Classifier<Error = ClassifierError>,
{
    /// Create a pipeline from its parts
    pub fn new(extractor: FeatureExtractor<A>, classifier: C, convention: LabelConvention) -> Self {
        Self {
            extractor,
            classifier,
            convention,
        }
    }

    /// The feature extractor
    pub fn extractor(&self) -> &FeatureExtractor<A> {
        &self.extractor
    }

    /// The classifier
    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// How raw classes map to labels
    pub fn convention(&self) -> LabelConvention {
        self.convention
    }

    /// Whether the classifier's model is resident
    pub fn is_model_loaded(&self) -> bool {
        self.classifier.is_ready()
    }

    /// Analyze a body with no headline
    pub fn analyze(&self, text: &str) -> Result<Report, PipelineError> {
        self.analyze_with_title(text, "")
    }

    /// Analyze a body and its headline
    pub fn analyze_with_title(&self, text: &str, title: &str) -> Result<Report, PipelineError> {
        let extracted = self.features(text, title)?;
        let vector = &extracted.vector;

        let (raw, proba) = self.classifier.classify(vector)?;

        if !is_distribution(&proba) {
            return Err(PipelineError::InvalidLabel(format!(
                "probabilities {:?} are not a distribution",
                proba
            )));
        }

        let label = self.convention.label_for(raw).ok_or_else(|| {
            PipelineError::InvalidLabel(format!("raw label {} not in {{0, 1}}", raw))
        })?;
        let confidence = proba[0].max(proba[1]);

        info!(
            "Analyzed {} chars: {} ({:.2}%)",
            text.chars().count(),
            label.credibility(),
            confidence * 100.0
        );

        Ok(Report::build(label, confidence, vector))
    }

    /// Extract features without classifying
    ///
    /// Empty or whitespace-only text is rejected as [`PipelineError::MissingInput`].
    pub fn features(&self, text: &str, title: &str) -> Result<ExtractedFeatures, PipelineError> {
        if text.trim().is_empty() {
            return Err(PipelineError::MissingInput);
        }

        let extracted = self.extractor.extract(text, title);
        if !extracted.degraded.is_empty() {
            debug!("Degraded sub-computations: {:?}", extracted.degraded);
        }
        Ok(extracted)
    }
}

/// Tolerance on the sum of the two class probabilities
const DISTRIBUTION_TOLERANCE: f64 = 1e-6;

/// Two finite probabilities in [0, 1] that sum to 1
fn is_distribution(proba: &[f64; 2]) -> bool {
    proba.iter().all(|p| p.is_finite() && (0.0..=1.0).contains(p))
        && (proba[0] + proba[1] - 1.0).abs() <= DISTRIBUTION_TOLERANCE
}

impl<A, C> std::fmt::Debug for Pipeline<A, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("convention", &self.convention)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verity_classifier::MockClassifier;
    use verity_text::MockAnalyzer;

    fn pipeline(classifier: MockClassifier) -> Pipeline<MockAnalyzer, MockClassifier> {
        let extractor =
            FeatureExtractor::new(Arc::new(Lexicons::standard()), MockAnalyzer::default());
        Pipeline::new(extractor, classifier, LabelConvention::RealIsOne)
    }

    #[test]
    fn test_whitespace_is_missing_input() {
        let mock = MockClassifier::new(1, 0.9);
        let p = pipeline(mock.clone());
        assert_eq!(p.analyze("").unwrap_err(), PipelineError::MissingInput);
        assert_eq!(p.analyze(" \n\t").unwrap_err(), PipelineError::MissingInput);
        assert_eq!(mock.call_count(), 0);
    }

    #[test]
    fn test_features_only() {
        let p = pipeline(MockClassifier::unavailable());
        let extracted = p.features("Hello there!", "").unwrap();
        assert_eq!(extracted.title, "Hello there!");
        assert!(!p.is_model_loaded());
    }

    #[test]
    fn test_from_config_rejects_bad_convention() {
        let config = PipelineConfig {
            label_convention: "sideways".to_string(),
            ..PipelineConfig::default()
        };
        assert!(matches!(
            DefaultPipeline::from_config(&config),
            Err(PipelineError::Config(_))
        ));
    }

    #[test]
    fn test_is_distribution() {
        assert!(is_distribution(&[0.09, 0.91]));
        assert!(is_distribution(&[1.0, 0.0]));
        assert!(!is_distribution(&[0.0, 3.0]));
        assert!(!is_distribution(&[0.2, 0.3]));
        assert!(!is_distribution(&[-0.1, 1.1]));
        assert!(!is_distribution(&[f64::NAN, 0.5]));
    }

    #[test]
    fn test_from_config_is_lazy() {
        let config = PipelineConfig::with_model_path("/nonexistent/model.json");
        let p = DefaultPipeline::from_config(&config).unwrap();
        assert!(!p.is_model_loaded());
        assert!(p.analyze("Some text.").unwrap_err().is_unavailable());
    }
}
