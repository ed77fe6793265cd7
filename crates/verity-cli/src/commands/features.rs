//! Features command implementation.

use crate::cli::InputArgs;
use crate::commands::resolve_text;
use crate::error::Result;
use crate::output::{FeatureListing, Formatter};
use std::fmt::Display;
use std::io::Read;
use verity_domain::traits::{Classifier, TextAnalyzer};
use verity_pipeline::{ClassifierError, Pipeline};

/// Execute the features command. Never touches the model.
pub fn execute_features<A, C, R>(
    args: &InputArgs,
    stdin: R,
    pipeline: &Pipeline<A, C>,
    formatter: &Formatter,
) -> Result<String>
where
    A: TextAnalyzer,
    A::Error: Display,
    C: Classifier<Error = ClassifierError>,
    R: Read,
{
    let text = resolve_text(args, stdin)?;
    let extracted = pipeline.features(&text, &args.title)?;
    formatter.format_features(&FeatureListing::from(&extracted))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use std::sync::Arc;
    use verity_classifier::MockClassifier;
    use verity_domain::{LabelConvention, Lexicons};
    use verity_extractor::FeatureExtractor;
    use verity_text::PatternAnalyzer;

    #[test]
    fn test_features_without_model() {
        let mock = MockClassifier::unavailable();
        let extractor =
            FeatureExtractor::new(Arc::new(Lexicons::standard()), PatternAnalyzer::new());
        let pipeline = Pipeline::new(extractor, mock.clone(), LabelConvention::RealIsOne);

        let args = InputArgs {
            text: Some("First sentence. Second sentence?".to_string()),
            title: String::new(),
            stdin: false,
        };
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = execute_features(&args, std::io::empty(), &pipeline, &formatter).unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["title"], "First sentence.");
        assert_eq!(value["features"]["body_questions"], 1.0);
        assert_eq!(value["features"].as_object().unwrap().len(), 18);
        assert_eq!(value["degraded"].as_array().unwrap().len(), 0);
        assert_eq!(mock.call_count(), 0);
    }
}
