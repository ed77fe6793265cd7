//! JSON model artifact: logistic regression or random forest
//!
//! ```json
//! {
//!   "format_version": 1,
//!   "feature_names": ["certainty_ratio", "hedging_ratio", "..."],
//!   "model": { "type": "logistic_regression", "coefficients": [0.1, "..."], "intercept": 0.0 }
//! }
//! ```
//!
//! A forest is `{ "type": "random_forest", "trees": [{ "nodes": [...] }] }`.
//! Each node is a split `{ "feature", "threshold", "left", "right" }` (go
//! left when `x[feature] <= threshold`) or a leaf `{ "value": [w0, w1] }`.
//! Node 0 is the root and children always follow their parent.

use crate::error::ClassifierError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use verity_domain::traits::Classifier;
use verity_domain::{FeatureVector, FEATURE_NAMES};

/// Supported artifact format
pub const FORMAT_VERSION: u32 = 1;

/// A trained model plus the feature columns it was trained on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    /// Artifact format version
    pub format_version: u32,

    /// Training-time column names, in order
    pub feature_names: Vec<String>,

    /// Model parameters
    pub model: Model,
}

/// Model parameters by model type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Model {
    /// `p1 = sigmoid(w·x + b)`
    LogisticRegression(LogisticRegression),
    /// Mean of normalized leaf distributions
    RandomForest(RandomForest),
}

impl Model {
    /// Model type name as written in the artifact
    pub fn kind(&self) -> &'static str {
        match self {
            Model::LogisticRegression(_) => "logistic_regression",
            Model::RandomForest(_) => "random_forest",
        }
    }
}

/// Logistic regression weights
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticRegression {
    /// One weight per feature column
    pub coefficients: Vec<f64>,
    /// Bias term
    pub intercept: f64,
}

/// Ensemble of decision trees
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomForest {
    /// Trees; each votes with its leaf distribution
    pub trees: Vec<Tree>,
}

/// A decision tree stored as a flat node list rooted at index 0
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tree {
    /// Nodes; children always have a greater index than their parent
    pub nodes: Vec<Node>,
}

/// Decision tree node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    /// Internal node
    Split {
        /// Feature column index
        feature: usize,
        /// Go left when `x[feature] <= threshold`
        threshold: f64,
        /// Left child index
        left: usize,
        /// Right child index
        right: usize,
    },
    /// Terminal node with per-class weights
    Leaf {
        /// Class weights (counts or probabilities), normalized on use
        value: [f64; 2],
    },
}

impl ModelArtifact {
    /// Parse and validate an artifact from JSON
    pub fn from_json(json: &str) -> Result<Self, ClassifierError> {
        let artifact: ModelArtifact = serde_json::from_str(json)?;
        artifact.validate()?;
        Ok(artifact)
    }

    /// Read, parse and validate an artifact file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ClassifierError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| ClassifierError::Unavailable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_json(&json)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, ClassifierError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Logistic regression artifact over the standard schema
    pub fn logistic(coefficients: Vec<f64>, intercept: f64) -> Self {
        Self {
            format_version: FORMAT_VERSION,
            feature_names: standard_feature_names(),
            model: Model::LogisticRegression(LogisticRegression {
                coefficients,
                intercept,
            }),
        }
    }

    /// Random forest artifact over the standard schema
    pub fn forest(trees: Vec<Tree>) -> Self {
        Self {
            format_version: FORMAT_VERSION,
            feature_names: standard_feature_names(),
            model: Model::RandomForest(RandomForest { trees }),
        }
    }

    /// Check the artifact is internally consistent
    ///
    /// Does not compare `feature_names` with the extractor's schema; that
    /// happens on every prediction (see [`check_schema`](Self::check_schema)).
    pub fn validate(&self) -> Result<(), ClassifierError> {
        if self.format_version != FORMAT_VERSION {
            return Err(ClassifierError::InvalidArtifact(format!(
                "unsupported format_version {} (expected {})",
                self.format_version, FORMAT_VERSION
            )));
        }

        let width = self.feature_names.len();

        match &self.model {
            Model::LogisticRegression(lr) => {
                if lr.coefficients.len() != width {
                    return Err(ClassifierError::InvalidArtifact(format!(
                        "{} coefficients for {} feature names",
                        lr.coefficients.len(),
                        width
                    )));
                }
                if !lr.intercept.is_finite() || lr.coefficients.iter().any(|c| !c.is_finite()) {
                    return Err(ClassifierError::InvalidArtifact(
                        "non-finite weight".to_string(),
                    ));
                }
            }
            Model::RandomForest(rf) => {
                if rf.trees.is_empty() {
                    return Err(ClassifierError::InvalidArtifact(
                        "random forest has no trees".to_string(),
                    ));
                }
                for (t, tree) in rf.trees.iter().enumerate() {
                    tree.validate(width)
                        .map_err(|e| ClassifierError::InvalidArtifact(format!("tree {}: {}", t, e)))?;
                }
            }
        }

        Ok(())
    }

    /// Check the artifact's columns are exactly the extractor's schema
    pub fn check_schema(&self) -> Result<(), ClassifierError> {
        let expected = FEATURE_NAMES.len();
        let actual = self.feature_names.len();

        let first_difference = FEATURE_NAMES
            .iter()
            .zip(&self.feature_names)
            .position(|(e, a)| *e != a.as_str());

        match (first_difference, expected == actual) {
            (None, true) => Ok(()),
            (Some(i), _) => Err(ClassifierError::SchemaMismatch(format!(
                "expected {} columns, artifact has {}; column {} is '{}', expected '{}'",
                expected, actual, i, self.feature_names[i], FEATURE_NAMES[i]
            ))),
            (None, false) => Err(ClassifierError::SchemaMismatch(format!(
                "expected {} columns, artifact has {}",
                expected, actual
            ))),
        }
    }

    /// Probability of each raw class for a feature vector
    pub fn probabilities(&self, features: &FeatureVector) -> Result<[f64; 2], ClassifierError> {
        self.check_schema()?;
        let x = features.as_slice();

        let proba = match &self.model {
            Model::LogisticRegression(lr) => {
                let z = lr.intercept
                    + lr.coefficients
                        .iter()
                        .zip(x)
                        .map(|(w, v)| w * v)
                        .sum::<f64>();
                let p1 = sigmoid(z);
                [1.0 - p1, p1]
            }
            Model::RandomForest(rf) => {
                let mut sum = [0.0, 0.0];
                for tree in &rf.trees {
                    let [w0, w1] = tree.evaluate(x)?;
                    let total = w0 + w1;
                    sum[0] += w0 / total;
                    sum[1] += w1 / total;
                }
                let n = rf.trees.len() as f64;
                [sum[0] / n, sum[1] / n]
            }
        };

        if proba.iter().any(|p| !p.is_finite() || *p < 0.0) {
            return Err(ClassifierError::InvalidOutput(format!(
                "probabilities {:?} are not a distribution",
                proba
            )));
        }

        Ok(proba)
    }
}

impl Classifier for ModelArtifact {
    type Error = ClassifierError;

    fn predict(&self, features: &FeatureVector) -> Result<u8, Self::Error> {
        self.predict_proba(features).map(|p| argmax(&p))
    }

    fn predict_proba(&self, features: &FeatureVector) -> Result<[f64; 2], Self::Error> {
        self.probabilities(features)
    }

    fn classify(&self, features: &FeatureVector) -> Result<(u8, [f64; 2]), Self::Error> {
        let proba = self.probabilities(features)?;
        Ok((argmax(&proba), proba))
    }
}

impl Tree {
    /// A single-leaf tree
    pub fn leaf(value: [f64; 2]) -> Self {
        Self {
            nodes: vec![Node::Leaf { value }],
        }
    }

    /// A depth-one tree: `left` when `x[feature] <= threshold`, else `right`
    pub fn stump(feature: usize, threshold: f64, left: [f64; 2], right: [f64; 2]) -> Self {
        Self {
            nodes: vec![
                Node::Split {
                    feature,
                    threshold,
                    left: 1,
                    right: 2,
                },
                Node::Leaf { value: left },
                Node::Leaf { value: right },
            ],
        }
    }

    fn validate(&self, width: usize) -> Result<(), String> {
        if self.nodes.is_empty() {
            return Err("no nodes".to_string());
        }
        let len = self.nodes.len();
        for (i, node) in self.nodes.iter().enumerate() {
            match node {
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if *feature >= width {
                        return Err(format!("node {} splits on feature {} of {}", i, feature, width));
                    }
                    if !threshold.is_finite() {
                        return Err(format!("node {} has a non-finite threshold", i));
                    }
                    for child in [*left, *right] {
                        if child <= i || child >= len {
                            return Err(format!("node {} has invalid child {}", i, child));
                        }
                    }
                }
                Node::Leaf { value } => {
                    if value.iter().any(|w| !w.is_finite() || *w < 0.0) {
                        return Err(format!("node {} has a negative or non-finite weight", i));
                    }
                    if value[0] + value[1] <= 0.0 {
                        return Err(format!("node {} has zero total weight", i));
                    }
                }
            }
        }
        Ok(())
    }

    /// Walk from the root to a leaf and return its raw weights
    fn evaluate(&self, x: &[f64]) -> Result<[f64; 2], ClassifierError> {
        let mut index = 0;
        // A valid tree reaches a leaf in fewer steps than it has nodes
        for _ in 0..self.nodes.len() {
            match self.nodes.get(index) {
                Some(Node::Leaf { value }) => return Ok(*value),
                Some(Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                }) => {
                    let v = x.get(*feature).copied().ok_or_else(|| {
                        ClassifierError::InvalidArtifact(format!("feature {} out of range", feature))
                    })?;
                    index = if v <= *threshold { *left } else { *right };
                }
                None => break,
            }
        }
        Err(ClassifierError::InvalidArtifact(
            "tree walk did not reach a leaf".to_string(),
        ))
    }
}

/// Column names of the extractor's schema as owned strings
pub fn standard_feature_names() -> Vec<String> {
    FEATURE_NAMES.iter().map(|n| n.to_string()).collect()
}

/// Index of the larger probability; ties go to class 0
pub fn argmax(proba: &[f64; 2]) -> u8 {
    if proba[1] > proba[0] {
        1
    } else {
        0
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

#[cfg(test)]
mod tests {
    use super::*;
    use verity_domain::{Feature, FEATURE_COUNT};

    fn vector_with(feature: Feature, value: f64) -> FeatureVector {
        let mut v = FeatureVector::zeros();
        v.set(feature, value);
        v
    }

    #[test]
    fn test_logistic_zero_weights_is_even() {
        let artifact = ModelArtifact::logistic(vec![0.0; FEATURE_COUNT], 0.0);
        let p = artifact.predict_proba(&FeatureVector::zeros()).unwrap();
        assert_eq!(p, [0.5, 0.5]);
        // Tie goes to class 0
        assert_eq!(artifact.predict(&FeatureVector::zeros()).unwrap(), 0);
    }

    #[test]
    fn test_logistic_weights() {
        let mut coefficients = vec![0.0; FEATURE_COUNT];
        coefficients[Feature::ObjectiveRatio.index()] = 10.0;
        let artifact = ModelArtifact::logistic(coefficients, -1.0);

        let real = vector_with(Feature::ObjectiveRatio, 0.5);
        let p = artifact.predict_proba(&real).unwrap();
        assert!((p[1] - sigmoid(4.0)).abs() < 1e-12);
        assert!((p[0] + p[1] - 1.0).abs() < 1e-12);
        assert_eq!(artifact.predict(&real).unwrap(), 1);
        assert_eq!(artifact.predict(&FeatureVector::zeros()).unwrap(), 0);
    }

    #[test]
    fn test_forest_routes_left_on_equal() {
        let tree = Tree::stump(Feature::BodyExclamations.index(), 2.0, [1.0, 3.0], [4.0, 0.0]);
        let artifact = ModelArtifact::forest(vec![tree]);

        let at_threshold = vector_with(Feature::BodyExclamations, 2.0);
        assert_eq!(artifact.predict_proba(&at_threshold).unwrap(), [0.25, 0.75]);

        let above = vector_with(Feature::BodyExclamations, 3.0);
        assert_eq!(artifact.predict_proba(&above).unwrap(), [1.0, 0.0]);
    }

    #[test]
    fn test_forest_averages_normalized_leaves() {
        let artifact = ModelArtifact::forest(vec![
            Tree::leaf([10.0, 30.0]),
            Tree::leaf([1.0, 0.0]),
        ]);
        let p = artifact.predict_proba(&FeatureVector::zeros()).unwrap();
        assert_eq!(p, [0.625, 0.375]);
        assert_eq!(artifact.predict(&FeatureVector::zeros()).unwrap(), 0);
    }

    #[test]
    fn test_validate_rejects_bad_version() {
        let mut artifact = ModelArtifact::logistic(vec![0.0; FEATURE_COUNT], 0.0);
        artifact.format_version = 2;
        assert!(matches!(
            artifact.validate(),
            Err(ClassifierError::InvalidArtifact(_))
        ));
    }

    #[test]
    fn test_validate_rejects_coefficient_count() {
        let artifact = ModelArtifact::logistic(vec![0.0; 3], 0.0);
        assert!(artifact.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_backward_child() {
        let tree = Tree {
            nodes: vec![
                Node::Split {
                    feature: 0,
                    threshold: 0.5,
                    left: 1,
                    right: 0,
                },
                Node::Leaf { value: [1.0, 0.0] },
            ],
        };
        let err = ModelArtifact::forest(vec![tree]).validate().unwrap_err();
        assert!(err.to_string().contains("invalid child 0"));
    }

    #[test]
    fn test_validate_rejects_bad_leaves_and_features() {
        let zero_leaf = ModelArtifact::forest(vec![Tree::leaf([0.0, 0.0])]);
        assert!(zero_leaf.validate().is_err());

        let negative_leaf = ModelArtifact::forest(vec![Tree::leaf([-1.0, 2.0])]);
        assert!(negative_leaf.validate().is_err());

        let bad_feature = ModelArtifact::forest(vec![Tree::stump(99, 0.0, [1.0, 0.0], [0.0, 1.0])]);
        assert!(bad_feature.validate().is_err());

        let empty = ModelArtifact::forest(vec![]);
        assert!(empty.validate().is_err());
    }

    #[test]
    fn test_schema_mismatch_on_order() {
        let mut artifact = ModelArtifact::logistic(vec![0.0; FEATURE_COUNT], 0.0);
        artifact.feature_names.swap(3, 4);
        assert!(artifact.validate().is_ok());

        let err = artifact.predict(&FeatureVector::zeros()).unwrap_err();
        match err {
            ClassifierError::SchemaMismatch(msg) => {
                assert!(msg.contains("column 3 is 'polarity', expected 'subjectivity'"), "{}", msg)
            }
            other => panic!("expected SchemaMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_schema_mismatch_on_width() {
        let mut artifact = ModelArtifact::logistic(vec![0.0; FEATURE_COUNT], 0.0);
        artifact.feature_names.pop();
        if let Model::LogisticRegression(lr) = &mut artifact.model {
            lr.coefficients.pop();
        }
        assert!(artifact.validate().is_ok());

        let err = artifact.check_schema().unwrap_err();
        assert_eq!(
            err,
            ClassifierError::SchemaMismatch("expected 18 columns, artifact has 17".to_string())
        );
    }

    #[test]
    fn test_json_shape() {
        let json = r#"{
            "format_version": 1,
            "feature_names": ["certainty_ratio"],
            "model": {
                "type": "random_forest",
                "trees": [{ "nodes": [
                    { "feature": 0, "threshold": 0.1, "left": 1, "right": 2 },
                    { "value": [5, 1] },
                    { "value": [0, 2] }
                ]}]
            }
        }"#;
        let artifact = ModelArtifact::from_json(json).unwrap();
        assert_eq!(artifact.model.kind(), "random_forest");
        // Parses and validates, but is not the extractor's schema
        assert!(artifact.check_schema().is_err());
    }

    #[test]
    fn test_unknown_model_type() {
        let json = r#"{"format_version":1,"feature_names":[],"model":{"type":"svm"}}"#;
        assert!(matches!(
            ModelArtifact::from_json(json),
            Err(ClassifierError::InvalidArtifact(_))
        ));
    }

    #[test]
    fn test_json_roundtrip_preserves_model() {
        let artifact = ModelArtifact::forest(vec![Tree::stump(4, -0.2, [2.0, 1.0], [1.0, 2.0])]);
        let parsed = ModelArtifact::from_json(&artifact.to_json().unwrap()).unwrap();
        assert_eq!(parsed, artifact);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use verity_domain::FEATURE_COUNT;

    proptest! {
        /// Property: logistic output is a distribution for any finite input
        #[test]
        fn test_logistic_is_distribution(
            coefficients in prop::collection::vec(-50.0f64..50.0, FEATURE_COUNT),
            intercept in -50.0f64..50.0,
            values in prop::collection::vec(-100.0f64..100.0, FEATURE_COUNT),
        ) {
            let artifact = ModelArtifact::logistic(coefficients, intercept);
            let features = FeatureVector::from_slice(&values).unwrap();
            let p = artifact.predict_proba(&features).unwrap();
            prop_assert!(p.iter().all(|x| (0.0..=1.0).contains(x)));
            prop_assert!((p[0] + p[1] - 1.0).abs() < 1e-9);
            prop_assert_eq!(artifact.predict(&features).unwrap(), argmax(&p));
        }
    }
}
