//! Report and error response shapes

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use verity_domain::{Feature, FeatureVector, Label};

/// Decimal places for the confidence percentage
const CONFIDENCE_DECIMALS: i32 = 2;

/// Decimal places for insight values
const INSIGHT_DECIMALS: i32 = 4;

/// Credibility report for one text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// "Likely Real" or "Likely Fake"
    pub credibility: String,

    /// Probability of the predicted class as a percentage, 2 decimals
    pub confidence: f64,

    /// "Low" or "High"
    pub risk: String,

    /// Raw feature values by column name, in schema order
    pub features: FeatureMap,

    /// Feature values by display name, rounded to 4 decimals
    pub insights: Vec<Insight>,

    /// Fixed explanation for the verdict
    pub explanation: String,
}

impl Report {
    /// Build a report from a verdict, its probability in [0, 1], and the
    /// features it was computed from
    pub fn build(label: Label, confidence: f64, features: &FeatureVector) -> Self {
        let insights = Feature::ALL
            .iter()
            .map(|f| Insight {
                feature: f.display_name(),
                value: round_to(features.get(*f), INSIGHT_DECIMALS),
            })
            .collect();

        Self {
            credibility: label.credibility().to_string(),
            confidence: round_to(confidence * 100.0, CONFIDENCE_DECIMALS),
            risk: label.risk().as_str().to_string(),
            features: FeatureMap::from(features),
            insights,
            explanation: label.explanation().to_string(),
        }
    }
}

/// One feature as shown to users
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    /// Display name, e.g. "Avg Sentence Length"
    pub feature: String,
    /// Rounded value
    pub value: f64,
}

/// Ordered name → value mapping, serialized as a JSON object
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureMap(Vec<(String, f64)>);

impl FeatureMap {
    /// Value for a column name
    pub fn get(&self, name: &str) -> Option<f64> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, v)| *v)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the map has no entries
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(n, v)| (n.as_str(), *v))
    }
}

impl From<&FeatureVector> for FeatureMap {
    fn from(vector: &FeatureVector) -> Self {
        Self(vector.named().map(|(n, v)| (n.to_string(), v)).collect())
    }
}

impl Serialize for FeatureMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in &self.0 {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for FeatureMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FeatureMapVisitor;

        impl<'de> Visitor<'de> for FeatureMapVisitor {
            type Value = FeatureMap;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of feature names to numbers")
            }

            fn visit_map<M: MapAccess<'de>>(self, mut access: M) -> Result<FeatureMap, M::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, value)) = access.next_entry::<String, f64>()? {
                    entries.push((name, value));
                }
                Ok(FeatureMap(entries))
            }
        }

        deserializer.deserialize_map(FeatureMapVisitor)
    }
}

/// Error body returned by every entry point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Short, stable error message
    pub error: String,

    /// Underlying cause, when there is one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    /// Error with no details
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    /// Error with details
    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

/// Round half away from zero to `places` decimals
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
