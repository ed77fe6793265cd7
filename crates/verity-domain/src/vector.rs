//! Feature vector - the ordered classifier input

use crate::feature::{Feature, FEATURE_COUNT, FEATURE_NAMES};

/// Ordered 18-column feature vector
///
/// The length is fixed by the type, so a vector can never drift from the
/// schema. Values are stored as `f64`; count features hold whole numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector {
    values: [f64; FEATURE_COUNT],
}

impl FeatureVector {
    /// All-zero vector (the result for empty input text)
    pub fn zeros() -> Self {
        Self {
            values: [0.0; FEATURE_COUNT],
        }
    }

    /// Create from raw values in schema order
    pub fn from_values(values: [f64; FEATURE_COUNT]) -> Self {
        Self { values }
    }

    /// Create from a slice, failing unless it has exactly [`FEATURE_COUNT`] values
    pub fn from_slice(values: &[f64]) -> Result<Self, String> {
        let values: [f64; FEATURE_COUNT] = values.try_into().map_err(|_| {
            format!(
                "Feature count mismatch: expected {}, got {}",
                FEATURE_COUNT,
                values.len()
            )
        })?;
        Ok(Self { values })
    }

    /// Number of columns (always [`FEATURE_COUNT`])
    pub fn len(&self) -> usize {
        FEATURE_COUNT
    }

    /// Always false; present for API symmetry with slices
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Values in schema order
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Values as a fixed-size array
    pub fn as_array(&self) -> &[f64; FEATURE_COUNT] {
        &self.values
    }

    /// Get a feature value
    pub fn get(&self, feature: Feature) -> f64 {
        self.values[feature.index()]
    }

    /// Get a feature value by column name
    pub fn get_by_name(&self, name: &str) -> Option<f64> {
        Feature::from_name(name).map(|f| self.get(f))
    }

    /// Set a feature value
    pub fn set(&mut self, feature: Feature, value: f64) {
        self.values[feature.index()] = value;
    }

    /// Column-labeled view: `(name, value)` pairs in schema order
    pub fn named(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        FEATURE_NAMES.iter().copied().zip(self.values.iter().copied())
    }

    /// Whether every value is zero
    pub fn is_zero(&self) -> bool {
        self.values.iter().all(|v| *v == 0.0)
    }
}

impl Default for FeatureVector {
    fn default() -> Self {
        Self::zeros()
    }
}

impl std::ops::Index<Feature> for FeatureVector {
    type Output = f64;

    fn index(&self, feature: Feature) -> &f64 {
        &self.values[feature.index()]
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn from_slice_keeps_positions(values in prop::collection::vec(-1e6f64..1e6, FEATURE_COUNT)) {
            let v = FeatureVector::from_slice(&values).unwrap();
            for feature in Feature::ALL {
                prop_assert_eq!(v.get(feature), values[feature.index()]);
                prop_assert_eq!(v.get_by_name(feature.name()), Some(values[feature.index()]));
            }
        }

        #[test]
        fn from_slice_rejects_other_lengths(len in 0usize..40) {
            prop_assume!(len != FEATURE_COUNT);
            prop_assert!(FeatureVector::from_slice(&vec![0.0; len]).is_err());
        }
    }
}
