//! Credibility labels and the raw-label convention

/// Credibility verdict for a piece of text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    /// Text resembles reliable, factual reporting
    Real,
    /// Text resembles sensational or misleading content
    Fake,
}

impl Label {
    /// Credibility string shown to users
    pub fn credibility(&self) -> &'static str {
        match self {
            Label::Real => "Likely Real",
            Label::Fake => "Likely Fake",
        }
    }

    /// Risk level, derived from the label alone
    pub fn risk(&self) -> Risk {
        match self {
            Label::Real => Risk::Low,
            Label::Fake => Risk::High,
        }
    }

    /// Fixed explanation template for the label
    pub fn explanation(&self) -> &'static str {
        match self {
            Label::Real => {
                "The text demonstrates linguistic and emotional patterns commonly found \
                 in reliable and factual news content."
            }
            Label::Fake => {
                "The text exhibits linguistic indicators frequently associated with \
                 sensational or misleading news content. Verification is recommended."
            }
        }
    }
}

/// Risk level attached to a verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Risk {
    /// Credible text
    Low,
    /// Text that should be verified
    High,
}

impl Risk {
    /// Get the risk name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Risk::Low => "Low",
            Risk::High => "High",
        }
    }
}

/// How a classifier's raw class index maps onto a [`Label`]
///
/// The convention is fixed by how the deployed artifact was trained, not by
/// this code. `RealIsOne` is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LabelConvention {
    /// Class 1 = real, class 0 = fake
    #[default]
    RealIsOne,
    /// Class 0 = real, class 1 = fake
    RealIsZero,
}

impl LabelConvention {
    /// Map a raw class index to a label; `None` for anything but 0 or 1
    pub fn label_for(&self, raw: u8) -> Option<Label> {
        match (self, raw) {
            (LabelConvention::RealIsOne, 1) | (LabelConvention::RealIsZero, 0) => Some(Label::Real),
            (LabelConvention::RealIsOne, 0) | (LabelConvention::RealIsZero, 1) => Some(Label::Fake),
            _ => None,
        }
    }

    /// Raw class index for a label
    pub fn raw_for(&self, label: Label) -> u8 {
        match (self, label) {
            (LabelConvention::RealIsOne, Label::Real) => 1,
            (LabelConvention::RealIsOne, Label::Fake) => 0,
            (LabelConvention::RealIsZero, Label::Real) => 0,
            (LabelConvention::RealIsZero, Label::Fake) => 1,
        }
    }

    /// Get the convention name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            LabelConvention::RealIsOne => "real-is-one",
            LabelConvention::RealIsZero => "real-is-zero",
        }
    }

    /// Parse a convention name; underscores and dashes are interchangeable
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "real-is-one" => Some(LabelConvention::RealIsOne),
            "real-is-zero" => Some(LabelConvention::RealIsZero),
            _ => None,
        }
    }
}

impl std::str::FromStr for LabelConvention {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid label convention: {}", s))
    }
}

impl std::fmt::Display for LabelConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
