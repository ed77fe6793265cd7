//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use serde::Serialize;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};
use verity_domain::Feature;
use verity_extractor::{ExtractedFeatures, Subcomputation};
use verity_pipeline::{ErrorResponse, FeatureMap, Report};

/// Features printed by `verity features`
#[derive(Debug, Serialize)]
pub struct FeatureListing {
    /// Title the headline features were computed on
    pub title: String,
    /// Feature values in schema order
    pub features: FeatureMap,
    /// Sub-computations replaced by defaults
    pub degraded: Vec<Subcomputation>,
}

impl From<&ExtractedFeatures> for FeatureListing {
    fn from(extracted: &ExtractedFeatures) -> Self {
        Self {
            title: extracted.title.clone(),
            features: FeatureMap::from(&extracted.vector),
            degraded: extracted.degraded.clone(),
        }
    }
}

/// One row of `verity schema`
#[derive(Debug, Serialize)]
struct SchemaEntry {
    index: usize,
    name: &'static str,
    display_name: String,
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// The configured format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format a credibility report.
    pub fn format_report(&self, report: &Report) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Table => Ok(self.format_report_table(report)),
        }
    }

    /// Format extracted features.
    pub fn format_features(&self, listing: &FeatureListing) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(listing)?),
            OutputFormat::Table => Ok(self.format_features_table(listing)),
        }
    }

    /// Format the feature schema.
    pub fn format_schema(&self) -> Result<String> {
        let entries: Vec<SchemaEntry> = Feature::ALL
            .iter()
            .map(|f| SchemaEntry {
                index: f.index(),
                name: f.name(),
                display_name: f.display_name(),
            })
            .collect();

        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&entries)?),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["#", "Name", "Display Name"]);
                for entry in &entries {
                    builder.push_record([
                        entry.index.to_string(),
                        entry.name.to_string(),
                        entry.display_name.clone(),
                    ]);
                }
                Ok(Self::render(builder))
            }
        }
    }

    /// Error body as compact JSON, whatever the format.
    pub fn format_error(&self, error: &ErrorResponse) -> String {
        serde_json::to_string(error)
            .unwrap_or_else(|_| format!("{{\"error\":\"{}\"}}", error.error))
    }

    fn format_report_table(&self, report: &Report) -> String {
        let verdict = if report.risk == "High" {
            self.colorize(&report.credibility, "red")
        } else {
            self.colorize(&report.credibility, "green")
        };

        let mut out = format!(
            "{} ({:.2}% confidence, {} risk)\n{}\n",
            verdict, report.confidence, report.risk, report.explanation
        );

        let mut builder = Builder::default();
        builder.push_record(["Feature", "Value"]);
        for insight in &report.insights {
            builder.push_record([insight.feature.clone(), format!("{:.4}", insight.value)]);
        }
        out.push_str(&Self::render(builder));
        out
    }

    fn format_features_table(&self, listing: &FeatureListing) -> String {
        let mut out = format!("Title: {}\n", listing.title);
        if !listing.degraded.is_empty() {
            let names: Vec<&str> = listing.degraded.iter().map(|d| d.as_str()).collect();
            out.push_str(&self.warning(&format!("Defaults used for: {}", names.join(", "))));
            out.push('\n');
        }

        let mut builder = Builder::default();
        builder.push_record(["#", "Feature", "Value"]);
        for (i, (name, value)) in listing.features.iter().enumerate() {
            builder.push_record([i.to_string(), name.to_string(), format!("{:.4}", value)]);
        }
        out.push_str(&Self::render(builder));
        out
    }

    fn render(builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verity_domain::{FeatureVector, Label, FEATURE_COUNT};

    fn sample_report() -> Report {
        let mut v = FeatureVector::zeros();
        v.set(Feature::BodyExclamations, 2.0);
        Report::build(Label::Fake, 0.77, &v)
    }

    #[test]
    fn test_report_json() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_report(&sample_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["credibility"], "Likely Fake");
        assert_eq!(value["confidence"], 77.0);
        assert_eq!(value["features"]["body_exclamations"], 2.0);
    }

    #[test]
    fn test_report_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_report(&sample_report()).unwrap();
        assert!(output.starts_with("Likely Fake (77.00% confidence, High risk)"));
        assert!(output.contains("Body Exclamations"));
        assert!(output.contains("2.0000"));
    }

    #[test]
    fn test_schema_json_lists_all_features() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let value: serde_json::Value =
            serde_json::from_str(&formatter.format_schema().unwrap()).unwrap();
        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), FEATURE_COUNT);
        assert_eq!(entries[0]["name"], "certainty_ratio");
        assert_eq!(entries[17]["index"], 17);
    }

    #[test]
    fn test_features_table_shows_degraded() {
        let listing = FeatureListing {
            title: "Headline".to_string(),
            features: FeatureMap::from(&FeatureVector::zeros()),
            degraded: vec![Subcomputation::Sentences],
        };
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_features(&listing).unwrap();
        assert!(output.contains("Title: Headline"));
        assert!(output.contains("Defaults used for: sentences"));
        assert!(output.contains("objective_ratio"));
    }

    #[test]
    fn test_error_is_compact_json() {
        let formatter = Formatter::new(OutputFormat::Table, true);
        let output = formatter.format_error(&ErrorResponse::new("No text provided"));
        assert_eq!(output, r#"{"error":"No text provided"}"#);
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.error("test"), "✗ test");
    }
}
