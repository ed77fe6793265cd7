//! Analyze command implementation.

use crate::cli::InputArgs;
use crate::commands::resolve_text;
use crate::error::Result;
use crate::output::Formatter;
use std::fmt::Display;
use std::io::Read;
use verity_domain::traits::{Classifier, TextAnalyzer};
use verity_pipeline::{ClassifierError, Pipeline};

/// Execute the analyze command, returning the formatted report.
pub fn execute_analyze<A, C, R>(
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
    let report = pipeline.analyze_with_title(&text, &args.title)?;
    formatter.format_report(&report)
}
