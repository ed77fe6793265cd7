//! Schema command implementation.

use crate::error::Result;
use crate::output::Formatter;

/// Execute the schema command.
pub fn execute_schema(formatter: &Formatter) -> Result<String> {
    formatter.format_schema()
}
