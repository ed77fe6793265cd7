//! Command implementations.

pub mod analyze;
pub mod config;
pub mod features;
pub mod schema;

pub use self::analyze::execute_analyze;
pub use self::config::{execute_config_init, execute_config_show};
pub use self::features::execute_features;
pub use self::schema::execute_schema;

use crate::cli::InputArgs;
use crate::error::{CliError, Result};
use std::io::Read;

/// Resolve the body text from the positional argument or standard input.
///
/// No text at all is [`CliError::NoText`]; text that is empty after
/// trimming is [`CliError::EmptyText`].
pub fn resolve_text<R: Read>(args: &InputArgs, mut stdin: R) -> Result<String> {
    let text = match (&args.text, args.stdin) {
        (Some(text), _) => text.clone(),
        (None, true) => {
            let mut buf = String::new();
            stdin.read_to_string(&mut buf)?;
            buf
        }
        (None, false) => return Err(CliError::NoText),
    };

    if text.trim().is_empty() {
        return Err(CliError::EmptyText);
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(text: Option<&str>, stdin: bool) -> InputArgs {
        InputArgs {
            text: text.map(str::to_string),
            title: String::new(),
            stdin,
        }
    }

    #[test]
    fn test_positional_text() {
        let text = resolve_text(&args(Some("Hello."), false), std::io::empty()).unwrap();
        assert_eq!(text, "Hello.");
    }

    #[test]
    fn test_no_text() {
        assert!(matches!(
            resolve_text(&args(None, false), std::io::empty()),
            Err(CliError::NoText)
        ));
    }

    #[test]
    fn test_empty_text() {
        for text in ["", "   ", "\n\t"] {
            assert!(matches!(
                resolve_text(&args(Some(text), false), std::io::empty()),
                Err(CliError::EmptyText)
            ));
        }
    }

    #[test]
    fn test_stdin_text() {
        let input = b"Read from a pipe.\n".as_slice();
        let text = resolve_text(&args(None, true), input).unwrap();
        assert_eq!(text, "Read from a pipe.\n");
    }

    #[test]
    fn test_empty_stdin() {
        assert!(matches!(
            resolve_text(&args(None, true), std::io::empty()),
            Err(CliError::EmptyText)
        ));
    }
}
