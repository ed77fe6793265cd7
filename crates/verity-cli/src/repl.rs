//! Interactive REPL (Read-Eval-Print Loop) mode.

use crate::cli::InputArgs;
use crate::commands;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::fmt::Display;
use std::path::PathBuf;
use verity_domain::traits::{Classifier, TextAnalyzer};
use verity_pipeline::{ClassifierError, Pipeline};

/// Run the interactive REPL.
pub fn run_repl<A, C>(
    pipeline: &Pipeline<A, C>,
    config: &Config,
    formatter: &Formatter,
) -> Result<()>
where
    A: TextAnalyzer,
    A::Error: Display,
    C: Classifier<Error = ClassifierError>,
{
    println!(
        "{}",
        formatter.info("Verity REPL - Enter text to analyze, 'help' for commands, 'exit' to quit")
    );
    println!();

    let rl_config = rustyline::Config::builder()
        .max_history_size(config.settings.history_size)
        .map_err(editor_error)?
        .build();
    let mut editor = DefaultEditor::with_config(rl_config).map_err(editor_error)?;

    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    let mut title = String::new();

    loop {
        let prompt = if title.is_empty() {
            "verity> ".to_string()
        } else {
            format!("verity [{}]> ", truncate(&title, 24))
        };

        match editor.readline(&prompt) {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                let result = match parse_repl_command(line) {
                    ReplCommand::Exit => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    ReplCommand::Help => {
                        print_help(formatter);
                        continue;
                    }
                    ReplCommand::SetTitle(new_title) => {
                        title = new_title;
                        continue;
                    }
                    ReplCommand::Schema => commands::execute_schema(formatter),
                    ReplCommand::Features(text) => commands::execute_features(
                        &input(text, &title),
                        std::io::empty(),
                        pipeline,
                        formatter,
                    ),
                    ReplCommand::Analyze(text) => commands::execute_analyze(
                        &input(text, &title),
                        std::io::empty(),
                        pipeline,
                        formatter,
                    ),
                };

                match result {
                    Ok(output) => println!("{}", output),
                    Err(e) => eprintln!("{}", formatter.error(&e.to_string())),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    editor.save_history(&history_path).ok();

    Ok(())
}

/// REPL command type.
#[derive(Debug, PartialEq)]
enum ReplCommand {
    Exit,
    Help,
    Schema,
    SetTitle(String),
    Features(String),
    Analyze(String),
}

/// Parse a REPL line. Anything that is not a command is text to analyze.
fn parse_repl_command(line: &str) -> ReplCommand {
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    match head {
        "exit" | "quit" | "q" if rest.is_empty() => ReplCommand::Exit,
        "help" | "?" if rest.is_empty() => ReplCommand::Help,
        "schema" if rest.is_empty() => ReplCommand::Schema,
        "title" => ReplCommand::SetTitle(rest.to_string()),
        "features" if !rest.is_empty() => ReplCommand::Features(rest.to_string()),
        _ => ReplCommand::Analyze(line.to_string()),
    }
}

fn input(text: String, title: &str) -> InputArgs {
    InputArgs {
        text: Some(text),
        title: title.to_string(),
        stdin: false,
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(max).collect();
        out.push('…');
        out
    }
}

fn editor_error(e: ReadlineError) -> CliError {
    CliError::Io(std::io::Error::new(
        std::io::ErrorKind::Other,
        format!("Failed to initialize editor: {}", e),
    ))
}

fn get_history_path() -> Result<PathBuf> {
    let verity_dir = Config::dir()?;
    std::fs::create_dir_all(&verity_dir)?;
    Ok(verity_dir.join("history.txt"))
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!();
    println!("  <text>                 - Analyze the text");
    println!("  features <text>        - Show extracted features only");
    println!("  title <headline>       - Use a headline for the following texts");
    println!("  title                  - Clear the headline");
    println!("  schema                 - Show the feature schema");
    println!("  help, ?                - Show this help");
    println!("  exit, quit, q          - Exit REPL");
    println!();
}
