//! Implementation of the `lexis check` command.

use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use lexis::parser::parse_source;
use lexis::SourceFormat;
use miette::{IntoDiagnostic, Report};
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::debug;

use crate::output::LexisDiagnostic;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Files to check (.lex or .json)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for a single checked file.
#[derive(Debug, Serialize)]
struct CheckJson {
    file: String,
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    paths: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorJson>,
}

#[derive(Debug, Serialize)]
struct ErrorJson {
    line: usize,
    column: usize,
    message: String,
}

/// Outcome of checking one file.
enum Outcome {
    Ok { paths: usize },
    Unreadable(String),
    Invalid(LexisDiagnostic, ErrorJson),
}

fn check_file(path: &Path) -> Outcome {
    let content = match read_to_string(path) {
        Ok(content) => content,
        Err(e) => return Outcome::Unreadable(e.to_string()),
    };

    match parse_source(&content, SourceFormat::from_path(path)) {
        Ok(tree) => Outcome::Ok {
            paths: tree.leaf_paths('.').len(),
        },
        Err(e) => {
            let (line, column) = e.position();
            let diagnostic = LexisDiagnostic::from_parse_error(path, &content, &e);
            Outcome::Invalid(
                diagnostic,
                ErrorJson {
                    line,
                    column,
                    message: e.message(),
                },
            )
        }
    }
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> miette::Result<i32> {
    let mut failed = false;
    let mut summary = Vec::new();

    for path in &args.files {
        debug!(path = %path.display(), "checking");
        let file = path.display().to_string();
        match check_file(path) {
            Outcome::Ok { paths } => {
                if !args.json {
                    println!("{} {} ({} paths)", "ok".green(), file, paths);
                }
                summary.push(CheckJson {
                    file,
                    ok: true,
                    paths: Some(paths),
                    error: None,
                });
            }
            Outcome::Unreadable(message) => {
                failed = true;
                if !args.json {
                    eprintln!("{} {}: {}", "error".red(), file, message);
                }
                summary.push(CheckJson {
                    file,
                    ok: false,
                    paths: None,
                    error: Some(ErrorJson {
                        line: 0,
                        column: 0,
                        message,
                    }),
                });
            }
            Outcome::Invalid(diagnostic, error) => {
                failed = true;
                if !args.json {
                    eprintln!("{:?}", Report::new(diagnostic));
                }
                summary.push(CheckJson {
                    file,
                    ok: false,
                    paths: None,
                    error: Some(error),
                });
            }
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary).into_diagnostic()?);
    }

    if failed {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
