//! Implementation of the `lexis eval` command.

use std::path::PathBuf;

use lexis::{Resolver, Variables};
use miette::IntoDiagnostic;
use owo_colors::OwoColorize;
use serde::Serialize;

use super::load_translations;

/// Arguments for the eval command.
#[derive(Debug, clap::Args)]
pub struct EvalArgs {
    /// Language code for evaluation (e.g., en, fr, ru)
    #[arg(long, env = "LEXIS_LANG")]
    pub lang: String,

    /// Translation files to load, in order (repeatable)
    #[arg(short, long = "file", required = true)]
    pub files: Vec<PathBuf>,

    /// Translation path to resolve (e.g., errors.notfound)
    #[arg(long)]
    pub path: String,

    /// Count used to pick a plural form
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub plural: i64,

    /// Variables in name=value format (repeatable)
    #[arg(long = "var", value_parser = parse_key_val)]
    pub vars: Vec<(String, String)>,

    /// Text returned when the path has no translation
    #[arg(long)]
    pub fallback: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for eval results.
#[derive(Serialize)]
pub struct EvalResult {
    pub result: String,
    pub found: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

/// Parse a name=value variable string.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let pos = s
        .find('=')
        .ok_or_else(|| format!("invalid variable format '{}': expected name=value", s))?;
    Ok((s[..pos].to_string(), s[pos + 1..].to_string()))
}

/// Translate the requested path. A path counts as found only when a text or
/// plural form is actually selected for the requested count.
fn evaluate(resolver: &Resolver, args: &EvalArgs, variables: &Variables) -> EvalResult {
    let result = resolver
        .translate(&args.path)
        .variables(variables)
        .plural(args.plural)
        .language(&args.lang)
        .maybe_fallback(args.fallback.as_deref())
        .call();

    let found = resolver
        .lookup(&args.path, args.plural, Some(&args.lang))
        .is_some();
    let suggestions = if found {
        Vec::new()
    } else {
        resolver.suggest_paths(&args.path, &args.lang)
    };

    EvalResult {
        result,
        found,
        suggestions,
    }
}

/// Run the eval command.
pub fn run_eval(args: EvalArgs) -> miette::Result<i32> {
    let mut resolver = Resolver::with_language(&args.lang);
    for file in &args.files {
        load_translations(&mut resolver, file, &args.lang)?;
    }

    let variables: Variables = args.vars.iter().cloned().collect();
    let output = evaluate(&resolver, &args, &variables);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
    } else {
        println!("{}", output.result);
        if !output.found {
            eprintln!(
                "{}: no translation for '{}' in '{}'",
                "warning".yellow(),
                args.path,
                args.lang
            );
            for suggestion in &output.suggestions {
                eprintln!("  did you mean '{}'?", suggestion);
            }
        }
    }

    if output.found {
        Ok(exitcode::OK)
    } else {
        Ok(exitcode::DATAERR)
    }
}
