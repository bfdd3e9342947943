//! Coverage command implementation.

use std::path::{Path, PathBuf};

use clap::Args;
use lexis::{CoverageWarning, Resolver};
use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use super::load_translations;
use crate::output::table::{format_coverage_table, LanguageCoverage};

/// Arguments for the coverage command.
#[derive(Debug, Args)]
pub struct CoverageArgs {
    /// Source language file (e.g., en.lex).
    #[arg(long)]
    pub source: PathBuf,

    /// Translation files to compare against the source (repeatable or comma-separated).
    #[arg(long = "target", required = true, value_delimiter = ',')]
    pub targets: Vec<PathBuf>,

    /// Exit with non-zero code if any translation is incomplete.
    #[arg(long)]
    pub strict: bool,

    /// Output results as JSON.
    #[arg(long)]
    pub json: bool,
}

/// JSON output format for coverage data.
#[derive(Debug, Serialize)]
struct CoverageJson {
    language: String,
    file: String,
    translated: usize,
    total: usize,
    missing: Vec<String>,
    unknown: Vec<String>,
}

/// Display name for a translation file: its stem, or the whole path.
fn language_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map_or_else(|| path.display().to_string(), str::to_owned)
}

/// Run the coverage command.
pub fn run_coverage(args: CoverageArgs) -> Result<i32> {
    // Each file is its own language so that stems may collide.
    let mut resolver = Resolver::new();
    let source_key = args.source.display().to_string();
    load_translations(&mut resolver, &args.source, &source_key)?;

    let source_count = resolver
        .tree_for(&source_key)
        .map_or(0, |tree| tree.leaf_paths(resolver.separator()).len());

    let mut coverage_data: Vec<LanguageCoverage> = Vec::new();
    for target in &args.targets {
        let target_key = target.display().to_string();
        load_translations(&mut resolver, target, &target_key)?;

        let mut missing = Vec::new();
        let mut unknown = Vec::new();
        for warning in resolver.check_coverage(&source_key, &target_key) {
            match warning {
                CoverageWarning::MissingPath { path, .. } => missing.push(path),
                CoverageWarning::UnknownPath { path, .. } => unknown.push(path),
            }
        }

        coverage_data.push(LanguageCoverage {
            language: language_name(target),
            file: target_key,
            translated: source_count - missing.len(),
            missing,
            unknown,
        });
    }

    let any_incomplete = coverage_data.iter().any(|c| !c.missing.is_empty());

    if args.json {
        let json_data: Vec<CoverageJson> = coverage_data
            .iter()
            .map(|c| CoverageJson {
                language: c.language.clone(),
                file: c.file.clone(),
                translated: c.translated,
                total: source_count,
                missing: c.missing.clone(),
                unknown: c.unknown.clone(),
            })
            .collect();

        let json_output = serde_json::to_string_pretty(&json_data).into_diagnostic()?;
        println!("{}", json_output);
    } else {
        let table = format_coverage_table(source_count, &coverage_data);
        println!("{}", table);

        for lang_coverage in &coverage_data {
            if !lang_coverage.missing.is_empty() {
                println!("\nMissing in {}:", lang_coverage.language);
                for path in &lang_coverage.missing {
                    println!("  - {}", path);
                }
            }
            if !lang_coverage.unknown.is_empty() {
                println!("\nUnknown in {}:", lang_coverage.language);
                for path in &lang_coverage.unknown {
                    println!("  + {}", path);
                }
            }
        }
    }

    if args.strict && any_incomplete {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
