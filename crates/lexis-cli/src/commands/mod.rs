//! CLI command implementations.

mod check;
mod coverage;
mod eval;

use std::fs::read_to_string;
use std::path::Path;

use lexis::{LoadError, Resolver};
use miette::{miette, IntoDiagnostic, Result};

use crate::output::LexisDiagnostic;

pub use check::{run_check, CheckArgs};
pub use coverage::{run_coverage, CoverageArgs};
pub use eval::{run_eval, EvalArgs};

/// Load `path` into `resolver` under `language`, turning parse failures into
/// source-annotated diagnostics.
fn load_translations(resolver: &mut Resolver, path: &Path, language: &str) -> Result<()> {
    match resolver.load_file(path, language) {
        Ok(_) => Ok(()),
        Err(LoadError::Parse {
            path,
            line,
            column,
            message,
        }) => {
            let content = read_to_string(&path).into_diagnostic()?;
            Err(LexisDiagnostic::new(&path, &content, line, column, message).into())
        }
        Err(e) => Err(miette!("{e}")),
    }
}
