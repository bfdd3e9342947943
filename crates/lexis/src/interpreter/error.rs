//! Error and warning types for loading and checking translations.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that occur during translation loading.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The translation file does not exist.
    #[error("translation file '{path}' does not exist")]
    FileNotFound { path: PathBuf },

    /// File I/O error when reading translation file.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Parse error with file location context.
    #[error("{path}:{line}:{column}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },
}

/// A difference between two languages found by
/// [`Resolver::check_coverage`](crate::Resolver::check_coverage).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoverageWarning {
    /// The source language has a translation the target lacks.
    MissingPath { path: String, language: String },

    /// The target language has a translation the source does not know.
    UnknownPath { path: String, language: String },
}

impl CoverageWarning {
    /// The path the warning refers to.
    pub fn path(&self) -> &str {
        match self {
            CoverageWarning::MissingPath { path, .. } | CoverageWarning::UnknownPath { path, .. } => {
                path
            }
        }
    }
}

impl fmt::Display for CoverageWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoverageWarning::MissingPath { path, language } => {
                write!(f, "'{path}' is not translated in '{language}'")
            }
            CoverageWarning::UnknownPath { path, language } => {
                write!(f, "'{path}' in '{language}' has no source translation")
            }
        }
    }
}
