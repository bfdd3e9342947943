//! Translation resolution.
//!
//! This module owns the per-language store and the lookup algorithm: path
//! traversal, plural-form selection, and placeholder substitution. Loading
//! merges parsed trees into the store; coverage checks compare languages.

mod coverage;
mod error;
mod resolver;

pub use error::{CoverageWarning, LoadError};
pub use resolver::Resolver;
