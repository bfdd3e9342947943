//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};

/// Coverage data for a single target file.
pub struct LanguageCoverage {
    /// Language name shown in the table (the file stem, e.g. "fr").
    pub language: String,
    /// Path of the target file.
    pub file: String,
    /// Number of source paths the target translates.
    pub translated: usize,
    /// Source paths the target lacks.
    pub missing: Vec<String>,
    /// Target paths the source does not know.
    pub unknown: Vec<String>,
}

/// Format coverage data as an ASCII table.
pub fn format_coverage_table(source_count: usize, coverage: &[LanguageCoverage]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Language", "Coverage", "Missing", "Unknown"]);

    for lang in coverage {
        table.add_row(vec![
            lang.language.clone(),
            format!("{}/{}", lang.translated, source_count),
            lang.missing.len().to_string(),
            lang.unknown.len().to_string(),
        ]);
    }

    table
}
