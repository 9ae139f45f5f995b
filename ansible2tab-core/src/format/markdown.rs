//! Markdown table output formatter

use super::Formatter;
use crate::record::Record;

/// Markdown formatter - a two-column table of host and output
///
/// Pipe characters inside the host or a value are not escaped and will
/// shift table cells; known limitation.
#[derive(Debug, Default)]
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Create a new Markdown table formatter
    pub fn new() -> Self {
        Self
    }
}

impl Formatter for MarkdownFormatter {
    fn header(&self) -> String {
        "|Host|Value|\n|---|---|\n".to_string()
    }

    fn format(&mut self, record: &Record) -> String {
        format!("|{}|{}|\n", record.host, record.values.join(" "))
    }

    fn footer(&self) -> String {
        String::new()
    }
}
