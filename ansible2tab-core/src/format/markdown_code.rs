//! Markdown code-block output formatter

use super::Formatter;
use crate::record::Record;

/// Markdown code formatter - a `##` heading and fenced code block per host
///
/// Blocks after the first are preceded by one blank line. We can not escape
/// backquotes inside a fenced block, so a value containing a triple
/// backquote corrupts the rendered output; known limitation.
#[derive(Debug, Default)]
pub struct MarkdownCodeFormatter {
    wrote_record: bool,
}

impl MarkdownCodeFormatter {
    /// Create a new Markdown code formatter
    pub fn new() -> Self {
        Self {
            wrote_record: false,
        }
    }
}

impl Formatter for MarkdownCodeFormatter {
    fn header(&self) -> String {
        String::new()
    }

    fn format(&mut self, record: &Record) -> String {
        let values = record.values.join("\n");
        if self.wrote_record {
            format!("\n## {}\n\n```\n{}\n```\n", record.host, values)
        } else {
            self.wrote_record = true;
            format!("## {}\n\n```\n{}\n```\n", record.host, values)
        }
    }

    fn footer(&self) -> String {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_line_separates_blocks() {
        let mut formatter = MarkdownCodeFormatter::new();
        let mut out = formatter.header();
        out.push_str(&formatter.format(&Record::new("h1", vec!["v1".to_string()])));
        out.push_str(&formatter.format(&Record::new("h2", vec!["v2".to_string()])));
        out.push_str(&formatter.footer());

        assert_eq!(out, "## h1\n\n```\nv1\n```\n\n## h2\n\n```\nv2\n```\n");
    }

    #[test]
    fn test_multi_line_values_kept_as_lines() {
        let mut formatter = MarkdownCodeFormatter::new();
        let record = Record::new("h1", vec!["a".to_string(), "b".to_string()]);
        assert_eq!(formatter.format(&record), "## h1\n\n```\na\nb\n```\n");
    }

    #[test]
    fn test_no_framing() {
        let formatter = MarkdownCodeFormatter::new();
        assert_eq!(formatter.header(), "");
        assert_eq!(formatter.footer(), "");
    }

    #[test]
    fn test_empty_values_leave_empty_block() {
        let mut formatter = MarkdownCodeFormatter::new();
        let record = Record::new("h1", Vec::new());
        assert_eq!(formatter.format(&record), "## h1\n\n```\n\n```\n");
    }
}
