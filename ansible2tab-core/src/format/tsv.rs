//! Tab-separated output formatter

use super::Formatter;
use crate::record::Record;

/// TSV formatter - one `host<TAB>values` line per record
///
/// Values are joined with a single space. Tabs or newlines inside the host
/// or a value are passed through unescaped, which makes the line ambiguous;
/// known limitation of this format.
#[derive(Debug, Default)]
pub struct TsvFormatter;

impl TsvFormatter {
    /// Create a new TSV formatter
    pub fn new() -> Self {
        Self
    }
}

impl Formatter for TsvFormatter {
    fn header(&self) -> String {
        String::new()
    }

    fn format(&mut self, record: &Record) -> String {
        format!("{}\t{}\n", record.host, record.values.join(" "))
    }

    fn footer(&self) -> String {
        String::new()
    }
}
