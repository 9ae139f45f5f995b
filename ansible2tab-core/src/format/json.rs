//! JSON output formatter

use super::Formatter;
use crate::record::Record;

/// JSON formatter - one object mapping host names to their output
///
/// Each host's lines are joined with `\n` and emitted as a single JSON
/// string, not an array; downstream consumers rely on the newline-joined
/// shape. Duplicate host names produce duplicate keys, which is invalid
/// JSON; known limitation, hosts in an inventory are normally unique.
#[derive(Debug, Default)]
pub struct JsonFormatter {
    wrote_record: bool,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new() -> Self {
        Self {
            wrote_record: false,
        }
    }
}

/// Encode `s` as a JSON string literal.
///
/// Goes through `serde_json::Value` because `Display` on a value is
/// infallible, keeping `format` total.
fn json_string(s: &str) -> String {
    serde_json::Value::String(s.to_string()).to_string()
}

impl Formatter for JsonFormatter {
    fn header(&self) -> String {
        "{".to_string()
    }

    fn format(&mut self, record: &Record) -> String {
        let host = json_string(&record.host);
        let values = json_string(&record.values.join("\n"));
        if self.wrote_record {
            format!(",{host}:{values}")
        } else {
            self.wrote_record = true;
            format!("{host}:{values}")
        }
    }

    fn footer(&self) -> String {
        "}\n".to_string()
    }
}
