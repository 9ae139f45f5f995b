//! Incremental parser for ansible ad-hoc command output
//!
//! `ansible` prints one block per host:
//!
//! ```text
//! web1 | SUCCESS | rc=0 >>
//! 23:30:01 up 41 days
//!
//! db1 | FAILED | rc=2 >>
//! uptime: command not found
//! ```
//!
//! A header line opens a record for its host; every following line belongs
//! to that record until the next header. The blank line ansible prints
//! between hosts is a separator, not output, and is dropped.

use crate::record::Record;

/// Line-by-line parser producing one [`Record`] per host block
///
/// Feed lines in order with [`Parser::feed`]; a record is returned once the
/// line that ends it arrives. Call [`Parser::finish`] after the last line to
/// flush the final record. Parsing is total: lines that fit nowhere (output
/// before the first header) are ignored.
#[derive(Debug, Default)]
pub struct Parser {
    current: Option<Record>,
}

/// Extract the host from a header line, if this is one.
///
/// A header is `<host> | <status>... >>`: at least one ` | ` separator, the
/// line ends with `>>`, and the host is a single whitespace-free token.
fn header_host(line: &str) -> Option<&str> {
    let rest = line.trim_end().strip_suffix(">>")?;
    let (host, _) = rest.split_once(" | ")?;
    if host.is_empty() || host.contains(char::is_whitespace) {
        return None;
    }
    Some(host)
}

impl Parser {
    /// Create a new parser
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one line (without its trailing newline).
    ///
    /// Returns the record this line completed, if any.
    pub fn feed(&mut self, line: &str) -> Option<Record> {
        if let Some(host) = header_host(line) {
            let finished = self.flush();
            self.current = Some(Record::new(host, Vec::new()));
            return finished;
        }
        if let Some(record) = &mut self.current {
            record.values.push(line.to_string());
        }
        None
    }

    /// Flush the record still open after the last line, if any
    pub fn finish(&mut self) -> Option<Record> {
        self.flush()
    }

    fn flush(&mut self) -> Option<Record> {
        let mut record = self.current.take()?;
        // ansible's inter-host separator shows up as trailing blank lines
        while record.values.last().is_some_and(|v| v.is_empty()) {
            record.values.pop();
        }
        Some(record)
    }
}
