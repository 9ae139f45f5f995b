//! The per-host result record

use serde::{Deserialize, Serialize};

/// One host's collected result: the host name and the output lines the
/// command produced there, in the order they appeared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Host name as it appeared in the header line, treated as opaque text
    pub host: String,
    /// Captured output lines; may be empty for a command with no output
    pub values: Vec<String>,
}

impl Record {
    /// Create a new record
    pub fn new(host: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            host: host.into(),
            values,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_str_and_string() {
        let a = Record::new("web1", vec!["up".to_string()]);
        let b = Record::new("web1".to_string(), vec!["up".to_string()]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_values_allowed() {
        let record = Record::new("db1", Vec::new());
        assert!(record.values.is_empty());
    }
}
