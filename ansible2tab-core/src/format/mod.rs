//! Output formatting module
//!
//! One formatter per output shape, all behind the [`Formatter`] trait. A
//! formatter is used for exactly one session: the caller emits `header()`
//! once, `format()` once per record in arrival order, then `footer()` once,
//! and writes the returned strings verbatim in that order. The stateful
//! variants (JSON, Markdown code) track whether a record has been emitted
//! yet, so an instance must not be reused across sessions.

use std::str::FromStr;

use crate::error::Error;
use crate::record::Record;

/// Trait for output formatters
pub trait Formatter {
    /// Opening framing emitted once, before any record
    fn header(&self) -> String;

    /// Format a single record, including any separator from the previous one
    fn format(&mut self, record: &Record) -> String;

    /// Closing framing emitted once, after all records
    fn footer(&self) -> String;
}

pub mod json;
pub mod markdown;
pub mod markdown_code;
pub mod tsv;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use markdown_code::MarkdownCodeFormatter;
pub use tsv::TsvFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Tab-separated values, one host per line
    Tsv,
    /// Single JSON object mapping host to newline-joined output
    Json,
    /// Markdown table with Host and Value columns
    Markdown,
    /// Markdown with a heading and fenced code block per host
    MarkdownCode,
}

impl OutputFormat {
    /// Create a fresh formatter for one output session
    pub fn formatter(&self) -> Box<dyn Formatter> {
        match self {
            OutputFormat::Tsv => Box::new(TsvFormatter::new()),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new()),
            OutputFormat::MarkdownCode => Box::new(MarkdownCodeFormatter::new()),
        }
    }

    /// Name used on the command line and in messages
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Tsv => "tsv",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "md",
            OutputFormat::MarkdownCode => "mdcode",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tsv" => Ok(OutputFormat::Tsv),
            "json" => Ok(OutputFormat::Json),
            "md" => Ok(OutputFormat::Markdown),
            "mdcode" => Ok(OutputFormat::MarkdownCode),
            other => Err(Error::UnknownFormat(other.to_string())),
        }
    }
}

/// Run one complete session over `records`, concatenating header, each
/// record in order, and footer.
pub fn format_session<'a, I>(format: OutputFormat, records: I) -> String
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut formatter = format.formatter();
    let mut out = formatter.header();
    for record in records {
        out.push_str(&formatter.format(record));
    }
    out.push_str(&formatter.footer());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Record> {
        vec![
            Record::new("h1", vec!["x".to_string()]),
            Record::new("h2", vec!["y".to_string(), "z".to_string()]),
        ]
    }

    #[test]
    fn test_from_str_all_names() {
        assert_eq!("tsv".parse::<OutputFormat>().unwrap(), OutputFormat::Tsv);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("md".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert_eq!(
            "mdcode".parse::<OutputFormat>().unwrap(),
            OutputFormat::MarkdownCode
        );
    }

    #[test]
    fn test_from_str_unknown_name() {
        let err = "yaml".parse::<OutputFormat>().unwrap_err();
        assert_eq!(err, Error::UnknownFormat("yaml".to_string()));
        assert!(err.to_string().contains("yaml"));
    }

    #[test]
    fn test_name_round_trips_through_from_str() {
        for format in [
            OutputFormat::Tsv,
            OutputFormat::Json,
            OutputFormat::Markdown,
            OutputFormat::MarkdownCode,
        ] {
            assert_eq!(format.name().parse::<OutputFormat>().unwrap(), format);
        }
    }

    #[test]
    fn test_empty_session_is_header_plus_footer() {
        assert_eq!(format_session(OutputFormat::Tsv, []), "");
        assert_eq!(format_session(OutputFormat::Json, []), "{}\n");
        assert_eq!(
            format_session(OutputFormat::Markdown, []),
            "|Host|Value|\n|---|---|\n"
        );
        assert_eq!(format_session(OutputFormat::MarkdownCode, []), "");
    }

    #[test]
    fn test_fresh_instances_are_deterministic() {
        let records = sample();
        for format in [
            OutputFormat::Tsv,
            OutputFormat::Json,
            OutputFormat::Markdown,
            OutputFormat::MarkdownCode,
        ] {
            let first = format_session(format, &records);
            let second = format_session(format, &records);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_record_order_is_preserved() {
        let records = sample();
        let reversed: Vec<Record> = records.iter().rev().cloned().collect();

        let forward = format_session(OutputFormat::Tsv, &records);
        let backward = format_session(OutputFormat::Tsv, &reversed);

        assert_eq!(forward, "h1\tx\nh2\ty z\n");
        assert_eq!(backward, "h2\ty z\nh1\tx\n");
    }
}
