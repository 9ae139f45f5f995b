//! Record parsing and output formatting for ansible ad-hoc command results
//!
//! `ansible` run against a fleet prints one block per host: a header line
//! naming the host, followed by the captured command output. This crate turns
//! that stream into structured [`Record`] values and renders them in one of
//! four formats: TSV, JSON, a Markdown table, or Markdown with a fenced code
//! block per host.
//!
//! # Example
//!
//! ```rust
//! use ansible2tab_core::{OutputFormat, Parser};
//!
//! let mut parser = Parser::new();
//! let mut formatter = OutputFormat::Tsv.formatter();
//!
//! let mut out = formatter.header();
//! for line in "web1 | SUCCESS | rc=0 >>\n23:30:01 up 41 days".lines() {
//!     if let Some(record) = parser.feed(line) {
//!         out.push_str(&formatter.format(&record));
//!     }
//! }
//! if let Some(record) = parser.finish() {
//!     out.push_str(&formatter.format(&record));
//! }
//! out.push_str(&formatter.footer());
//!
//! assert_eq!(out, "web1\t23:30:01 up 41 days\n");
//! ```

pub mod error;
pub mod format;
pub mod parser;
pub mod record;

pub use error::{Error, Result};
pub use format::{Formatter, OutputFormat};
pub use parser::Parser;
pub use record::Record;
