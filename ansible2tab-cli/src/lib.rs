//! ansible2tab CLI library
//!
//! This library backs the `ansible2tab` binary, which converts the output of
//! ansible ad-hoc commands into TSV, JSON, or Markdown.

pub mod cli;
pub mod input;
pub mod run;

pub use cli::Args;
pub use run::run;
