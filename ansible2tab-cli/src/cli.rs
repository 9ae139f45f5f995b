//! Command-line arguments

use ansible2tab_core::OutputFormat;
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// Convert ansible ad-hoc command output to TSV, JSON, or Markdown
///
/// Reads the output of `ansible <pattern> -a '<command>'` from stdin (or a
/// file) and writes one row, key, or section per host.
#[derive(Debug, Parser)]
#[command(name = "ansible2tab", version, about)]
pub struct Args {
    /// Input file (default: stdin)
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "tsv")]
    pub format: Format,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    /// Tab-separated values, one host per line
    Tsv,
    /// JSON object mapping host to newline-joined output
    Json,
    /// Markdown table with Host and Value columns
    Md,
    /// Markdown with a heading and fenced code block per host
    Mdcode,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Tsv => OutputFormat::Tsv,
            Format::Json => OutputFormat::Json,
            Format::Md => OutputFormat::Markdown,
            Format::Mdcode => OutputFormat::MarkdownCode,
        }
    }
}

impl Args {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .init();
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["ansible2tab"]);
        assert_eq!(args.format, Format::Tsv);
        assert!(args.input.is_none());
        assert!(args.output.is_none());
        assert!(!args.quiet);
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn test_format_names() {
        for (name, format) in [
            ("tsv", Format::Tsv),
            ("json", Format::Json),
            ("md", Format::Md),
            ("mdcode", Format::Mdcode),
        ] {
            let args = Args::parse_from(["ansible2tab", "-f", name]);
            assert_eq!(args.format, format);
        }
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(Args::try_parse_from(["ansible2tab", "-f", "yaml"]).is_err());
    }

    #[test]
    fn test_format_maps_to_core() {
        assert_eq!(OutputFormat::from(Format::Md), OutputFormat::Markdown);
        assert_eq!(OutputFormat::from(Format::Mdcode), OutputFormat::MarkdownCode);
    }
}
