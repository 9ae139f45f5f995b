//! The formatting session driver

use ansible2tab_core::{Formatter, OutputFormat, Parser, Record};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::Path;

use crate::cli::Args;
use crate::input::open_reader;

/// Open the destination: a file when given, stdout otherwise
fn open_writer(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout()))),
    }
}

/// Run one session: parse every input line, write header, each record in
/// arrival order, then footer, verbatim to the destination.
pub fn run(args: &Args) -> Result<()> {
    let format = OutputFormat::from(args.format);
    log::info!("Formatting as {}", format.name());

    let reader = open_reader(args.input.as_deref())?;
    let mut writer = open_writer(args.output.as_deref())?;

    let record_count = format_stream(format, reader, &mut writer)?;
    writer.flush().context("Failed to flush output")?;

    log::info!("Formatted {record_count} records");
    Ok(())
}

/// Drive one formatter over the lines of `reader`, writing each returned
/// string as it is produced. Returns the number of records formatted.
pub fn format_stream<R, W>(format: OutputFormat, reader: R, writer: &mut W) -> Result<usize>
where
    R: BufRead,
    W: Write + ?Sized,
{
    let mut parser = Parser::new();
    let mut formatter = format.formatter();
    let mut record_count = 0usize;

    writer.write_all(formatter.header().as_bytes())?;
    for line in reader.lines() {
        let line = line.context("Failed to read input")?;
        if let Some(record) = parser.feed(&line) {
            emit(formatter.as_mut(), &record, writer)?;
            record_count += 1;
        }
    }
    if let Some(record) = parser.finish() {
        emit(formatter.as_mut(), &record, writer)?;
        record_count += 1;
    }
    writer.write_all(formatter.footer().as_bytes())?;

    Ok(record_count)
}

fn emit<W>(formatter: &mut dyn Formatter, record: &Record, writer: &mut W) -> Result<()>
where
    W: Write + ?Sized,
{
    log::debug!("Formatting record for host {}", record.host);
    writer.write_all(formatter.format(record).as_bytes())?;
    Ok(())
}
