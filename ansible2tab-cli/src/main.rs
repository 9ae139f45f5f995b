//! Entry point for the ansible2tab binary

use std::process::ExitCode;

use ansible2tab_cli::{run, Args};
use clap::Parser;

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = args.init_logging() {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
