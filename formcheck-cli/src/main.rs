mod cli;
mod document;
mod error;
mod report;

use std::fs::File;
use std::process::ExitCode;

use clap::Parser;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode, WriteLogger};

use crate::cli::Cli;

fn init_logging(cli: &Cli) {
    let level = cli.log_level();
    let result = match &cli.log_file {
        Some(path) => match File::create(path) {
            Ok(file) => WriteLogger::init(level, Config::default(), file),
            Err(e) => {
                eprintln!("Error: could not open log file {}: {e}", path.display());
                return;
            }
        },
        None => TermLogger::init(
            level,
            Config::default(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ),
    };
    if let Err(e) = result {
        eprintln!("Error: could not initialize logging: {e}");
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    match cli.execute() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::from(2)
        }
    }
}
