//! CLI argument parsing

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use simplelog::LevelFilter;

use crate::document::FormDocument;
use crate::error::CliError;
use crate::report;

/// Validate form documents against their registered checks
#[derive(Parser, Debug)]
#[command(name = "formcheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Bind a form document, validate it and write the rendered messages
    Validate {
        /// Form document (JSON)
        file: PathBuf,

        /// Only validate these fields (comma separated)
        #[arg(long, value_delimiter = ',')]
        only: Vec<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the checks registered for each field as JSON
    Rules {
        /// Form document (JSON)
        file: PathBuf,
    },
}

impl Cli {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// Execute the CLI command. `Ok(false)` means the form is invalid.
    pub fn execute(self) -> Result<bool, CliError> {
        match self.command {
            Commands::Validate { file, only, json } => {
                let mut binder = FormDocument::load(&file)?.into_binder()?;
                let result = if only.is_empty() {
                    binder.validate_form(None)
                } else {
                    let names: Vec<&str> = only.iter().map(String::as_str).collect();
                    binder.validate_form(Some(&names))
                };
                if json {
                    println!("{}", report::json(&result)?);
                } else {
                    print!("{}", report::text(&binder, &result));
                }
                Ok(result.is_valid)
            }
            Commands::Rules { file } => {
                let binder = FormDocument::load(&file)?.into_binder()?;
                println!("{}", report::rules(&binder.export_rule_names())?);
                Ok(true)
            }
        }
    }
}
