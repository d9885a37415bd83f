//! textclf CLI
//!
//! Entry point for inspecting text-classification training metadata.
//!
//! # Usage
//!
//! ```bash
//! # Validate a metadata file
//! textclf validate job.yaml --detailed
//!
//! # Show the built-in HappyDB job as JSON
//! textclf info --format json
//!
//! # Point an existing job at local data
//! TEXTCLF_TRAIN_DATA=./train.csv textclf info job.yaml
//!
//! # Scaffold a new metadata file
//! textclf init --output job.yaml
//! ```

use clap::Parser;
use std::process::ExitCode;
use textclf_trainer::cli::{run_command, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error [{}]: {e}", e.code());
            ExitCode::FAILURE
        }
    }
}
