//! CLI module for textclf
//!
//! ```bash
//! textclf validate job.yaml --detailed
//! textclf info job.yaml --format json --max-seq-length 256
//! textclf init --output job.yaml
//! ```

mod args;
mod commands;
mod logging;

pub use args::{
    parse_args, Cli, Command, InfoArgs, InitArgs, OutputFormat, OverrideArgs, ValidateArgs,
};
pub use commands::run_command;
pub use logging::{init_tracing, LogLevel};
