//! CLI command implementations

mod info;
mod init;
mod validate;


use super::args::{Cli, Command, OverrideArgs};
use super::logging::{init_tracing, LogLevel};
use crate::error::Result;
use crate::metadata::{apply_overrides, MetadataOverrides, TrainerMetadata};

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<()> {
    let log_level = LogLevel::from_flags(cli.verbose, cli.quiet);
    init_tracing(log_level);

    match cli.command {
        Command::Validate(args) => validate::run_validate(args, log_level),
        Command::Info(args) => info::run_info(args, log_level),
        Command::Init(args) => init::run_init(args, log_level),
    }
}

/// Layer environment and flag overrides onto a loaded record.
fn resolve_overrides(metadata: &TrainerMetadata, flags: &OverrideArgs) -> Result<TrainerMetadata> {
    let env = MetadataOverrides::from_env();
    if !env.is_empty() {
        tracing::info!(?env, "applying TEXTCLF_* environment overrides");
    }
    let overrides = env.merge(flags.to_overrides());
    Ok(apply_overrides(metadata, &overrides)?)
}
