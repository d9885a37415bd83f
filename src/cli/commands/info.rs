//! Info command implementation

use super::resolve_overrides;
use super::validate::{format_data_info, format_label_info, format_model_info};
use crate::cli::args::{InfoArgs, OutputFormat};
use crate::cli::logging::{log, LogLevel};
use crate::error::Result;
use crate::metadata::{load_metadata, render_metadata, ConfigFormat, TrainerMetadata};

/// Render metadata for the requested output format
pub fn render_info(metadata: &TrainerMetadata, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok([
            format_model_info(metadata),
            format_data_info(metadata),
            format_label_info(metadata),
        ]
        .join("\n")),
        OutputFormat::Json => render_metadata(metadata, ConfigFormat::Json),
        OutputFormat::Yaml => render_metadata(metadata, ConfigFormat::Yaml),
    }
}

pub fn run_info(args: InfoArgs, level: LogLevel) -> Result<()> {
    let metadata = match &args.config {
        Some(path) => load_metadata(path)?,
        None => {
            log(level, LogLevel::Verbose, "No config given, using built-in HappyDB metadata");
            TrainerMetadata::happydb()
        }
    };
    let metadata = resolve_overrides(&metadata, &args.overrides)?;

    if args.format == OutputFormat::Text {
        log(level, LogLevel::Normal, "Metadata Info:");
    }
    println!("{}", render_info(&metadata, args.format)?);

    Ok(())
}
