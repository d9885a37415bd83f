//! CLI argument types

use crate::metadata::{ConfigFormat, MetadataOverrides};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// textclf: job metadata for text-classification fine-tuning
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "textclf")]
#[command(version)]
#[command(about = "Validate, inspect and scaffold text-classification training metadata")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Validate a metadata file
    Validate(ValidateArgs),

    /// Display metadata (built-in HappyDB job when no file is given)
    Info(InfoArgs),

    /// Write the built-in metadata as a starter file
    Init(InitArgs),
}

/// Field overrides shared by `validate` and `info`
///
/// `TEXTCLF_*` environment variables apply first; flags win over them.
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct OverrideArgs {
    /// Override the training data URI
    #[arg(long)]
    pub train_data: Option<String>,

    /// Override the test data URI
    #[arg(long)]
    pub test_data: Option<String>,

    /// Override the pretrained model name
    #[arg(long = "model")]
    pub pretrained_model_name: Option<String>,

    /// Override the maximum sequence length
    #[arg(long)]
    pub max_seq_length: Option<usize>,
}

impl OverrideArgs {
    pub fn to_overrides(&self) -> MetadataOverrides {
        MetadataOverrides {
            train_data: self.train_data.clone(),
            test_data: self.test_data.clone(),
            pretrained_model_name: self.pretrained_model_name.clone(),
            max_seq_length: self.max_seq_length,
        }
    }
}

/// Arguments for the validate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// Path to YAML or JSON metadata file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Show detailed validation report
    #[arg(short, long)]
    pub detailed: bool,

    #[command(flatten)]
    pub overrides: OverrideArgs,
}

/// Arguments for the info command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct InfoArgs {
    /// Path to YAML or JSON metadata file
    #[arg(value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format (text, json, yaml)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    #[command(flatten)]
    pub overrides: OverrideArgs,
}

/// Arguments for the init command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct InitArgs {
    /// Output path (stdout if not specified); format follows the extension
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Format when writing to stdout (yaml, json)
    #[arg(short, long, default_value = "yaml")]
    pub format: ConfigFormat,

    /// Overwrite an existing output file
    #[arg(long)]
    pub force: bool,
}

/// Output format for info command
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "yaml" => Ok(OutputFormat::Yaml),
            _ => Err(format!(
                "Unknown output format: {s}. Valid formats: text, json, yaml"
            )),
        }
    }
}

/// Parse CLI arguments from a string slice (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}
