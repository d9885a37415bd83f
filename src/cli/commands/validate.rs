//! Validate command implementation

use super::resolve_overrides;
use crate::cli::args::ValidateArgs;
use crate::cli::logging::{log, LogLevel};
use crate::error::Result;
use crate::metadata::{load_metadata, TrainerMetadata};

/// Format task and model information as a string
pub fn format_model_info(metadata: &TrainerMetadata) -> String {
    format!(
        "  Task type: {}\n  Pretrained model: {}\n  Max sequence length: {}",
        metadata.task_type(),
        metadata.pretrained_model_name(),
        metadata.max_seq_length()
    )
}

/// Format dataset locations as a string
pub fn format_data_info(metadata: &TrainerMetadata) -> String {
    let mut lines = vec![
        format!("  Training data: {}", metadata.train_data()),
        format!("  Test data: {}", metadata.test_data()),
    ];
    let schemes: Vec<&str> = [metadata.train_data(), metadata.test_data()]
        .into_iter()
        .filter_map(|uri| uri.scheme())
        .collect();
    if !schemes.is_empty() {
        lines.push(format!("  Storage: {}", schemes.join(", ")));
    }
    lines.join("\n")
}

/// Format the label encoding as a string
pub fn format_label_info(metadata: &TrainerMetadata) -> String {
    let labels = metadata.target_labels();
    let mut lines = vec![format!("  Target labels ({} classes):", labels.num_classes())];
    lines.extend(labels.iter().map(|(name, index)| format!("    {index:>3}  {name}")));
    lines.join("\n")
}

/// Print detailed metadata summary
pub fn print_detailed_summary(metadata: &TrainerMetadata) {
    println!();
    println!("Metadata Summary:");
    println!("{}", format_model_info(metadata));
    println!();
    println!("{}", format_data_info(metadata));
    println!();
    println!("{}", format_label_info(metadata));
}

pub fn run_validate(args: ValidateArgs, level: LogLevel) -> Result<()> {
    log(
        level,
        LogLevel::Normal,
        &format!("Validating metadata: {}", args.config.display()),
    );

    let metadata = load_metadata(&args.config)?;
    let metadata = resolve_overrides(&metadata, &args.overrides)?;

    log(level, LogLevel::Normal, "Metadata is valid");

    if args.detailed {
        print_detailed_summary(&metadata);
    }

    Ok(())
}
