//! Text-classification job metadata
//!
//! The record a training pipeline reads before it touches data: task type,
//! dataset locations, base model, label encoding and sequence budget.

mod builder;
pub mod defaults;
mod loader;
mod overrides;
mod schema;
mod validate;

pub use builder::TrainerMetadataBuilder;
pub use loader::{load_metadata, parse_metadata, render_metadata, save_metadata, ConfigFormat};
pub use overrides::{
    apply_overrides, MetadataOverrides, ENV_MAX_SEQ_LENGTH, ENV_PRETRAINED_MODEL, ENV_TEST_DATA,
    ENV_TRAIN_DATA,
};
pub use schema::{DataUri, TargetLabels, TaskType, TrainerMetadata};
pub use validate::{
    validate_metadata, ValidationError, LONG_SEQ_LENGTH_WARN, MIN_CLASSIFICATION_LABELS,
};
