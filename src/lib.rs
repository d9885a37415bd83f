//! Typed, validated job metadata for text-classification fine-tuning.
//!
//! A [`TrainerMetadata`] names the task type, the train/test dataset URIs,
//! the pretrained base model, the label-to-index encoding and the maximum
//! tokenized sequence length. Values are validated on construction and
//! immutable afterwards, so they can be shared freely across threads.
//!
//! ```
//! use textclf_trainer::{TaskType, TrainerMetadata};
//!
//! let metadata = TrainerMetadata::happydb();
//! assert_eq!(metadata.task_type(), TaskType::Classification);
//! assert_eq!(metadata.target_labels().num_classes(), 7);
//! assert_eq!(metadata.target_labels().index_of("nature"), Some(5));
//! ```

pub mod cli;
pub mod error;
pub mod metadata;

pub use error::{Error, Result};
pub use metadata::{
    apply_overrides, load_metadata, save_metadata, validate_metadata, DataUri, MetadataOverrides,
    TargetLabels, TaskType, TrainerMetadata, TrainerMetadataBuilder, ValidationError,
};
