//! Validation error types
//!
//! Defines all validation error variants for training job metadata.

use crate::metadata::schema::TaskType;

/// Validation error type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Field '{0}' must not be empty")]
    EmptyField(&'static str),

    #[error("Target label names must not be empty")]
    EmptyLabelName,

    #[error("Duplicate target label: {0}")]
    DuplicateLabel(String),

    #[error("Duplicate target label index: {0}")]
    DuplicateIndex(usize),

    #[error("Target label indices must be contiguous from 0: expected {expected}, found {found}")]
    NonContiguousIndices { expected: usize, found: usize },

    #[error("Invalid max sequence length: {0} (must be > 0)")]
    InvalidMaxSeqLength(usize),

    #[error("Task type '{task}' needs at least {min} target labels, got {count}", min = super::MIN_CLASSIFICATION_LABELS)]
    TooFewClasses { task: TaskType, count: usize },

    #[error("Invalid task type: {0} (must be one of: classification, regression, custom)")]
    InvalidTaskType(String),
}
