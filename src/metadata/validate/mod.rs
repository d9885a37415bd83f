//! Metadata validation
//!
//! Validates training job metadata for correctness before it reaches the pipeline.

mod error;
mod validator;

#[cfg(test)]
mod proptests;

pub use error::ValidationError;
pub use validator::{validate_metadata, LONG_SEQ_LENGTH_WARN, MIN_CLASSIFICATION_LABELS};

pub(crate) use validator::validate_label_pairs;
