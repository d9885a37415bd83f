//! Command-line and environment overrides
//!
//! Overrides never mutate a record; applying them yields a new, re-validated
//! `TrainerMetadata`.

use super::builder::TrainerMetadataBuilder;
use super::schema::TrainerMetadata;
use super::validate::ValidationError;

pub const ENV_TRAIN_DATA: &str = "TEXTCLF_TRAIN_DATA";
pub const ENV_TEST_DATA: &str = "TEXTCLF_TEST_DATA";
pub const ENV_PRETRAINED_MODEL: &str = "TEXTCLF_PRETRAINED_MODEL";
pub const ENV_MAX_SEQ_LENGTH: &str = "TEXTCLF_MAX_SEQ_LENGTH";

/// Optional replacements for the operational fields of a record
///
/// Task type and labels are part of the dataset contract and cannot be
/// overridden.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataOverrides {
    pub train_data: Option<String>,
    pub test_data: Option<String>,
    pub pretrained_model_name: Option<String>,
    pub max_seq_length: Option<usize>,
}

impl MetadataOverrides {
    /// Collect overrides from `TEXTCLF_*` environment variables.
    ///
    /// Blank values and an unparsable `TEXTCLF_MAX_SEQ_LENGTH` are ignored
    /// with a warning.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Collect overrides through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        // Set-but-blank variables (`TEXTCLF_TRAIN_DATA=`) count as unset.
        let lookup = |key: &str| {
            lookup(key).filter(|value| {
                let blank = value.trim().is_empty();
                if blank {
                    tracing::warn!(var = key, "ignoring blank override");
                }
                !blank
            })
        };
        let max_seq_length = lookup(ENV_MAX_SEQ_LENGTH).and_then(|raw| match raw.trim().parse() {
            Ok(n) => Some(n),
            Err(_) => {
                tracing::warn!(var = ENV_MAX_SEQ_LENGTH, value = %raw, "ignoring non-numeric override");
                None
            }
        });
        Self {
            train_data: lookup(ENV_TRAIN_DATA),
            test_data: lookup(ENV_TEST_DATA),
            pretrained_model_name: lookup(ENV_PRETRAINED_MODEL),
            max_seq_length,
        }
    }

    /// Layer `other` on top of `self`; fields set in `other` win.
    pub fn merge(self, other: MetadataOverrides) -> Self {
        Self {
            train_data: other.train_data.or(self.train_data),
            test_data: other.test_data.or(self.test_data),
            pretrained_model_name: other.pretrained_model_name.or(self.pretrained_model_name),
            max_seq_length: other.max_seq_length.or(self.max_seq_length),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Apply overrides to a record, returning a new validated record
pub fn apply_overrides(
    metadata: &TrainerMetadata,
    overrides: &MetadataOverrides,
) -> Result<TrainerMetadata, ValidationError> {
    if overrides.is_empty() {
        return Ok(metadata.clone());
    }

    let mut builder = TrainerMetadataBuilder::from_metadata(metadata);
    if let Some(train_data) = &overrides.train_data {
        tracing::debug!(train_data = %train_data, "overriding train_data");
        builder = builder.train_data(train_data.as_str());
    }
    if let Some(test_data) = &overrides.test_data {
        tracing::debug!(test_data = %test_data, "overriding test_data");
        builder = builder.test_data(test_data.as_str());
    }
    if let Some(model) = &overrides.pretrained_model_name {
        tracing::debug!(model = %model, "overriding pretrained_model_name");
        builder = builder.pretrained_model_name(model.as_str());
    }
    if let Some(max_seq_length) = overrides.max_seq_length {
        tracing::debug!(max_seq_length, "overriding max_seq_length");
        builder = builder.max_seq_length(max_seq_length);
    }
    builder.build()
}
