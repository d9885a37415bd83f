//! Build job metadata field by field

use super::defaults;
use super::schema::{DataUri, TargetLabels, TaskType, TrainerMetadata};
use super::validate::ValidationError;

/// Incremental constructor for [`TrainerMetadata`]
///
/// Starts from the HappyDB defaults; `build()` validates the result.
#[derive(Debug, Clone)]
pub struct TrainerMetadataBuilder {
    task_type: TaskType,
    train_data: DataUri,
    test_data: DataUri,
    pretrained_model_name: String,
    target_labels: Vec<(String, usize)>,
    max_seq_length: usize,
}

impl Default for TrainerMetadataBuilder {
    fn default() -> Self {
        Self {
            task_type: defaults::TASK_TYPE,
            train_data: DataUri::from(defaults::TRAIN_DATA),
            test_data: DataUri::from(defaults::TEST_DATA),
            pretrained_model_name: defaults::PRETRAINED_MODEL_NAME.to_string(),
            target_labels: defaults::TARGET_LABELS
                .iter()
                .map(|(name, index)| ((*name).to_string(), *index))
                .collect(),
            max_seq_length: defaults::MAX_SEQ_LENGTH,
        }
    }
}

impl TrainerMetadataBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing record, e.g. to apply overrides.
    pub fn from_metadata(metadata: &TrainerMetadata) -> Self {
        Self {
            task_type: metadata.task_type(),
            train_data: metadata.train_data().clone(),
            test_data: metadata.test_data().clone(),
            pretrained_model_name: metadata.pretrained_model_name().to_string(),
            target_labels: metadata
                .target_labels()
                .iter()
                .map(|(name, index)| (name.to_string(), index))
                .collect(),
            max_seq_length: metadata.max_seq_length(),
        }
    }

    pub fn task_type(mut self, task_type: TaskType) -> Self {
        self.task_type = task_type;
        self
    }

    pub fn train_data(mut self, uri: impl Into<DataUri>) -> Self {
        self.train_data = uri.into();
        self
    }

    pub fn test_data(mut self, uri: impl Into<DataUri>) -> Self {
        self.test_data = uri.into();
        self
    }

    pub fn pretrained_model_name(mut self, name: impl Into<String>) -> Self {
        self.pretrained_model_name = name.into();
        self
    }

    /// Replace the label mapping with explicit `(name, index)` pairs.
    pub fn target_labels<I, S>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, usize)>,
        S: Into<String>,
    {
        self.target_labels = pairs.into_iter().map(|(n, i)| (n.into(), i)).collect();
        self
    }

    /// Replace the label mapping, indexing names in the given order.
    pub fn label_names<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.target_labels(names.into_iter().enumerate().map(|(i, n)| (n, i)))
    }

    pub fn max_seq_length(mut self, max_seq_length: usize) -> Self {
        self.max_seq_length = max_seq_length;
        self
    }

    /// Validate and freeze the record.
    pub fn build(self) -> Result<TrainerMetadata, ValidationError> {
        let labels = TargetLabels::from_pairs(self.target_labels)?;
        TrainerMetadata::new(
            self.task_type,
            self.train_data,
            self.test_data,
            self.pretrained_model_name,
            labels,
            self.max_seq_length,
        )
    }
}

impl TrainerMetadata {
    /// Builder seeded with the HappyDB defaults.
    pub fn builder() -> TrainerMetadataBuilder {
        TrainerMetadataBuilder::new()
    }

    /// The built-in HappyDB classification job.
    pub fn happydb() -> Self {
        // Constants only; see `test_happydb_defaults_are_valid`.
        match TrainerMetadataBuilder::new().build() {
            Ok(metadata) => metadata,
            Err(e) => unreachable!("built-in metadata is invalid: {e}"),
        }
    }
}

impl Default for TrainerMetadata {
    fn default() -> Self {
        Self::happydb()
    }
}
