//! Built-in job metadata for the HappyDB moment-classification run
//!
//! These are the values a pipeline gets when it asks for
//! [`TrainerMetadata::happydb`]; read them through that constructor rather
//! than directly so the invariants are checked once.

use super::schema::TaskType;

/// Task type, based on the target feature in the dataset.
pub const TASK_TYPE: TaskType = TaskType::Classification;

/// Training split.
pub const TRAIN_DATA: &str =
    "gs://cloud-samples-data/ai-platform-unified/datasets/text/happydb/happydb_train.csv";

/// Evaluation split.
pub const TEST_DATA: &str =
    "gs://cloud-samples-data/ai-platform-unified/datasets/text/happydb/happydb_test.csv";

/// Foundational pretrained model.
pub const PRETRAINED_MODEL_NAME: &str = "bert-base-cased";

/// Class values of the classification dataset and their encoding.
pub const TARGET_LABELS: [(&str, usize); 7] = [
    ("leisure", 0),
    ("exercise", 1),
    ("enjoy_the_moment", 2),
    ("affection", 3),
    ("achievement", 4),
    ("nature", 5),
    ("bonding", 6),
];

/// Maximum tokenized sequence length.
pub const MAX_SEQ_LENGTH: usize = 128;
