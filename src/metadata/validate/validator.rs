//! Metadata validation logic
//!
//! Checks the invariants a training pipeline relies on before it tokenizes a
//! single row.

use super::error::ValidationError;
use crate::metadata::schema::{TaskType, TrainerMetadata};
use std::collections::HashSet;

/// `max_seq_length` above this is accepted but logged as unusually long.
pub const LONG_SEQ_LENGTH_WARN: usize = 8192;

/// Fewest labels a classification head can be trained on.
pub const MIN_CLASSIFICATION_LABELS: usize = 2;

/// Validate a `(name, index)` label mapping.
///
/// On success returns the names ordered by index, so `names[i]` is the
/// label encoded as `i`. An empty mapping is valid (N = 0); whether a task
/// needs labels is checked by [`validate_metadata`].
pub(crate) fn validate_label_pairs(pairs: &[(String, usize)]) -> Result<Vec<String>, ValidationError> {
    let mut seen_names = HashSet::with_capacity(pairs.len());
    let mut slots: Vec<Option<&str>> = vec![None; pairs.len()];

    for (name, index) in pairs {
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyLabelName);
        }
        if !seen_names.insert(name.as_str()) {
            return Err(ValidationError::DuplicateLabel(name.clone()));
        }
        // An index outside 0..N means some index inside 0..N is missing.
        let Some(slot) = slots.get_mut(*index) else {
            let expected = first_gap(pairs);
            return Err(ValidationError::NonContiguousIndices { expected, found: *index });
        };
        if slot.is_some() {
            return Err(ValidationError::DuplicateIndex(*index));
        }
        *slot = Some(name.as_str());
    }

    // N distinct indices all < N fill every slot.
    Ok(slots.into_iter().flatten().map(str::to_string).collect())
}

/// Smallest index in `0..N` that no pair claims.
fn first_gap(pairs: &[(String, usize)]) -> usize {
    let used: HashSet<usize> = pairs.iter().map(|(_, i)| *i).collect();
    (0..pairs.len()).find(|i| !used.contains(i)).unwrap_or(pairs.len())
}

/// Validate job metadata
///
/// Checks:
/// - String fields are non-empty
/// - Target label indices form `0..N` with no duplicates
/// - Classification has at least two classes; other tasks may have none
/// - `max_seq_length` is positive
pub fn validate_metadata(metadata: &TrainerMetadata) -> Result<(), ValidationError> {
    if metadata.train_data().is_empty() {
        return Err(ValidationError::EmptyField("train_data"));
    }
    if metadata.test_data().is_empty() {
        return Err(ValidationError::EmptyField("test_data"));
    }
    if metadata.pretrained_model_name().trim().is_empty() {
        return Err(ValidationError::EmptyField("pretrained_model_name"));
    }

    let labels = metadata.target_labels();
    let pairs: Vec<(String, usize)> = labels.iter().map(|(n, i)| (n.to_string(), i)).collect();
    validate_label_pairs(&pairs)?;

    if metadata.task_type() == TaskType::Classification && labels.len() < MIN_CLASSIFICATION_LABELS {
        return Err(ValidationError::TooFewClasses {
            task: metadata.task_type(),
            count: labels.len(),
        });
    }

    let max_seq_length = metadata.max_seq_length();
    if max_seq_length == 0 {
        return Err(ValidationError::InvalidMaxSeqLength(max_seq_length));
    }
    if max_seq_length > LONG_SEQ_LENGTH_WARN {
        tracing::warn!(
            max_seq_length,
            threshold = LONG_SEQ_LENGTH_WARN,
            "max_seq_length is unusually long for an encoder"
        );
    }

    Ok(())
}
