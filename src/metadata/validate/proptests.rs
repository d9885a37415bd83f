//! Property-based tests for label mapping and metadata validation

use super::error::ValidationError;
use super::validator::validate_label_pairs;
use crate::metadata::schema::*;
use proptest::prelude::*;

/// Between 2 and 32 unique label names, each paired with a shuffled dense index.
fn arb_dense_pairs() -> impl Strategy<Value = Vec<(String, usize)>> {
    prop::collection::hash_set("[a-z_]{1,12}", 2..32)
        .prop_map(|names| names.into_iter().collect::<Vec<_>>())
        .prop_flat_map(|names| {
            let n = names.len();
            (Just(names), Just((0..n).collect::<Vec<_>>()).prop_shuffle())
        })
        .prop_map(|(names, indices)| names.into_iter().zip(indices).collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_dense_permutation_accepted(pairs in arb_dense_pairs()) {
        let names = validate_label_pairs(&pairs).unwrap();
        prop_assert_eq!(names.len(), pairs.len());
        for (name, index) in &pairs {
            prop_assert_eq!(&names[*index], name);
        }
    }

    #[test]
    fn prop_round_trip_lookup(pairs in arb_dense_pairs()) {
        let labels = TargetLabels::from_pairs(pairs.clone()).unwrap();
        for (name, index) in &pairs {
            prop_assert_eq!(labels.index_of(name), Some(*index));
            prop_assert_eq!(labels.label_of(*index), Some(name.as_str()));
        }
        let max = labels.iter().map(|(_, i)| i).max();
        prop_assert_eq!(max, Some(pairs.len() - 1));
    }

    #[test]
    fn prop_shifted_index_rejected(pairs in arb_dense_pairs(), pick in any::<prop::sample::Index>()) {
        let mut pairs = pairs;
        let i = pick.index(pairs.len());
        pairs[i].1 += pairs.len();
        prop_assert!(
            matches!(
                validate_label_pairs(&pairs),
                Err(ValidationError::NonContiguousIndices { .. })
            ),
            "index past the end of the mapping was accepted"
        );
    }

    #[test]
    fn prop_duplicated_index_rejected(pairs in arb_dense_pairs(), pick in any::<prop::sample::Index>()) {
        let mut pairs = pairs;
        let i = pick.index(pairs.len());
        let other = (i + 1) % pairs.len();
        pairs[i].1 = pairs[other].1;
        prop_assert!(validate_label_pairs(&pairs).is_err());
    }

    #[test]
    fn prop_any_positive_seq_length_accepted(len in 1usize..=usize::MAX) {
        let metadata = TrainerMetadata::builder().max_seq_length(len).build();
        prop_assert!(metadata.is_ok(), "positive max_seq_length {} rejected", len);
    }

    #[test]
    fn prop_any_task_accepts_dense_labels(pairs in arb_dense_pairs(), task in prop::sample::select(TaskType::ALL.to_vec())) {
        let labels = TargetLabels::from_pairs(pairs).unwrap();
        prop_assert!(TrainerMetadata::new(task, "a", "b", "m", labels, 128).is_ok());
    }
}
