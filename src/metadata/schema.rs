//! Schema definitions for text-classification job metadata
//!
//! `TrainerMetadata` is immutable once built: every constructor and the
//! serde deserializer route through validation, so holding a value means
//! holding a record whose invariants already hold.

use super::validate::{validate_label_pairs, validate_metadata, ValidationError};
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Deserialize a usize from either a YAML integer (`128`) or a quoted string (`"128"`).
fn deserialize_usize_lenient<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum UsizeOrString {
        Int(usize),
        Str(String),
    }

    match UsizeOrString::deserialize(deserializer)? {
        UsizeOrString::Int(n) => Ok(n),
        UsizeOrString::Str(s) => s.trim().parse::<usize>().map_err(|_| {
            de::Error::custom(format!("expected a non-negative integer, got '{s}'"))
        }),
    }
}

/// Supervised learning objective
///
/// Derived from the target feature of the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum TaskType {
    /// Discrete target classes (cross-entropy over `target_labels`)
    #[default]
    Classification,
    /// Continuous target value
    Regression,
    /// Pipeline-defined objective
    Custom,
}

impl TaskType {
    /// All accepted task types, in declaration order.
    pub const ALL: [TaskType; 3] = [TaskType::Classification, TaskType::Regression, TaskType::Custom];

    /// Lowercase wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            TaskType::Classification => "classification",
            TaskType::Regression => "regression",
            TaskType::Custom => "custom",
        }
    }
}

impl FromStr for TaskType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "classification" => Ok(TaskType::Classification),
            "regression" => Ok(TaskType::Regression),
            "custom" => Ok(TaskType::Custom),
            _ => Err(ValidationError::InvalidTaskType(s.to_string())),
        }
    }
}

impl TryFrom<String> for TaskType {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque dataset location (object-storage URI or local path)
///
/// Never parsed or resolved here; the consuming pipeline owns that.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataUri(String);

impl DataUri {
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Scheme prefix before `://`, if any (e.g. `gs`, `s3`).
    pub fn scheme(&self) -> Option<&str> {
        self.0.split_once("://").map(|(scheme, _)| scheme).filter(|s| !s.is_empty())
    }
}

impl From<&str> for DataUri {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for DataUri {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for DataUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Label name → dense zero-based class index
///
/// Stored by index: `names[i]` is the label encoded as `i`, so the index set
/// is `0..len()` by construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TargetLabels {
    names: Vec<String>,
}

impl TargetLabels {
    /// Build from explicit `(name, index)` pairs in any order.
    ///
    /// # Errors
    ///
    /// Fails on empty or duplicate names, duplicate indices, or any gap in
    /// `0..N`. An empty mapping is accepted here.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (S, usize)>,
        S: Into<String>,
    {
        let pairs: Vec<(String, usize)> = pairs.into_iter().map(|(n, i)| (n.into(), i)).collect();
        let names = validate_label_pairs(&pairs)?;
        Ok(Self { names })
    }

    /// Build from names, assigning indices in iteration order.
    pub fn from_names<I, S>(names: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_pairs(names.into_iter().enumerate().map(|(i, n)| (n, i)))
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    pub fn label_of(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True only for a regression or custom job without labels.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Width of the classifier head.
    pub fn num_classes(&self) -> usize {
        self.names.len()
    }

    /// `(name, index)` in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.names.iter().enumerate().map(|(i, n)| (n.as_str(), i))
    }

    /// Label names in index order.
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl Serialize for TargetLabels {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.names.len()))?;
        for (name, index) in self.iter() {
            map.serialize_entry(name, &index)?;
        }
        map.end()
    }
}

struct TargetLabelsVisitor;

impl<'de> Visitor<'de> for TargetLabelsVisitor {
    type Value = TargetLabels;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of label name to zero-based class index")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        // Collected as pairs so duplicate keys reach validation instead of
        // being silently collapsed by a map type.
        let mut pairs: Vec<(String, usize)> = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((name, index)) = access.next_entry::<String, usize>()? {
            pairs.push((name, index));
        }
        TargetLabels::from_pairs(pairs).map_err(de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for TargetLabels {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(TargetLabelsVisitor)
    }
}

/// On-disk shape of the metadata, before validation
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawTrainerMetadata {
    /// Omitted means `classification`.
    #[serde(default)]
    task_type: TaskType,
    train_data: DataUri,
    test_data: DataUri,
    pretrained_model_name: String,
    target_labels: TargetLabels,
    #[serde(deserialize_with = "deserialize_usize_lenient")]
    max_seq_length: usize,
}

impl TryFrom<RawTrainerMetadata> for TrainerMetadata {
    type Error = ValidationError;

    fn try_from(raw: RawTrainerMetadata) -> Result<Self, Self::Error> {
        TrainerMetadata::new(
            raw.task_type,
            raw.train_data,
            raw.test_data,
            raw.pretrained_model_name,
            raw.target_labels,
            raw.max_seq_length,
        )
    }
}

/// Complete, validated job metadata for a text-classification run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTrainerMetadata")]
pub struct TrainerMetadata {
    task_type: TaskType,
    train_data: DataUri,
    test_data: DataUri,
    pretrained_model_name: String,
    target_labels: TargetLabels,
    max_seq_length: usize,
}

impl TrainerMetadata {
    /// Construct and validate a record from every field.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn new(
        task_type: TaskType,
        train_data: impl Into<DataUri>,
        test_data: impl Into<DataUri>,
        pretrained_model_name: impl Into<String>,
        target_labels: TargetLabels,
        max_seq_length: usize,
    ) -> Result<Self, ValidationError> {
        let metadata = Self {
            task_type,
            train_data: train_data.into(),
            test_data: test_data.into(),
            pretrained_model_name: pretrained_model_name.into(),
            target_labels,
            max_seq_length,
        };
        validate_metadata(&metadata)?;
        Ok(metadata)
    }

    pub fn task_type(&self) -> TaskType {
        self.task_type
    }

    pub fn train_data(&self) -> &DataUri {
        &self.train_data
    }

    pub fn test_data(&self) -> &DataUri {
        &self.test_data
    }

    pub fn pretrained_model_name(&self) -> &str {
        &self.pretrained_model_name
    }

    pub fn target_labels(&self) -> &TargetLabels {
        &self.target_labels
    }

    pub fn max_seq_length(&self) -> usize {
        self.max_seq_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels() -> TargetLabels {
        TargetLabels::from_names(["neg", "pos"]).unwrap()
    }

    #[test]
    fn test_task_type_parse_case_insensitive() {
        assert_eq!("Classification".parse::<TaskType>().unwrap(), TaskType::Classification);
        assert_eq!("REGRESSION".parse::<TaskType>().unwrap(), TaskType::Regression);
        assert_eq!(" custom ".parse::<TaskType>().unwrap(), TaskType::Custom);
    }

    #[test]
    fn test_task_type_parse_rejects_unknown() {
        let err = "ranking".parse::<TaskType>().unwrap_err();
        assert!(matches!(err, ValidationError::InvalidTaskType(ref s) if s == "ranking"));
    }

    #[test]
    fn test_task_type_display_matches_serde() {
        for task in TaskType::ALL {
            let json = serde_json::to_string(&task).unwrap();
            assert_eq!(json, format!("\"{task}\""));
        }
    }

    #[test]
    fn test_task_type_deserialize_case_insensitive() {
        let task: TaskType = serde_yaml::from_str("Regression").unwrap();
        assert_eq!(task, TaskType::Regression);
        assert!(serde_json::from_str::<TaskType>("\"ranking\"").is_err());
    }

    #[test]
    fn test_data_uri_scheme() {
        assert_eq!(DataUri::from("gs://bucket/train.csv").scheme(), Some("gs"));
        assert_eq!(DataUri::from("s3://bucket/x").scheme(), Some("s3"));
        assert_eq!(DataUri::from("/data/train.csv").scheme(), None);
        assert_eq!(DataUri::from("://odd").scheme(), None);
    }

    #[test]
    fn test_data_uri_blank_is_empty() {
        assert!(DataUri::from("").is_empty());
        assert!(DataUri::from("   ").is_empty());
        assert!(!DataUri::from("train.csv").is_empty());
    }

    #[test]
    fn test_target_labels_lookup_both_ways() {
        let labels = TargetLabels::from_pairs([("b", 1), ("a", 0), ("c", 2)]).unwrap();
        assert_eq!(labels.index_of("c"), Some(2));
        assert_eq!(labels.label_of(0), Some("a"));
        assert_eq!(labels.label_of(3), None);
        assert_eq!(labels.index_of("z"), None);
        let ordered: Vec<_> = labels.iter().collect();
        assert_eq!(ordered, vec![("a", 0), ("b", 1), ("c", 2)]);
    }

    #[test]
    fn test_target_labels_serialize_in_index_order() {
        let labels = TargetLabels::from_pairs([("second", 1), ("first", 0)]).unwrap();
        let json = serde_json::to_string(&labels).unwrap();
        assert_eq!(json, r#"{"first":0,"second":1}"#);
    }

    #[test]
    fn test_target_labels_deserialize_rejects_gap() {
        let err = serde_json::from_str::<TargetLabels>(r#"{"a":0,"b":2}"#).unwrap_err();
        assert!(err.to_string().contains("contiguous"));
    }

    #[test]
    fn test_target_labels_deserialize_rejects_duplicate_key() {
        let result = serde_yaml::from_str::<TargetLabels>("a: 0\na: 1\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_metadata_lenient_max_seq_length() {
        let yaml = r#"
task_type: classification
train_data: gs://b/train.csv
test_data: gs://b/test.csv
pretrained_model_name: bert-base-cased
target_labels: {neg: 0, pos: 1}
max_seq_length: "256"
"#;
        let metadata: TrainerMetadata = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(metadata.max_seq_length(), 256);
    }

    #[test]
    fn test_metadata_deserialize_runs_validation() {
        let yaml = r"
train_data: gs://b/train.csv
test_data: gs://b/test.csv
pretrained_model_name: bert-base-cased
target_labels: {neg: 0, pos: 1}
max_seq_length: 0
";
        let err = serde_yaml::from_str::<TrainerMetadata>(yaml).unwrap_err();
        assert!(err.to_string().contains("max sequence length"));
    }

    #[test]
    fn test_metadata_rejects_unknown_field() {
        let yaml = r"
train_data: a
test_data: b
pretrained_model_name: m
target_labels: {neg: 0, pos: 1}
max_seq_length: 8
batch_size: 4
";
        assert!(serde_yaml::from_str::<TrainerMetadata>(yaml).is_err());
    }

    #[test]
    fn test_metadata_task_type_defaults_to_classification() {
        let json = r#"{"train_data":"a","test_data":"b","pretrained_model_name":"m",
            "target_labels":{"neg":0,"pos":1},"max_seq_length":8}"#;
        let metadata: TrainerMetadata = serde_json::from_str(json).unwrap();
        assert_eq!(metadata.task_type(), TaskType::Classification);
    }

    #[test]
    fn test_metadata_new_accessors() {
        let metadata =
            TrainerMetadata::new(TaskType::Custom, "train.csv", "test.csv", "m", labels(), 64)
                .unwrap();
        assert_eq!(metadata.task_type(), TaskType::Custom);
        assert_eq!(metadata.train_data().as_str(), "train.csv");
        assert_eq!(metadata.test_data().as_str(), "test.csv");
        assert_eq!(metadata.pretrained_model_name(), "m");
        assert_eq!(metadata.target_labels().num_classes(), 2);
        assert_eq!(metadata.max_seq_length(), 64);
    }

    #[test]
    fn test_metadata_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TrainerMetadata>();
    }
}
