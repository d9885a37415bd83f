//! Load and save job metadata files
//!
//! YAML (`.yaml`, `.yml`) and JSON (`.json`) are supported; the format is
//! picked from the file extension.

use super::schema::TrainerMetadata;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk format of a metadata file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfigFormat {
    #[default]
    Yaml,
    Json,
}

impl ConfigFormat {
    /// Detect the format from a path's extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "yaml" | "yml" => Ok(ConfigFormat::Yaml),
            "json" => Ok(ConfigFormat::Json),
            _ => Err(Error::UnsupportedFormat { extension }),
        }
    }
}

impl std::str::FromStr for ConfigFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "yaml" | "yml" => Ok(ConfigFormat::Yaml),
            "json" => Ok(ConfigFormat::Json),
            _ => Err(format!("Unknown config format: {s}. Valid formats: yaml, json")),
        }
    }
}

/// Parse and validate metadata from an in-memory document.
///
/// `origin` is only used to label errors.
pub fn parse_metadata(text: &str, format: ConfigFormat, origin: &Path) -> Result<TrainerMetadata> {
    let parsed = match format {
        ConfigFormat::Yaml => serde_yaml::from_str(text).map_err(|e| e.to_string()),
        ConfigFormat::Json => serde_json::from_str(text).map_err(|e| e.to_string()),
    };
    parsed.map_err(|message| Error::ConfigParsing { path: origin.to_path_buf(), message })
}

/// Load job metadata from a YAML or JSON file
///
/// Deserialization validates the record, so a returned value always
/// satisfies the label, sequence-length and non-empty-field invariants.
pub fn load_metadata<P: AsRef<Path>>(config_path: P) -> Result<TrainerMetadata> {
    let path = config_path.as_ref();
    let format = ConfigFormat::from_path(path)?;

    if !path.exists() {
        return Err(Error::ConfigNotFound { path: path.to_path_buf() });
    }

    tracing::debug!(path = %path.display(), ?format, "reading training metadata");
    let content = fs::read_to_string(path)
        .map_err(|e| Error::io(format!("Failed to read config file {}", path.display()), e))?;

    let metadata = parse_metadata(&content, format, path)?;
    tracing::info!(
        path = %path.display(),
        task_type = %metadata.task_type(),
        model = metadata.pretrained_model_name(),
        num_classes = metadata.target_labels().num_classes(),
        max_seq_length = metadata.max_seq_length(),
        "training metadata loaded"
    );
    Ok(metadata)
}

/// Render metadata in the given format.
pub fn render_metadata(metadata: &TrainerMetadata, format: ConfigFormat) -> Result<String> {
    match format {
        ConfigFormat::Yaml => serde_yaml::to_string(metadata)
            .map_err(|e| Error::Serialization { message: format!("YAML serialization error: {e}") }),
        ConfigFormat::Json => serde_json::to_string_pretty(metadata)
            .map_err(|e| Error::Serialization { message: format!("JSON serialization error: {e}") }),
    }
}

/// Write metadata to `path`, picking the format from its extension.
pub fn save_metadata<P: AsRef<Path>>(metadata: &TrainerMetadata, path: P) -> Result<PathBuf> {
    let path = path.as_ref();
    let format = ConfigFormat::from_path(path)?;
    let content = render_metadata(metadata, format)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| Error::io(format!("Failed to create {}", parent.display()), e))?;
    }
    fs::write(path, content)
        .map_err(|e| Error::io(format!("Failed to write config file {}", path.display()), e))?;

    tracing::debug!(path = %path.display(), "training metadata written");
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::{TaskType, ValidationError};
    use std::io::Write;
    use tempfile::{Builder, TempDir};

    const HAPPYDB_YAML: &str = r"
task_type: classification
train_data: gs://cloud-samples-data/ai-platform-unified/datasets/text/happydb/happydb_train.csv
test_data: gs://cloud-samples-data/ai-platform-unified/datasets/text/happydb/happydb_test.csv
pretrained_model_name: bert-base-cased
target_labels:
  leisure: 0
  exercise: 1
  enjoy_the_moment: 2
  affection: 3
  achievement: 4
  nature: 5
  bonding: 6
max_seq_length: 128
";

    #[test]
    fn test_load_valid_yaml() {
        let mut file = Builder::new().suffix(".yaml").tempfile().unwrap();
        file.write_all(HAPPYDB_YAML.as_bytes()).unwrap();

        let metadata = load_metadata(file.path()).unwrap();
        assert_eq!(metadata, TrainerMetadata::happydb());
    }

    #[test]
    fn test_load_valid_json() {
        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(
            br#"{
  "task_type": "regression",
  "train_data": "/data/train.csv",
  "test_data": "/data/test.csv",
  "pretrained_model_name": "distilbert-base-uncased",
  "target_labels": {"score": 0},
  "max_seq_length": 64
}"#,
        )
        .unwrap();

        let metadata = load_metadata(file.path()).unwrap();
        assert_eq!(metadata.task_type(), TaskType::Regression);
        assert_eq!(metadata.target_labels().num_classes(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = load_metadata(dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound { .. }));
    }

    #[test]
    fn test_load_unsupported_extension() {
        let err = load_metadata("job.toml").unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat { ref extension } if extension == "toml"));
    }

    #[test]
    fn test_load_invalid_labels_reports_path() {
        let mut file = Builder::new().suffix(".yml").tempfile().unwrap();
        let yaml = HAPPYDB_YAML.replace("bonding: 6", "bonding: 7");
        file.write_all(yaml.as_bytes()).unwrap();

        let err = load_metadata(file.path()).unwrap_err();
        assert!(matches!(err, Error::ConfigParsing { .. }));
        let msg = err.to_string();
        assert!(msg.contains("contiguous"));
        assert!(msg.contains(&file.path().display().to_string()));
    }

    #[test]
    fn test_parse_bad_task_type() {
        let yaml = HAPPYDB_YAML.replace("task_type: classification", "task_type: ranking");
        let err = parse_metadata(&yaml, ConfigFormat::Yaml, Path::new("inline")).unwrap_err();
        assert!(matches!(err, Error::ConfigParsing { .. }));
    }

    #[test]
    fn test_save_then_load_json_and_yaml() {
        let dir = TempDir::new().unwrap();
        let metadata = TrainerMetadata::builder().max_seq_length(256).build().unwrap();

        for name in ["nested/job.json", "job.yaml"] {
            let written = save_metadata(&metadata, dir.path().join(name)).unwrap();
            assert_eq!(load_metadata(&written).unwrap(), metadata);
        }
    }

    #[test]
    fn test_render_yaml_keeps_label_order() {
        let yaml = render_metadata(&TrainerMetadata::happydb(), ConfigFormat::Yaml).unwrap();
        let leisure = yaml.find("leisure").unwrap();
        let bonding = yaml.find("bonding").unwrap();
        assert!(leisure < bonding);
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("YML".parse::<ConfigFormat>().unwrap(), ConfigFormat::Yaml);
        assert_eq!("json".parse::<ConfigFormat>().unwrap(), ConfigFormat::Json);
        assert!("toml".parse::<ConfigFormat>().is_err());
    }

    #[test]
    fn test_validation_error_is_not_swallowed() {
        let yaml = HAPPYDB_YAML.replace("max_seq_length: 128", "max_seq_length: 0");
        let err = parse_metadata(&yaml, ConfigFormat::Yaml, Path::new("inline")).unwrap_err();
        assert!(err.to_string().contains(&ValidationError::InvalidMaxSeqLength(0).to_string()));
    }
}
