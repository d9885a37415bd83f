//! Error types with actionable diagnostics.
//!
//! Every user-facing error carries enough context to fix the problem
//! without reading the source: the offending path or field, and a `→` hint.

use crate::metadata::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for textclf-trainer operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading, validating or writing job metadata.
#[derive(Error, Debug)]
pub enum Error {
    /// Metadata file not found at the expected path.
    #[error("Configuration file not found: {path}\n  → Create one with `textclf init --output {path}`")]
    ConfigNotFound { path: PathBuf },

    /// Metadata file has invalid syntax or shape.
    #[error("Invalid configuration syntax in {path}:\n  {message}\n  → Check YAML/JSON syntax at the indicated line")]
    ConfigParsing { path: PathBuf, message: String },

    /// Metadata parsed but violates an invariant.
    #[error("Invalid training metadata: {0}")]
    Validation(#[from] ValidationError),

    /// Output file already exists and overwriting was not requested.
    #[error("Output file already exists: {path}\n  → Pass --force to overwrite it, or choose another --output path")]
    OutputExists { path: PathBuf },

    /// File extension is neither YAML nor JSON.
    #[error("Unsupported configuration format: '{extension}'\n  → Supported extensions: .yaml, .yml, .json")]
    UnsupportedFormat { extension: String },

    /// IO error with context.
    #[error("IO error: {context}\n  Cause: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// Serialization error while writing metadata.
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl Error {
    /// Create an IO error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io { context: context.into(), source }
    }

    /// Check if this error is user-recoverable.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::ConfigNotFound { .. }
                | Self::ConfigParsing { .. }
                | Self::Validation(_)
                | Self::OutputExists { .. }
                | Self::UnsupportedFormat { .. }
        )
    }

    /// Get the error code for structured output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigNotFound { .. } => "E001",
            Self::ConfigParsing { .. } => "E002",
            Self::Validation(_) => "E003",
            Self::OutputExists { .. } => "E004",
            Self::UnsupportedFormat { .. } => "E011",
            Self::Io { .. } => "E050",
            Self::Serialization { .. } => "E051",
        }
    }
}
