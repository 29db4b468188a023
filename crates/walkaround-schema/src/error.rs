//! Error types for schema loading and key parsing
//!
//! The compiled-in questionnaire never fails; these errors only surface when
//! an alternative questionnaire version is loaded from disk or text.

use std::path::PathBuf;

/// Errors while loading or validating a questionnaire schema
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// IO error during file read
    #[error("io error reading {path}: {source}")]
    Io {
        /// File that failed to read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// File extension is not one of yaml, yml or json
    #[error("unsupported schema file extension: '{0}'")]
    UnsupportedExtension(String),

    /// YAML syntax or shape error
    #[error("invalid yaml schema: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON syntax or shape error
    #[error("invalid json schema: {0}")]
    Json(#[from] serde_json::Error),

    /// Section id appears more than once
    #[error("duplicate section id: '{0}'")]
    DuplicateSection(String),

    /// Group id appears more than once across the schema
    #[error("duplicate group id: '{0}'")]
    DuplicateGroup(String),

    /// A section or group has an empty id
    #[error("empty id in {0}")]
    EmptyId(String),

    /// A section or group has an empty title
    #[error("empty title for '{0}'")]
    EmptyTitle(String),
}

impl SchemaError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors parsing a positional key such as `flow.2`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyParseError {
    /// No `.` separator between group id and index
    #[error("missing '.' separator in key '{0}'")]
    MissingSeparator(String),

    /// Group id part is empty
    #[error("empty group id in key '{0}'")]
    EmptyGroup(String),

    /// Index part is not a non-negative integer
    #[error("invalid index in key '{0}'")]
    InvalidIndex(String),
}
