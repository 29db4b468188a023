//! Tool configuration
//!
//! One TOML file with a `[synthesis]` and a `[report]` table. Both tables and
//! every key in them are optional.
//!
//! ```toml
//! [synthesis]
//! max_gaps = 4
//!
//! [report]
//! footer = "Confidential"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use walkaround_engine::SynthesisConfig;
use walkaround_report::ReportConfig;

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("failed to read config {path}: {source}")]
    Io {
        /// Offending path
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// File is not valid TOML for [`WalkaroundConfig`]
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Debrief heuristic and report settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkaroundConfig {
    /// Auto-fill limits and defaults
    pub synthesis: SynthesisConfig,
    /// Document naming and footer
    pub report: ReportConfig,
}

impl WalkaroundConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With synthesis settings
    #[inline]
    #[must_use]
    pub fn with_synthesis(mut self, synthesis: SynthesisConfig) -> Self {
        self.synthesis = synthesis;
        self
    }

    /// With report settings
    #[inline]
    #[must_use]
    pub fn with_report(mut self, report: ReportConfig) -> Self {
        self.report = report;
        self
    }

    /// Parse from TOML text
    ///
    /// # Errors
    /// Returns error if the text is not valid TOML or a key has the wrong type
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Read and parse a TOML file
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }
}
