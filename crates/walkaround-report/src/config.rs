//! Report configuration

use serde::{Deserialize, Serialize};

/// Naming and labelling of the rendered documents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Filename prefix of the full diagnostic
    pub diagnostic_prefix: String,
    /// Filename prefix of the executive debrief
    pub debrief_prefix: String,
    /// Filename name part when customer and site sanitize to nothing
    pub fallback_name: String,
    /// Footer line printed at the bottom of both documents
    pub footer: String,
}

impl ReportConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With a different footer line
    #[inline]
    #[must_use]
    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = footer.into();
        self
    }

    /// With a different fallback filename part
    #[inline]
    #[must_use]
    pub fn with_fallback_name(mut self, name: impl Into<String>) -> Self {
        self.fallback_name = name.into();
        self
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            diagnostic_prefix: "Lean_Walkaround_Diagnostic".to_string(),
            debrief_prefix: "Executive_Debrief".to_string(),
            fallback_name: "Assessment".to_string(),
            footer: "Prepared from an on-site lean walkaround. Scores reflect observations on the day of the visit.".to_string(),
        }
    }
}
