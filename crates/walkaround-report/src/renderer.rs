//! Document renderer

use crate::config::ReportConfig;
use crate::filename::suggested_filename;
use crate::{debrief, diagnostic};
use chrono::NaiveDate;
use serde::Serialize;
use walkaround_assessment::{Assessment, Debrief, Meta};
use walkaround_schema::Schema;

/// The two downloadable documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// Every question, response, note and tool
    Diagnostic,
    /// One-page summary for leadership
    Debrief,
}

impl DocumentKind {
    /// Both kinds, diagnostic first
    pub const ALL: [Self; 2] = [Self::Diagnostic, Self::Debrief];

    /// Lowercase name
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Diagnostic => "diagnostic",
            Self::Debrief => "debrief",
        }
    }
}

/// A rendered document ready to be written
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedDocument {
    /// Which document this is
    pub kind: DocumentKind,
    /// Suggested filename
    pub filename: String,
    /// Self-contained HTML
    pub html: String,
}

/// Renders assessments into standalone HTML documents.
///
/// Output depends only on the inputs; rendering the same assessment twice
/// yields byte-identical documents.
#[derive(Debug, Clone, Default)]
pub struct ReportRenderer {
    config: ReportConfig,
}

impl ReportRenderer {
    /// Create renderer
    #[must_use]
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    /// Get configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Full diagnostic
    #[must_use]
    pub fn render_diagnostic(&self, schema: &Schema, assessment: &Assessment) -> String {
        tracing::debug!(groups = schema.group_count(), "rendering diagnostic");
        diagnostic::render(schema, assessment, &self.config.footer)
    }

    /// Executive debrief
    ///
    /// Uses `draft` when given, otherwise the debrief stored in the
    /// assessment. Passing an autofilled draft previews it without
    /// committing it to the store.
    #[must_use]
    pub fn render_debrief(
        &self,
        schema: &Schema,
        assessment: &Assessment,
        draft: Option<&Debrief>,
    ) -> String {
        tracing::debug!(draft = draft.is_some(), "rendering executive debrief");
        let debrief = draft.unwrap_or(&assessment.debrief);
        debrief::render(schema, assessment, debrief, &self.config.footer)
    }

    /// Suggested filename for one document
    #[must_use]
    pub fn filename(&self, kind: DocumentKind, meta: &Meta, today: NaiveDate) -> String {
        let prefix = match kind {
            DocumentKind::Diagnostic => &self.config.diagnostic_prefix,
            DocumentKind::Debrief => &self.config.debrief_prefix,
        };
        suggested_filename(prefix, meta, &self.config.fallback_name, today)
    }

    /// Render one document together with its filename
    #[must_use]
    pub fn render(
        &self,
        kind: DocumentKind,
        schema: &Schema,
        assessment: &Assessment,
        today: NaiveDate,
    ) -> RenderedDocument {
        let html = match kind {
            DocumentKind::Diagnostic => self.render_diagnostic(schema, assessment),
            DocumentKind::Debrief => self.render_debrief(schema, assessment, None),
        };
        let filename = self.filename(kind, &assessment.meta, today);
        tracing::info!(kind = kind.as_str(), %filename, bytes = html.len(), "document rendered");
        RenderedDocument {
            kind,
            filename,
            html,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use walkaround_assessment::DebriefField;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
    }

    #[test]
    fn filenames_use_configured_prefixes() {
        let renderer = ReportRenderer::default();
        let meta = Meta {
            customer: "Acme".to_string(),
            date: "2026-01-02".to_string(),
            ..Meta::default()
        };
        assert_eq!(
            renderer.filename(DocumentKind::Diagnostic, &meta, today()),
            "Lean_Walkaround_Diagnostic_Acme_2026-01-02.html"
        );
        assert_eq!(
            renderer.filename(DocumentKind::Debrief, &meta, today()),
            "Executive_Debrief_Acme_2026-01-02.html"
        );
    }

    #[test]
    fn draft_overrides_stored_debrief() {
        let schema = Schema::builtin();
        let mut assessment = Assessment::empty(&schema);
        assessment.set_debrief_field(DebriefField::Headline, "stored").unwrap();
        let mut draft = Debrief::default();
        draft.set(DebriefField::Headline, "preview").unwrap();

        let renderer = ReportRenderer::default();
        let stored = renderer.render_debrief(&schema, &assessment, None);
        let previewed = renderer.render_debrief(&schema, &assessment, Some(&draft));

        assert!(stored.contains("<p>stored</p>"));
        assert!(previewed.contains("<p>preview</p>"));
        assert!(!previewed.contains("stored"));
        assert_eq!(assessment.debrief.headline, "stored");
    }

    #[test]
    fn footer_comes_from_config() {
        let schema = Schema::builtin();
        let assessment = Assessment::empty(&schema);
        let renderer = ReportRenderer::new(ReportConfig::new().with_footer("Confidential & internal"));

        let doc = renderer.render(DocumentKind::Diagnostic, &schema, &assessment, today());
        assert_eq!(doc.kind, DocumentKind::Diagnostic);
        assert!(doc.html.contains("<footer>Confidential &amp; internal</footer>"));
        assert_eq!(doc.filename, "Lean_Walkaround_Diagnostic_Assessment_2026-10-17.html");
    }
}
