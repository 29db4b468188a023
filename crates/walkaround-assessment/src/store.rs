//! Session-scoped assessment store
//!
//! Owns one [`Assessment`] together with the schema it is keyed against.
//! UI and storage layers mutate through the setters here and hand
//! [`AssessmentStore::snapshot`] to scoring and rendering; the shared borrow
//! guarantees a render never observes a half-applied edit.

use crate::assessment::Assessment;
use crate::debrief::{Debrief, DebriefField};
use crate::error::StoreError;
use crate::meta::MetaField;
use crate::record::{AssessmentRecord, LoadReport};
use crate::response::ResponseValue;
use std::sync::Arc;
use walkaround_schema::{GroupId, QuestionKey, Schema, ToolKey};

/// One session's answers plus the schema they belong to
#[derive(Debug, Clone)]
pub struct AssessmentStore {
    schema: Arc<Schema>,
    assessment: Assessment,
}

impl AssessmentStore {
    /// Store holding a fresh empty assessment
    #[must_use]
    pub fn new(schema: Arc<Schema>) -> Self {
        let assessment = Assessment::empty(&schema);
        Self { schema, assessment }
    }

    /// Store wrapping an existing assessment
    #[must_use]
    pub fn with_assessment(schema: Arc<Schema>, assessment: Assessment) -> Self {
        Self { schema, assessment }
    }

    /// Load from a stored record
    #[must_use]
    pub fn from_record(schema: Arc<Schema>, record: AssessmentRecord) -> (Self, LoadReport) {
        let (assessment, report) = record.into_assessment(&schema);
        (Self { schema, assessment }, report)
    }

    /// Load stored JSON, falling back to an empty assessment on any parse failure
    ///
    /// The fallback is flagged in [`LoadReport::fell_back`] so callers can
    /// refuse to write the empty assessment over the stored text.
    #[must_use]
    pub fn load_json_or_empty(schema: Arc<Schema>, text: &str) -> (Self, LoadReport) {
        match AssessmentRecord::from_json(text) {
            Ok(record) => Self::from_record(schema, record),
            Err(e) => {
                tracing::warn!(error = %e, "stored assessment could not be parsed, starting empty");
                let report = LoadReport {
                    fell_back: true,
                    ..LoadReport::default()
                };
                (Self::new(schema), report)
            }
        }
    }

    /// Schema the assessment is keyed against
    #[inline]
    #[must_use]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Shared handle to the schema
    #[inline]
    #[must_use]
    pub fn schema_handle(&self) -> Arc<Schema> {
        Arc::clone(&self.schema)
    }

    /// Immutable view for scoring and rendering
    #[inline]
    #[must_use]
    pub fn snapshot(&self) -> &Assessment {
        &self.assessment
    }

    /// Give up the store, keeping the assessment
    #[inline]
    #[must_use]
    pub fn into_assessment(self) -> Assessment {
        self.assessment
    }

    /// Persistable record of the current state
    #[must_use]
    pub fn to_record(&self) -> AssessmentRecord {
        AssessmentRecord::from(&self.assessment)
    }

    /// Replace one response
    ///
    /// # Errors
    /// Returns error if the key does not exist
    pub fn set_response(&mut self, key: &QuestionKey, value: ResponseValue) -> Result<(), StoreError> {
        self.assessment.set_response(key, value)?;
        tracing::debug!(%key, %value, "response set");
        Ok(())
    }

    /// Replace one question note
    ///
    /// # Errors
    /// Returns error if the key does not exist
    pub fn set_question_note(
        &mut self,
        key: &QuestionKey,
        note: impl Into<String>,
    ) -> Result<(), StoreError> {
        self.assessment.set_question_note(key, note)
    }

    /// Flip one tool checkmark, returning the new state
    ///
    /// # Errors
    /// Returns error if the key does not exist
    pub fn toggle_tool(&mut self, key: &ToolKey) -> Result<bool, StoreError> {
        let checked = self.assessment.toggle_tool(key)?;
        tracing::debug!(%key, checked, "tool toggled");
        Ok(checked)
    }

    /// Set one tool checkmark
    ///
    /// # Errors
    /// Returns error if the key does not exist
    pub fn set_tool(&mut self, key: &ToolKey, checked: bool) -> Result<(), StoreError> {
        self.assessment.set_tool(key, checked)
    }

    /// Replace one group note
    ///
    /// # Errors
    /// Returns error if the group does not exist
    pub fn set_group_note(&mut self, id: &GroupId, note: impl Into<String>) -> Result<(), StoreError> {
        self.assessment.set_group_note(id, note)
    }

    /// Replace one meta field
    pub fn set_meta(&mut self, field: MetaField, value: impl Into<String>) {
        self.assessment.set_meta(field, value);
    }

    /// Replace one debrief field
    ///
    /// # Errors
    /// Returns error if a list slot index is out of range
    pub fn set_debrief_field(
        &mut self,
        field: DebriefField,
        value: impl Into<String>,
    ) -> Result<(), StoreError> {
        self.assessment.set_debrief_field(field, value)
    }

    /// Replace the general notes
    pub fn set_general_notes(&mut self, notes: impl Into<String>) {
        self.assessment.general_notes = notes.into();
    }

    /// Replace the evidence notes
    pub fn set_evidence_notes(&mut self, notes: impl Into<String>) {
        self.assessment.evidence_notes = notes.into();
    }

    /// Replace the whole debrief, e.g. with an auto-filled draft
    pub fn replace_debrief(&mut self, debrief: Debrief) {
        self.assessment.debrief = debrief;
    }

    /// Discard everything and start from a fresh empty assessment
    pub fn reset(&mut self) {
        tracing::info!(schema = self.schema.version(), "assessment reset");
        self.assessment = Assessment::empty(&self.schema);
    }
}
