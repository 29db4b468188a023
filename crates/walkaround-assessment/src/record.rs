//! Persisted form of an assessment
//!
//! [`AssessmentRecord`] is the one JSON-serializable record handed to and
//! from external storage. Keys are `"{group}.{index}"` strings and every
//! field is optional, so partially-shaped or older records still load:
//! missing, `null` or wrong-typed entries stay empty, unknown response text
//! becomes `unset`, and keys that no longer resolve against the schema are
//! dropped and counted.

use crate::assessment::Assessment;
use crate::debrief::{Debrief, DebriefList};
use crate::error::StoreError;
use crate::lenient;
use crate::meta::Meta;
use crate::response::ResponseValue;
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;
use walkaround_schema::{GroupId, QuestionKey, Schema, ToolKey};

/// Serialized assessment
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AssessmentRecord {
    /// Version label of the schema the answers were keyed against
    #[serde(alias = "schemaVersion", deserialize_with = "lenient::string")]
    pub schema_version: String,
    /// Descriptive header
    #[serde(deserialize_with = "lenient::or_default")]
    pub meta: Meta,
    /// `group.index` → `yes|partial|no|na` (anything else reads as unset)
    #[serde(deserialize_with = "lenient::string_map")]
    #[schemars(with = "BTreeMap<String, String>")]
    pub responses: IndexMap<String, String>,
    /// `group.index` → note text
    #[serde(alias = "qNotes", deserialize_with = "lenient::string_map")]
    #[schemars(with = "BTreeMap<String, String>")]
    pub q_notes: IndexMap<String, String>,
    /// `group.index` → checked
    #[serde(deserialize_with = "lenient::bool_map")]
    #[schemars(with = "BTreeMap<String, bool>")]
    pub tools: IndexMap<String, bool>,
    /// `group` → note text
    #[serde(alias = "groupNotes", deserialize_with = "lenient::string_map")]
    #[schemars(with = "BTreeMap<String, String>")]
    pub group_notes: IndexMap<String, String>,
    /// Notes for the whole walk
    #[serde(alias = "generalNotes", deserialize_with = "lenient::string")]
    pub general_notes: String,
    /// Evidence references
    #[serde(alias = "evidenceNotes", deserialize_with = "lenient::string")]
    pub evidence_notes: String,
    /// Debrief fields
    #[serde(deserialize_with = "lenient::or_default")]
    pub debrief: DebriefRecord,
}

/// Serialized debrief; list lengths are normalised on load
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct DebriefRecord {
    /// Headline
    #[serde(deserialize_with = "lenient::string")]
    pub headline: String,
    /// Wins
    #[serde(alias = "topWins", deserialize_with = "lenient::string_list")]
    pub top_wins: Vec<String>,
    /// Gaps
    #[serde(alias = "topGaps", deserialize_with = "lenient::string_list")]
    pub top_gaps: Vec<String>,
    /// Risks
    #[serde(deserialize_with = "lenient::string_list")]
    pub risks: Vec<String>,
    /// Recommendations
    #[serde(deserialize_with = "lenient::string_list")]
    pub recommendations: Vec<String>,
    /// Next step
    #[serde(alias = "proposedNextStep", deserialize_with = "lenient::string")]
    pub proposed_next_step: String,
}

/// What a tolerant load had to discard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadReport {
    /// Entries whose key did not resolve against the schema
    pub dropped_keys: usize,
    /// Record was written against a different schema version
    pub version_mismatch: bool,
    /// Stored text was unusable and an empty assessment was substituted
    pub fell_back: bool,
}

impl LoadReport {
    /// Nothing was discarded
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.dropped_keys == 0 && !self.version_mismatch && !self.fell_back
    }
}

impl From<&Debrief> for DebriefRecord {
    fn from(debrief: &Debrief) -> Self {
        Self {
            headline: debrief.headline.clone(),
            top_wins: debrief.top_wins.to_vec(),
            top_gaps: debrief.top_gaps.to_vec(),
            risks: debrief.risks.to_vec(),
            recommendations: debrief.recommendations.to_vec(),
            proposed_next_step: debrief.proposed_next_step.clone(),
        }
    }
}

impl From<DebriefRecord> for Debrief {
    fn from(record: DebriefRecord) -> Self {
        let mut debrief = Self {
            headline: record.headline,
            proposed_next_step: record.proposed_next_step,
            ..Self::default()
        };
        debrief.fill_list(DebriefList::TopWins, record.top_wins);
        debrief.fill_list(DebriefList::TopGaps, record.top_gaps);
        debrief.fill_list(DebriefList::Risks, record.risks);
        debrief.fill_list(DebriefList::Recommendations, record.recommendations);
        debrief
    }
}

impl From<&Assessment> for AssessmentRecord {
    fn from(assessment: &Assessment) -> Self {
        let mut record = Self {
            schema_version: assessment.schema_version().to_string(),
            meta: assessment.meta.clone(),
            general_notes: assessment.general_notes.clone(),
            evidence_notes: assessment.evidence_notes.clone(),
            debrief: DebriefRecord::from(&assessment.debrief),
            ..Self::default()
        };

        for (id, answers) in assessment.groups() {
            for (i, response) in answers.responses().iter().enumerate() {
                let value = if response.is_answered() {
                    response.as_str()
                } else {
                    ""
                };
                record
                    .responses
                    .insert(id.question(i).to_string(), value.to_string());
            }
            for (i, note) in answers.question_notes().iter().enumerate() {
                record.q_notes.insert(id.question(i).to_string(), note.clone());
            }
            for (i, checked) in answers.tools().iter().enumerate() {
                record.tools.insert(id.tool(i).to_string(), *checked);
            }
            record
                .group_notes
                .insert(id.to_string(), answers.note().to_string());
        }
        record
    }
}

impl AssessmentRecord {
    /// Rebuild an assessment against `schema`, tolerating any shape damage
    #[must_use]
    pub fn into_assessment(self, schema: &Schema) -> (Assessment, LoadReport) {
        let mut assessment = Assessment::empty(schema);
        let mut report = LoadReport {
            version_mismatch: !self.schema_version.is_empty()
                && self.schema_version != schema.version(),
            ..LoadReport::default()
        };

        for (key, value) in &self.responses {
            let applied = QuestionKey::from_str(key)
                .ok()
                .and_then(|k| assessment.set_response(&k, ResponseValue::parse_lossy(value)).ok());
            if applied.is_none() {
                report.dropped_keys += 1;
            }
        }
        for (key, note) in self.q_notes {
            let applied = QuestionKey::from_str(&key)
                .ok()
                .and_then(|k| assessment.set_question_note(&k, note).ok());
            if applied.is_none() {
                report.dropped_keys += 1;
            }
        }
        for (key, checked) in &self.tools {
            let applied = ToolKey::from_str(key)
                .ok()
                .and_then(|k| assessment.set_tool(&k, *checked).ok());
            if applied.is_none() {
                report.dropped_keys += 1;
            }
        }
        for (id, note) in self.group_notes {
            if assessment.set_group_note(&GroupId::new(id), note).is_err() {
                report.dropped_keys += 1;
            }
        }

        assessment.meta = self.meta;
        assessment.general_notes = self.general_notes;
        assessment.evidence_notes = self.evidence_notes;
        assessment.debrief = self.debrief.into();

        if report.version_mismatch {
            tracing::warn!(
                stored = %self.schema_version,
                current = schema.version(),
                "assessment was recorded against a different schema version"
            );
        }
        if report.dropped_keys > 0 {
            tracing::warn!(
                dropped = report.dropped_keys,
                "dropped record entries that do not resolve against the schema"
            );
        }
        (assessment, report)
    }

    /// Parse a JSON record
    ///
    /// # Errors
    /// Returns error if the text is not JSON of a compatible shape
    pub fn from_json(text: &str) -> Result<Self, StoreError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Pretty JSON form
    ///
    /// # Errors
    /// Returns error if serialization fails
    pub fn to_json(&self) -> Result<String, StoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// JSON Schema describing the record, for external storage layers
    #[must_use]
    pub fn json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(AssessmentRecord)
    }
}
