//! One session's answers
//!
//! Answers live in a table keyed by [`GroupId`]. Each entry holds vectors
//! sized from the schema when the assessment is built, so every question and
//! tool position already has a slot and lookups never need defaulting.

use crate::debrief::{Debrief, DebriefField};
use crate::error::StoreError;
use crate::meta::{Meta, MetaField};
use crate::response::ResponseValue;
use indexmap::IndexMap;
use walkaround_schema::{Group, GroupId, QuestionKey, Schema, ToolKey};

/// Answers for one group, positionally aligned with the schema group
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GroupAnswers {
    responses: Vec<ResponseValue>,
    question_notes: Vec<String>,
    tools: Vec<bool>,
    note: String,
}

impl GroupAnswers {
    /// Empty answers sized for `group`
    #[must_use]
    pub fn empty_for(group: &Group) -> Self {
        Self {
            responses: vec![ResponseValue::Unset; group.questions.len()],
            question_notes: vec![String::new(); group.questions.len()],
            tools: vec![false; group.tools.len()],
            note: String::new(),
        }
    }

    /// Responses in question order
    #[inline]
    #[must_use]
    pub fn responses(&self) -> &[ResponseValue] {
        &self.responses
    }

    /// Per-question notes in question order
    #[inline]
    #[must_use]
    pub fn question_notes(&self) -> &[String] {
        &self.question_notes
    }

    /// Tool checkmarks in tool order
    #[inline]
    #[must_use]
    pub fn tools(&self) -> &[bool] {
        &self.tools
    }

    /// Free-text group note
    #[inline]
    #[must_use]
    pub fn note(&self) -> &str {
        &self.note
    }

    /// Questions with any answer (including N/A)
    #[must_use]
    pub fn answered(&self) -> usize {
        self.responses.iter().filter(|r| r.is_answered()).count()
    }

    /// Checked tools
    #[must_use]
    pub fn checked(&self) -> usize {
        self.tools.iter().filter(|t| **t).count()
    }
}

/// Completion counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
    /// Questions with an answer
    pub answered: usize,
    /// Questions in scope
    pub questions: usize,
    /// Tools checked
    pub checked: usize,
    /// Tools in scope
    pub tools: usize,
}

/// Mutable record of one walkaround
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assessment {
    schema_version: String,
    /// Descriptive header
    pub meta: Meta,
    answers: IndexMap<GroupId, GroupAnswers>,
    /// Free-text notes for the whole walk
    pub general_notes: String,
    /// Evidence references (photos, documents)
    pub evidence_notes: String,
    /// Executive debrief fields
    pub debrief: Debrief,
}

impl Assessment {
    /// Fresh assessment with every key present and empty
    #[must_use]
    pub fn empty(schema: &Schema) -> Self {
        let answers = schema
            .groups()
            .map(|(_, g)| (g.id.clone(), GroupAnswers::empty_for(g)))
            .collect();
        Self {
            schema_version: schema.version().to_string(),
            meta: Meta::default(),
            answers,
            general_notes: String::new(),
            evidence_notes: String::new(),
            debrief: Debrief::default(),
        }
    }

    /// Version label of the schema this assessment was built against
    #[inline]
    #[must_use]
    pub fn schema_version(&self) -> &str {
        &self.schema_version
    }

    /// Answers of one group
    #[inline]
    #[must_use]
    pub fn group(&self, id: &GroupId) -> Option<&GroupAnswers> {
        self.answers.get(id)
    }

    /// Every group's answers in schema order
    pub fn groups(&self) -> impl Iterator<Item = (&GroupId, &GroupAnswers)> {
        self.answers.iter()
    }

    /// Response at a key; unknown keys read as `Unset`
    #[must_use]
    pub fn response(&self, key: &QuestionKey) -> ResponseValue {
        self.answers
            .get(&key.group)
            .and_then(|g| g.responses.get(key.index))
            .copied()
            .unwrap_or_default()
    }

    /// Note at a key; unknown keys read as empty
    #[must_use]
    pub fn question_note(&self, key: &QuestionKey) -> &str {
        self.answers
            .get(&key.group)
            .and_then(|g| g.question_notes.get(key.index))
            .map_or("", String::as_str)
    }

    /// Tool state at a key; unknown keys read as unchecked
    #[must_use]
    pub fn tool(&self, key: &ToolKey) -> bool {
        self.answers
            .get(&key.group)
            .and_then(|g| g.tools.get(key.index))
            .copied()
            .unwrap_or(false)
    }

    /// Group note; unknown groups read as empty
    #[must_use]
    pub fn group_note(&self, id: &GroupId) -> &str {
        self.answers.get(id).map_or("", |g| g.note.as_str())
    }

    fn group_mut(&mut self, id: &GroupId) -> Result<&mut GroupAnswers, StoreError> {
        self.answers
            .get_mut(id)
            .ok_or_else(|| StoreError::UnknownGroup(id.clone()))
    }

    /// Replace one response
    ///
    /// # Errors
    /// Returns error if the key does not exist
    pub fn set_response(&mut self, key: &QuestionKey, value: ResponseValue) -> Result<(), StoreError> {
        let slot = self
            .group_mut(&key.group)?
            .responses
            .get_mut(key.index)
            .ok_or_else(|| StoreError::UnknownQuestion(key.clone()))?;
        *slot = value;
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
        let slot = self
            .group_mut(&key.group)?
            .question_notes
            .get_mut(key.index)
            .ok_or_else(|| StoreError::UnknownQuestion(key.clone()))?;
        *slot = note.into();
        Ok(())
    }

    /// Set one tool checkmark
    ///
    /// # Errors
    /// Returns error if the key does not exist
    pub fn set_tool(&mut self, key: &ToolKey, checked: bool) -> Result<(), StoreError> {
        let slot = self
            .group_mut(&key.group)?
            .tools
            .get_mut(key.index)
            .ok_or_else(|| StoreError::UnknownTool(key.clone()))?;
        *slot = checked;
        Ok(())
    }

    /// Flip one tool checkmark, returning the new state
    ///
    /// # Errors
    /// Returns error if the key does not exist
    pub fn toggle_tool(&mut self, key: &ToolKey) -> Result<bool, StoreError> {
        let slot = self
            .group_mut(&key.group)?
            .tools
            .get_mut(key.index)
            .ok_or_else(|| StoreError::UnknownTool(key.clone()))?;
        *slot = !*slot;
        Ok(*slot)
    }

    /// Replace one group note
    ///
    /// # Errors
    /// Returns error if the group does not exist
    pub fn set_group_note(&mut self, id: &GroupId, note: impl Into<String>) -> Result<(), StoreError> {
        self.group_mut(id)?.note = note.into();
        Ok(())
    }

    /// Replace one meta field
    pub fn set_meta(&mut self, field: MetaField, value: impl Into<String>) {
        self.meta.set(field, value);
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
        self.debrief.set(field, value)
    }

    /// Completion counters for one group
    #[must_use]
    pub fn group_progress(&self, id: &GroupId) -> Progress {
        self.answers.get(id).map_or_else(Progress::default, |g| Progress {
            answered: g.answered(),
            questions: g.responses.len(),
            checked: g.checked(),
            tools: g.tools.len(),
        })
    }

    /// Completion counters for the whole assessment
    #[must_use]
    pub fn progress(&self) -> Progress {
        self.answers.values().fold(Progress::default(), |acc, g| Progress {
            answered: acc.answered + g.answered(),
            questions: acc.questions + g.responses.len(),
            checked: acc.checked + g.checked(),
            tools: acc.tools + g.tools.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debrief::DebriefField;

    #[test]
    fn empty_assessment_has_every_key() {
        let schema = Schema::builtin();
        let assessment = Assessment::empty(&schema);

        for key in schema.question_keys() {
            assert_eq!(assessment.response(&key), ResponseValue::Unset);
            assert_eq!(assessment.question_note(&key), "");
            assert!(assessment.group(&key.group).unwrap().responses().len() > key.index);
        }
        for key in schema.tool_keys() {
            assert!(!assessment.tool(&key));
        }
        let progress = assessment.progress();
        assert_eq!(progress.questions, schema.question_count());
        assert_eq!(progress.tools, schema.tool_count());
        assert_eq!(progress.answered, 0);
    }

    #[test]
    fn setters_touch_exactly_one_entry() {
        let schema = Schema::builtin();
        let mut assessment = Assessment::empty(&schema);
        let before = assessment.clone();

        let key = GroupId::new("flow").question(1);
        assessment.set_response(&key, ResponseValue::Partial).unwrap();

        for other in schema.question_keys() {
            if other != key {
                assert_eq!(assessment.response(&other), before.response(&other));
            }
        }
        assert_eq!(assessment.response(&key), ResponseValue::Partial);
        assert_eq!(assessment.group_progress(&key.group).answered, 1);
    }

    #[test]
    fn toggle_flips_and_reports_state() {
        let schema = Schema::builtin();
        let mut assessment = Assessment::empty(&schema);
        let key = GroupId::new("boards").tool(2);

        assert!(assessment.toggle_tool(&key).unwrap());
        assert!(assessment.tool(&key));
        assert!(!assessment.toggle_tool(&key).unwrap());
        assessment.set_tool(&key, true).unwrap();
        assert_eq!(assessment.progress().checked, 1);
    }

    #[test]
    fn unknown_keys_are_rejected_by_setters() {
        let schema = Schema::builtin();
        let mut assessment = Assessment::empty(&schema);

        let err = assessment
            .set_response(&GroupId::new("nope").question(0), ResponseValue::Yes)
            .unwrap_err();
        assert!(matches!(err, StoreError::UnknownGroup(_)));

        let err = assessment
            .set_question_note(&GroupId::new("flow").question(99), "x")
            .unwrap_err();
        assert!(matches!(err, StoreError::UnknownQuestion(_)));

        let err = assessment.toggle_tool(&GroupId::new("flow").tool(99)).unwrap_err();
        assert!(matches!(err, StoreError::UnknownTool(_)));

        assert_eq!(assessment, Assessment::empty(&schema));
    }

    #[test]
    fn unknown_keys_read_as_empty() {
        let schema = Schema::builtin();
        let assessment = Assessment::empty(&schema);
        let key = GroupId::new("nope").question(0);
        assert_eq!(assessment.response(&key), ResponseValue::Unset);
        assert_eq!(assessment.question_note(&key), "");
        assert_eq!(assessment.group_note(&key.group), "");
        assert!(!assessment.tool(&GroupId::new("nope").tool(0)));
    }

    #[test]
    fn text_setters_replace_values() {
        let schema = Schema::builtin();
        let mut assessment = Assessment::empty(&schema);
        let group = GroupId::new("skills");

        assessment.set_group_note(&group, "Matrix last updated 2019").unwrap();
        assessment.set_meta(MetaField::Customer, "Acme");
        assessment.set_debrief_field(DebriefField::Headline, "Flow first").unwrap();

        assert_eq!(assessment.group_note(&group), "Matrix last updated 2019");
        assert_eq!(assessment.meta.customer, "Acme");
        assert_eq!(assessment.debrief.headline, "Flow first");
    }
}
