//! Questionnaire taxonomy
//!
//! A [`Schema`] is a list of [`Section`]s, each holding [`Group`]s of
//! questions and checklist tools. Once built it is never mutated; every
//! component receives it by reference.

use crate::error::SchemaError;
use crate::key::{GroupId, QuestionKey, SectionId, ToolKey};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A group of related questions and an optional tool checklist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Unique id across the schema
    pub id: GroupId,
    /// Display title, usually prefixed with an enumeration label ("A. ...")
    pub title: String,
    /// Heading shown above the tool checklist
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools_title: Option<String>,
    /// Question texts; identity is the index
    #[serde(default)]
    pub questions: Vec<String>,
    /// Checklist item labels; identity is the index
    #[serde(default)]
    pub tools: Vec<String>,
}

impl Group {
    /// Keys of every question in order
    pub fn question_keys(&self) -> impl Iterator<Item = QuestionKey> + '_ {
        (0..self.questions.len()).map(|i| self.id.question(i))
    }

    /// Keys of every tool in order
    pub fn tool_keys(&self) -> impl Iterator<Item = ToolKey> + '_ {
        (0..self.tools.len()).map(|i| self.id.tool(i))
    }
}

/// Top-level questionnaire section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Unique section id
    pub id: SectionId,
    /// Display title
    pub title: String,
    /// Optional secondary line under the title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Groups in display order
    #[serde(default)]
    pub groups: Vec<Group>,
}

/// Immutable questionnaire definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    version: String,
    title: String,
    sections: Vec<Section>,
}

impl Schema {
    /// Build and validate a schema
    ///
    /// # Errors
    /// Returns error on duplicate or empty ids and empty titles
    pub fn new(
        version: impl Into<String>,
        title: impl Into<String>,
        sections: Vec<Section>,
    ) -> Result<Self, SchemaError> {
        let schema = Self {
            version: version.into(),
            title: title.into(),
            sections,
        };
        schema.validate()?;
        Ok(schema)
    }

    /// Build without validation; callers vouch for the content
    pub(crate) fn from_trusted_parts(version: &str, title: &str, sections: Vec<Section>) -> Self {
        Self {
            version: version.to_string(),
            title: title.to_string(),
            sections,
        }
    }

    /// Check id uniqueness and non-empty labels
    ///
    /// # Errors
    /// Returns the first violation found in schema order
    pub fn validate(&self) -> Result<(), SchemaError> {
        let mut section_ids = HashSet::new();
        let mut group_ids = HashSet::new();

        for section in &self.sections {
            if section.id.as_str().trim().is_empty() {
                return Err(SchemaError::EmptyId(format!("section '{}'", section.title)));
            }
            if section.title.trim().is_empty() {
                return Err(SchemaError::EmptyTitle(section.id.to_string()));
            }
            if !section_ids.insert(section.id.as_str()) {
                return Err(SchemaError::DuplicateSection(section.id.to_string()));
            }

            for group in &section.groups {
                if group.id.as_str().trim().is_empty() {
                    return Err(SchemaError::EmptyId(format!("group '{}'", group.title)));
                }
                if group.title.trim().is_empty() {
                    return Err(SchemaError::EmptyTitle(group.id.to_string()));
                }
                if !group_ids.insert(group.id.as_str()) {
                    return Err(SchemaError::DuplicateGroup(group.id.to_string()));
                }
            }
        }
        Ok(())
    }

    /// Version label stored alongside persisted assessments
    #[inline]
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Questionnaire title
    #[inline]
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Sections in display order
    #[inline]
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Every group paired with its owning section, in schema order
    pub fn groups(&self) -> impl Iterator<Item = (&Section, &Group)> {
        self.sections
            .iter()
            .flat_map(|s| s.groups.iter().map(move |g| (s, g)))
    }

    /// Look up a section by id
    #[must_use]
    pub fn section(&self, id: &SectionId) -> Option<&Section> {
        self.sections.iter().find(|s| &s.id == id)
    }

    /// Look up a group by id
    #[must_use]
    pub fn group(&self, id: &GroupId) -> Option<&Group> {
        self.groups().map(|(_, g)| g).find(|g| &g.id == id)
    }

    /// Question text for a key, if the key resolves
    #[must_use]
    pub fn question(&self, key: &QuestionKey) -> Option<&str> {
        self.group(&key.group)
            .and_then(|g| g.questions.get(key.index))
            .map(String::as_str)
    }

    /// Tool label for a key, if the key resolves
    #[must_use]
    pub fn tool(&self, key: &ToolKey) -> Option<&str> {
        self.group(&key.group)
            .and_then(|g| g.tools.get(key.index))
            .map(String::as_str)
    }

    /// All question keys in schema order
    pub fn question_keys(&self) -> impl Iterator<Item = QuestionKey> + '_ {
        self.groups().flat_map(|(_, g)| g.question_keys())
    }

    /// All tool keys in schema order
    pub fn tool_keys(&self) -> impl Iterator<Item = ToolKey> + '_ {
        self.groups().flat_map(|(_, g)| g.tool_keys())
    }

    /// Number of groups
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.sections.iter().map(|s| s.groups.len()).sum()
    }

    /// Number of questions
    #[must_use]
    pub fn question_count(&self) -> usize {
        self.groups().map(|(_, g)| g.questions.len()).sum()
    }

    /// Number of checklist tools
    #[must_use]
    pub fn tool_count(&self) -> usize {
        self.groups().map(|(_, g)| g.tools.len()).sum()
    }
}
