//! Identifiers and positional keys
//!
//! Questions and tools are addressed by their index within the owning group,
//! never by text. [`QuestionKey`] and [`ToolKey`] are distinct types so a tool
//! position can never be handed to a question lookup.
//!
//! Both keys render as `"{group}.{index}"`, which is also the persisted form.

use crate::error::KeyParseError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Unique section identifier
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct SectionId(String);

impl SectionId {
    /// Create section id
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow as string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for SectionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unique group identifier (unique across the whole schema)
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct GroupId(String);

impl GroupId {
    /// Create group id
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow as string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Key of the question at `index` within this group
    #[inline]
    #[must_use]
    pub fn question(&self, index: usize) -> QuestionKey {
        QuestionKey::new(self.clone(), index)
    }

    /// Key of the tool at `index` within this group
    #[inline]
    #[must_use]
    pub fn tool(&self, index: usize) -> ToolKey {
        ToolKey::new(self.clone(), index)
    }
}

impl Display for GroupId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GroupId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Position of a question within its group
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QuestionKey {
    /// Owning group
    pub group: GroupId,
    /// Zero-based index in the group's question list
    pub index: usize,
}

impl QuestionKey {
    /// Create question key
    #[inline]
    #[must_use]
    pub fn new(group: GroupId, index: usize) -> Self {
        Self { group, index }
    }
}

impl Display for QuestionKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.group, self.index)
    }
}

impl FromStr for QuestionKey {
    type Err = KeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (group, index) = split_key(s)?;
        Ok(Self::new(group, index))
    }
}

/// Position of a checklist tool within its group
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ToolKey {
    /// Owning group
    pub group: GroupId,
    /// Zero-based index in the group's tool list
    pub index: usize,
}

impl ToolKey {
    /// Create tool key
    #[inline]
    #[must_use]
    pub fn new(group: GroupId, index: usize) -> Self {
        Self { group, index }
    }
}

impl Display for ToolKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.group, self.index)
    }
}

impl FromStr for ToolKey {
    type Err = KeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (group, index) = split_key(s)?;
        Ok(Self::new(group, index))
    }
}

/// Split on the last `.` so group ids may themselves contain dots
fn split_key(s: &str) -> Result<(GroupId, usize), KeyParseError> {
    let (group, index) = s
        .rsplit_once('.')
        .ok_or_else(|| KeyParseError::MissingSeparator(s.to_string()))?;
    if group.is_empty() {
        return Err(KeyParseError::EmptyGroup(s.to_string()));
    }
    let index = index
        .parse::<usize>()
        .map_err(|_| KeyParseError::InvalidIndex(s.to_string()))?;
    Ok((GroupId::new(group), index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn question_key_display_and_parse() {
        let key = GroupId::new("flow").question(2);
        assert_eq!(key.to_string(), "flow.2");
        assert_eq!(QuestionKey::from_str("flow.2").unwrap(), key);
    }

    #[test]
    fn dotted_group_ids_split_on_last_dot() {
        let key = ToolKey::from_str("plant.a.7").unwrap();
        assert_eq!(key.group.as_str(), "plant.a");
        assert_eq!(key.index, 7);
    }

    #[test]
    fn malformed_keys_are_rejected() {
        assert_eq!(
            QuestionKey::from_str("flow"),
            Err(KeyParseError::MissingSeparator("flow".to_string()))
        );
        assert_eq!(
            QuestionKey::from_str(".3"),
            Err(KeyParseError::EmptyGroup(".3".to_string()))
        );
        assert_eq!(
            QuestionKey::from_str("flow.-1"),
            Err(KeyParseError::InvalidIndex("flow.-1".to_string()))
        );
    }

    proptest! {
        #[test]
        fn prop_key_text_is_stable(group in "[a-z][a-z_]{0,12}", index in 0..500usize) {
            let key = GroupId::new(group).tool(index);
            let parsed = ToolKey::from_str(&key.to_string()).unwrap();
            prop_assert_eq!(parsed, key);
        }
    }
}
