//! Error types for the assessment store

use walkaround_schema::{GroupId, QuestionKey, ToolKey};

/// Errors from field-level setters and record serialization
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Group id does not exist in the schema the assessment was built from
    #[error("unknown group: '{0}'")]
    UnknownGroup(GroupId),

    /// Question index past the end of its group
    #[error("unknown question: '{0}'")]
    UnknownQuestion(QuestionKey),

    /// Tool index past the end of its group
    #[error("unknown tool: '{0}'")]
    UnknownTool(ToolKey),

    /// Debrief list slot past the fixed list length
    #[error("debrief slot {index} out of range for {field} (len {len})")]
    DebriefSlot {
        field: &'static str,
        index: usize,
        len: usize,
    },

    /// Record could not be serialized or parsed
    #[error("record serialization failed: {0}")]
    Record(#[from] serde_json::Error),
}
