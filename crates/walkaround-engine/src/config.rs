//! Debrief synthesis configuration

use serde::{Deserialize, Serialize};
use walkaround_schema::{GroupId, WASTES_GROUP_ID};

/// Default improvement sequence used when the user wrote no recommendations
pub const DEFAULT_RECOMMENDATIONS: [&str; 4] = [
    "Stabilize flow: protect the constraint and cap work-in-process so output becomes predictable.",
    "Set standards: document the current best method and train every operator to it.",
    "Make gaps visible: post hour-by-hour performance and flag every abnormality at the point of work.",
    "Close gaps with disciplined problem solving: run daily tiered meetings and root-cause the top recurring losses.",
];

/// Default suggested engagement used when the next step is blank
pub const DEFAULT_NEXT_STEP: &str = "Schedule a two-day follow-up workshop with site leadership to map the value stream and agree a 90-day improvement plan.";

/// Tunables of the debrief heuristic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthesisConfig {
    /// Lowest-scoring groups quoted as gaps
    pub max_group_gaps: usize,
    /// `no`-answered questions quoted as gaps
    pub max_question_gaps: usize,
    /// Cap on the combined gap list
    pub max_gaps: usize,
    /// Checklist group whose checked items name observed wastes
    pub wastes_group: GroupId,
    /// Separator between a waste name and its description
    pub waste_delimiter: String,
    /// Recommendations used when the user wrote none
    pub recommendations: Vec<String>,
    /// Next step used when the user wrote none
    pub next_step: String,
}

impl SynthesisConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With gap limits
    #[inline]
    #[must_use]
    pub fn with_gap_limits(mut self, groups: usize, questions: usize, total: usize) -> Self {
        self.max_group_gaps = groups;
        self.max_question_gaps = questions;
        self.max_gaps = total;
        self
    }

    /// With a different wastes checklist group
    #[inline]
    #[must_use]
    pub fn with_wastes_group(mut self, group: GroupId) -> Self {
        self.wastes_group = group;
        self
    }

    /// With different default recommendations
    #[inline]
    #[must_use]
    pub fn with_recommendations(mut self, recommendations: Vec<String>) -> Self {
        self.recommendations = recommendations;
        self
    }

    /// With a different default next step
    #[inline]
    #[must_use]
    pub fn with_next_step(mut self, next_step: impl Into<String>) -> Self {
        self.next_step = next_step.into();
        self
    }
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            max_group_gaps: 4,
            max_question_gaps: 2,
            max_gaps: 5,
            wastes_group: GroupId::new(WASTES_GROUP_ID),
            waste_delimiter: " — ".to_string(),
            recommendations: DEFAULT_RECOMMENDATIONS.iter().map(|s| (*s).to_string()).collect(),
            next_step: DEFAULT_NEXT_STEP.to_string(),
        }
    }
}
