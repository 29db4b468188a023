//! Executive debrief fields
//!
//! Every field is user-overridable. An empty (or whitespace-only) string
//! means the user has not set it, which is what auto-fill keys off.

use crate::error::StoreError;

/// Number of win slots
pub const TOP_WINS: usize = 3;
/// Number of gap slots
pub const TOP_GAPS: usize = 5;
/// Number of risk slots
pub const RISKS: usize = 3;
/// Number of recommendation slots
pub const RECOMMENDATIONS: usize = 4;

/// Short executive-facing synthesis
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Debrief {
    /// One-line summary
    pub headline: String,
    /// What is working
    pub top_wins: [String; TOP_WINS],
    /// Weakest areas
    pub top_gaps: [String; TOP_GAPS],
    /// Exposure if nothing changes
    pub risks: [String; RISKS],
    /// Ordered improvement sequence
    pub recommendations: [String; RECOMMENDATIONS],
    /// Suggested follow-up engagement
    pub proposed_next_step: String,
}

/// The four fixed-length lists of a debrief
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DebriefList {
    /// `top_wins`
    TopWins,
    /// `top_gaps`
    TopGaps,
    /// `risks`
    Risks,
    /// `recommendations`
    Recommendations,
}

impl DebriefList {
    /// Field name used in records and errors
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::TopWins => "top_wins",
            Self::TopGaps => "top_gaps",
            Self::Risks => "risks",
            Self::Recommendations => "recommendations",
        }
    }
}

/// Names one settable debrief field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DebriefField {
    /// Headline
    Headline,
    /// Win slot
    TopWin(usize),
    /// Gap slot
    TopGap(usize),
    /// Risk slot
    Risk(usize),
    /// Recommendation slot
    Recommendation(usize),
    /// Next step
    ProposedNextStep,
}

impl Debrief {
    /// Borrow a list
    #[must_use]
    pub fn list(&self, list: DebriefList) -> &[String] {
        match list {
            DebriefList::TopWins => &self.top_wins,
            DebriefList::TopGaps => &self.top_gaps,
            DebriefList::Risks => &self.risks,
            DebriefList::Recommendations => &self.recommendations,
        }
    }

    fn list_mut(&mut self, list: DebriefList) -> &mut [String] {
        match list {
            DebriefList::TopWins => &mut self.top_wins,
            DebriefList::TopGaps => &mut self.top_gaps,
            DebriefList::Risks => &mut self.risks,
            DebriefList::Recommendations => &mut self.recommendations,
        }
    }

    /// True when any slot of the list holds non-blank text
    #[must_use]
    pub fn has_user_text(&self, list: DebriefList) -> bool {
        self.list(list).iter().any(|s| !is_blank(s))
    }

    /// Non-blank entries of a list, in slot order
    pub fn filled(&self, list: DebriefList) -> impl Iterator<Item = &str> {
        self.list(list)
            .iter()
            .map(String::as_str)
            .filter(|s| !is_blank(s))
    }

    /// Overwrite a whole list from `values`, padding with empty strings
    ///
    /// Extra values beyond the list length are dropped.
    pub fn fill_list<I, S>(&mut self, list: DebriefList, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let slots = self.list_mut(list);
        let mut values = values.into_iter();
        for slot in slots.iter_mut() {
            *slot = values.next().map(Into::into).unwrap_or_default();
        }
    }

    /// Replace one field
    ///
    /// # Errors
    /// Returns error if a list slot index is out of range
    pub fn set(&mut self, field: DebriefField, value: impl Into<String>) -> Result<(), StoreError> {
        let (list, index) = match field {
            DebriefField::Headline => {
                self.headline = value.into();
                return Ok(());
            }
            DebriefField::ProposedNextStep => {
                self.proposed_next_step = value.into();
                return Ok(());
            }
            DebriefField::TopWin(i) => (DebriefList::TopWins, i),
            DebriefField::TopGap(i) => (DebriefList::TopGaps, i),
            DebriefField::Risk(i) => (DebriefList::Risks, i),
            DebriefField::Recommendation(i) => (DebriefList::Recommendations, i),
        };

        let slots = self.list_mut(list);
        let len = slots.len();
        let slot = slots.get_mut(index).ok_or(StoreError::DebriefSlot {
            field: list.name(),
            index,
            len,
        })?;
        *slot = value.into();
        Ok(())
    }
}

/// Empty or whitespace-only
#[inline]
#[must_use]
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
