//! Group, section and overall scores
//!
//! # Rounding
//! Percentages round to nearest with ties away from zero. Group scores are
//! computed over half-points (`yes = 2`, `partial = 1`, `no = 0`) in integer
//! arithmetic, so `x.5` boundaries are exact: three halves of four answers
//! (37.5%) is always 38, never 37 through float drift.
//!
//! `na` and unanswered questions are excluded from numerator and
//! denominator alike. A group with nothing scorable has no score, which is
//! different from 0%.

use serde::Serialize;
use std::fmt::{self, Display, Formatter};
use walkaround_assessment::{Assessment, ResponseValue};
use walkaround_schema::{Group, GroupId, Schema, Section, SectionId};

/// Integer percentage in `0..=100`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Percent(u8);

impl Percent {
    /// Clamp into range
    #[inline]
    #[must_use]
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// Numeric value
    #[inline]
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }
}

impl Display for Percent {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Score weight of an answer: `yes → 1`, `partial → 0.5`, `no → 0`, otherwise none
#[inline]
#[must_use]
pub fn score_value(value: ResponseValue) -> Option<f64> {
    half_points(value).map(|h| f64::from(h) / 2.0)
}

fn half_points(value: ResponseValue) -> Option<u32> {
    match value {
        ResponseValue::Yes => Some(2),
        ResponseValue::Partial => Some(1),
        ResponseValue::No => Some(0),
        ResponseValue::Na | ResponseValue::Unset => None,
    }
}

/// `round(numerator / denominator)`, ties away from zero, for non-negative inputs
fn round_ratio(numerator: u64, denominator: u64) -> Percent {
    debug_assert!(denominator > 0);
    let rounded = (2 * numerator + denominator) / (2 * denominator);
    Percent::new(u8::try_from(rounded).unwrap_or(100))
}

/// Mean of scorable answers as a percentage; `None` when nothing is scorable
#[must_use]
pub fn group_score(assessment: &Assessment, group: &Group) -> Option<Percent> {
    let (sum, count) = group
        .question_keys()
        .filter_map(|key| half_points(assessment.response(&key)))
        .fold((0u64, 0u64), |(sum, count), h| (sum + u64::from(h), count + 1));

    (count > 0).then(|| round_ratio(sum * 100, count * 2))
}

/// Mean of the non-null percentages, same rounding rule
#[must_use]
pub fn mean_percent<I>(scores: I) -> Option<Percent>
where
    I: IntoIterator<Item = Option<Percent>>,
{
    let (sum, count) = scores
        .into_iter()
        .flatten()
        .fold((0u64, 0u64), |(sum, count), p| (sum + u64::from(p.value()), count + 1));

    (count > 0).then(|| round_ratio(sum, count))
}

/// Mean of the section's non-null group scores
#[must_use]
pub fn section_score(assessment: &Assessment, section: &Section) -> Option<Percent> {
    mean_percent(section.groups.iter().map(|g| group_score(assessment, g)))
}

/// Score of one group, tagged with its position in the schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupScore {
    /// Owning section
    pub section: SectionId,
    /// Group
    pub group: GroupId,
    /// Percentage, if anything was scorable
    pub score: Option<Percent>,
}

/// Score of one section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionScore {
    /// Section
    pub section: SectionId,
    /// Percentage, if any group was scorable
    pub score: Option<Percent>,
}

/// Every score of an assessment, in schema order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreCard {
    /// Group scores
    pub groups: Vec<GroupScore>,
    /// Section scores
    pub sections: Vec<SectionScore>,
    /// Mean of non-null section scores
    pub overall: Option<Percent>,
}

impl ScoreCard {
    /// Score everything in one pass
    #[must_use]
    pub fn compute(schema: &Schema, assessment: &Assessment) -> Self {
        let mut groups = Vec::with_capacity(schema.group_count());
        let mut sections = Vec::with_capacity(schema.sections().len());

        for section in schema.sections() {
            let scores: Vec<Option<Percent>> = section
                .groups
                .iter()
                .map(|g| group_score(assessment, g))
                .collect();

            groups.extend(section.groups.iter().zip(&scores).map(|(g, score)| GroupScore {
                section: section.id.clone(),
                group: g.id.clone(),
                score: *score,
            }));
            sections.push(SectionScore {
                section: section.id.clone(),
                score: mean_percent(scores),
            });
        }

        let overall = mean_percent(sections.iter().map(|s| s.score));
        tracing::debug!(
            scored_groups = groups.iter().filter(|g| g.score.is_some()).count(),
            overall = ?overall.map(Percent::value),
            "score card computed"
        );

        Self {
            groups,
            sections,
            overall,
        }
    }

    /// Score of a group
    #[must_use]
    pub fn group(&self, id: &GroupId) -> Option<Percent> {
        self.groups
            .iter()
            .find(|g| &g.group == id)
            .and_then(|g| g.score)
    }

    /// Score of a section
    #[must_use]
    pub fn section(&self, id: &SectionId) -> Option<Percent> {
        self.sections
            .iter()
            .find(|s| &s.section == id)
            .and_then(|s| s.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use walkaround_assessment::ResponseValue::{Na, No, Partial, Unset, Yes};
    use walkaround_test_utils::{answered, single_group_schema};

    fn score_of(responses: &[ResponseValue]) -> Option<u8> {
        let schema = single_group_schema(responses.len(), 0);
        let assessment = answered(&schema, "g", responses);
        group_score(&assessment, &schema.sections()[0].groups[0]).map(Percent::value)
    }

    #[test]
    fn score_values() {
        assert_eq!(score_value(Yes), Some(1.0));
        assert_eq!(score_value(Partial), Some(0.5));
        assert_eq!(score_value(No), Some(0.0));
        assert_eq!(score_value(Na), None);
        assert_eq!(score_value(Unset), None);
    }

    #[test]
    fn nothing_scorable_is_none_not_zero() {
        assert_eq!(score_of(&[Na, Unset, Na]), None);
        assert_eq!(score_of(&[]), None);
        assert_eq!(score_of(&[No, Na]), Some(0));
    }

    #[test]
    fn na_is_excluded_from_denominator() {
        assert_eq!(score_of(&[Yes, No, Na]), Some(50));
    }

    #[test]
    fn thirds_round_to_nearest() {
        assert_eq!(score_of(&[Yes, Yes, No]), Some(67));
        assert_eq!(score_of(&[Yes, No, No]), Some(33));
    }

    #[test]
    fn half_percent_ties_round_away_from_zero() {
        // 1.5 / 4 = 37.5%
        assert_eq!(score_of(&[Yes, Partial, No, No]), Some(38));
        // 2.5 / 4 = 62.5%
        assert_eq!(score_of(&[Yes, Yes, Partial, No]), Some(63));
        // 3.5 / 4 = 87.5%
        assert_eq!(score_of(&[Yes, Yes, Yes, Partial]), Some(88));
        // 3.5 / 8 = 43.75%
        assert_eq!(score_of(&[Yes, Yes, Yes, Partial, No, No, No, No]), Some(44));
        // 0.5 / 8 = 6.25%
        assert_eq!(score_of(&[Partial, No, No, No, No, No, No, No]), Some(6));
    }

    #[test]
    fn section_mean_uses_same_rounding() {
        let p = |v| Some(Percent::new(v));
        assert_eq!(mean_percent([p(67), p(68)]), p(68));
        assert_eq!(mean_percent([p(66), p(67)]), p(67));
        assert_eq!(mean_percent([p(50), None, p(0)]), p(25));
        assert_eq!(mean_percent([None, None]), None);
    }

    #[test]
    fn percent_is_clamped_and_displayed() {
        assert_eq!(Percent::new(150).value(), 100);
        assert_eq!(Percent::new(42).to_string(), "42%");
    }
}
