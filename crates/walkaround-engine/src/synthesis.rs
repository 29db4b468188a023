//! Debrief synthesis
//!
//! Derives a draft executive debrief from the answers:
//!
//! 1. Rank every scored group ascending (weakest first, ties in schema order).
//! 2. Collect every `no`-answered question in schema order.
//! 3. Gaps: the weakest groups first, then `no` questions, capped.
//! 4. Headline: names the weakest group, enumeration label stripped.
//! 5. Risks: names of the checked items in the wastes checklist.
//! 6. Recommendations and next step: fixed defaults.
//!
//! Wins are never synthesized. Merging into a [`Debrief`] only writes fields
//! the user left blank, so repeating an auto-fill changes nothing.

use crate::config::SynthesisConfig;
use crate::prefix::strip_enumeration_prefix;
use crate::scoring::{Percent, ScoreCard};
use walkaround_assessment::{is_blank, Assessment, Debrief, DebriefList, ResponseValue};
use walkaround_schema::{GroupId, QuestionKey, Schema};

/// A scored group in weakest-first order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedGroup {
    /// Group id
    pub group: GroupId,
    /// Owning section title
    pub section_title: String,
    /// Group title as written in the schema
    pub group_title: String,
    /// Group score
    pub score: Percent,
}

/// A question answered `no`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoAnswer {
    /// Question position
    pub key: QuestionKey,
    /// Owning group title
    pub group_title: String,
    /// Question text
    pub question: String,
}

/// Everything the heuristic derived, before merging with user text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebriefAnalysis {
    /// Scored groups, weakest first
    pub ranked_groups: Vec<RankedGroup>,
    /// `no` answers in schema order
    pub no_answers: Vec<NoAnswer>,
    /// Derived gap lines, group entries first
    pub top_gaps: Vec<String>,
    /// Derived headline; `None` when no group has a score
    pub headline: Option<String>,
    /// Names of the checked wastes
    pub wastes: Vec<String>,
}

impl DebriefAnalysis {
    /// Single summary line for the risks field
    #[must_use]
    pub fn waste_summary(&self) -> Option<String> {
        (!self.wastes.is_empty()).then(|| format!("Observed wastes: {}.", self.wastes.join(", ")))
    }
}

/// Debrief field written by auto-fill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilledField {
    /// Headline
    Headline,
    /// Gap list
    TopGaps,
    /// Risk list
    Risks,
    /// Recommendation list
    Recommendations,
    /// Next step
    ProposedNextStep,
}

impl FilledField {
    /// Field name as written in records
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Headline => "headline",
            Self::TopGaps => "top_gaps",
            Self::Risks => "risks",
            Self::Recommendations => "recommendations",
            Self::ProposedNextStep => "proposed_next_step",
        }
    }
}

/// Result of an auto-fill
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutofillOutcome {
    /// Merged debrief
    pub debrief: Debrief,
    /// Fields that were blank and got filled
    pub filled: Vec<FilledField>,
}

/// Debrief heuristic with its configuration
#[derive(Debug, Clone, Default)]
pub struct DebriefSynthesizer {
    config: SynthesisConfig,
}

impl DebriefSynthesizer {
    /// Create synthesizer
    #[inline]
    #[must_use]
    pub fn new(config: SynthesisConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &SynthesisConfig {
        &self.config
    }

    /// Derive the draft without touching any user text
    #[must_use]
    pub fn analyze(&self, schema: &Schema, assessment: &Assessment) -> DebriefAnalysis {
        let card = ScoreCard::compute(schema, assessment);

        let mut ranked_groups: Vec<RankedGroup> = schema
            .groups()
            .zip(&card.groups)
            .filter_map(|((section, group), scored)| {
                scored.score.map(|score| RankedGroup {
                    group: group.id.clone(),
                    section_title: section.title.clone(),
                    group_title: group.title.clone(),
                    score,
                })
            })
            .collect();
        // stable: equal scores keep schema order
        ranked_groups.sort_by_key(|g| g.score);

        let no_answers: Vec<NoAnswer> = schema
            .groups()
            .flat_map(|(_, group)| {
                group
                    .question_keys()
                    .zip(&group.questions)
                    .filter(|(key, _)| assessment.response(key) == ResponseValue::No)
                    .map(|(key, question)| NoAnswer {
                        key,
                        group_title: group.title.clone(),
                        question: question.clone(),
                    })
                    .collect::<Vec<_>>()
            })
            .collect();

        let top_gaps = self.gap_lines(&ranked_groups, &no_answers);

        let headline = ranked_groups.first().map(|weakest| {
            format!(
                "Primary constraint appears to be: {}.",
                strip_enumeration_prefix(&weakest.group_title)
            )
        });

        let wastes = self.checked_wastes(schema, assessment);

        tracing::debug!(
            ranked = ranked_groups.len(),
            no_answers = no_answers.len(),
            gaps = top_gaps.len(),
            wastes = wastes.len(),
            "debrief analysed"
        );

        DebriefAnalysis {
            ranked_groups,
            no_answers,
            top_gaps,
            headline,
            wastes,
        }
    }

    fn gap_lines(&self, ranked: &[RankedGroup], no_answers: &[NoAnswer]) -> Vec<String> {
        let group_gaps = ranked.iter().take(self.config.max_group_gaps).map(|g| {
            format!(
                "{} — {} ({}%)",
                g.section_title,
                g.group_title,
                g.score.value()
            )
        });
        let question_gaps = no_answers
            .iter()
            .take(self.config.max_question_gaps)
            .map(|n| format!("{}: {}", n.group_title, n.question));

        group_gaps
            .chain(question_gaps)
            .take(self.config.max_gaps)
            .collect()
    }

    fn checked_wastes(&self, schema: &Schema, assessment: &Assessment) -> Vec<String> {
        let Some(group) = schema.group(&self.config.wastes_group) else {
            return Vec::new();
        };
        group
            .tool_keys()
            .zip(&group.tools)
            .filter(|(key, _)| assessment.tool(key))
            .map(|(_, label)| waste_name(label, &self.config.waste_delimiter).to_string())
            .collect()
    }

    /// Merge the draft into the current debrief, filling blank fields only
    #[must_use]
    pub fn autofill(&self, schema: &Schema, assessment: &Assessment) -> AutofillOutcome {
        let analysis = self.analyze(schema, assessment);
        let mut debrief = assessment.debrief.clone();
        let mut filled = Vec::new();

        if is_blank(&debrief.headline) {
            if let Some(headline) = &analysis.headline {
                debrief.headline.clone_from(headline);
                filled.push(FilledField::Headline);
            }
        }

        if !debrief.has_user_text(DebriefList::TopGaps) && !analysis.top_gaps.is_empty() {
            debrief.fill_list(DebriefList::TopGaps, analysis.top_gaps.iter().cloned());
            filled.push(FilledField::TopGaps);
        }

        if !debrief.has_user_text(DebriefList::Risks) {
            if let Some(summary) = analysis.waste_summary() {
                debrief.fill_list(DebriefList::Risks, [summary]);
                filled.push(FilledField::Risks);
            }
        }

        if !debrief.has_user_text(DebriefList::Recommendations)
            && !self.config.recommendations.is_empty()
        {
            debrief.fill_list(
                DebriefList::Recommendations,
                self.config.recommendations.iter().cloned(),
            );
            filled.push(FilledField::Recommendations);
        }

        if is_blank(&debrief.proposed_next_step) && !is_blank(&self.config.next_step) {
            debrief.proposed_next_step.clone_from(&self.config.next_step);
            filled.push(FilledField::ProposedNextStep);
        }

        tracing::info!(filled = filled.len(), "debrief auto-filled");
        AutofillOutcome { debrief, filled }
    }
}

/// Text before the first `delimiter`, trimmed; the whole label if absent
#[must_use]
pub fn waste_name<'a>(label: &'a str, delimiter: &str) -> &'a str {
    label
        .split_once(delimiter)
        .map_or(label, |(name, _)| name)
        .trim()
}
