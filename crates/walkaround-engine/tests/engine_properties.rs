//! Property tests for scoring and debrief synthesis.
//!
//! These exercise the engine over arbitrary answer sets on the compiled-in
//! questionnaire and on generated grids, checking the guarantees the debrief
//! and reports rely on:
//! - scores stay within 0..=100 and are absent exactly when nothing is scorable;
//! - `na` never moves a score;
//! - the gap list never exceeds its cap;
//! - auto-fill is idempotent and never touches user-authored text.

use proptest::prelude::*;
use walkaround_assessment::{Assessment, DebriefField, ResponseValue};
use walkaround_engine::{group_score, DebriefSynthesizer, ScoreCard};
use walkaround_schema::Schema;
use walkaround_test_utils::{answer, grid_schema, single_group_schema};

fn response() -> impl Strategy<Value = ResponseValue> {
    prop_oneof![
        Just(ResponseValue::Yes),
        Just(ResponseValue::Partial),
        Just(ResponseValue::No),
        Just(ResponseValue::Na),
        Just(ResponseValue::Unset),
    ]
}

/// Builtin assessment with every question answered from `responses` (cycled)
fn builtin_answered(responses: &[ResponseValue], tools: &[bool]) -> (Schema, Assessment) {
    let schema = Schema::builtin();
    let mut assessment = Assessment::empty(&schema);
    for (i, key) in schema.question_keys().enumerate() {
        let value = responses[i % responses.len()];
        assessment.set_response(&key, value).unwrap();
    }
    for (i, key) in schema.tool_keys().enumerate() {
        assessment.set_tool(&key, tools[i % tools.len()]).unwrap();
    }
    (schema, assessment)
}

proptest! {
    #[test]
    fn prop_group_score_in_range_and_none_iff_unscorable(
        responses in proptest::collection::vec(response(), 0..12)
    ) {
        let schema = single_group_schema(responses.len(), 0);
        let mut assessment = Assessment::empty(&schema);
        answer(&mut assessment, "g", &responses);

        let score = group_score(&assessment, &schema.sections()[0].groups[0]);
        let scorable = responses
            .iter()
            .any(|r| matches!(r, ResponseValue::Yes | ResponseValue::Partial | ResponseValue::No));

        prop_assert_eq!(score.is_some(), scorable);
        if let Some(p) = score {
            prop_assert!(p.value() <= 100);
        }
    }

    #[test]
    fn prop_na_does_not_change_score(
        responses in proptest::collection::vec(response(), 1..10),
        extra_na in 1..5usize
    ) {
        let base_schema = single_group_schema(responses.len(), 0);
        let mut base = Assessment::empty(&base_schema);
        answer(&mut base, "g", &responses);

        let mut padded = responses.clone();
        padded.extend(std::iter::repeat(ResponseValue::Na).take(extra_na));
        let padded_schema = single_group_schema(padded.len(), 0);
        let mut with_na = Assessment::empty(&padded_schema);
        answer(&mut with_na, "g", &padded);

        prop_assert_eq!(
            group_score(&base, &base_schema.sections()[0].groups[0]),
            group_score(&with_na, &padded_schema.sections()[0].groups[0])
        );
    }

    #[test]
    fn prop_gap_list_never_exceeds_five(
        responses in proptest::collection::vec(response(), 1..8),
        tools in proptest::collection::vec(any::<bool>(), 1..8)
    ) {
        let (schema, assessment) = builtin_answered(&responses, &tools);
        let synthesizer = DebriefSynthesizer::default();

        let analysis = synthesizer.analyze(&schema, &assessment);
        prop_assert!(analysis.top_gaps.len() <= 5);

        let outcome = synthesizer.autofill(&schema, &assessment);
        prop_assert!(outcome.debrief.top_gaps.len() == 5);
    }

    #[test]
    fn prop_autofill_is_idempotent(
        responses in proptest::collection::vec(response(), 1..8),
        tools in proptest::collection::vec(any::<bool>(), 1..8)
    ) {
        let (schema, mut assessment) = builtin_answered(&responses, &tools);
        let synthesizer = DebriefSynthesizer::default();

        let first = synthesizer.autofill(&schema, &assessment);
        assessment.debrief = first.debrief.clone();
        let second = synthesizer.autofill(&schema, &assessment);

        prop_assert_eq!(second.debrief, first.debrief);
        prop_assert!(second.filled.is_empty());
    }

    #[test]
    fn prop_user_win_survives_autofill(
        win in "[A-Za-z][A-Za-z ]{0,30}",
        responses in proptest::collection::vec(response(), 1..8)
    ) {
        let (schema, mut assessment) = builtin_answered(&responses, &[true, false]);
        assessment.set_debrief_field(DebriefField::TopWin(0), win.clone()).unwrap();

        let outcome = DebriefSynthesizer::default().autofill(&schema, &assessment);
        prop_assert_eq!(&outcome.debrief.top_wins[0], &win);
    }

    #[test]
    fn prop_section_score_between_group_extremes(
        sections in 1..4usize,
        groups in 1..5usize,
        responses in proptest::collection::vec(response(), 1..20)
    ) {
        let schema = grid_schema(sections, groups, 3);
        let mut assessment = Assessment::empty(&schema);
        for (i, key) in schema.question_keys().enumerate() {
            assessment.set_response(&key, responses[i % responses.len()]).unwrap();
        }

        let card = ScoreCard::compute(&schema, &assessment);
        for section in schema.sections() {
            let scores: Vec<u8> = section
                .groups
                .iter()
                .filter_map(|g| card.group(&g.id).map(|p| p.value()))
                .collect();
            match card.section(&section.id) {
                None => prop_assert!(scores.is_empty()),
                Some(p) => {
                    prop_assert!(p.value() >= *scores.iter().min().unwrap());
                    prop_assert!(p.value() <= *scores.iter().max().unwrap());
                }
            }
        }
    }
}

#[test]
fn documented_examples_hold() {
    use ResponseValue::{Na, No, Yes};

    let schema = single_group_schema(3, 0);
    let group = &schema.sections()[0].groups[0];

    let mut a = Assessment::empty(&schema);
    answer(&mut a, "g", &[Yes, No, Na]);
    assert_eq!(group_score(&a, group).map(|p| p.value()), Some(50));

    let mut b = Assessment::empty(&schema);
    answer(&mut b, "g", &[Yes, Yes, No]);
    assert_eq!(group_score(&b, group).map(|p| p.value()), Some(67));

    let mut c = Assessment::empty(&schema);
    answer(&mut c, "g", &[Na, Na, Na]);
    assert_eq!(group_score(&c, group), None);
}

#[test]
fn builtin_weakest_group_drives_headline() {
    use ResponseValue::{No, Yes};

    let schema = Schema::builtin();
    let mut assessment = Assessment::empty(&schema);
    answer(&mut assessment, "flow", &[Yes, Yes, Yes]);
    answer(&mut assessment, "boards", &[No, Yes, No]);

    let outcome = DebriefSynthesizer::default().autofill(&schema, &assessment);
    assert_eq!(
        outcome.debrief.headline,
        "Primary constraint appears to be: Performance Boards."
    );
    assert_eq!(
        outcome.debrief.top_gaps[0],
        "SECTION 2 — VISUAL MANAGEMENT — B. Performance Boards (33%)"
    );
    assert_eq!(
        outcome.debrief.top_gaps[1],
        "SECTION 1 — CONTROL & STABILITY — A. Flow & Pace (100%)"
    );
    assert_eq!(
        outcome.debrief.top_gaps[2],
        "B. Performance Boards: Are hour-by-hour or shift boards up to date?"
    );
    assert_eq!(
        outcome.debrief.top_gaps[3],
        "B. Performance Boards: Are abnormalities highlighted in a different colour?"
    );
    assert_eq!(outcome.debrief.top_gaps[4], "");
}
