//! Rendering tests over complete assessments.
//!
//! Documents must be deterministic, self-contained, and must never let user
//! text open or close markup.

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use walkaround_assessment::{Assessment, DebriefField, ResponseValue};
use walkaround_engine::DebriefSynthesizer;
use walkaround_report::{email_draft, DocumentKind, ReportRenderer};
use walkaround_schema::{GroupId, Schema};
use walkaround_test_utils::{answer_all, check_tools, grid_schema};

const HOSTILE: &str = r#"<b>hi</b>&"'"#;
const HOSTILE_ESCAPED: &str = "&lt;b&gt;hi&lt;/b&gt;&amp;&quot;&#39;";

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
}

fn populated() -> (Schema, Assessment) {
    let schema = Schema::builtin();
    let mut assessment = Assessment::empty(&schema);
    assessment.meta.customer = "Acme".to_string();
    assessment.meta.site = "Plant 7".to_string();
    assessment.meta.date = "2026-03-04".to_string();
    answer_all(&schema, &mut assessment, "flow", ResponseValue::No);
    answer_all(&schema, &mut assessment, "boards", ResponseValue::Yes);
    answer_all(&schema, &mut assessment, "gemba", ResponseValue::Partial);
    check_tools(&mut assessment, "flow", &[0, 2]);
    check_tools(&mut assessment, "wastes", &[0]);
    assessment.general_notes = "Line 2 idle\nwaiting on material".to_string();
    (schema, assessment)
}

#[test]
fn rendering_is_deterministic() {
    let (schema, assessment) = populated();
    let renderer = ReportRenderer::default();

    for kind in DocumentKind::ALL {
        let first = renderer.render(kind, &schema, &assessment, today());
        let second = renderer.render(kind, &schema, &assessment, today());
        assert_eq!(first, second);
    }
}

#[test]
fn user_text_is_escaped_everywhere() {
    let schema = Schema::builtin();
    let mut assessment = Assessment::empty(&schema);
    let flow = GroupId::new("flow");
    assessment.meta.customer = HOSTILE.to_string();
    assessment.meta.scope = HOSTILE.to_string();
    assessment.set_question_note(&flow.question(0), HOSTILE).unwrap();
    assessment.set_group_note(&flow, HOSTILE).unwrap();
    assessment.general_notes = HOSTILE.to_string();
    assessment.evidence_notes = HOSTILE.to_string();
    assessment.set_debrief_field(DebriefField::Headline, HOSTILE).unwrap();
    assessment.set_debrief_field(DebriefField::TopWin(0), HOSTILE).unwrap();
    assessment.set_debrief_field(DebriefField::Recommendation(2), HOSTILE).unwrap();

    let renderer = ReportRenderer::default();
    let diagnostic = renderer.render_diagnostic(&schema, &assessment);
    let debrief = renderer.render_debrief(&schema, &assessment, None);

    for doc in [&diagnostic, &debrief] {
        assert!(!doc.contains("<b>"));
        assert!(doc.contains(HOSTILE_ESCAPED));
    }
    assert_eq!(diagnostic.matches(HOSTILE_ESCAPED).count(), 6);
    assert_eq!(debrief.matches(HOSTILE_ESCAPED).count(), 4);
}

#[test]
fn diagnostic_lists_every_question_and_tool() {
    let (schema, assessment) = populated();
    let doc = ReportRenderer::default().render_diagnostic(&schema, &assessment);

    assert_eq!(doc.matches("<h3>").count(), schema.group_count());
    assert_eq!(
        doc.matches("<li>☑ ").count() + doc.matches("<li>☐ ").count(),
        schema.tool_count()
    );
    assert_eq!(doc.matches("<li>☑ ").count(), 3);
    assert!(doc.contains("<div class=\"note\">Line 2 idle\nwaiting on material</div>"));
    assert!(doc.contains("<td>Acme</td>"));
}

#[test]
fn debrief_shows_section_averages() {
    let (schema, assessment) = populated();
    let doc = ReportRenderer::default().render_debrief(&schema, &assessment, None);

    for section in schema.sections() {
        assert!(doc.contains(&format!("<td>{}</td>", section.title.replace('&', "&amp;"))));
    }
    // control: flow 0%, the rest unscored
    assert!(doc.contains("<td>SECTION 1 — CONTROL &amp; STABILITY</td><td><span class=\"badge critical\">0%</span></td>"));
    // visual: boards 100%
    assert!(doc.contains("<td>SECTION 2 — VISUAL MANAGEMENT</td><td><span class=\"badge good\">100%</span></td>"));
    // planning: nothing answered
    assert!(doc.contains("<td>SECTION 6 — PLANNING &amp; MATERIAL FLOW</td><td><span class=\"badge neutral\">—</span></td>"));
}

#[test]
fn autofilled_draft_previews_and_feeds_email() {
    let (schema, assessment) = populated();
    let outcome = DebriefSynthesizer::default().autofill(&schema, &assessment);
    let debrief = ReportRenderer::default().render_debrief(&schema, &assessment, Some(&outcome.debrief));

    assert!(debrief.contains("Primary constraint appears to be: Flow &amp; Pace."));
    assert!(debrief.contains("<li>SECTION 1 — CONTROL &amp; STABILITY — A. Flow &amp; Pace (0%)</li>"));

    let email = email_draft(&assessment.meta, &outcome.debrief);
    assert_eq!(email.subject, "Lean Walkaround Debrief — Plant 7 — 2026-03-04");
    assert!(email.body.contains("Headline: Primary constraint appears to be: Flow & Pace."));
    assert!(email.body.contains("\n- SECTION 1 — CONTROL & STABILITY — A. Flow & Pace (0%)\n"));
}

#[test]
fn grid_schema_renders_without_builtin_content() {
    let schema = grid_schema(2, 3, 2);
    let assessment = Assessment::empty(&schema);
    let doc = ReportRenderer::default().render_diagnostic(&schema, &assessment);

    assert!(doc.contains("<title>Grid Walk</title>"));
    assert_eq!(doc.matches("<section>").count(), 2);
    assert_eq!(doc.matches("<h3>").count(), 6);
}

proptest! {
    #[test]
    fn prop_notes_never_inject_markup(note in ".{0,40}") {
        let schema = Schema::builtin();
        let mut assessment = Assessment::empty(&schema);
        assessment.set_group_note(&GroupId::new("flow"), note.clone()).unwrap();
        assessment.set_debrief_field(DebriefField::Risk(0), note.clone()).unwrap();

        let renderer = ReportRenderer::default();
        let baseline = Assessment::empty(&schema);
        for (doc, empty) in [
            (
                renderer.render_diagnostic(&schema, &assessment),
                renderer.render_diagnostic(&schema, &baseline),
            ),
            (
                renderer.render_debrief(&schema, &assessment, None),
                renderer.render_debrief(&schema, &baseline, None),
            ),
        ] {
            // user text adds no tags of its own
            prop_assert!(doc.matches('<').count() <= empty.matches('<').count() + 8);
            prop_assert_eq!(doc.matches("<script").count(), 0);
        }
    }
}
