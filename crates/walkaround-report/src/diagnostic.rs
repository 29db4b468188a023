//! Full diagnostic document
//!
//! Every section, group, question, response, note and tool checkmark, with
//! section and group score badges.

use crate::html::{Html, DASH};
use walkaround_assessment::{is_blank, Assessment, MetaField};
use walkaround_engine::{score_badge, Badge, Percent, ScoreCard};
use walkaround_schema::{Group, Schema, Section};

pub(crate) fn badge(html: &mut Html, score: Option<Percent>) {
    let Badge { label, tier } = score_badge(score);
    html.raw("<span class=\"badge ");
    html.raw(tier.as_str());
    html.raw("\">");
    html.text(&label);
    html.close("span");
}

pub(crate) fn meta_table(html: &mut Html, assessment: &Assessment, fields: &[MetaField]) {
    html.open("table");
    html.raw("\n");
    for field in fields {
        html.open("tr");
        html.element("th", field.label());
        html.open("td");
        html.text_or_dash(assessment.meta.get(*field));
        html.close("td");
        html.close("tr");
    }
    html.close("table");
}

pub(crate) fn notes_block(html: &mut Html, heading: &'static str, text: &str) {
    html.element("h2", heading);
    if is_blank(text) {
        html.element_class("p", "muted", DASH);
    } else {
        html.element_class("div", "note", text);
    }
}

pub(crate) fn render(schema: &Schema, assessment: &Assessment, footer: &str) -> String {
    let card = ScoreCard::compute(schema, assessment);
    let mut html = Html::document(schema.title());

    html.element("h1", schema.title());
    meta_table(&mut html, assessment, &MetaField::ALL);

    let progress = assessment.progress();
    html.open("p");
    html.open("strong");
    html.raw("Overall score: ");
    html.close("strong");
    badge(&mut html, card.overall);
    html.text(&format!(
        " · {} of {} questions answered · {} of {} tools observed",
        progress.answered, progress.questions, progress.checked, progress.tools
    ));
    html.close("p");

    for section in schema.sections() {
        render_section(&mut html, assessment, &card, section);
    }

    notes_block(&mut html, "General notes", &assessment.general_notes);
    notes_block(&mut html, "Evidence", &assessment.evidence_notes);

    html.element("footer", footer);
    html.finish()
}

fn render_section(html: &mut Html, assessment: &Assessment, card: &ScoreCard, section: &Section) {
    html.open("section");
    html.raw("\n");
    html.element("h2", &section.title);
    if let Some(subtitle) = &section.subtitle {
        html.element_class("p", "subtitle", subtitle);
    }
    html.open("p");
    html.raw("Section score: ");
    badge(html, card.section(&section.id));
    html.close("p");

    for group in &section.groups {
        render_group(html, assessment, card, group);
    }
    html.close("section");
}

fn render_group(html: &mut Html, assessment: &Assessment, card: &ScoreCard, group: &Group) {
    html.open("h3");
    html.text(&group.title);
    html.raw(" ");
    badge(html, card.group(&group.id));
    html.close("h3");

    if !group.questions.is_empty() {
        html.open("table");
        html.raw("\n<tr><th>#</th><th>Question</th><th>Response</th><th>Note</th></tr>\n");
        for (i, (key, question)) in group.question_keys().zip(&group.questions).enumerate() {
            html.open("tr");
            html.element("td", &(i + 1).to_string());
            html.element("td", question);
            html.open("td");
            html.raw(assessment.response(&key).label().unwrap_or(DASH));
            html.close("td");
            html.element("td", assessment.question_note(&key));
            html.close("tr");
        }
        html.close("table");
    }

    if !group.tools.is_empty() {
        html.element("h4", group.tools_title.as_deref().unwrap_or("Tools observed"));
        html.open_class("ul", "checklist");
        html.raw("\n");
        for (key, tool) in group.tool_keys().zip(&group.tools) {
            html.open("li");
            html.raw(if assessment.tool(&key) { "☑ " } else { "☐ " });
            html.text(tool);
            html.close("li");
        }
        html.close("ul");
    }

    let note = assessment.group_note(&group.id);
    if !is_blank(note) {
        html.element_class("div", "note", note);
    }
}
