//! Executive debrief document

use crate::diagnostic::{badge, meta_table};
use crate::html::{Html, DASH};
use walkaround_assessment::{Assessment, Debrief, DebriefList, MetaField};
use walkaround_engine::ScoreCard;
use walkaround_schema::Schema;

const HEADER_FIELDS: [MetaField; 4] = [
    MetaField::Customer,
    MetaField::Site,
    MetaField::Date,
    MetaField::Assessor,
];

pub(crate) fn render(
    schema: &Schema,
    assessment: &Assessment,
    debrief: &Debrief,
    footer: &str,
) -> String {
    let card = ScoreCard::compute(schema, assessment);
    let mut html = Html::document("Executive Debrief");

    html.element("h1", "Executive Debrief");
    meta_table(&mut html, assessment, &HEADER_FIELDS);

    html.element("h2", "Headline");
    html.open("p");
    html.text_or_dash(&debrief.headline);
    html.close("p");

    html.element("h2", "Scores by section");
    html.open("table");
    html.raw("\n<tr><th>Section</th><th>Average</th></tr>\n");
    for (section, scored) in schema.sections().iter().zip(&card.sections) {
        html.open("tr");
        html.element("td", &section.title);
        html.open("td");
        badge(&mut html, scored.score);
        html.close("td");
        html.close("tr");
    }
    html.open("tr");
    html.raw("<th>Overall</th>");
    html.open("td");
    badge(&mut html, card.overall);
    html.close("td");
    html.close("tr");
    html.close("table");

    list_block(&mut html, "Top wins", debrief, DebriefList::TopWins, "ul");
    list_block(&mut html, "Top gaps", debrief, DebriefList::TopGaps, "ul");
    list_block(&mut html, "Risks", debrief, DebriefList::Risks, "ul");
    list_block(&mut html, "Recommendations", debrief, DebriefList::Recommendations, "ol");

    html.element("h2", "Proposed next step");
    html.open("p");
    html.text_or_dash(&debrief.proposed_next_step);
    html.close("p");

    html.element("footer", footer);
    html.finish()
}

fn list_block(
    html: &mut Html,
    heading: &'static str,
    debrief: &Debrief,
    which: DebriefList,
    tag: &'static str,
) {
    html.element("h2", heading);
    let items: Vec<&str> = debrief.filled(which).collect();
    if items.is_empty() {
        html.element_class("p", "muted", DASH);
        return;
    }
    html.open(tag);
    html.raw("\n");
    for item in items {
        html.element("li", item);
    }
    html.close(tag);
}

#[cfg(test)]
mod tests {
    use super::*;
    use walkaround_assessment::DebriefField;

    #[test]
    fn empty_debrief_renders_dashes() {
        let schema = Schema::builtin();
        let assessment = Assessment::empty(&schema);
        let doc = render(&schema, &assessment, &assessment.debrief, "f");

        assert!(doc.contains("<h2>Headline</h2>\n<p>—</p>"));
        assert!(doc.contains("<h2>Top wins</h2>\n<p class=\"muted\">—</p>"));
        assert!(doc.contains("<th>Overall</th><td><span class=\"badge neutral\">—</span></td>"));
    }

    #[test]
    fn blank_list_slots_are_skipped() {
        let schema = Schema::builtin();
        let assessment = Assessment::empty(&schema);
        let mut debrief = Debrief::default();
        debrief.set(DebriefField::Recommendation(1), "Second").unwrap();
        debrief.set(DebriefField::Recommendation(3), "Fourth").unwrap();

        let doc = render(&schema, &assessment, &debrief, "f");
        assert!(doc.contains("<ol>\n<li>Second</li>\n<li>Fourth</li>\n</ol>"));
    }
}
