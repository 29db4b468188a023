//! Follow-up email draft
//!
//! Plain text built from the meta and debrief fields. Line order is fixed:
//! greeting, thanks, headline, gaps, recommendations, next step, attachment
//! reminder, signature.

use serde::Serialize;
use walkaround_assessment::{is_blank, Debrief, DebriefList, Meta};

/// Subject and body of the follow-up email
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailDraft {
    /// Subject line
    pub subject: String,
    /// Body, lines joined with `\n`
    pub body: String,
}

fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    if is_blank(value) {
        default
    } else {
        value.trim()
    }
}

/// Build the draft
#[must_use]
pub fn email_draft(meta: &Meta, debrief: &Debrief) -> EmailDraft {
    let place = or_default(&meta.site, or_default(&meta.customer, "your site"));
    let subject = if is_blank(&meta.date) {
        format!("Lean Walkaround Debrief — {place}")
    } else {
        format!("Lean Walkaround Debrief — {place} — {}", meta.date.trim())
    };

    let mut lines: Vec<String> = vec![
        format!("Hi {},", or_default(&meta.contact, "team")),
        String::new(),
        format!("Thank you for hosting the lean walkaround at {place}. Here is a short summary of what we observed."),
        String::new(),
        format!("Headline: {}", or_default(&debrief.headline, "—")),
        String::new(),
        "Top gaps:".to_string(),
    ];
    push_bullets(&mut lines, debrief, DebriefList::TopGaps);
    lines.push(String::new());
    lines.push("Recommended sequence:".to_string());
    push_bullets(&mut lines, debrief, DebriefList::Recommendations);
    lines.push(String::new());
    lines.push(format!(
        "Proposed next step: {}",
        or_default(&debrief.proposed_next_step, "—")
    ));
    lines.push(String::new());
    lines.push(
        "The full diagnostic and the executive debrief are attached as HTML files; they open in any browser."
            .to_string(),
    );
    lines.push(String::new());
    lines.push("Best regards,".to_string());
    lines.push(meta.assessor.trim().to_string());

    EmailDraft {
        subject,
        body: lines.join("\n"),
    }
}

fn push_bullets(lines: &mut Vec<String>, debrief: &Debrief, list: DebriefList) {
    let before = lines.len();
    lines.extend(debrief.filled(list).map(|item| format!("- {}", item.trim())));
    if lines.len() == before {
        lines.push("- —".to_string());
    }
}
