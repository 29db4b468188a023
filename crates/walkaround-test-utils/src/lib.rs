//! Testing utilities for the walkaround workspace
//!
//! Shared schema fixtures and assessment builders.

#![allow(missing_docs)]

use walkaround_assessment::{Assessment, ResponseValue};
use walkaround_schema::{Group, GroupId, Schema, Section, SectionId};

/// Group fixture with generated question and tool texts
pub fn group(id: &str, title: &str, questions: usize, tools: usize) -> Group {
    Group {
        id: GroupId::new(id),
        title: title.to_string(),
        tools_title: None,
        questions: (0..questions).map(|i| format!("{id} question {i}?")).collect(),
        tools: (0..tools).map(|i| format!("{id} tool {i}")).collect(),
    }
}

/// Section fixture
pub fn section(id: &str, title: &str, groups: Vec<Group>) -> Section {
    Section {
        id: SectionId::new(id),
        title: title.to_string(),
        subtitle: None,
        groups,
    }
}

/// Schema with one section `s` holding one group `g`
pub fn single_group_schema(questions: usize, tools: usize) -> Schema {
    Schema::new(
        "test-v1",
        "Test Walk",
        vec![section("s", "SECTION S", vec![group("g", "A. Only Group", questions, tools)])],
    )
    .unwrap()
}

/// Schema with `sections` sections of `groups` groups, each with `questions` questions
///
/// Ids are `s{n}` and `s{n}g{m}`; group titles carry a letter prefix.
pub fn grid_schema(sections: usize, groups: usize, questions: usize) -> Schema {
    let sections = (0..sections)
        .map(|s| {
            let groups = (0..groups)
                .map(|g| {
                    let letter = char::from(b'A' + u8::try_from(g % 26).unwrap());
                    group(
                        &format!("s{s}g{g}"),
                        &format!("{letter}. Group {s}-{g}"),
                        questions,
                        2,
                    )
                })
                .collect();
            section(&format!("s{s}"), &format!("SECTION {s}"), groups)
        })
        .collect();
    Schema::new("grid-v1", "Grid Walk", sections).unwrap()
}

/// Empty assessment with `responses` written into group `group` from index 0
pub fn answered(schema: &Schema, group: &str, responses: &[ResponseValue]) -> Assessment {
    let mut assessment = Assessment::empty(schema);
    answer(&mut assessment, group, responses);
    assessment
}

/// Write `responses` into group `group` from index 0
pub fn answer(assessment: &mut Assessment, group: &str, responses: &[ResponseValue]) {
    let id = GroupId::new(group);
    for (i, value) in responses.iter().enumerate() {
        assessment.set_response(&id.question(i), *value).unwrap();
    }
}

/// Answer every question of a group with the same value
pub fn answer_all(schema: &Schema, assessment: &mut Assessment, group: &str, value: ResponseValue) {
    let id = GroupId::new(group);
    let count = schema.group(&id).unwrap().questions.len();
    answer(assessment, group, &vec![value; count]);
}

/// Check the tools at `indices` in group `group`
pub fn check_tools(assessment: &mut Assessment, group: &str, indices: &[usize]) {
    let id = GroupId::new(group);
    for i in indices {
        assessment.set_tool(&id.tool(*i), true).unwrap();
    }
}
