//! Questionnaires loaded from files behave like the built-in one.

use pretty_assertions::assert_eq;
use std::io::Write;
use walkaround_schema::{GroupId, QuestionKey, Schema, SchemaError, ToolKey};

const SMALL: &str = r"
version: plant-v2
title: Plant Walk
sections:
  - id: floor
    title: SECTION 1 — FLOOR
    groups:
      - id: flow
        title: A. Flow
        questions:
          - Is flow visible?
          - Is WIP capped?
        tools:
          - FIFO lanes
      - id: safety
        title: B. Safety
        tools_title: Safety aids
        questions:
          - Are walkways marked?
";

fn write_temp(suffix: &str, body: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(body.as_bytes()).unwrap();
    file
}

#[test]
fn keys_resolve_against_loaded_file() {
    let file = write_temp(".yaml", SMALL);
    let schema = Schema::load(file.path()).unwrap();

    assert_eq!(schema.version(), "plant-v2");
    assert_eq!(schema.question_count(), 3);
    assert_eq!(schema.tool_count(), 1);

    let keys: Vec<String> = schema.question_keys().map(|k| k.to_string()).collect();
    assert_eq!(keys, ["flow.0", "flow.1", "safety.0"]);

    let key: QuestionKey = "flow.1".parse().unwrap();
    assert_eq!(schema.question(&key), Some("Is WIP capped?"));
    assert_eq!(schema.question(&GroupId::new("flow").question(2)), None);
    let tool: ToolKey = "flow.0".parse().unwrap();
    assert_eq!(schema.tool(&tool), Some("FIFO lanes"));
    assert_eq!(
        schema.group(&GroupId::new("safety")).and_then(|g| g.tools_title.as_deref()),
        Some("Safety aids")
    );
}

#[test]
fn yaml_and_json_dumps_load_identically() {
    let builtin = Schema::builtin();
    let yaml = write_temp(".yml", &builtin.to_yaml_string().unwrap());
    let json = write_temp(".json", &builtin.to_json_string().unwrap());

    assert_eq!(Schema::load(yaml.path()).unwrap(), builtin);
    assert_eq!(Schema::load(json.path()).unwrap(), builtin);
}

#[test]
fn invalid_files_report_typed_errors() {
    let dup = write_temp(".yaml", &SMALL.replace("id: safety", "id: flow"));
    assert!(matches!(Schema::load(dup.path()), Err(SchemaError::DuplicateGroup(id)) if id == "flow"));

    let txt = write_temp(".txt", SMALL);
    assert!(matches!(Schema::load(txt.path()), Err(SchemaError::UnsupportedExtension(_))));

    let broken = write_temp(".yaml", "sections: [");
    assert!(matches!(Schema::load(broken.path()), Err(SchemaError::Yaml(_))));
}
