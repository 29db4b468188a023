//! Loading alternative questionnaire versions
//!
//! Schemas on disk are YAML or JSON documents with the same shape as the
//! serialized [`Schema`]. Every loaded schema goes through
//! [`Schema::validate`] before it is handed out.

use crate::error::SchemaError;
use crate::model::Schema;
use std::path::Path;

impl Schema {
    /// Parse and validate a YAML schema document
    ///
    /// # Errors
    /// Returns error on syntax errors or validation failures
    pub fn from_yaml_str(source: &str) -> Result<Self, SchemaError> {
        let schema: Self = serde_yaml::from_str(source)?;
        schema.validate()?;
        tracing::debug!(
            version = schema.version(),
            groups = schema.group_count(),
            "loaded yaml schema"
        );
        Ok(schema)
    }

    /// Parse and validate a JSON schema document
    ///
    /// # Errors
    /// Returns error on syntax errors or validation failures
    pub fn from_json_str(source: &str) -> Result<Self, SchemaError> {
        let schema: Self = serde_json::from_str(source)?;
        schema.validate()?;
        tracing::debug!(
            version = schema.version(),
            groups = schema.group_count(),
            "loaded json schema"
        );
        Ok(schema)
    }

    /// Load a schema file, choosing the format by extension
    ///
    /// # Errors
    /// Returns error if the file cannot be read, the extension is not
    /// `yaml`/`yml`/`json`, or the content is invalid
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        let source =
            std::fs::read_to_string(path).map_err(|e| SchemaError::io_error(path, e))?;

        match ext.as_str() {
            "yaml" | "yml" => Self::from_yaml_str(&source),
            "json" => Self::from_json_str(&source),
            other => Err(SchemaError::UnsupportedExtension(other.to_string())),
        }
    }

    /// Serialize to YAML
    ///
    /// # Errors
    /// Returns error if serialization fails
    pub fn to_yaml_string(&self) -> Result<String, SchemaError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Serialize to pretty JSON
    ///
    /// # Errors
    /// Returns error if serialization fails
    pub fn to_json_string(&self) -> Result<String, SchemaError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SMALL: &str = r"
version: small-v1
title: Small Walk
sections:
  - id: s1
    title: SECTION 1
    groups:
      - id: g1
        title: A. First
        questions: [Is it tidy?, Is it safe?]
        tools: [Shadow board]
      - id: g2
        title: B. Second
";

    #[test]
    fn yaml_document_loads_with_defaults() {
        let schema = Schema::from_yaml_str(SMALL).unwrap();
        assert_eq!(schema.version(), "small-v1");
        assert_eq!(schema.group_count(), 2);
        let g2 = schema.sections()[0].groups[1].clone();
        assert!(g2.questions.is_empty());
        assert!(g2.tools_title.is_none());
    }

    #[test]
    fn yaml_with_duplicate_ids_fails_validation() {
        let doc = SMALL.replace("id: g2", "id: g1");
        assert!(matches!(
            Schema::from_yaml_str(&doc),
            Err(SchemaError::DuplicateGroup(_))
        ));
    }

    #[test]
    fn json_text_is_accepted() {
        let schema = Schema::from_yaml_str(SMALL).unwrap();
        let json = schema.to_json_string().unwrap();
        assert_eq!(Schema::from_json_str(&json).unwrap(), schema);
    }

    #[test]
    fn load_picks_format_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let yaml_path = dir.path().join("walk.yml");
        std::fs::File::create(&yaml_path)
            .unwrap()
            .write_all(SMALL.as_bytes())
            .unwrap();
        assert_eq!(Schema::load(&yaml_path).unwrap().title(), "Small Walk");

        let txt_path = dir.path().join("walk.txt");
        std::fs::write(&txt_path, SMALL).unwrap();
        assert!(matches!(
            Schema::load(&txt_path),
            Err(SchemaError::UnsupportedExtension(ext)) if ext == "txt"
        ));

        assert!(matches!(
            Schema::load(dir.path().join("missing.yaml")),
            Err(SchemaError::Io { .. })
        ));
    }
}
