//! Descriptive fields of a session
//!
//! Opaque strings. Nothing in scoring reads them; the renderer displays them
//! and the filename helper sanitizes one of them.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Descriptive header of an assessment
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Meta {
    /// Visit date, normally `YYYY-MM-DD`
    #[serde(deserialize_with = "crate::lenient::string")]
    pub date: String,
    /// Customer or company name
    #[serde(deserialize_with = "crate::lenient::string")]
    pub customer: String,
    /// Site or plant name
    #[serde(deserialize_with = "crate::lenient::string")]
    pub site: String,
    /// Primary contact at the site
    #[serde(deserialize_with = "crate::lenient::string")]
    pub contact: String,
    /// Person performing the walkaround
    #[serde(deserialize_with = "crate::lenient::string")]
    pub assessor: String,
    /// Areas or value streams in scope
    #[serde(deserialize_with = "crate::lenient::string")]
    pub scope: String,
}

/// Names one [`Meta`] field for setters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetaField {
    /// Visit date
    Date,
    /// Customer
    Customer,
    /// Site
    Site,
    /// Contact
    Contact,
    /// Assessor
    Assessor,
    /// Scope
    Scope,
}

impl MetaField {
    /// All fields in display order
    pub const ALL: [Self; 6] = [
        Self::Date,
        Self::Customer,
        Self::Site,
        Self::Contact,
        Self::Assessor,
        Self::Scope,
    ];

    /// Display label
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Date => "Date",
            Self::Customer => "Customer",
            Self::Site => "Site",
            Self::Contact => "Contact",
            Self::Assessor => "Assessor",
            Self::Scope => "Scope",
        }
    }
}

impl Meta {
    /// Read one field
    #[must_use]
    pub fn get(&self, field: MetaField) -> &str {
        match field {
            MetaField::Date => &self.date,
            MetaField::Customer => &self.customer,
            MetaField::Site => &self.site,
            MetaField::Contact => &self.contact,
            MetaField::Assessor => &self.assessor,
            MetaField::Scope => &self.scope,
        }
    }

    /// Replace one field
    pub fn set(&mut self, field: MetaField, value: impl Into<String>) {
        let slot = match field {
            MetaField::Date => &mut self.date,
            MetaField::Customer => &mut self.customer,
            MetaField::Site => &mut self.site,
            MetaField::Contact => &mut self.contact,
            MetaField::Assessor => &mut self.assessor,
            MetaField::Scope => &mut self.scope,
        };
        *slot = value.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_touches_only_named_field() {
        let mut meta = Meta::default();
        meta.set(MetaField::Site, "Plant 7");
        assert_eq!(meta.get(MetaField::Site), "Plant 7");
        for field in MetaField::ALL {
            if field != MetaField::Site {
                assert_eq!(meta.get(field), "");
            }
        }
    }

    #[test]
    fn missing_fields_deserialize_empty() {
        let meta: Meta = serde_json::from_str(r#"{"customer": "Acme"}"#).unwrap();
        assert_eq!(meta.customer, "Acme");
        assert_eq!(meta.date, "");
    }
}
