//! Graded answers
//!
//! [`ResponseValue`] is the only coerced input in the store: any string that
//! is not a recognised answer becomes [`ResponseValue::Unset`].

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Answer to a single question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "Option<String>")]
pub enum ResponseValue {
    /// Fully in place
    Yes,
    /// Partly in place ("somewhat")
    Partial,
    /// Not in place
    No,
    /// Not applicable; excluded from scoring
    Na,
    /// Not answered yet
    #[default]
    Unset,
}

impl ResponseValue {
    /// All answer values in display order
    pub const ALL: [Self; 5] = [Self::Yes, Self::Partial, Self::No, Self::Na, Self::Unset];

    /// Parse leniently; unrecognised text is `Unset`
    ///
    /// Accepts `somewhat` for `partial` and `n/a` for `na`, case-insensitive.
    #[must_use]
    pub fn parse_lossy(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "yes" => Self::Yes,
            "partial" | "somewhat" => Self::Partial,
            "no" => Self::No,
            "na" | "n/a" => Self::Na,
            _ => Self::Unset,
        }
    }

    /// Stored form
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::Partial => "partial",
            Self::No => "no",
            Self::Na => "na",
            Self::Unset => "unset",
        }
    }

    /// Human label; `None` when unanswered
    #[inline]
    #[must_use]
    pub fn label(self) -> Option<&'static str> {
        match self {
            Self::Yes => Some("Yes"),
            Self::Partial => Some("Somewhat"),
            Self::No => Some("No"),
            Self::Na => Some("N/A"),
            Self::Unset => None,
        }
    }

    /// True for any value other than `Unset`
    #[inline]
    #[must_use]
    pub fn is_answered(self) -> bool {
        self != Self::Unset
    }
}

impl From<String> for ResponseValue {
    fn from(value: String) -> Self {
        Self::parse_lossy(&value)
    }
}

impl From<Option<String>> for ResponseValue {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::Unset, Self::from)
    }
}

impl From<&str> for ResponseValue {
    fn from(value: &str) -> Self {
        Self::parse_lossy(value)
    }
}

impl Display for ResponseValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
