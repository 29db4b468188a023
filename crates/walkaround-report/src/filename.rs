//! Suggested download filenames
//!
//! `<Prefix>_<SanitizedName>_<YYYY-MM-DD>.html`, where the name is the
//! customer (or site) with everything outside `[A-Za-z0-9 _-]` removed.

use chrono::NaiveDate;
use walkaround_assessment::Meta;

/// Keep only ASCII alphanumerics, space, `_` and `-`, then trim
#[must_use]
pub fn sanitize_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, ' ' | '_' | '-'))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Visit date when it is a valid ISO date, otherwise `today`
#[must_use]
pub fn visit_date(meta: &Meta, today: NaiveDate) -> NaiveDate {
    NaiveDate::parse_from_str(meta.date.trim(), "%Y-%m-%d").unwrap_or(today)
}

/// Build the suggested filename for one document
#[must_use]
pub fn suggested_filename(prefix: &str, meta: &Meta, fallback: &str, today: NaiveDate) -> String {
    let name = [meta.customer.as_str(), meta.site.as_str()]
        .into_iter()
        .map(sanitize_name)
        .find(|n| !n.is_empty())
        .unwrap_or_else(|| fallback.to_string());
    let date = visit_date(meta, today).format("%Y-%m-%d");
    format!("{prefix}_{name}_{date}.html")
}
