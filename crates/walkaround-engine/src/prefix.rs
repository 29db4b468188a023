//! Enumeration-prefix stripping for group titles
//!
//! Group titles carry a label such as `"A. "`, `"B) "` or `"3: "`. The
//! headline quotes the title without it. The pattern only matches a single
//! uppercase letter or a one- or two-digit number followed by `.`, `)` or
//! `:` and whitespace; anything else is left alone.

use once_cell::sync::Lazy;
use regex::Regex;

static ENUMERATION_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(?:[A-Z]|[0-9]{1,2})[.):]\s+").expect("enumeration prefix pattern is valid")
});

/// Title without its leading enumeration label
///
/// Returns the trimmed input unchanged when no label matches or when the
/// label is all there is.
#[must_use]
pub fn strip_enumeration_prefix(title: &str) -> &str {
    let stripped = match ENUMERATION_PREFIX.find(title) {
        Some(m) => &title[m.end()..],
        None => title,
    };
    let stripped = stripped.trim();
    if stripped.is_empty() {
        title.trim()
    } else {
        stripped
    }
}
