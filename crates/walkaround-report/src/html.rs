//! Escaping markup writer
//!
//! [`Html`] is the only way documents are assembled. Markup can come only
//! from `&'static str` literals; every runtime string goes through
//! [`escape_html`], so user text can never open or close an element.

/// Escape the five reserved markup characters
#[must_use]
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Placeholder for missing values
pub(crate) const DASH: &str = "—";

const STYLE: &str = "\
body{margin:0;background:#f4f5f7;color:#1d232b;font:15px/1.5 -apple-system,'Segoe UI',Roboto,Helvetica,Arial,sans-serif}\
main{max-width:920px;margin:0 auto;padding:24px 16px}\
h1{font-size:24px;margin:0 0 12px}\
h2{font-size:19px;margin:28px 0 8px;border-bottom:2px solid #d5d9e0;padding-bottom:4px}\
h3{font-size:16px;margin:20px 0 6px}\
h4{font-size:14px;margin:12px 0 4px;color:#4a5361}\
table{width:100%;border-collapse:collapse;margin:6px 0;background:#fff}\
th,td{border:1px solid #d5d9e0;padding:6px 8px;text-align:left;vertical-align:top}\
th{background:#eceff3;font-weight:600}\
.subtitle{color:#4a5361;margin:0 0 8px}\
.badge{display:inline-block;min-width:44px;padding:1px 8px;border-radius:10px;font-weight:600;text-align:center;color:#fff}\
.badge.good{background:#2e7d32}\
.badge.warning{background:#e0a100}\
.badge.critical{background:#c62828}\
.badge.neutral{background:#9aa3ad}\
.checklist{list-style:none;padding-left:0;margin:4px 0}\
.note{white-space:pre-wrap;background:#fff;border-left:3px solid #9aa3ad;padding:6px 10px;margin:6px 0}\
.muted{color:#7a838f}\
footer{margin-top:32px;font-size:12px;color:#7a838f}";

/// Markup accumulator
#[derive(Debug, Default)]
pub(crate) struct Html {
    out: String,
}

impl Html {
    /// Document prologue up to the opening `<main>`
    pub(crate) fn document(title: &str) -> Self {
        let mut html = Self::default();
        html.raw("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
        html.raw("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
        html.raw("<title>");
        html.text(title);
        html.raw("</title>\n<style>");
        html.raw(STYLE);
        html.raw("</style>\n</head>\n<body>\n<main>\n");
        html
    }

    /// Close `<main>`, `<body>` and `<html>`
    pub(crate) fn finish(mut self) -> String {
        self.raw("</main>\n</body>\n</html>\n");
        self.out
    }

    /// Literal markup
    pub(crate) fn raw(&mut self, markup: &'static str) {
        self.out.push_str(markup);
    }

    /// Escaped text
    pub(crate) fn text(&mut self, text: &str) {
        self.out.push_str(&escape_html(text));
    }

    /// Escaped text, or a dash when blank
    pub(crate) fn text_or_dash(&mut self, text: &str) {
        if text.trim().is_empty() {
            self.raw(DASH);
        } else {
            self.text(text);
        }
    }

    /// `<tag>`
    pub(crate) fn open(&mut self, tag: &'static str) {
        self.out.push('<');
        self.out.push_str(tag);
        self.out.push('>');
    }

    /// `<tag class="class">`
    pub(crate) fn open_class(&mut self, tag: &'static str, class: &'static str) {
        self.out.push('<');
        self.out.push_str(tag);
        self.out.push_str(" class=\"");
        self.out.push_str(class);
        self.out.push_str("\">");
    }

    /// `</tag>` followed by a newline for block elements
    pub(crate) fn close(&mut self, tag: &'static str) {
        self.out.push_str("</");
        self.out.push_str(tag);
        self.out.push('>');
        if !matches!(tag, "span" | "th" | "td" | "strong") {
            self.out.push('\n');
        }
    }

    /// `<tag>text</tag>`
    pub(crate) fn element(&mut self, tag: &'static str, text: &str) {
        self.open(tag);
        self.text(text);
        self.close(tag);
    }

    /// `<tag class="class">text</tag>`
    pub(crate) fn element_class(&mut self, tag: &'static str, class: &'static str, text: &str) {
        self.open_class(tag, class);
        self.text(text);
        self.close(tag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_all_reserved_characters() {
        assert_eq!(
            escape_html(r#"<b>hi</b>&"'"#),
            "&lt;b&gt;hi&lt;/b&gt;&amp;&quot;&#39;"
        );
        assert_eq!(escape_html("plain — text"), "plain — text");
    }

    #[test]
    fn ampersand_is_escaped_once() {
        assert_eq!(escape_html("&amp;"), "&amp;amp;");
    }

    #[test]
    fn document_is_self_contained() {
        let mut html = Html::document("T <1>");
        html.element("p", "body");
        let doc = html.finish();

        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<meta charset=\"utf-8\">"));
        assert!(doc.contains("name=\"viewport\""));
        assert!(doc.contains("<title>T &lt;1&gt;</title>"));
        assert!(!doc.contains("<link"));
        assert!(!doc.contains("<script"));
        assert!(!doc.contains("http://") && !doc.contains("https://"));
        assert!(doc.ends_with("</html>\n"));
    }

    #[test]
    fn blank_text_renders_dash() {
        let mut html = Html::default();
        html.text_or_dash("  ");
        html.text_or_dash("x");
        assert_eq!(html.out, "—x");
    }
}
