//! Walkaround Report Renderer
//!
//! Turns an assessment into two standalone HTML documents (the full
//! diagnostic and the executive debrief), suggests filenames for them, and
//! drafts the follow-up email.
//!
//! Documents carry their stylesheet inline and reference nothing external.
//! All user text is escaped.
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use walkaround_assessment::Assessment;
//! use walkaround_report::{DocumentKind, ReportRenderer};
//! use walkaround_schema::Schema;
//!
//! let schema = Schema::builtin();
//! let mut assessment = Assessment::empty(&schema);
//! assessment.meta.customer = "Acme <Plant>".to_string();
//!
//! let today = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
//! let doc = ReportRenderer::default().render(DocumentKind::Debrief, &schema, &assessment, today);
//! assert_eq!(doc.filename, "Executive_Debrief_Acme Plant_2026-10-17.html");
//! assert!(doc.html.contains("Acme &lt;Plant&gt;"));
//! ```

#![warn(unreachable_pub)]

mod config;
mod debrief;
mod diagnostic;
mod email;
mod filename;
mod html;
mod renderer;

pub use config::ReportConfig;
pub use email::{email_draft, EmailDraft};
pub use filename::{sanitize_name, suggested_filename, visit_date};
pub use html::escape_html;
pub use renderer::{DocumentKind, ReportRenderer, RenderedDocument};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
