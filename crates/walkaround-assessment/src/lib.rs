//! Walkaround Assessment Store
//!
//! The mutable record of one session: graded responses, notes, tool
//! checkmarks and debrief fields, keyed positionally against a
//! [`walkaround_schema::Schema`].
//!
//! # Core Concepts
//!
//! - [`Assessment`]: keyed answer tables, every schema position pre-populated
//! - [`AssessmentStore`]: field-level setters, reset, immutable snapshots
//! - [`AssessmentRecord`]: tolerant JSON persistence shape
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use walkaround_assessment::{AssessmentStore, ResponseValue};
//! use walkaround_schema::{GroupId, Schema};
//!
//! let mut store = AssessmentStore::new(Arc::new(Schema::builtin()));
//! store.set_response(&GroupId::new("flow").question(0), ResponseValue::Yes)?;
//! assert_eq!(store.snapshot().progress().answered, 1);
//! # Ok::<(), walkaround_assessment::StoreError>(())
//! ```

#![warn(unreachable_pub)]

mod assessment;
mod debrief;
mod error;
mod lenient;
mod meta;
mod record;
mod response;
mod store;

pub use assessment::{Assessment, GroupAnswers, Progress};
pub use debrief::{
    is_blank, Debrief, DebriefField, DebriefList, RECOMMENDATIONS, RISKS, TOP_GAPS, TOP_WINS,
};
pub use error::StoreError;
pub use meta::{Meta, MetaField};
pub use record::{AssessmentRecord, DebriefRecord, LoadReport};
pub use response::ResponseValue;
pub use store::AssessmentStore;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
