//! Walkaround Questionnaire Schema
//!
//! The immutable taxonomy every other component reads: sections → groups →
//! questions and checklist tools.
//!
//! # Core Concepts
//!
//! - [`Schema`]: validated questionnaire, passed explicitly to every component
//! - [`Section`] / [`Group`]: the two levels of the hierarchy
//! - [`QuestionKey`] / [`ToolKey`]: positional addresses (`group.index`)
//!
//! # Example
//!
//! ```rust
//! use walkaround_schema::{GroupId, Schema};
//!
//! let schema = Schema::builtin();
//! let key = GroupId::new("flow").question(0);
//! assert!(schema.question(&key).is_some());
//! ```

#![warn(unreachable_pub)]

mod builtin;
mod error;
mod key;
mod load;
mod model;

pub use builtin::{BUILTIN_VERSION, WASTES_GROUP_ID};
pub use error::{KeyParseError, SchemaError};
pub use key::{GroupId, QuestionKey, SectionId, ToolKey};
pub use model::{Group, Schema, Section};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
