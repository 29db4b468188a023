//! Walkaround Scoring Engine
//!
//! Pure functions from (schema, assessment) to scores, badges and a draft
//! executive debrief. Nothing here performs I/O or mutates its inputs.
//!
//! # Core Concepts
//!
//! - [`group_score`] / [`section_score`]: percentages, `None` when nothing is scorable
//! - [`ScoreCard`]: every score of an assessment in schema order
//! - [`score_badge`]: label plus good/warning/critical tier
//! - [`DebriefSynthesizer`]: ranked gaps, headline, risks, default plan
//!
//! # Example
//!
//! ```rust
//! use walkaround_assessment::{Assessment, ResponseValue};
//! use walkaround_engine::ScoreCard;
//! use walkaround_schema::{GroupId, Schema};
//!
//! let schema = Schema::builtin();
//! let mut assessment = Assessment::empty(&schema);
//! let flow = GroupId::new("flow");
//! assessment.set_response(&flow.question(0), ResponseValue::Yes)?;
//! assessment.set_response(&flow.question(1), ResponseValue::No)?;
//!
//! let card = ScoreCard::compute(&schema, &assessment);
//! assert_eq!(card.group(&flow).map(|p| p.value()), Some(50));
//! # Ok::<(), walkaround_assessment::StoreError>(())
//! ```

#![warn(unreachable_pub)]

mod badge;
mod config;
mod prefix;
mod scoring;
mod synthesis;

pub use badge::{score_badge, Badge, Tier, GOOD_FROM, NO_SCORE_LABEL, WARNING_FROM};
pub use config::{SynthesisConfig, DEFAULT_NEXT_STEP, DEFAULT_RECOMMENDATIONS};
pub use prefix::strip_enumeration_prefix;
pub use scoring::{
    group_score, mean_percent, score_value, section_score, GroupScore, Percent, ScoreCard,
    SectionScore,
};
pub use synthesis::{
    waste_name, AutofillOutcome, DebriefAnalysis, DebriefSynthesizer, FilledField, NoAnswer,
    RankedGroup,
};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
