//! Subcommand implementations

use crate::Session;
use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::ArgMatches;
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use walkaround_assessment::{AssessmentRecord, AssessmentStore, MetaField};
use walkaround_engine::{score_badge, Badge, DebriefSynthesizer, ScoreCard};
use walkaround_report::{email_draft, DocumentKind, ReportRenderer};

fn file(args: &ArgMatches) -> Result<&PathBuf> {
    args.get_one::<PathBuf>("file").context("missing FILE argument")
}

fn load_store(session: &Session, path: &Path) -> Result<AssessmentStore> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading assessment {}", path.display()))?;
    let (store, report) = AssessmentStore::load_json_or_empty(session.schema.clone(), &text);
    if report.fell_back {
        bail!("{} is not a readable assessment record", path.display());
    }
    if !report.is_clean() {
        tracing::warn!(
            path = %path.display(),
            dropped_keys = report.dropped_keys,
            version_mismatch = report.version_mismatch,
            "assessment loaded with discarded entries"
        );
    }
    Ok(store)
}

fn record_json(store: &AssessmentStore) -> Result<String> {
    Ok(store.to_record().to_json()?)
}

pub(crate) fn new(session: &Session, args: &ArgMatches, out: &mut dyn Write) -> Result<()> {
    let mut store = AssessmentStore::new(session.schema.clone());
    for (flag, field) in [
        ("customer", MetaField::Customer),
        ("site", MetaField::Site),
        ("date", MetaField::Date),
    ] {
        if let Some(value) = args.get_one::<String>(flag) {
            store.set_meta(field, value.as_str());
        }
    }
    let json = record_json(&store)?;

    match args.get_one::<PathBuf>("out") {
        Some(path) => {
            std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
            tracing::info!(path = %path.display(), "empty assessment written");
        }
        None => writeln!(out, "{json}")?,
    }
    Ok(())
}

#[derive(Serialize)]
struct GroupLine<'a> {
    id: &'a str,
    title: &'a str,
    score: Option<u8>,
    badge: Badge,
}

#[derive(Serialize)]
struct SectionLine<'a> {
    id: &'a str,
    title: &'a str,
    score: Option<u8>,
    badge: Badge,
    groups: Vec<GroupLine<'a>>,
}

#[derive(Serialize)]
struct ScoreSummary<'a> {
    overall: Option<u8>,
    badge: Badge,
    sections: Vec<SectionLine<'a>>,
}

pub(crate) fn score(session: &Session, args: &ArgMatches, out: &mut dyn Write) -> Result<()> {
    let store = load_store(session, file(args)?)?;
    let schema = store.schema();
    let card = ScoreCard::compute(schema, store.snapshot());

    let summary = ScoreSummary {
        overall: card.overall.map(|p| p.value()),
        badge: score_badge(card.overall),
        sections: schema
            .sections()
            .iter()
            .map(|section| {
                let score = card.section(&section.id);
                SectionLine {
                    id: section.id.as_str(),
                    title: &section.title,
                    score: score.map(|p| p.value()),
                    badge: score_badge(score),
                    groups: section
                        .groups
                        .iter()
                        .map(|group| {
                            let score = card.group(&group.id);
                            GroupLine {
                                id: group.id.as_str(),
                                title: &group.title,
                                score: score.map(|p| p.value()),
                                badge: score_badge(score),
                            }
                        })
                        .collect(),
                }
            })
            .collect(),
    };

    if args.get_flag("json") {
        writeln!(out, "{}", serde_json::to_string_pretty(&summary)?)?;
        return Ok(());
    }

    writeln!(out, "{}", schema.title())?;
    writeln!(out, "Overall: {} ({})", summary.badge.label, summary.badge.tier.as_str())?;
    for section in &summary.sections {
        writeln!(out)?;
        writeln!(
            out,
            "{}: {} ({})",
            section.title,
            section.badge.label,
            section.badge.tier.as_str()
        )?;
        for group in &section.groups {
            writeln!(
                out,
                "  {}: {} ({})",
                group.title,
                group.badge.label,
                group.badge.tier.as_str()
            )?;
        }
    }
    Ok(())
}

pub(crate) fn autofill(session: &Session, args: &ArgMatches, out: &mut dyn Write) -> Result<()> {
    let path = file(args)?;
    let mut store = load_store(session, path)?;
    let synthesizer = DebriefSynthesizer::new(session.config.synthesis.clone());
    let outcome = synthesizer.autofill(store.schema(), store.snapshot());
    let filled: Vec<&str> = outcome.filled.iter().map(|f| f.name()).collect();
    store.replace_debrief(outcome.debrief);
    let json = record_json(&store)?;

    if args.get_flag("write") {
        std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        if filled.is_empty() {
            writeln!(out, "nothing to fill")?;
        } else {
            writeln!(out, "filled: {}", filled.join(", "))?;
        }
    } else {
        writeln!(out, "{json}")?;
    }
    Ok(())
}

pub(crate) fn render(session: &Session, args: &ArgMatches, out: &mut dyn Write) -> Result<()> {
    let store = load_store(session, file(args)?)?;
    let today = match args.get_one::<String>("today") {
        Some(value) => NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .with_context(|| format!("--today {value:?} is not a YYYY-MM-DD date"))?,
        None => chrono::Local::now().date_naive(),
    };
    let out_dir = args
        .get_one::<PathBuf>("out-dir")
        .context("missing --out-dir")?;
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    let renderer = ReportRenderer::new(session.config.report.clone());
    for kind in DocumentKind::ALL {
        let doc = renderer.render(kind, store.schema(), store.snapshot(), today);
        let path = out_dir.join(&doc.filename);
        std::fs::write(&path, doc.html).with_context(|| format!("writing {}", path.display()))?;
        writeln!(out, "{}", path.display())?;
    }
    Ok(())
}

pub(crate) fn email(session: &Session, args: &ArgMatches, out: &mut dyn Write) -> Result<()> {
    let store = load_store(session, file(args)?)?;
    let assessment = store.snapshot();
    let draft = email_draft(&assessment.meta, &assessment.debrief);
    writeln!(out, "Subject: {}", draft.subject)?;
    writeln!(out)?;
    writeln!(out, "{}", draft.body)?;
    Ok(())
}

pub(crate) fn schema(session: &Session, args: &ArgMatches, out: &mut dyn Write) -> Result<()> {
    if args.get_flag("record") {
        let schema = AssessmentRecord::json_schema();
        writeln!(out, "{}", serde_json::to_string_pretty(&schema)?)?;
        return Ok(());
    }
    let text = match args.get_one::<String>("format").map(String::as_str) {
        Some("json") => session.schema().to_json_string()?,
        _ => session.schema().to_yaml_string()?,
    };
    write!(out, "{text}")?;
    if !text.ends_with('\n') {
        writeln!(out)?;
    }
    Ok(())
}
