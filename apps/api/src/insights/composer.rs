//! Result Composer — turns extracted sections (or nothing) into an `InsightResult`.
//!
//! Both paths share the same rule tables from the entry's `DomainConfig`:
//! keyword rules match lower-cased text, threshold rules bucket numeric fields.
//! The model path matches keywords against the section each rule names; the fallback path has
//! no model text and matches against the entry's own text and list values instead.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::insights::domains::{AdvisoryKind, DomainConfig, KeywordRule};
use crate::insights::template::render_template;
use crate::models::{
    FieldValue, HealthLogEntry, InsightResult, InsightSource, RiskAssessment, RiskLevel,
};

#[derive(Default)]
struct Advisories {
    risk_flags: Vec<String>,
    recommendations: Vec<String>,
}

impl Advisories {
    fn add(&mut self, kind: AdvisoryKind, text: &str) {
        let list = match kind {
            AdvisoryKind::RiskFlag => &mut self.risk_flags,
            AdvisoryKind::Recommendation => &mut self.recommendations,
        };
        if !list.iter().any(|t| t == text) {
            list.push(text.to_string());
        }
    }

    fn apply_keyword(&mut self, rule: &KeywordRule, lowered: &str) {
        if lowered.contains(rule.needle) {
            self.add(rule.kind, rule.advisory);
        }
    }
}

pub fn compose_from_model(
    config: &DomainConfig,
    entry: &HealthLogEntry,
    sections: BTreeMap<String, String>,
    raw_response: String,
    generated_at: DateTime<Utc>,
) -> InsightResult {
    let mut advisories = Advisories::default();
    for rule in config.keyword_rules {
        if let Some(text) = sections.get(rule.section) {
            advisories.apply_keyword(rule, &text.to_lowercase());
        }
    }

    finish(
        config,
        entry,
        InsightSource::Model,
        sections,
        advisories,
        Some(raw_response),
        generated_at,
    )
}

/// Deterministic insight built only from the entry and static tables.
pub fn compose_fallback(
    config: &DomainConfig,
    entry: &HealthLogEntry,
    generated_at: DateTime<Utc>,
) -> InsightResult {
    let sections: BTreeMap<String, String> = config
        .fallback
        .iter()
        .map(|f| {
            let text = render_template(f.template, |token| {
                let spec = config.field(token)?;
                Some(
                    entry
                        .field(token)
                        .map(FieldValue::render)
                        .unwrap_or_else(|| spec.placeholder.to_string()),
                )
            });
            (f.key.to_string(), text)
        })
        .collect();

    let local_text = entry_text(entry);
    let mut advisories = Advisories::default();
    for rule in config.keyword_rules {
        advisories.apply_keyword(rule, &local_text);
    }

    finish(
        config,
        entry,
        InsightSource::Fallback,
        sections,
        advisories,
        None,
        generated_at,
    )
}

fn finish(
    config: &DomainConfig,
    entry: &HealthLogEntry,
    source: InsightSource,
    sections: BTreeMap<String, String>,
    mut advisories: Advisories,
    raw_response: Option<String>,
    generated_at: DateTime<Utc>,
) -> InsightResult {
    let risk_assessment = assess(config, entry, &mut advisories);

    InsightResult {
        domain: config.domain,
        source,
        sections,
        risk_flags: advisories.risk_flags,
        recommendations: advisories.recommendations,
        reminders: config.reminders.iter().map(|r| r.to_string()).collect(),
        risk_assessment,
        raw_response,
        generated_at,
    }
}

/// Buckets every threshold field the entry recorded. High values also add their advisory.
fn assess(
    config: &DomainConfig,
    entry: &HealthLogEntry,
    advisories: &mut Advisories,
) -> RiskAssessment {
    let mut risk = RiskAssessment::default();
    for rule in config.threshold_rules {
        let Some(value) = entry.number(rule.field) else {
            continue;
        };
        let level = if rule.high.matches(value) {
            advisories.add(AdvisoryKind::Recommendation, rule.advisory);
            RiskLevel::High
        } else if rule.moderate.matches(value) {
            RiskLevel::Moderate
        } else {
            RiskLevel::Low
        };
        risk.push(level, rule.label);
    }
    risk
}

/// Lower-cased text and list values of the entry, one per line.
fn entry_text(entry: &HealthLogEntry) -> String {
    entry
        .fields
        .values()
        .filter(|v| !matches!(v, FieldValue::Number(_)))
        .map(|v| v.render().to_lowercase())
        .collect::<Vec<_>>()
        .join("\n")
}
