//! Prompt Builder — renders the insight prompt for one entry.
//!
//! Layout is fixed: patient profile → domain fields → history summary → output format.
//! Missing values are written as the field's placeholder literal so every prompt for a
//! domain has the same shape. Pure and infallible.

use crate::insights::domains::{DomainConfig, NOT_SPECIFIED};
use crate::insights::prompts::{INSIGHT_PROMPT_TEMPLATE, NO_FIELDS_RECORDED, NO_HISTORY};
use crate::insights::template::render_template;
use crate::llm_client::prompts::{NO_FILLER_INSTRUCTION, SAFETY_INSTRUCTION};
use crate::models::{HealthLogEntry, UserProfile};

/// Builds the prompt from the latest entry, the entries preceding it (oldest first) and the
/// user's profile.
pub fn build_prompt(
    config: &DomainConfig,
    latest: &HealthLogEntry,
    history: &[HealthLogEntry],
    profile: &UserProfile,
) -> String {
    let title_upper = config.title.to_uppercase();
    let entry_heading = format!(
        "LATEST {} ENTRY ({})",
        title_upper,
        latest.timestamp.format("%Y-%m-%d")
    );
    let history_heading = format!("HISTORICAL SUMMARY (previous {} entries)", history.len());

    render_template(INSIGHT_PROMPT_TEMPLATE, |token| {
        let value = match token {
            "specialist" => config.specialist.to_string(),
            "title" => config.title.to_string(),
            "profile" => render_profile(profile),
            "entry_heading" => entry_heading.clone(),
            "fields" => render_fields(config, latest),
            "history_heading" => history_heading.clone(),
            "history" => render_history(config, history),
            "format" => render_format(config),
            "no_filler_instruction" => NO_FILLER_INSTRUCTION.to_string(),
            "safety_instruction" => SAFETY_INSTRUCTION.to_string(),
            _ => return None,
        };
        Some(value)
    })
}

fn render_profile(profile: &UserProfile) -> String {
    let lines = [
        (
            "Age",
            profile.age.map(|a| a.to_string()).unwrap_or_default(),
        ),
        (
            "Sex assigned at birth",
            profile.sex_at_birth.clone().unwrap_or_default(),
        ),
        ("Medical conditions", profile.conditions.join(", ")),
        ("Family history", profile.family_history.join(", ")),
        ("Current medications", profile.medications.join(", ")),
        ("Allergies", profile.allergies.join(", ")),
        ("Lifestyle", profile.lifestyle.clone().unwrap_or_default()),
    ];

    lines
        .iter()
        .map(|(label, value)| {
            let value = value.trim();
            let value = if value.is_empty() { NOT_SPECIFIED } else { value };
            format!("- {label}: {value}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_fields(config: &DomainConfig, entry: &HealthLogEntry) -> String {
    config
        .fields
        .iter()
        .map(|spec| {
            let value = entry
                .field(spec.key)
                .map(|v| v.render())
                .unwrap_or_else(|| spec.placeholder.to_string());
            format!("- {}: {}", spec.label, value)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_history(config: &DomainConfig, history: &[HealthLogEntry]) -> String {
    if history.is_empty() {
        return NO_HISTORY.to_string();
    }

    history
        .iter()
        .map(|entry| {
            let recorded: Vec<String> = config
                .fields
                .iter()
                .filter_map(|spec| {
                    entry
                        .field(spec.key)
                        .map(|v| format!("{}: {}", spec.label, v.render()))
                })
                .collect();
            let summary = if recorded.is_empty() {
                NO_FIELDS_RECORDED.to_string()
            } else {
                recorded.join("; ")
            };
            format!("- {}: {}", entry.timestamp.format("%Y-%m-%d"), summary)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_format(config: &DomainConfig) -> String {
    config
        .sections
        .iter()
        .map(|s| format!("{}\n({})", s.heading(), s.instruction))
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    use super::*;
    use crate::insights::domains::{config_for, NOT_RECORDED};
    use crate::models::{Domain, FieldValue};

    fn entry(domain: Domain, pairs: &[(&str, FieldValue)], day: u32) -> HealthLogEntry {
        let fields: BTreeMap<String, FieldValue> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();
        HealthLogEntry::new(
            Uuid::new_v4(),
            domain,
            fields,
            Utc.with_ymd_and_hms(2026, 3, day, 9, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_empty_entry_uses_placeholders_for_every_field() {
        for domain in Domain::all() {
            let config = config_for(*domain);
            let latest = entry(*domain, &[], 10);
            let prompt = build_prompt(config, &latest, &[], &UserProfile::default());

            for spec in config.fields {
                let line = format!("- {}: {}", spec.label, spec.placeholder);
                assert!(prompt.contains(&line), "{domain}: missing line '{line}'");
            }
            for leaked in ["null", "undefined", "None", "NaN", "{"] {
                assert!(
                    !prompt.contains(leaked),
                    "{domain}: prompt leaks '{leaked}'"
                );
            }
            assert!(prompt.contains("- Age: Not specified"));
            assert!(prompt.contains(NO_HISTORY));
        }
    }

    #[test]
    fn test_prompt_lists_every_heading_in_order() {
        let config = config_for(Domain::SexualHealth);
        let prompt = build_prompt(
            config,
            &entry(Domain::SexualHealth, &[], 1),
            &[],
            &UserProfile::default(),
        );
        let mut last = 0;
        for s in config.sections {
            let pos = prompt.find(s.heading()).expect("heading present");
            assert!(pos >= last, "{} out of order", s.key);
            last = pos;
        }
        assert!(prompt.contains("🔍 **SEXUAL HEALTH ASSESSMENT**"));
    }

    #[test]
    fn test_sections_appear_in_template_order() {
        let config = config_for(Domain::GeneralHealth);
        let prompt = build_prompt(
            config,
            &entry(Domain::GeneralHealth, &[], 1),
            &[],
            &UserProfile::default(),
        );
        let profile = prompt.find("PATIENT PROFILE").unwrap();
        let fields = prompt.find("LATEST GENERAL HEALTH ENTRY (2026-03-01)").unwrap();
        let history = prompt.find("HISTORICAL SUMMARY").unwrap();
        let format = prompt.find("REQUIRED OUTPUT FORMAT").unwrap();
        assert!(profile < fields && fields < history && history < format);
    }

    #[test]
    fn test_recorded_values_are_rendered() {
        let config = config_for(Domain::GeneralHealth);
        let latest = entry(
            Domain::GeneralHealth,
            &[
                ("stressLevel", FieldValue::Number(8.0)),
                ("symptoms", FieldValue::List(vec!["fatigue".into(), "headache".into()])),
            ],
            5,
        );
        let prompt = build_prompt(config, &latest, &[], &UserProfile::default());
        assert!(prompt.contains("- Stress level (1-10): 8\n"));
        assert!(prompt.contains("- Symptoms: fatigue, headache"));
        assert!(prompt.contains(&format!("- Hours of sleep: {NOT_RECORDED}")));
    }

    #[test]
    fn test_history_summarizes_recorded_fields_only() {
        let config = config_for(Domain::GeneralHealth);
        let history = vec![
            entry(
                Domain::GeneralHealth,
                &[("sleepQuality", FieldValue::Number(6.0))],
                1,
            ),
            entry(Domain::GeneralHealth, &[], 2),
        ];
        let latest = entry(Domain::GeneralHealth, &[], 3);
        let prompt = build_prompt(config, &latest, &history, &UserProfile::default());
        assert!(prompt.contains("HISTORICAL SUMMARY (previous 2 entries)"));
        assert!(prompt.contains("- 2026-03-01: Sleep quality (1-10): 6"));
        assert!(prompt.contains(&format!("- 2026-03-02: {NO_FIELDS_RECORDED}")));
        assert!(!prompt.contains(NO_HISTORY));
    }

    #[test]
    fn test_profile_values_are_rendered() {
        let profile = UserProfile {
            age: Some(29),
            conditions: vec!["PCOS".into()],
            family_history: vec!["diabetes".into(), "hypertension".into()],
            ..UserProfile::default()
        };
        let prompt = build_prompt(
            config_for(Domain::Cycle),
            &entry(Domain::Cycle, &[], 1),
            &[],
            &profile,
        );
        assert!(prompt.contains("- Age: 29"));
        assert!(prompt.contains("- Medical conditions: PCOS"));
        assert!(prompt.contains("- Family history: diabetes, hypertension"));
        assert!(prompt.contains("- Allergies: Not specified"));
    }

    #[test]
    fn test_user_text_with_braces_is_not_expanded() {
        let latest = entry(
            Domain::GeneralHealth,
            &[("notes", FieldValue::Text("see {history}".into()))],
            1,
        );
        let prompt = build_prompt(
            config_for(Domain::GeneralHealth),
            &latest,
            &[],
            &UserProfile::default(),
        );
        assert!(prompt.contains("- Notes: see {history}"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let config = config_for(Domain::Pregnancy);
        let latest = entry(
            Domain::Pregnancy,
            &[("trimester", FieldValue::Number(2.0))],
            4,
        );
        let a = build_prompt(config, &latest, &[], &UserProfile::default());
        let b = build_prompt(config, &latest, &[], &UserProfile::default());
        assert_eq!(a, b);
    }
}
