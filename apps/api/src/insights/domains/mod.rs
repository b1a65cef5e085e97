//! Per-domain insight configuration.
//!
//! Every domain runs the same pipeline; only the data in its `DomainConfig` differs:
//! form fields, output sections with their heading variants, keyword and threshold rules,
//! reminders, and the fallback templates used when no model text is usable.

use serde::Serialize;

use crate::models::Domain;

mod amab;
mod cycle;
mod general_health;
mod mental_health;
mod nutrition;
mod pregnancy;
mod sexual_health;

pub const NOT_SPECIFIED: &str = "Not specified";
pub const NOT_RECORDED: &str = "Not recorded";

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldKind {
    /// Self-rated score, e.g. stress 1–10.
    Scale { min: f64, max: f64 },
    /// Measured quantity with a plausible range.
    Number { min: f64, max: f64 },
    Text,
    List,
    /// `YYYY-MM-DD`
    Date,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    /// Literal rendered in prompts and fallback text when the field is missing.
    pub placeholder: &'static str,
}

/// One section of the requested model output.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SectionSpec {
    pub key: &'static str,
    /// Heading variants in match priority order. The first one is the canonical heading
    /// written into the prompt; more specific variants must come before their substrings.
    pub variants: &'static [&'static str],
    pub instruction: &'static str,
}

impl SectionSpec {
    pub fn heading(&self) -> &'static str {
        self.variants[0]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvisoryKind {
    RiskFlag,
    Recommendation,
}

/// If `needle` occurs in the lower-cased text of `section`, `advisory` is added.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct KeywordRule {
    pub section: &'static str,
    pub needle: &'static str,
    pub advisory: &'static str,
    pub kind: AdvisoryKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Bound {
    Above(f64),
    Below(f64),
    /// Outside the inclusive range `[low, high]`.
    Outside(f64, f64),
}

impl Bound {
    pub fn matches(&self, value: f64) -> bool {
        match *self {
            Bound::Above(limit) => value > limit,
            Bound::Below(limit) => value < limit,
            Bound::Outside(low, high) => value < low || value > high,
        }
    }
}

/// Buckets a numeric field: `high` first, then `moderate`, otherwise low.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ThresholdRule {
    pub field: &'static str,
    pub label: &'static str,
    pub high: Bound,
    pub moderate: Bound,
    /// Added to the recommendations when the value lands in the high bucket.
    pub advisory: &'static str,
}

/// Static text for one section on the fallback path. `{fieldKey}` tokens are replaced
/// with the entry's value or the field's placeholder.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FallbackSection {
    pub key: &'static str,
    pub template: &'static str,
}

#[derive(Debug, Serialize)]
pub struct DomainConfig {
    pub domain: Domain,
    pub title: &'static str,
    /// Opening line of the prompt describing the persona the model should adopt.
    pub specialist: &'static str,
    pub fields: &'static [FieldSpec],
    pub sections: &'static [SectionSpec],
    pub keyword_rules: &'static [KeywordRule],
    pub threshold_rules: &'static [ThresholdRule],
    pub reminders: &'static [&'static str],
    pub fallback: &'static [FallbackSection],
}

impl DomainConfig {
    pub fn field(&self, key: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.key == key)
    }
}

pub fn config_for(domain: Domain) -> &'static DomainConfig {
    match domain {
        Domain::Cycle => &cycle::CONFIG,
        Domain::Pregnancy => &pregnancy::CONFIG,
        Domain::SexualHealth => &sexual_health::CONFIG,
        Domain::GeneralHealth => &general_health::CONFIG,
        Domain::MentalHealth => &mental_health::CONFIG,
        Domain::Nutrition => &nutrition::CONFIG,
        Domain::Amab => &amab::CONFIG,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_configs() -> Vec<&'static DomainConfig> {
        Domain::all().iter().map(|d| config_for(*d)).collect()
    }

    #[test]
    fn test_config_domain_matches_lookup() {
        for d in Domain::all() {
            assert_eq!(config_for(*d).domain, *d);
        }
    }

    #[test]
    fn test_every_section_has_a_fallback() {
        for c in all_configs() {
            for s in c.sections {
                assert!(
                    c.fallback.iter().any(|f| f.key == s.key),
                    "{}: section {} has no fallback",
                    c.domain,
                    s.key
                );
            }
            assert_eq!(c.fallback.len(), c.sections.len(), "{}", c.domain);
        }
    }

    #[test]
    fn test_rules_reference_known_sections_and_fields() {
        for c in all_configs() {
            for r in c.keyword_rules {
                assert!(
                    c.sections.iter().any(|s| s.key == r.section),
                    "{}: keyword rule '{}' targets unknown section {}",
                    c.domain,
                    r.needle,
                    r.section
                );
                assert_eq!(r.needle, r.needle.to_lowercase(), "needles are lower-case");
            }
            for t in c.threshold_rules {
                let field = c.field(t.field).unwrap_or_else(|| {
                    panic!("{}: threshold on unknown field {}", c.domain, t.field)
                });
                assert!(matches!(
                    field.kind,
                    FieldKind::Scale { .. } | FieldKind::Number { .. }
                ));
            }
        }
    }

    #[test]
    fn test_heading_variants_do_not_collide_across_sections() {
        for c in all_configs() {
            for a in c.sections {
                for b in c.sections {
                    if a.key == b.key {
                        continue;
                    }
                    for va in a.variants {
                        for vb in b.variants {
                            assert!(
                                !vb.contains(va),
                                "{}: variant '{}' of {} appears inside '{}' of {}",
                                c.domain,
                                va,
                                a.key,
                                vb,
                                b.key
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_fallback_tokens_name_known_fields() {
        for c in all_configs() {
            for f in c.fallback {
                let mut rest = f.template;
                while let Some(open) = rest.find('{') {
                    let close = rest[open..].find('}').expect("unclosed token") + open;
                    let token = &rest[open + 1..close];
                    assert!(
                        c.field(token).is_some(),
                        "{}: fallback {} uses unknown token {}",
                        c.domain,
                        f.key,
                        token
                    );
                    rest = &rest[close + 1..];
                }
            }
        }
    }

    #[test]
    fn test_every_domain_has_reminders() {
        for c in all_configs() {
            assert!(!c.reminders.is_empty(), "{}", c.domain);
        }
    }

    #[test]
    fn test_bound_matches() {
        assert!(Bound::Above(6.0).matches(7.0));
        assert!(!Bound::Above(6.0).matches(6.0));
        assert!(Bound::Below(5.0).matches(3.0));
        assert!(Bound::Outside(21.0, 35.0).matches(40.0));
        assert!(!Bound::Outside(21.0, 35.0).matches(28.0));
    }
}
