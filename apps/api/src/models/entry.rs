use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::models::domain::Domain;
use crate::models::insight::InsightResult;

/// A single value captured by a health log form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            FieldValue::Text(s) => s.trim().parse().ok(),
            FieldValue::List(_) => None,
        }
    }

    /// Blank text and empty lists carry no information and are treated as missing.
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Number(_) => false,
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::List(items) => items.iter().all(|i| i.trim().is_empty()),
        }
    }

    /// Human-readable rendering used in prompts and fallback text.
    pub fn render(&self) -> String {
        match self {
            FieldValue::Number(n) => format_number(*n),
            FieldValue::Text(s) => s.trim().to_string(),
            FieldValue::List(items) => items
                .iter()
                .map(|i| i.trim())
                .filter(|i| !i.is_empty())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

/// One submission of one health form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthLogEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub domain: Domain,
    pub timestamp: DateTime<Utc>,
    pub fields: BTreeMap<String, FieldValue>,
    /// Insight generated for this entry, kept for later review.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insights: Option<InsightResult>,
}

impl HealthLogEntry {
    pub fn new(
        user_id: Uuid,
        domain: Domain,
        fields: BTreeMap<String, FieldValue>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            domain,
            timestamp,
            fields,
            insights: None,
        }
    }

    /// Returns a field only if it holds a non-blank value.
    pub fn field(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key).filter(|v| !v.is_blank())
    }

    pub fn number(&self, key: &str) -> Option<f64> {
        self.field(key).and_then(FieldValue::as_number)
    }

    /// SHA-256 over the serialized field map. Identical submissions hash identically.
    pub fn data_hash(&self) -> String {
        let mut hasher = Sha256::new();
        // BTreeMap serializes in key order, so the encoding is stable.
        hasher.update(serde_json::to_vec(&self.fields).unwrap_or_default());
        hex::encode(hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, FieldValue)]) -> BTreeMap<String, FieldValue> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_field_value_untagged_serde() {
        let v: FieldValue = serde_json::from_str("8").unwrap();
        assert_eq!(v, FieldValue::Number(8.0));
        let v: FieldValue = serde_json::from_str("\"mild\"").unwrap();
        assert_eq!(v, FieldValue::Text("mild".into()));
        let v: FieldValue = serde_json::from_str("[\"fatigue\",\"cramps\"]").unwrap();
        assert_eq!(v, FieldValue::List(vec!["fatigue".into(), "cramps".into()]));
    }

    #[test]
    fn test_render_whole_numbers_without_decimal() {
        assert_eq!(FieldValue::Number(8.0).render(), "8");
        assert_eq!(FieldValue::Number(36.6).render(), "36.6");
        assert_eq!(
            FieldValue::List(vec!["fatigue".into(), " ".into(), "cramps".into()]).render(),
            "fatigue, cramps"
        );
    }

    #[test]
    fn test_blank_fields_are_missing() {
        let entry = HealthLogEntry::new(
            Uuid::new_v4(),
            Domain::GeneralHealth,
            fields(&[
                ("notes", FieldValue::Text("   ".into())),
                ("symptoms", FieldValue::List(vec![])),
                ("stressLevel", FieldValue::Number(4.0)),
            ]),
            Utc::now(),
        );
        assert!(entry.field("notes").is_none());
        assert!(entry.field("symptoms").is_none());
        assert_eq!(entry.number("stressLevel"), Some(4.0));
    }

    #[test]
    fn test_numeric_text_is_parsed() {
        assert_eq!(FieldValue::Text(" 7 ".into()).as_number(), Some(7.0));
        assert_eq!(FieldValue::Text("seven".into()).as_number(), None);
    }

    #[test]
    fn test_data_hash_ignores_id_and_timestamp() {
        let f = fields(&[("stressLevel", FieldValue::Number(8.0))]);
        let a = HealthLogEntry::new(Uuid::new_v4(), Domain::GeneralHealth, f.clone(), Utc::now());
        let b = HealthLogEntry::new(Uuid::new_v4(), Domain::GeneralHealth, f, Utc::now());
        assert_eq!(a.data_hash(), b.data_hash());
        assert_eq!(a.data_hash().len(), 64);
    }

    #[test]
    fn test_data_hash_changes_with_fields() {
        let a = HealthLogEntry::new(
            Uuid::new_v4(),
            Domain::GeneralHealth,
            fields(&[("stressLevel", FieldValue::Number(8.0))]),
            Utc::now(),
        );
        let b = HealthLogEntry::new(
            Uuid::new_v4(),
            Domain::GeneralHealth,
            fields(&[("stressLevel", FieldValue::Number(7.0))]),
            Utc::now(),
        );
        assert_ne!(a.data_hash(), b.data_hash());
    }
}
