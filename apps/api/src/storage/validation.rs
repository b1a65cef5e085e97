//! Form validation for submitted health log fields.
//!
//! Known fields are checked against their `FieldKind`; unknown keys are kept as free-form
//! values. Every problem is reported at once so forms can show all inline errors together.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde_json::Value;

use crate::errors::FieldError;
use crate::insights::domains::{DomainConfig, FieldKind};
use crate::models::FieldValue;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Normalizes raw JSON form values. Nulls and blank values are dropped as "not provided".
pub fn validate_fields(
    config: &DomainConfig,
    raw: &BTreeMap<String, Value>,
) -> Result<BTreeMap<String, FieldValue>, Vec<FieldError>> {
    let mut fields = BTreeMap::new();
    let mut errors = Vec::new();

    for (key, value) in raw {
        if value.is_null() {
            continue;
        }
        let result = match config.field(key) {
            Some(spec) => normalize_known(spec.kind, value),
            None => normalize_free(value),
        };
        match result {
            Ok(v) if v.is_blank() => {}
            Ok(v) => {
                fields.insert(key.clone(), v);
            }
            Err(message) => errors.push(FieldError::new(key.as_str(), message)),
        }
    }

    if errors.is_empty() && fields.is_empty() {
        errors.push(FieldError::new(
            "fields",
            "Fill in at least one field before saving",
        ));
    }

    if errors.is_empty() {
        Ok(fields)
    } else {
        Err(errors)
    }
}

fn normalize_known(kind: FieldKind, value: &Value) -> Result<FieldValue, String> {
    match kind {
        FieldKind::Scale { min, max } | FieldKind::Number { min, max } => {
            let n = match value {
                Value::Number(n) => n.as_f64(),
                Value::String(s) if s.trim().is_empty() => {
                    return Ok(FieldValue::Text(String::new()))
                }
                Value::String(s) => s.trim().parse::<f64>().ok(),
                _ => None,
            }
            .filter(|n| n.is_finite())
            .ok_or_else(|| "Must be a number".to_string())?;

            if n < min || n > max {
                return Err(format!("Must be between {min} and {max}"));
            }
            Ok(FieldValue::Number(n))
        }
        FieldKind::Text => match value {
            Value::String(s) => Ok(FieldValue::Text(s.trim().to_string())),
            Value::Number(n) => Ok(FieldValue::Text(n.to_string())),
            _ => Err("Must be text".to_string()),
        },
        FieldKind::List => match value {
            Value::Array(items) => list_items(items).map(FieldValue::List),
            Value::String(s) => Ok(FieldValue::List(
                s.split(',')
                    .map(|i| i.trim().to_string())
                    .filter(|i| !i.is_empty())
                    .collect(),
            )),
            _ => Err("Must be a list of items".to_string()),
        },
        FieldKind::Date => match value {
            Value::String(s) if s.trim().is_empty() => Ok(FieldValue::Text(String::new())),
            Value::String(s) => NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
                .map(|d| FieldValue::Text(d.format(DATE_FORMAT).to_string()))
                .map_err(|_| "Must be a date in YYYY-MM-DD format".to_string()),
            _ => Err("Must be a date in YYYY-MM-DD format".to_string()),
        },
    }
}

fn normalize_free(value: &Value) -> Result<FieldValue, String> {
    match value {
        Value::Number(n) => n
            .as_f64()
            .map(FieldValue::Number)
            .ok_or_else(|| "Must be a number".to_string()),
        Value::String(s) => Ok(FieldValue::Text(s.trim().to_string())),
        Value::Array(items) => list_items(items).map(FieldValue::List),
        Value::Bool(_) | Value::Object(_) | Value::Null => {
            Err("Must be a number, text or a list".to_string())
        }
    }
}

fn list_items(items: &[Value]) -> Result<Vec<String>, String> {
    items
        .iter()
        .filter_map(|item| match item {
            Value::String(s) if s.trim().is_empty() => None,
            Value::String(s) => Some(Ok(s.trim().to_string())),
            Value::Number(n) => Some(Ok(n.to_string())),
            _ => Some(Err("List items must be text".to_string())),
        })
        .collect()
}
