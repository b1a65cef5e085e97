use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::domain::Domain;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightSource {
    /// Sections were extracted from the model's response.
    Model,
    /// Built entirely from the entry and static templates.
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

/// Factor labels bucketed by the threshold table of the entry's domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub overall: RiskLevel,
    pub high: Vec<String>,
    pub moderate: Vec<String>,
    pub low: Vec<String>,
}

impl Default for RiskAssessment {
    fn default() -> Self {
        Self {
            overall: RiskLevel::Low,
            high: vec![],
            moderate: vec![],
            low: vec![],
        }
    }
}

impl RiskAssessment {
    pub fn push(&mut self, level: RiskLevel, label: &str) {
        let bucket = match level {
            RiskLevel::High => &mut self.high,
            RiskLevel::Moderate => &mut self.moderate,
            RiskLevel::Low => &mut self.low,
        };
        if !bucket.iter().any(|l| l == label) {
            bucket.push(label.to_string());
        }
        self.overall = self.overall.max(level);
    }
}

/// Output of the insight pipeline for one entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightResult {
    pub domain: Domain,
    pub source: InsightSource,
    /// Section key → section body. Absent keys mean "no content".
    pub sections: BTreeMap<String, String>,
    pub risk_flags: Vec<String>,
    pub recommendations: Vec<String>,
    pub reminders: Vec<String>,
    pub risk_assessment: RiskAssessment,
    /// Full model response; `None` on the fallback path.
    pub raw_response: Option<String>,
    pub generated_at: DateTime<Utc>,
}

impl InsightResult {
    pub fn section(&self, key: &str) -> Option<&str> {
        self.sections.get(key).map(String::as_str)
    }

    pub fn has_content(&self) -> bool {
        self.sections.values().any(|s| !s.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_push_raises_overall() {
        let mut r = RiskAssessment::default();
        r.push(RiskLevel::Moderate, "hydration");
        assert_eq!(r.overall, RiskLevel::Moderate);
        r.push(RiskLevel::High, "stress");
        r.push(RiskLevel::Low, "exercise");
        assert_eq!(r.overall, RiskLevel::High);
        assert_eq!(r.high, vec!["stress"]);
    }

    #[test]
    fn test_risk_push_dedups_labels() {
        let mut r = RiskAssessment::default();
        r.push(RiskLevel::High, "stress");
        r.push(RiskLevel::High, "stress");
        assert_eq!(r.high.len(), 1);
    }
}
