use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A health tracking area. Each domain has its own form, storage key and insight configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Cycle,
    Pregnancy,
    SexualHealth,
    GeneralHealth,
    MentalHealth,
    Nutrition,
    /// Reproductive health for people assigned male at birth.
    Amab,
}

impl Domain {
    pub fn all() -> &'static [Domain] {
        &[
            Domain::Cycle,
            Domain::Pregnancy,
            Domain::SexualHealth,
            Domain::GeneralHealth,
            Domain::MentalHealth,
            Domain::Nutrition,
            Domain::Amab,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Cycle => "cycle",
            Domain::Pregnancy => "pregnancy",
            Domain::SexualHealth => "sexual_health",
            Domain::GeneralHealth => "general_health",
            Domain::MentalHealth => "mental_health",
            Domain::Nutrition => "nutrition",
            Domain::Amab => "amab",
        }
    }

    /// Prefix of the storage key, `"<prefix>Data_<userId>"`.
    pub fn storage_prefix(&self) -> &'static str {
        match self {
            Domain::Cycle => "cycle",
            Domain::Pregnancy => "pregnancy",
            Domain::SexualHealth => "sexualHealth",
            Domain::GeneralHealth => "generalHealth",
            Domain::MentalHealth => "mentalHealth",
            Domain::Nutrition => "nutrition",
            Domain::Amab => "amab",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDomain(pub String);

impl fmt::Display for UnknownDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown health domain '{}'", self.0)
    }
}

impl std::error::Error for UnknownDomain {}

impl FromStr for Domain {
    type Err = UnknownDomain;

    /// Accepts the snake_case key as well as the storage prefix (`sexualHealth`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Domain::all()
            .iter()
            .copied()
            .find(|d| d.as_str() == s || d.storage_prefix() == s)
            .ok_or_else(|| UnknownDomain(s.to_string()))
    }
}
