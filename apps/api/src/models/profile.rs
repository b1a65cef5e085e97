use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProfileRow {
    pub user_id: Uuid,
    pub age: Option<i32>,
    pub sex_at_birth: Option<String>,
    pub conditions: Vec<String>,
    pub family_history: Vec<String>,
    pub medications: Vec<String>,
    pub allergies: Vec<String>,
    pub lifestyle: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// Demographic and medical-history attributes used when building prompts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub age: Option<u32>,
    pub sex_at_birth: Option<String>,
    pub conditions: Vec<String>,
    pub family_history: Vec<String>,
    pub medications: Vec<String>,
    pub allergies: Vec<String>,
    pub lifestyle: Option<String>,
}

impl From<ProfileRow> for UserProfile {
    fn from(row: ProfileRow) -> Self {
        Self {
            age: row.age.and_then(|a| u32::try_from(a).ok()),
            sex_at_birth: row.sex_at_birth,
            conditions: row.conditions,
            family_history: row.family_history,
            medications: row.medications,
            allergies: row.allergies,
            lifestyle: row.lifestyle,
        }
    }
}
