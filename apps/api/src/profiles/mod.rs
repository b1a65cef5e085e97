//! User profiles — demographic and medical-history context for prompts.
//!
//! `AppState` holds an `Arc<dyn ProfileStore>`; production uses Postgres.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{ProfileRow, UserProfile};

pub mod handlers;

pub const MAX_AGE: u32 = 130;

#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// A user without a stored profile gets `UserProfile::default()`.
    async fn get(&self, user_id: Uuid) -> Result<UserProfile, AppError>;
    async fn upsert(&self, user_id: Uuid, profile: &UserProfile) -> Result<(), AppError>;
}

pub struct PgProfileStore {
    pool: PgPool,
}

impl PgProfileStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileStore for PgProfileStore {
    async fn get(&self, user_id: Uuid) -> Result<UserProfile, AppError> {
        let row = sqlx::query_as::<_, ProfileRow>("SELECT * FROM user_profiles WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(UserProfile::from).unwrap_or_default())
    }

    async fn upsert(&self, user_id: Uuid, profile: &UserProfile) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO user_profiles
                (user_id, age, sex_at_birth, conditions, family_history, medications, allergies, lifestyle, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, NOW())
            ON CONFLICT (user_id) DO UPDATE SET
                age = EXCLUDED.age,
                sex_at_birth = EXCLUDED.sex_at_birth,
                conditions = EXCLUDED.conditions,
                family_history = EXCLUDED.family_history,
                medications = EXCLUDED.medications,
                allergies = EXCLUDED.allergies,
                lifestyle = EXCLUDED.lifestyle,
                updated_at = NOW()
            "#,
        )
        .bind(user_id)
        .bind(profile.age.map(|a| a as i32))
        .bind(&profile.sex_at_birth)
        .bind(&profile.conditions)
        .bind(&profile.family_history)
        .bind(&profile.medications)
        .bind(&profile.allergies)
        .bind(&profile.lifestyle)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

/// Trims text, drops blank list items and checks the age range.
pub fn normalize_profile(mut profile: UserProfile) -> Result<UserProfile, AppError> {
    if let Some(age) = profile.age {
        if age > MAX_AGE {
            return Err(AppError::Validation(format!(
                "age must be at most {MAX_AGE}"
            )));
        }
    }

    for list in [
        &mut profile.conditions,
        &mut profile.family_history,
        &mut profile.medications,
        &mut profile.allergies,
    ] {
        *list = list
            .iter()
            .map(|i| i.trim().to_string())
            .filter(|i| !i.is_empty())
            .collect();
    }
    for text in [&mut profile.sex_at_birth, &mut profile.lifestyle] {
        *text = text
            .take()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
    }

    Ok(profile)
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::HashMap;

    use tokio::sync::RwLock;

    use super::*;

    #[derive(Default)]
    pub struct MemoryProfileStore {
        profiles: RwLock<HashMap<Uuid, UserProfile>>,
    }

    #[async_trait]
    impl ProfileStore for MemoryProfileStore {
        async fn get(&self, user_id: Uuid) -> Result<UserProfile, AppError> {
            Ok(self
                .profiles
                .read()
                .await
                .get(&user_id)
                .cloned()
                .unwrap_or_default())
        }

        async fn upsert(&self, user_id: Uuid, profile: &UserProfile) -> Result<(), AppError> {
            self.profiles.write().await.insert(user_id, profile.clone());
            Ok(())
        }
    }
}
