//! Health log storage.
//!
//! One key per (domain, user), `"<prefix>Data_<userId>"`, holding the JSON array of that user's
//! entries for the domain, oldest first. The array is always read and written whole; `LogBook`
//! serializes read-modify-write cycles inside this process.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info};
use uuid::Uuid;

use crate::models::{Domain, HealthLogEntry, InsightResult};

pub mod handlers;
pub mod memory;
pub mod redis_store;
pub mod validation;

pub use memory::MemoryLogStore;
pub use redis_store::RedisLogStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Stored value under '{key}' is not a valid entry array: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Entries could not be serialized: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Raw key-value backend. Values are opaque JSON strings.
#[async_trait]
pub trait LogStore: Send + Sync {
    async fn load(&self, key: &str) -> Result<Option<String>, StoreError>;
    async fn save(&self, key: &str, value: String) -> Result<(), StoreError>;
    async fn remove(&self, key: &str) -> Result<(), StoreError>;
}

pub fn storage_key(domain: Domain, user_id: Uuid) -> String {
    format!("{}Data_{}", domain.storage_prefix(), user_id)
}

/// Splits `entries` into the analysis target and up to `window` entries preceding it
/// (oldest first). The target is `entry_id` if given, otherwise the newest entry.
pub fn select_for_analysis(
    mut entries: Vec<HealthLogEntry>,
    entry_id: Option<Uuid>,
    window: usize,
) -> Option<(HealthLogEntry, Vec<HealthLogEntry>)> {
    let index = match entry_id {
        Some(id) => entries.iter().position(|e| e.id == id)?,
        None => entries.len().checked_sub(1)?,
    };
    entries.truncate(index + 1);
    let target = entries.pop()?;
    let start = entries.len().saturating_sub(window);
    Some((target, entries.split_off(start)))
}

#[derive(Clone)]
pub struct LogBook {
    store: Arc<dyn LogStore>,
    write_lock: Arc<Mutex<()>>,
}

impl LogBook {
    pub fn new(store: Arc<dyn LogStore>) -> Self {
        Self {
            store,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// All entries for the key, oldest first. A missing key is an empty log.
    pub async fn entries(
        &self,
        domain: Domain,
        user_id: Uuid,
    ) -> Result<Vec<HealthLogEntry>, StoreError> {
        self.read(&storage_key(domain, user_id)).await
    }

    pub async fn append(&self, entry: HealthLogEntry) -> Result<(), StoreError> {
        let key = storage_key(entry.domain, entry.user_id);
        let _guard = self.write_lock.lock().await;

        let mut entries = self.read(&key).await?;
        entries.push(entry);
        self.write(&key, &entries).await?;

        debug!(key = %key, count = entries.len(), "Appended health log entry");
        Ok(())
    }

    /// Stores `insights` on the entry. Returns the updated entry, or `None` if it no longer exists.
    pub async fn attach_insights(
        &self,
        domain: Domain,
        user_id: Uuid,
        entry_id: Uuid,
        insights: InsightResult,
    ) -> Result<Option<HealthLogEntry>, StoreError> {
        let key = storage_key(domain, user_id);
        let _guard = self.write_lock.lock().await;

        let mut entries = self.read(&key).await?;
        let Some(entry) = entries.iter_mut().find(|e| e.id == entry_id) else {
            return Ok(None);
        };
        entry.insights = Some(insights);
        let updated = entry.clone();
        self.write(&key, &entries).await?;

        Ok(Some(updated))
    }

    /// Returns whether an entry was removed.
    pub async fn delete_entry(
        &self,
        domain: Domain,
        user_id: Uuid,
        entry_id: Uuid,
    ) -> Result<bool, StoreError> {
        let key = storage_key(domain, user_id);
        let _guard = self.write_lock.lock().await;

        let mut entries = self.read(&key).await?;
        let before = entries.len();
        entries.retain(|e| e.id != entry_id);
        if entries.len() == before {
            return Ok(false);
        }

        if entries.is_empty() {
            self.store.remove(&key).await?;
        } else {
            self.write(&key, &entries).await?;
        }
        Ok(true)
    }

    pub async fn clear(&self, domain: Domain, user_id: Uuid) -> Result<(), StoreError> {
        let key = storage_key(domain, user_id);
        let _guard = self.write_lock.lock().await;
        self.store.remove(&key).await?;
        info!(key = %key, "Cleared health log");
        Ok(())
    }

    pub async fn latest_with_history(
        &self,
        domain: Domain,
        user_id: Uuid,
        entry_id: Option<Uuid>,
        window: usize,
    ) -> Result<Option<(HealthLogEntry, Vec<HealthLogEntry>)>, StoreError> {
        let entries = self.entries(domain, user_id).await?;
        Ok(select_for_analysis(entries, entry_id, window))
    }

    async fn read(&self, key: &str) -> Result<Vec<HealthLogEntry>, StoreError> {
        match self.store.load(key).await? {
            Some(raw) => serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt {
                key: key.to_string(),
                source,
            }),
            None => Ok(Vec::new()),
        }
    }

    async fn write(&self, key: &str, entries: &[HealthLogEntry]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(entries)?;
        self.store.save(key, raw).await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::insights::composer::compose_fallback;
    use crate::insights::domains::config_for;
    use crate::models::FieldValue;

    fn entry(user_id: Uuid, day: u32, pairs: &[(&str, FieldValue)]) -> HealthLogEntry {
        HealthLogEntry::new(
            user_id,
            Domain::GeneralHealth,
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect::<BTreeMap<_, _>>(),
            Utc.with_ymd_and_hms(2026, 1, day, 12, 0, 0).unwrap(),
        )
    }

    fn logbook() -> (LogBook, Arc<MemoryLogStore>) {
        let store = Arc::new(MemoryLogStore::new());
        (LogBook::new(store.clone()), store)
    }

    #[test]
    fn test_storage_key_format() {
        let user = Uuid::nil();
        assert_eq!(
            storage_key(Domain::SexualHealth, user),
            format!("sexualHealthData_{user}")
        );
        assert_eq!(storage_key(Domain::Cycle, user), format!("cycleData_{user}"));
    }

    #[tokio::test]
    async fn test_round_trip_preserves_order_and_fields() {
        let (book, _) = logbook();
        let user = Uuid::new_v4();
        let first = entry(
            user,
            1,
            &[
                ("stressLevel", FieldValue::Number(6.5)),
                ("symptoms", FieldValue::List(vec!["fatigue".into(), "cough".into()])),
                ("notes", FieldValue::Text("long day".into())),
            ],
        );
        let second = entry(user, 2, &[("sleepHours", FieldValue::Number(7.0))]);

        book.append(first.clone()).await.unwrap();
        book.append(second.clone()).await.unwrap();

        let loaded = book.entries(Domain::GeneralHealth, user).await.unwrap();
        assert_eq!(loaded, vec![first, second]);
    }

    #[tokio::test]
    async fn test_missing_key_is_empty() {
        let (book, _) = logbook();
        assert!(book
            .entries(Domain::Nutrition, Uuid::new_v4())
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_value_is_an_error() {
        let (book, store) = logbook();
        let user = Uuid::new_v4();
        store
            .save(&storage_key(Domain::Cycle, user), "{not json".into())
            .await
            .unwrap();

        let err = book.entries(Domain::Cycle, user).await.unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));
    }

    #[tokio::test]
    async fn test_attach_insights_persists() {
        let (book, _) = logbook();
        let user = Uuid::new_v4();
        let e = entry(user, 3, &[("stressLevel", FieldValue::Number(8.0))]);
        book.append(e.clone()).await.unwrap();

        let insight = compose_fallback(config_for(Domain::GeneralHealth), &e, Utc::now());
        let updated = book
            .attach_insights(Domain::GeneralHealth, user, e.id, insight.clone())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.insights.as_ref(), Some(&insight));

        let loaded = book.entries(Domain::GeneralHealth, user).await.unwrap();
        assert_eq!(loaded[0].insights, Some(insight.clone()));

        let missing = book
            .attach_insights(Domain::GeneralHealth, user, Uuid::new_v4(), insight)
            .await
            .unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_delete_and_clear() {
        let (book, store) = logbook();
        let user = Uuid::new_v4();
        let a = entry(user, 1, &[("stressLevel", FieldValue::Number(2.0))]);
        let b = entry(user, 2, &[("stressLevel", FieldValue::Number(3.0))]);
        book.append(a.clone()).await.unwrap();
        book.append(b.clone()).await.unwrap();

        assert!(book.delete_entry(Domain::GeneralHealth, user, a.id).await.unwrap());
        assert!(!book.delete_entry(Domain::GeneralHealth, user, a.id).await.unwrap());
        assert_eq!(
            book.entries(Domain::GeneralHealth, user).await.unwrap(),
            vec![b]
        );

        book.clear(Domain::GeneralHealth, user).await.unwrap();
        let key = storage_key(Domain::GeneralHealth, user);
        assert!(store.load(&key).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_concurrent_appends_are_not_lost() {
        let (book, _) = logbook();
        let user = Uuid::new_v4();
        let tasks: Vec<_> = (1..=20)
            .map(|day| {
                let book = book.clone();
                tokio::spawn(async move {
                    book.append(entry(user, day, &[("stressLevel", FieldValue::Number(1.0))]))
                        .await
                })
            })
            .collect();
        for t in tasks {
            t.await.unwrap().unwrap();
        }
        assert_eq!(
            book.entries(Domain::GeneralHealth, user).await.unwrap().len(),
            20
        );
    }

    #[test]
    fn test_select_for_analysis() {
        let user = Uuid::new_v4();
        let entries: Vec<_> = (1..=6).map(|d| entry(user, d, &[])).collect();

        let (target, history) = select_for_analysis(entries.clone(), None, 3).unwrap();
        assert_eq!(target.id, entries[5].id);
        assert_eq!(
            history.iter().map(|e| e.id).collect::<Vec<_>>(),
            vec![entries[2].id, entries[3].id, entries[4].id]
        );

        let (target, history) = select_for_analysis(entries.clone(), Some(entries[1].id), 3).unwrap();
        assert_eq!(target.id, entries[1].id);
        assert_eq!(history.len(), 1);

        assert!(select_for_analysis(entries, Some(Uuid::new_v4()), 3).is_none());
        assert!(select_for_analysis(vec![], None, 3).is_none());
    }
}
