//! Insight generation — orchestrates one analysis request.
//!
//! Flow: load entries → pick target + history → guard check → load profile →
//!       pipeline (prompt → completion → sections, or fallback) → store on entry → record run.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::insights::domains::config_for;
use crate::insights::guard::GuardDecision;
use crate::models::{Domain, InsightResult};
use crate::state::AppState;
use crate::storage::storage_key;

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateInsightsRequest {
    pub user_id: Uuid,
    /// Defaults to the newest entry.
    pub entry_id: Option<Uuid>,
    /// Re-run even when the entry's data has not changed since the last analysis.
    #[serde(default)]
    pub force: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationStatus {
    Generated,
    /// Data matched the last analysis; the stored insight is returned.
    Unchanged,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerateInsightsResponse {
    pub entry_id: Uuid,
    pub status: GenerationStatus,
    pub insights: InsightResult,
}

pub async fn generate_insights(
    state: &AppState,
    domain: Domain,
    request: &GenerateInsightsRequest,
) -> Result<GenerateInsightsResponse, AppError> {
    let config = config_for(domain);
    let user_id = request.user_id;

    let (target, history) = state
        .logbook
        .latest_with_history(
            domain,
            user_id,
            request.entry_id,
            state.pipeline.history_window(),
        )
        .await?
        .ok_or_else(|| match request.entry_id {
            Some(id) => AppError::NotFound(format!("Entry {id} not found")),
            None => AppError::NotFound(format!("No {domain} entries logged yet")),
        })?;

    let key = storage_key(domain, user_id);
    let data_hash = target.data_hash();

    match state.guard.check(&key, &data_hash) {
        GuardDecision::RateLimited { retry_after } => {
            let retry_after_secs = retry_after.as_secs_f64().ceil().max(1.0) as u64;
            info!(key = %key, retry_after_secs, "Insight request rate limited");
            return Err(AppError::RateLimited { retry_after_secs });
        }
        GuardDecision::Unchanged { insights } if !request.force => {
            let insights = match target.insights.clone() {
                Some(own) => own,
                None => {
                    // Same data as the last analyzed entry; reuse its result for this entry.
                    state
                        .logbook
                        .attach_insights(domain, user_id, target.id, (*insights).clone())
                        .await?
                        .ok_or_else(|| {
                            AppError::NotFound(format!("Entry {} was deleted", target.id))
                        })?;
                    *insights
                }
            };
            info!(key = %key, entry_id = %target.id, "Entry unchanged, returning stored insights");
            return Ok(GenerateInsightsResponse {
                entry_id: target.id,
                status: GenerationStatus::Unchanged,
                insights,
            });
        }
        _ => {}
    }

    let profile = state.profiles.get(user_id).await?;

    info!(
        domain = %domain,
        entry_id = %target.id,
        history = history.len(),
        "Generating insights"
    );
    let insights = state
        .pipeline
        .run(config, &target, &history, &profile, Utc::now())
        .await;

    state
        .logbook
        .attach_insights(domain, user_id, target.id, insights.clone())
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Entry {} was deleted", target.id)))?;

    state.guard.record(&key, &data_hash, &insights);

    Ok(GenerateInsightsResponse {
        entry_id: target.id,
        status: GenerationStatus::Generated,
        insights,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use chrono::TimeZone;

    use super::*;
    use crate::insights::requester::testing::ScriptedCompletion;
    use crate::models::{FieldValue, HealthLogEntry, InsightSource};

    fn entry(user_id: Uuid, day: u32, stress: f64) -> HealthLogEntry {
        HealthLogEntry::new(
            user_id,
            Domain::GeneralHealth,
            [("stressLevel".to_string(), FieldValue::Number(stress))]
                .into_iter()
                .collect(),
            Utc.with_ymd_and_hms(2026, 4, day, 7, 30, 0).unwrap(),
        )
    }

    fn request(user_id: Uuid) -> GenerateInsightsRequest {
        GenerateInsightsRequest {
            user_id,
            entry_id: None,
            force: false,
        }
    }

    #[tokio::test]
    async fn test_no_entries_is_not_found() {
        let state = AppState::for_tests(Arc::new(ScriptedCompletion::failing()));
        let err = generate_insights(&state, Domain::Cycle, &request(Uuid::new_v4()))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_fallback_result_is_stored_on_entry() {
        let client = Arc::new(ScriptedCompletion::failing());
        let state = AppState::for_tests(client.clone());
        let user = Uuid::new_v4();
        let e = entry(user, 1, 8.0);
        state.logbook.append(e.clone()).await.unwrap();

        let resp = generate_insights(&state, Domain::GeneralHealth, &request(user))
            .await
            .unwrap();

        assert_eq!(resp.entry_id, e.id);
        assert_eq!(resp.status, GenerationStatus::Generated);
        assert_eq!(resp.insights.source, InsightSource::Fallback);
        assert_eq!(client.calls(), 1);

        let stored = state
            .logbook
            .entries(Domain::GeneralHealth, user)
            .await
            .unwrap();
        assert_eq!(stored[0].insights.as_ref(), Some(&resp.insights));
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_run_inside_window_is_rate_limited() {
        let state = AppState::for_tests(Arc::new(ScriptedCompletion::failing()));
        let user = Uuid::new_v4();
        state.logbook.append(entry(user, 1, 5.0)).await.unwrap();

        generate_insights(&state, Domain::GeneralHealth, &request(user))
            .await
            .unwrap();
        tokio::time::advance(Duration::from_millis(2500)).await;

        let err = generate_insights(&state, Domain::GeneralHealth, &request(user))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::RateLimited {
                retry_after_secs: 8
            }
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_unchanged_entry_skips_completion() {
        let client = Arc::new(ScriptedCompletion::failing());
        let state = AppState::for_tests(client.clone());
        let user = Uuid::new_v4();
        state.logbook.append(entry(user, 1, 5.0)).await.unwrap();

        let first = generate_insights(&state, Domain::GeneralHealth, &request(user))
            .await
            .unwrap();
        tokio::time::advance(Duration::from_secs(11)).await;

        let second = generate_insights(&state, Domain::GeneralHealth, &request(user))
            .await
            .unwrap();
        assert_eq!(second.status, GenerationStatus::Unchanged);
        assert_eq!(second.insights, first.insights);
        assert_eq!(client.calls(), 1);

        tokio::time::advance(Duration::from_secs(11)).await;
        let forced = generate_insights(
            &state,
            Domain::GeneralHealth,
            &GenerateInsightsRequest {
                force: true,
                ..request(user)
            },
        )
        .await
        .unwrap();
        assert_eq!(forced.status, GenerationStatus::Generated);
        assert_eq!(client.calls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_entry_is_analyzed_after_window() {
        let client = Arc::new(ScriptedCompletion::failing());
        let state = AppState::for_tests(client.clone());
        let user = Uuid::new_v4();
        state.logbook.append(entry(user, 1, 5.0)).await.unwrap();
        generate_insights(&state, Domain::GeneralHealth, &request(user))
            .await
            .unwrap();

        tokio::time::advance(Duration::from_secs(11)).await;
        let newer = entry(user, 2, 9.0);
        state.logbook.append(newer.clone()).await.unwrap();

        let resp = generate_insights(&state, Domain::GeneralHealth, &request(user))
            .await
            .unwrap();
        assert_eq!(resp.entry_id, newer.id);
        assert_eq!(resp.status, GenerationStatus::Generated);
        assert_eq!(resp.insights.risk_assessment.high, vec!["stress"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_different_entry_inside_window_is_generated() {
        let client = Arc::new(ScriptedCompletion::failing());
        let state = AppState::for_tests(client.clone());
        let user = Uuid::new_v4();
        state.logbook.append(entry(user, 1, 3.0)).await.unwrap();
        generate_insights(&state, Domain::GeneralHealth, &request(user))
            .await
            .unwrap();

        tokio::time::advance(Duration::from_secs(3)).await;
        let newer = entry(user, 2, 9.0);
        state.logbook.append(newer.clone()).await.unwrap();

        let resp = generate_insights(&state, Domain::GeneralHealth, &request(user))
            .await
            .unwrap();
        assert_eq!(resp.entry_id, newer.id);
        assert_eq!(resp.status, GenerationStatus::Generated);
        assert_eq!(client.calls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_identical_new_entry_reuses_last_result() {
        let client = Arc::new(ScriptedCompletion::failing());
        let state = AppState::for_tests(client.clone());
        let user = Uuid::new_v4();
        state.logbook.append(entry(user, 1, 5.0)).await.unwrap();
        let first = generate_insights(&state, Domain::GeneralHealth, &request(user))
            .await
            .unwrap();

        tokio::time::advance(Duration::from_secs(11)).await;
        let repeat = entry(user, 2, 5.0);
        state.logbook.append(repeat.clone()).await.unwrap();

        let resp = generate_insights(&state, Domain::GeneralHealth, &request(user))
            .await
            .unwrap();
        assert_eq!(resp.entry_id, repeat.id);
        assert_eq!(resp.status, GenerationStatus::Unchanged);
        assert_eq!(resp.insights, first.insights);
        assert_eq!(client.calls(), 1);

        let stored = state
            .logbook
            .entries(Domain::GeneralHealth, user)
            .await
            .unwrap();
        assert_eq!(stored[1].insights.as_ref(), Some(&first.insights));
    }

    #[tokio::test]
    async fn test_explicit_entry_id() {
        let state = AppState::for_tests(Arc::new(ScriptedCompletion::failing()));
        let user = Uuid::new_v4();
        let older = entry(user, 1, 9.0);
        state.logbook.append(older.clone()).await.unwrap();
        state.logbook.append(entry(user, 2, 2.0)).await.unwrap();

        let resp = generate_insights(
            &state,
            Domain::GeneralHealth,
            &GenerateInsightsRequest {
                entry_id: Some(older.id),
                ..request(user)
            },
        )
        .await
        .unwrap();
        assert_eq!(resp.entry_id, older.id);

        let err = generate_insights(
            &state,
            Domain::GeneralHealth,
            &GenerateInsightsRequest {
                entry_id: Some(Uuid::new_v4()),
                ..request(user)
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
