use std::collections::BTreeMap;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::insights::domains::config_for;
use crate::models::{Domain, HealthLogEntry};
use crate::state::AppState;
use crate::storage::validation::validate_fields;

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Serialize)]
pub struct LogListResponse {
    pub domain: Domain,
    pub entries: Vec<HealthLogEntry>,
}

#[derive(Deserialize)]
pub struct CreateEntryRequest {
    pub user_id: Uuid,
    pub fields: BTreeMap<String, serde_json::Value>,
    /// Defaults to the time of the request.
    pub timestamp: Option<DateTime<Utc>>,
}

/// GET /api/v1/logs/:domain?user_id=
pub async fn handle_list_entries(
    State(state): State<AppState>,
    Path(domain): Path<String>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<LogListResponse>, AppError> {
    let domain: Domain = domain.parse()?;
    let entries = state.logbook.entries(domain, params.user_id).await?;
    Ok(Json(LogListResponse { domain, entries }))
}

/// POST /api/v1/logs/:domain
pub async fn handle_create_entry(
    State(state): State<AppState>,
    Path(domain): Path<String>,
    Json(req): Json<CreateEntryRequest>,
) -> Result<(StatusCode, Json<HealthLogEntry>), AppError> {
    let domain: Domain = domain.parse()?;
    let fields =
        validate_fields(config_for(domain), &req.fields).map_err(AppError::InvalidFields)?;

    let entry = HealthLogEntry::new(
        req.user_id,
        domain,
        fields,
        req.timestamp.unwrap_or_else(Utc::now),
    );
    state.logbook.append(entry.clone()).await?;

    info!(domain = %domain, entry_id = %entry.id, "Health log entry saved");
    Ok((StatusCode::CREATED, Json(entry)))
}

/// DELETE /api/v1/logs/:domain?user_id=
pub async fn handle_clear_entries(
    State(state): State<AppState>,
    Path(domain): Path<String>,
    Query(params): Query<UserIdQuery>,
) -> Result<StatusCode, AppError> {
    let domain: Domain = domain.parse()?;
    state.logbook.clear(domain, params.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/logs/:domain/:entry_id?user_id=
pub async fn handle_delete_entry(
    State(state): State<AppState>,
    Path((domain, entry_id)): Path<(String, Uuid)>,
    Query(params): Query<UserIdQuery>,
) -> Result<StatusCode, AppError> {
    let domain: Domain = domain.parse()?;
    if state
        .logbook
        .delete_entry(domain, params.user_id, entry_id)
        .await?
    {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Entry {entry_id} not found")))
    }
}
