use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::insights::domains::{config_for, FieldSpec};
use crate::insights::generator::{
    generate_insights, GenerateInsightsRequest, GenerateInsightsResponse,
};
use crate::models::{Domain, InsightResult};
use crate::state::AppState;
use crate::storage::handlers::UserIdQuery;

#[derive(Serialize)]
pub struct SectionSummary {
    pub key: &'static str,
    pub heading: &'static str,
}

#[derive(Serialize)]
pub struct DomainSummary {
    pub domain: Domain,
    pub title: &'static str,
    pub storage_prefix: &'static str,
    pub fields: &'static [FieldSpec],
    pub sections: Vec<SectionSummary>,
}

/// GET /api/v1/domains
pub async fn handle_list_domains() -> Json<Vec<DomainSummary>> {
    let domains = Domain::all()
        .iter()
        .map(|d| {
            let config = config_for(*d);
            DomainSummary {
                domain: *d,
                title: config.title,
                storage_prefix: d.storage_prefix(),
                fields: config.fields,
                sections: config
                    .sections
                    .iter()
                    .map(|s| SectionSummary {
                        key: s.key,
                        heading: s.heading(),
                    })
                    .collect(),
            }
        })
        .collect();
    Json(domains)
}

/// POST /api/v1/insights/:domain
pub async fn handle_generate_insights(
    State(state): State<AppState>,
    Path(domain): Path<String>,
    Json(req): Json<GenerateInsightsRequest>,
) -> Result<Json<GenerateInsightsResponse>, AppError> {
    let domain: Domain = domain.parse()?;
    let response = generate_insights(&state, domain, &req).await?;
    Ok(Json(response))
}

/// GET /api/v1/insights/:domain/entries/:entry_id?user_id=
pub async fn handle_get_entry_insights(
    State(state): State<AppState>,
    Path((domain, entry_id)): Path<(String, Uuid)>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<InsightResult>, AppError> {
    let domain: Domain = domain.parse()?;
    let entry = state
        .logbook
        .entries(domain, params.user_id)
        .await?
        .into_iter()
        .find(|e| e.id == entry_id)
        .ok_or_else(|| AppError::NotFound(format!("Entry {entry_id} not found")))?;

    entry
        .insights
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("No insights generated for entry {entry_id}")))
}
