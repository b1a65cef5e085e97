use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::UserProfile;
use crate::profiles::normalize_profile;
use crate::state::AppState;
use crate::storage::handlers::UserIdQuery;

#[derive(Deserialize)]
pub struct UpsertProfileRequest {
    pub user_id: Uuid,
    #[serde(flatten)]
    pub profile: UserProfile,
}

#[derive(Serialize)]
pub struct ProfileResponse {
    pub user_id: Uuid,
    #[serde(flatten)]
    pub profile: UserProfile,
}

/// GET /api/v1/profile?user_id=
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<ProfileResponse>, AppError> {
    let profile = state.profiles.get(params.user_id).await?;
    Ok(Json(ProfileResponse {
        user_id: params.user_id,
        profile,
    }))
}

/// PUT /api/v1/profile
pub async fn handle_upsert_profile(
    State(state): State<AppState>,
    Json(req): Json<UpsertProfileRequest>,
) -> Result<Json<ProfileResponse>, AppError> {
    let profile = normalize_profile(req.profile)?;
    state.profiles.upsert(req.user_id, &profile).await?;
    Ok(Json(ProfileResponse {
        user_id: req.user_id,
        profile,
    }))
}
