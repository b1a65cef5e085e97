pub mod health;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::insights::handlers as insights;
use crate::profiles::handlers as profiles;
use crate::state::AppState;
use crate::storage::handlers as logs;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/domains", get(insights::handle_list_domains))
        // Health logs
        .route(
            "/api/v1/logs/:domain",
            get(logs::handle_list_entries)
                .post(logs::handle_create_entry)
                .delete(logs::handle_clear_entries),
        )
        .route(
            "/api/v1/logs/:domain/:entry_id",
            delete(logs::handle_delete_entry),
        )
        // Insights
        .route(
            "/api/v1/insights/:domain",
            post(insights::handle_generate_insights),
        )
        .route(
            "/api/v1/insights/:domain/entries/:entry_id",
            get(insights::handle_get_entry_insights),
        )
        // Profile
        .route(
            "/api/v1/profile",
            get(profiles::handle_get_profile).put(profiles::handle_upsert_profile),
        )
        .with_state(state)
}
