mod config;
mod db;
mod errors;
mod insights;
mod llm_client;
mod models;
mod profiles;
mod routes;
mod state;
mod storage;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::insights::guard::AnalysisGuard;
use crate::insights::pipeline::InsightPipeline;
use crate::llm_client::LlmClient;
use crate::profiles::PgProfileStore;
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::{LogBook, LogStore, MemoryLogStore, RedisLogStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting HealthLog API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL (user profiles)
    let db = create_pool(&config.database_url).await?;

    // Initialize log store
    let store: Arc<dyn LogStore> = match &config.redis_url {
        Some(url) => Arc::new(RedisLogStore::connect(url).await?),
        None => {
            warn!("REDIS_URL not set, health logs are kept in memory and lost on restart");
            Arc::new(MemoryLogStore::new())
        }
    };

    // Initialize LLM client
    let llm = LlmClient::new(config.anthropic_api_key.clone())?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let settings = &config.insights;
    info!(
        "Insight settings: pacing={}ms min_chars={} rate_limit={}s history={}",
        settings.pacing_delay.as_millis(),
        settings.min_response_chars,
        settings.rate_limit_window.as_secs(),
        settings.history_window
    );

    let state = AppState {
        logbook: LogBook::new(store),
        profiles: Arc::new(PgProfileStore::new(db)),
        pipeline: Arc::new(InsightPipeline::new(Arc::new(llm), settings)),
        guard: Arc::new(AnalysisGuard::new(settings.rate_limit_window)),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the web client domain is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
