use std::sync::Arc;

use crate::insights::guard::AnalysisGuard;
use crate::insights::pipeline::InsightPipeline;
use crate::profiles::ProfileStore;
use crate::storage::LogBook;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub logbook: LogBook,
    /// Postgres in production, in-memory in tests.
    pub profiles: Arc<dyn ProfileStore>,
    pub pipeline: Arc<InsightPipeline>,
    /// Per-(domain, user) rate limit and unchanged-data check for insight runs.
    pub guard: Arc<AnalysisGuard>,
}

#[cfg(test)]
impl AppState {
    /// In-memory stores, no pacing delay, and the given completion client.
    pub fn for_tests(client: Arc<dyn crate::llm_client::TextCompletion>) -> Self {
        use crate::config::InsightSettings;
        use crate::profiles::testing::MemoryProfileStore;
        use crate::storage::MemoryLogStore;

        let settings = InsightSettings {
            pacing_delay: std::time::Duration::ZERO,
            ..InsightSettings::default()
        };
        Self {
            logbook: LogBook::new(Arc::new(MemoryLogStore::new())),
            profiles: Arc::new(MemoryProfileStore::default()),
            pipeline: Arc::new(InsightPipeline::new(client, &settings)),
            guard: Arc::new(AnalysisGuard::new(settings.rate_limit_window)),
        }
    }
}
