//! Insight pipeline: build prompt → request → extract → compose, with fallback on any failure.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::config::InsightSettings;
use crate::insights::composer::{compose_fallback, compose_from_model};
use crate::insights::domains::DomainConfig;
use crate::insights::extractor::extract_sections;
use crate::insights::prompt_builder::build_prompt;
use crate::insights::requester::InsightRequester;
use crate::llm_client::TextCompletion;
use crate::models::{HealthLogEntry, InsightResult, UserProfile};

pub struct InsightPipeline {
    requester: InsightRequester,
    history_window: usize,
}

impl InsightPipeline {
    pub fn new(client: Arc<dyn TextCompletion>, settings: &InsightSettings) -> Self {
        Self {
            requester: InsightRequester::new(client, settings),
            history_window: settings.history_window,
        }
    }

    pub fn history_window(&self) -> usize {
        self.history_window
    }

    /// Always returns a usable result. `history` is the entries preceding `latest`, oldest first;
    /// only the last `history_window` of them are summarized.
    pub async fn run(
        &self,
        config: &DomainConfig,
        latest: &HealthLogEntry,
        history: &[HealthLogEntry],
        profile: &UserProfile,
        generated_at: DateTime<Utc>,
    ) -> InsightResult {
        let start = history.len().saturating_sub(self.history_window);
        let prompt = build_prompt(config, latest, &history[start..], profile);

        let raw = match self.requester.request(&prompt).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(domain = %config.domain, entry_id = %latest.id, "Using fallback insights: {e}");
                return compose_fallback(config, latest, generated_at);
            }
        };

        let sections = extract_sections(&raw, config.sections);
        if sections.is_empty() {
            warn!(
                domain = %config.domain,
                entry_id = %latest.id,
                "No usable sections in completion, using fallback insights"
            );
            return compose_fallback(config, latest, generated_at);
        }

        info!(
            domain = %config.domain,
            entry_id = %latest.id,
            sections = sections.len(),
            "Insights generated from completion"
        );
        compose_from_model(config, latest, sections, raw, generated_at)
    }
}
