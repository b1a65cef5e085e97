//! Per-(domain, user) analysis guard.
//!
//! Remembers the last analysis for each key: when it finished, the data hash it analyzed and the
//! result. Re-analyzing the same data inside the rate-limit window is rejected; outside it, the
//! remembered result is reused instead of calling the model again. Different data always proceeds.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use tokio::time::Instant;

use crate::models::InsightResult;

/// Runs older than this (or the rate-limit window, if longer) are forgotten.
pub const RUN_RETENTION: Duration = Duration::from_secs(24 * 60 * 60);

#[derive(Debug, Clone, PartialEq)]
pub enum GuardDecision {
    Proceed,
    /// The last analysis for this key used the same data; its result can be reused.
    Unchanged { insights: Box<InsightResult> },
    RateLimited { retry_after: Duration },
}

struct LastRun {
    completed_at: Instant,
    data_hash: String,
    insights: InsightResult,
}

pub struct AnalysisGuard {
    window: Duration,
    retention: Duration,
    runs: Mutex<HashMap<String, LastRun>>,
}

impl AnalysisGuard {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            retention: window.max(RUN_RETENTION),
            runs: Mutex::new(HashMap::new()),
        }
    }

    pub fn check(&self, key: &str, data_hash: &str) -> GuardDecision {
        let runs = self.runs.lock().unwrap_or_else(|e| e.into_inner());
        let Some(last) = runs.get(key) else {
            return GuardDecision::Proceed;
        };
        if last.data_hash != data_hash {
            return GuardDecision::Proceed;
        }

        let elapsed = last.completed_at.elapsed();
        if elapsed < self.window {
            return GuardDecision::RateLimited {
                retry_after: self.window - elapsed,
            };
        }
        if elapsed >= self.retention {
            return GuardDecision::Proceed;
        }
        GuardDecision::Unchanged {
            insights: Box::new(last.insights.clone()),
        }
    }

    /// Stores the run for `key` and drops runs past the retention period.
    pub fn record(&self, key: &str, data_hash: &str, insights: &InsightResult) {
        let mut runs = self.runs.lock().unwrap_or_else(|e| e.into_inner());
        runs.retain(|_, run| run.completed_at.elapsed() < self.retention);
        runs.insert(
            key.to_string(),
            LastRun {
                completed_at: Instant::now(),
                data_hash: data_hash.to_string(),
                insights: insights.clone(),
            },
        );
    }

    #[cfg(test)]
    fn tracked(&self) -> usize {
        self.runs.lock().unwrap().len()
    }
}
