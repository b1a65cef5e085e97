use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// When unset, health logs live in process memory only.
    pub redis_url: Option<String>,
    pub anthropic_api_key: String,
    pub port: u16,
    pub rust_log: String,
    pub insights: InsightSettings,
}

/// Tuning knobs for the insight pipeline.
#[derive(Debug, Clone)]
pub struct InsightSettings {
    /// Delay awaited before every completion call to stay under provider rate limits.
    pub pacing_delay: Duration,
    /// Responses shorter than this many characters are treated as failures.
    pub min_response_chars: usize,
    /// A new analysis for the same (domain, user) is rejected inside this window.
    pub rate_limit_window: Duration,
    /// Number of entries preceding the latest one that are summarized in the prompt.
    pub history_window: usize,
}

impl Default for InsightSettings {
    fn default() -> Self {
        Self {
            pacing_delay: Duration::from_millis(1000),
            min_response_chars: 100,
            rate_limit_window: Duration::from_secs(10),
            history_window: 3,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = InsightSettings::default();
        let insights = InsightSettings {
            pacing_delay: Duration::from_millis(optional_env(
                "INSIGHT_PACING_MS",
                defaults.pacing_delay.as_millis() as u64,
            )?),
            min_response_chars: optional_env(
                "INSIGHT_MIN_RESPONSE_CHARS",
                defaults.min_response_chars,
            )?,
            rate_limit_window: Duration::from_secs(optional_env(
                "INSIGHT_RATE_LIMIT_SECS",
                defaults.rate_limit_window.as_secs(),
            )?),
            history_window: optional_env("INSIGHT_HISTORY_WINDOW", defaults.history_window)?,
        };

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            redis_url: std::env::var("REDIS_URL").ok().filter(|v| !v.trim().is_empty()),
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            port: optional_env("PORT", 8080u16)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            insights,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw}")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insight_defaults() {
        let s = InsightSettings::default();
        assert_eq!(s.min_response_chars, 100);
        assert_eq!(s.rate_limit_window, Duration::from_secs(10));
        assert_eq!(s.history_window, 3);
    }

    #[test]
    fn test_optional_env_falls_back_when_unset() {
        let v: usize = optional_env("HEALTHLOG_TEST_SURELY_UNSET_VAR", 42).unwrap();
        assert_eq!(v, 42);
    }
}
