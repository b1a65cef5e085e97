//! Insight Requester — one paced completion call per prompt.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, warn};

use crate::config::InsightSettings;
use crate::llm_client::{LlmError, TextCompletion};

/// Why a completion could not be used. Every variant sends the pipeline down the fallback path.
#[derive(Debug, Error)]
pub enum RequestFailure {
    #[error("completion call failed: {0}")]
    Call(#[from] LlmError),

    #[error("completion was empty")]
    Empty,

    #[error("completion too short ({len} chars, need {min})")]
    TooShort { len: usize, min: usize },
}

pub struct InsightRequester {
    client: Arc<dyn TextCompletion>,
    pacing_delay: Duration,
    min_chars: usize,
}

impl InsightRequester {
    pub fn new(client: Arc<dyn TextCompletion>, settings: &InsightSettings) -> Self {
        Self {
            client,
            pacing_delay: settings.pacing_delay,
            min_chars: settings.min_response_chars,
        }
    }

    /// Waits out the pacing delay, then makes exactly one call.
    pub async fn request(&self, prompt: &str) -> Result<String, RequestFailure> {
        if !self.pacing_delay.is_zero() {
            tokio::time::sleep(self.pacing_delay).await;
        }

        debug!(prompt_chars = prompt.len(), "Requesting insight completion");

        let text = self.client.generate(prompt).await.map_err(|e| {
            warn!("Insight completion failed: {e}");
            RequestFailure::from(e)
        })?;

        let len = text.trim().chars().count();
        if len == 0 {
            warn!("Insight completion returned no text");
            return Err(RequestFailure::Empty);
        }
        if len < self.min_chars {
            warn!(len, min = self.min_chars, "Insight completion too short");
            return Err(RequestFailure::TooShort {
                len,
                min: self.min_chars,
            });
        }

        debug!(response_chars = len, "Insight completion received");
        Ok(text)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::llm_client::{LlmError, TextCompletion};

    /// Plays back queued responses in order and records every prompt it receives.
    /// Once the queue is exhausted every call fails.
    #[derive(Default)]
    pub struct ScriptedCompletion {
        responses: Mutex<VecDeque<Result<String, LlmError>>>,
        prompts: Mutex<Vec<String>>,
    }

    impl ScriptedCompletion {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn replying(text: &str) -> Self {
            let s = Self::new();
            s.push_text(text);
            s
        }

        pub fn failing() -> Self {
            let s = Self::new();
            s.push_error(LlmError::Api {
                status: 503,
                message: "unavailable".into(),
            });
            s
        }

        pub fn push_text(&self, text: &str) {
            self.responses
                .lock()
                .unwrap()
                .push_back(Ok(text.to_string()));
        }

        pub fn push_error(&self, error: LlmError) {
            self.responses.lock().unwrap().push_back(Err(error));
        }

        pub fn calls(&self) -> usize {
            self.prompts.lock().unwrap().len()
        }

        pub fn last_prompt(&self) -> Option<String> {
            self.prompts.lock().unwrap().last().cloned()
        }
    }

    #[async_trait]
    impl TextCompletion for ScriptedCompletion {
        async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err(LlmError::EmptyContent))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::ScriptedCompletion;
    use super::*;

    fn settings(pacing_ms: u64) -> InsightSettings {
        InsightSettings {
            pacing_delay: Duration::from_millis(pacing_ms),
            ..InsightSettings::default()
        }
    }

    #[tokio::test]
    async fn test_returns_long_enough_text() {
        let text = "x".repeat(150);
        let client = Arc::new(ScriptedCompletion::replying(&text));
        let requester = InsightRequester::new(client.clone(), &settings(0));

        assert_eq!(requester.request("prompt").await.unwrap(), text);
        assert_eq!(client.last_prompt().as_deref(), Some("prompt"));
    }

    #[tokio::test]
    async fn test_short_text_is_a_failure() {
        let client = Arc::new(ScriptedCompletion::replying("Too short."));
        let requester = InsightRequester::new(client, &settings(0));

        let err = requester.request("prompt").await.unwrap_err();
        assert!(matches!(err, RequestFailure::TooShort { len: 10, min: 100 }));
    }

    #[tokio::test]
    async fn test_blank_text_is_empty() {
        let client = Arc::new(ScriptedCompletion::replying("   \n "));
        let requester = InsightRequester::new(client, &settings(0));
        assert!(matches!(
            requester.request("p").await.unwrap_err(),
            RequestFailure::Empty
        ));
    }

    #[tokio::test]
    async fn test_call_error_is_not_retried() {
        let client = Arc::new(ScriptedCompletion::failing());
        client.push_text(&"y".repeat(200));
        let requester = InsightRequester::new(client.clone(), &settings(0));

        assert!(matches!(
            requester.request("p").await.unwrap_err(),
            RequestFailure::Call(_)
        ));
        assert_eq!(client.calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pacing_delay_is_awaited_before_call() {
        let client = Arc::new(ScriptedCompletion::replying(&"z".repeat(120)));
        let requester = InsightRequester::new(client, &settings(1000));

        let started = tokio::time::Instant::now();
        requester.request("p").await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(1000));
    }
}
