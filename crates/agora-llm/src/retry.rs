//! Transport-level retry wrapper for LLM providers
//!
//! The application layer never retries: a delivered-but-malformed payload is
//! handled where it is decoded. This wrapper only re-requests when the
//! transport itself failed (connection error, rate limit), up to a fixed
//! ceiling.

use async_trait::async_trait;
use std::time::Duration;

use crate::provider::{LlmError, LlmProvider, LlmRequest, LlmResponse};

/// Configuration for the retry wrapper
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Additional attempts after the first failure
    pub max_retries: u32,
    /// Pause between attempts
    pub backoff: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 2,
            backoff: Duration::from_millis(500),
        }
    }
}

/// Wraps any provider with a bounded transport-retry loop.
#[derive(Debug)]
pub struct RetryProvider<P: LlmProvider> {
    inner: P,
    config: RetryConfig,
}

impl<P: LlmProvider> RetryProvider<P> {
    /// Create a retry wrapper with an explicit config
    pub fn new(provider: P, config: RetryConfig) -> Self {
        Self {
            inner: provider,
            config,
        }
    }

    /// Create with the default ceiling (2 retries)
    pub fn wrap(provider: P) -> Self {
        Self::new(provider, RetryConfig::default())
    }
}

#[async_trait]
impl<P: LlmProvider + 'static> LlmProvider for RetryProvider<P> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn is_available(&self) -> bool {
        self.inner.is_available().await
    }

    async fn complete(&self, request: LlmRequest) -> Result<LlmResponse, LlmError> {
        let mut attempt = 0;
        loop {
            match self.inner.complete(request.clone()).await {
                Ok(response) => return Ok(response),
                Err(err) if err.is_transport() && attempt < self.config.max_retries => {
                    attempt += 1;
                    tracing::warn!(
                        provider = %self.inner.name(),
                        attempt,
                        max_retries = self.config.max_retries,
                        error = %err,
                        "transport failure, retrying"
                    );
                    tokio::time::sleep(self.config.backoff).await;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    /// Fails with a transport error N times, then succeeds.
    #[derive(Debug)]
    struct Flaky {
        failures: u32,
        calls: AtomicU32,
    }

    #[async_trait]
    impl LlmProvider for Flaky {
        fn name(&self) -> &str {
            "flaky"
        }

        async fn is_available(&self) -> bool {
            true
        }

        async fn complete(&self, _request: LlmRequest) -> Result<LlmResponse, LlmError> {
            let call = self.calls.fetch_add(1, Ordering::Relaxed);
            if call < self.failures {
                return Err(LlmError::ConnectionFailed("boom".to_string()));
            }
            Ok(LlmResponse {
                content: "ok".to_string(),
                model: "flaky".to_string(),
                tokens_used: None,
                latency_ms: 0,
            })
        }
    }

    /// Always returns a malformed-content error.
    #[derive(Debug)]
    struct BadPayload {
        calls: AtomicU32,
    }

    #[async_trait]
    impl LlmProvider for BadPayload {
        fn name(&self) -> &str {
            "bad-payload"
        }

        async fn is_available(&self) -> bool {
            true
        }

        async fn complete(&self, _request: LlmRequest) -> Result<LlmResponse, LlmError> {
            self.calls.fetch_add(1, Ordering::Relaxed);
            Err(LlmError::InvalidResponse("not a payload".to_string()))
        }
    }

    fn quick_config() -> RetryConfig {
        RetryConfig {
            max_retries: 2,
            backoff: Duration::from_millis(1),
        }
    }

    #[tokio::test]
    async fn retries_transport_failures_up_to_ceiling() {
        let provider = RetryProvider::new(
            Flaky {
                failures: 2,
                calls: AtomicU32::new(0),
            },
            quick_config(),
        );
        let response = provider.complete(LlmRequest::simple("hi")).await.unwrap();
        assert_eq!(response.content, "ok");
    }

    #[tokio::test]
    async fn gives_up_past_the_ceiling() {
        let provider = RetryProvider::new(
            Flaky {
                failures: 5,
                calls: AtomicU32::new(0),
            },
            quick_config(),
        );
        let err = provider.complete(LlmRequest::simple("hi")).await.unwrap_err();
        assert!(matches!(err, LlmError::ConnectionFailed(_)));
        assert_eq!(provider.inner.calls.load(Ordering::Relaxed), 3);
    }

    #[tokio::test]
    async fn never_retries_content_errors() {
        let provider = RetryProvider::new(
            BadPayload {
                calls: AtomicU32::new(0),
            },
            quick_config(),
        );
        let err = provider.complete(LlmRequest::simple("hi")).await.unwrap_err();
        assert!(matches!(err, LlmError::InvalidResponse(_)));
        assert_eq!(provider.inner.calls.load(Ordering::Relaxed), 1);
    }
}
