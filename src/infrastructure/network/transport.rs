use crate::domain::error::{AppError, TransportError, TransportErrorKind};
use crate::infrastructure::network::http::{
    HttpBackend, HttpCall, HttpMethod, RawFailure, ReqwestBackend,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_RETRIES: u32 = 3;
const BACKOFF_BASE_MS: u64 = 100;

/// Defaults applied to every request sent through a [`Transport`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportConfig {
    pub timeout: Duration,
    pub retries: u32,
    pub proxy: Option<String>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            retries: DEFAULT_RETRIES,
            proxy: None,
        }
    }
}

/// Per-request overrides; unset fields fall back to the [`TransportConfig`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    pub timeout: Option<Duration>,
    pub retries: Option<u32>,
    pub proxy: Option<String>,
}

/// HTTP transport with bounded exponential-backoff retry.
///
/// Holds no per-request state, so one instance can be shared by any number
/// of concurrent callers.
pub struct Transport {
    backend: Arc<dyn HttpBackend>,
    config: TransportConfig,
}

impl Transport {
    pub fn new(config: TransportConfig) -> Result<Self, AppError> {
        let backend = ReqwestBackend::new(config.proxy.clone())?;
        Ok(Self::with_backend(config, Arc::new(backend)))
    }

    pub fn with_backend(config: TransportConfig, backend: Arc<dyn HttpBackend>) -> Self {
        Self { backend, config }
    }

    pub async fn get(&self, url: &str) -> Result<String, TransportError> {
        self.send(HttpMethod::Get, url, None, &RequestOptions::default())
            .await
    }

    /// Send a request, retrying retryable failures up to `retries` times.
    ///
    /// Waits `2^attempt * 100ms` between attempts. A non-retryable failure,
    /// or any failure on the last attempt, is converted and returned at once.
    pub async fn send(
        &self,
        method: HttpMethod,
        url: &str,
        body: Option<&serde_json::Value>,
        options: &RequestOptions,
    ) -> Result<String, TransportError> {
        let retries = options.retries.unwrap_or(self.config.retries);
        let call = HttpCall {
            method,
            url,
            body,
            timeout: options.timeout.unwrap_or(self.config.timeout),
            proxy: options
                .proxy
                .as_deref()
                .or(self.config.proxy.as_deref()),
        };

        let mut attempt: u32 = 0;
        loop {
            debug!("{:?} {} (attempt {}/{})", method, url, attempt + 1, retries + 1);

            let failure = match self.backend.execute(&call).await {
                Ok(body) => return Ok(body),
                Err(failure) => failure,
            };

            if !failure.is_retryable() || attempt >= retries {
                debug!("Giving up on {} after {} attempt(s): {}", url, attempt + 1, failure);
                return Err(convert_failure(failure));
            }

            let delay = backoff_delay(attempt);
            warn!(
                "Request to {} failed ({}), retrying in {}ms",
                url,
                failure,
                delay.as_millis()
            );
            tokio::time::sleep(delay).await;
            attempt += 1;
        }
    }
}

/// Wait before retry number `attempt + 1`: 100ms, 200ms, 400ms, ...
pub fn backoff_delay(attempt: u32) -> Duration {
    let factor = 1u64.checked_shl(attempt).unwrap_or(u64::MAX);
    Duration::from_millis(BACKOFF_BASE_MS.saturating_mul(factor))
}

/// Map a raw failure onto the fixed set of transport messages
pub fn convert_failure(failure: RawFailure) -> TransportError {
    let error = match &failure {
        RawFailure::Timeout(_) => {
            TransportError::new(TransportErrorKind::Timeout, "request timed out")
        }
        RawFailure::Resolve(_) => TransportError::new(
            TransportErrorKind::Resolve,
            "could not resolve service address",
        ),
        RawFailure::Connect(_) => {
            TransportError::new(TransportErrorKind::Connect, "could not connect to service")
        }
        RawFailure::Status { status, .. } => {
            let message = match status {
                400 => "invalid request".to_string(),
                429 => "rate limited, retry later".to_string(),
                500 | 502 | 503 | 504 => "service temporarily unavailable".to_string(),
                other => format!("request failed with status {}", other),
            };
            TransportError::http(*status, message)
        }
        RawFailure::Unknown(_) => TransportError::new(TransportErrorKind::Unknown, "unknown error"),
    };
    error.with_cause(failure)
}
