// HTTP client utilities
use crate::domain::error::AppError;
use async_trait::async_trait;
use reqwest::{Client, Proxy};
use std::error::Error as StdError;
use std::time::Duration;
use thiserror::Error;

const USER_AGENT: &str = concat!("polyglot/", env!("CARGO_PKG_VERSION"));

/// Create an HTTP client with appropriate settings
pub fn create_client(proxy: Option<&str>) -> Result<Client, AppError> {
    let mut builder = Client::builder()
        .pool_max_idle_per_host(10)
        .pool_idle_timeout(Duration::from_secs(30))
        .user_agent(USER_AGENT);

    if let Some(proxy) = proxy.filter(|p| !p.is_empty()) {
        builder = builder.proxy(Proxy::all(proxy)?);
    }

    Ok(builder.build()?)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
        }
    }
}

/// One attempt of a request, with options already resolved.
#[derive(Debug, Clone)]
pub struct HttpCall<'a> {
    pub method: HttpMethod,
    pub url: &'a str,
    pub body: Option<&'a serde_json::Value>,
    pub timeout: Duration,
    pub proxy: Option<&'a str>,
}

/// Raw outcome of a failed attempt, before it is turned into a `TransportError`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RawFailure {
    #[error("timed out: {0}")]
    Timeout(String),

    #[error("dns lookup failed: {0}")]
    Resolve(String),

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("{0}")]
    Unknown(String),
}

impl RawFailure {
    /// No response at all, a server error, or rate limiting.
    pub fn is_retryable(&self) -> bool {
        match self {
            RawFailure::Timeout(_) | RawFailure::Resolve(_) | RawFailure::Connect(_) => true,
            RawFailure::Status { status, .. } => *status >= 500 || *status == 429,
            RawFailure::Unknown(_) => false,
        }
    }

    pub fn from_reqwest(err: &reqwest::Error) -> Self {
        let detail = error_chain(err);

        if err.is_timeout() {
            return RawFailure::Timeout(detail);
        }
        if let Some(status) = err.status() {
            return RawFailure::Status {
                status: status.as_u16(),
                body: String::new(),
            };
        }
        // the connection dropped while the body was still arriving
        if err.is_body() || err.is_decode() {
            return RawFailure::Connect(detail);
        }
        if err.is_connect() || err.is_request() {
            let lowered = detail.to_lowercase();
            if ["dns", "lookup", "resolve", "name or service not known"]
                .iter()
                .any(|needle| lowered.contains(needle))
            {
                return RawFailure::Resolve(detail);
            }
            return RawFailure::Connect(detail);
        }
        RawFailure::Unknown(detail)
    }
}

// reqwest hides the interesting part (hyper / io / dns) in the source chain
fn error_chain(err: &reqwest::Error) -> String {
    let mut parts = vec![err.to_string()];
    let mut source = err.source();
    while let Some(inner) = source {
        parts.push(inner.to_string());
        source = inner.source();
    }
    parts.join(": ")
}

/// Performs a single HTTP attempt. Retries are the caller's business.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    async fn execute(&self, call: &HttpCall<'_>) -> Result<String, RawFailure>;
}

/// `reqwest` implementation of [`HttpBackend`]
pub struct ReqwestBackend {
    client: Client,
    proxy: Option<String>,
}

impl ReqwestBackend {
    pub fn new(proxy: Option<String>) -> Result<Self, AppError> {
        let client = create_client(proxy.as_deref())?;
        Ok(Self { client, proxy })
    }

    // A call asking for a different proxy than the shared client gets its own client
    fn client_for(&self, proxy: Option<&str>) -> Result<Client, RawFailure> {
        if proxy == self.proxy.as_deref() {
            return Ok(self.client.clone());
        }
        create_client(proxy).map_err(|e| RawFailure::Unknown(e.to_string()))
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn execute(&self, call: &HttpCall<'_>) -> Result<String, RawFailure> {
        let client = self.client_for(call.proxy)?;

        let mut request = client
            .request(call.method.into(), call.url)
            .timeout(call.timeout);
        if let Some(body) = call.body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| RawFailure::from_reqwest(&e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RawFailure::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .text()
            .await
            .map_err(|e| RawFailure::from_reqwest(&e))
    }
}
