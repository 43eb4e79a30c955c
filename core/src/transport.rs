//! The transport capability and its production adapter.
//!
//! # Design
//! `Transport` is the only seam between the service and the network: given a
//! fully formed `HttpRequest`, produce an `HttpResponse` or fail. Tests plug
//! in a double; production code uses `UreqTransport`.
//!
//! `UreqTransport` wraps a `ureq::Agent`. ureq is blocking, so each request
//! runs on tokio's blocking pool and the caller sees a single await point.
//! The agent is configured with `http_status_as_error(false)` so 4xx/5xx come
//! back as data and the service decides what counts as success.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tokio::task::JoinError;
use ureq::Agent;

use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Executes one HTTP request.
///
/// Implementations must be safe to share between concurrent calls; the
/// service never retries and never calls `execute` more than once per send.
#[async_trait]
pub trait Transport: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, Self::Error>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    type Error = T::Error;

    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, Self::Error> {
        (**self).execute(request).await
    }
}

#[async_trait]
impl<'a, T: Transport + ?Sized> Transport for &'a T {
    type Error = T::Error;

    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, Self::Error> {
        (**self).execute(request).await
    }
}

/// Errors produced by `UreqTransport`.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection, TLS, protocol or body-read failure reported by ureq.
    #[error("HTTP transport failed: {0}")]
    Http(#[from] ureq::Error),

    /// The blocking task running the request panicked or was cancelled.
    #[error("transport task did not complete: {0}")]
    Join(#[from] JoinError),
}

/// Timeouts applied to the production agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportConfig {
    pub connect_timeout: Option<Duration>,
    pub global_timeout: Option<Duration>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Some(Duration::from_secs(10)),
            global_timeout: Some(Duration::from_secs(30)),
        }
    }
}

/// Production transport backed by a shared `ureq::Agent`.
///
/// Must be used from within a tokio runtime. Connection pooling and
/// keep-alive are handled by the agent; cloning is cheap.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        Self::with_config(TransportConfig::default())
    }

    pub fn with_config(config: TransportConfig) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_connect(config.connect_timeout)
            .timeout_global(config.global_timeout)
            .http_status_as_error(false)
            .build()
            .into();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for UreqTransport {
    type Error = TransportError;

    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, Self::Error> {
        let agent = self.agent.clone();
        let response = tokio::task::spawn_blocking(move || execute_blocking(&agent, request)).await??;
        Ok(response)
    }
}

fn execute_blocking(agent: &Agent, request: HttpRequest) -> Result<HttpResponse, ureq::Error> {
    let mut builder = match request.method {
        HttpMethod::Post => agent.post(request.url.as_str()),
    };
    for (name, value) in &request.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }

    let mut response = builder.send(request.body.as_bytes())?;

    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|value| (name.as_str().to_string(), value.to_string()))
        })
        .collect();
    let body = response.body_mut().read_to_vec()?;

    Ok(HttpResponse {
        status,
        headers,
        body,
    })
}
