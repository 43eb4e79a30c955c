//! The string sender: one request, one response, one verdict.
//!
//! # Design
//! `StringService` owns its transport and nothing else, so concurrent sends
//! on one instance never share mutable state. Each send builds a fresh
//! `HttpRequest`, awaits the transport exactly once and checks the status.
//! Nothing is retried.

use http::Uri;
use tracing::{debug, warn};

use crate::error::StringServiceError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport::{Transport, UreqTransport};
use crate::types::{save_string_body, CONTENT_TYPE_JSON, ENDPOINT};

/// Sends strings to the fixed save-string endpoint.
///
/// ```ignore
/// let service = StringService::new();
/// service.send_string("hello").await?;
/// ```
#[derive(Debug, Clone)]
pub struct StringService<T = UreqTransport> {
    transport: T,
}

impl StringService {
    /// A service backed by the default production transport.
    pub fn new() -> Self {
        Self::with_transport(UreqTransport::new())
    }
}

impl Default for StringService {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> StringService<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Build the request `send_string` would issue for `value`, without
    /// sending it.
    pub fn build_request(&self, value: &str) -> Result<HttpRequest, StringServiceError<T::Error>> {
        build_request_for(ENDPOINT, value)
    }

    /// POST `{"myString": value}` to the endpoint.
    ///
    /// Succeeds only when the server answers 200. Transport failures come
    /// back as `StringServiceError::Transport` holding the transport's error
    /// as-is.
    pub async fn send_string(&self, value: &str) -> Result<(), StringServiceError<T::Error>> {
        let request = self.build_request(value)?;
        debug!(url = %request.url, body_len = request.body.len(), "sending string");

        let response = self.transport.execute(request).await.map_err(|err| {
            warn!(error = %err, "transport failed");
            StringServiceError::Transport(err)
        })?;

        check_status::<T::Error>(&response)?;
        debug!("string accepted");
        Ok(())
    }
}

fn build_request_for<E>(url: &str, value: &str) -> Result<HttpRequest, StringServiceError<E>> {
    if !is_valid_endpoint(url) {
        return Err(StringServiceError::InvalidUrl);
    }
    Ok(HttpRequest {
        method: HttpMethod::Post,
        url: url.to_string(),
        headers: vec![("content-type".to_string(), CONTENT_TYPE_JSON.to_string())],
        body: save_string_body(value),
    })
}

/// An absolute http(s) URL with a host.
fn is_valid_endpoint(url: &str) -> bool {
    let Ok(uri) = url.parse::<Uri>() else {
        return false;
    };
    matches!(uri.scheme_str(), Some("http" | "https")) && uri.host().is_some_and(|host| !host.is_empty())
}

fn check_status<E>(response: &HttpResponse) -> Result<(), StringServiceError<E>> {
    if response.is_ok() {
        return Ok(());
    }
    warn!(status = response.status, "unexpected response status");
    Err(StringServiceError::InvalidResponse {
        status: response.status,
    })
}
