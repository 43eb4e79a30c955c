//! Test double for the transport seam.

#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use string_service::{HttpRequest, HttpResponse, Transport};
use thiserror::Error;

/// Error a `MockTransport` can be programmed to raise.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("mock transport failure: {0}")]
pub struct MockError(pub String);

/// Returns a programmed response (or error) and records every request.
///
/// With nothing programmed it answers 200 with an empty body.
#[derive(Default)]
pub struct MockTransport {
    next_response: Mutex<Option<HttpResponse>>,
    next_error: Mutex<Option<MockError>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn responding(status: u16) -> Self {
        let mock = Self::new();
        mock.set_response(HttpResponse::with_status(status));
        mock
    }

    pub fn failing(message: &str) -> Self {
        let mock = Self::new();
        *mock.next_error.lock().unwrap() = Some(MockError(message.to_string()));
        mock
    }

    pub fn set_response(&self, response: HttpResponse) {
        *self.next_response.lock().unwrap() = Some(response);
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for MockTransport {
    type Error = MockError;

    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, MockError> {
        self.requests.lock().unwrap().push(request);
        if let Some(err) = self.next_error.lock().unwrap().clone() {
            return Err(err);
        }
        Ok(self
            .next_response
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| HttpResponse::with_status(200)))
    }
}
