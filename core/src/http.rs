//! HTTP request/response types exchanged with a `Transport`.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The
//! service builds an `HttpRequest`, hands it to whatever `Transport` it was
//! given, and reads the status of the returned `HttpResponse`. Nothing here
//! touches the network, so a test double can fabricate responses freely.
//!
//! All fields use owned types (`String`, `Vec`) so a request can be moved into
//! a blocking task or recorded by a double without lifetime concerns.

/// HTTP method for a request. The service only ever issues `Post`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Post,
}

impl HttpMethod {
    /// The method token as it appears on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Post => "POST",
        }
    }
}

/// An HTTP request described as plain data.
///
/// Built by `StringService::build_request`. Header names are lower-case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpRequest {
    /// Case-insensitive lookup of the first header named `name`.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// An HTTP response described as plain data.
///
/// Only `status` drives the service's decision; headers and body are kept so
/// transports and doubles can report what they actually received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// A response with the given status and nothing else.
    pub fn with_status(status: u16) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    /// True only for status 200. Other 2xx codes are not accepted.
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}
